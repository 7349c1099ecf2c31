use crate::dealer::Dealer;
use crate::hand::HandError;
use crate::showdown::{Round, Seat, Verdict};

/// One finished round, as kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundRecord {
    pub number: usize,
    pub round: Round,
    pub verdict: Verdict,
}

/// Running tally of verdicts across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub black: usize,
    pub white: usize,
    pub ties: usize,
}

/// A dealing session: deals rounds, settles them and keeps their history.
#[derive(Debug, Clone)]
pub struct Game {
    dealer: Dealer,
    history: Vec<RoundRecord>,
    tally: Tally,
}

impl Game {
    pub fn new(dealer: Dealer) -> Self {
        Self { dealer, history: Vec::new(), tally: Tally::default() }
    }

    pub fn seed(&self) -> u64 {
        self.dealer.seed()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// The most recently settled round.
    pub fn current(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Deal a round, settle it and record it.
    pub fn new_round(&mut self) -> Result<RoundRecord, HandError> {
        let round = self.dealer.deal_round()?;
        let verdict = round.verdict();
        match verdict.winner {
            Some(Seat::Black) => self.tally.black += 1,
            Some(Seat::White) => self.tally.white += 1,
            None => self.tally.ties += 1,
        }
        let record = RoundRecord { number: self.history.len() + 1, round, verdict };
        log::info!("round {}: {verdict}", record.number);
        self.history.push(record);
        Ok(record)
    }

    pub fn history_recent(&self, n: usize) -> Vec<RoundRecord> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<RoundRecord> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_are_numbered_and_tallied() {
        let mut game = Game::new(Dealer::seeded(3));
        assert!(game.current().is_none());
        for i in 1..=10 {
            let record = game.new_round().unwrap();
            assert_eq!(record.number, i);
            assert_eq!(record.verdict, record.round.verdict());
        }
        let t = game.tally();
        assert_eq!(t.black + t.white + t.ties, 10);
        assert_eq!(game.current().map(|r| r.number), Some(10));
    }

    #[test]
    fn history_paging() {
        let mut game = Game::new(Dealer::seeded(5));
        for _ in 0..7 {
            game.new_round().unwrap();
        }
        assert_eq!(game.history_len(), 7);
        let recent: Vec<usize> = game.history_recent(3).iter().map(|r| r.number).collect();
        assert_eq!(recent, vec![5, 6, 7]);
        let older: Vec<usize> =
            game.history_recent_offset(3, 2).iter().map(|r| r.number).collect();
        assert_eq!(older, vec![3, 4, 5]);
        // offset is clamped so a full page is always shown
        let oldest: Vec<usize> =
            game.history_recent_offset(3, 100).iter().map(|r| r.number).collect();
        assert_eq!(oldest, vec![1, 2, 3]);
        assert!(game.history_recent(0).is_empty());
    }
}
