use crate::cards::Value;

/// Groups values by their frequency in a hand, sorted by (count desc, weight desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Value, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a count array indexed by weight (2-14).
    pub fn from_counts(value_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for value in Value::ALL.iter().copied() {
            let count = value_counts[value.weight() as usize];
            if count > 0 {
                groups.push((value, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    pub fn quad(&self) -> Option<Value> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(value, _)| *value)
    }

    pub fn trips(&self) -> Option<Value> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(value, _)| *value)
    }

    /// All pair values, highest first.
    pub fn pairs(&self) -> Vec<Value> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(value, _)| *value).collect()
    }

    /// Every value repeated by its count, in group order. For five cards this is always five
    /// entries: AAAKQ expands to [A, A, A, K, Q].
    pub fn expanded(&self) -> [Value; 5] {
        let mut out = [Value::Overflow; 5];
        let repeated = self
            .groups
            .iter()
            .flat_map(|&(value, count)| std::iter::repeat(value).take(count.into()));
        for (slot, value) in out.iter_mut().zip(repeated) {
            *slot = value;
        }
        out
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Value, u8)] {
        &self.groups
    }
}
