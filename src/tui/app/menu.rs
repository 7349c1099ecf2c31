use crate::config::ShowdownConfig;
use crate::game::Game;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    SeedMode,
    Seed,
    RankCodes,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::SeedMode, MenuItem::Seed, MenuItem::RankCodes];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::SeedMode => {
                format!("Seed Mode: {}", if app.cfg_fixed_seed { "Fixed" } else { "Random" })
            }
            MenuItem::Seed => {
                if app.cfg_fixed_seed {
                    format!("Seed: {}", app.cfg_seed)
                } else {
                    format!("Seed: {} (unused)", app.cfg_seed)
                }
            }
            MenuItem::RankCodes => {
                format!("Rank Codes: {}", if app.cfg_show_codes { "Shown" } else { "Hidden" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::SeedMode => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.saturating_add(1),
            MenuItem::RankCodes => app.cfg_show_codes = !app.cfg_show_codes,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::SeedMode => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.saturating_sub(1),
            MenuItem::RankCodes => app.cfg_show_codes = !app.cfg_show_codes,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_fixed_seed = self.config.seed.is_some();
        // A random session offers its own seed, so it can be pinned and replayed.
        self.cfg_seed = self.config.seed.unwrap_or_else(|| self.game.seed());
        self.cfg_show_codes = self.config.show_codes;
        self.scene = super::Scene::Menu;
    }

    /// Replace the live config and start a fresh session with a reseeded dealer.
    pub fn apply_menu(&mut self) {
        let seed = self.cfg_fixed_seed.then_some(self.cfg_seed);
        self.config = ShowdownConfig::new(seed, self.cfg_show_codes);
        self.game = Game::new(self.config.dealer());
        self.cfg_seed = self.game.seed();
        log::info!("session started with seed {} ({:?})", self.game.seed(), self.config);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
