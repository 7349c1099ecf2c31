use crate::config::ShowdownConfig;
use crate::game::{Game, RoundRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Deal,
    ToggleCodes,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    pub config: ShowdownConfig,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_fixed_seed: bool,
    pub cfg_seed: u64,
    pub cfg_show_codes: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    deal_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ShowdownConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;

    pub fn new(config: ShowdownConfig) -> Self {
        let game = Game::new(config.dealer());
        Self {
            scene: Scene::Menu,
            cfg_fixed_seed: config.seed.is_some(),
            cfg_seed: game.seed(),
            cfg_show_codes: config.show_codes,
            game,
            config,
            menu_index: 0,
            help_open: false,
            history_open: false,
            history_offset: 0,
            deal_error: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
        self.history_offset = 0;
    }

    pub fn deal_error(&self) -> Option<&str> {
        self.deal_error.as_deref()
    }

    pub fn show_codes(&self) -> bool {
        self.config.show_codes
    }

    pub fn current(&self) -> Option<&RoundRecord> {
        self.game.current()
    }

    /// Returns true when the action changed what a round shows (a new deal).
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.scene == Scene::Table && self.deal(),
            InputAction::ToggleCodes => {
                if self.scene == Scene::Table {
                    self.config.show_codes = !self.config.show_codes;
                }
                false
            }
        }
    }

    pub fn deal(&mut self) -> bool {
        match self.game.new_round() {
            Ok(_) => {
                self.history_offset = 0;
                self.deal_error = None;
                true
            }
            Err(e) => {
                log::error!("deal failed: {e}");
                self.deal_error = Some(e.to_string());
                false
            }
        }
    }
}
