//! Terminal front end: an interactive table that deals and settles rounds.

pub mod app;
pub mod controller;
pub mod ui;
