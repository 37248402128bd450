pub mod game;
pub mod run;
pub mod state;
mod ui;
