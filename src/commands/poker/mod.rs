pub mod game;
pub mod run;
pub mod score;
pub mod state;
mod ui;
