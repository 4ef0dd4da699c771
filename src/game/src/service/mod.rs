pub mod display;
pub mod game;
