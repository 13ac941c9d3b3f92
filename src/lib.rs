pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod projection;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod timer;
