//! Application state and screen coordination

pub mod screen;

pub use screen::{AppCoordinator, MenuOption, Screen};
