pub mod renderer;
pub mod result;
pub mod view_models;
pub mod views;

pub use renderer::ConsoleRenderer;
pub use result::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
