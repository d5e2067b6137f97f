//! Result rendering: pipeline, retained screen state, and the console template.

pub mod console;
pub mod pipeline;
pub mod screen;
pub mod view;

pub use pipeline::render;
pub use screen::Screen;
pub use view::*;
