pub mod json;
pub mod render;
pub mod types;
pub mod unix;

pub use types::{Response, StatusCode};

pub use json::JsonRenderer;
pub use render::Renderer;
pub use unix::UnixRenderer;
