use crate::shared::response::types::Response;

/// A trait that defines how to serialize a `Response` for a given output.
pub trait Renderer: Send + Sync {
    fn render(&self, response: &Response) -> Vec<u8>;
}
