use crate::shared::response::render::Renderer;
use crate::shared::response::types::Response;
use serde_json::to_writer;

pub struct UnixRenderer;

impl Renderer for UnixRenderer {
    fn render(&self, response: &Response) -> Vec<u8> {
        let mut output = Vec::new();

        // Header line: 200 OK
        output.extend_from_slice(
            format!("{} {}\n", response.status.code(), response.message).as_bytes(),
        );

        if let Some(body) = &response.body {
            if to_writer(&mut output, body).is_err() {
                output.extend_from_slice(b"<invalid json>");
            }
            output.push(b'\n');
        }

        output
    }
}
