use crate::shared::response::render::Renderer;
use crate::shared::response::types::Response;
use serde::Serialize;
use serde_json::Value;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonResponse<'a> {
    status: u16,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Value>,
}

impl Renderer for JsonRenderer {
    fn render(&self, response: &Response) -> Vec<u8> {
        let wrapped = JsonResponse {
            status: response.status.code(),
            message: &response.message,
            result: response.body.as_ref(),
        };
        let mut out = serde_json::to_vec_pretty(&wrapped).unwrap_or_else(|_| {
            br#"{"status":500,"message":"Failed to serialize response"}"#.to_vec()
        });
        out.push(b'\n');
        out
    }
}
