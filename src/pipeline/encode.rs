use base64::{Engine as _, engine::general_purpose};

/// Encode the UTF-8 bytes of `text` as standard, unwrapped Base64.
pub fn encode_base64(text: &str) -> String {
  general_purpose::STANDARD.encode(text.as_bytes())
}
