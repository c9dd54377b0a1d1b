use std::io::Read;

use brotli::Decompressor;

use crate::fetch::RawBody;

/// `Content-Encoding` token for Brotli.
const BROTLI_TOKEN: &str = "br";

fn decompress_brotli(data: &[u8]) -> std::io::Result<String> {
    let mut decompressor = Decompressor::new(data, 4096);
    let mut decompressed = String::new();
    decompressor.read_to_string(&mut decompressed)?;
    Ok(decompressed)
}

/// Turn a raw response body into text. A body marked `Content-Encoding: br`
/// is Brotli-decompressed; if that fails the raw bytes are used as-is, which
/// then stands or falls at the JSON parse. Other encodings (gzip, deflate)
/// are already undone by the transport.
pub fn decode_body(raw: &RawBody) -> String {
    if raw.content_encoding.as_deref() == Some(BROTLI_TOKEN) {
        match decompress_brotli(&raw.bytes) {
            Ok(text) => return text,
            Err(e) => {
                tracing::error!("Brotli decompression failed: {e}");
            }
        }
    }
    String::from_utf8_lossy(&raw.bytes).into_owned()
}
