//! Local image loading
//!
//! Reads a PNG from disk into the inline data-URL form the section model
//! and the compositing endpoint both use. No decoding or validation
//! beyond reading the bytes; a bad file surfaces later as an API error.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pagecraft_core::{Error, Result};

/// Read a local PNG file into a `data:image/png;base64,...` URL.
pub fn load_png_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|_| Error::image_read(path))?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(bytes)))
}
