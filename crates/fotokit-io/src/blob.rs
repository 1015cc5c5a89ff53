//! Conversions between Rust byte buffers and browser `Blob`s.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::BlobPropertyBag;

/// Wrap `bytes` in a `Blob`, tagged with `mime_type` when given.
///
/// # Errors
///
/// Returns the browser's exception if `Blob` construction fails.
pub fn from_bytes(bytes: &[u8], mime_type: Option<&str>) -> Result<web_sys::Blob, JsValue> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    match mime_type {
        Some(mime) => {
            let opts = BlobPropertyBag::new();
            opts.set_type(mime);
            web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        }
        None => web_sys::Blob::new_with_u8_array_sequence(&parts),
    }
}

/// Copy the contents of `blob` into a `Vec<u8>`.
///
/// # Errors
///
/// Returns the browser's exception if reading the blob fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Blob is !Send
pub async fn to_bytes(blob: &web_sys::Blob) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(blob.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
