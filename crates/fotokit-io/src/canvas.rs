//! Image re-encoding through the browser's canvas.
//!
//! The browser decodes the source bytes (`createImageBitmap`), draws
//! the bitmap onto an offscreen canvas of the same size, and encodes
//! the canvas with `toBlob`.  The callback-based `toBlob` is wrapped in
//! a `Promise` so each step is a single awaited result.
//!
//! If the browser cannot produce the requested format (some browsers
//! silently return PNG, or `null`), the source is re-encoded natively
//! with [`fotokit_pipeline::transcode::to_webp`].

use fotokit_pipeline::{ConvertConfig, PipelineError, transcode};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::blob;

/// Errors that can occur while converting one image.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// A browser API call returned an error (including undecodable
    /// input rejected by `createImageBitmap`).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The browser could not encode and the native fallback failed too.
    #[error("fallback encoding failed: {0}")]
    Fallback(#[from] PipelineError),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Decode `bytes` and re-encode them in `config.format` at
/// `config.quality`, keeping the native width and height.
///
/// # Errors
///
/// Returns [`CanvasError::JsError`] if the browser cannot decode the
/// image or a canvas call fails, and [`CanvasError::Fallback`] if the
/// browser encoder produced no usable output and the native encoder
/// failed as well.
#[allow(clippy::future_not_send)] // WASM is single-threaded; canvas types are !Send
pub async fn encode(bytes: &[u8], config: &ConvertConfig) -> Result<Vec<u8>, CanvasError> {
    let window =
        web_sys::window().ok_or_else(|| CanvasError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| CanvasError::JsError("no document".into()))?;

    // 1. Decode.
    let source = blob::from_bytes(bytes, None)?;
    let bitmap: web_sys::ImageBitmap =
        JsFuture::from(window.create_image_bitmap_with_blob(&source)?)
            .await?
            .dyn_into()?;

    // 2. Draw onto a canvas sized exactly to the bitmap.
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|e| CanvasError::JsError(format!("failed to cast element: {e:?}")))?;
    canvas.set_width(bitmap.width());
    canvas.set_height(bitmap.height());

    let context: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| CanvasError::JsError("no 2d context".into()))?
        .dyn_into()
        .map_err(|e| CanvasError::JsError(format!("failed to cast context: {e:?}")))?;
    context.draw_image_with_image_bitmap(&bitmap, 0.0, 0.0)?;
    bitmap.close();

    // 3. Encode, falling back to the native encoder.
    let mime = config.format.mime_type();
    if let Some(encoded) = to_blob(&canvas, mime, config.quality).await? {
        let data = blob::to_bytes(&encoded).await?;
        if encoded.type_() == mime && transcode::is_webp(&data) {
            return Ok(data);
        }
        web_sys::console::warn_1(
            &format!(
                "canvas returned {:?} instead of {mime}; using native encoder",
                encoded.type_()
            )
            .into(),
        );
    } else {
        web_sys::console::warn_1(&format!("canvas could not encode {mime}; using native encoder").into());
    }

    Ok(transcode::to_webp(bytes)?)
}

/// Await `canvas.toBlob(callback, mime, quality)`.
///
/// Resolves to `None` when the browser hands the callback `null`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; canvas types are !Send
async fn to_blob(
    canvas: &web_sys::HtmlCanvasElement,
    mime: &str,
    quality: f32,
) -> Result<Option<web_sys::Blob>, CanvasError> {
    let quality = JsValue::from_f64(f64::from(quality));
    let mut call_error = None;

    // The promise's `resolve` is handed to `toBlob` as its callback, so
    // the promise settles with the Blob (or null).
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(e) = canvas.to_blob_with_type_and_encoder_options(&resolve, mime, &quality) {
            call_error = Some(e);
        }
    });
    if let Some(e) = call_error {
        return Err(e.into());
    }

    let value = JsFuture::from(promise).await?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    Ok(Some(value.dyn_into::<web_sys::Blob>()?))
}
