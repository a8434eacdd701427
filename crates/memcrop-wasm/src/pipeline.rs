//! WASM bindings for the base64 crop pipeline.
//!
//! These take and return base64 text, the form an image has on the wire
//! between a browser client, a REST endpoint and a document store.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const response = crop_request(
//!   { image: base64Png, region: { x0: 50, y0: 50, x1: 550, y1: 550 } },
//!   { output: { format: 'png' } },
//! );
//! await db.collection('crops').insertOne(response);
//! ```

use crate::transform::region_from_i32;
use crate::types::to_js_error;
use memcrop_core::encode::{EncodeOptions, OutputFormat};
use memcrop_core::pipeline::{CropPipeline, CropRequest, CropResponse, PipelineConfig, PipelineError};
use wasm_bindgen::prelude::*;

/// Crop a base64-encoded image and return the base64-encoded result.
///
/// # Arguments
///
/// * `data` - Base64 PNG/JPEG (a `data:` URI is also accepted)
/// * `x0`, `y0`, `x1`, `y1` - Half-open crop region in source pixels
/// * `format` - Output container: "png" or "jpeg"
/// * `quality` - JPEG quality (1-100); ignored for PNG
#[wasm_bindgen]
pub fn crop_base64_image(
    data: &str,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    format: &str,
    quality: u8,
) -> Result<String, JsValue> {
    let output = parse_output_format(format)
        .ok_or_else(|| to_js_error(format!("Unknown output format: {format}")))?;
    let config = PipelineConfig::new().with_output(
        EncodeOptions::default()
            .with_format(output)
            .with_jpeg_quality(quality),
    );
    run_request(config, CropRequest::new(data, region_from_i32(x0, y0, x1, y1)))
        .map(|response| response.image)
        .map_err(to_js_error)
}

/// Run a crop request object through the pipeline.
///
/// `request` is `{ image: string, region: { x0, y0, x1, y1 } }`. `config`
/// may be `undefined` or a partial `{ output: { format, jpeg_quality,
/// png_compression } }`. Returns a `CropResponse` object.
#[wasm_bindgen]
pub fn crop_request(request: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let request: CropRequest = serde_wasm_bindgen::from_value(request).map_err(to_js_error)?;
    let config: PipelineConfig = if config.is_undefined() || config.is_null() {
        PipelineConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
    };

    let response = run_request(config, request).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

fn run_request(config: PipelineConfig, request: CropRequest) -> Result<CropResponse, PipelineError> {
    CropPipeline::new(config).run(&request)
}

fn parse_output_format(name: &str) -> Option<OutputFormat> {
    match name.to_ascii_lowercase().as_str() {
        "png" => Some(OutputFormat::Png),
        "jpeg" | "jpg" => Some(OutputFormat::Jpeg),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memcrop_core::decode::{PixelBuffer, PixelFormat};
    use memcrop_core::encode::{encode_png, PngCompression};
    use memcrop_core::transform::Rect;
    use memcrop_core::transport;

    fn base64_png(width: u32, height: u32) -> String {
        let buffer = PixelBuffer::new(
            width,
            height,
            PixelFormat::Rgb8,
            vec![200u8; (width * height * 3) as usize],
        );
        transport::encode_text(&encode_png(&buffer, PngCompression::Fast).unwrap())
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("png"), Some(OutputFormat::Png));
        assert_eq!(parse_output_format("JPEG"), Some(OutputFormat::Jpeg));
        assert_eq!(parse_output_format("jpg"), Some(OutputFormat::Jpeg));
        assert_eq!(parse_output_format("gif"), None);
    }

    #[test]
    fn test_run_request() {
        let request = CropRequest::new(base64_png(60, 60), Rect::new(5, 5, 55, 55));
        let response = run_request(PipelineConfig::default(), request).unwrap();
        assert_eq!((response.width, response.height), (50, 50));
        assert_eq!(response.source_format, "png");
    }

    #[test]
    fn test_run_request_error_kind() {
        let request = CropRequest::new(base64_png(10, 10), Rect::new(0, 0, 0, 10));
        let err = run_request(PipelineConfig::default(), request).unwrap_err();
        assert_eq!(err.stage(), "crop");
    }
}
