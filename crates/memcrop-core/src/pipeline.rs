//! End-to-end crop pipeline.
//!
//! Chains the stages a crop request goes through:
//!
//! ```text
//! base64 text -> bytes -> PixelBuffer -> crop -> PixelBuffer -> bytes -> base64 text
//!   (transport)   (decode)            (transform)            (encode)   (transport)
//! ```
//!
//! Each stage returns its own error type; the pipeline stops at the first
//! failure and hands that error back unchanged inside [`PipelineError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, debug_span, trace};

use crate::decode::{self, DecodeError, PixelFormat};
use crate::encode::{self, EncodeError, EncodeOptions, OutputFormat};
use crate::transform::{self, CropError, Rect};
use crate::transport::{self, preview, TransportError};

/// Number of leading characters shown in trace-level payload previews.
const PREVIEW_LEN: usize = 127;

/// Error from any pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl PipelineError {
    /// Name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Transport(_) => "transport",
            PipelineError::Decode(_) => "decode",
            PipelineError::Crop(_) => "crop",
            PipelineError::Encode(_) => "encode",
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How cropped images are re-encoded
    pub output: EncodeOptions,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output encoding
    pub fn with_output(mut self, output: EncodeOptions) -> Self {
        self.output = output;
        self
    }
}

/// A crop request as received at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequest {
    /// Base64-encoded source image (PNG or JPEG)
    pub image: String,
    /// Region to keep, in source pixels
    pub region: Rect,
}

impl CropRequest {
    pub fn new(image: impl Into<String>, region: Rect) -> Self {
        Self {
            image: image.into(),
            region,
        }
    }
}

/// Result of a crop request, ready to be stored as a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropResponse {
    /// Base64-encoded cropped image
    pub image: String,
    /// Cropped width in pixels
    pub width: u32,
    /// Cropped height in pixels
    pub height: u32,
    /// Container of the source image, e.g. "png"
    pub source_format: String,
    /// Container of `image`
    pub output_format: OutputFormat,
    /// Size of the encoded image before base64
    pub byte_length: usize,
}

/// A cropped and re-encoded image, before transport encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedImage {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Pixel layout shared by source and crop
    pub pixel_format: PixelFormat,
    /// Container detected in the source bytes
    pub source_format: image::ImageFormat,
    /// Container of `bytes`
    pub output_format: OutputFormat,
}

/// Runs decode, crop and encode with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct CropPipeline {
    config: PipelineConfig,
}

impl CropPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full text-to-text pipeline for a request.
    pub fn run(&self, request: &CropRequest) -> Result<CropResponse, PipelineError> {
        let _span = debug_span!("crop_request", region = %request.region).entered();

        trace!(encoded = preview(&request.image, PREVIEW_LEN), "received image");
        let bytes = transport::decode_text(&request.image)?;
        debug!(chars = request.image.len(), bytes = bytes.len(), "decoded transport payload");

        let cropped = self.run_bytes(&bytes, request.region)?;

        let image = transport::encode_text(&cropped.bytes);
        trace!(encoded = preview(&image, PREVIEW_LEN), "encoded cropped image");
        debug!(chars = image.len(), "crop request complete");

        Ok(CropResponse {
            image,
            width: cropped.width,
            height: cropped.height,
            source_format: decode::format_name(cropped.source_format).to_string(),
            output_format: cropped.output_format,
            byte_length: cropped.bytes.len(),
        })
    }

    /// Run decode, crop and encode on raw encoded bytes.
    pub fn run_bytes(&self, bytes: &[u8], region: Rect) -> Result<CroppedImage, PipelineError> {
        let (source, source_format) = decode::decode_image(bytes)?;

        let cropped = transform::crop(&source, region)?;
        debug!(
            %region,
            width = cropped.width,
            height = cropped.height,
            "cropped image"
        );

        let encoded = encode::encode_image(&cropped, &self.config.output)?;

        Ok(CroppedImage {
            bytes: encoded,
            width: cropped.width,
            height: cropped.height,
            pixel_format: cropped.format,
            source_format,
            output_format: self.config.output.format,
        })
    }
}
