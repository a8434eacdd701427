//! memcrop Core - in-memory image crop pipeline
//!
//! This crate provides the core functionality for memcrop: decoding encoded
//! images into pixel buffers, cropping rectangular regions, re-encoding the
//! result, and the base64 transport encoding used at API boundaries.

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod transform;
pub mod transport;

pub use decode::{decode_image, PixelBuffer, PixelFormat};
pub use encode::{encode_image, EncodeOptions, OutputFormat};
pub use pipeline::{CropPipeline, CropRequest, CropResponse, PipelineConfig, PipelineError};
pub use transform::{crop, CropError, Rect};
