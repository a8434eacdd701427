use std::path::PathBuf;

use memcrop_core::PipelineError;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read {path:?}: {source}")]
    ReadFixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write cropped image to {dir:?}: {source}")]
    WriteFixture {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Crop failed at {stage} stage: {0}", stage = .0.stage())]
    Pipeline(#[from] PipelineError),
}
