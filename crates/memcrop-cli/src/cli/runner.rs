use std::path::{Path, PathBuf};

use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use memcrop_core::pipeline::{CropPipeline, CropRequest, PipelineConfig, PipelineError};
use memcrop_core::transport;

use super::args::CliArgs;
use super::errors::AppError;
use super::fixture::{read_fixture, write_fixture};

/// Where a finished run left its output.
#[derive(Debug)]
pub struct RunOutput {
    /// File holding the cropped image
    pub path: PathBuf,
    /// Base64 of the cropped image, as it would be stored
    pub document: String,
    pub width: u32,
    pub height: u32,
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.verbose);

    let output = execute(&args)?;

    info!(
        "Final {}x{} result for testing is in file {}",
        output.width,
        output.height,
        output.path.display()
    );
    if args.print_base64 {
        println!("{}", output.document);
    }
    info!("Crop completed successfully");
    Ok(())
}

/// Run the whole chain for one input file and write the cropped image.
pub fn execute(args: &CliArgs) -> Result<RunOutput, AppError> {
    let config = resolve_config(args)?;
    let pipeline = CropPipeline::new(config);
    let region = args.region();

    let data = read_fixture(&args.input)?;
    info!(path = %args.input.display(), bytes = data.len(), "read test image");

    // What a client would send in the request body
    let request = CropRequest::new(transport::encode_text(&data), region);
    debug!(chars = request.image.len(), "encoded request payload");

    let response = pipeline.run(&request)?;
    info!(
        source_format = %response.source_format,
        %region,
        width = response.width,
        height = response.height,
        output_format = %response.output_format,
        bytes = response.byte_length,
        "cropped image"
    );

    // The stored document, written back out as an image file
    let bytes = transport::decode_text(&response.image).map_err(PipelineError::from)?;
    let out_dir = args.out_dir.clone().unwrap_or_else(std::env::temp_dir);
    let path = write_fixture(&out_dir, &args.prefix, response.output_format.extension(), &bytes)?;

    Ok(RunOutput {
        path,
        document: response.image,
        width: response.width,
        height: response.height,
    })
}

/// Layer defaults, the optional JSON config file, then command-line flags.
fn resolve_config(args: &CliArgs) -> Result<PipelineConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if let Some(quality) = args.quality {
        config.output.jpeg_quality = quality;
    }
    if let Some(compression) = args.png_compression {
        config.output.png_compression = compression.into();
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<PipelineConfig, AppError> {
    let text = read_fixture(path)?;
    serde_json::from_slice(&text).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    // Ignore the error if a subscriber is already installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
