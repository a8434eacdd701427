use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use memcrop_core::encode::{OutputFormat, PngCompression};
use memcrop_core::transform::Rect;

#[derive(Parser, Debug)]
#[command(
    name = "memcrop",
    version,
    about = "Crop an image through the in-memory base64 pipeline"
)]
pub struct CliArgs {
    /// Input image (PNG or JPEG)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Left edge of the crop region (inclusive)
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub x0: i64,

    /// Top edge of the crop region (inclusive)
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub y0: i64,

    /// Right edge of the crop region (exclusive)
    #[arg(long, default_value_t = 550, allow_negative_numbers = true)]
    pub x1: i64,

    /// Bottom edge of the crop region (exclusive)
    #[arg(long, default_value_t = 550, allow_negative_numbers = true)]
    pub y1: i64,

    /// Output format (overrides the config file; default png)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// JPEG quality 1-100 (overrides the config file; default 90)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// PNG compression effort (overrides the config file; default "default")
    #[arg(long, value_enum)]
    pub png_compression: Option<CompressionArg>,

    /// Directory for the cropped image (default: OS temp directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// File name prefix for the cropped image
    #[arg(long, default_value = "crop-tmp-")]
    pub prefix: String,

    /// JSON pipeline configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the final base64 document to stdout
    #[arg(long, default_value_t = false)]
    pub print_base64: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    /// Crop region given on the command line.
    pub fn region(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    #[value(alias = "jpg")]
    Jpeg,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Jpeg => OutputFormat::Jpeg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    Fast,
    Default,
    Best,
}

impl From<CompressionArg> for PngCompression {
    fn from(value: CompressionArg) -> Self {
        match value {
            CompressionArg::Fast => PngCompression::Fast,
            CompressionArg::Default => PngCompression::Default,
            CompressionArg::Best => PngCompression::Best,
        }
    }
}
