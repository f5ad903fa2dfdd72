//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use zrun::{Encoding, Predictor};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PredictorArg {
    /// Store bytes unpredicted
    None,
    /// Difference to the previous byte
    Delta,
    /// Clamped gradient of the west, north and north-west neighbours
    Gradient,
}

impl From<PredictorArg> for Predictor {
    fn from(arg: PredictorArg) -> Self {
        match arg {
            PredictorArg::None => Predictor::None,
            PredictorArg::Delta => Predictor::Delta,
            PredictorArg::Gradient => Predictor::Gradient,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    /// Residuals stored verbatim
    Raw,
    /// Zero-run / literal-run records
    ZeroRun,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Raw => Encoding::Raw,
            EncodingArg::ZeroRun => Encoding::ZeroRun,
        }
    }
}

/// Pack an image into a zero-run coded C array for embedding
#[derive(Parser, Debug)]
#[command(name = "texpack", version, about)]
pub struct Args {
    /// Input image (gray, gray+alpha, RGB or RGBA; converted to 8 bits per channel)
    pub input: PathBuf,

    /// Directory receiving the generated files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// File name prefix of the generated files
    #[arg(long, default_value = "font")]
    pub stem: String,

    /// Symbol prefix used in the generated C source
    #[arg(long, default_value = "FontTex")]
    pub symbol: String,

    #[arg(long, value_enum, default_value_t = PredictorArg::Gradient)]
    pub predictor: PredictorArg,

    #[arg(long, value_enum, default_value_t = EncodingArg::ZeroRun)]
    pub encoding: EncodingArg,

    /// Log per-plane details
    #[arg(short, long)]
    pub verbose: bool,
}
