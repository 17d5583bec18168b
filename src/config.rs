use crate::{
    compose::Strategy,
    encode::JPEG_QUALITY,
    error::StitchError,
    select::Selector,
};

use clap::Parser;

use std::path::PathBuf;

/// Stack the images of a directory on top of each other, in name order.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// File to write the stitched image to
    #[arg(long)]
    pub out: Option<String>,
    /// Directory containing the images to stitch
    #[arg(long)]
    pub src: Option<String>,
    /// Only stitch every nth image
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub nth: i64,
    /// How the canvas is built
    #[arg(long, value_enum, default_value_t = Strategy::TwoPass)]
    pub strategy: Strategy,
}

impl Args {
    /// `Ok(None)` means a required path is missing or empty and usage should be shown.
    pub fn into_config(self) -> Result<Option<StitchConfig>, StitchError> {
        let given = |path: Option<String>| path.filter(|p| !p.is_empty());
        let (Some(out), Some(src)) = (given(self.out), given(self.src)) else {
            return Ok(None);
        };
        let config = StitchConfig::new(src, out, self.nth)?;
        Ok(Some(config.with_strategy(self.strategy)))
    }
}

/// Everything a run needs, validated up front.
#[derive(Debug, Clone)]
pub struct StitchConfig{
    pub out: PathBuf,
    pub src: PathBuf,
    pub selector: Selector,
    pub strategy: Strategy,
    pub quality: u8,
}

impl StitchConfig{
    pub fn new(src: impl Into<PathBuf>, out: impl Into<PathBuf>, nth: i64) -> Result<Self, StitchError>{
        Ok(Self{
            out: out.into(),
            src: src.into(),
            selector: Selector::new(nth)?,
            strategy: Strategy::default(),
            quality: JPEG_QUALITY,
        })
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self{
        self.strategy = strategy;
        self
    }
}
