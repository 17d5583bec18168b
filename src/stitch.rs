use crate::{
    compose::compose,
    config::StitchConfig,
    encode::write_image,
    error::StitchError,
    listing::list_dir,
    source::DirSource,
    timer::Timer,
};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchReport{
    pub selected: Vec<String>,
    pub width: u32,
    pub height: u32,
}

/// Lists `src`, selects, composes and writes `out`. Stops at the first failure.
pub fn stitch(config: &StitchConfig) -> Result<StitchReport, StitchError>{
    let mut timer = Timer::new();

    let names = list_dir(&config.src)?;
    let selected = config.selector.select(names);
    log::debug!("Selected {} images (nth = {}): {:?}ms",
        selected.len(), config.selector.nth(), timer.lap().as_millis());
    if selected.is_empty() {
        log::warn!("No images selected in {:?}, writing a 1x1 image", config.src);
    }

    let source = DirSource::new(&config.src);
    let canvas = compose(&source, &selected, config.strategy)?;
    log::debug!("Compose ({:?}): {:?}ms", config.strategy, timer.lap().as_millis());

    write_image(&canvas, &config.out, config.quality)?;
    log::debug!("Encode: {:?}ms", timer.lap().as_millis());

    let (width, height) = canvas.dimensions();
    log::info!("Wrote {}x{} to {:?} in {:?}ms", width, height, config.out, timer.total().as_millis());
    Ok(StitchReport{ selected, width, height })
}
