use crate::{
    error::StitchError,
    source::ImageSource,
};

use image::{
    imageops,
    Rgba,
    RgbaImage,
};

/// Fill for canvas pixels no image covers.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy{
    /// Measure every image first, allocate the canvas once, then draw.
    #[default]
    TwoPass,
    /// Grow the canvas image by image, copying it each time.
    Incremental,
}

/// Rows of the canvas taken by one image, left aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band{
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas size plus where each image lands, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout{
    pub width: u32,
    pub height: u32,
    pub bands: Vec<Band>,
}

impl Layout{
    /// Stacks `sizes` top to bottom: width is the widest, height the sum.
    pub fn stack(sizes: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, StitchError>{
        let mut layout = Self::default();
        for (width, height) in sizes {
            layout.bands.push(Band{ y: layout.height, width, height });
            layout.width = layout.width.max(width);
            layout.height = grow(layout.height, height)?;
        }
        Ok(layout)
    }

    pub fn measure<S: AsRef<str>>(source: &impl ImageSource, names: &[S]) -> Result<Self, StitchError>{
        let sizes = names.iter()
            .map(|name| source.dimensions(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::stack(sizes)
    }
}

fn grow(height: u32, by: u32) -> Result<u32, StitchError>{
    height.checked_add(by).ok_or(StitchError::CanvasTooLarge{ max: u32::MAX })
}

/// Background canvas; an empty selection still yields a 1x1 image.
fn blank(width: u32, height: u32) -> RgbaImage{
    if width == 0 || height == 0 {
        RgbaImage::from_pixel(1, 1, BACKGROUND)
    } else {
        RgbaImage::from_pixel(width, height, BACKGROUND)
    }
}

/// Stacks the images behind `names` vertically, in the given order.
pub fn compose<S: AsRef<str>>(
    source: &impl ImageSource,
    names: &[S],
    strategy: Strategy,
) -> Result<RgbaImage, StitchError>{
    match strategy {
        Strategy::TwoPass => compose_two_pass(source, names),
        Strategy::Incremental => compose_incremental(source, names),
    }
}

pub fn compose_two_pass<S: AsRef<str>>(source: &impl ImageSource, names: &[S]) -> Result<RgbaImage, StitchError>{
    let layout = Layout::measure(source, names)?;
    log::debug!("Layout: {}x{} from {} images", layout.width, layout.height, layout.bands.len());

    let mut canvas = blank(layout.width, layout.height);
    for (name, band) in names.iter().zip(&layout.bands) {
        let name = name.as_ref();
        log::info!("Stitching {}", name);
        let img = source.decode(name)?;
        let got = (img.width(), img.height());
        if got != (band.width, band.height) {
            return Err(StitchError::DimensionMismatch{
                path: source.locate(name),
                expected: (band.width, band.height),
                got,
            });
        }
        imageops::replace(&mut canvas, &img, 0, band.y as i64);
    }
    Ok(canvas)
}

pub fn compose_incremental<S: AsRef<str>>(source: &impl ImageSource, names: &[S]) -> Result<RgbaImage, StitchError>{
    let mut canvas = RgbaImage::new(0, 0);
    for name in names {
        let name = name.as_ref();
        log::info!("Stitching {}", name);
        let img = source.decode(name)?;
        let top = canvas.height();
        let width = canvas.width().max(img.width());
        let height = grow(top, img.height())?;

        let mut next = RgbaImage::from_pixel(width, height, BACKGROUND);
        imageops::replace(&mut next, &canvas, 0, 0);
        imageops::replace(&mut next, &img, 0, top as i64);
        canvas = next;
    }
    if canvas.width() == 0 || canvas.height() == 0 {
        canvas = blank(0, 0);
    }
    Ok(canvas)
}
