use crate::error::StitchError;

use image::{ DynamicImage, ImageReader };

use std::path::{ Path, PathBuf };

/// Resolves selected names to images on demand.
///
/// Nothing is cached: the compositor asks for one image at a time and drops
/// it before asking for the next.
pub trait ImageSource{
    /// Width and height, read as cheaply as the source allows.
    fn dimensions(&self, name: &str) -> Result<(u32, u32), StitchError>;

    fn decode(&self, name: &str) -> Result<DynamicImage, StitchError>;

    /// Location used in diagnostics.
    fn locate(&self, name: &str) -> PathBuf;
}

/// Images stored as files inside one directory.
pub struct DirSource{
    dir: PathBuf,
}

impl DirSource{
    pub fn new(dir: impl Into<PathBuf>) -> Self{
        Self{ dir: dir.into() }
    }

    fn reader(&self, path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, StitchError>{
        let open_err = |source| StitchError::Open{ path: path.to_path_buf(), source };
        ImageReader::open(path)
            .map_err(open_err)?
            .with_guessed_format()
            .map_err(open_err)
    }
}

impl ImageSource for DirSource{
    fn dimensions(&self, name: &str) -> Result<(u32, u32), StitchError>{
        let path = self.locate(name);
        self.reader(&path)?
            .into_dimensions()
            .map_err(|source| StitchError::Decode{ path, source })
    }

    fn decode(&self, name: &str) -> Result<DynamicImage, StitchError>{
        let path = self.locate(name);
        self.reader(&path)?
            .decode()
            .map_err(|source| StitchError::Decode{ path, source })
    }

    fn locate(&self, name: &str) -> PathBuf{
        self.dir.join(name)
    }
}
