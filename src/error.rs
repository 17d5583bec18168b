use std::path::PathBuf;

/// Everything that can stop a stitch run. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum StitchError {
    #[error("nth must be a positive integer, got {nth}")]
    InvalidStride { nth: i64 },

    #[error("could not read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path:?} decoded to {got:?} but its header said {expected:?}")]
    DimensionMismatch {
        path: PathBuf,
        expected: (u32, u32),
        got: (u32, u32),
    },

    #[error("canvas would exceed {max}x{max} pixels")]
    CanvasTooLarge { max: u32 },

    #[error("could not create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

