use std::io;
use std::path::PathBuf;

/// Errors that can abort an icon set generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating, writing or flushing a file or directory failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The source image could not be read or decoded.
    #[error("failed to load source image {}", .path.display())]
    Decode {
        /// The source image path.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A bitmap could not be encoded as PNG.
    #[error("failed to encode {}", .path.display())]
    Encode {
        /// The PNG file being written.
        path: PathBuf,
        /// The underlying encoder error.
        #[source]
        source: png::EncodingError,
    },

    /// The manifest could not be serialized.
    #[error("failed to write manifest {}", .path.display())]
    Manifest {
        /// The manifest path.
        path: PathBuf,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// A JPEG 2000 source image was malformed or used an unsupported color
    /// space.
    #[error("failed to decode JPEG 2000 image {}: {message}", .path.display())]
    Jpeg2000 {
        /// The source image path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// The source image is JPEG 2000 but support for it was not compiled in.
    #[error(
        "{} is a JPEG 2000 image, which this build cannot read; \
         rebuild with `--features jp2io`",
        .path.display()
    )]
    Jpeg2000Unsupported {
        /// The source image path.
        path: PathBuf,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io { path: path.into(), source }
    }
}

/// A `Result` alias whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
