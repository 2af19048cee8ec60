use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Image could not be read or decoded; fatal before the loop starts.
    #[error("could not load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing the result failed; reported, the loop continues.
    #[error("could not save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}
