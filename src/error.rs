//! Error types shared by every engine subsystem.

use thiserror::Error;

/// Errors reported by the engine.
///
/// Only session setup is fatal. Asset and audio failures are reported so
/// the caller can decide, but the engine itself never aborts on them.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or surface dimensions were zero.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The windowing backend refused to create or drive a resource.
    #[error("platform error: {0}")]
    Platform(String),

    /// Decoding or encoding an image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem or process I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A sprite was requested at a size that cannot hold any texel.
    #[error("invalid image size: {width}x{height}")]
    InvalidImageSize { width: i64, height: i64 },

    /// A texel buffer did not match its declared dimensions.
    #[error("texel buffer holds {actual} pixels, expected {expected}")]
    TexelCount { expected: usize, actual: usize },

    /// An animation frame does not match the first frame's texel size.
    #[error("frame is {}x{}, expected {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    FrameSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// One frame of an animation failed to load.
    #[error("animation frame {index} failed: {source}")]
    AnimationFrame {
        index: usize,
        #[source]
        source: Box<EngineError>,
    },

    /// The external audio player could not be dispatched.
    #[error("audio error: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
