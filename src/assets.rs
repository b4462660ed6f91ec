//! Image decoding and offline asset preparation.
//!
//! Decoding and resizing are delegated to the `image` crate. The flip and
//! rotate utilities are meant for load time, not the per-frame path: they
//! write their result to a fresh temporary PNG and return its path, ready
//! to be passed to [`ImageSprite::load`](crate::ImageSprite::load).

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::colors;
use crate::error::{EngineError, Result};

/// Mirror axis for [`flip_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Clockwise rotation for [`rotate_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }
}

/// Largest texel count a decoded sprite may have (8192 x 8192).
pub const MAX_TEXELS: u64 = 1 << 26;

/// Decodes `path` and resizes it to exactly `width x height` RGBA texels.
///
/// Sizes that are empty or above [`MAX_TEXELS`] are rejected before
/// anything is decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 || width as u64 * height as u64 > MAX_TEXELS {
        return Err(EngineError::InvalidImageSize {
            width: width as i64,
            height: height as i64,
        });
    }
    let img = image::open(path)?;
    if img.width() == width && img.height() == height {
        return Ok(img.to_rgba8());
    }
    Ok(img.resize_exact(width, height, FilterType::Triangle).to_rgba8())
}

/// Converts RGBA bytes to packed `0xAARRGGBB` words.
pub fn pack_texels(img: &RgbaImage) -> Vec<u32> {
    img.pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            colors::argb(r, g, b, a)
        })
        .collect()
}

/// Decodes, resizes and packs `path` in one go.
pub fn load_texels<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Vec<u32>> {
    load_rgba(path, width, height).map(|img| pack_texels(&img))
}

pub fn flip(img: &RgbaImage, axis: Flip) -> RgbaImage {
    match axis {
        Flip::Horizontal => imageops::flip_horizontal(img),
        Flip::Vertical => imageops::flip_vertical(img),
    }
}

pub fn rotate(img: &RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation {
        Rotation::Deg0 => img.clone(),
        Rotation::Deg90 => imageops::rotate90(img),
        Rotation::Deg180 => imageops::rotate180(img),
        Rotation::Deg270 => imageops::rotate270(img),
    }
}

/// Mirrors the image at `path` and returns the path of a new temporary PNG.
pub fn flip_image<P: AsRef<Path>>(path: P, axis: Flip) -> Result<PathBuf> {
    let img = image::open(path)?.to_rgba8();
    write_temp_png(&flip(&img, axis), "arcade_flip_")
}

/// Rotates the image at `path` clockwise and returns the path of a new
/// temporary PNG.
pub fn rotate_image<P: AsRef<Path>>(path: P, rotation: Rotation) -> Result<PathBuf> {
    let img = image::open(path)?.to_rgba8();
    write_temp_png(&rotate(&img, rotation), "arcade_rotate_")
}

/// Writes `img` to a newly created file in the system temp directory.
///
/// The file is kept on disk; removing it is up to the caller.
fn write_temp_png(img: &RgbaImage, prefix: &str) -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".png")
        .tempfile()?;
    img.save_with_format(file.path(), ImageFormat::Png)?;
    let (_, path) = file.keep().map_err(|e| EngineError::Io(e.error))?;
    debug!("Wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(path)
}
