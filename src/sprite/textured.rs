use std::path::Path;

use log::warn;

use crate::assets;
use crate::collision::{Body, Rect};
use crate::error::{EngineError, Result};

/// A rectangle of packed `0xAARRGGBB` texels.
///
/// A sprite whose load failed is *inert*: it has no texels, is inactive,
/// and is skipped by movement, collision and rendering. Check
/// [`is_loaded`](Self::is_loaded) after loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub active: bool,
    pixels: Option<Vec<u32>>,
    image_width: u32,
    image_height: u32,
}

impl ImageSprite {
    /// The inert sprite placed at `(x, y)`.
    pub fn inert(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Loads `path` resized to `width x height` texels.
    ///
    /// Never fails: on any decode or resize error the failure is logged and
    /// the inert sprite is returned.
    pub fn load<P: AsRef<Path>>(x: f32, y: f32, width: f32, height: f32, path: P) -> Self {
        match Self::try_load(x, y, width, height, path.as_ref()) {
            Ok(sprite) => sprite,
            Err(e) => {
                warn!("Cannot load sprite {}: {}", path.as_ref().display(), e);
                Self::inert(x, y)
            }
        }
    }

    /// Like [`load`](Self::load), but reports why the load failed.
    pub fn try_load<P: AsRef<Path>>(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: P,
    ) -> Result<Self> {
        let (w, h) = (width as i64, height as i64);
        let invalid = || EngineError::InvalidImageSize {
            width: w,
            height: h,
        };
        if w <= 0 || h <= 0 {
            return Err(invalid());
        }
        let w = u32::try_from(w).map_err(|_| invalid())?;
        let h = u32::try_from(h).map_err(|_| invalid())?;
        let texels = assets::load_texels(path, w, h)?;
        Self::from_pixels(x, y, w, h, texels)
    }

    /// Builds a sprite from texels already in memory, one texel per pixel.
    pub fn from_pixels(
        x: f32,
        y: f32,
        image_width: u32,
        image_height: u32,
        pixels: Vec<u32>,
    ) -> Result<Self> {
        let expected = image_width as usize * image_height as usize;
        if expected == 0 {
            return Err(EngineError::InvalidImageSize {
                width: image_width as i64,
                height: image_height as i64,
            });
        }
        if pixels.len() != expected {
            return Err(EngineError::TexelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            x,
            y,
            width: image_width as f32,
            height: image_height as f32,
            vx: 0.0,
            vy: 0.0,
            active: true,
            pixels: Some(pixels),
            image_width,
            image_height,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    pub fn pixels(&self) -> Option<&[u32]> {
        self.pixels.as_deref()
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Releases the texels and returns to the inert state. Safe to repeat.
    pub fn free(&mut self) {
        if self.pixels.take().is_some() {
            self.width = 0.0;
            self.height = 0.0;
            self.image_width = 0;
            self.image_height = 0;
            self.active = false;
        }
    }

    /// Applies one logical frame of motion. No-op while inactive or inert.
    pub fn move_with_gravity(&mut self, gravity: f32, surface_height: f32) {
        if !self.active || !self.is_loaded() {
            return;
        }
        super::integrate(
            &mut self.x,
            &mut self.y,
            self.vx,
            &mut self.vy,
            self.height,
            gravity,
            surface_height,
        );
    }
}

impl Body for ImageSprite {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn is_solid(&self) -> bool {
        self.active && self.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::check_image_collision;
    use crate::colors::argb;
    use approx::assert_relative_eq;

    fn solid(x: f32, y: f32, w: u32, h: u32) -> ImageSprite {
        let texels = vec![argb(255, 0, 0, 255); (w * h) as usize];
        ImageSprite::from_pixels(x, y, w, h, texels).unwrap()
    }

    #[test]
    fn from_pixels_sizes_the_sprite() {
        let s = solid(3.0, 4.0, 5, 6);
        assert!(s.is_loaded());
        assert!(s.active);
        assert_relative_eq!(s.width, 5.0);
        assert_relative_eq!(s.height, 6.0);
        assert_eq!(s.pixels().map(|p| p.len()), Some(30));
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = ImageSprite::from_pixels(0.0, 0.0, 2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, EngineError::TexelCount { expected: 4, actual: 3 }));
    }

    #[test]
    fn missing_file_yields_inert_sprite() {
        let s = ImageSprite::load(1.0, 2.0, 16.0, 16.0, "/nonexistent/sprite.png");
        assert!(!s.is_loaded());
        assert!(!s.active);
        assert_eq!(s.pixels(), None);
        assert_relative_eq!(s.x, 1.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = ImageSprite::try_load(0.0, 0.0, 0.5, 10.0, "whatever.png").unwrap_err();
        assert!(matches!(err, EngineError::InvalidImageSize { .. }));
    }

    #[test]
    fn oversized_requests_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
            .save(&src)
            .unwrap();

        // would wrap to 512 if truncated to u32
        let err = ImageSprite::try_load(0.0, 0.0, 4_294_967_808.0, 4.0, &src).unwrap_err();
        assert!(matches!(err, EngineError::InvalidImageSize { .. }));

        let err = ImageSprite::try_load(0.0, 0.0, 1e6, 1e6, &src).unwrap_err();
        assert!(matches!(err, EngineError::InvalidImageSize { .. }));

        let s = ImageSprite::load(0.0, 0.0, 1e6, 1e6, &src);
        assert!(!s.is_loaded());
        assert!(!s.active);
    }

    #[test]
    fn free_is_idempotent() {
        let mut s = solid(0.0, 0.0, 2, 2);
        s.free();
        assert!(!s.is_loaded());
        assert!(!s.active);
        assert_eq!(s.width, 0.0);
        assert_eq!(s.image_width(), 0);
        s.free();
        assert!(!s.is_loaded());

        let mut inert = ImageSprite::inert(0.0, 0.0);
        inert.free();
        assert!(!inert.is_loaded());
    }

    #[test]
    fn inert_sprite_never_collides_or_moves() {
        let a = solid(0.0, 0.0, 10, 10);
        let mut b = ImageSprite::inert(0.0, 0.0);
        // force it active: missing texels still veto the check
        b.active = true;
        b.width = 10.0;
        b.height = 10.0;
        assert!(!check_image_collision(&a, &b));
        assert!(!check_image_collision(&b, &a));

        b.vy = 5.0;
        b.move_with_gravity(1.0, 100.0);
        assert_eq!(b.y, 0.0);
        assert_eq!(b.vy, 5.0);
    }

    #[test]
    fn image_sprites_collide_by_bounds() {
        let a = solid(0.0, 0.0, 10, 10);
        let b = solid(9.0, 9.0, 10, 10);
        let c = solid(10.0, 0.0, 10, 10);
        assert!(check_image_collision(&a, &b));
        assert!(!check_image_collision(&a, &c));
    }

    #[test]
    fn floor_clamp_uses_sprite_height() {
        let mut s = solid(0.0, 500.0, 4, 8);
        s.move_with_gravity(0.0, 100.0);
        assert_relative_eq!(s.y, 92.0);
        assert_eq!(s.vy, 0.0);
    }
}
