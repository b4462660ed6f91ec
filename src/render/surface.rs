//! The engine's off-screen pixel buffer.
//!
//! One 32-bit word per pixel, row-major, no padding. Flat-color words are
//! `0x00RRGGBB`, image texels keep their alpha byte (`0xAARRGGBB`); the
//! presentation surface ignores alpha either way.

/// Owned pixel buffer with fixed dimensions and a background color.
///
/// Invariant: `pixels.len() == width * height`, never resized.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    background: u32,
}

impl Surface {
    /// Allocates a buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            pixels: vec![background; size],
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Fills the whole buffer with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            self.pixels[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to one row.
    #[inline]
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// The buffer viewed as bytes, in native word order (ARGB8888 for SDL).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_filled_with_background() {
        let surface = Surface::new(4, 3, 0x123456);
        assert_eq!(surface.pixels().len(), 12);
        assert!(surface.pixels().iter().all(|&p| p == 0x123456));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut surface = Surface::new(2, 2, 0);
        surface.set_pixel(-1, 0, 9);
        surface.set_pixel(2, 0, 9);
        surface.set_pixel(0, 2, 9);
        assert!(surface.pixels().iter().all(|&p| p == 0));
        assert_eq!(surface.pixel(5, 5), None);
    }

    #[test]
    fn clear_restores_background() {
        let mut surface = Surface::new(2, 2, 7);
        surface.set_pixel(1, 1, 9);
        assert_eq!(surface.pixel(1, 1), Some(9));
        surface.clear();
        assert_eq!(surface.pixel(1, 1), Some(7));
    }

    #[test]
    fn byte_view_covers_every_pixel() {
        let surface = Surface::new(3, 2, 0xFF00FF);
        assert_eq!(surface.as_bytes().len(), 3 * 2 * 4);
    }
}
