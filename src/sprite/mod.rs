//! Sprite value types and their movement.
//!
//! - [`ColorSprite`]: a flat-colored rectangle
//! - [`ImageSprite`]: a rectangle of packed `0xAARRGGBB` texels
//! - [`AnimatedSprite`]: a sequence of same-sized image frames sharing one transform
//!
//! All three move with the same integration: gravity feeds vertical
//! velocity, velocity feeds position, and the surface top and bottom act
//! as a ceiling and a floor.

mod animated;
mod color;
mod textured;

pub use animated::AnimatedSprite;
pub use color::ColorSprite;
pub use textured::ImageSprite;

/// One physics step shared by every sprite kind.
///
/// `vy += gravity; y += vy; x += vx`, then `y` is clamped into
/// `[0, surface_height - height]`, zeroing `vy` at either bound.
#[inline]
fn integrate(
    x: &mut f32,
    y: &mut f32,
    vx: f32,
    vy: &mut f32,
    height: f32,
    gravity: f32,
    surface_height: f32,
) {
    *vy += gravity;
    *y += *vy;
    *x += vx;

    if *y < 0.0 {
        *y = 0.0;
        *vy = 0.0;
    }
    if *y > surface_height - height {
        *y = surface_height - height;
        *vy = 0.0;
    }
}
