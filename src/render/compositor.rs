//! Software compositing of one frame's drawables.
//!
//! Sprites are drawn in slice order with no depth sorting (painter's
//! algorithm): later entries cover earlier ones.

use std::ops::Range;

use super::surface::Surface;
use crate::colors;
use crate::group::SpriteRef;
use crate::sprite::{ColorSprite, ImageSprite};

/// Clears `surface` to its background and draws `sprites` over it.
pub fn compose(surface: &mut Surface, sprites: &[SpriteRef<'_>]) {
    surface.clear();
    for sprite in sprites {
        draw_sprite(surface, sprite);
    }
}

/// Draws one drawable. Inactive sprites and image sprites without texels
/// are skipped.
pub fn draw_sprite(surface: &mut Surface, sprite: &SpriteRef<'_>) {
    match sprite {
        SpriteRef::Color(s) => fill_sprite(surface, s),
        SpriteRef::Image(s) => blit_sprite(surface, s),
    }
}

fn fill_sprite(surface: &mut Surface, sprite: &ColorSprite) {
    if !sprite.active {
        return;
    }
    fill_rect(
        surface,
        sprite.x as i32,
        sprite.y as i32,
        sprite.width as i32,
        sprite.height as i32,
        sprite.color,
    );
}

/// Fills a rectangle with a flat color, clipped to the surface.
pub fn fill_rect(surface: &mut Surface, x: i32, y: i32, width: i32, height: i32, color: u32) {
    let cols = clip(x, width, surface.width());
    let rows = clip(y, height, surface.height());
    if cols.is_empty() {
        return;
    }
    for row in rows {
        surface.row_mut(row)[cols.start as usize..cols.end as usize].fill(color);
    }
}

fn blit_sprite(surface: &mut Surface, sprite: &ImageSprite) {
    if !sprite.active {
        return;
    }
    let Some(texels) = sprite.pixels() else {
        return;
    };
    let x0 = sprite.x as i32;
    let y0 = sprite.y as i32;
    // Clip to the sprite's rectangle and to the texels actually present.
    let width = (sprite.width as i32).min(sprite.image_width() as i32);
    let height = (sprite.height as i32).min(sprite.image_height() as i32);
    blit(
        surface,
        x0,
        y0,
        width,
        height,
        texels,
        sprite.image_width() as usize,
    );
}

/// Copies a `width x height` window of `texels` (row stride `stride`) to
/// `(x, y)`, skipping texels whose alpha byte is zero.
pub fn blit(
    surface: &mut Surface,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    texels: &[u32],
    stride: usize,
) {
    let cols = clip(x, width, surface.width());
    let rows = clip(y, height, surface.height());
    if cols.is_empty() {
        return;
    }
    for row in rows {
        let src_row = (row as i32 - y) as usize * stride;
        let dst = surface.row_mut(row);
        for col in cols.clone() {
            let texel = texels[src_row + (col as i32 - x) as usize];
            // Binary alpha test, no blending.
            if colors::alpha(texel) > 0 {
                dst[col as usize] = texel;
            }
        }
    }
}

/// Visible part of `[start, start + len)` within `[0, limit)`.
#[inline]
fn clip(start: i32, len: i32, limit: u32) -> Range<u32> {
    let lo = start.max(0) as i64;
    let hi = (start as i64 + len.max(0) as i64).min(limit as i64);
    if hi <= lo {
        0..0
    } else {
        lo as u32..hi as u32
    }
}
