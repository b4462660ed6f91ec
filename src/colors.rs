//! Color constants and packing helpers.
//!
//! Colors handed to the engine are 24-bit `0xRRGGBB`. Image texels carry
//! an alpha byte on top: `0xAARRGGBB`.

pub const BLACK: u32 = 0x000000;
pub const WHITE: u32 = 0xFFFFFF;
pub const RED: u32 = 0xFF0000;
pub const GREEN: u32 = 0x00FF00;
pub const BLUE: u32 = 0x0000FF;
pub const YELLOW: u32 = 0xFFFF00;
pub const CYAN: u32 = 0x00FFFF;
pub const MAGENTA: u32 = 0xFF00FF;
pub const GRAY: u32 = 0x808080;
pub const SKY_BLUE: u32 = 0x87CEEB;

#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs an RGBA texel into the engine's `0xAARRGGBB` word.
#[inline]
pub const fn argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | rgb(r, g, b)
}

#[inline]
pub const fn alpha(texel: u32) -> u8 {
    (texel >> 24) as u8
}

/// Splits a color into its `(r, g, b)` channels, ignoring alpha.
#[inline]
pub const fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_puts_alpha_on_top() {
        assert_eq!(argb(0x11, 0x22, 0x33, 0x44), 0x4411_2233);
        assert_eq!(alpha(0x4411_2233), 0x44);
    }

    #[test]
    fn channels_ignore_alpha() {
        assert_eq!(channels(0xFF12_3456), (0x12, 0x34, 0x56));
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x123456);
    }
}
