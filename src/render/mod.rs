//! Software rendering.
//!
//! - [`Surface`]: the owned off-screen pixel buffer
//! - [`compositor`]: clear, flat fills and alpha-tested blits
//! - [`font`]: the fixed-width bitmap font used for text overlays
//!
//! Text is not composited into the [`Surface`]; backends draw it onto the
//! presentation surface after the frame has been uploaded.

pub mod compositor;
pub mod font;
mod surface;

pub use compositor::compose;
pub use surface::Surface;

/// Left edge that centers a line of `text_width` pixels on the surface.
#[inline]
pub fn centered_x(surface_width: u32, text_width: u32) -> i32 {
    (surface_width as i32 - text_width as i32) / 2
}

/// Blink phase: visible for `interval` frames, hidden for the next
/// `interval`. An interval of zero never blinks.
#[inline]
pub fn blink_visible(frame_counter: u64, interval: u32) -> bool {
    if interval == 0 {
        return true;
    }
    let interval = interval as u64;
    frame_counter % (2 * interval) < interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_splits_the_slack() {
        assert_eq!(centered_x(400, 100), 150);
        assert_eq!(centered_x(400, 401), 0);
        assert_eq!(centered_x(100, 300), -100);
    }

    #[test]
    fn blink_alternates_every_interval() {
        let phases: Vec<bool> = (0..8).map(|f| blink_visible(f, 2)).collect();
        assert_eq!(
            phases,
            vec![true, true, false, false, true, true, false, false]
        );
    }

    #[test]
    fn zero_interval_is_always_visible() {
        assert!((0..10).all(|f| blink_visible(f, 0)));
    }
}
