//! Session configuration.
//!
//! Everything the engine needs at [`Engine::init`](crate::Engine::init) time
//! lives in [`EngineConfig`]. Values are set through builder methods and
//! never change for the lifetime of a session.

use crate::audio::AudioConfig;
use crate::colors;
use crate::render::font;

/// Physics constants in client code are authored per logical frame at this rate.
pub const LOGICAL_FPS: f32 = 60.0;

/// Largest delta time the frame clock will ever report, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Glyph scale of the built-in 8x8 font (2 gives 16x16 cells).
pub const DEFAULT_TEXT_SCALE: u32 = 2;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    width: u32,
    height: u32,
    title: String,
    background: u32,
    max_delta: f32,
    text_scale: u32,
    audio: AudioConfig,
}

impl EngineConfig {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            background: colors::BLACK,
            max_delta: DEFAULT_MAX_DELTA,
            text_scale: DEFAULT_TEXT_SCALE,
            audio: AudioConfig::default(),
        }
    }

    /// Sets the color every frame starts from (`0xRRGGBB`).
    pub fn with_background(mut self, color: u32) -> Self {
        self.background = color;
        self
    }

    /// Sets the spike clamp of the frame clock.
    ///
    /// Default: 0.1 seconds
    ///
    /// # Panics
    ///
    /// Panics if `max_delta` is not positive.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        assert!(max_delta > 0.0, "max delta must be positive, got {}", max_delta);
        self.max_delta = max_delta;
        self
    }

    /// Sets the integer scale of the built-in font, clamped to
    /// `[1, font::MAX_SCALE]`.
    pub fn with_text_scale(mut self, scale: u32) -> Self {
        self.text_scale = font::clamp_scale(scale);
        self
    }

    pub fn with_audio(mut self, audio: AudioConfig) -> Self {
        self.audio = audio;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    pub fn text_scale(&self) -> u32 {
        self.text_scale
    }

    pub fn audio(&self) -> &AudioConfig {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_constants() {
        let config = EngineConfig::new(320, 240, "test");
        assert_eq!(config.width(), 320);
        assert_eq!(config.height(), 240);
        assert_eq!(config.title(), "test");
        assert_eq!(config.background(), colors::BLACK);
        assert_relative_eq!(config.max_delta(), DEFAULT_MAX_DELTA);
        assert_eq!(config.text_scale(), DEFAULT_TEXT_SCALE);
    }

    #[test]
    fn zero_text_scale_becomes_one() {
        let config = EngineConfig::new(1, 1, "t").with_text_scale(0);
        assert_eq!(config.text_scale(), 1);
    }

    #[test]
    fn huge_text_scale_is_clamped() {
        let config = EngineConfig::new(1, 1, "t").with_text_scale(u32::MAX);
        assert_eq!(config.text_scale(), font::MAX_SCALE);
    }

    #[test]
    #[should_panic]
    fn negative_max_delta_panics() {
        let _ = EngineConfig::new(1, 1, "t").with_max_delta(-1.0);
    }
}
