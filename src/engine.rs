//! The per-session engine context.
//!
//! [`Engine`] owns everything a running game needs: the platform backend,
//! the off-screen [`Surface`], keyboard state, the frame clock and the sound
//! player. A host creates one with [`Engine::init`], then loops:
//!
//! ```ignore
//! use arcade::prelude::*;
//!
//! let mut engine = Engine::init(EngineConfig::new(400, 800, "Jump"))?;
//! let mut player = ColorSprite::new(190.0, 750.0, 20.0, 20.0, colors::RED);
//! while engine.update() {
//!     let dt = engine.delta_time();
//!     player.move_with_gravity(0.5 * frame_scale(dt), 800.0);
//!     engine.render(&[SpriteRef::from(&player)])?;
//! }
//! ```

use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::audio::AudioPlayer;
use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::group::{SpriteGroup, SpriteRef};
use crate::input::{InputState, Key};
use crate::platform::{DefaultPlatform, Platform, PlatformEvent};
use crate::render::{self, compose, Surface};

pub struct Engine<P: Platform = DefaultPlatform> {
    config: EngineConfig,
    platform: P,
    surface: Surface,
    input: InputState,
    clock: FrameClock,
    audio: AudioPlayer,
    events: Vec<PlatformEvent>,
    frame_counter: u64,
    running: bool,
    closed: bool,
}

impl Engine<DefaultPlatform> {
    /// Opens the build's default backend and starts a session.
    pub fn init(config: EngineConfig) -> Result<Self> {
        Self::open(config)
    }
}

impl<P: Platform> Engine<P> {
    /// Opens backend `P` and starts a session.
    pub fn open(config: EngineConfig) -> Result<Self> {
        validate(&config)?;
        let platform = P::open(&config)?;
        Self::with_platform(platform, config)
    }

    /// Starts a session around an already open backend.
    pub fn with_platform(platform: P, config: EngineConfig) -> Result<Self> {
        validate(&config)?;
        let surface = Surface::new(config.width(), config.height(), config.background());
        let clock = FrameClock::with_max_delta(config.max_delta());
        let audio = AudioPlayer::new(config.audio().clone());
        info!(
            "Engine started: \"{}\" {}x{}",
            config.title(),
            config.width(),
            config.height()
        );
        Ok(Self {
            config,
            platform,
            surface,
            input: InputState::new(),
            clock,
            audio,
            events: Vec::new(),
            frame_counter: 0,
            running: true,
            closed: false,
        })
    }

    /// Runs one step of the event loop.
    ///
    /// Shows the frame composed since the previous call, applies every
    /// pending event to the key tables and bumps the frame counter.
    /// Returns whether the session is still running.
    pub fn update(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.platform.flush();

        self.events.clear();
        self.platform.poll_events(&mut self.events);
        for event in self.events.drain(..) {
            match event {
                PlatformEvent::KeyDown(key) => self.input.press(key),
                PlatformEvent::KeyUp(key) => self.input.release(key),
                PlatformEvent::CloseRequested => self.running = false,
            }
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.running
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Stops any playing sound and releases the window.
    ///
    /// Safe to call more than once; dropping the engine calls it too.
    pub fn quit(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.running = false;
        if let Err(e) = self.audio.stop() {
            warn!("Stopping sounds on quit failed: {}", e);
        }
        self.platform.shutdown();
        info!("Engine stopped after {} frames", self.frame_counter);
    }

    pub fn sleep(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    /// Seconds since the previous call, clamped to the configured maximum.
    /// The first call of a session returns 0.
    pub fn delta_time(&mut self) -> f32 {
        self.clock.delta_time()
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.input.key_pressed(key)
    }

    /// True only on the first query after `key` went down.
    pub fn key_pressed_once(&mut self, key: Key) -> bool {
        self.input.key_pressed_once(key)
    }

    pub fn clear_keys(&mut self) {
        self.input.clear();
    }

    /// Composes `sprites` back to front over the background and presents
    /// the result.
    pub fn render(&mut self, sprites: &[SpriteRef<'_>]) -> Result<()> {
        compose(&mut self.surface, sprites);
        self.platform.present(&self.surface)
    }

    pub fn render_group(&mut self, group: &SpriteGroup<'_>) -> Result<()> {
        self.render(group.as_slice())
    }

    /// Reads a pixel of the last composed frame. Text is not included.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.surface.pixel(x, y)
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub fn render_text(&mut self, text: &str, x: i32, y: i32, color: u32) {
        self.platform.draw_text(text, x, y, color);
    }

    pub fn render_text_centered(&mut self, text: &str, y: i32, color: u32) {
        let width = self.platform.text_width(text);
        let x = render::centered_x(self.config.width(), width);
        self.platform.draw_text(text, x, y, color);
    }

    /// Like [`render_text_centered`](Self::render_text_centered), but only
    /// on the visible half of a `2 * interval` frame cycle.
    pub fn render_text_centered_blink(&mut self, text: &str, y: i32, color: u32, interval: u32) {
        if render::blink_visible(self.frame_counter, interval) {
            self.render_text_centered(text, y, color);
        }
    }

    /// Plays a WAV file in the background.
    pub fn play_sound<Q: AsRef<Path>>(&mut self, path: Q) -> Result<()> {
        if self.closed {
            return Err(EngineError::Audio("engine has quit".to_string()));
        }
        self.audio.play(path)
    }

    pub fn stop_sound(&mut self) -> Result<()> {
        self.audio.stop()
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn width(&self) -> u32 {
        self.config.width()
    }

    pub fn height(&self) -> u32 {
        self.config.height()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

impl<P: Platform> Drop for Engine<P> {
    fn drop(&mut self) {
        self.quit();
    }
}

fn validate(config: &EngineConfig) -> Result<()> {
    if config.width() == 0 || config.height() == 0 {
        return Err(EngineError::InvalidDimensions {
            width: config.width(),
            height: config.height(),
        });
    }
    Ok(())
}
