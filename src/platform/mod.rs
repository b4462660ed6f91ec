//! Window, event and presentation backends.
//!
//! The engine talks to the OS through the [`Platform`] trait only. Two
//! independent backends implement it and share no state:
//!
//! - [`SdlPlatform`] (cargo feature `sdl`, on by default): a native,
//!   fixed-size window driven by SDL2
//! - [`HeadlessPlatform`]: an in-memory presentation surface fed by
//!   scripted events, for tests and tools
//!
//! [`DefaultPlatform`] names the backend picked at build time.

mod headless;
#[cfg(feature = "sdl")]
mod sdl;

pub use headless::{HeadlessPlatform, TextDraw};
#[cfg(feature = "sdl")]
pub use sdl::SdlPlatform;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::input::Key;
use crate::render::Surface;

/// Backend-neutral events produced by [`Platform::poll_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The user or the OS asked the window to close.
    CloseRequested,
}

/// The contract every windowing backend fulfils.
pub trait Platform {
    /// Creates the window and its presentation surface.
    ///
    /// On error, anything already created is released before returning.
    fn open(config: &EngineConfig) -> Result<Self>
    where
        Self: Sized;

    /// Drains every pending event into `events` without blocking.
    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>);

    /// Uploads the whole pixel buffer to the presentation surface.
    fn present(&mut self, surface: &Surface) -> Result<()>;

    /// Draws `text` straight onto the presentation surface, top-left at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: u32);

    /// Width in pixels `text` would occupy when drawn.
    fn text_width(&self, text: &str) -> u32;

    /// Makes everything presented and drawn since the last flush visible.
    fn flush(&mut self) {}

    /// Releases every OS resource. Must be safe to call more than once.
    fn shutdown(&mut self);
}

#[cfg(feature = "sdl")]
pub type DefaultPlatform = SdlPlatform;

#[cfg(not(feature = "sdl"))]
pub type DefaultPlatform = HeadlessPlatform;
