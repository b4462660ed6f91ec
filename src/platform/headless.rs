use std::collections::VecDeque;

use log::debug;

use super::{Platform, PlatformEvent};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::render::{font, Surface};

/// One text overlay drawn since the last present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDraw {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: u32,
}

/// Backend without a window.
///
/// The "screen" is a copy of the last presented buffer, with text overlays
/// rasterized on top of it. Events are whatever was queued with
/// [`push_event`](Self::push_event).
#[derive(Debug)]
pub struct HeadlessPlatform {
    width: u32,
    height: u32,
    text_scale: u32,
    screen: Vec<u32>,
    texts: Vec<TextDraw>,
    events: VecDeque<PlatformEvent>,
    presents: u64,
    flushes: u64,
    open: bool,
}

impl HeadlessPlatform {
    pub fn new(width: u32, height: u32, text_scale: u32) -> Self {
        Self {
            width,
            height,
            text_scale: font::clamp_scale(text_scale),
            screen: vec![0; width as usize * height as usize],
            texts: Vec::new(),
            events: VecDeque::new(),
            presents: 0,
            flushes: 0,
            open: true,
        }
    }

    /// Queues an event for the next poll.
    pub fn push_event(&mut self, event: PlatformEvent) {
        self.events.push_back(event);
    }

    /// Last presented frame plus text overlays.
    pub fn screen(&self) -> &[u32] {
        &self.screen
    }

    pub fn screen_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.screen.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    /// Text drawn since the last present.
    pub fn texts(&self) -> &[TextDraw] {
        &self.texts
    }

    pub fn present_count(&self) -> u64 {
        self.presents
    }

    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Platform for HeadlessPlatform {
    fn open(config: &EngineConfig) -> Result<Self> {
        if config.width() == 0 || config.height() == 0 {
            return Err(EngineError::InvalidDimensions {
                width: config.width(),
                height: config.height(),
            });
        }
        debug!(
            "Headless surface {}x{} for \"{}\"",
            config.width(),
            config.height(),
            config.title()
        );
        Ok(Self::new(config.width(), config.height(), config.text_scale()))
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        events.extend(self.events.drain(..));
    }

    fn present(&mut self, surface: &Surface) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        if surface.pixels().len() != self.screen.len() {
            return Err(EngineError::Platform(format!(
                "surface is {}x{}, screen is {}x{}",
                surface.width(),
                surface.height(),
                self.width,
                self.height
            )));
        }
        self.screen.copy_from_slice(surface.pixels());
        self.texts.clear();
        self.presents += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: u32) {
        if !self.open {
            return;
        }
        let (w, h) = (self.width as i32, self.height as i32);
        let scale = self.text_scale as i32;
        let screen = &mut self.screen;
        font::for_each_lit(text, self.text_scale, |gx, gy| {
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x.saturating_add(gx + dx);
                    let py = y.saturating_add(gy + dy);
                    if px >= 0 && px < w && py >= 0 && py < h {
                        screen[(py * w + px) as usize] = color;
                    }
                }
            }
        });
        self.texts.push(TextDraw {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn text_width(&self, text: &str) -> u32 {
        font::text_width(text, self.text_scale)
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn shutdown(&mut self) {
        if self.open {
            self.open = false;
            self.events.clear();
            self.screen = Vec::new();
            self.texts.clear();
        }
    }
}
