use std::path::Path;

use log::warn;

use super::ImageSprite;
use crate::collision::{Body, Rect};
use crate::error::{EngineError, Result};

/// A fixed sequence of same-sized image frames played at a fixed cadence.
///
/// The frame under the cursor owns the transform: movement is applied to
/// it and then copied to every other frame, so all frames stay co-located.
/// `frames[0].active` is the liveness flag of the whole animation.
///
/// A failed construction yields the *empty* animation (no frames), which
/// is inert everywhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatedSprite {
    frames: Vec<ImageSprite>,
    current_frame: usize,
    frame_interval: u32,
    frame_counter: u32,
}

impl AnimatedSprite {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads one frame per path, all at `width x height`, advancing every
    /// `frame_interval` logical frames.
    ///
    /// All-or-nothing: if any frame fails, frames already built are dropped
    /// and the empty animation is returned.
    pub fn load<P: AsRef<Path>>(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paths: &[P],
        frame_interval: u32,
    ) -> Self {
        Self::try_load(x, y, width, height, paths, frame_interval).unwrap_or_else(|e| {
            warn!("Cannot build animation: {}", e);
            Self::empty()
        })
    }

    pub fn try_load<P: AsRef<Path>>(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paths: &[P],
        frame_interval: u32,
    ) -> Result<Self> {
        let frames = paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                ImageSprite::try_load(x, y, width, height, path).map_err(|e| {
                    EngineError::AnimationFrame {
                        index,
                        source: Box::new(e),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_frames(frames, frame_interval)
    }

    /// Assembles an animation from frames already in memory.
    ///
    /// Every frame must be loaded and share the first frame's texel size;
    /// otherwise all of them are dropped and an error is returned. All
    /// frames come out active and at the first frame's position.
    pub fn from_frames(frames: Vec<ImageSprite>, frame_interval: u32) -> Result<Self> {
        if frames.is_empty() {
            return Err(EngineError::InvalidImageSize {
                width: 0,
                height: 0,
            });
        }
        if let Some(index) = frames.iter().position(|f| !f.is_loaded()) {
            return Err(EngineError::AnimationFrame {
                index,
                source: Box::new(EngineError::InvalidImageSize {
                    width: 0,
                    height: 0,
                }),
            });
        }

        let expected = (frames[0].image_width(), frames[0].image_height());
        if let Some(index) = frames
            .iter()
            .position(|f| (f.image_width(), f.image_height()) != expected)
        {
            let frame = &frames[index];
            return Err(EngineError::AnimationFrame {
                index,
                source: Box::new(EngineError::FrameSize {
                    expected,
                    actual: (frame.image_width(), frame.image_height()),
                }),
            });
        }

        let mut anim = Self {
            frames,
            current_frame: 0,
            frame_interval,
            frame_counter: 0,
        };
        // Liveness lives on frames[0] only; the others must never veto movement.
        for frame in &mut anim.frames {
            frame.active = true;
        }
        let (x, y) = (anim.frames[0].x, anim.frames[0].y);
        anim.set_position(x, y);
        Ok(anim)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_interval(&self) -> u32 {
        self.frame_interval
    }

    pub fn frames(&self) -> &[ImageSprite] {
        &self.frames
    }

    /// The frame that is drawn and collides this logical frame.
    pub fn current(&self) -> Option<&ImageSprite> {
        self.frames.get(self.current_frame)
    }

    /// Whether the animation takes part in movement, collision and rendering.
    pub fn is_live(&self) -> bool {
        self.frames.first().is_some_and(|f| f.active)
    }

    pub fn set_active(&mut self, active: bool) {
        if let Some(first) = self.frames.first_mut() {
            first.active = active;
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        for frame in &mut self.frames {
            frame.x = x;
            frame.y = y;
        }
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        for frame in &mut self.frames {
            frame.vx = vx;
            frame.vy = vy;
        }
    }

    /// Moves the current frame, syncs the others to it, then steps the
    /// animation cadence.
    pub fn move_with_gravity(&mut self, gravity: f32, surface_height: f32) {
        if !self.is_live() {
            return;
        }
        let current = &mut self.frames[self.current_frame];
        current.move_with_gravity(gravity, surface_height);
        let (x, y, vx, vy) = (current.x, current.y, current.vx, current.vy);
        for frame in &mut self.frames {
            frame.x = x;
            frame.y = y;
            frame.vx = vx;
            frame.vy = vy;
        }
        self.advance_frame();
    }

    /// Counts one logical frame and flips to the next image every
    /// `frame_interval` counts.
    pub fn advance_frame(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.frame_counter += 1;
        if self.frame_counter >= self.frame_interval.max(1) {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
            self.frame_counter = 0;
        }
    }

    /// Drops every frame. Safe to repeat.
    pub fn free(&mut self) {
        for frame in &mut self.frames {
            frame.free();
        }
        self.frames = Vec::new();
        self.current_frame = 0;
        self.frame_counter = 0;
    }
}

impl Body for AnimatedSprite {
    fn bounds(&self) -> Rect {
        self.current().map(Body::bounds).unwrap_or_default()
    }

    fn is_solid(&self) -> bool {
        self.is_live() && self.current().is_some_and(Body::is_solid)
    }
}
