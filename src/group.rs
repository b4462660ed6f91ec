//! Per-frame drawable staging.
//!
//! A [`SpriteGroup`] is not a scene graph. The host clears it at the start
//! of each frame, pushes what should be drawn in back-to-front order, and
//! hands it to the renderer. The group only borrows sprites; their texels
//! stay owned by the sprites themselves.

use log::trace;

use crate::collision::{Body, Rect};
use crate::sprite::{AnimatedSprite, ColorSprite, ImageSprite};

/// Tag of a [`SpriteRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Color,
    Image,
}

/// A borrowed drawable of either kind.
#[derive(Debug, Clone, Copy)]
pub enum SpriteRef<'a> {
    Color(&'a ColorSprite),
    Image(&'a ImageSprite),
}

impl SpriteRef<'_> {
    pub fn kind(&self) -> SpriteKind {
        match self {
            SpriteRef::Color(_) => SpriteKind::Color,
            SpriteRef::Image(_) => SpriteKind::Image,
        }
    }
}

impl<'a> From<&'a ColorSprite> for SpriteRef<'a> {
    fn from(sprite: &'a ColorSprite) -> Self {
        SpriteRef::Color(sprite)
    }
}

impl<'a> From<&'a ImageSprite> for SpriteRef<'a> {
    fn from(sprite: &'a ImageSprite) -> Self {
        SpriteRef::Image(sprite)
    }
}

impl Body for SpriteRef<'_> {
    fn bounds(&self) -> Rect {
        match self {
            SpriteRef::Color(s) => s.bounds(),
            SpriteRef::Image(s) => s.bounds(),
        }
    }

    fn is_solid(&self) -> bool {
        match self {
            SpriteRef::Color(s) => s.is_solid(),
            SpriteRef::Image(s) => s.is_solid(),
        }
    }
}

/// Bounded, ordered list of drawables for one frame.
///
/// Pushes beyond the capacity given at creation are dropped without error;
/// sizing the group is the host's job.
#[derive(Debug, Clone)]
pub struct SpriteGroup<'a> {
    sprites: Vec<SpriteRef<'a>>,
    capacity: usize,
}

impl<'a> SpriteGroup<'a> {
    pub fn new(capacity: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `sprite` if there is room.
    pub fn add(&mut self, sprite: impl Into<SpriteRef<'a>>) {
        if self.sprites.len() < self.capacity {
            self.sprites.push(sprite.into());
        } else {
            trace!("Sprite group full ({}), dropping sprite", self.capacity);
        }
    }

    /// Appends the animation's current frame, if the animation is live.
    pub fn add_animated(&mut self, anim: &'a AnimatedSprite) {
        if !anim.is_live() {
            return;
        }
        if let Some(frame) = anim.current() {
            self.add(frame);
        }
    }

    /// Empties the group for the next frame, keeping its capacity.
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Releases the storage. Sprites themselves are untouched.
    pub fn free(&mut self) {
        self.sprites = Vec::new();
        self.capacity = 0;
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sprites.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[SpriteRef<'a>] {
        &self.sprites
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpriteRef<'a>> {
        self.sprites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(texel: u32) -> ImageSprite {
        ImageSprite::from_pixels(0.0, 0.0, 2, 2, vec![texel; 4]).unwrap()
    }

    #[test]
    fn overflow_is_dropped() {
        let sprite = ColorSprite::new(0.0, 0.0, 1.0, 1.0, 0);
        let mut group = SpriteGroup::new(3);
        for _ in 0..4 {
            group.add(&sprite);
        }
        assert_eq!(group.len(), 3);
        assert!(group.is_full());
    }

    #[test]
    fn order_is_preserved() {
        let a = ColorSprite::new(0.0, 0.0, 1.0, 1.0, 1);
        let b = image(2);
        let mut group = SpriteGroup::new(4);
        group.add(&a);
        group.add(&b);
        let kinds: Vec<_> = group.iter().map(SpriteRef::kind).collect();
        assert_eq!(kinds, vec![SpriteKind::Color, SpriteKind::Image]);
    }

    #[test]
    fn clear_resets_count_only() {
        let a = ColorSprite::new(0.0, 0.0, 1.0, 1.0, 1);
        let mut group = SpriteGroup::new(2);
        group.add(&a);
        group.clear();
        assert!(group.is_empty());
        assert_eq!(group.capacity(), 2);
    }

    #[test]
    fn animated_adds_current_frame() {
        let anim = AnimatedSprite::from_frames(vec![image(1), image(2)], 1).unwrap();
        let mut group = SpriteGroup::new(2);
        group.add_animated(&anim);
        assert_eq!(group.len(), 1);
        match group.as_slice()[0] {
            SpriteRef::Image(frame) => assert_eq!(frame.pixels(), Some(&[1u32; 4][..])),
            SpriteRef::Color(_) => panic!("expected an image frame"),
        }
    }

    #[test]
    fn dead_animation_is_skipped() {
        let mut anim = AnimatedSprite::from_frames(vec![image(1)], 1).unwrap();
        anim.set_active(false);
        let empty = AnimatedSprite::empty();
        let mut group = SpriteGroup::new(2);
        group.add_animated(&anim);
        group.add_animated(&empty);
        assert!(group.is_empty());
    }

    #[test]
    fn free_keeps_sprites_intact() {
        let b = image(7);
        let mut group = SpriteGroup::new(1);
        group.add(&b);
        group.free();
        assert_eq!(group.capacity(), 0);
        assert!(b.is_loaded());
        // nothing fits anymore
        group.add(&b);
        assert!(group.is_empty());
    }
}
