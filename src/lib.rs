//! A minimal 2D software-rendered game engine.
//!
//! Sprites are composited on the CPU into an off-screen pixel buffer which
//! is uploaded to the window once per frame. SDL2 is only used for the
//! window, keyboard events and presentation.
//!
//! # Quick Start
//!
//! ```ignore
//! use arcade::prelude::*;
//!
//! let mut engine = Engine::init(EngineConfig::new(400, 800, "My Game"))?;
//! let block = ColorSprite::new(190.0, 750.0, 20.0, 20.0, colors::RED);
//! while engine.update() {
//!     engine.render(&[SpriteRef::from(&block)])?;
//!     engine.render_text_centered("PRESS SPACE", 100, colors::WHITE);
//! }
//! ```

// Public API - exposed to library consumers
pub mod assets;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod input;
pub mod platform;
pub mod render;
pub mod sprite;

// Re-export commonly needed types at crate root for convenience
pub use collision::{check_animated_collision, check_collision, check_image_collision, Body, Rect};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use group::{SpriteGroup, SpriteKind, SpriteRef};
pub use input::Key;
pub use sprite::{AnimatedSprite, ColorSprite, ImageSprite};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use arcade::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::EngineConfig;
    pub use crate::engine::Engine;
    pub use crate::error::{EngineError, Result};

    // Sprites
    pub use crate::group::{SpriteGroup, SpriteKind, SpriteRef};
    pub use crate::sprite::{AnimatedSprite, ColorSprite, ImageSprite};

    // Collision
    pub use crate::collision::{
        check_animated_collision, check_collision, check_image_collision, Body, Rect,
    };

    // Timing, input & color
    pub use crate::clock::frame_scale;
    pub use crate::colors;
    pub use crate::input::Key;

    // Assets
    pub use crate::assets::{flip_image, rotate_image, Flip, Rotation};
}

