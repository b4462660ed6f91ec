use log::{debug, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use super::{Platform, PlatformEvent};
use crate::colors;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::input::Key;
use crate::render::{font, Surface};

// Field order is drop order: the texture must go before its creator, and
// both before the canvas and the SDL context.
struct SdlContext {
    texture: Texture<'static>,
    _texture_creator: Box<TextureCreator<WindowContext>>,
    canvas: Canvas<Window>,
    event_pump: sdl2::EventPump,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

/// Native window backend built on SDL2.
///
/// The window is fixed-size. Frames are uploaded to a streaming ARGB8888
/// texture that is stretched 1:1 over the window; text is drawn with the
/// built-in font as filled rectangles on top of it.
pub struct SdlPlatform {
    context: Option<SdlContext>,
    width: u32,
    text_scale: u32,
    dirty: bool,
}

fn platform_err(e: impl ToString) -> EngineError {
    EngineError::Platform(e.to_string())
}

impl SdlPlatform {
    fn create_context(config: &EngineConfig) -> Result<SdlContext> {
        let sdl = sdl2::init().map_err(platform_err)?;
        let video = sdl.video().map_err(platform_err)?;

        let window = video
            .window(config.title(), config.width(), config.height())
            .position_centered()
            .build()
            .map_err(platform_err)?;

        let mut canvas = window.into_canvas().build().map_err(platform_err)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl.event_pump().map_err(platform_err)?;

        // SAFETY: texture_creator is heap-allocated and lives as long as the
        // context. The texture is declared first in SdlContext, so it is
        // dropped before texture_creator.
        let texture_creator_ref: &'static TextureCreator<WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let mut texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, config.width(), config.height())
            .map_err(platform_err)?;
        // Flat-color pixels carry a zero alpha byte; they must still show.
        texture.set_blend_mode(BlendMode::None);

        let (r, g, b) = colors::channels(config.background());
        canvas.set_draw_color(Color::RGB(r, g, b));
        canvas.clear();
        canvas.present();

        Ok(SdlContext {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            _video: video,
            _sdl: sdl,
        })
    }
}

impl Platform for SdlPlatform {
    fn open(config: &EngineConfig) -> Result<Self> {
        if config.width() == 0 || config.height() == 0 {
            return Err(EngineError::InvalidDimensions {
                width: config.width(),
                height: config.height(),
            });
        }
        let context = Self::create_context(config)?;
        info!(
            "SDL window \"{}\" opened at {}x{}",
            config.title(),
            config.width(),
            config.height()
        );
        Ok(Self {
            context: Some(context),
            width: config.width(),
            text_scale: config.text_scale(),
            dirty: false,
        })
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        for event in context.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => events.push(PlatformEvent::CloseRequested),
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_scancode(scancode) {
                        events.push(PlatformEvent::KeyDown(key));
                    }
                }
                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => {
                    if let Some(key) = map_scancode(scancode) {
                        events.push(PlatformEvent::KeyUp(key));
                    }
                }
                _ => {}
            }
        }
    }

    fn present(&mut self, surface: &Surface) -> Result<()> {
        let Some(context) = self.context.as_mut() else {
            return Ok(());
        };
        context
            .texture
            .update(None, surface.as_bytes(), (surface.width() * 4) as usize)
            .map_err(platform_err)?;
        context
            .canvas
            .copy(&context.texture, None, None)
            .map_err(platform_err)?;
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: u32) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        let scale = self.text_scale;
        let mut rects = Vec::new();
        font::for_each_lit(text, scale, |gx, gy| {
            rects.push(Rect::new(x.saturating_add(gx), y.saturating_add(gy), scale, scale));
        });
        if rects.is_empty() {
            return;
        }
        let (r, g, b) = colors::channels(color);
        context.canvas.set_draw_color(Color::RGB(r, g, b));
        if let Err(e) = context.canvas.fill_rects(&rects) {
            debug!("Text draw failed: {}", e);
        }
        self.dirty = true;
    }

    fn text_width(&self, text: &str) -> u32 {
        font::text_width(text, self.text_scale)
    }

    fn flush(&mut self) {
        if let Some(context) = self.context.as_mut() {
            if self.dirty {
                context.canvas.present();
                self.dirty = false;
            }
        }
    }

    fn shutdown(&mut self) {
        if self.context.take().is_some() {
            info!("SDL window ({} px wide) closed", self.width);
        }
    }
}

fn map_scancode(scancode: Scancode) -> Option<Key> {
    let key = match scancode {
        Scancode::A => Key::A,
        Scancode::B => Key::B,
        Scancode::C => Key::C,
        Scancode::D => Key::D,
        Scancode::E => Key::E,
        Scancode::F => Key::F,
        Scancode::G => Key::G,
        Scancode::H => Key::H,
        Scancode::I => Key::I,
        Scancode::J => Key::J,
        Scancode::K => Key::K,
        Scancode::L => Key::L,
        Scancode::M => Key::M,
        Scancode::N => Key::N,
        Scancode::O => Key::O,
        Scancode::P => Key::P,
        Scancode::Q => Key::Q,
        Scancode::R => Key::R,
        Scancode::S => Key::S,
        Scancode::T => Key::T,
        Scancode::U => Key::U,
        Scancode::V => Key::V,
        Scancode::W => Key::W,
        Scancode::X => Key::X,
        Scancode::Y => Key::Y,
        Scancode::Z => Key::Z,
        Scancode::Num0 => Key::Num0,
        Scancode::Num1 => Key::Num1,
        Scancode::Num2 => Key::Num2,
        Scancode::Num3 => Key::Num3,
        Scancode::Num4 => Key::Num4,
        Scancode::Num5 => Key::Num5,
        Scancode::Num6 => Key::Num6,
        Scancode::Num7 => Key::Num7,
        Scancode::Num8 => Key::Num8,
        Scancode::Num9 => Key::Num9,
        Scancode::Space => Key::Space,
        Scancode::Minus => Key::Minus,
        Scancode::Equals => Key::Equals,
        Scancode::LeftBracket => Key::LeftBracket,
        Scancode::RightBracket => Key::RightBracket,
        Scancode::Backslash => Key::Backslash,
        Scancode::Semicolon => Key::Semicolon,
        Scancode::Apostrophe => Key::Apostrophe,
        Scancode::Grave => Key::Backtick,
        Scancode::Comma => Key::Comma,
        Scancode::Period => Key::Period,
        Scancode::Slash => Key::Slash,
        Scancode::Up => Key::Up,
        Scancode::Down => Key::Down,
        Scancode::Left => Key::Left,
        Scancode::Right => Key::Right,
        Scancode::Return | Scancode::KpEnter => Key::Enter,
        Scancode::Escape => Key::Escape,
        Scancode::LShift | Scancode::RShift => Key::Shift,
        Scancode::LCtrl | Scancode::RCtrl => Key::Ctrl,
        Scancode::LAlt | Scancode::RAlt => Key::Alt,
        Scancode::Tab => Key::Tab,
        Scancode::CapsLock => Key::CapsLock,
        Scancode::Backspace => Key::Backspace,
        _ => return None,
    };
    Some(key)
}
