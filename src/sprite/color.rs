use crate::collision::{Body, Rect};

/// A solid rectangle drawn with one 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    /// `0xRRGGBB`
    pub color: u32,
    pub active: bool,
}

impl ColorSprite {
    /// Creates an active, motionless sprite.
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            color,
            active: true,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Applies one logical frame of motion. No-op while inactive.
    pub fn move_with_gravity(&mut self, gravity: f32, surface_height: f32) {
        if !self.active {
            return;
        }
        super::integrate(
            &mut self.x,
            &mut self.y,
            self.vx,
            &mut self.vy,
            self.height,
            gravity,
            surface_height,
        );
    }
}

impl Body for ColorSprite {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn is_solid(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::check_collision;
    use approx::assert_relative_eq;

    #[test]
    fn gravity_accelerates_then_moves() {
        let mut s = ColorSprite::new(10.0, 10.0, 4.0, 4.0, 0).with_velocity(2.0, 0.0);
        s.move_with_gravity(0.5, 100.0);
        assert_relative_eq!(s.vy, 0.5);
        assert_relative_eq!(s.y, 10.5);
        assert_relative_eq!(s.x, 12.0);
    }

    #[test]
    fn floor_clamps_and_stops() {
        let mut s = ColorSprite::new(0.0, 150.0, 20.0, 20.0, 0).with_velocity(0.0, 3.0);
        s.move_with_gravity(0.0, 100.0);
        assert_relative_eq!(s.y, 80.0);
        assert_eq!(s.vy, 0.0);
    }

    #[test]
    fn ceiling_clamps_and_stops() {
        let mut s = ColorSprite::new(0.0, 2.0, 20.0, 20.0, 0).with_velocity(0.0, -8.0);
        s.move_with_gravity(0.0, 100.0);
        assert_eq!(s.y, 0.0);
        assert_eq!(s.vy, 0.0);
    }

    #[test]
    fn inactive_sprite_does_not_move() {
        let mut s = ColorSprite::new(5.0, 5.0, 1.0, 1.0, 0).with_velocity(1.0, 1.0);
        s.active = false;
        s.move_with_gravity(9.0, 100.0);
        assert_eq!(s.x, 5.0);
        assert_eq!(s.y, 5.0);
        assert_eq!(s.vy, 1.0);
    }

    #[test]
    fn inactive_vetoes_overlap() {
        let a = ColorSprite::new(0.0, 0.0, 10.0, 10.0, 0);
        let mut b = ColorSprite::new(5.0, 5.0, 10.0, 10.0, 0);
        assert!(check_collision(&a, &b));
        b.active = false;
        assert!(!check_collision(&a, &b));
        assert!(!check_collision(&b, &a));
    }
}
