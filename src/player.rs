use crate::math;
use glam::{vec2, Vec2};
use thiserror::Error;

/// Magnitude of the view-direction vector. Only the ratio between this and
/// the camera-plane length (the field of view) is observable, so the value
/// itself is arbitrary as long as it is non-zero.
pub const DIRECTION_LENGTH: f32 = 50.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Turn {
    Left,
    Right,
}

/// Step sense relative to the current view direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Walk {
    Forward,
    Backward,
}

#[derive(Error, Debug, PartialEq)]
pub enum PlayerError {
    #[error("at least 2 rays are required, got {0}")]
    TooFewRays(usize),
    #[error("field of view must be inside (0, 180) degrees, got {0}")]
    BadFov(f32),
    #[error("speed must be positive, got {0}")]
    BadSpeed(f32),
}

/// Player pose: a screen-space position plus, in the y-up math frame, the
/// view direction, the camera plane perpendicular to it, and one offset per
/// ray sampled across the plane's full width.
///
/// Ray 0 carries the `+|camera_plane|` offset; with the initial east-facing
/// direction that is the top of the y-up frame, i.e. the leftmost screen
/// column. Ray `n - 1` is the rightmost.
#[derive(Clone, PartialEq, Debug)]
pub struct Player {
    position: Vec2,
    direction: Vec2,
    camera_plane: Vec2,
    rays: Vec<Vec2>,
    radius: f32,
    turn_rate: f32,
    speed: f32,
}

impl Player {
    /// Build a pose at `(x, y)` facing east. `fov_deg` and `turn_rate_deg`
    /// are in degrees; internally everything is radians.
    pub fn new(
        x: f32,
        y: f32,
        radius: f32,
        fov_deg: f32,
        nrays: usize,
        turn_rate_deg: f32,
        speed: f32,
    ) -> Result<Self, PlayerError> {
        if nrays < 2 {
            return Err(PlayerError::TooFewRays(nrays));
        }
        if !(fov_deg > 0.0 && fov_deg < 180.0) {
            return Err(PlayerError::BadFov(fov_deg));
        }
        if !(speed > 0.0) {
            return Err(PlayerError::BadSpeed(speed));
        }

        let direction = vec2(DIRECTION_LENGTH, 0.0);
        let camera_plane = vec2(0.0, DIRECTION_LENGTH * (fov_deg.to_radians() / 2.0).tan());

        let cam_len = camera_plane.length();
        let across = camera_plane.normalize();
        let spacing = cam_len * 2.0 / (nrays - 1) as f32;
        let rays = (0..nrays)
            .map(|i| across * (cam_len - spacing * i as f32))
            .collect();

        Ok(Self {
            position: vec2(x, y),
            direction,
            camera_plane,
            rays,
            radius,
            turn_rate: turn_rate_deg.to_radians(),
            speed,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// View direction in the y-up math frame.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn camera_plane(&self) -> Vec2 {
        self.camera_plane
    }

    /// Per-ray offsets from the view direction, leftmost screen column first.
    pub fn rays(&self) -> &[Vec2] {
        &self.rays
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Rotate direction, camera plane and every ray offset by one turn step.
    /// `Turn::Left` is the positive (counterclockwise, y-up) rotation.
    pub fn turn(&mut self, dir: Turn) {
        let theta = match dir {
            Turn::Left => self.turn_rate,
            Turn::Right => -self.turn_rate,
        };
        let rot = math::rotation(theta);

        self.direction = rot * self.direction;
        self.camera_plane = rot * self.camera_plane;
        for ray in &mut self.rays {
            *ray = rot * *ray;
        }
    }

    /// Overwrite the position. Validity of the destination is the caller's
    /// concern; the collision gate lives in the engine.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(260.0, 277.0, 10.0, 66.0, 100, 10.0, 10.0).unwrap()
    }

    #[test]
    fn construction_validates_parameters() {
        assert_eq!(
            Player::new(0.0, 0.0, 10.0, 66.0, 1, 10.0, 10.0).unwrap_err(),
            PlayerError::TooFewRays(1)
        );
        assert_eq!(
            Player::new(0.0, 0.0, 10.0, 0.0, 10, 10.0, 10.0).unwrap_err(),
            PlayerError::BadFov(0.0)
        );
        assert_eq!(
            Player::new(0.0, 0.0, 10.0, 66.0, 10, 10.0, -2.0).unwrap_err(),
            PlayerError::BadSpeed(-2.0)
        );
        // two rays is the degenerate extremes-only fan, still accepted
        assert!(Player::new(0.0, 0.0, 10.0, 66.0, 2, 10.0, 10.0).is_ok());
    }

    #[test]
    fn camera_plane_encodes_half_fov() {
        let p = player();
        let expected = DIRECTION_LENGTH * (66.0f32.to_radians() / 2.0).tan();
        assert!((p.camera_plane().length() - expected).abs() < 1e-4);
    }

    #[test]
    fn ray_fan_spans_the_camera_plane() {
        let p = Player::new(0.0, 0.0, 10.0, 66.0, 5, 10.0, 10.0).unwrap();
        let cam = p.camera_plane();
        assert!((p.rays()[0] - cam).length() < 1e-4);
        assert!((p.rays()[4] + cam).length() < 1e-4);
        // odd ray counts have an exact center ray
        assert!(p.rays()[2].length() < 1e-4);
    }

    #[test]
    fn turning_preserves_lengths_and_orthogonality() {
        let mut p = player();
        let dir_len = p.direction().length();
        let cam_len = p.camera_plane().length();

        for _ in 0..17 {
            p.turn(Turn::Left);
        }
        for _ in 0..5 {
            p.turn(Turn::Right);
        }

        assert!((p.direction().length() - dir_len).abs() < 1e-3);
        assert!((p.camera_plane().length() - cam_len).abs() < 1e-3);
        assert!(p.direction().dot(p.camera_plane()).abs() < 1e-2);
    }

    #[test]
    fn left_then_right_restores_the_pose() {
        let mut p = player();
        let before = p.clone();

        p.turn(Turn::Left);
        assert_ne!(p.direction(), before.direction());
        p.turn(Turn::Right);

        assert!((p.direction() - before.direction()).length() < 1e-3);
        assert!((p.camera_plane() - before.camera_plane()).length() < 1e-3);
        assert!((p.rays()[0] - before.rays()[0]).length() < 1e-3);
    }

    #[test]
    fn left_turn_is_counterclockwise_in_the_math_frame() {
        let mut p = Player::new(0.0, 0.0, 10.0, 66.0, 3, 90.0, 10.0).unwrap();
        p.turn(Turn::Left);
        // east rotated 90 degrees counterclockwise points up (y-up frame)
        assert!((p.direction() - vec2(0.0, DIRECTION_LENGTH)).length() < 1e-3);
    }

    #[test]
    fn move_overwrites_position_only() {
        let mut p = player();
        let dir = p.direction();
        p.move_to(vec2(5.0, 6.0));
        assert_eq!(p.position(), vec2(5.0, 6.0));
        assert_eq!(p.direction(), dir);
    }
}
