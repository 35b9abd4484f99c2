//! Spatial and collision helpers shared by movement, combat and the boss AI.
//!
//! Angles are in degrees, measured counter-clockwise from +X, matching the
//! player's facing convention (270 = facing the far door at -Y).

use crate::core::constants::{
    DOOR_BAND_HALF_WIDTH, DOOR_ZONE_LIMIT, PLAYER_COLLISION_RADIUS, ROOM_HALF_LENGTH,
    ROOM_HALF_WIDTH,
};
use serde::{Deserialize, Serialize};

/// A point or vector on the room floor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle_deg`.
    pub fn from_angle(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(rad.cos(), rad.sin())
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Vec2) -> f64 {
        (*self - other).length()
    }

    /// Bearing from `self` to `target` in degrees, in (-180, 180].
    pub fn bearing_to(&self, target: Vec2) -> f64 {
        (target.y - self.y).atan2(target.x - self.x).to_degrees()
    }

    /// Moves up to `step` toward `target`. Returns the remaining distance
    /// before the step was taken.
    pub fn step_toward(&mut self, target: Vec2, step: f64) -> f64 {
        let delta = target - *self;
        let distance = delta.length();
        if distance > 0.0 {
            self.x += delta.x / distance * step;
            self.y += delta.y / distance * step;
        }
        distance
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Wraps an angle into [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in [-180, 180].
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    let mut diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// Point one `reach` ahead of `origin` along `angle_deg`.
pub fn project(origin: Vec2, angle_deg: f64, reach: f64) -> Vec2 {
    origin + Vec2::from_angle(angle_deg).scale(reach)
}

// ── Room bounds ─────────────────────────────────────────────────────

/// True when `x` lies inside the door band, where crossing the far/near
/// edge is a room transition instead of a wall hit.
pub fn in_door_band(x: f64) -> bool {
    x.abs() < DOOR_BAND_HALF_WIDTH
}

/// Largest |x| the player may occupy.
pub fn x_limit() -> f64 {
    ROOM_HALF_WIDTH - PLAYER_COLLISION_RADIUS
}

/// Largest |y| the player may occupy at horizontal position `x`.
pub fn y_limit(x: f64) -> f64 {
    if in_door_band(x) {
        DOOR_ZONE_LIMIT
    } else {
        ROOM_HALF_LENGTH - PLAYER_COLLISION_RADIUS
    }
}

/// Clamps a player position to the room using the door-band/wall-band rule.
pub fn clamp_to_room(position: Vec2) -> Vec2 {
    let y_max = y_limit(position.x);
    let x_max = x_limit();
    Vec2::new(
        position.x.clamp(-x_max, x_max),
        position.y.clamp(-y_max, y_max),
    )
}

// ── Furniture ───────────────────────────────────────────────────────

/// Axis-aligned rectangle given by its center and full extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            center: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Closest point of the rectangle to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Vec2::new(
            point.x.clamp(self.center.x - half_w, self.center.x + half_w),
            point.y.clamp(self.center.y - half_h, self.center.y + half_h),
        )
    }

    /// Distance from `point` to the rectangle (0 inside).
    pub fn distance_to(&self, point: Vec2) -> f64 {
        point.distance_to(self.closest_point(point))
    }
}

/// True if a circle at `center` with `radius` overlaps any obstacle.
pub fn circle_hits_any(center: Vec2, radius: f64, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|r| r.distance_to(center) < radius)
}

/// Furniture collision boxes for one of the five room layouts.
///
/// Player movement does not consult these yet; the renderer draws them and
/// `circle_hits_any` answers overlap queries.
pub fn furniture_layout(pattern: usize) -> Vec<Rect> {
    let mut boxes = Vec::new();
    match pattern % crate::core::constants::FURNITURE_LAYOUT_COUNT {
        0 => {
            for x in [-200.0, -80.0, 80.0, 200.0] {
                boxes.push(Rect::new(x, 250.0, 40.0, 40.0));
            }
            for y in [-150.0, 0.0, 150.0] {
                boxes.push(Rect::new(-250.0, y, 40.0, 40.0));
                boxes.push(Rect::new(250.0, y, 40.0, 40.0));
            }
            boxes.push(Rect::new(0.0, 0.0, 50.0, 50.0));
            for (x, y) in [(-40.0, -40.0), (40.0, -40.0), (-40.0, 40.0), (40.0, 40.0)] {
                boxes.push(Rect::new(x, y, 25.0, 25.0));
            }
        }
        1 => {
            for (x, y) in [(-240.0, -240.0), (240.0, -240.0), (-240.0, 240.0), (240.0, 240.0)] {
                boxes.push(Rect::new(x, y, 40.0, 40.0));
            }
            for (x, y) in [(-100.0, 100.0), (100.0, 100.0), (-100.0, -100.0), (100.0, -100.0)] {
                boxes.push(Rect::new(x, y, 50.0, 50.0));
                boxes.push(Rect::new(x - 30.0, y, 25.0, 25.0));
            }
        }
        2 => {
            for y in [-200.0, -80.0, 80.0, 200.0] {
                boxes.push(Rect::new(-240.0, y, 40.0, 40.0));
                boxes.push(Rect::new(240.0, y, 40.0, 40.0));
            }
            boxes.push(Rect::new(0.0, 0.0, 60.0, 60.0));
        }
        3 => {
            for x in [-200.0, 0.0, 200.0] {
                boxes.push(Rect::new(x, -230.0, 40.0, 40.0));
                boxes.push(Rect::new(x, 230.0, 40.0, 40.0));
            }
            for x in [-100.0, 100.0] {
                boxes.push(Rect::new(x, 0.0, 50.0, 50.0));
            }
        }
        _ => {
            for (x, y) in [(-180.0, -180.0), (180.0, -180.0), (-180.0, 180.0), (180.0, 180.0)] {
                boxes.push(Rect::new(x, y, 40.0, 40.0));
            }
            boxes.push(Rect::new(0.0, 0.0, 50.0, 50.0));
            for (x, y) in [(-60.0, 0.0), (60.0, 0.0), (0.0, -60.0), (0.0, 60.0)] {
                boxes.push(Rect::new(x, y, 30.0, 30.0));
            }
        }
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-9);
        assert!((wrap_degrees(-0.3) - 359.7).abs() < 1e-9);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!(wrap_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_shortest_angle_delta_wraps() {
        assert!((shortest_angle_delta(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((shortest_angle_delta(10.0, 350.0) + 20.0).abs() < 1e-9);
        assert!((shortest_angle_delta(270.0, -90.0)).abs() < 1e-9);
    }

    #[test]
    fn test_project_along_facing() {
        let p = project(Vec2::new(0.0, 0.0), 270.0, 30.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_toward_reports_distance() {
        let mut p = Vec2::new(0.0, 0.0);
        let d = p.step_toward(Vec2::new(3.0, 4.0), 1.0);
        assert!((d - 5.0).abs() < 1e-9);
        assert!((p.x - 0.6).abs() < 1e-9);
        assert!((p.y - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_door_band_widens_y_limit() {
        assert!(in_door_band(0.0));
        assert!(in_door_band(-99.0));
        assert!(!in_door_band(100.0));
        assert_eq!(y_limit(0.0), 295.0);
        assert_eq!(y_limit(150.0), 275.0);
    }

    #[test]
    fn test_clamp_to_room() {
        let clamped = clamp_to_room(Vec2::new(400.0, -400.0));
        assert_eq!(clamped, Vec2::new(270.0, -275.0));

        let in_door = clamp_to_room(Vec2::new(0.0, -400.0));
        assert_eq!(in_door, Vec2::new(0.0, -295.0));
    }

    #[test]
    fn test_rect_distance() {
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(r.distance_to(Vec2::new(10.0, 10.0)), 0.0);
        assert!((r.distance_to(Vec2::new(35.0, 0.0)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_hits_furniture() {
        let layout = furniture_layout(2);
        // Central pedestal 60x60 at the origin
        assert!(circle_hits_any(Vec2::new(35.0, 0.0), 10.0, &layout));
        assert!(!circle_hits_any(Vec2::new(45.0, 0.0), 10.0, &layout));
    }

    #[test]
    fn test_furniture_layouts_cycle() {
        assert_eq!(furniture_layout(0).len(), 15);
        assert_eq!(furniture_layout(1).len(), 12);
        assert_eq!(furniture_layout(2).len(), 9);
        assert_eq!(furniture_layout(3).len(), 8);
        assert_eq!(furniture_layout(4).len(), 9);
        assert_eq!(furniture_layout(5), furniture_layout(0));
    }
}
