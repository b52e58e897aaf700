/// Continuous world-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, other: Position) {
        *self = other;
    }

    /// Squared Euclidean distance; range checks compare against squared radii.
    pub fn distance_squared(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance(&self, other: &Position) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Moves up to `step` towards `target` without overshooting.
    pub fn move_towards(&self, target: &Position, step: f32) -> Position {
        let distance = self.distance(target);
        if distance <= step || distance <= f32::EPSILON {
            return *target;
        }
        let t = step / distance;
        Position {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
            z: self.z + (target.z - self.z) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance() {
        let a = Position::new(1.0, 2.0, 0.0);
        let b = Position::new(4.0, 6.0, 0.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn move_towards_stops_at_target() {
        let start = Position::ORIGIN;
        let target = Position::new(10.0, 0.0, 0.0);
        assert_eq!(start.move_towards(&target, 4.0), Position::new(4.0, 0.0, 0.0));
        assert_eq!(start.move_towards(&target, 40.0), target);
    }
}
