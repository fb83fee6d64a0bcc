//! The pitched ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Field;
use crate::consts::*;

/// Ball state - falling toward the batter or flying off the bat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Straight vertical descent at the fall speed
    Pitched,
    /// Constant-velocity flight after contact
    Hit { angle: f32, power: f32 },
}

/// A ball entity, one per pitch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed in pixels per tick
    pub speed: f32,
    pub state: BallState,
    /// Distance from the batter reference point (only tracked once hit)
    pub distance: f32,
}

impl Ball {
    /// New pitch entering from above the top center
    pub fn pitched(field: &Field) -> Self {
        Self {
            pos: Vec2::new(field.center_x(), BALL_START_Y),
            radius: BALL_RADIUS,
            speed: BALL_FALL_SPEED,
            state: BallState::Pitched,
            distance: 0.0,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self.state, BallState::Hit { .. })
    }

    /// Send the ball off the bat. Returns false if it was already hit.
    pub fn strike(&mut self, angle: f32, power: f32) -> bool {
        if self.is_hit() {
            return false;
        }
        self.state = BallState::Hit { angle, power };
        true
    }

    /// Advance one tick
    pub fn update(&mut self, field: &Field) {
        match self.state {
            BallState::Pitched => {
                self.pos.y += self.speed;
            }
            BallState::Hit { angle, power } => {
                // Screen y grows downward, so upward flight subtracts
                self.pos.x += angle.cos() * power;
                self.pos.y -= angle.sin() * power;
                self.distance = self.pos.distance(batter_reference(field));
            }
        }
    }

    /// Inside the vertical band in front of the batter. X is ignored.
    pub fn is_in_hit_zone(&self, field: &Field) -> bool {
        self.pos.y >= field.height - HIT_ZONE_FAR && self.pos.y <= field.height - HIT_ZONE_NEAR
    }

    pub fn is_out_of_bounds(&self, field: &Field) -> bool {
        self.pos.y > field.height
            || self.pos.y < BALL_TOP_MARGIN
            || self.pos.x < 0.0
            || self.pos.x > field.width
    }

    /// Displayed flight distance in whole meters
    pub fn flight_meters(&self) -> u32 {
        (self.distance / PIXELS_PER_METER).floor().max(0.0) as u32
    }
}

/// Fixed point the flight distance is measured from
pub fn batter_reference(field: &Field) -> Vec2 {
    Vec2::new(field.center_x(), field.height - BATTER_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_pitched_ball_falls_straight() {
        let field = Field::default();
        let mut ball = Ball::pitched(&field);
        assert_eq!(ball.pos, Vec2::new(300.0, -20.0));

        ball.update(&field);
        ball.update(&field);
        assert_eq!(ball.pos, Vec2::new(300.0, -16.0));
        assert_eq!(ball.distance, 0.0);
    }

    #[test]
    fn test_hit_zone_is_a_horizontal_band() {
        let field = Field::default();
        let mut ball = Ball::pitched(&field);

        ball.pos.y = field.height - HIT_ZONE_FAR - 0.5;
        assert!(!ball.is_in_hit_zone(&field));
        ball.pos.y = field.height - HIT_ZONE_FAR;
        assert!(ball.is_in_hit_zone(&field));
        ball.pos.y = field.height - HIT_ZONE_NEAR;
        assert!(ball.is_in_hit_zone(&field));
        ball.pos.y = field.height - HIT_ZONE_NEAR + 0.5;
        assert!(!ball.is_in_hit_zone(&field));

        // X doesn't matter
        ball.pos = Vec2::new(-500.0, field.height - 150.0);
        assert!(ball.is_in_hit_zone(&field));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        let field = Field::default();
        let mut ball = Ball::pitched(&field);

        ball.pos.y = field.height;
        assert!(!ball.is_out_of_bounds(&field));
        ball.pos.y = field.height + 1.0;
        assert!(ball.is_out_of_bounds(&field));

        ball.pos.y = -50.0;
        assert!(!ball.is_out_of_bounds(&field));
        ball.pos.y = -51.0;
        assert!(ball.is_out_of_bounds(&field));

        ball.pos = Vec2::new(-1.0, 100.0);
        assert!(ball.is_out_of_bounds(&field));
        ball.pos = Vec2::new(field.width + 1.0, 100.0);
        assert!(ball.is_out_of_bounds(&field));
        ball.pos = Vec2::new(field.width, 100.0);
        assert!(!ball.is_out_of_bounds(&field));
    }

    #[test]
    fn test_strike_only_once() {
        let field = Field::default();
        let mut ball = Ball::pitched(&field);
        assert!(ball.strike(1.0, 15.0));
        assert!(!ball.strike(0.8, 12.0));
        assert_eq!(ball.state, BallState::Hit { angle: 1.0, power: 15.0 });
    }

    #[test]
    fn test_hit_flight_is_constant_velocity() {
        let field = Field::default();
        let mut ball = Ball::pitched(&field);
        ball.pos = batter_reference(&field);
        ball.strike(FRAC_PI_2, 10.5);

        for step in 1..=5 {
            ball.update(&field);
            assert!((ball.pos.x - field.center_x()).abs() < 1e-3);
            // Distance is measured from the reference point, not accumulated
            assert!((ball.distance - 10.5 * step as f32).abs() < 1e-3);
        }
        assert_eq!(ball.flight_meters(), 5);
    }
}
