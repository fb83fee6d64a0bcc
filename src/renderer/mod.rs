//! Rendering module
//!
//! The game only ever clears the canvas, stamps the batter sprite and fills
//! circles, so the backend is a small immediate-mode `Surface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::config::Field;
use crate::consts::*;
use crate::sim::{Ball, GameState};

/// Images the surface knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Batter,
}

/// Immediate-mode drawing target
pub trait Surface {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: &str, stroke: &str);
}

/// Something that paints itself onto a surface
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Drawable for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_circle(self.pos.x, self.pos.y, self.radius, BALL_FILL, BALL_STROKE);
    }
}

/// Clear and draw the batter
pub fn draw_background(surface: &mut dyn Surface, field: &Field) {
    surface.clear();
    surface.draw_sprite(
        Sprite::Batter,
        field.center_x() - BATTER_SIZE / 2.0,
        field.height - BATTER_TOP,
        BATTER_SIZE,
        BATTER_SIZE,
    );
}

/// Draw one frame: background plus the ball while it is in play
pub fn render_frame(surface: &mut dyn Surface, state: &GameState) {
    draw_background(surface, &state.field);
    if state.is_ball_in_play() {
        if let Some(ball) = &state.ball {
            ball.draw(surface);
        }
    }
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn draw_sprite(&mut self, _sprite: Sprite, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32, _fill: &str, _stroke: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{force_end_game, throw_ball};

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Sprite(Sprite, f32, f32),
        Circle(f32, f32, f32),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.0.push(Call::Clear);
        }
        fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, _w: f32, _h: f32) {
            self.0.push(Call::Sprite(sprite, x, y));
        }
        fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: &str, _stroke: &str) {
            assert_eq!(fill, BALL_FILL);
            self.0.push(Call::Circle(x, y, radius));
        }
    }

    #[test]
    fn test_background_places_batter() {
        let mut surface = Recorder::default();
        draw_background(&mut surface, &Field::new(600.0, 400.0));
        assert_eq!(
            surface.0,
            vec![Call::Clear, Call::Sprite(Sprite::Batter, 250.0, 280.0)]
        );
    }

    #[test]
    fn test_ball_drawn_only_in_play() {
        let mut state = GameState::new(Field::default(), 3);
        let mut surface = Recorder::default();
        render_frame(&mut surface, &state);
        assert_eq!(surface.0.len(), 2);

        throw_ball(&mut state, 0.0);
        let mut surface = Recorder::default();
        render_frame(&mut surface, &state);
        assert_eq!(surface.0[2], Call::Circle(300.0, BALL_START_Y, BALL_RADIUS));

        force_end_game(&mut state);
        let mut surface = Recorder::default();
        render_frame(&mut surface, &state);
        assert_eq!(surface.0.len(), 2);
    }
}
