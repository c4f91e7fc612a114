// SPDX-License-Identifier: MPL-2.0
//! Session marker drawn at the scroll origin.
//!
//! A small translucent circle with a white ring, shown where the middle
//! button was pressed. While the pointer is displaced, a white triangle
//! inside the circle points along the dominant scroll axis; at rest the
//! marker is a neutral dot.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme, Vector};

const MARKER_RADIUS: f32 = 10.0;
const MARKER_FILL_ALPHA: f32 = 0.6;
const ARROW_HALF_BASE: f32 = 3.0;
const ARROW_LENGTH: f32 = 4.0;
const ARROW_NUDGE: f32 = 1.0;

/// Dominant scroll direction shown by the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classifies a velocity into its dominant direction.
    ///
    /// The axis with the larger magnitude wins, vertical winning ties; the
    /// sign of the dominant component picks the direction. A zero velocity
    /// has no direction (the marker stays neutral).
    #[must_use]
    pub fn classify(velocity: Vector) -> Option<Self> {
        let ax = velocity.x.abs();
        let ay = velocity.y.abs();

        if ax == 0.0 && ay == 0.0 {
            return None;
        }

        Some(if ay >= ax {
            if velocity.y > 0.0 {
                Self::Down
            } else {
                Self::Up
            }
        } else if velocity.x > 0.0 {
            Self::Right
        } else {
            Self::Left
        })
    }
}

/// The on-screen marker for a scroll session.
///
/// Owned by the component for exactly as long as the session lives; the
/// geometry cache is only invalidated when the direction actually changes,
/// so repeated identical velocity updates redraw nothing.
pub struct Indicator {
    origin: Point,
    direction: Option<Direction>,
    cache: Cache,
}

impl Indicator {
    /// Creates a neutral marker at the press location.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            direction: None,
            cache: Cache::default(),
        }
    }

    /// Re-classifies the direction from the current velocity.
    pub fn update_direction(&mut self, velocity: Vector) {
        let direction = Direction::classify(velocity);
        if direction != self.direction {
            self.direction = direction;
            self.cache.clear();
        }
    }

    /// Where the session started, in viewport coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Currently displayed direction, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

/// Builds the full-size overlay layer carrying the marker.
///
/// The canvas emits no messages and keeps the default mouse interaction, so
/// the layer never intercepts pointer events.
pub fn layer<Message: 'static>(indicator: &Indicator) -> Element<'_, Message> {
    Canvas::new(indicator)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

impl<Message> canvas::Program<Message> for Indicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let circle = Path::circle(self.origin, MARKER_RADIUS);
                frame.fill(
                    &circle,
                    Color {
                        a: MARKER_FILL_ALPHA,
                        ..BLACK
                    },
                );
                frame.stroke(
                    &circle,
                    Stroke::default()
                        .with_width(border::WIDTH_MD)
                        .with_color(Color {
                            a: opacity::OVERLAY_HOVER,
                            ..WHITE
                        }),
                );

                if let Some(direction) = self.direction {
                    frame.fill(&arrow(self.origin, direction), WHITE);
                }
            });

        vec![geometry]
    }
}

/// Triangle pointing along `direction`, nudged one pixel toward it.
fn arrow(origin: Point, direction: Direction) -> Path {
    let half = ARROW_LENGTH / 2.0;
    let (a, b, apex) = match direction {
        Direction::Up => {
            let center_y = origin.y - ARROW_NUDGE;
            (
                Point::new(origin.x - ARROW_HALF_BASE, center_y + half),
                Point::new(origin.x + ARROW_HALF_BASE, center_y + half),
                Point::new(origin.x, center_y - half),
            )
        }
        Direction::Down => {
            let center_y = origin.y + ARROW_NUDGE;
            (
                Point::new(origin.x - ARROW_HALF_BASE, center_y - half),
                Point::new(origin.x + ARROW_HALF_BASE, center_y - half),
                Point::new(origin.x, center_y + half),
            )
        }
        Direction::Left => {
            let center_x = origin.x - ARROW_NUDGE;
            (
                Point::new(center_x + half, origin.y - ARROW_HALF_BASE),
                Point::new(center_x + half, origin.y + ARROW_HALF_BASE),
                Point::new(center_x - half, origin.y),
            )
        }
        Direction::Right => {
            let center_x = origin.x + ARROW_NUDGE;
            (
                Point::new(center_x - half, origin.y - ARROW_HALF_BASE),
                Point::new(center_x - half, origin.y + ARROW_HALF_BASE),
                Point::new(center_x + half, origin.y),
            )
        }
    };

    let mut path = canvas::path::Builder::new();
    path.move_to(a);
    path.line_to(b);
    path.line_to(apex);
    path.close();
    path.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_has_no_direction() {
        assert_eq!(Direction::classify(Vector::new(0.0, 0.0)), None);
    }

    #[test]
    fn dominant_vertical_component_picks_up_or_down() {
        assert_eq!(
            Direction::classify(Vector::new(1.0, 5.0)),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::classify(Vector::new(-1.0, -5.0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn dominant_horizontal_component_picks_left_or_right() {
        assert_eq!(
            Direction::classify(Vector::new(5.0, 1.0)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::classify(Vector::new(-5.0, -1.0)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn equal_magnitudes_go_to_the_vertical_axis() {
        assert_eq!(
            Direction::classify(Vector::new(3.0, 3.0)),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::classify(Vector::new(3.0, -3.0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn pure_horizontal_velocity_is_horizontal() {
        assert_eq!(
            Direction::classify(Vector::new(2.0, 0.0)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::classify(Vector::new(-2.0, 0.0)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn indicator_starts_neutral_at_origin() {
        let indicator = Indicator::new(Point::new(40.0, 60.0));
        assert_eq!(indicator.origin(), Point::new(40.0, 60.0));
        assert_eq!(indicator.direction(), None);
    }

    #[test]
    fn direction_update_is_idempotent() {
        let mut indicator = Indicator::new(Point::new(0.0, 0.0));

        indicator.update_direction(Vector::new(0.0, 4.0));
        assert_eq!(indicator.direction(), Some(Direction::Down));

        indicator.update_direction(Vector::new(0.0, 4.0));
        assert_eq!(indicator.direction(), Some(Direction::Down));

        indicator.update_direction(Vector::new(0.0, 0.0));
        assert_eq!(indicator.direction(), None);
    }
}
