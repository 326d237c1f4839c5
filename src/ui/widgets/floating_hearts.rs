// SPDX-License-Identifier: MPL-2.0
//! Drifting backdrop hearts rendered on a Canvas.

use crate::decor::{HeartField, HeartSeed};
use crate::ui::design_tokens::sizing;
use crate::ui::theme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};

/// Ambient heart layer. Rebuilt every animation tick with the current
/// elapsed time; each heart rises from below the bottom edge to above the
/// top edge and wraps around, rotating once per pass.
pub struct FloatingHearts {
    cache: Cache,
    seeds: Vec<HeartSeed>,
    elapsed_secs: f32,
    color: Color,
}

impl FloatingHearts {
    /// Captures the field's parameters and current elapsed time.
    #[must_use]
    pub fn new(field: &HeartField, elapsed_secs: f32) -> Self {
        Self {
            cache: Cache::default(),
            seeds: field.seeds().to_vec(),
            elapsed_secs,
            color: theme::heart_color(),
        }
    }

    /// Creates a full-surface Canvas widget from this layer.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for FloatingHearts {
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
                for seed in &self.seeds {
                    let progress = seed.progress(self.elapsed_secs);
                    let x = seed.x_frac * frame.width();
                    // From 10% below the bottom edge to 10% above the top.
                    let y = frame.height() * (1.1 - 1.2 * progress);

                    frame.with_save(|frame| {
                        frame.translate(Vector::new(x, y));
                        frame.rotate(seed.rotation(self.elapsed_secs));
                        frame.fill(&heart_path(sizing::ICON_MD), self.color);
                    });
                }
            });

        vec![geometry]
    }
}

/// A heart of roughly `size` height centered on the origin, built from two
/// mirrored cubic curves.
fn heart_path(size: f32) -> Path {
    let s = size;
    let mut path = canvas::path::Builder::new();
    path.move_to(Point::new(0.0, 0.35 * s));
    path.bezier_curve_to(
        Point::new(-0.55 * s, -0.05 * s),
        Point::new(-0.25 * s, -0.5 * s),
        Point::new(0.0, -0.2 * s),
    );
    path.bezier_curve_to(
        Point::new(0.25 * s, -0.5 * s),
        Point::new(0.55 * s, -0.05 * s),
        Point::new(0.0, 0.35 * s),
    );
    path.close();
    path.build()
}
