// SPDX-License-Identifier: MPL-2.0
//! The startup confetti burst rendered on a Canvas.

use crate::config::CONFETTI_DURATION_SECS;
use crate::decor::ConfettiBurst;
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Festive color cycle for the particles.
const COLORS: [Color; 5] = [
    palette::GOLD_500,
    palette::ROSE_500,
    palette::ROSE_300,
    palette::GOLD_300,
    palette::BLUSH_100,
];

/// One-shot celebratory burst. Particles fly radially out of the center,
/// pick up a little fall, spin, and fade out as the burst spends itself.
pub struct Confetti {
    cache: Cache,
    burst: ConfettiBurst,
    progress: f32,
}

impl Confetti {
    /// Captures the burst's parameters and current lifetime fraction.
    #[must_use]
    pub fn new(burst: &ConfettiBurst, progress: f32) -> Self {
        Self {
            cache: Cache::default(),
            burst: burst.clone(),
            progress,
        }
    }

    /// Creates a full-surface Canvas widget from this burst.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Confetti {
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
                let center = frame.center();
                let unit = frame.width().min(frame.height());
                let elapsed = self.progress * CONFETTI_DURATION_SECS;
                let alpha = 1.0 - self.progress;

                for seed in self.burst.seeds() {
                    let distance = seed.speed * elapsed * unit;
                    let fall = 0.35 * unit * self.progress * self.progress;
                    let x = center.x + seed.angle.cos() * distance;
                    let y = center.y + seed.angle.sin() * distance + fall;

                    let color = COLORS[seed.color_index % COLORS.len()];
                    let side = seed.size * unit;
                    let square = Path::rectangle(
                        Point::new(-side / 2.0, -side / 2.0),
                        Size::new(side, side),
                    );

                    frame.with_save(|frame| {
                        frame.translate(Vector::new(x, y));
                        frame.rotate(seed.spin * elapsed);
                        frame.fill(&square, Color { a: alpha, ..color });
                    });
                }
            });

        vec![geometry]
    }
}
