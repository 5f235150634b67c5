// SPDX-License-Identifier: MPL-2.0
//! Spinner drawn on a canvas, turned by the owner's rotation angle.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Line segments approximating the half-circle arc.
const ARC_SEGMENTS: u16 = 30;

/// Alpha of the full circle behind the arc, relative to the spinner color.
const TRACK_ALPHA: f32 = 0.25;

/// A half-circle arc turning over a faint full circle.
pub struct Spinner {
    cache: Cache,
    /// Rotation angle in radians.
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Stroke width for a spinner of `size`, thinner for button-sized spinners.
fn stroke_width(size: f32) -> f32 {
    (size / 10.0).clamp(1.5, 3.0)
}

/// Points of the arc, starting at the top of the circle when `rotation` is zero.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start_angle = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start_angle + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

impl<Message> canvas::Program<Message> for Spinner {
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
                let width = stroke_width(self.size);
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(width).with_color(Color {
                        a: self.color.a * TRACK_ALPHA,
                        ..self.color
                    }),
                );

                let points = arc_points(center, radius, self.rotation);
                let mut arc = canvas::path::Builder::new();
                if let Some((first, rest)) = points.split_first() {
                    arc.move_to(*first);
                    for point in rest {
                        arc.line_to(*point);
                    }
                }
                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
