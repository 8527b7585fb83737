// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering of a [`TiltCard`].
//!
//! The three layers are drawn flat and projected through their composed
//! transforms: the card outline through the card rotation, the content
//! through the card rotation plus parallax, and the sheen gradient through
//! the card rotation plus its slide. The sheen is filled inside the card
//! outline, which masks its edges the way a rounded clip would.

use crate::card::{ComposedTransforms, TiltCard};
use crate::domain::card::CardConfig;
use crate::motion::project;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sheen, sizing, typography};
use glam::{Mat4, Vec2};
use iced::advanced::graphics::gradient;
use iced::advanced::text;
use iced::widget::Action;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{alignment, font, mouse, touch, Color, Element, Font, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Pointer interaction reported by the card canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    Pressed(Point),
    Moved(Point),
    Released,
}

/// What the card face shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub subtitle: String,
    pub accent: Color,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            title: "3D Card".to_string(),
            subtitle: "Drag me!".to_string(),
            accent: palette::CYAN,
        }
    }
}

/// Canvas program for a tilt card with parallax content and sheen.
pub struct TiltCardCanvas<'a, Message> {
    card: &'a TiltCard,
    content: &'a CardContent,
    cache: &'a Cache,
    on_event: fn(CardEvent) -> Message,
}

impl<'a, Message: 'a> TiltCardCanvas<'a, Message> {
    #[must_use]
    pub fn new(
        card: &'a TiltCard,
        content: &'a CardContent,
        cache: &'a Cache,
        on_event: fn(CardEvent) -> Message,
    ) -> Self {
        Self {
            card,
            content,
            cache,
            on_event,
        }
    }

    /// Creates a Canvas widget sized to the card plus room for its tilt.
    pub fn into_element(self) -> Element<'a, Message> {
        let size = canvas_size(self.card.config());
        Canvas::new(self)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }

    fn publish(&self, event: CardEvent) -> Option<Action<Message>> {
        Some(Action::publish((self.on_event)(event)).and_capture())
    }

    /// Whether `position` (canvas coordinates) lies on the flat card.
    fn hits_card(&self, position: Point, bounds: Rectangle) -> bool {
        let config = self.card.config();
        let dx = (position.x - bounds.width / 2.0).abs();
        let dy = (position.y - bounds.height / 2.0).abs();
        dx <= config.width / 2.0 && dy <= config.height / 2.0
    }
}

/// Canvas size needed to draw a card with `config`.
#[must_use]
pub fn canvas_size(config: &CardConfig) -> iced::Size {
    iced::Size::new(
        config.width + sizing::CANVAS_MARGIN * 2.0,
        config.height + sizing::CANVAS_MARGIN * 2.0,
    )
}

impl<Message> canvas::Program<Message> for TiltCardCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let relative = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if self.hits_card(position, bounds) {
                    return self.publish(CardEvent::Pressed(position));
                }
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    let position = relative(*position);
                    if self.hits_card(position, bounds) {
                        return self.publish(CardEvent::Pressed(position));
                    }
                }
            }
            // Moves and releases are tracked outside the canvas too, so a
            // drag that leaves the card keeps steering it.
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if self.card.is_dragging() => {
                return self.publish(CardEvent::Moved(relative(*position)));
            }
            iced::Event::Touch(touch::Event::FingerMoved { position, .. }) if self.card.is_dragging() => {
                return self.publish(CardEvent::Moved(relative(*position)));
            }
            iced::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            )
            | iced::Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. })
                if self.card.is_dragging() =>
            {
                return self.publish(CardEvent::Released);
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let config = self.card.config();
            let transforms = self.card.transforms();

            let card_matrix = transforms.card.transform().matrix();
            let outline = rounded_rect(config.width, config.height, radius::CARD);
            let card_points = project_points(&card_matrix, &outline, center);
            if card_points.len() < 3 {
                return;
            }

            draw_shadow(frame, &card_points, center, config);

            let card_path = polygon(&card_points);
            frame.fill(&card_path, palette::GRAY_900);

            draw_content(frame, &transforms, self.content, center);
            draw_sheen(frame, &card_path, &transforms, config, center);

            frame.stroke(
                &card_path,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(palette::GRAY_800),
            );
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.card.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.hits_card(position, bounds) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}

// =============================================================================
// Layers
// =============================================================================

/// Soft drop shadow: concentric, slightly enlarged copies of the card outline.
fn draw_shadow(frame: &mut Frame, card_points: &[Point], center: Point, config: &CardConfig) {
    let half_extent = config.width.min(config.height) / 2.0;
    #[allow(clippy::cast_precision_loss)]
    let steps = shadow::CARD_BLUR_STEPS as f32;
    let ring_alpha = opacity::SHADOW / steps;

    for step in 0..shadow::CARD_BLUR_STEPS {
        #[allow(clippy::cast_precision_loss)] // step < CARD_BLUR_STEPS
        let spread = shadow::CARD_BLUR * (step as f32 + 1.0) / steps;
        let grow = 1.0 + spread / half_extent;
        let ring: Vec<Point> = card_points
            .iter()
            .map(|p| {
                Point::new(
                    center.x + (p.x - center.x) * grow + shadow::CARD_OFFSET.x,
                    center.y + (p.y - center.y) * grow + shadow::CARD_OFFSET.y,
                )
            })
            .collect();
        frame.fill(
            &polygon(&ring),
            Color {
                a: ring_alpha,
                ..palette::BLACK
            },
        );
    }
}

/// Accent disc, title and subtitle, stacked and centered on the card face.
fn draw_content(
    frame: &mut Frame,
    transforms: &ComposedTransforms,
    content: &CardContent,
    center: Point,
) {
    let matrix = transforms.content_in_card().matrix();

    let disc_radius = sizing::ACCENT_DISC / 2.0;
    let block_height = sizing::ACCENT_DISC
        + sizing::ACCENT_DISC_GAP
        + typography::TITLE
        + sizing::SUBTITLE_GAP
        + typography::SUBTITLE;
    let top = -block_height / 2.0;
    let disc_center = Vec2::new(0.0, top + disc_radius);
    let title_center = Vec2::new(
        0.0,
        top + sizing::ACCENT_DISC + sizing::ACCENT_DISC_GAP + typography::TITLE / 2.0,
    );
    let subtitle_center = Vec2::new(
        0.0,
        title_center.y + typography::TITLE / 2.0 + sizing::SUBTITLE_GAP + typography::SUBTITLE / 2.0,
    );

    let disc_outline = circle(disc_center, disc_radius, sizing::DISC_SEGMENTS);
    let disc = project_points(&matrix, &disc_outline, center);
    if disc.len() >= 3 {
        frame.fill(
            &polygon(&disc),
            Color {
                a: opacity::ACCENT,
                ..content.accent
            },
        );
    }

    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    if let Some((position, scale)) = project_anchor(&matrix, title_center, center) {
        let size = typography::TITLE * scale;
        frame.fill_text(Text {
            content: content.title.clone(),
            position: Point::new(position.x - 1.0, position.y + 1.0),
            color: Color {
                a: opacity::TEXT_SHADOW,
                ..palette::BLACK
            },
            size: size.into(),
            font: bold,
            align_x: text::Alignment::Center,
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: content.title.clone(),
            position,
            color: palette::WHITE,
            size: size.into(),
            font: bold,
            align_x: text::Alignment::Center,
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
    }

    if let Some((position, scale)) = project_anchor(&matrix, subtitle_center, center) {
        frame.fill_text(Text {
            content: content.subtitle.clone(),
            position,
            color: palette::GRAY_400,
            size: (typography::SUBTITLE * scale).into(),
            align_x: text::Alignment::Center,
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

/// Diagonal white gradient, faded by the sheen opacity, filled inside the card.
fn draw_sheen(
    frame: &mut Frame,
    card_path: &Path,
    transforms: &ComposedTransforms,
    config: &CardConfig,
    center: Point,
) {
    let matrix = transforms.sheen_in_card().matrix();
    let layer_width = config.width * sizing::SHEEN_EXTENT;
    let layer_height = config.height * sizing::SHEEN_EXTENT;
    let layer_point = |(fx, fy): (f32, f32)| {
        Vec2::new(
            (fx - 0.5) * layer_width,
            (fy - 0.5) * layer_height,
        )
    };

    let start = project(&matrix, layer_point(sheen::START));
    let end = project(&matrix, layer_point(sheen::END));
    let (Some(start), Some(end)) = (start, end) else {
        return;
    };

    let fill = sheen::STOPS.iter().fold(
        gradient::Linear::new(to_screen(start, center), to_screen(end, center)),
        |linear, &(offset, alpha)| {
            linear.add_stop(
                offset,
                Color {
                    a: alpha * transforms.sheen.opacity,
                    ..palette::WHITE
                },
            )
        },
    );

    frame.fill(card_path, fill);
}

// =============================================================================
// Geometry
// =============================================================================

/// Outline of a rounded rectangle centered on the origin, clockwise from the
/// top-left corner.
fn rounded_rect(width: f32, height: f32, corner_radius: f32) -> Vec<Vec2> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let r = corner_radius.min(half_w).min(half_h).max(0.0);

    // Corner centers with the angle each quarter arc starts at.
    let corners = [
        (Vec2::new(-half_w + r, -half_h + r), FRAC_PI_2 * 2.0),
        (Vec2::new(half_w - r, -half_h + r), FRAC_PI_2 * 3.0),
        (Vec2::new(half_w - r, half_h - r), 0.0),
        (Vec2::new(-half_w + r, half_h - r), FRAC_PI_2),
    ];

    let segments = sizing::CORNER_SEGMENTS;
    let mut points = Vec::with_capacity(corners.len() * (segments + 1));
    for (corner, start_angle) in corners {
        for i in 0..=segments {
            #[allow(clippy::cast_precision_loss)]
            let angle = start_angle + FRAC_PI_2 * i as f32 / segments as f32;
            points.push(corner + Vec2::new(angle.cos(), angle.sin()) * r);
        }
    }
    points
}

fn circle(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = TAU * i as f32 / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Projects layer points into canvas space, dropping points behind the viewer.
fn project_points(matrix: &Mat4, points: &[Vec2], center: Point) -> Vec<Point> {
    points
        .iter()
        .filter_map(|point| project(matrix, *point))
        .map(|point| to_screen(point, center))
        .collect()
}

/// Projects an anchor point and estimates the local horizontal scale there.
fn project_anchor(matrix: &Mat4, anchor: Vec2, center: Point) -> Option<(Point, f32)> {
    const SAMPLE_STEP: f32 = 10.0;
    let projected = project(matrix, anchor)?;
    let sampled = project(matrix, anchor + Vec2::new(SAMPLE_STEP, 0.0))?;
    let scale = (sampled - projected).length() / SAMPLE_STEP;
    Some((to_screen(projected, center), scale))
}

fn to_screen(point: Vec2, center: Point) -> Point {
    Point::new(center.x + point.x, center.y + point.y)
}

fn polygon(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some(first) = points.first() {
            builder.move_to(*first);
            for point in points.iter().skip(1) {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}
