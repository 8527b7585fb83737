// SPDX-License-Identifier: MPL-2.0
//! Transform composition: tilt state to per-layer transforms.
//!
//! The card is drawn as three layers sharing one center:
//!
//! - **card**: the rotated surface, seen through a fixed perspective;
//! - **content**: shifted for parallax, then rotated slightly back against the
//!   card tilt so it appears to carry weight;
//! - **sheen**: a gradient overlay sliding across the card and brightening
//!   as the horizontal tilt grows.
//!
//! All three are independent projections of the same clamped tilt.

use crate::domain::card::{CardConfig, TiltState};
use crate::motion::{interpolate, Span, Transform, TransformOp};

/// Card surface rotation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRotation {
    pub perspective: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl CardRotation {
    /// `perspective → rotateX → rotateY`
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(vec![
            TransformOp::Perspective(self.perspective),
            TransformOp::RotateX(self.rotate_x),
            TransformOp::RotateY(self.rotate_y),
        ])
    }
}

/// Content layer parallax and counter-rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl ContentTransform {
    /// `translateX → translateY → rotateX → rotateY`
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(vec![
            TransformOp::TranslateX(self.translate_x),
            TransformOp::TranslateY(self.translate_y),
            TransformOp::RotateX(self.rotate_x),
            TransformOp::RotateY(self.rotate_y),
        ])
    }
}

/// Sheen overlay slide and brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheenTransform {
    pub translate_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl SheenTransform {
    /// `translateX → scale`
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(vec![
            TransformOp::TranslateX(self.translate_x),
            TransformOp::Scale(self.scale),
        ])
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedTransforms {
    pub card: CardRotation,
    pub content: ContentTransform,
    pub sheen: SheenTransform,
}

impl ComposedTransforms {
    /// Full transform of the content layer, nested inside the card.
    #[must_use]
    pub fn content_in_card(&self) -> Transform {
        self.card.transform().nested(&self.content.transform())
    }

    /// Full transform of the sheen layer, nested inside the card.
    #[must_use]
    pub fn sheen_in_card(&self) -> Transform {
        self.card.transform().nested(&self.sheen.transform())
    }
}

/// Derives the three layer transforms from the current tilt.
#[must_use]
pub fn compose(tilt: TiltState, config: &CardConfig) -> ComposedTransforms {
    let angles = config.angle_span();

    // 1. Clamp both axes into [-max_angle, max_angle]
    let pitch = interpolate(tilt.pitch, angles, angles);
    let yaw = interpolate(tilt.yaw, angles, angles);

    // 2. Card rotation
    let card = CardRotation {
        perspective: config.perspective,
        rotate_x: pitch,
        rotate_y: yaw,
    };

    // 3. Content parallax, then counter-rotation
    let parallax = config.parallax_span();
    let counter = config.counter_rotation_span();
    let content = ContentTransform {
        translate_x: interpolate(yaw, angles, parallax),
        translate_y: interpolate(pitch, angles, parallax),
        rotate_x: interpolate(pitch, angles, counter),
        rotate_y: interpolate(yaw, angles, counter),
    };

    // 4. Sheen slide and brightness
    let sheen = SheenTransform {
        translate_x: interpolate(yaw, angles, config.sheen.slide_span()),
        opacity: interpolate(
            yaw.abs(),
            Span::new(0.0, config.max_angle),
            config.sheen.opacity_span(),
        ),
        scale: config.sheen.scale,
    };

    ComposedTransforms {
        card,
        content,
        sheen,
    }
}
