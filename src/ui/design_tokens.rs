// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the tilt card and its showcase window.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Card drop shadow
- **Sheen**: Light-reflection gradient stops

## Examples

```
use iced_tilt::ui::design_tokens::{palette, opacity};
use iced::Color;

let disc = Color {
    a: opacity::ACCENT,
    ..palette::CYAN
};
assert!(disc.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.067, 0.067, 0.067); // #111
    pub const GRAY_900: Color = Color::from_rgb(0.133, 0.133, 0.133); // #222
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333
    pub const GRAY_400: Color = Color::from_rgb(0.667, 0.667, 0.667); // #aaa

    // Accent
    pub const CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Card drop shadow
    pub const SHADOW: f32 = 0.5;
    /// Content accent disc
    pub const ACCENT: f32 = 0.8;
    /// Title text shadow
    pub const TEXT_SHADOW: f32 = 0.75;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const SM: f32 = 12.0; // 1.5 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of the accent disc on the card face
    pub const ACCENT_DISC: f32 = 100.0;
    /// Gap between the disc and the title
    pub const ACCENT_DISC_GAP: f32 = 20.0;
    /// Gap between the title and the subtitle
    pub const SUBTITLE_GAP: f32 = 10.0;
    /// Sheen layer size relative to the card
    pub const SHEEN_EXTENT: f32 = 1.8;
    /// Line segments per rounded corner when projecting the card outline
    pub const CORNER_SEGMENTS: usize = 6;
    /// Line segments for the accent disc outline
    pub const DISC_SEGMENTS: usize = 48;
    /// Room around the card for tilted edges and the shadow
    pub const CANVAS_MARGIN: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card title
    pub const TITLE: f32 = 32.0;

    /// Card subtitle
    pub const SUBTITLE: f32 = 18.0;

    /// Window hint line
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outline
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const CARD: f32 = 20.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::Vector;

    /// Offset of the card shadow, in pixels.
    pub const CARD_OFFSET: Vector = Vector { x: 0.0, y: 10.0 };

    /// Spread of the card shadow, in pixels.
    pub const CARD_BLUR: f32 = 15.0;

    /// Concentric shadow rings used to approximate the blur.
    pub const CARD_BLUR_STEPS: usize = 5;
}

// ============================================================================
// Sheen Gradient
// ============================================================================

pub mod sheen {
    /// Gradient stops `(offset, white alpha)` across the sheen layer.
    pub const STOPS: [(f32, f32); 5] = [
        (0.0, 0.0),
        (0.25, 0.05),
        (0.5, 0.08),
        (0.75, 0.05),
        (1.0, 0.0),
    ];

    /// Gradient direction inside the sheen layer, in layer fractions:
    /// from the top-left corner toward the middle of the right edge.
    pub const START: (f32, f32) = (0.0, 0.0);
    pub const END: (f32, f32) = (1.0, 0.5);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::SM > 0.0);
    assert!(spacing::XL > spacing::SM);

    // Opacity validation
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
    assert!(opacity::ACCENT > 0.0 && opacity::ACCENT < 1.0);

    // Typography validation
    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::SUBTITLE > typography::CAPTION);

    // Sheen must cover the card
    assert!(sizing::SHEEN_EXTENT > 1.0);
    assert!(sizing::CORNER_SEGMENTS > 0);
};
