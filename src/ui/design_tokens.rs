// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use iced_drift::ui::design_tokens::{palette, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - badges, hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, the marker ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}
