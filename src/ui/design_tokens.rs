// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the toast's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the severity families
- **Opacity**: Visible / hidden opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Presentation offsets

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing};

let success_background = palette::GREEN_500;
let padding = spacing::MD; // 16px
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
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);
    pub const GRAY_300: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);

    // Success family
    pub const GREEN_500: Color = Color::from_rgb8(0x00, 0xC9, 0x50);
    pub const GREEN_BORDER: Color = Color::from_rgb8(0x22, 0xC5, 0x5E);

    // Error family
    pub const RED_500: Color = Color::from_rgb8(0xFB, 0x2C, 0x36);
    pub const RED_BORDER: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.15;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Severity glyph, matches the 34x34 view box of the embedded SVGs.
    pub const ICON_TOAST: f32 = 34.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title
    pub const TITLE_SM: f32 = 16.0;

    /// Toast message
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - toast outline
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Vertical offset of a hidden toast: slid up 256px out of view.
    pub const HIDDEN_OFFSET_Y: f32 = -256.0;

    /// Vertical offset of a visible toast.
    pub const VISIBLE_OFFSET_Y: f32 = 0.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(typography::TITLE_SM > typography::BODY);

    assert!(motion::HIDDEN_OFFSET_Y < motion::VISIBLE_OFFSET_Y);
    assert!(sizing::ICON_TOAST < sizing::TOAST_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_families_are_distinct() {
        assert_ne!(palette::GREEN_500, palette::RED_500);
        assert_ne!(palette::GREEN_BORDER, palette::RED_BORDER);
        assert_ne!(palette::WHITE, palette::GREEN_500);
    }
}
