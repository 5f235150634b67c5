// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the storefront overlays.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use storefront_ui::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let faded_accent = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_500
};

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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Toast fading out while its exit delay runs
    pub const DISMISSING: f32 = 0.45;
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
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the countdown strip under a toast
    pub const PROGRESS_STRIP_HEIGHT: f32 = 3.0;

    /// Height of the global loading bar pinned to the top edge
    pub const LOADING_BAR_HEIGHT: f32 = 3.0;

    /// Spinner inside a busy button
    pub const SPINNER_SM: f32 = 14.0;

    /// Spinner of a content loading overlay
    pub const SPINNER_LG: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Toast titles
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Toast bodies, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISMISSING > 0.0 && opacity::DISMISSING < 1.0);

    assert!(sizing::PROGRESS_STRIP_HEIGHT > 0.0);
    assert!(sizing::SPINNER_LG > sizing::SPINNER_SM);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > 0.0);
    assert!(radius::MD > radius::SM);
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
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::WARNING_500, palette::INFO_500);
    }
}
