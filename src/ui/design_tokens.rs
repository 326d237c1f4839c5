// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (festive cream/rose/gold scheme)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_invite::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a caption strip color
let strip = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
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
    pub const GRAY_800: Color = Color::from_rgb(0.17, 0.17, 0.19);
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.35, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.63);
    pub const GRAY_300: Color = Color::from_rgb(0.78, 0.78, 0.8);

    // Backdrop colors (warm blush whites)
    pub const CREAM: Color = Color::from_rgb(1.0, 0.976, 0.984);
    pub const BLUSH_100: Color = Color::from_rgb(0.988, 0.894, 0.925);

    // Brand colors (rose scale, the celebrant's color)
    pub const ROSE_300: Color = Color::from_rgb(1.0, 0.62, 0.78);
    pub const ROSE_500: Color = Color::from_rgb(1.0, 0.08, 0.58);
    pub const ROSE_700: Color = Color::from_rgb(0.78, 0.05, 0.44);

    // Accent colors (gold scale, for the festive trim)
    pub const GOLD_300: Color = Color::from_rgb(0.93, 0.84, 0.55);
    pub const GOLD_500: Color = Color::from_rgb(0.83, 0.69, 0.22);
    pub const GOLD_700: Color = Color::from_rgb(0.64, 0.51, 0.14);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const BACKDROP_FAINT: f32 = 0.08;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card surfaces keep a hint of the backdrop showing through.
    pub const SURFACE: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Square countdown unit box.
    pub const COUNTDOWN_BOX: f32 = 56.0;

    /// Round hero portrait diameter.
    pub const PORTRAIT: f32 = 128.0;

    /// Gallery pane height.
    pub const GALLERY_HEIGHT: f32 = 420.0;

    /// Thin progress track across the top of the gallery.
    pub const PROGRESS_TRACK: f32 = 4.0;

    /// Round music toggle diameter.
    pub const MUSIC_TOGGLE: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero display name.
    pub const DISPLAY: f32 = 64.0;

    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - subtle separators, countdown boxes
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - card outlines
    pub const WIDTH_MD: f32 = 2.0;

    /// Heavy border - the hero portrait ring
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PORTRAIT > sizing::COUNTDOWN_BOX);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_scale_is_monotonic() {
        assert!(radius::SM > radius::NONE);
        assert!(radius::MD > radius::SM);
        assert!(radius::LG > radius::MD);
        assert!(radius::XL > radius::LG);
        assert!(radius::FULL > radius::XL);
    }

    #[test]
    fn rose_scale_darkens() {
        assert!(palette::ROSE_300.r >= palette::ROSE_500.r);
        assert!(palette::ROSE_500.g < palette::ROSE_300.g);
        assert!(palette::ROSE_700.g < palette::ROSE_500.g);
    }

    #[test]
    fn shadows_grow_with_size() {
        assert!(shadow::SM.blur_radius < shadow::MD.blur_radius);
        assert!(shadow::MD.blur_radius < shadow::LG.blur_radius);
    }
}
