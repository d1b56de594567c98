// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! border, radius and shadow scales shared by every component.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (leaf-green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.87, 0.96, 0.9);
    pub const PRIMARY_200: Color = Color::from_rgb(0.72, 0.9, 0.79);
    pub const PRIMARY_400: Color = Color::from_rgb(0.33, 0.78, 0.51);
    /// Armed submit-button green (#27ae60).
    pub const PRIMARY_500: Color = Color::from_rgb(0.153, 0.682, 0.376);
    pub const PRIMARY_600: Color = Color::from_rgb(0.12, 0.55, 0.31);
    pub const PRIMARY_700: Color = Color::from_rgb(0.09, 0.43, 0.24);

    /// Disarmed submit-button gray (#95a5a6).
    pub const MUTED_500: Color = Color::from_rgb(0.584, 0.647, 0.651);

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
    /// Barely-there overlays (hover washes).
    pub const OVERLAY_SUBTLE: f32 = 0.08;
    /// Medium overlays (pressed state washes).
    pub const OVERLAY_MEDIUM: f32 = 0.16;
    /// Hover overlays over media.
    pub const OVERLAY_HOVER: f32 = 0.6;
    /// Strong overlays (modal backdrops, loading screens).
    pub const OVERLAY_STRONG: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Width of a toast banner.
    pub const TOAST_WIDTH: f32 = 340.0;
    /// Height of the drop zone when empty.
    pub const DROP_ZONE_HEIGHT: f32 = 220.0;
    /// Maximum edge of the preview thumbnail.
    pub const PREVIEW_MAX_EDGE: f32 = 280.0;
    /// Width of the simulated progress bar.
    pub const PROGRESS_BAR_WIDTH: f32 = 320.0;
    /// Height of the simulated progress bar.
    pub const PROGRESS_BAR_HEIGHT: f32 = 10.0;
    /// Result-card width in the gallery grid.
    pub const CARD_WIDTH: f32 = 260.0;
    /// Result-card image height.
    pub const CARD_IMAGE_HEIGHT: f32 = 170.0;
    /// Diameter of a confidence badge.
    pub const CONFIDENCE_BADGE: f32 = 56.0;
    /// Maximum edge of the lightbox image.
    pub const MODAL_IMAGE_MAX_EDGE: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_LG: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const TITLE_LG: f32 = 28.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Dashed-look accent width for the drop zone.
    pub const WIDTH_LG: f32 = 3.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };

    /// Elevated shadow for hover-lifted cards.
    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 6.0),
        blur_radius: 16.0,
    };
}
