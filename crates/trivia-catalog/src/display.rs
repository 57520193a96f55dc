//! Display parameters derived from the selected theme.
//!
//! Each getter is recomputed from the current theme on every call and falls
//! back to the presenter's built-in look when no theme is selected.

use trivia_core::{AnimationSpeed, Shape, ShapePosition, ShapeSize, ThemeDocument};

/// Transition duration used when none is selected or it is zero.
pub const DEFAULT_TRANSITION_MS: f64 = 700.0;

/// Primary text color without a theme.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

const DEFAULT_SHAPE_OPACITY: f64 = 0.2;

/// The three decorative shapes drawn when a theme defines none.
pub fn default_shapes() -> Vec<Shape> {
    [
        ("#22d3ee", ShapePosition::TopLeft, ShapeSize::Medium),
        ("#ec4899", ShapePosition::BottomRight, ShapeSize::Large),
        ("#fbbf24", ShapePosition::Center, ShapeSize::Large),
    ]
    .into_iter()
    .map(|(color, position, size)| Shape {
        color: color.to_string(),
        opacity: DEFAULT_SHAPE_OPACITY,
        position,
        size,
    })
    .collect()
}

pub fn animation_speed(theme: Option<&ThemeDocument>) -> AnimationSpeed {
    theme
        .map(|t| t.animations.shapes.speed)
        .unwrap_or_default()
}

/// Slide transition length in milliseconds.
pub fn transition_duration_ms(theme: Option<&ThemeDocument>) -> f64 {
    match theme.map(|t| t.animations.transitions.duration) {
        Some(ms) if ms > 0.0 => ms,
        _ => DEFAULT_TRANSITION_MS,
    }
}

pub fn shapes(theme: Option<&ThemeDocument>) -> Vec<Shape> {
    theme
        .and_then(|t| t.colors.shapes.clone())
        .unwrap_or_else(default_shapes)
}

pub fn text_color(theme: Option<&ThemeDocument>) -> String {
    theme
        .map(|t| t.colors.text.primary.clone())
        .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string())
}
