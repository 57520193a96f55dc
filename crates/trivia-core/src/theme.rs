//! # Theme Documents
//!
//! Typed view of a presenter theme. The JSON shape is camelCase; field names
//! here are snake_case with serde renames.
//!
//! Color strings are kept verbatim. Only the background `solid` color and
//! gradient stops are pattern-checked by the schema (hex `#RGB`/`#RRGGBB` or
//! an `rgb(`/`rgba(` call); every other color is free-form and interpreted by
//! the display layer.
//!
//! Layout spacing and border radius values are opaque tokens for the same
//! reason.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Colors ──────────────────────────────────────────────────────────

/// Linear gradient stops and direction. All parts are optional in the
/// schema; the display layer falls back per missing part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Direction token such as `to-br`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Page background: a solid color or a gradient, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Solid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        solid: Option<String>,
    },
    Gradient {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gradient: Option<Gradient>,
    },
}

/// `{ "type": "gradient", "gradient": { … } }` used by answer and progress
/// fills. The inner object is unconstrained by the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientFill {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Map<String, Value>>,
}

impl GradientFill {
    /// Extract the string-valued gradient parts, ignoring anything else.
    pub fn stops(&self) -> Gradient {
        let Some(map) = &self.gradient else {
            return Gradient::default();
        };
        let part = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
        Gradient {
            from: part("from"),
            via: part("via"),
            to: part("to"),
            direction: part("direction"),
        }
    }
}

/// A color string or a gradient object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Color(String),
    Gradient(GradientFill),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
}

/// Badge colors for one category level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColors {
    pub bg: String,
    pub text: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPalette {
    pub main: CategoryColors,
    pub sub: CategoryColors,
    pub subsub: CategoryColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Fill>,
    pub text: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBarColors {
    pub background: String,
    pub fill: Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeSize {
    Small,
    Medium,
    Large,
}

/// A decorative blurred shape drawn behind the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub position: ShapePosition,
    pub size: ShapeSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub background: Background,
    pub text: TextColors,
    pub categories: CategoryPalette,
    pub answer: AnswerColors,
    pub progress_bar: ProgressBarColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<Shape>>,
}

// ─── Typography ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyEntry {
    pub size: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTypography {
    pub main: TypographyEntry,
    pub sub: TypographyEntry,
    pub subsub: TypographyEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub title: TypographyEntry,
    pub question: TypographyEntry,
    pub answer: TypographyEntry,
    pub category: CategoryTypography,
}

// ─── Animations ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl std::fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeAnimation {
    pub enabled: bool,
    pub speed: AnimationSpeed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub enabled: bool,
    /// Transition length in milliseconds, `>= 0`.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animations {
    pub enabled: bool,
    pub shapes: ShapeAnimation,
    pub transitions: Transitions,
}

// ─── Layout ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub question: String,
    pub categories: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub categories: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
}

// ─── Background image ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    #[default]
    Cover,
    Contain,
    Auto,
}

/// Optional image layered over the background. `path` is relative to the
/// theme file's directory unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default = "default_image_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub size: ImageSize,
    #[serde(default = "default_image_position")]
    pub position: String,
}

fn default_image_opacity() -> f64 {
    1.0
}

fn default_image_position() -> String {
    "center".to_string()
}

// ─── Theme ───────────────────────────────────────────────────────────

/// A validated presenter theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    /// Display name, 1–50 characters.
    pub name: String,
    /// Description, at most 200 characters.
    pub description: String,
    pub colors: Colors,
    pub typography: Typography,
    pub animations: Animations,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
}
