use serde::{Deserialize, Serialize};

/// An opaque RGB color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` string for opaque fills.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string with the given opacity.
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Tuning for the particle field. Every field has a default, so a JSON
/// config only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Lattice spacing between particle anchors, in surface pixels.
    pub spacing: f32,
    /// Length of each particle's diagonal stroke along both axes.
    pub line_length: f32,
    /// Stroke width in surface pixels.
    pub line_width: f32,
    /// Influence radius around the focal point.
    pub focal_radius: f32,
    /// Spatial frequency of the wave across anchor X.
    pub wave_frequency: f32,
    /// Phase advance per frame.
    pub wave_speed: f32,
    /// Peak vertical wave displacement.
    pub wave_amplitude: f32,
    /// Displacement per frame at full force. Positive pulls toward the
    /// focal point, negative pushes away from it.
    pub push_strength: f32,
    /// Alpha lost per frame outside the radius.
    pub fade_rate: f32,
    /// Fraction of the remaining distance to the anchor/wave target
    /// recovered each frame.
    pub drift_rate: f32,
    /// Opaque fill painted before every frame.
    pub background: Rgb,
    /// Stroke color; opacity comes from each particle's alpha.
    pub stroke: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spacing: 18.0,
            line_length: 5.0,
            line_width: 1.0,
            focal_radius: 450.0,
            wave_frequency: 0.006,
            wave_speed: 0.04,
            wave_amplitude: 25.0,
            push_strength: 10.0,
            fade_rate: 0.02,
            drift_rate: 0.1,
            background: Rgb::BLACK,
            stroke: Rgb::WHITE,
        }
    }
}

impl FieldConfig {
    /// Smallest spacing accepted by the grid builder.
    pub const MIN_SPACING: f32 = 1.0;

    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spacing clamped to a value the lattice loop can make progress with.
    pub fn effective_spacing(&self) -> f32 {
        if self.spacing.is_finite() {
            self.spacing.max(Self::MIN_SPACING)
        } else {
            Self::MIN_SPACING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "spacing": 20, "stroke": { "r": 0, "g": 200, "b": 255 } }"#;
        let config = FieldConfig::from_json(json).unwrap();
        assert_eq!(config.spacing, 20.0);
        assert_eq!(config.stroke, Rgb::new(0, 200, 255));
        assert_eq!(config.focal_radius, 450.0);
        assert_eq!(config.background, Rgb::BLACK);
    }

    #[test]
    fn empty_json_is_default() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{ spacing: }").is_err());
        assert!(FieldConfig::from_json(r#"{ "spacing": "wide" }"#).is_err());
    }

    #[test]
    fn spacing_is_clamped() {
        let mut config = FieldConfig::default();
        config.spacing = 0.0;
        assert_eq!(config.effective_spacing(), FieldConfig::MIN_SPACING);
        config.spacing = f32::NAN;
        assert_eq!(config.effective_spacing(), FieldConfig::MIN_SPACING);
        config.spacing = 18.0;
        assert_eq!(config.effective_spacing(), 18.0);
    }

    #[test]
    fn css_strings() {
        assert_eq!(Rgb::BLACK.css(), "rgb(0, 0, 0)");
        assert_eq!(Rgb::WHITE.css_with_alpha(0.5), "rgba(255, 255, 255, 0.5)");
    }
}
