//! Toast styling and timing constants.

use crate::error::Result;
use serde::Deserialize;
use std::time::Duration;

/// Layout and animation constants shared by every toast a host presents.
///
/// Can be loaded from a (partial) TOML table; missing keys keep their defaults.
///
/// ```text
/// fade_seconds = 0.25
/// vertical_offset = 40
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastStyle {
    /// Length of each of the fade-in and fade-out animations, in seconds.
    pub fade_seconds: f64,

    /// Container corner radius.
    pub corner_radius: f64,

    /// Label font size.
    pub font_size: f64,

    /// Distance between the label and each container edge.
    pub label_inset: f64,

    /// Distance between the container and the leading/trailing edges of the surface.
    pub horizontal_inset: f64,

    /// Distance between the container and the top or bottom edge of the surface.
    pub vertical_offset: f64,

    /// Upper bound on presented surfaces followed while resolving the active surface.
    pub max_presentation_depth: usize,
}

impl Default for ToastStyle {
    fn default() -> Self {
        ToastStyle {
            fade_seconds: 0.5,
            corner_radius: 25.,
            font_size: 12.,
            label_inset: 15.,
            horizontal_inset: 65.,
            vertical_offset: 75.,
            max_presentation_depth: 64,
        }
    }
}

impl ToastStyle {
    /// Parses a style from TOML.
    pub fn from_toml(source: &str) -> Result<ToastStyle> {
        Ok(toml::from_str(source)?)
    }

    pub fn fade_duration(&self) -> Duration {
        seconds(self.fade_seconds)
    }
}

/// Converts seconds to a duration; negative and NaN become zero.
pub(crate) fn seconds(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0. {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_toml_keeps_defaults() {
        let style = ToastStyle::from_toml("fade_seconds = 0.25\nvertical_offset = 40.0").unwrap();
        assert_eq!(style.fade_duration(), Duration::from_millis(250));
        assert_eq!(style.vertical_offset, 40.);
        assert_eq!(style.corner_radius, 25.);
        assert_eq!(style.max_presentation_depth, 64);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ToastStyle::from_toml("").unwrap(), ToastStyle::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ToastStyle::from_toml("fade = 1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn seconds_clamps() {
        assert_eq!(seconds(-1.), Duration::ZERO);
        assert_eq!(seconds(f64::NAN), Duration::ZERO);
        assert_eq!(seconds(f64::NEG_INFINITY), Duration::ZERO);
        assert_eq!(seconds(1.5), Duration::from_millis(1500));
        assert_eq!(seconds(f64::INFINITY), Duration::MAX);
    }
}
