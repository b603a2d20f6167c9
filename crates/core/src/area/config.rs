//! Authored configuration for a rain area.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::placement::orientation::SplashSettings;

/// Scene-authored parameters for one [`crate::area::RainArea`].
///
/// Fields mirror what a scene author tunes: the slope cutoff for splash
/// placement, the minimum spacing between decals, the rain emitter shape
/// radius, and per-kind orientation settings. Values outside the authored
/// ranges are clamped (with a warning) when the area is constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RainAreaConfig {
    /// Maximum surface slope in degrees where splashes can occur (0-90)
    pub max_slope_for_splash: f32,
    /// Minimum distance between splash decals to prevent overlap (> 0.01)
    pub splash_spacing: f32,
    /// Radius and radius-thickness applied to the rain emitter shape (0.1-5)
    pub rain_radius: f32,
    /// Orientation settings for the horizontal (ground ripple) splash
    pub horizontal: SplashSettings,
    /// Orientation settings for the vertical (upward) splash
    pub vertical: SplashSettings,
}

impl RainAreaConfig {
    /// Authored range for `rain_radius`.
    pub const RAIN_RADIUS_RANGE: (f32, f32) = (0.1, 5.0);
}

impl Default for RainAreaConfig {
    fn default() -> Self {
        Self {
            max_slope_for_splash: 35.0,
            splash_spacing: 0.1,
            rain_radius: 1.0,
            horizontal: SplashSettings::horizontal(),
            vertical: SplashSettings::vertical(),
        }
    }
}

impl RainAreaConfig {
    /// Clamp every field to its authored range, warning when a value had to
    /// change. Non-finite values reset to the default for that field.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            max_slope_for_splash: clamp_field(
                "max_slope_for_splash",
                self.max_slope_for_splash,
                0.0,
                90.0,
                defaults.max_slope_for_splash,
            ),
            splash_spacing: clamp_field(
                "splash_spacing",
                self.splash_spacing,
                0.01,
                f32::MAX,
                defaults.splash_spacing,
            ),
            rain_radius: clamp_field(
                "rain_radius",
                self.rain_radius,
                Self::RAIN_RADIUS_RANGE.0,
                Self::RAIN_RADIUS_RANGE.1,
                defaults.rain_radius,
            ),
            horizontal: self.horizontal.clamped(),
            vertical: self.vertical.clamped(),
        }
    }
}

fn clamp_field(name: &str, value: f32, min: f32, max: f32, default: f32) -> f32 {
    if !value.is_finite() {
        warn!(field = name, "non-finite config value, using default {default}");
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field = name, "config value {value} out of range, clamped to {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let config = RainAreaConfig::default();
        assert_eq!(config, config.clone().clamped());
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let config = RainAreaConfig {
            max_slope_for_splash: 120.0,
            splash_spacing: 0.0,
            rain_radius: 10.0,
            ..RainAreaConfig::default()
        }
        .clamped();

        assert_eq!(config.max_slope_for_splash, 90.0);
        assert_eq!(config.splash_spacing, 0.01);
        assert_eq!(config.rain_radius, 5.0);
    }

    #[test]
    fn test_non_finite_values_reset_to_default() {
        let config = RainAreaConfig {
            max_slope_for_splash: f32::NAN,
            rain_radius: f32::INFINITY,
            ..RainAreaConfig::default()
        }
        .clamped();

        assert_eq!(config.max_slope_for_splash, 35.0);
        assert_eq!(config.rain_radius, 1.0);
    }
}
