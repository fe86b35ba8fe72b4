//! Session parameter bundle.
//!
//! Read-only while a session runs; edited between sessions from the
//! parameters screen or loaded from a JSON file.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable physics and layout parameters for one session.
///
/// Velocities and rates are in playfield units per tick. Ratios are relative
/// to the playfield width (spacing, pipe width, bird size) or height (gap,
/// pipe heights, ground tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    /// Velocity magnitude removed from the bird every tick.
    pub gravity: f64,
    /// Velocity the bird is set to on a jump (not additive).
    pub jump_impulse: f64,
    /// Most negative velocity the bird may reach.
    pub terminal_velocity: f64,
    /// Pipe movement per tick at a time multiplier of 1.
    pub pipe_base_rate: f64,
    /// Speed increase per point of score.
    pub time_increasing_factor: f64,
    pub pipe_spacing_ratio: f64,
    pub pipe_width_ratio: f64,
    pub gap_ratio: f64,
    pub height_min_ratio: f64,
    pub height_max_ratio: f64,
    pub bird_size_ratio: f64,
    /// How far below the ground (as a fraction of height) the bird may sink.
    pub ground_tolerance: f64,
    /// Longest frame delta in seconds accepted by the accumulator.
    pub max_frame_delta: f64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            terminal_velocity: DEFAULT_TERMINAL_VELOCITY,
            pipe_base_rate: DEFAULT_PIPE_BASE_RATE,
            time_increasing_factor: DEFAULT_TIME_INCREASING_FACTOR,
            pipe_spacing_ratio: DEFAULT_PIPE_SPACING_RATIO,
            pipe_width_ratio: DEFAULT_PIPE_WIDTH_RATIO,
            gap_ratio: DEFAULT_GAP_RATIO,
            height_min_ratio: DEFAULT_HEIGHT_MIN_RATIO,
            height_max_ratio: DEFAULT_HEIGHT_MAX_RATIO,
            bird_size_ratio: DEFAULT_BIRD_SIZE_RATIO,
            ground_tolerance: DEFAULT_GROUND_TOLERANCE,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
        }
    }
}

impl SessionParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Write parameters as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// All fields with their names, in a stable order.
    pub fn fields(&self) -> [(&'static str, f64); 13] {
        [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("terminal_velocity", self.terminal_velocity),
            ("pipe_base_rate", self.pipe_base_rate),
            ("time_increasing_factor", self.time_increasing_factor),
            ("pipe_spacing_ratio", self.pipe_spacing_ratio),
            ("pipe_width_ratio", self.pipe_width_ratio),
            ("gap_ratio", self.gap_ratio),
            ("height_min_ratio", self.height_min_ratio),
            ("height_max_ratio", self.height_max_ratio),
            ("bird_size_ratio", self.bird_size_ratio),
            ("ground_tolerance", self.ground_tolerance),
            ("max_frame_delta", self.max_frame_delta),
        ]
    }

    /// Mutable access to a field by its position in [`SessionParams::fields`].
    pub fn field_mut(&mut self, index: usize) -> Option<&mut f64> {
        let field = match index {
            0 => &mut self.gravity,
            1 => &mut self.jump_impulse,
            2 => &mut self.terminal_velocity,
            3 => &mut self.pipe_base_rate,
            4 => &mut self.time_increasing_factor,
            5 => &mut self.pipe_spacing_ratio,
            6 => &mut self.pipe_width_ratio,
            7 => &mut self.gap_ratio,
            8 => &mut self.height_min_ratio,
            9 => &mut self.height_max_ratio,
            10 => &mut self.bird_size_ratio,
            11 => &mut self.ground_tolerance,
            12 => &mut self.max_frame_delta,
            _ => return None,
        };
        Some(field)
    }

    /// Reject values that would make the simulation degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        check(self.gravity >= 0.0, "gravity", self.gravity, "must be >= 0")?;
        check(
            self.jump_impulse > 0.0,
            "jump_impulse",
            self.jump_impulse,
            "must be > 0",
        )?;
        check(
            self.terminal_velocity < 0.0,
            "terminal_velocity",
            self.terminal_velocity,
            "must be < 0",
        )?;
        check(
            self.pipe_base_rate > 0.0,
            "pipe_base_rate",
            self.pipe_base_rate,
            "must be > 0",
        )?;
        check(
            self.time_increasing_factor >= 0.0,
            "time_increasing_factor",
            self.time_increasing_factor,
            "must be >= 0",
        )?;
        check(
            self.pipe_spacing_ratio > 0.0,
            "pipe_spacing_ratio",
            self.pipe_spacing_ratio,
            "must be > 0",
        )?;
        check(
            self.pipe_width_ratio > 0.0 && self.pipe_width_ratio < 1.0,
            "pipe_width_ratio",
            self.pipe_width_ratio,
            "must be in (0, 1)",
        )?;
        check(
            self.pipe_spacing_ratio + self.pipe_width_ratio >= MIN_PIPE_PITCH_RATIO,
            "pipe_spacing_ratio",
            self.pipe_spacing_ratio,
            "pipe_spacing_ratio + pipe_width_ratio must be at least 0.05",
        )?;
        check(
            self.gap_ratio > 0.0 && self.gap_ratio < 1.0,
            "gap_ratio",
            self.gap_ratio,
            "must be in (0, 1)",
        )?;
        check(
            self.height_min_ratio >= 0.0,
            "height_min_ratio",
            self.height_min_ratio,
            "must be >= 0",
        )?;
        check(
            self.height_max_ratio >= self.height_min_ratio,
            "height_max_ratio",
            self.height_max_ratio,
            "must be >= height_min_ratio",
        )?;
        check(
            self.height_max_ratio + self.gap_ratio <= 1.0,
            "height_max_ratio",
            self.height_max_ratio,
            "height_max_ratio + gap_ratio must not exceed 1",
        )?;
        check(
            self.bird_size_ratio > 0.0 && self.bird_size_ratio < 1.0,
            "bird_size_ratio",
            self.bird_size_ratio,
            "must be in (0, 1)",
        )?;
        check(
            self.ground_tolerance >= 0.0,
            "ground_tolerance",
            self.ground_tolerance,
            "must be >= 0",
        )?;
        check(
            self.max_frame_delta > 0.0,
            "max_frame_delta",
            self.max_frame_delta,
            "must be > 0",
        )?;
        Ok(())
    }
}

fn check(
    ok: bool,
    field: &'static str,
    value: f64,
    reason: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SessionParams::default().validate().is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let params = SessionParams {
            gravity: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite { field: "gravity" })
        ));
    }

    #[test]
    fn test_positive_terminal_velocity_rejected() {
        let params = SessionParams {
            terminal_velocity: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfRange {
                field: "terminal_velocity",
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_height_bounds_rejected() {
        let params = SessionParams {
            height_min_ratio: 0.4,
            height_max_ratio: 0.3,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_gap_must_fit_above_tallest_pipe() {
        let params = SessionParams {
            gap_ratio: 0.8,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_tiny_pipe_pitch_rejected() {
        let params = SessionParams {
            pipe_spacing_ratio: 1e-12,
            pipe_width_ratio: 1e-12,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfRange {
                field: "pipe_spacing_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_smallest_pitch_keeps_pool_small() {
        let params = SessionParams {
            pipe_spacing_ratio: 0.02,
            pipe_width_ratio: 0.04,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        let count = crate::core::entities::Playfield::default().pipe_count(&params);
        assert!(count <= 30, "pool of {}", count);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: SessionParams = serde_json::from_str(r#"{ "gravity": 0.02 }"#).unwrap();
        assert!((params.gravity - 0.02).abs() < f64::EPSILON);
        assert_eq!(params.jump_impulse, DEFAULT_JUMP_IMPULSE);
    }

    #[test]
    fn test_non_numeric_json_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("flappy-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("params.json");
        fs::write(&path, r#"{ "gravity": "heavy" }"#).unwrap();

        assert!(matches!(
            SessionParams::load(&path),
            Err(ConfigError::Parse(_))
        ));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_field_mut_matches_fields_order() {
        let mut params = SessionParams::default();
        let count = params.fields().len();
        for i in 0..count {
            *params.field_mut(i).unwrap() = i as f64;
        }
        for (i, (_, value)) in params.fields().iter().enumerate() {
            assert_eq!(*value, i as f64);
        }
        assert!(params.field_mut(count).is_none());
    }
}
