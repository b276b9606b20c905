//! Tunable constants for one mounted stack.
//!
//! Defaults come from `constants.rs`. Hosts may override individual values by
//! key (the web front-end reads them from `data-stack-<key>` attributes):
//!
//! | key                         | field                      |
//! |-----------------------------|----------------------------|
//! | `stiffness`, `damping`      | spring parameters          |
//! | `rotate-x-from`, `-to`      | tilt about X (pointer Y)   |
//! | `rotate-y-from`, `-to`      | tilt about Y (pointer X)   |
//! | `collapsed-<layer>`         | depth while collapsed      |
//! | `exploded-<layer>`          | depth while exploded       |
//! | `dim-<layer>`               | opacity when another layer is focused |
//! | `focus-scale`               | scale of the focused layer |
//!
//! `<layer>` is one of `code`, `blueprint`, `ui`.

use thiserror::Error;

use crate::constants::{
    COLLAPSED_DEPTHS, DIM_OPACITIES, EXPLODED_DEPTHS, FOCUS_SCALE, SPRING_MAX_RATE,
};
use crate::layer::LayerId;
use crate::spring::SpringParams;
use crate::tilt::TiltRanges;

// Per-layer keys, indexed by [`LayerId::index`].
const COLLAPSED_KEYS: [&str; 3] = ["collapsed-code", "collapsed-blueprint", "collapsed-ui"];
const EXPLODED_KEYS: [&str; 3] = ["exploded-code", "exploded-blueprint", "exploded-ui"];
const DIM_KEYS: [&str; 3] = ["dim-code", "dim-blueprint", "dim-ui"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("config key `{key}`: `{value}` is not a number")]
    InvalidNumber { key: String, value: String },
    #[error("config key `{key}`: {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f32,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    pub spring: SpringParams,
    pub tilt: TiltRanges,
    /// Per-layer depth, indexed by [`LayerId::index`].
    pub collapsed_depths: [f32; 3],
    pub exploded_depths: [f32; 3],
    pub dim_opacities: [f32; 3],
    pub focus_scale: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            tilt: TiltRanges::default(),
            collapsed_depths: COLLAPSED_DEPTHS,
            exploded_depths: EXPLODED_DEPTHS,
            dim_opacities: DIM_OPACITIES,
            focus_scale: FOCUS_SCALE,
        }
    }
}

impl StackConfig {
    /// Set one value by key. The config is left unchanged on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let slot = self.slot_mut(key)?;
        let parsed: f32 = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        *slot = parsed;
        Ok(())
    }

    /// Apply a batch of overrides, returning the first error.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            self.apply(key, value)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("stiffness", self.spring.stiffness, "> 0", |v| v > 0.0)?;
        check("damping", self.spring.damping, ">= 0", |v| v >= 0.0)?;
        // Springs faster than this would need an unbounded number of sub-steps.
        check("stiffness", self.spring.stiffness, "sqrt(stiffness) + damping <= 2000", |_| {
            self.spring.rate() <= SPRING_MAX_RATE
        })?;
        check("rotate-x-from", self.tilt.rotate_x.from, "finite", |_| true)?;
        check("rotate-x-to", self.tilt.rotate_x.to, "finite", |_| true)?;
        check("rotate-y-from", self.tilt.rotate_y.from, "finite", |_| true)?;
        check("rotate-y-to", self.tilt.rotate_y.to, "finite", |_| true)?;
        for i in 0..3 {
            check(COLLAPSED_KEYS[i], self.collapsed_depths[i], "finite", |_| true)?;
            check(EXPLODED_KEYS[i], self.exploded_depths[i], "finite", |_| true)?;
            check(DIM_KEYS[i], self.dim_opacities[i], "0 ..= 1", |v| {
                (0.0..=1.0).contains(&v)
            })?;
        }
        check("focus-scale", self.focus_scale, "> 0", |v| v > 0.0)
    }

    fn slot_mut(&mut self, key: &str) -> Result<&mut f32, ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let slot = match key {
            "stiffness" => &mut self.spring.stiffness,
            "damping" => &mut self.spring.damping,
            "rotate-x-from" => &mut self.tilt.rotate_x.from,
            "rotate-x-to" => &mut self.tilt.rotate_x.to,
            "rotate-y-from" => &mut self.tilt.rotate_y.from,
            "rotate-y-to" => &mut self.tilt.rotate_y.to,
            "focus-scale" => &mut self.focus_scale,
            _ => {
                let (table, layer) = key.split_once('-').ok_or_else(unknown)?;
                let i = layer.parse::<LayerId>().map_err(|_| unknown())?.index();
                match table {
                    "collapsed" => &mut self.collapsed_depths[i],
                    "exploded" => &mut self.exploded_depths[i],
                    "dim" => &mut self.dim_opacities[i],
                    _ => return Err(unknown()),
                }
            }
        };
        Ok(slot)
    }
}

fn check(
    key: &'static str,
    value: f32,
    expected: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(StackConfig::default().validate(), Ok(()));
    }

    #[test]
    fn per_layer_keys_hit_the_right_slot() {
        let cfg = StackConfig::default()
            .with_overrides([("exploded-ui", "200"), ("dim-blueprint", " 0.5 ")])
            .unwrap();
        assert_eq!(cfg.exploded_depths, [-140.0, 0.0, 200.0]);
        assert_eq!(cfg.dim_opacities[1], 0.5);
    }

    #[test]
    fn bad_overrides_are_rejected() {
        let mut cfg = StackConfig::default();
        assert_eq!(
            cfg.apply("wobble", "1"),
            Err(ConfigError::UnknownKey("wobble".into()))
        );
        assert_eq!(
            cfg.apply("dim-roof", "1"),
            Err(ConfigError::UnknownKey("dim-roof".into()))
        );
        assert!(matches!(
            cfg.apply("stiffness", "stiff"),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert_eq!(cfg, StackConfig::default());
    }

    #[test]
    fn validation_catches_out_of_range_values() {
        let err = StackConfig::default()
            .with_overrides([("dim-code", "1.5")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "dim-code", .. }));
        let err = StackConfig::default()
            .with_overrides([("dim-ui", "-0.1")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "dim-ui", .. }));
        let err = StackConfig::default()
            .with_overrides([("exploded-blueprint", "NaN")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "exploded-blueprint", .. }));
        assert!(StackConfig::default()
            .with_overrides([("stiffness", "0")])
            .is_err());
        assert!(StackConfig::default()
            .with_overrides([("rotate-y-to", "inf")])
            .is_err());
    }

    #[test]
    fn spring_rate_is_bounded() {
        assert!(StackConfig::default()
            .with_overrides([("stiffness", "1000000")])
            .is_ok());
        assert!(StackConfig::default()
            .with_overrides([("damping", "1000")])
            .is_ok());
        let err = StackConfig::default()
            .with_overrides([("stiffness", "1e8")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "stiffness", .. }));
        assert!(StackConfig::default()
            .with_overrides([("damping", "5000")])
            .is_err());
    }
}
