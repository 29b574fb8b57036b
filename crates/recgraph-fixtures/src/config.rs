//! Generator configuration: scale policy and fixture counts.
//!
//! A single integer scale knob controls the magnitude of every generated
//! collection through fixed multipliers. Out-of-range scales are not
//! rejected; they are replaced by [`SCALE_DEFAULT`], so construction never
//! fails on bad input. The substitution is a policy, not an error: the only
//! observable effect is a warning event.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Smallest accepted scale.
pub const SCALE_MIN: i64 = 300;

/// Largest accepted scale.
pub const SCALE_MAX: i64 = 10_000;

/// Substitute used for any scale outside `[SCALE_MIN, SCALE_MAX]`.
pub const SCALE_DEFAULT: u64 = 500;

/// Configuration for [`DatasetGenerator`](crate::DatasetGenerator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Emit per-phase progress events while generating.
    pub debug: bool,

    /// Requested scale; resolved through [`GeneratorConfig::effective_scale`].
    pub scale: i64,

    /// Seed for the generator-owned RNG. Corpus structure is fixed by the
    /// scale; content is reproducible per seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            scale: SCALE_DEFAULT as i64,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given debug flag and scale, default seed.
    pub fn new(debug: bool, scale: i64) -> Self {
        Self {
            debug,
            scale,
            ..Self::default()
        }
    }

    /// Resolve the requested scale against the accepted range.
    ///
    /// Values in `[SCALE_MIN, SCALE_MAX]` pass through unchanged; anything
    /// else (including negatives) becomes [`SCALE_DEFAULT`]. Note the
    /// asymmetry: out-of-range input is replaced by the default, not clamped
    /// to the nearest bound.
    pub fn effective_scale(&self) -> u64 {
        if self.scale < SCALE_MIN || self.scale > SCALE_MAX {
            warn!(
                requested = self.scale,
                substitute = SCALE_DEFAULT,
                "scale outside accepted range, using the default"
            );
            SCALE_DEFAULT
        } else {
            self.scale as u64
        }
    }
}

/// Entity counts derived from an effective scale.
///
/// Fractional products round half away from zero, so an odd scale still
/// yields deterministic quality and category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCounts {
    pub users: usize,
    pub items: usize,
    pub qualities: usize,
    pub categories: usize,
}

impl FixtureCounts {
    /// Compute the counts for an effective (post-substitution) scale.
    pub fn for_scale(scale: u64) -> Self {
        let s = scale as f64;
        Self {
            users: (s * 250.0).round() as usize,
            items: (s * 100.0).round() as usize,
            qualities: (s * 2.5).round() as usize,
            categories: (s / 10.0).round() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_scale_passes_through() {
        for scale in [300, 301, 500, 2000, 9_999, 10_000] {
            let config = GeneratorConfig::new(false, scale);
            assert_eq!(config.effective_scale(), scale as u64);
        }
    }

    #[test]
    fn test_out_of_range_scale_becomes_default() {
        for scale in [i64::MIN, -500, 0, 1, 299, 10_001, 20_000, i64::MAX] {
            let config = GeneratorConfig::new(false, scale);
            assert_eq!(config.effective_scale(), SCALE_DEFAULT);
        }
    }

    #[test]
    fn test_counts_at_default_scale() {
        let counts = FixtureCounts::for_scale(SCALE_DEFAULT);
        assert_eq!(counts.users, 125_000);
        assert_eq!(counts.items, 50_000);
        assert_eq!(counts.qualities, 1_250);
        assert_eq!(counts.categories, 50);
    }

    #[test]
    fn test_counts_at_scale_2000() {
        let counts = FixtureCounts::for_scale(2_000);
        assert_eq!(counts.users, 500_000);
        assert_eq!(counts.items, 200_000);
        assert_eq!(counts.qualities, 5_000);
        assert_eq!(counts.categories, 200);
    }

    #[test]
    fn test_fractional_counts_round_half_away_from_zero() {
        // 305 * 2.5 = 762.5 and 305 / 10 = 30.5 both round up.
        let counts = FixtureCounts::for_scale(305);
        assert_eq!(counts.qualities, 763);
        assert_eq!(counts.categories, 31);
    }

    #[test]
    fn test_default_config_matches_default_scale() {
        let config = GeneratorConfig::default();
        assert!(!config.debug);
        assert_eq!(config.effective_scale(), SCALE_DEFAULT);
    }
}
