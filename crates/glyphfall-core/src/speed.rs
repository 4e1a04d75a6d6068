//! Fall speed presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseOptionError, parse_named};

/// How fast the drops fall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl FallSpeed {
    /// Every speed, in cycling order.
    pub const ALL: [FallSpeed; 3] = [FallSpeed::Slow, FallSpeed::Medium, FallSpeed::Fast];

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            FallSpeed::Slow => FallSpeed::Medium,
            FallSpeed::Medium => FallSpeed::Fast,
            FallSpeed::Fast => FallSpeed::Slow,
        }
    }

    /// Scale applied to the per-frame drop advance.
    pub fn multiplier(self) -> f32 {
        match self {
            FallSpeed::Slow => 0.5,
            FallSpeed::Medium => 1.0,
            FallSpeed::Fast => 1.8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FallSpeed::Slow => "slow",
            FallSpeed::Medium => "medium",
            FallSpeed::Fast => "fast",
        }
    }
}

impl fmt::Display for FallSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FallSpeed {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("speed", s, &Self::ALL, Self::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_increases() {
        assert!(FallSpeed::Slow.multiplier() < FallSpeed::Medium.multiplier());
        assert!(FallSpeed::Medium.multiplier() < FallSpeed::Fast.multiplier());
        assert_eq!(FallSpeed::default().multiplier(), 1.0);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(FallSpeed::Fast.next(), FallSpeed::Slow);
        assert_eq!(FallSpeed::Slow.next().next(), FallSpeed::Fast);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("FAST".parse::<FallSpeed>(), Ok(FallSpeed::Fast));
        assert!("ludicrous".parse::<FallSpeed>().is_err());
    }
}
