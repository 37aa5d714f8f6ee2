//! Gate severity profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The three canonical severity presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    /// Nightly/CI goldens. Digest equality is enforced.
    Strict,
    /// PR gate.
    #[default]
    Standard,
    /// Exploratory runs.
    Lenient,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [Self::Strict, Self::Standard, Self::Lenient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Standard => "standard",
            Self::Lenient => "lenient",
        }
    }

    /// The fixed preset for this profile.
    pub fn preset(&self) -> GateProfile {
        match self {
            Self::Strict => GateProfile {
                name: *self,
                mad_multiplier: 2.0,
                p99_multiplier: 1.05,
                epsilon_ms: 0.03,
                require_digest: true,
                description: "Nightly/CI goldens",
            },
            Self::Standard => GateProfile {
                name: *self,
                mad_multiplier: 3.0,
                p99_multiplier: 1.10,
                epsilon_ms: 0.05,
                require_digest: false,
                description: "PR gate",
            },
            Self::Lenient => GateProfile {
                name: *self,
                mad_multiplier: 4.0,
                p99_multiplier: 1.20,
                epsilon_ms: 0.07,
                require_digest: false,
                description: "Exploratory",
            },
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "standard" => Ok(Self::Standard),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::UnknownProfile {
                name: s.to_string(),
            }),
        }
    }
}

/// A fully resolved gate configuration. Never partially resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateProfile {
    pub name: ProfileName,
    pub mad_multiplier: f64,
    pub p99_multiplier: f64,
    pub epsilon_ms: f64,
    pub require_digest: bool,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_documented_values() {
        let standard = ProfileName::Standard.preset();
        assert_eq!(standard.mad_multiplier, 3.0);
        assert_eq!(standard.p99_multiplier, 1.10);
        assert_eq!(standard.epsilon_ms, 0.05);
        assert!(!standard.require_digest);

        assert!(ProfileName::Strict.preset().require_digest);
        assert_eq!(ProfileName::Lenient.preset().mad_multiplier, 4.0);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("STRICT".parse::<ProfileName>().unwrap(), ProfileName::Strict);
        assert_eq!(" lenient ".parse::<ProfileName>().unwrap(), ProfileName::Lenient);
        assert!(matches!(
            "paranoid".parse::<ProfileName>(),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn name_round_trips_through_display() {
        for name in ProfileName::ALL {
            assert_eq!(name.to_string().parse::<ProfileName>().unwrap(), name);
            assert_eq!(name.preset().name, name);
        }
    }
}
