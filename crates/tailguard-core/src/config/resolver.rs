//! Effective gate configuration resolution.
//!
//! Each numeric field is resolved by walking an ordered chain of providers
//! and taking the first that yields a value:
//!
//! 1. explicit CLI/API override
//! 2. environment variable (via [`ConfigSource`])
//! 3. `[gate]` table of the optional config file
//! 4. profile preset
//!
//! `require_digest` is additive instead: any layer can switch it on, none can
//! switch a preset's enforcement off.

use std::fmt;

use super::file_config::GateSection;
use super::profile::{GateProfile, ProfileName};
use super::source::ConfigSource;
use crate::constants::env_keys;
use crate::errors::ConfigError;

/// The layer that supplied an effective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    Cli,
    Env,
    File,
    Preset,
}

impl ValueOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Env => "env",
            Self::File => "file",
            Self::Preset => "preset",
        }
    }
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value together with the layer it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: ValueOrigin,
}

/// Explicit CLI/API overrides. `None` defers to lower layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateOverrides {
    pub profile: Option<String>,
    pub p99_multiplier: Option<f64>,
    pub mad_multiplier: Option<f64>,
    pub epsilon_ms: Option<f64>,
    pub p99_budget_ms: Option<f64>,
    pub force_digest: bool,
}

type Provider<'a, T> = (
    ValueOrigin,
    Box<dyn Fn() -> Result<Option<T>, ConfigError> + 'a>,
);

fn provider<'a, T>(
    origin: ValueOrigin,
    lookup: impl Fn() -> Result<Option<T>, ConfigError> + 'a,
) -> Provider<'a, T> {
    (origin, Box::new(lookup))
}

/// Walks `chain` in order, returning the first present value.
/// Providers after the first hit are never evaluated, so a malformed
/// environment value is ignored when a CLI override shadows it.
fn first_present<T>(chain: Vec<Provider<'_, T>>) -> Result<Option<Resolved<T>>, ConfigError> {
    for (origin, lookup) in chain {
        if let Some(value) = lookup()? {
            return Ok(Some(Resolved { value, origin }));
        }
    }
    Ok(None)
}

/// Resolves a [`GateProfile`] from a preset plus overrides.
pub struct ProfileResolver<'a> {
    source: &'a dyn ConfigSource,
    file: Option<&'a GateSection>,
}

impl<'a> ProfileResolver<'a> {
    pub fn new(source: &'a dyn ConfigSource) -> Self {
        Self { source, file: None }
    }

    /// Adds the config-file layer.
    pub fn with_file(mut self, file: &'a GateSection) -> Self {
        self.file = Some(file);
        self
    }

    /// Profile name: CLI > `PROFILE` env > config file > `standard`.
    pub fn resolve_name(&self, cli: Option<&str>) -> Result<Resolved<ProfileName>, ConfigError> {
        let file_name = self.file.and_then(|f| f.profile.clone());
        let chain = vec![
            provider(ValueOrigin::Cli, move || Ok(cli.map(str::to_string))),
            provider(ValueOrigin::Env, move || {
                Ok(self.source.value(env_keys::PROFILE))
            }),
            provider(ValueOrigin::File, move || Ok(file_name.clone())),
        ];
        match first_present(chain)? {
            Some(Resolved { value, origin }) => Ok(Resolved {
                value: value.parse()?,
                origin,
            }),
            None => Ok(Resolved {
                value: ProfileName::default(),
                origin: ValueOrigin::Preset,
            }),
        }
    }

    /// Resolves every field of the effective profile.
    pub fn resolve(&self, overrides: &GateOverrides) -> Result<GateProfile, ConfigError> {
        let name = self.resolve_name(overrides.profile.as_deref())?;
        let preset = name.value.preset();
        let file = self.file.cloned().unwrap_or_default();

        let p99_multiplier = self.resolve_float(
            env_keys::P99_MULTIPLIER,
            overrides.p99_multiplier,
            file.p99_multiplier,
            preset.p99_multiplier,
        )?;
        let mad_multiplier = self.resolve_float(
            env_keys::MAD_MULTIPLIER,
            overrides.mad_multiplier,
            file.mad_multiplier,
            preset.mad_multiplier,
        )?;
        let epsilon_ms = self.resolve_float(
            env_keys::EPSILON_MS,
            overrides.epsilon_ms,
            file.epsilon_ms,
            preset.epsilon_ms,
        )?;

        let require_digest = preset.require_digest
            || overrides.force_digest
            || self.source.get(env_keys::REQUIRE_DIGEST).as_deref() == Some("1")
            || file.require_digest == Some(true);

        tracing::debug!(
            profile = %name.value,
            profile_origin = %name.origin,
            p99_multiplier = p99_multiplier.value,
            p99_multiplier_origin = %p99_multiplier.origin,
            mad_multiplier = mad_multiplier.value,
            mad_multiplier_origin = %mad_multiplier.origin,
            epsilon_ms = epsilon_ms.value,
            epsilon_ms_origin = %epsilon_ms.origin,
            require_digest,
            "resolved gate profile"
        );

        Ok(GateProfile {
            p99_multiplier: p99_multiplier.value,
            mad_multiplier: mad_multiplier.value,
            epsilon_ms: epsilon_ms.value,
            require_digest,
            ..preset
        })
    }

    /// Absolute p99 cap: CLI > `P99_BUDGET_MS` env > config file. No preset default.
    pub fn resolve_budget_cap(&self, cli: Option<f64>) -> Result<Option<f64>, ConfigError> {
        let file_cap = self.file.and_then(|f| f.p99_budget_ms);
        let chain = vec![
            provider(ValueOrigin::Cli, move || Ok(cli)),
            provider(ValueOrigin::Env, move || {
                self.source.float(env_keys::P99_BUDGET_MS)
            }),
            provider(ValueOrigin::File, move || Ok(file_cap)),
        ];
        Ok(first_present(chain)?.map(|r| r.value))
    }

    fn resolve_float(
        &self,
        env_key: &'static str,
        cli: Option<f64>,
        file: Option<f64>,
        preset: f64,
    ) -> Result<Resolved<f64>, ConfigError> {
        let chain = vec![
            provider(ValueOrigin::Cli, move || Ok(cli)),
            provider(ValueOrigin::Env, move || self.source.float(env_key)),
            provider(ValueOrigin::File, move || Ok(file)),
            provider(ValueOrigin::Preset, move || Ok(Some(preset))),
        ];
        Ok(first_present(chain)?.unwrap_or(Resolved {
            value: preset,
            origin: ValueOrigin::Preset,
        }))
    }
}
