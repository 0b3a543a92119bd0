//! Region configuration types.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the per-region YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// How a region turns raw labor cost into billed (loaded) cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupPolicy {
    /// A single uniform markup from [`RegionConfig::markup`].
    #[default]
    Uniform,
    /// [`RegionConfig::own_markup`] when set, otherwise a fixed default
    /// of 1.25. Used by regions that bill a subset of labor under their
    /// own rate structure.
    CategoryFallback,
}

/// Per-region wage, overtime, and markup policy constants.
///
/// One configuration exists per region code. The set of codes is open:
/// adding a region means adding a YAML file, never changing the engine.
/// Configurations are read-only from the engine's perspective and
/// effectively immutable for the duration of a calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    /// The region code, e.g. "TX", "CA", "NJ".
    pub region: String,
    /// Hours per day before overtime applies.
    pub normal_hours: Decimal,
    /// Multiplier applied to hours worked beyond `normal_hours`. At least 1.
    pub ot_multiplier: Decimal,
    /// Uniform billing markup factor, greater than 0.
    pub markup: Decimal,
    /// Which markup selection rule this region uses.
    #[serde(default)]
    pub markup_policy: MarkupPolicy,
    /// Alternate markup for category-fallback regions. When absent, such
    /// regions fall back to the fixed default.
    #[serde(default)]
    pub own_markup: Option<Decimal>,
    /// Companion billing rate administered alongside `own_markup`. Loaded
    /// and exposed but not billed today.
    #[serde(default)]
    pub yw_markup: Option<Decimal>,
    /// Default hourly wages per roster category, used to prefill new
    /// workers. Open category set; not used by the cost arithmetic.
    #[serde(default)]
    pub default_wages: BTreeMap<String, Decimal>,
}

impl RegionConfig {
    /// Validates the policy invariants.
    ///
    /// `normal_hours ≥ 0`, `ot_multiplier ≥ 1`, and every markup and
    /// default wage must be positive (wages may be zero).
    pub fn validate(&self) -> EngineResult<()> {
        if self.normal_hours < Decimal::ZERO {
            return Err(self.invalid("normal_hours must be >= 0"));
        }
        if self.ot_multiplier < Decimal::ONE {
            return Err(self.invalid("ot_multiplier must be >= 1"));
        }
        if self.markup <= Decimal::ZERO {
            return Err(self.invalid("markup must be > 0"));
        }
        if let Some(own_markup) = self.own_markup {
            if own_markup <= Decimal::ZERO {
                return Err(self.invalid("own_markup must be > 0"));
            }
        }
        if let Some(yw_markup) = self.yw_markup {
            if yw_markup <= Decimal::ZERO {
                return Err(self.invalid("yw_markup must be > 0"));
            }
        }
        for (category, wage) in &self.default_wages {
            if *wage < Decimal::ZERO {
                return Err(self.invalid(&format!(
                    "default wage for category '{}' must be >= 0",
                    category
                )));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidConfig {
            region: self.region.clone(),
            message: message.to_string(),
        }
    }
}
