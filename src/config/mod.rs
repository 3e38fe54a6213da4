// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for an analysis run.
//!
//! Settings are read from an optional YAML file. Every field has a default,
//! so an empty document (or no file at all) gives the plain enumeration.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::analysis::{CollisionMode, CollisionSearch};

/// Settings for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How two scales are compared
    pub collision_mode: CollisionMode,
    /// Report unordered pairs once
    pub deduplicate: bool,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Append church-mode names to reported scales
    pub annotate_modes: bool,
    /// Print the number of unspellable combinations in the report
    pub report_skipped: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            collision_mode: CollisionMode::default(),
            deduplicate: false,
            log_level: default_log_level(),
            annotate_modes: false,
            report_skipped: false,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> Result<Level> {
        match self.log_level.trim().to_lowercase().as_str() {
            "error" => Ok(Level::ERROR),
            "warn" | "warning" => Ok(Level::WARN),
            "info" => Ok(Level::INFO),
            "debug" => Ok(Level::DEBUG),
            "trace" => Ok(Level::TRACE),
            other => bail!("Unknown log level: {}", other),
        }
    }

    /// Collision search options derived from this configuration
    pub fn collision_search(&self) -> CollisionSearch {
        CollisionSearch {
            mode: self.collision_mode,
            deduplicate: self.deduplicate,
        }
    }
}
