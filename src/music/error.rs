// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised while naming scale notes.

use thiserror::Error;

use super::interval::Interval;
use super::spelling::Letter;

/// Failure to resolve or spell a scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// The spelling is not registered under any pitch class
    #[error("Unknown note {note}")]
    UnknownNote { note: String },

    /// No registered spelling starts with the letter the scale needs next
    #[error(
        "Needed a {needed} ({previous} + interval) in {root} {interval}: {}",
        .partial.join(", ")
    )]
    Unspellable {
        needed: Letter,
        previous: String,
        root: String,
        interval: Interval,
        partial: Vec<String>,
    },
}
