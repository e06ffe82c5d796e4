//! # Comparison Filter
//!
//! The region codes a run filters on, fixed at startup.
//!
//! Codes are canonicalized once (surrounding whitespace trimmed, uppercased)
//! so that per-record comparisons are plain string equality.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter code is empty")]
    EmptyCode,
}

/// The comparison codes for one run: a subdivision (state/province) ISO code
/// and, optionally, a country ISO code.
///
/// When a country code is configured, subdivision matches additionally
/// require the record's country to match, and the run reports an independent
/// country-match count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetFilter {
    subdivision: String,
    country: Option<String>,
}

impl TargetFilter {
    pub fn new(subdivision: &str, country: Option<&str>) -> Result<Self, FilterError> {
        let subdivision = canonicalize(subdivision);
        if subdivision.is_empty() {
            return Err(FilterError::EmptyCode);
        }

        let country = match country {
            Some(code) => {
                let code = canonicalize(code);
                if code.is_empty() {
                    return Err(FilterError::EmptyCode);
                }
                Some(code)
            }
            None => None,
        };

        Ok(Self {
            subdivision,
            country,
        })
    }

    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Normalizes an ISO code for comparison: trim surrounding whitespace,
/// uppercase.
pub fn canonicalize(code: &str) -> String {
    code.trim().to_uppercase()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
