//! # Geographic Lookup Seam
//!
//! The boundary between the pipeline and whatever resolves an address to a
//! location. The core orchestrates the lookup, concrete backends implement
//! [`GeoResolver`]; tests substitute scripted resolvers.

use std::net::IpAddr;

use thiserror::Error;

/// Location data for one resolved address.
///
/// Codes are ISO: a country code (`US`) and first-level subdivision codes
/// (`CA`, `NY`) in the order the backend reports them. The subdivision list
/// is empty when the backend has no subdivision data for the address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub country: Option<String>,
    pub subdivisions: Vec<String>,
}

impl Location {
    pub fn new(country: Option<&str>, subdivisions: &[&str]) -> Self {
        Self {
            country: country.map(str::to_owned),
            subdivisions: subdivisions.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    /// The backend holds no record for the address.
    #[error("address not found in database")]
    NotFound,
    /// Any other backend failure (corrupt record, reader error).
    #[error("lookup backend error: {0}")]
    Backend(String),
}

/// Resolves a parsed address to its [`Location`].
///
/// Implementations are shared by every worker for the whole run and must
/// tolerate concurrent calls; the pipeline takes no locks around them.
pub trait GeoResolver: Send + Sync {
    fn resolve(&self, addr: IpAddr) -> Result<Location, LookupError>;
}
