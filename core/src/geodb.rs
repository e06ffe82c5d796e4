//! # GeoIP2 Lookup Backend
//!
//! [`GeoResolver`] implementation over a MaxMind GeoIP2/GeoLite2 City file.
//!
//! The database is opened once before the pipeline starts and shared
//! read-only by every worker; the reader is safe for concurrent lookups and
//! is released when the resolver drops after the run.

use std::net::IpAddr;
use std::path::Path;

use anyhow::Context;
use maxminddb::{MaxMindDBError, Reader, geoip2};
use tracing::debug;

use geosift_common::resolve::{GeoResolver, Location, LookupError};

pub struct MaxmindResolver {
    reader: Reader<Vec<u8>>,
}

impl MaxmindResolver {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)
            .with_context(|| format!("failed to open GeoIP2 database '{}'", path.display()))?;

        debug!(
            "opened GeoIP2 database '{}' ({})",
            path.display(),
            reader.metadata.database_type
        );

        Ok(Self { reader })
    }
}

impl GeoResolver for MaxmindResolver {
    fn resolve(&self, addr: IpAddr) -> Result<Location, LookupError> {
        let city: geoip2::City = self.reader.lookup(addr).map_err(|e| match e {
            MaxMindDBError::AddressNotFoundError(_) => LookupError::NotFound,
            other => LookupError::Backend(other.to_string()),
        })?;

        let country = city
            .country
            .and_then(|country| country.iso_code)
            .map(str::to_owned);

        // Subdivision entries without an ISO code carry nothing comparable.
        let subdivisions = city
            .subdivisions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|subdivision| subdivision.iso_code)
            .map(str::to_owned)
            .collect();

        Ok(Location {
            country,
            subdivisions,
        })
    }
}
