//! # Record Classifier
//!
//! Turns one raw input line into one [`Verdict`]: parse the address, resolve
//! it, compare the location against the target filter.
//!
//! Classification is pure apart from the resolver call and holds no state of
//! its own, so a single classifier is shared by every worker.

use std::net::IpAddr;
use std::sync::Arc;

use geosift_common::filter::TargetFilter;
use geosift_common::resolve::GeoResolver;
use geosift_common::tally::{Outcome, Verdict};

pub struct Classifier {
    resolver: Arc<dyn GeoResolver>,
    filter: TargetFilter,
}

impl Classifier {
    pub fn new(resolver: Arc<dyn GeoResolver>, filter: TargetFilter) -> Self {
        Self { resolver, filter }
    }

    /// Classifies one record.
    ///
    /// Policy, in order:
    /// 1. Unparseable line → `ParseFailed`, the resolver is never invoked.
    /// 2. Resolver failure → `LookupFailed`.
    /// 3. Country accounting: with a country filter configured, a country
    ///    match is counted on the verdict regardless of what the
    ///    subdivision comparison decides below.
    /// 4. No subdivision data → `NoSubdivision`.
    /// 5. First subdivision equals the target (and the country matched,
    ///    when filtered) → `Matched`; otherwise `NotMatched`.
    pub fn classify(&self, record: &str) -> Verdict {
        let addr: IpAddr = match record.parse() {
            Ok(addr) => addr,
            Err(_) => return Verdict::of(Outcome::ParseFailed),
        };

        let location = match self.resolver.resolve(addr) {
            Ok(location) => location,
            Err(_) => return Verdict::of(Outcome::LookupFailed),
        };

        let country_matched = match (self.filter.country(), location.country.as_deref()) {
            (Some(want), Some(got)) => want == got,
            _ => false,
        };
        // Without a country filter, subdivision equality decides alone.
        let country_permits = self.filter.country().is_none() || country_matched;

        let outcome = match location.subdivisions.first() {
            None => Outcome::NoSubdivision,
            Some(subdivision)
                if country_permits && subdivision.as_str() == self.filter.subdivision() =>
            {
                Outcome::Matched
            }
            Some(_) => Outcome::NotMatched,
        };

        Verdict {
            outcome,
            country_matched,
        }
    }
}
