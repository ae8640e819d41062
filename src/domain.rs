//! Host decomposition into subdomain, registrable domain, and TLD.
//!
//! The factory only depends on the [`DomainSplitter`] trait; the default
//! backend is the compiled-in Public Suffix List from the `psl` crate.

use anyhow::{bail, Result};
use std::str;

/// Decomposed host: `sub.example.co.uk` becomes subdomain `sub`,
/// registrable domain (SLD) `example`, and TLD `co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Labels left of the registrable domain, `None` when the host has none.
    pub subdomain: Option<String>,
    /// The label directly left of the public suffix.
    pub sld: String,
    /// The public suffix, possibly multi-label.
    pub tld: String,
}

/// Trait implemented by host decomposition backends.
pub trait DomainSplitter {
    fn split(&self, host: &str) -> Result<DomainParts>;
}

/// Public Suffix List backed splitter. Fails for hosts without a
/// registrable domain or with an unknown suffix (IP literals, `localhost`,
/// bare suffixes like `com`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PslSplitter;

impl DomainSplitter for PslSplitter {
    fn split(&self, host: &str) -> Result<DomainParts> {
        let Some(domain) = psl::domain(host.as_bytes()) else {
            bail!("no registrable domain in host {:?}", host);
        };
        if !domain.suffix().is_known() {
            bail!("unknown public suffix in host {:?}", host);
        }

        let registrable = str::from_utf8(domain.as_bytes())?;
        let tld = str::from_utf8(domain.suffix().as_bytes())?;
        let Some(sld) = registrable
            .strip_suffix(tld)
            .and_then(|prefix| prefix.strip_suffix('.'))
        else {
            bail!("cannot split {:?} into sld and tld", registrable);
        };

        let subdomain = host
            .strip_suffix(registrable)
            .and_then(|prefix| prefix.strip_suffix('.'))
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_owned);

        Ok(DomainParts {
            subdomain,
            sld: sld.to_owned(),
            tld: tld.to_owned(),
        })
    }
}
