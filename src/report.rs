//! Rendering addresses for people.

use itertools::Itertools;
use netaddr_core::{make_address, Address, AddressError};
use std::fmt::{self, Display};

/// What could be learned about one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub address: Address,
    /// Names of every classification that holds, most general first.
    pub traits: Vec<&'static str>,
}

impl Inspection {
    pub fn new(address: Address) -> Self {
        let mut traits = Vec::new();
        let mut mark = |holds: bool, name: &'static str| {
            if holds {
                traits.push(name);
            }
        };
        mark(address.is_unspecified(), "unspecified");
        mark(address.is_loopback(), "loopback");
        mark(address.is_multicast(), "multicast");
        if let Ok(v4) = address.to_v4() {
            mark(v4.is_broadcast(), "broadcast");
            mark(v4.is_private(), "private");
            mark(v4.is_link_local(), "link-local");
        }
        #[cfg(feature = "ipv6")]
        {
            if let Ok(v6) = address.to_v6() {
                mark(v6.is_link_local(), "link-local");
                mark(v6.is_site_local(), "site-local");
                mark(v6.is_multicast_link_local(), "link-local-multicast");
                mark(v6.is_v4_mapped(), "v4-mapped");
            }
        }
        Self { address, traits }
    }
}

impl Display for Inspection {
    /// Tab separated: canonical text, family, then the traits (or `-`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traits = if self.traits.is_empty() {
            "-".to_owned()
        } else {
            self.traits.iter().join(",")
        };
        write!(f, "{}\t{}\t{}", self.address, self.address.family(), traits)
    }
}

/// Parses and inspects one address.
pub fn inspect(text: &str) -> Result<Inspection, AddressError> {
    make_address(text).map(Inspection::new)
}

/// Parses every address and returns them in ascending order, IPv4 first.
/// With `unique`, equal addresses are reported once.
pub fn sort<S: AsRef<str>>(texts: &[S], unique: bool) -> Result<Vec<Address>, AddressError> {
    let sorted = texts
        .iter()
        .map(make_address)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sorted();
    Ok(if unique {
        sorted.dedup().collect()
    } else {
        sorted.collect()
    })
}
