//! Version-independent network addresses.
//!
//! An [`Address`] holds either an [`Ipv4Address`] or an [`Ipv6Address`] and
//! exposes the same parsing, formatting, comparison, and classification
//! operations regardless of which family it carries. Sockets, endpoints, and
//! resolvers can store and compare addresses without caring about the
//! family until they actually need the family-specific value.
//!
//! # Organization
//! - [`Ipv4Address`] and [`Ipv6Address`] are the family-specific values
//! - [`Address`] is the tagged union over them, ordered by [`Family`] first
//! - [`make_address`] and [`try_make_address`] turn text into an
//!   [`Address`], trying IPv6 before IPv4
//!
//! # Features
//!
//! IPv6 support is controlled by the `ipv6` feature, which is on by default.
//! Without it, [`Ipv6Address`], [`Family::V6`], and every IPv6 operation are
//! compiled out and an [`Address`] is always IPv4.
//!
//! # Errors
//!
//! Fallible operations come in two flavors that report the same
//! [`AddressError`]. The plain form (`make_address`, `Address::to_v4`, ...)
//! returns a `Result`. The `_with` form takes an `&mut Option<AddressError>`,
//! always returns a value, and leaves the slot `None` on success.

mod error;
pub use error::AddressError;

mod family;
pub use family::Family;

mod ipv4_address;
pub use ipv4_address::Ipv4Address;

#[cfg(feature = "ipv6")]
mod ipv6_address;
#[cfg(feature = "ipv6")]
pub use ipv6_address::Ipv6Address;

mod address;
pub use address::Address;

mod parsing;
pub use parsing::{make_address, make_address_v4, try_make_address, try_make_address_v4};
#[cfg(feature = "ipv6")]
pub use parsing::{make_address_v6, try_make_address_v6};
