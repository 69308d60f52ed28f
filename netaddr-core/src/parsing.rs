//! Turning text into addresses.
//!
//! Every parser comes in two forms. The `try_` form never fails outright: it
//! records the outcome in an `&mut Option<AddressError>` and hands back the
//! unspecified address of the requested family when parsing failed. The plain
//! form wraps it and returns the same error as a `Result`. Both accept
//! anything that can be viewed as a `&str`.

use crate::{
    error::{raise, report},
    Address, AddressError, Family, Ipv4Address,
};

#[cfg(feature = "ipv6")]
use crate::Ipv6Address;

/// Parses an address of any family.
///
/// IPv6 grammar is tried first, then IPv4. On failure, `error` is set to
/// [`AddressError::ParseFailure`] listing both attempts and the default
/// address `0.0.0.0` is returned; check `error`, not the returned value, to
/// detect failure. On success `error` is cleared.
pub fn try_make_address(text: impl AsRef<str>, error: &mut Option<AddressError>) -> Address {
    let text = text.as_ref();
    for &family in Family::ALL {
        let parsed = match family {
            Family::V4 => text.parse::<Ipv4Address>().map(Address::from),
            #[cfg(feature = "ipv6")]
            Family::V6 => text.parse::<Ipv6Address>().map(Address::from),
        };
        match parsed {
            Ok(address) => {
                *error = None;
                return address;
            }
            Err(_) => tracing::trace!("{:?} is not an {} address", text, family),
        }
    }
    tracing::debug!("{:?} matched no address grammar", text);
    *error = Some(AddressError::parse_failure(text, Family::ALL));
    Address::default()
}

/// Parses an address of any family, trying IPv6 before IPv4.
///
/// # Examples
///
/// ```
/// # use netaddr_core::*;
/// let address = make_address("192.0.2.1").unwrap();
/// assert_eq!(address.family(), Family::V4);
///
/// let address = make_address(String::from("127.0.0.1")).unwrap();
/// assert!(address.is_loopback());
///
/// # #[cfg(feature = "ipv6")]
/// # {
/// let address = make_address("::1").unwrap();
/// assert_eq!(address.family(), Family::V6);
/// # }
///
/// make_address("not_an_address").expect_err("neither grammar matches");
/// ```
pub fn make_address(text: impl AsRef<str>) -> Result<Address, AddressError> {
    let mut error = None;
    let address = try_make_address(text, &mut error);
    raise(address, error)
}

/// Parses only dotted-decimal IPv4 text, returning `0.0.0.0` on failure.
pub fn try_make_address_v4(text: impl AsRef<str>, error: &mut Option<AddressError>) -> Ipv4Address {
    report(text.as_ref().parse(), error)
}

/// Parses only dotted-decimal IPv4 text.
pub fn make_address_v4(text: impl AsRef<str>) -> Result<Ipv4Address, AddressError> {
    let mut error = None;
    let address = try_make_address_v4(text, &mut error);
    raise(address, error)
}

/// Parses only IPv6 text, returning `::` on failure.
#[cfg(feature = "ipv6")]
pub fn try_make_address_v6(text: impl AsRef<str>, error: &mut Option<AddressError>) -> Ipv6Address {
    report(text.as_ref().parse(), error)
}

/// Parses only IPv6 text.
#[cfg(feature = "ipv6")]
pub fn make_address_v6(text: impl AsRef<str>) -> Result<Ipv6Address, AddressError> {
    let mut error = None;
    let address = try_make_address_v6(text, &mut error);
    raise(address, error)
}
