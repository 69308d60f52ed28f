use crate::{error::report, AddressError, Family, Ipv4Address};
use std::{
    fmt::{self, Display},
    net::IpAddr,
    str::FromStr,
};

#[cfg(feature = "ipv6")]
use crate::Ipv6Address;

/// An IP address of either family.
///
/// Addresses of different families never compare equal. Ordering compares
/// the [`Family`] first, so every IPv4 address sorts before every IPv6
/// address, and then defers to the family's own ordering. That makes an
/// `Address` usable as a key in ordered and hashed maps alike.
///
/// The default address is the unspecified IPv4 address `0.0.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    V4(Ipv4Address),
    #[cfg(feature = "ipv6")]
    V6(Ipv6Address),
}

impl Default for Address {
    fn default() -> Self {
        Self::V4(Ipv4Address::UNSPECIFIED)
    }
}

impl Address {
    pub const fn from_v4(v4: Ipv4Address) -> Self {
        Self::V4(v4)
    }

    #[cfg(feature = "ipv6")]
    pub const fn from_v6(v6: Ipv6Address) -> Self {
        Self::V6(v6)
    }

    /// Replaces this address with an IPv4 address.
    pub fn set_v4(&mut self, v4: Ipv4Address) {
        *self = Self::V4(v4);
    }

    /// Replaces this address with an IPv6 address.
    #[cfg(feature = "ipv6")]
    pub fn set_v6(&mut self, v6: Ipv6Address) {
        *self = Self::V6(v6);
    }

    /// Gets the family of the address currently held.
    pub const fn family(&self) -> Family {
        match self {
            Self::V4(_) => Family::V4,
            #[cfg(feature = "ipv6")]
            Self::V6(_) => Family::V6,
        }
    }

    pub const fn is_v4(&self) -> bool {
        matches!(self.family(), Family::V4)
    }

    #[cfg(feature = "ipv6")]
    pub const fn is_v6(&self) -> bool {
        matches!(self.family(), Family::V6)
    }

    /// Gets the contained IPv4 address.
    ///
    /// Fails with [`AddressError::TypeMismatch`] if this is an IPv6 address.
    pub fn to_v4(&self) -> Result<Ipv4Address, AddressError> {
        match self {
            Self::V4(v4) => Ok(*v4),
            #[cfg(feature = "ipv6")]
            Self::V6(_) => Err(self.mismatch(Family::V4)),
        }
    }

    /// Gets the contained IPv6 address.
    ///
    /// Fails with [`AddressError::TypeMismatch`] if this is an IPv4 address.
    #[cfg(feature = "ipv6")]
    pub fn to_v6(&self) -> Result<Ipv6Address, AddressError> {
        match self {
            Self::V4(_) => Err(self.mismatch(Family::V6)),
            Self::V6(v6) => Ok(*v6),
        }
    }

    /// Like [`to_v4`](Self::to_v4), but reports a mismatch through `error`
    /// and returns [`Ipv4Address::UNSPECIFIED`] instead. `error` is cleared
    /// on success.
    pub fn to_v4_with(&self, error: &mut Option<AddressError>) -> Ipv4Address {
        report(self.to_v4(), error)
    }

    /// Like [`to_v6`](Self::to_v6), but reports a mismatch through `error`
    /// and returns [`Ipv6Address::UNSPECIFIED`] instead. `error` is cleared
    /// on success.
    #[cfg(feature = "ipv6")]
    pub fn to_v6_with(&self, error: &mut Option<AddressError>) -> Ipv6Address {
        report(self.to_v6(), error)
    }

    pub const fn is_loopback(&self) -> bool {
        match self {
            Self::V4(v4) => v4.is_loopback(),
            #[cfg(feature = "ipv6")]
            Self::V6(v6) => v6.is_loopback(),
        }
    }

    pub const fn is_unspecified(&self) -> bool {
        match self {
            Self::V4(v4) => v4.is_unspecified(),
            #[cfg(feature = "ipv6")]
            Self::V6(v6) => v6.is_unspecified(),
        }
    }

    pub const fn is_multicast(&self) -> bool {
        match self {
            Self::V4(v4) => v4.is_multicast(),
            #[cfg(feature = "ipv6")]
            Self::V6(v6) => v6.is_multicast(),
        }
    }

    #[cfg_attr(not(feature = "ipv6"), allow(dead_code))]
    fn mismatch(&self, expected: Family) -> AddressError {
        AddressError::TypeMismatch {
            expected,
            actual: self.family(),
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(v4) => v4.fmt(f),
            #[cfg(feature = "ipv6")]
            Self::V6(v6) => v6.fmt(f),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::make_address(s)
    }
}

impl From<Ipv4Address> for Address {
    fn from(v4: Ipv4Address) -> Self {
        Self::V4(v4)
    }
}

#[cfg(feature = "ipv6")]
impl From<Ipv6Address> for Address {
    fn from(v6: Ipv6Address) -> Self {
        Self::V6(v6)
    }
}

impl TryFrom<Address> for Ipv4Address {
    type Error = AddressError;

    fn try_from(address: Address) -> Result<Self, Self::Error> {
        address.to_v4()
    }
}

#[cfg(feature = "ipv6")]
impl TryFrom<Address> for Ipv6Address {
    type Error = AddressError;

    fn try_from(address: Address) -> Result<Self, Self::Error> {
        address.to_v6()
    }
}

#[cfg(feature = "ipv6")]
impl From<IpAddr> for Address {
    fn from(address: IpAddr) -> Self {
        match address {
            IpAddr::V4(v4) => Self::V4(v4.into()),
            IpAddr::V6(v6) => Self::V6(v6.into()),
        }
    }
}

/// Drops the scope id of IPv6 addresses.
impl From<Address> for IpAddr {
    fn from(address: Address) -> Self {
        match address {
            Address::V4(v4) => IpAddr::V4(v4.into()),
            #[cfg(feature = "ipv6")]
            Address::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}
