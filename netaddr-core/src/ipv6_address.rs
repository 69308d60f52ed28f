use crate::{AddressError, Family, Ipv4Address};
use std::{
    fmt::{self, Display},
    net::Ipv6Addr,
    str::FromStr,
};

/// An Internet Protocol version 6 address with its scope id.
///
/// The scope id identifies the link or site a scoped address belongs to and
/// is zero when unused. Two addresses with the same bytes but different
/// scope ids are different addresses. Ordering compares the bytes first and
/// the scope id second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv6Address {
    bytes: [u8; 16],
    scope_id: u32,
}

impl Ipv6Address {
    /// The address `::`.
    pub const UNSPECIFIED: Self = Self::new([0; 16]);

    /// The address `::1`.
    pub const LOCALHOST: Self = Self::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

    /// Creates an unscoped address from its sixteen bytes in network order.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self { bytes, scope_id: 0 }
    }

    /// Creates an address with the given scope id.
    pub const fn with_scope_id(bytes: [u8; 16], scope_id: u32) -> Self {
        Self { bytes, scope_id }
    }

    /// Creates the IPv4-mapped address `::ffff:a.b.c.d`.
    pub const fn v4_mapped(v4: Ipv4Address) -> Self {
        let [a, b, c, d] = v4.to_bytes();
        Self::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d])
    }

    /// Gets the address as a `[u8; 16]`. The scope id is not included.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.bytes
    }

    pub const fn scope_id(&self) -> u32 {
        self.scope_id
    }

    pub fn set_scope_id(&mut self, scope_id: u32) {
        self.scope_id = scope_id;
    }

    /// Extracts the IPv4 address from an IPv4-mapped address, or returns
    /// `None` if the address is not IPv4-mapped.
    pub const fn to_v4_mapped(self) -> Option<Ipv4Address> {
        if self.is_v4_mapped() {
            let b = self.bytes;
            Some(Ipv4Address::new([b[12], b[13], b[14], b[15]]))
        } else {
            None
        }
    }

    /// Returns `true` for `::1`.
    pub const fn is_loopback(&self) -> bool {
        u128::from_be_bytes(self.bytes) == 1
    }

    /// Returns `true` for `::`.
    pub const fn is_unspecified(&self) -> bool {
        u128::from_be_bytes(self.bytes) == 0
    }

    /// Returns `true` for `ff00::/8`.
    pub const fn is_multicast(&self) -> bool {
        self.bytes[0] == 0xff
    }

    /// Returns `true` for `fe80::/10`.
    pub const fn is_link_local(&self) -> bool {
        self.bytes[0] == 0xfe && self.bytes[1] & 0xc0 == 0x80
    }

    /// Returns `true` for the deprecated site-local range `fec0::/10`.
    pub const fn is_site_local(&self) -> bool {
        self.bytes[0] == 0xfe && self.bytes[1] & 0xc0 == 0xc0
    }

    /// Returns `true` for `::ffff:0:0/96`.
    pub const fn is_v4_mapped(&self) -> bool {
        u128::from_be_bytes(self.bytes) >> 32 == 0xffff
    }

    /// Returns `true` for multicast addresses with link-local scope
    /// (`ff02::/16` and the other flag combinations of `ffx2::/16`).
    pub const fn is_multicast_link_local(&self) -> bool {
        self.is_multicast() && self.bytes[1] & 0x0f == 0x02
    }
}

impl Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = Ipv6Addr::from(self.bytes);
        if self.scope_id == 0 {
            f.pad(&address.to_string())
        } else {
            f.pad(&format!("{}%{}", address, self.scope_id))
        }
    }
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    /// Parses RFC 4291 text, optionally followed by `%` and a decimal scope
    /// id. Interface names are not accepted as scopes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || AddressError::parse_failure(s, &[Family::V6]);
        let (address, scope_id) = match s.split_once('%') {
            Some((address, scope)) => (address, scope_from_str(scope).ok_or_else(fail)?),
            None => (s, 0),
        };
        let address = Ipv6Addr::from_str(address).map_err(|_| fail())?;
        Ok(Self::with_scope_id(address.octets(), scope_id))
    }
}

// Only plain decimal digits; `u32::from_str` alone would also take a sign.
fn scope_from_str(scope: &str) -> Option<u32> {
    if scope.is_empty() || !scope.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    scope.parse().ok()
}

impl From<[u8; 16]> for Ipv6Address {
    fn from(bytes: [u8; 16]) -> Self {
        Self::new(bytes)
    }
}

impl From<Ipv6Address> for [u8; 16] {
    fn from(address: Ipv6Address) -> Self {
        address.bytes
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(address: Ipv6Addr) -> Self {
        Self::new(address.octets())
    }
}

/// Drops the scope id.
impl From<Ipv6Address> for Ipv6Addr {
    fn from(address: Ipv6Address) -> Self {
        Ipv6Addr::from(address.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Ipv6Address;
    use crate::Ipv4Address;

    fn v6(s: &str) -> Ipv6Address {
        s.parse().unwrap()
    }

    #[test]
    fn predicates() {
        assert!(Ipv6Address::UNSPECIFIED.is_unspecified());
        assert!(Ipv6Address::LOCALHOST.is_loopback());
        assert!(!Ipv6Address::LOCALHOST.is_unspecified());
        assert!(!Ipv6Address::UNSPECIFIED.is_loopback());

        assert!(v6("ff02::1").is_multicast());
        assert!(v6("ff02::1").is_multicast_link_local());
        assert!(!v6("ff05::2").is_multicast_link_local());
        assert!(!v6("fe80::1").is_multicast());

        assert!(v6("fe80::1").is_link_local());
        assert!(v6("febf::1").is_link_local());
        assert!(!v6("fec0::1").is_link_local());
        assert!(v6("fec0::1").is_site_local());

        // the loopback of IPv4 is not a loopback once mapped
        assert!(!v6("::ffff:127.0.0.1").is_loopback());
        assert!(v6("::ffff:127.0.0.1").is_v4_mapped());
    }

    #[test]
    fn v4_mapping() {
        let v4 = Ipv4Address::new([192, 0, 2, 1]);
        let mapped = Ipv6Address::v4_mapped(v4);
        assert_eq!(mapped, v6("::ffff:192.0.2.1"));
        assert_eq!(mapped.to_v4_mapped(), Some(v4));
        assert_eq!(Ipv6Address::LOCALHOST.to_v4_mapped(), None);
    }

    #[test]
    fn scope_ids() {
        let scoped = v6("fe80::1%3");
        assert_eq!(scoped.scope_id(), 3);
        assert_eq!(scoped.to_string(), "fe80::1%3");
        assert_ne!(scoped, v6("fe80::1"));
        assert!(v6("fe80::1") < scoped);

        let mut unscoped = scoped;
        unscoped.set_scope_id(0);
        assert_eq!(unscoped.to_string(), "fe80::1");

        assert!("fe80::1%".parse::<Ipv6Address>().is_err());
        assert!("fe80::1%eth0".parse::<Ipv6Address>().is_err());
        assert!("fe80::1%+1".parse::<Ipv6Address>().is_err());
        assert!("fe80::1%4294967296".parse::<Ipv6Address>().is_err());
    }

    #[test]
    fn text_honors_width() {
        assert_eq!(format!("[{:>6}]", Ipv6Address::LOCALHOST), "[   ::1]");
        assert_eq!(format!("[{:^11}]", v6("fe80::1%3")), "[ fe80::1%3 ]");
    }

    #[test]
    fn canonical_text() {
        assert_eq!(v6("2001:0DB8:0000:0000:0000:0000:0000:0001").to_string(), "2001:db8::1");
        assert_eq!(v6("0:0:0:0:0:0:0:0").to_string(), "::");
        assert_eq!(v6("::ffff:10.0.0.1").to_string(), "::ffff:10.0.0.1");
        assert!("2001:db8::1::2".parse::<Ipv6Address>().is_err());
        assert!("1.2.3.4".parse::<Ipv6Address>().is_err());
        assert!("".parse::<Ipv6Address>().is_err());
    }
}
