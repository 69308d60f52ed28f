use crate::{AddressError, Family};
use std::{
    fmt::{self, Display},
    net::Ipv4Addr,
    str::FromStr,
};

/// An Internet Protocol version 4 address.
///
/// Ordering and equality follow the numeric value of the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Address([u8; 4]);

impl Ipv4Address {
    /// The address `0.0.0.0`.
    pub const UNSPECIFIED: Self = Self([0u8, 0, 0, 0]);

    /// The address `127.0.0.1`.
    pub const LOCALHOST: Self = Self([127u8, 0, 0, 1]);

    /// The address `255.255.255.255`.
    pub const BROADCAST: Self = Self([255u8, 255, 255, 255]);

    /// Creates a new address from its four octets in network order.
    pub const fn new(address: [u8; 4]) -> Self {
        Self(address)
    }

    /// Gets the address as a `u32`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Gets the address as a `[u8; 4]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Returns `true` for `127.0.0.0/8`.
    pub const fn is_loopback(&self) -> bool {
        self.0[0] == 127
    }

    /// Returns `true` for `0.0.0.0`.
    pub const fn is_unspecified(&self) -> bool {
        self.to_u32() == 0
    }

    /// Returns `true` for `224.0.0.0/4`.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0xf0 == 0xe0
    }

    /// Returns `true` for `255.255.255.255`.
    pub const fn is_broadcast(&self) -> bool {
        self.to_u32() == u32::MAX
    }

    /// Returns `true` for the private ranges of RFC 1918: `10.0.0.0/8`,
    /// `172.16.0.0/12` and `192.168.0.0/16`.
    pub const fn is_private(&self) -> bool {
        matches!(self.0, [10, ..] | [172, 16..=31, ..] | [192, 168, ..])
    }

    /// Returns `true` for `169.254.0.0/16`.
    pub const fn is_link_local(&self) -> bool {
        matches!(self.0, [169, 254, ..])
    }
}

impl Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        // pad honors width and alignment, so format the whole address first
        f.pad(&format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    /// Parses strict dotted-decimal text: exactly four decimal octets, no
    /// leading zeros, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s)
            .map(Self::from)
            .map_err(|_| AddressError::parse_failure(s, &[Family::V4]))
    }
}

impl From<u32> for Ipv4Address {
    fn from(n: u32) -> Self {
        Self::from(n.to_be_bytes())
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(n: [u8; 4]) -> Self {
        Self(n)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(address: Ipv4Address) -> Self {
        address.to_u32()
    }
}

impl From<Ipv4Address> for [u8; 4] {
    fn from(address: Ipv4Address) -> Self {
        address.0
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(address: Ipv4Addr) -> Self {
        Self(address.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Ipv4Address;

    type Ipad = Ipv4Address;

    #[test]
    fn predicates() {
        assert!(Ipad::UNSPECIFIED.is_unspecified());
        assert!(!Ipad::LOCALHOST.is_unspecified());

        assert!(Ipad::LOCALHOST.is_loopback());
        assert!(Ipad::new([127, 255, 0, 9]).is_loopback());
        assert!(!Ipad::new([128, 0, 0, 1]).is_loopback());

        assert!(Ipad::new([224, 0, 0, 1]).is_multicast());
        assert!(Ipad::new([239, 255, 255, 255]).is_multicast());
        assert!(!Ipad::new([240, 0, 0, 0]).is_multicast());
        assert!(!Ipad::new([223, 255, 255, 255]).is_multicast());

        assert!(Ipad::BROADCAST.is_broadcast());
        assert!(!Ipad::BROADCAST.is_multicast());

        assert!(Ipad::new([10, 1, 2, 3]).is_private());
        assert!(Ipad::new([172, 31, 0, 1]).is_private());
        assert!(!Ipad::new([172, 32, 0, 1]).is_private());
        assert!(Ipad::new([192, 168, 4, 4]).is_private());
        assert!(Ipad::new([169, 254, 1, 1]).is_link_local());
    }

    #[test]
    fn conversions() {
        let ip = Ipad::from(0x7f_00_00_01u32);
        assert_eq!(ip, Ipad::LOCALHOST);
        assert_eq!(ip.to_u32(), 0x7f_00_00_01);
        assert_eq!(<[u8; 4]>::from(ip), [127, 0, 0, 1]);
        assert_eq!(std::net::Ipv4Addr::from(ip), std::net::Ipv4Addr::LOCALHOST);
    }

    #[test]
    fn text() {
        assert_eq!(Ipad::new([192, 0, 2, 33]).to_string(), "192.0.2.33");
        assert_eq!("10.0.0.1".parse::<Ipad>(), Ok(Ipad::new([10, 0, 0, 1])));
        assert!("10.0.0".parse::<Ipad>().is_err());
        assert!("10.0.0.256".parse::<Ipad>().is_err());
        assert!("10.0.0.1 ".parse::<Ipad>().is_err());
        assert!("::1".parse::<Ipad>().is_err());
    }

    #[test]
    fn text_honors_width() {
        let ip = Ipad::new([1, 2, 3, 4]);
        assert_eq!(format!("[{:>12}]", ip), "[     1.2.3.4]");
        assert_eq!(format!("[{:<9}]", ip), "[1.2.3.4  ]");
        assert_eq!(format!("{:>12}", ip), format!("{:>12}", std::net::Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(Ipad::new([9, 255, 255, 255]) < Ipad::new([10, 0, 0, 0]));
        assert!(Ipad::UNSPECIFIED < Ipad::LOCALHOST);
        assert!(Ipad::LOCALHOST < Ipad::BROADCAST);
    }
}
