use crate::{Address, Ipv4Address};
use std::fmt::{self, Display};

#[cfg(feature = "ipv6")]
use crate::Ipv6Address;

/// Which version of the Internet Protocol an address belongs to.
///
/// Families are ordered `V4` before `V6`, which is also the order in which
/// [`Address`] values of different families compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    #[cfg(feature = "ipv6")]
    V6,
}

impl Family {
    /// Every family compiled into this build, in the order the parser tries
    /// their grammars.
    #[cfg(feature = "ipv6")]
    pub const ALL: &'static [Family] = &[Family::V6, Family::V4];

    /// Every family compiled into this build, in the order the parser tries
    /// their grammars.
    #[cfg(not(feature = "ipv6"))]
    pub const ALL: &'static [Family] = &[Family::V4];

    /// The all-zero address of this family.
    pub const fn unspecified(self) -> Address {
        match self {
            Self::V4 => Address::V4(Ipv4Address::UNSPECIFIED),
            #[cfg(feature = "ipv6")]
            Self::V6 => Address::V6(Ipv6Address::UNSPECIFIED),
        }
    }

    /// The loopback address of this family.
    pub const fn loopback(self) -> Address {
        match self {
            Self::V4 => Address::V4(Ipv4Address::LOCALHOST),
            #[cfg(feature = "ipv6")]
            Self::V6 => Address::V6(Ipv6Address::LOCALHOST),
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::V4 => "IPv4",
            #[cfg(feature = "ipv6")]
            Self::V6 => "IPv6",
        };
        write!(f, "{}", s)
    }
}
