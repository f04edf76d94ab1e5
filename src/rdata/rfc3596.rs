//! Record data from [RFC 3596]: the AAAA record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::wire::{parse_ipv6addr, OctetsBuilder, ParseError, Parser};
use core::fmt;
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// AAAA record data.
///
/// AAAA records convey the IPv6 address of a host.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::AAAA;

    /// Creates new AAAA record data from an IPv6 address.
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    /// Returns the address of the record data.
    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Takes the record data from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        parse_ipv6addr(parser).map(Self::new)
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_slice(&self.addr.octets())
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let data = Aaaa::new("fe80::1".parse().unwrap());
        let mut wire = Vec::new();
        data.compose(&mut wire);
        assert_eq!(wire.len(), 16);
        let mut parser = Parser::from_ref(&wire);
        assert_eq!(Aaaa::parse(&mut parser), Ok(data));
    }
}
