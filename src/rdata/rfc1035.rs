//! Record data from [RFC 1035]: the A, PTR, and TXT record types.
//!
//! While the wire shapes are those of RFC 1035, TXT record data is
//! interpreted the DNS-SD way: an ordered sequence of length-prefixed
//! strings, each at most 255 octets, as described in [RFC 6763],
//! section 6.1.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6763]: https://tools.ietf.org/html/rfc6763

use crate::base::iana::Rtype;
use crate::base::name::{Name, NameContext};
use crate::base::wire::{
    parse_ipv4addr, ComposeError, OctetsBuilder, ParseError, Parser,
};
use core::fmt;
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::A;

    /// Creates new A record data from an IPv4 address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    /// Returns the address of the record data.
    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Takes the record data from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        parse_ipv4addr(parser).map(Self::new)
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

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Ptr -----------------------------------------------------------

/// PTR record data.
///
/// PTR records are pointers from one domain name to another. DNS-SD
/// uses them to enumerate the instances of a service type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ptr {
    ptrdname: Name,
}

impl Ptr {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::PTR;

    /// Creates new PTR record data from the name pointed to.
    pub fn new(ptrdname: impl Into<Name>) -> Self {
        Ptr {
            ptrdname: ptrdname.into(),
        }
    }

    /// Returns the name this record data points to.
    #[must_use]
    pub fn ptrdname(&self) -> &Name {
        &self.ptrdname
    }

    /// Takes the record data from the beginning of `parser`.
    ///
    /// The name may be compressed, so parsing needs the message's name
    /// context.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        Name::parse(parser, context).map(Self::new)
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.ptrdname.compose(target)
    }
}

//--- Display

impl fmt::Display for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.", self.ptrdname)
    }
}

//------------ Txt -----------------------------------------------------------

/// TXT record data.
///
/// The record data is an ordered sequence of character strings, each
/// wire-encoded as a length octet followed by up to 255 octets of
/// content. DNS-SD stores `key=value` pairs in them but the values may
/// be arbitrary binary data, so the strings are kept as raw octets.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Txt {
    strings: Vec<Vec<u8>>,
}

impl Txt {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::TXT;

    /// Creates new, empty TXT record data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character string.
    pub fn push(&mut self, string: impl Into<Vec<u8>>) {
        self.strings.push(string.into())
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.strings.iter().map(Vec::as_slice)
    }

    /// Returns the number of character strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns whether there are no character strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Takes the record data from the beginning of `parser`.
    ///
    /// There is no terminator; strings are read until the record data
    /// is exhausted.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut res = Self::new();
        while parser.remaining() > 0 {
            let len = parser.parse_u8()?;
            res.push(parser.parse_octets(len as usize)?);
        }
        Ok(res)
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        for string in &self.strings {
            let len = u8::try_from(string.len())
                .map_err(|_| ComposeError::LongCharStr)?;
            target.append_u8(len);
            target.append_slice(string);
        }
        Ok(())
    }
}

//--- FromIterator

impl<S: Into<Vec<u8>>> FromIterator<S> for Txt {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Txt {
            strings: iter.into_iter().map(Into::into).collect(),
        }
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for string in &self.strings {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "\"{}\"", String::from_utf8_lossy(string))?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_roundtrip() {
        let data = A::new(Ipv4Addr::new(169, 254, 13, 37));
        let mut wire = Vec::new();
        data.compose(&mut wire);
        assert_eq!(wire, [169, 254, 13, 37]);
        let mut parser = Parser::from_ref(&wire);
        assert_eq!(A::parse(&mut parser), Ok(data));
    }

    #[test]
    fn ptr_roundtrip() {
        let data = Ptr::new("display._airplay._tcp.local");
        let mut wire = Vec::new();
        data.compose(&mut wire).unwrap();
        let mut parser = Parser::from_ref(&wire);
        assert_eq!(
            Ptr::parse(&mut parser, &mut NameContext::new()).unwrap(),
            data
        );
    }

    #[test]
    fn txt_exact_wire_format() {
        let data: Txt = ["0=1", "a=b"].into_iter().collect();
        let mut wire = Vec::new();
        data.compose(&mut wire).unwrap();
        assert_eq!(wire, b"\x030=1\x03a=b");
    }

    #[test]
    fn txt_parse_stops_at_rdata_end() {
        let wire = b"\x1adeviceid=00:11:22:33:44:55";
        let mut parser = Parser::from_ref(wire);
        let data = Txt::parse(&mut parser).unwrap();
        assert_eq!(
            data.iter().collect::<Vec<_>>(),
            [b"deviceid=00:11:22:33:44:55".as_slice()]
        );
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn txt_rejects_truncated_string() {
        let mut parser = Parser::from_ref(b"\x05ab");
        assert_eq!(Txt::parse(&mut parser), Err(ParseError::ShortInput));
    }

    #[test]
    fn txt_rejects_long_string() {
        let mut data = Txt::new();
        data.push(vec![0u8; 256]);
        let mut wire = Vec::new();
        assert_eq!(
            data.compose(&mut wire),
            Err(ComposeError::LongCharStr)
        );
    }
}
