//! Resource records.
//!
//! A resource record binds data of some record type to a domain name.
//! All records share a common header – owner name, type, class, and
//! TTL – followed by the length-prefixed record data whose layout
//! depends on the type. In Multicast DNS the top bit of the class field
//! is the *cache-flush* bit: a responder sets it to tell receivers to
//! replace, rather than add to, previously cached records for this name
//! and type ([RFC 6762], section 10.2).
//!
//! [RFC 6762]: https://tools.ietf.org/html/rfc6762

use super::iana::{Class, Rtype};
use super::name::{Name, NameContext};
use super::wire::{
    compose_len_prefixed, ComposeError, OctetsBuilder, ParseError, Parser,
};
use crate::rdata::RecordData;
use core::fmt;

/// The mask of the cache-flush bit in a record's class field.
const CACHE_FLUSH_MASK: u16 = 0x8000;

//------------ Record --------------------------------------------------------

/// A resource record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The owner name of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// Whether the cache-flush bit is set.
    cache_flush: bool,

    /// The time to live of the record in seconds.
    ttl: u32,

    /// The record data.
    data: RecordData,
}

/// # Creation and Conversion
///
impl Record {
    /// Creates a new record from its components.
    ///
    /// The cache-flush bit starts out unset.
    pub fn new(
        owner: impl Into<Name>,
        class: Class,
        ttl: u32,
        data: impl Into<RecordData>,
    ) -> Self {
        Record {
            owner: owner.into(),
            class,
            cache_flush: false,
            ttl,
            data: data.into(),
        }
    }

    /// Converts the record into its record data.
    #[must_use]
    pub fn into_data(self) -> RecordData {
        self.data
    }
}

/// # Field Access
///
impl Record {
    /// Returns a reference to the owner name of the record.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns whether the cache-flush bit is set.
    #[must_use]
    pub fn cache_flush(&self) -> bool {
        self.cache_flush
    }

    /// Sets the cache-flush bit.
    pub fn set_cache_flush(&mut self, set: bool) {
        self.cache_flush = set
    }

    /// Returns the TTL of the record in seconds.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the TTL of the record.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &RecordData {
        &self.data
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Takes a record from the beginning of `parser`.
    ///
    /// If the record's type has no decoder, returns `Ok(None)` with the
    /// parser positioned behind the record.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Option<Self>, ParseError> {
        let header = RecordHeader::parse(parser, context)?;
        let rtype = header.rtype();
        let data = parser.parse_block(header.rdlen().into(), |parser| {
            RecordData::parse(rtype, parser, context)
        })?;
        Ok(data.map(|data| header.into_record(data)))
    }

    /// Appends the wire-format record to `target`.
    ///
    /// The record data length field is filled in from the composed
    /// record data.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.owner.compose(target)?;
        self.rtype().compose(target);
        let mut class = self.class.to_int() & !CACHE_FLUSH_MASK;
        if self.cache_flush {
            class |= CACHE_FLUSH_MASK;
        }
        target.append_u16(class);
        target.append_u32(self.ttl);
        compose_len_prefixed(target, |target| self.data.compose(target))
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ RecordHeader --------------------------------------------------

/// The common header of a resource record up to the record data length.
///
/// Decoding reads the header first to learn the record type and the
/// record data length before dispatching on the type, and keeps the
/// header around to build the [`Record`] once the data is parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    owner: Name,
    rtype: Rtype,
    class: Class,
    cache_flush: bool,
    ttl: u32,
    rdlen: u16,
}

impl RecordHeader {
    /// Returns a reference to the owner name of the record.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns whether the cache-flush bit is set.
    #[must_use]
    pub fn cache_flush(&self) -> bool {
        self.cache_flush
    }

    /// Returns the TTL of the record in seconds.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the declared length of the record data.
    #[must_use]
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Takes a record header from the beginning of `parser`.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        let owner = Name::parse(parser, context)?;
        let rtype = Rtype::parse(parser)?;
        let class = parser.parse_u16()?;
        let ttl = parser.parse_u32()?;
        let rdlen = parser.parse_u16()?;
        Ok(RecordHeader {
            owner,
            rtype,
            class: Class::from_int(class & !CACHE_FLUSH_MASK),
            cache_flush: class & CACHE_FLUSH_MASK != 0,
            ttl,
            rdlen,
        })
    }

    /// Combines the header with record data into a record.
    #[must_use]
    pub fn into_record(self, data: RecordData) -> Record {
        Record {
            owner: self.owner,
            class: self.class,
            cache_flush: self.cache_flush,
            ttl: self.ttl,
            data,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::rfc1035::A;
    use crate::rdata::UnknownRecordData;

    #[test]
    fn compose_parse_roundtrip() {
        let mut record = Record::new(
            "host.local",
            Class::IN,
            120,
            A::new([10, 0, 0, 1].into()),
        );
        record.set_cache_flush(true);

        let mut wire = Vec::new();
        record.compose(&mut wire).unwrap();
        assert_eq!(
            wire,
            b"\x04host\x05local\x00\x00\x01\x80\x01\x00\x00\x00\x78\
              \x00\x04\x0a\x00\x00\x01"
        );

        let mut parser = Parser::from_ref(&wire);
        let parsed = Record::parse(&mut parser, &mut NameContext::new())
            .unwrap()
            .unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn excess_rdata_is_skipped() {
        // An A record with six octets of record data: the address is
        // the first four, the rest is consumed without being looked at.
        let wire = b"\x00\x00\x01\x00\x01\x00\x00\x00\x78\x00\x06\
            \x0a\x00\x00\x01\xde\xad";
        let mut parser = Parser::from_ref(wire);
        let record = Record::parse(&mut parser, &mut NameContext::new())
            .unwrap()
            .unwrap();
        assert_eq!(
            record.data(),
            &RecordData::A(A::new([10, 0, 0, 1].into()))
        );
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn short_rdata_is_an_error() {
        let wire = b"\x00\x00\x01\x00\x01\x00\x00\x00\x78\x00\x02\x0a\x00";
        let mut parser = Parser::from_ref(wire);
        assert_eq!(
            Record::parse(&mut parser, &mut NameContext::new()),
            Err(ParseError::form_error("short field"))
        );
    }

    #[test]
    fn unsupported_rtype_parses_to_none() {
        // A CNAME record: no decoder for it.
        let wire = b"\x00\x00\x05\x00\x01\x00\x00\x00\x78\x00\x05\
            \x03foo\x00";
        let mut parser = Parser::from_ref(wire);
        assert_eq!(
            Record::parse(&mut parser, &mut NameContext::new()),
            Ok(None)
        );
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn unknown_record_data_composes_verbatim() {
        let record = Record::new(
            "foo.local",
            Class::IN,
            0,
            UnknownRecordData::from_octets(
                Rtype::from_int(0xff00),
                b"\x01\x02\x03".as_slice(),
            ),
        );
        let mut wire = Vec::new();
        record.compose(&mut wire).unwrap();
        assert_eq!(
            wire,
            b"\x03foo\x05local\x00\xff\x00\x00\x01\x00\x00\x00\x00\
              \x00\x03\x01\x02\x03"
        );
    }
}
