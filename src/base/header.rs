//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet header containing some
//! general information related to the message as well as the number of
//! entries in each of the four sections that follow. Its content and
//! format are defined in section 4.1.1 of [RFC 1035].
//!
//! Because changing the section counts invalidates the rest of the
//! message while the other header fields can be modified freely, the
//! header is split into two types: [`Header`] contains the freely
//! modifiable first four octets and [`HeaderCounts`] the section counts.
//! [`HeaderSection`] wraps both into the full twelve octets.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{OctetsBuilder, ParseError, Parser};

//------------ Header --------------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the message ID, the flag bits, the opcode, and
/// the response code – the first four octets of the header. It keeps
/// those four octets in wire representation, so encoding and decoding
/// are bit-exact inverses by construction. The data is laid out like
/// this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|         |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// The actual header in its wire format representation.
    ///
    /// This means that the ID field is in big endian.
    inner: [u8; 4],
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header with all fields zero or false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying octets.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID is chosen by whoever creates a query and copied into the
    /// response, allowing to match responses to queries. In Multicast
    /// DNS it is zero except in legacy unicast interactions.
    #[must_use]
    pub fn id(self) -> u16 {
        u16::from_be_bytes([self.inner[0], self.inner[1]])
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.inner[..2].copy_from_slice(&value.to_be_bytes())
    }

    /// Sets the ID field to a randomly chosen number.
    pub fn set_random_id(&mut self) {
        self.set_id(rand::random())
    }

    /// Returns whether the QR bit is set.
    ///
    /// The bit states whether the message is a response (`true`) or a
    /// query (`false`).
    #[must_use]
    pub fn qr(self) -> bool {
        self.get_bit(2, 7)
    }

    /// Sets the value of the QR bit.
    pub fn set_qr(&mut self, set: bool) {
        self.set_bit(2, 7, set)
    }

    /// Returns the value of the opcode field.
    ///
    /// The field specifies the kind of query the message contains. See
    /// [`Opcode`] for the possible values.
    #[must_use]
    pub fn opcode(self) -> Opcode {
        Opcode::from_int((self.inner[2] >> 3) & 0x0F)
    }

    /// Sets the value of the opcode field.
    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.inner[2] = self.inner[2] & 0x87 | (opcode.to_int() << 3);
    }

    /// Returns whether the AA bit is set.
    ///
    /// The bit marks a response as an authoritative answer. Multicast
    /// DNS responses always carry it.
    #[must_use]
    pub fn aa(self) -> bool {
        self.get_bit(2, 2)
    }

    /// Sets the value of the AA bit.
    pub fn set_aa(&mut self, set: bool) {
        self.set_bit(2, 2, set)
    }

    /// Returns whether the TC bit is set.
    ///
    /// The bit signals that the message was truncated and more data
    /// would have been available.
    #[must_use]
    pub fn tc(self) -> bool {
        self.get_bit(2, 1)
    }

    /// Sets the value of the TC bit.
    pub fn set_tc(&mut self, set: bool) {
        self.set_bit(2, 1, set)
    }

    /// Returns whether the RD bit is set.
    ///
    /// The bit asks the server to answer the query recursively. It has
    /// no meaning in Multicast DNS.
    #[must_use]
    pub fn rd(self) -> bool {
        self.get_bit(2, 0)
    }

    /// Sets the value of the RD bit.
    pub fn set_rd(&mut self, set: bool) {
        self.set_bit(2, 0, set)
    }

    /// Returns whether the RA bit is set.
    ///
    /// In a response, the bit states whether the server supports
    /// recursion.
    #[must_use]
    pub fn ra(self) -> bool {
        self.get_bit(3, 7)
    }

    /// Sets the value of the RA bit.
    pub fn set_ra(&mut self, set: bool) {
        self.set_bit(3, 7, set)
    }

    /// Returns the value of the RCODE field.
    ///
    /// The response code states whether the query was processed
    /// successfully. See [`Rcode`] for the possible values.
    #[must_use]
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.inner[3] & 0x0F)
    }

    /// Sets the value of the RCODE field.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.inner[3] = self.inner[3] & 0xF0 | (rcode.to_int() & 0x0F);
    }

    //--- Internal helpers

    /// Returns the value of the bit at the given position.
    ///
    /// The argument `offset` gives the octet within the inner array and
    /// `bit` the number of the bit with the most significant bit being 7.
    fn get_bit(self, offset: usize, bit: usize) -> bool {
        self.inner[offset] & (1 << bit) != 0
    }

    /// Sets or resets the given bit.
    fn set_bit(&mut self, offset: usize, bit: usize, set: bool) {
        if set {
            self.inner[offset] |= 1 << bit
        } else {
            self.inner[offset] &= !(1 << bit)
        }
    }
}

/// # Parsing and Composing
///
impl Header {
    /// Takes a header from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut inner = [0; 4];
        parser.parse_buf(&mut inner)?;
        Ok(Header { inner })
    }

    /// Appends the wire-format header to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_slice(&self.inner)
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section counts of a DNS message.
///
/// These are the last eight octets of the message header, holding the
/// number of entries in the four sections of the message in big endian:
/// questions, answers, name server records, and additional records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    /// The counts in their wire format representation.
    inner: [u8; 8],
}

/// # Creation and Field Access
///
impl HeaderCounts {
    /// Creates a new value with all counts zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the question section.
    #[must_use]
    pub fn qdcount(self) -> u16 {
        self.get_u16(0)
    }

    /// Sets the number of entries in the question section.
    pub fn set_qdcount(&mut self, value: u16) {
        self.set_u16(0, value)
    }

    /// Returns the number of entries in the answer section.
    #[must_use]
    pub fn ancount(self) -> u16 {
        self.get_u16(2)
    }

    /// Sets the number of entries in the answer section.
    pub fn set_ancount(&mut self, value: u16) {
        self.set_u16(2, value)
    }

    /// Returns the number of entries in the name server section.
    ///
    /// The section is not used by Multicast DNS and this codec never
    /// decodes or encodes entries for it.
    #[must_use]
    pub fn nscount(self) -> u16 {
        self.get_u16(4)
    }

    /// Sets the number of entries in the name server section.
    pub fn set_nscount(&mut self, value: u16) {
        self.set_u16(4, value)
    }

    /// Returns the number of entries in the additional section.
    #[must_use]
    pub fn arcount(self) -> u16 {
        self.get_u16(6)
    }

    /// Sets the number of entries in the additional section.
    pub fn set_arcount(&mut self, value: u16) {
        self.set_u16(6, value)
    }

    //--- Internal helpers

    fn get_u16(self, offset: usize) -> u16 {
        u16::from_be_bytes([self.inner[offset], self.inner[offset + 1]])
    }

    fn set_u16(&mut self, offset: usize, value: u16) {
        self.inner[offset..offset + 2].copy_from_slice(&value.to_be_bytes())
    }
}

/// # Parsing and Composing
///
impl HeaderCounts {
    /// Takes the section counts from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut inner = [0; 8];
        parser.parse_buf(&mut inner)?;
        Ok(HeaderCounts { inner })
    }

    /// Appends the wire-format counts to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_slice(&self.inner)
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

impl HeaderSection {
    /// Creates a new header section with all fields zero or false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header section from its two parts.
    #[must_use]
    pub fn from_parts(header: Header, counts: HeaderCounts) -> Self {
        HeaderSection { header, counts }
    }

    /// Returns a reference to the header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns a reference to the section counts.
    #[must_use]
    pub fn counts(&self) -> &HeaderCounts {
        &self.counts
    }

    /// Returns a mutable reference to the section counts.
    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }

    /// Takes a header section from the beginning of `parser`.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(HeaderSection {
            header: Header::parse(parser)?,
            counts: HeaderCounts::parse(parser)?,
        })
    }

    /// Appends the wire-format header section to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.header.compose(target);
        self.counts.compose(target);
    }
}

//============ Testing =======================================================
