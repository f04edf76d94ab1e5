//! Parsing and composing wire-format data.
//!
//! This module provides the low-level machinery underneath the codec: the
//! [`Parser`] for taking apart a message buffer while keeping track of the
//! absolute read position – which domain name decompression depends on –,
//! the [`OctetsBuilder`] trait for the buffers messages are composed into,
//! and the error types shared by everything that reads or writes wire
//! data.

use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Parser --------------------------------------------------------

/// A reader of wire-format data with an explicit position.
///
/// The parser wraps an octets slice holding a complete message and a
/// position within that slice. All reads happen at the position and
/// advance it. Because the position is an index into the full message,
/// it doubles as the byte offset needed when recording the location of
/// domain name labels.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The underlying octets.
    octets: &'a [u8],

    /// The current read position.
    pos: usize,

    /// The exclusive end of the region available for reading.
    ///
    /// This is the length of `octets` except within a bounded sub-region
    /// created by [`parse_block`][Self::parse_block].
    len: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser atop an octets slice.
    #[must_use]
    pub fn from_ref(octets: &'a [u8]) -> Self {
        Parser {
            pos: 0,
            len: octets.len(),
            octets,
        }
    }

    /// Returns the current parse position as an index into the slice.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of octets left for reading.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Returns a slice containing the next `len` octets without advancing.
    pub fn peek(&self, len: usize) -> Result<&'a [u8], ParseError> {
        self.check_len(len)?;
        Ok(&self.octets[self.pos..self.pos + len])
    }

    /// Repositions the parser to the given index.
    pub fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.len {
            Err(ParseError::ShortInput)
        } else {
            self.pos = pos;
            Ok(())
        }
    }

    /// Advances the position by `len` octets.
    pub fn advance(&mut self, len: usize) -> Result<(), ParseError> {
        if len > self.remaining() {
            Err(ParseError::ShortInput)
        } else {
            self.pos += len;
            Ok(())
        }
    }

    /// Checks that at least `len` octets are left for reading.
    pub fn check_len(&self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            Err(ParseError::ShortInput)
        } else {
            Ok(())
        }
    }

    /// Takes the next `len` octets and advances over them.
    pub fn parse_octets(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        let res = self.peek(len)?;
        self.pos += len;
        Ok(res)
    }

    /// Fills the provided buffer with octets taken from the parser.
    pub fn parse_buf(&mut self, buf: &mut [u8]) -> Result<(), ParseError> {
        let pos = self.pos;
        self.advance(buf.len())?;
        buf.copy_from_slice(&self.octets[pos..self.pos]);
        Ok(())
    }

    /// Takes a `u8` from the parser.
    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        let res = self.peek(1)?[0];
        self.pos += 1;
        Ok(res)
    }

    /// Takes a big-endian `u16` from the parser.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        let mut res = [0; 2];
        self.parse_buf(&mut res)?;
        Ok(u16::from_be_bytes(res))
    }

    /// Takes a big-endian `u32` from the parser.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let mut res = [0; 4];
        self.parse_buf(&mut res)?;
        Ok(u32::from_be_bytes(res))
    }

    /// Parses a bounded sub-region through a closure.
    ///
    /// The closure sees a parser that is limited to the next `limit`
    /// octets but keeps its absolute positions, so offsets recorded
    /// within the region – such as those of labels inside record data –
    /// remain offsets into the whole message. A short read inside the
    /// region is reported as a form error rather than a short input,
    /// since the region's length was declared explicitly.
    ///
    /// Afterwards the parser is positioned directly behind the region
    /// regardless of how much the closure consumed: the declared length
    /// governs consumption.
    pub fn parse_block<F, U>(
        &mut self,
        limit: usize,
        op: F,
    ) -> Result<U, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<U, ParseError>,
    {
        let end = self.pos + limit;
        if end > self.len {
            return Err(ParseError::ShortInput);
        }
        let len = self.len;
        self.len = end;
        let res = op(self);
        self.len = len;
        self.pos = end;
        match res {
            Err(ParseError::ShortInput) => {
                Err(FormError::new("short field").into())
            }
            other => other,
        }
    }
}

//--- Parse helpers for addresses

/// Parses an IPv4 address from its four wire octets.
pub fn parse_ipv4addr(parser: &mut Parser) -> Result<Ipv4Addr, ParseError> {
    let mut buf = [0u8; 4];
    parser.parse_buf(&mut buf)?;
    Ok(buf.into())
}

/// Parses an IPv6 address from its sixteen wire octets.
pub fn parse_ipv6addr(parser: &mut Parser) -> Result<Ipv6Addr, ParseError> {
    let mut buf = [0u8; 16];
    parser.parse_buf(&mut buf)?;
    Ok(buf.into())
}

//------------ OctetsBuilder -------------------------------------------------

/// A buffer that wire-format data can be composed into.
///
/// Apart from appending, composing needs to reach back into data already
/// written – the RDATA length field is back-patched once the record data
/// has been produced – and to truncate after a failed attempt, hence the
/// `AsRef`/`AsMut` bounds and the `truncate` method.
pub trait OctetsBuilder: AsRef<[u8]> + AsMut<[u8]> {
    /// Appends a slice of octets to the end of the buffer.
    fn append_slice(&mut self, slice: &[u8]);

    /// Shortens the buffer to `len` octets.
    fn truncate(&mut self, len: usize);

    /// Appends a single octet.
    fn append_u8(&mut self, value: u8) {
        self.append_slice(&[value])
    }

    /// Appends a `u16` in network byte order.
    fn append_u16(&mut self, value: u16) {
        self.append_slice(&value.to_be_bytes())
    }

    /// Appends a `u32` in network byte order.
    fn append_u32(&mut self, value: u32) {
        self.append_slice(&value.to_be_bytes())
    }
}

impl OctetsBuilder for Vec<u8> {
    fn append_slice(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

impl OctetsBuilder for bytes::BytesMut {
    fn append_slice(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice)
    }

    fn truncate(&mut self, len: usize) {
        bytes::BytesMut::truncate(self, len)
    }
}

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its 16 bit length.
///
/// Two placeholder octets are appended, the closure produces the data,
/// and the placeholder is patched with the resulting length. If the data
/// doesn't fit into 16 bits or the closure fails, the target is truncated
/// back to where it started and an error is returned.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), ComposeError>
where
    Target: OctetsBuilder + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), ComposeError>,
{
    target.append_slice(&[0; 2]);
    let pos = target.as_ref().len();
    match op(target) {
        Ok(()) => match u16::try_from(target.as_ref().len() - pos) {
            Ok(len) => {
                target.as_mut()[pos - 2..pos]
                    .copy_from_slice(&len.to_be_bytes());
                Ok(())
            }
            Err(_) => {
                target.truncate(pos - 2);
                Err(ComposeError::LongData)
            }
        },
        Err(err) => {
            target.truncate(pos - 2);
            Err(err)
        }
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the parser.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    #[must_use]
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occurred.
///
/// This is a generic error for all kinds of error cases that result in
/// data not being accepted. For diagnostics, the error is being given a
/// static string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    #[must_use]
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// A domain name contained an empty label.
    EmptyLabel,

    /// A domain name label was longer than 63 octets.
    LongLabel,

    /// A domain name was longer than 255 octets in wire format.
    LongName,

    /// A character string was longer than 255 octets.
    LongCharStr,

    /// Data with a 16 bit length prefix exceeded 65,535 octets.
    LongData,
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::EmptyLabel => {
                f.write_str("empty domain name label")
            }
            ComposeError::LongLabel => {
                f.write_str("domain name label exceeds 63 octets")
            }
            ComposeError::LongName => {
                f.write_str("domain name exceeds 255 octets")
            }
            ComposeError::LongCharStr => {
                f.write_str("character string exceeds 255 octets")
            }
            ComposeError::LongData => {
                f.write_str("length prefixed data exceeds 65535 octets")
            }
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pos_seek_remaining() {
        let mut parser = Parser::from_ref(b"0123456789");
        assert_eq!(parser.peek(1).unwrap(), b"0");
        assert_eq!(parser.pos(), 0);
        assert_eq!(parser.remaining(), 10);
        assert_eq!(parser.seek(2), Ok(()));
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.remaining(), 8);
        assert_eq!(parser.peek(1).unwrap(), b"2");
        assert_eq!(parser.seek(10), Ok(()));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parser.seek(11), Err(ParseError::ShortInput));
    }

    #[test]
    fn parse_ints() {
        let mut parser = Parser::from_ref(b"\x12\x34\x56\x78\x9a");
        assert_eq!(parser.parse_u8(), Ok(0x12));
        assert_eq!(parser.parse_u16(), Ok(0x3456));
        assert_eq!(parser.parse_u8(), Ok(0x78));
        assert_eq!(parser.parse_u32(), Err(ParseError::ShortInput));
        assert_eq!(parser.pos(), 4);
    }

    #[test]
    fn parse_octets() {
        let mut parser = Parser::from_ref(b"0123456789");
        assert_eq!(parser.parse_octets(2).unwrap(), b"01");
        assert_eq!(parser.parse_octets(2).unwrap(), b"23");
        assert_eq!(parser.parse_octets(7), Err(ParseError::ShortInput));
        assert_eq!(parser.parse_octets(6).unwrap(), b"456789");
    }

    #[test]
    fn parse_block_consumes_declared_length() {
        let mut parser = Parser::from_ref(b"\x01\x02\x03\x04\x05");
        let res = parser
            .parse_block(4, |parser| parser.parse_u16())
            .unwrap();
        assert_eq!(res, 0x0102);
        // The block's declared length was consumed, not just the u16.
        assert_eq!(parser.pos(), 4);
        assert_eq!(parser.parse_u8(), Ok(0x05));
    }

    #[test]
    fn parse_block_short_field() {
        let mut parser = Parser::from_ref(b"\x01\x02\x03");
        let res = parser.parse_block(2, |parser| parser.parse_u32());
        assert_eq!(res, Err(ParseError::form_error("short field")));
    }

    #[test]
    fn compose_len_prefixed_patches_length() {
        let mut target = Vec::new();
        compose_len_prefixed(&mut target, |target| {
            target.append_u32(0xdead_beef);
            Ok(())
        })
        .unwrap();
        assert_eq!(target, b"\x00\x04\xde\xad\xbe\xef");
    }

    #[test]
    fn compose_len_prefixed_truncates_on_error() {
        let mut target = vec![0x55u8];
        let res = compose_len_prefixed(&mut target, |target| {
            target.append_u8(0);
            Err(ComposeError::LongLabel)
        });
        assert_eq!(res, Err(ComposeError::LongLabel));
        assert_eq!(target, [0x55]);
    }

    #[test]
    fn bytes_mut_builder() {
        let mut target = bytes::BytesMut::new();
        target.append_u16(0x1234);
        target.append_slice(b"ab");
        assert_eq!(target.as_ref(), b"\x12\x34ab");
    }
}
