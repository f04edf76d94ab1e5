//! Record data from [RFC 4034]: the NSEC record type.
//!
//! NSEC records were introduced for authenticated denial of existence
//! in DNSSEC. Multicast DNS borrows them for a simpler purpose: a
//! responder attaches an NSEC record naming the record types it *does*
//! have for a name, so queriers can cache the nonexistence of the rest
//! ([RFC 6762], section 6.1).
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034
//! [RFC 6762]: https://tools.ietf.org/html/rfc6762

use crate::base::iana::Rtype;
use crate::base::name::{Name, NameContext};
use crate::base::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;

//------------ Nsec ----------------------------------------------------------

/// NSEC record data.
///
/// The record data consists of the next domain name in canonical zone
/// order and a bitmap of the record types present at the owner name.
/// The type list is kept sorted ascending and free of duplicates, which
/// is also the order the bitmap encodes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec {
    next_name: Name,
    types: Vec<Rtype>,
}

impl Nsec {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::NSEC;

    /// Creates new NSEC record data.
    ///
    /// The type list is sorted and deduplicated.
    pub fn new(next_name: impl Into<Name>, mut types: Vec<Rtype>) -> Self {
        types.sort();
        types.dedup();
        Nsec {
            next_name: next_name.into(),
            types,
        }
    }

    /// Returns the next domain name.
    #[must_use]
    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// Returns the record types declared present, in ascending order.
    #[must_use]
    pub fn types(&self) -> &[Rtype] {
        &self.types
    }

    /// Takes the record data from the beginning of `parser`.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        let next_name = Name::parse(parser, context)?;
        let mut types = Vec::new();
        while parser.remaining() > 0 {
            parse_bitmap_window(parser, &mut types)?;
        }
        Ok(Self::new(next_name, types))
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.next_name.compose(target)?;
        compose_bitmap(&self.types, target);
        Ok(())
    }
}

//--- Display

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.", self.next_name)?;
        for rtype in &self.types {
            write!(f, " {}", rtype)?;
        }
        Ok(())
    }
}

//------------ Type bitmap ---------------------------------------------------
//
// The bitmap groups types by their high octet into windows. Each window
// is encoded as its number, an octet count, and that many bitmap
// octets; within an octet, bits are numbered from the most significant
// down. Interior all-zero octets are kept so positions stay meaningful,
// only octets past the highest set bit are dropped. A window may never
// be empty or longer than 32 octets (RFC 4034, section 4.1.2).

/// Parses a single bitmap window, appending the types found.
fn parse_bitmap_window(
    parser: &mut Parser,
    types: &mut Vec<Rtype>,
) -> Result<(), ParseError> {
    let window = parser.parse_u8()?;
    let count = parser.parse_u8()?;
    if count == 0 || count > 32 {
        return Err(ParseError::form_error("invalid type bitmap window"));
    }
    let octets = parser.parse_octets(count as usize)?;
    for (index, &octet) in octets.iter().enumerate() {
        for bit in 0..8 {
            if octet & (0x80 >> bit) != 0 {
                types.push(Rtype::from_int(
                    u16::from(window) * 256 + (index as u16) * 8 + bit,
                ));
            }
        }
    }
    Ok(())
}

/// Composes the bitmap for a sorted, deduplicated type list.
fn compose_bitmap<Target: OctetsBuilder + ?Sized>(
    types: &[Rtype],
    target: &mut Target,
) {
    let mut index = 0;
    while index < types.len() {
        let window = (types[index].to_int() >> 8) as u8;
        let mut octets = [0u8; 32];
        let mut count = 0;
        while index < types.len()
            && (types[index].to_int() >> 8) as u8 == window
        {
            let low = types[index].to_int() as u8;
            octets[usize::from(low / 8)] |= 0x80 >> (low % 8);
            count = usize::from(low / 8) + 1;
            index += 1;
        }
        target.append_u8(window);
        target.append_u8(count as u8);
        target.append_slice(&octets[..count]);
    }
}

//============ Testing =======================================================
