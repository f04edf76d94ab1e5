//! Record data from [RFC 6891]: the OPT pseudo record type.
//!
//! OPT records carry EDNS options as a sequence of (code, length,
//! value) tuples in their record data. This codec keeps the options as
//! an opaque mapping from option code to raw value and does not
//! interpret the values themselves.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use crate::base::iana::{OptionCode, Rtype};
use crate::base::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;
use std::collections::BTreeMap;

//------------ Opt -----------------------------------------------------------

/// OPT record data.
///
/// Option codes are unique within a record; a code appearing twice on
/// the wire keeps its last value. Composing writes the options in
/// ascending code order, which the ordered map provides by itself.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Opt {
    options: BTreeMap<OptionCode, Vec<u8>>,
}

impl Opt {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::OPT;

    /// Creates new, empty OPT record data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an option, replacing any previous value for the code.
    pub fn insert(&mut self, code: OptionCode, value: impl Into<Vec<u8>>) {
        self.options.insert(code, value.into());
    }

    /// Returns the value of the option with the given code.
    #[must_use]
    pub fn get(&self, code: OptionCode) -> Option<&[u8]> {
        self.options.get(&code).map(Vec::as_slice)
    }

    /// Returns an iterator over the options in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionCode, &[u8])> {
        self.options.iter().map(|(&code, value)| (code, value.as_slice()))
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Takes the record data from the beginning of `parser`.
    ///
    /// Options are read until the record data is exhausted.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut res = Self::new();
        while parser.remaining() > 0 {
            let code = OptionCode::parse(parser)?;
            let len = parser.parse_u16()?;
            res.insert(code, parser.parse_octets(len as usize)?);
        }
        Ok(res)
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        for (code, value) in &self.options {
            let len = u16::try_from(value.len())
                .map_err(|_| ComposeError::LongData)?;
            code.compose(target);
            target.append_u16(len);
            target.append_slice(value);
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (code, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={} octets", code, value.len())?;
        }
        Ok(())
    }
}

//============ Testing =======================================================
