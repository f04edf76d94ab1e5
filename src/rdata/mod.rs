//! Record data for the supported record types.
//!
//! Resource records are polymorphic over their record data. This module
//! provides one type per supported kind of record data, arranged into
//! submodules by the RFC defining them, and ties them together in the
//! [`RecordData`] enum which dispatches parsing and composing on the
//! record type code.

pub mod rfc1035;
pub mod rfc2782;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc6891;

pub use self::rfc1035::{A, Ptr, Txt};
pub use self::rfc2782::Srv;
pub use self::rfc3596::Aaaa;
pub use self::rfc4034::Nsec;
pub use self::rfc6891::Opt;

use crate::base::iana::Rtype;
use crate::base::name::NameContext;
use crate::base::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;

//------------ RecordData ----------------------------------------------------

/// The record data of a resource record.
///
/// This is a closed sum over the record types the codec understands
/// plus [`Unknown`][RecordData::Unknown] for hand-built records of
/// other types. Parsing dispatches on the type code from the record
/// header; a type code with no decoder parses to `None`, leaving it to
/// the caller to abort.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordData {
    /// A record data.
    A(A),

    /// AAAA record data.
    Aaaa(Aaaa),

    /// SRV record data.
    Srv(Srv),

    /// PTR record data.
    Ptr(Ptr),

    /// TXT record data.
    Txt(Txt),

    /// NSEC record data.
    Nsec(Nsec),

    /// OPT record data.
    Opt(Opt),

    /// Record data of a type the codec does not understand.
    ///
    /// This only exists for composing records; decoding a message
    /// containing an unsupported record type fails instead.
    Unknown(UnknownRecordData),
}

impl RecordData {
    /// Returns the record type of the data.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(_) => A::RTYPE,
            RecordData::Aaaa(_) => Aaaa::RTYPE,
            RecordData::Srv(_) => Srv::RTYPE,
            RecordData::Ptr(_) => Ptr::RTYPE,
            RecordData::Txt(_) => Txt::RTYPE,
            RecordData::Nsec(_) => Nsec::RTYPE,
            RecordData::Opt(_) => Opt::RTYPE,
            RecordData::Unknown(ref data) => data.rtype(),
        }
    }

    /// Takes record data of the given type from the beginning of
    /// `parser`.
    ///
    /// Returns `Ok(None)` if there is no decoder for `rtype`.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Option<Self>, ParseError> {
        match rtype {
            Rtype::A => A::parse(parser).map(RecordData::A).map(Some),
            Rtype::AAAA => {
                Aaaa::parse(parser).map(RecordData::Aaaa).map(Some)
            }
            Rtype::SRV => {
                Srv::parse(parser, context).map(RecordData::Srv).map(Some)
            }
            Rtype::PTR => {
                Ptr::parse(parser, context).map(RecordData::Ptr).map(Some)
            }
            Rtype::TXT => Txt::parse(parser).map(RecordData::Txt).map(Some),
            Rtype::NSEC => {
                Nsec::parse(parser, context).map(RecordData::Nsec).map(Some)
            }
            Rtype::OPT => Opt::parse(parser).map(RecordData::Opt).map(Some),
            _ => Ok(None),
        }
    }

    /// Appends the wire-format record data to `target`.
    ///
    /// This is the bare record data without the length prefix.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        match *self {
            RecordData::A(ref data) => {
                data.compose(target);
                Ok(())
            }
            RecordData::Aaaa(ref data) => {
                data.compose(target);
                Ok(())
            }
            RecordData::Srv(ref data) => data.compose(target),
            RecordData::Ptr(ref data) => data.compose(target),
            RecordData::Txt(ref data) => data.compose(target),
            RecordData::Nsec(ref data) => data.compose(target),
            RecordData::Opt(ref data) => data.compose(target),
            RecordData::Unknown(ref data) => {
                data.compose(target);
                Ok(())
            }
        }
    }
}

//--- From

impl From<A> for RecordData {
    fn from(data: A) -> Self {
        RecordData::A(data)
    }
}

impl From<Aaaa> for RecordData {
    fn from(data: Aaaa) -> Self {
        RecordData::Aaaa(data)
    }
}

impl From<Srv> for RecordData {
    fn from(data: Srv) -> Self {
        RecordData::Srv(data)
    }
}

impl From<Ptr> for RecordData {
    fn from(data: Ptr) -> Self {
        RecordData::Ptr(data)
    }
}

impl From<Txt> for RecordData {
    fn from(data: Txt) -> Self {
        RecordData::Txt(data)
    }
}

impl From<Nsec> for RecordData {
    fn from(data: Nsec) -> Self {
        RecordData::Nsec(data)
    }
}

impl From<Opt> for RecordData {
    fn from(data: Opt) -> Self {
        RecordData::Opt(data)
    }
}

impl From<UnknownRecordData> for RecordData {
    fn from(data: UnknownRecordData) -> Self {
        RecordData::Unknown(data)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => data.fmt(f),
            RecordData::Aaaa(ref data) => data.fmt(f),
            RecordData::Srv(ref data) => data.fmt(f),
            RecordData::Ptr(ref data) => data.fmt(f),
            RecordData::Txt(ref data) => data.fmt(f),
            RecordData::Nsec(ref data) => data.fmt(f),
            RecordData::Opt(ref data) => data.fmt(f),
            RecordData::Unknown(ref data) => data.fmt(f),
        }
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// Record data of an arbitrary type given as raw octets.
///
/// This allows composing records of types the codec has no specific
/// support for. The octets are written to the wire verbatim.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRecordData {
    rtype: Rtype,
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates unknown record data from a type code and raw octets.
    pub fn from_octets(rtype: Rtype, data: impl Into<Vec<u8>>) -> Self {
        UnknownRecordData {
            rtype,
            data: data.into(),
        }
    }

    /// Returns the record type of the data.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the raw record data octets.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Appends the raw record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_slice(&self.data)
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())
    }
}
