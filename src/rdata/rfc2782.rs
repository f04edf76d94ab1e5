//! Record data from [RFC 2782]: the SRV record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::name::{Name, NameContext};
use crate::base::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;

//------------ Srv -----------------------------------------------------------

/// SRV record data.
///
/// SRV records name the host and port a service instance can be reached
/// at, together with a priority and weight for choosing among several
/// instances.
///
/// The target name starts six octets into the record data, behind the
/// three fixed fields. That matters for decoding: the name may be the
/// target of compression pointers from elsewhere in the message, and it
/// is recorded in the name context at exactly that offset.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    /// The record type of this record data.
    pub const RTYPE: Rtype = Rtype::SRV;

    /// Creates new SRV record data from its four fields.
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<Name>,
    ) -> Self {
        Srv {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }

    /// Returns the priority of the target host.
    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight for entries with the same priority.
    #[must_use]
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port on the target host.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the domain name of the target host.
    #[must_use]
    pub fn target(&self) -> &Name {
        &self.target
    }

    /// Takes the record data from the beginning of `parser`.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            parser.parse_u16()?,
            parser.parse_u16()?,
            Name::parse(parser, context)?,
        ))
    }

    /// Appends the wire-format record data to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.priority);
        target.append_u16(self.weight);
        target.append_u16(self.port);
        self.target.compose(target)
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}.",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================
