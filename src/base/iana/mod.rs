//! IANA definitions for the DNS wire format.
//!
//! This module contains wrapper types for the integer codes the DNS
//! assigns through IANA registries: record types, classes, opcodes,
//! response codes, and EDNS option codes. All of them are thin newtypes
//! over their raw integer with constants for the well-known values, so
//! unknown values survive a decode/encode round trip unchanged.

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod opt;
pub mod rcode;
pub mod rtype;

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::opt::OptionCode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;
