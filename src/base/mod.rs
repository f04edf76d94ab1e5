//! Basics.
//!
//! This module provides the types for working with mDNS message data:
//! taking apart wire-format messages and assembling new ones. The types
//! for DNS data often come with support types, so they are arranged in
//! submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the IANA-assigned integer codes of the wire format,
//! * [message] for whole messages,
//! * [name] for domain names and name compression,
//! * [question] for the entries of the question section,
//! * [record] for resource records,
//! * [wire] for the low-level parsing and composing machinery.

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
