//! A wire-format codec for Multicast DNS and DNS-SD messages.
//!
//! This crate converts between the bytes of mDNS messages as they
//! appear on the network and a structured message model, following the
//! framing rules of [RFC 1035], [RFC 6762], and [RFC 6763]. It is a
//! pure codec: sending and receiving the datagrams is the job of
//! whatever transport sits on top.
//!
//! The centerpiece is the decoder's handling of *name compression*.
//! DNS messages avoid repeating domain name suffixes by replacing them
//! with two-octet pointers back into earlier parts of the same message.
//! While decoding one message, the codec records every label it has
//! seen together with its byte offset and resolves pointer chains –
//! including pointers reached through other pointers, and pointers into
//! names embedded in record data – against that table. Malformed input
//! is answered with typed errors rather than panics: illegal length
//! octets, pointers that do not point strictly backwards, and messages
//! that end before all declared entries were read.
//!
//! # Example
//!
//! ```
//! use mdns_wire::base::iana::{Class, Rtype};
//! use mdns_wire::base::message::Message;
//! use mdns_wire::base::question::Question;
//!
//! let mut query = Message::new();
//! query.push_question(Question::new_in("_airplay._tcp.local", Rtype::PTR));
//! let wire = query.to_bytes().unwrap();
//!
//! let parsed = Message::from_octets(&wire).unwrap();
//! assert_eq!(parsed.questions().len(), 1);
//! assert_eq!(parsed.questions()[0].qclass(), Class::IN);
//! ```
//!
//! # Modules
//!
//! * [base] contains the message model and the parsing and composing
//!   machinery, and
//! * [rdata] contains the record data types the codec understands:
//!   A, AAAA, SRV, PTR, TXT, NSEC, and OPT.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6762]: https://tools.ietf.org/html/rfc6762
//! [RFC 6763]: https://tools.ietf.org/html/rfc6763

pub mod base;
pub mod rdata;
