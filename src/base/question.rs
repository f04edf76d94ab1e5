//! A single question in a DNS message.
//!
//! In DNS, a question describes what is requested in a query: a domain
//! name, a record type, and a class. Multicast DNS additionally carves
//! the top bit out of the class field: a querier sets it to ask for a
//! unicast response instead of a multicast one ([RFC 6762], section
//! 5.4), leaving 15 bits for the class itself.
//!
//! [RFC 6762]: https://tools.ietf.org/html/rfc6762

use super::iana::{Class, Rtype};
use super::name::{Name, NameContext};
use super::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;

/// The mask of the unicast-response bit in the question's class field.
const UNICAST_RESPONSE_MASK: u16 = 0x8000;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,

    /// Whether a unicast response is requested.
    unicast_response: bool,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three components.
    ///
    /// The unicast-response bit starts out unset.
    pub fn new(qname: impl Into<Name>, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
            unicast_response: false,
        }
    }

    /// Creates a new question from a name and record type, assuming
    /// class IN.
    pub fn new_in(qname: impl Into<Name>, qtype: Rtype) -> Self {
        Question::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    #[must_use]
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name of the question.
    #[must_use]
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    #[must_use]
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    #[must_use]
    pub fn qclass(&self) -> Class {
        self.qclass
    }

    /// Returns whether the question asks for a unicast response.
    #[must_use]
    pub fn unicast_response(&self) -> bool {
        self.unicast_response
    }

    /// Sets whether the question asks for a unicast response.
    pub fn set_unicast_response(&mut self, set: bool) {
        self.unicast_response = set
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Takes a question from the beginning of `parser`.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        let qname = Name::parse(parser, context)?;
        let qtype = Rtype::parse(parser)?;
        let class = parser.parse_u16()?;
        Ok(Question {
            qname,
            qtype,
            qclass: Class::from_int(class & !UNICAST_RESPONSE_MASK),
            unicast_response: class & UNICAST_RESPONSE_MASK != 0,
        })
    }

    /// Appends the wire-format question to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.qname.compose(target)?;
        self.qtype.compose(target);
        let mut class = self.qclass.to_int() & !UNICAST_RESPONSE_MASK;
        if self.unicast_response {
            class |= UNICAST_RESPONSE_MASK;
        }
        target.append_u16(class);
        Ok(())
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose_parse_roundtrip() {
        let mut question = Question::new_in("_airplay._tcp.local", Rtype::PTR);
        question.set_unicast_response(true);

        let mut wire = Vec::new();
        question.compose(&mut wire).unwrap();
        assert_eq!(
            wire,
            b"\x08_airplay\x04_tcp\x05local\x00\x00\x0c\x80\x01"
        );

        let mut parser = Parser::from_ref(&wire);
        let parsed =
            Question::parse(&mut parser, &mut NameContext::new()).unwrap();
        assert_eq!(parsed, question);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn unicast_bit_is_carved_out_of_class() {
        let wire = b"\x04host\x05local\x00\x00\x01\x80\x01";
        let mut parser = Parser::from_ref(wire);
        let question =
            Question::parse(&mut parser, &mut NameContext::new()).unwrap();
        assert_eq!(question.qclass(), Class::IN);
        assert!(question.unicast_response());

        let wire = b"\x04host\x05local\x00\x00\x01\x00\x01";
        let mut parser = Parser::from_ref(wire);
        let question =
            Question::parse(&mut parser, &mut NameContext::new()).unwrap();
        assert_eq!(question.qclass(), Class::IN);
        assert!(!question.unicast_response());
    }

    #[test]
    fn random_roundtrip() {
        for _ in 0..1000 {
            let mut question = Question::new(
                random_name(),
                Rtype::from_int(rand::random()),
                Class::from_int(rand::random::<u16>() & 0x7FFF),
            );
            question.set_unicast_response(rand::random());

            let mut wire = Vec::new();
            question.compose(&mut wire).unwrap();
            let mut parser = Parser::from_ref(&wire);
            let parsed =
                Question::parse(&mut parser, &mut NameContext::new()).unwrap();
            assert_eq!(parsed, question);
        }
    }

    /// Builds a random name of valid label lengths up to 255 octets.
    fn random_name() -> Name {
        const LETTERS: &[u8] =
            b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut labels = Vec::new();
        let mut wire_len = 1;
        while wire_len < 192 {
            let label_len = rand::random::<usize>() % 63 + 1;
            let label: String = (0..label_len)
                .map(|_| {
                    LETTERS[rand::random::<usize>() % LETTERS.len()] as char
                })
                .collect();
            wire_len += label.len() + 1;
            labels.push(label);
        }
        Name::from(labels.join("."))
    }
}
