//! Whole DNS messages.
//!
//! The [`Message`] type represents one complete mDNS message: the
//! header plus the question, answer, and additional sections. (The name
//! server section exists in the header counts but is not used by
//! Multicast DNS; this codec never decodes or encodes entries for it.)
//!
//! Decoding drives the whole pipeline: it reads the header section,
//! then as many questions and records as the header declared, with one
//! [`NameContext`] shared across the entire message so that compression
//! pointers in any name – including names embedded in record data –
//! resolve against labels decoded anywhere earlier in the message.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::name::NameContext;
use super::question::Question;
use super::record::{Record, RecordHeader};
use super::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use crate::base::iana::Rtype;
use crate::rdata::RecordData;
use bytes::{Bytes, BytesMut};
use core::fmt;
use tracing::{debug, trace};

//------------ Message -------------------------------------------------------

/// A DNS message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    /// The first four octets of the message header.
    header: Header,

    /// The entries of the question section.
    questions: Vec<Question>,

    /// The entries of the answer section.
    answers: Vec<Record>,

    /// The entries of the additional section.
    additionals: Vec<Record>,
}

/// # Creation and Access
///
impl Message {
    /// Creates a new, empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the message header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the entries of the question section.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the entries of the answer section.
    #[must_use]
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the entries of the additional section.
    #[must_use]
    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }

    /// Appends a question to the question section.
    pub fn push_question(&mut self, question: Question) {
        self.questions.push(question)
    }

    /// Appends a record to the answer section.
    pub fn push_answer(&mut self, record: Record) {
        self.answers.push(record)
    }

    /// Appends a record to the additional section.
    pub fn push_additional(&mut self, record: Record) {
        self.additionals.push(record)
    }
}

/// # Parsing and Composing
///
impl Message {
    /// Decodes a message from an octets slice.
    ///
    /// The slice must hold exactly one message; trailing octets are not
    /// an error but are ignored.
    pub fn from_octets(octets: &[u8]) -> Result<Self, MessageError> {
        Self::parse(&mut Parser::from_ref(octets))
    }

    /// Takes a message from the beginning of `parser`.
    ///
    /// If the parser holds no octets at all, the clean
    /// [`MessageError::EndOfInput`] is returned so callers draining a
    /// buffer of several messages can tell exhaustion from corruption.
    /// Running out of input anywhere later means the message was cut
    /// short and is reported as [`MessageError::Truncated`].
    pub fn parse(parser: &mut Parser) -> Result<Self, MessageError> {
        if parser.remaining() == 0 {
            return Err(MessageError::EndOfInput);
        }

        let section = HeaderSection::parse(parser)?;
        let counts = section.counts();
        trace!(
            questions = counts.qdcount(),
            answers = counts.ancount(),
            additionals = counts.arcount(),
            "parsing message sections"
        );

        let mut context = NameContext::new();
        let mut res = Message::new();
        *res.header_mut() = *section.header();

        for _ in 0..counts.qdcount() {
            res.questions.push(Question::parse(parser, &mut context)?);
        }
        for _ in 0..counts.ancount() {
            res.answers.push(parse_record(parser, &mut context)?);
        }
        for _ in 0..counts.arcount() {
            res.additionals.push(parse_record(parser, &mut context)?);
        }

        Ok(res)
    }

    /// Appends the wire-format message to `target`.
    ///
    /// The section counts are derived from the sections themselves; the
    /// name server count is always zero. Domain names are written in
    /// full – the codec does not produce compression pointers.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let mut counts = HeaderCounts::new();
        counts.set_qdcount(section_count(self.questions.len())?);
        counts.set_ancount(section_count(self.answers.len())?);
        counts.set_arcount(section_count(self.additionals.len())?);
        HeaderSection::from_parts(self.header, counts).compose(target);

        for question in &self.questions {
            question.compose(target)?;
        }
        for record in &self.answers {
            record.compose(target)?;
        }
        for record in &self.additionals {
            record.compose(target)?;
        }
        Ok(())
    }

    /// Encodes the message into a freshly allocated buffer.
    ///
    /// The returned [`Bytes`] value holds the complete wire-format
    /// message, ready to be handed to a transport.
    pub fn to_bytes(&self) -> Result<Bytes, ComposeError> {
        let mut target = BytesMut::new();
        self.compose(&mut target)?;
        Ok(target.freeze())
    }
}

/// Parses one resource record, failing on unsupported record types.
fn parse_record(
    parser: &mut Parser,
    context: &mut NameContext,
) -> Result<Record, MessageError> {
    let header = RecordHeader::parse(parser, context)?;
    let rtype = header.rtype();
    let data = parser.parse_block(header.rdlen().into(), |parser| {
        RecordData::parse(rtype, parser, context)
    })?;
    match data {
        Some(data) => Ok(header.into_record(data)),
        None => {
            debug!(%rtype, "no decoder for record type");
            Err(MessageError::UnsupportedRtype(rtype))
        }
    }
}

/// Converts a section length into a header count.
fn section_count(len: usize) -> Result<u16, ComposeError> {
    u16::try_from(len).map_err(|_| ComposeError::LongData)
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; id {} qr {} opcode {} rcode {}",
            self.header.id(),
            self.header.qr(),
            self.header.opcode(),
            self.header.rcode()
        )?;
        for question in &self.questions {
            writeln!(f, ";{}", question)?;
        }
        for record in &self.answers {
            writeln!(f, "{}", record)?;
        }
        for record in &self.additionals {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

//------------ MessageError --------------------------------------------------

/// An error happened while decoding a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageError {
    /// No octets were available where a message was expected.
    ///
    /// This is the clean way for a drained input to end and distinct
    /// from all the failure cases below.
    EndOfInput,

    /// The input ended in the middle of the message.
    Truncated,

    /// The message was structurally malformed.
    Form(super::wire::FormError),

    /// The message contained a record of a type the codec cannot
    /// decode.
    UnsupportedRtype(Rtype),
}

//--- From

impl From<ParseError> for MessageError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ShortInput => MessageError::Truncated,
            ParseError::Form(err) => MessageError::Form(err),
        }
    }
}

//--- Display and Error

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MessageError::EndOfInput => f.write_str("end of input"),
            MessageError::Truncated => f.write_str("truncated message"),
            MessageError::Form(ref err) => err.fmt(f),
            MessageError::UnsupportedRtype(rtype) => {
                write!(f, "unsupported record type {}", rtype)
            }
        }
    }
}

impl std::error::Error for MessageError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::rdata::rfc1035::A;

    #[test]
    fn empty_input_is_clean_end() {
        assert_eq!(
            Message::from_octets(b""),
            Err(MessageError::EndOfInput)
        );
    }

    #[test]
    fn short_header_is_truncated() {
        assert_eq!(
            Message::from_octets(b"\x12\x34\x00"),
            Err(MessageError::Truncated)
        );
    }

    #[test]
    fn missing_declared_records_is_truncated() {
        // Header declaring one answer, then nothing.
        let wire = b"\x00\x00\x84\x00\x00\x00\x00\x01\x00\x00\x00\x00";
        assert_eq!(
            Message::from_octets(wire),
            Err(MessageError::Truncated)
        );
    }

    #[test]
    fn unsupported_record_type_aborts() {
        let mut wire = Vec::new();
        // Header with one answer.
        wire.append_slice(
            b"\x00\x00\x84\x00\x00\x00\x00\x01\x00\x00\x00\x00",
        );
        // A CNAME record.
        wire.append_slice(
            b"\x03foo\x00\x00\x05\x00\x01\x00\x00\x00\x78\x00\x05\x03bar\x00",
        );
        assert_eq!(
            Message::from_octets(&wire),
            Err(MessageError::UnsupportedRtype(Rtype::CNAME))
        );
    }

    #[test]
    fn roundtrip_via_bytes() {
        let mut message = Message::new();
        message.header_mut().set_qr(true);
        message.header_mut().set_aa(true);
        message.push_answer(Record::new(
            "host.local",
            Class::IN,
            120,
            A::new([192, 168, 0, 2].into()),
        ));

        let wire = message.to_bytes().unwrap();
        assert_eq!(Message::from_octets(&wire), Ok(message));
    }

    #[test]
    fn parse_reads_one_message_from_a_buffer() {
        let mut wire = Vec::new();
        let message = Message::new();
        message.compose(&mut wire).unwrap();
        let len = wire.len();
        message.compose(&mut wire).unwrap();

        let mut parser = Parser::from_ref(&wire);
        assert!(Message::parse(&mut parser).is_ok());
        assert_eq!(parser.pos(), len);
        assert!(Message::parse(&mut parser).is_ok());
        assert_eq!(
            Message::parse(&mut parser),
            Err(MessageError::EndOfInput)
        );
    }
}
