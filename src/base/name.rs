//! Domain names and name compression.
//!
//! Domain names travel in DNS messages as a sequence of labels, each
//! prefixed by its length, closed off by a zero length label. To keep
//! messages small, a label sequence may end in a *compression pointer*
//! instead: two octets whose top two bits are set and whose remaining
//! fourteen bits give the offset of an earlier label sequence in the
//! same message that provides the rest of the name.
//!
//! The [`Name`] type represents a name in its familiar dotted form.
//! Decoding runs against a [`NameContext`] which records every label
//! seen while decoding one message together with its absolute offset,
//! so pointers anywhere in the message – including inside record data –
//! can be resolved against labels decoded anywhere earlier.

use super::wire::{ComposeError, OctetsBuilder, ParseError, Parser};
use core::fmt;
use core::str;

/// The upper bound on compression pointer indirections within one name.
///
/// Recorded pointers always point strictly backwards, so resolution
/// terminates; the bound is a second guard against pathological chains.
const MAX_COMPRESS_HOPS: usize = 16;

//------------ Name ----------------------------------------------------------

/// A domain name in dotted representation.
///
/// The name does not carry a trailing dot: the root name is the empty
/// string. No structural limits are enforced on construction; a label
/// longer than 63 octets or a name longer than 255 octets in wire
/// format is reported when the name is composed.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Name(String);

/// # Creation and Conversion
///
impl Name {
    /// Creates the root name.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a name from a sequence of decoded labels.
    fn from_labels(labels: Vec<String>) -> Self {
        Name(labels.join("."))
    }

    /// Returns the dotted representation of the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root name has no labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let root = self.0.is_empty();
        self.0.split('.').filter(move |_| !root)
    }

    /// Returns the length of the name in wire format.
    ///
    /// This is one octet per label for the length prefix plus the label
    /// contents plus the terminating zero octet.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.labels().map(|label| label.len() + 1).sum::<usize>() + 1
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Takes a name from the beginning of `parser`.
    ///
    /// Every label read is recorded in `context` at its absolute offset.
    /// A compression pointer ends the label sequence and is resolved
    /// against the labels recorded earlier; its target must lie strictly
    /// before the pointer itself. A length octet with only one of its
    /// top two bits set fits neither a literal label nor a pointer and
    /// is rejected.
    pub fn parse(
        parser: &mut Parser,
        context: &mut NameContext,
    ) -> Result<Self, ParseError> {
        let mut labels = Vec::new();
        loop {
            let offset = parser.pos();
            let len = parser.parse_u8()?;
            if len == 0 {
                context.push(LabelRecord::Terminal { offset });
                break;
            }
            match len & 0xC0 {
                0xC0 => {
                    let low = parser.parse_u8()?;
                    let target =
                        (usize::from(len & 0x3F) << 8) | usize::from(low);
                    if target >= offset {
                        return Err(ParseError::form_error(
                            "forward compression pointer",
                        ));
                    }
                    context.push(LabelRecord::Pointer { offset, target });
                    context.expand_from(target, &mut labels, 0)?;
                    break;
                }
                0x00 => {
                    let octets = parser.parse_octets(len as usize)?;
                    let content = str::from_utf8(octets)
                        .map_err(|_| {
                            ParseError::form_error("invalid UTF-8 in label")
                        })?
                        .to_owned();
                    context.push(LabelRecord::Literal {
                        offset,
                        content: content.clone(),
                    });
                    labels.push(content);
                }
                _ => {
                    return Err(ParseError::form_error(
                        "illegal label length octet",
                    ))
                }
            }
        }
        Ok(Name::from_labels(labels))
    }

    /// Appends the wire-format name to `target`.
    ///
    /// The name is always written in full; no compression pointers are
    /// produced.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if self.wire_len() > 255 {
            return Err(ComposeError::LongName);
        }
        for label in self.labels() {
            if label.is_empty() {
                return Err(ComposeError::EmptyLabel);
            }
            if label.len() > 63 {
                return Err(ComposeError::LongLabel);
            }
            target.append_u8(label.len() as u8);
            target.append_slice(label.as_bytes());
        }
        target.append_u8(0);
        Ok(())
    }
}

//--- From

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name(name.into())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name)
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

//------------ LabelRecord ---------------------------------------------------

/// A single label as seen at a specific place in a message.
///
/// Label records accumulate in a [`NameContext`] in the order they are
/// read, which is ascending offset order.
#[derive(Clone, Debug)]
enum LabelRecord {
    /// A literal label with its text.
    Literal { offset: usize, content: String },

    /// A compression pointer to an earlier offset.
    Pointer { offset: usize, target: usize },

    /// The zero length label ending a sequence.
    Terminal { offset: usize },
}

impl LabelRecord {
    /// Returns the absolute offset of the label within the message.
    fn offset(&self) -> usize {
        match *self {
            LabelRecord::Literal { offset, .. } => offset,
            LabelRecord::Pointer { offset, .. } => offset,
            LabelRecord::Terminal { offset } => offset,
        }
    }
}

//------------ NameContext ---------------------------------------------------

/// The label bookkeeping for decoding one message.
///
/// A context lives exactly as long as one message decode. Every name
/// parsed from the message records its labels here, and compression
/// pointers are resolved by looking the target offset up among the
/// recorded labels.
#[derive(Clone, Debug, Default)]
pub struct NameContext {
    records: Vec<LabelRecord>,
}

impl NameContext {
    /// Creates a new, empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a label.
    fn push(&mut self, record: LabelRecord) {
        self.records.push(record)
    }

    /// Resolves the label sequence starting at `target`.
    ///
    /// Scans for the first recorded label at or after the target offset
    /// and follows the chain from there: literals are appended to
    /// `labels`, a pointer continues resolution at its own target, and
    /// a terminal label ends the chain.
    fn expand_from(
        &self,
        target: usize,
        labels: &mut Vec<String>,
        hops: usize,
    ) -> Result<(), ParseError> {
        if hops >= MAX_COMPRESS_HOPS {
            return Err(ParseError::form_error(
                "too many compression pointer hops",
            ));
        }
        let start = self
            .records
            .iter()
            .position(|record| record.offset() >= target)
            .ok_or_else(|| {
                ParseError::form_error("compression pointer into unparsed data")
            })?;
        for record in &self.records[start..] {
            match *record {
                LabelRecord::Literal { ref content, .. } => {
                    labels.push(content.clone())
                }
                LabelRecord::Pointer { target, .. } => {
                    return self.expand_from(target, labels, hops + 1)
                }
                LabelRecord::Terminal { .. } => break,
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn parse_one(wire: &[u8]) -> Result<Name, ParseError> {
        let mut parser = Parser::from_ref(wire);
        Name::parse(&mut parser, &mut NameContext::new())
    }

    #[test]
    fn compose_simple() {
        let mut wire = Vec::new();
        Name::from("foo.local").compose(&mut wire).unwrap();
        assert_eq!(wire, b"\x03foo\x05local\x00");
    }

    #[test]
    fn compose_root() {
        let mut wire = Vec::new();
        Name::root().compose(&mut wire).unwrap();
        assert_eq!(wire, b"\x00");
    }

    #[test]
    fn compose_rejects_long_label() {
        let long = "x".repeat(64);
        let mut wire = Vec::new();
        assert_eq!(
            Name::from(format!("{}.local", long)).compose(&mut wire),
            Err(ComposeError::LongLabel)
        );
    }

    #[test]
    fn compose_rejects_empty_label() {
        let mut wire = Vec::new();
        assert_eq!(
            Name::from("foo..local").compose(&mut wire),
            Err(ComposeError::EmptyLabel)
        );
    }

    #[test]
    fn compose_rejects_long_name() {
        let name = vec!["x".repeat(63); 5].join(".");
        let mut wire = Vec::new();
        assert_eq!(
            Name::from(name).compose(&mut wire),
            Err(ComposeError::LongName)
        );
    }

    #[test]
    fn parse_literal_labels() {
        assert_eq!(
            parse_one(b"\x03foo\x05local\x00").unwrap(),
            Name::from("foo.local")
        );
        assert_eq!(parse_one(b"\x00").unwrap(), Name::root());
    }

    #[test]
    fn roundtrip() {
        for name in ["host.local", "_airplay._tcp.local", ""] {
            let mut wire = Vec::new();
            Name::from(name).compose(&mut wire).unwrap();
            assert_eq!(parse_one(&wire).unwrap(), Name::from(name));
        }
    }

    #[test]
    fn parse_compressed() {
        // Two names back to back: "foo.local" spelled out, then
        // "bar" plus a pointer to offset 0.
        let wire = b"\x03foo\x05local\x00\x03bar\xc0\x00";
        let mut parser = Parser::from_ref(wire);
        let mut context = NameContext::new();
        assert_eq!(
            Name::parse(&mut parser, &mut context).unwrap(),
            Name::from("foo.local")
        );
        assert_eq!(
            Name::parse(&mut parser, &mut context).unwrap(),
            Name::from("bar.foo.local")
        );
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_nested_pointers() {
        // A third name pointing at the second, which itself ends in a
        // pointer to the first.
        let wire = b"\x03foo\x05local\x00\x03bar\xc0\x00\xc0\x0b";
        let mut parser = Parser::from_ref(wire);
        let mut context = NameContext::new();
        Name::parse(&mut parser, &mut context).unwrap();
        Name::parse(&mut parser, &mut context).unwrap();
        assert_eq!(
            Name::parse(&mut parser, &mut context).unwrap(),
            Name::from("bar.foo.local")
        );
    }

    #[test]
    fn pointer_between_label_starts() {
        let wire = b"\x03foo\x00\xc0\x02";
        let mut parser = Parser::from_ref(wire);
        let mut context = NameContext::new();
        Name::parse(&mut parser, &mut context).unwrap();
        // Offset 2 is inside the first label; resolution starts at the
        // first label recorded at or after it, which is the terminal
        // label, yielding the root name.
        assert_eq!(
            Name::parse(&mut parser, &mut context).unwrap(),
            Name::root()
        );
    }

    #[test]
    fn pointer_into_unrecorded_data() {
        let wire = b"\x00\x00\xc0\x01";
        let mut parser = Parser::from_ref(wire);
        parser.seek(2).unwrap();
        assert_eq!(
            Name::parse(&mut parser, &mut NameContext::new()),
            Err(ParseError::form_error(
                "compression pointer into unparsed data"
            ))
        );
    }

    #[rstest]
    #[case(0x41)]
    #[case(0x81)]
    fn parse_rejects_illegal_length_octet(#[case] len: u8) {
        let wire = [len, b'a', 0x00];
        assert_eq!(
            parse_one(&wire),
            Err(ParseError::form_error("illegal label length octet"))
        );
    }

    #[test]
    fn parse_rejects_forward_pointer() {
        assert_eq!(
            parse_one(b"\xc0\x05"),
            Err(ParseError::form_error("forward compression pointer"))
        );
    }

    #[test]
    fn parse_rejects_invalid_utf8() {
        assert_eq!(
            parse_one(b"\x02\xff\xfe\x00"),
            Err(ParseError::form_error("invalid UTF-8 in label"))
        );
    }

    #[test]
    fn parse_rejects_truncated_label() {
        assert_eq!(parse_one(b"\x05foo"), Err(ParseError::ShortInput));
    }
}
