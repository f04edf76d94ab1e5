//! Decoding a captured-style mDNS response.
//!
//! The packet below is assembled by hand the way an mDNS responder
//! would emit it, with name compression used aggressively: owner names,
//! RDATA-embedded names, and pointer chains through other pointers all
//! reference labels defined earlier in the message. Decoding it
//! exercises the message-wide label context end to end.

use mdns_wire::base::iana::{Class, OptionCode, Rtype};
use mdns_wire::base::message::{Message, MessageError};
use mdns_wire::base::name::Name;
use mdns_wire::base::question::Question;
use mdns_wire::base::record::Record;
use mdns_wire::rdata::{Aaaa, Nsec, Opt, Ptr, RecordData, Srv, Txt, A};

/// An mDNS response announcing an AirTunes-style service.
///
/// Offsets of the compression targets:
///   12  "turntable.local" (the A record's owner)
///   22  "local"
///   43  "_raop._tcp.local" (the SRV record's owner)
fn captured_response() -> Vec<u8> {
    let mut wire = Vec::new();
    // Header: response + authoritative, 3 answers, 2 additionals.
    wire.extend_from_slice(&[
        0x00, 0x00, 0x84, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        0x02,
    ]);
    // Answer 1: "turntable.local" A 10.0.1.2, cache-flush, TTL 120.
    wire.extend_from_slice(b"\x09turntable\x05local\x00");
    wire.extend_from_slice(&[
        0x00, 0x01, 0x80, 0x01, 0x00, 0x00, 0x00, 0x78, 0x00, 0x04, 0x0a,
        0x00, 0x01, 0x02,
    ]);
    // Answer 2: "_raop._tcp.local" SRV 0 0 5000 turntable.local. The
    // owner ends in a pointer to "local" at offset 22; the target is a
    // pointer to the A record's owner at offset 12, sitting six octets
    // into the RDATA.
    wire.extend_from_slice(b"\x05_raop\x04_tcp\xc0\x16");
    wire.extend_from_slice(&[
        0x00, 0x21, 0x80, 0x01, 0x00, 0x00, 0x00, 0x78, 0x00, 0x08, 0x00,
        0x00, 0x00, 0x00, 0x13, 0x88, 0xc0, 0x0c,
    ]);
    // Answer 3: "_services._dns-sd._udp.local" PTR _raop._tcp.local.
    // The RDATA is nothing but a pointer to the SRV owner at offset 43,
    // which itself ends in another pointer.
    wire.extend_from_slice(b"\x09_services\x07_dns-sd\x04_udp\xc0\x16");
    wire.extend_from_slice(&[
        0x00, 0x0c, 0x00, 0x01, 0x00, 0x00, 0x1c, 0x20, 0x00, 0x02, 0xc0,
        0x2b,
    ]);
    // Additional 1: NSEC for "turntable.local" declaring A and SRV.
    wire.extend_from_slice(&[
        0xc0, 0x0c, 0x00, 0x2f, 0x80, 0x01, 0x00, 0x00, 0x00, 0x78, 0x00,
        0x09, 0xc0, 0x0c, 0x00, 0x05, 0x40, 0x00, 0x00, 0x00, 0x40,
    ]);
    // Additional 2: OPT with a single owner option (code 4).
    wire.extend_from_slice(&[
        0x00, 0x00, 0x29, 0x80, 0x01, 0x00, 0x00, 0x11, 0x94, 0x00, 0x12,
        0x00, 0x04, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x70, 0x31, 0xfe, 0xb7, 0x00, 0x00,
    ]);
    wire
}

#[test]
fn decodes_captured_response() {
    let message = Message::from_octets(&captured_response()).unwrap();

    assert!(message.header().qr());
    assert!(message.header().aa());
    assert_eq!(message.questions().len(), 0);
    assert_eq!(message.answers().len(), 3);
    assert_eq!(message.additionals().len(), 2);

    let a = &message.answers()[0];
    assert_eq!(a.owner(), &Name::from("turntable.local"));
    assert_eq!(a.class(), Class::IN);
    assert!(a.cache_flush());
    assert_eq!(a.ttl(), 120);
    match a.data() {
        RecordData::A(data) => {
            assert_eq!(data.addr(), "10.0.1.2".parse::<std::net::Ipv4Addr>().unwrap())
        }
        other => panic!("expected A record data, got {:?}", other),
    }

    let srv = &message.answers()[1];
    assert_eq!(srv.owner(), &Name::from("_raop._tcp.local"));
    match srv.data() {
        RecordData::Srv(data) => {
            assert_eq!(data.priority(), 0);
            assert_eq!(data.weight(), 0);
            assert_eq!(data.port(), 5000);
            // Resolved through the pointer to the A record's owner.
            assert_eq!(data.target(), &Name::from("turntable.local"));
        }
        other => panic!("expected SRV record data, got {:?}", other),
    }

    let ptr = &message.answers()[2];
    assert_eq!(
        ptr.owner(),
        &Name::from("_services._dns-sd._udp.local")
    );
    assert!(!ptr.cache_flush());
    assert_eq!(ptr.ttl(), 7200);
    match ptr.data() {
        RecordData::Ptr(data) => {
            // Resolved through a pointer chain: RDATA pointer to the
            // SRV owner, whose labels end in a pointer to "local".
            assert_eq!(data.ptrdname(), &Name::from("_raop._tcp.local"));
        }
        other => panic!("expected PTR record data, got {:?}", other),
    }

    let nsec = &message.additionals()[0];
    assert_eq!(nsec.owner(), &Name::from("turntable.local"));
    match nsec.data() {
        RecordData::Nsec(data) => {
            assert_eq!(data.next_name(), &Name::from("turntable.local"));
            assert_eq!(data.types(), [Rtype::A, Rtype::SRV]);
        }
        other => panic!("expected NSEC record data, got {:?}", other),
    }

    let opt = &message.additionals()[1];
    assert_eq!(opt.owner(), &Name::root());
    assert_eq!(opt.ttl(), 4500);
    match opt.data() {
        RecordData::Opt(data) => {
            assert_eq!(data.len(), 1);
            assert_eq!(
                data.get(OptionCode::OWNER),
                Some(
                    [
                        0x00u8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                        0x70, 0x31, 0xfe, 0xb7, 0x00, 0x00
                    ]
                    .as_slice()
                )
            );
        }
        other => panic!("expected OPT record data, got {:?}", other),
    }
}

#[test]
fn reencode_is_idempotent() {
    let wire = captured_response();
    let first = Message::from_octets(&wire).unwrap();

    // Encoding never compresses, so the bytes grow...
    let reencoded = first.to_bytes().unwrap();
    assert!(reencoded.len() > wire.len());

    // ...but the decoded value stays the same.
    let second = Message::from_octets(&reencoded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_record_type_roundtrips_through_a_message() {
    let mut message = Message::new();
    message.header_mut().set_qr(true);
    message.header_mut().set_aa(true);
    message.push_question(Question::new_in("_raop._tcp.local", Rtype::ANY));

    let mut a = Record::new(
        "turntable.local",
        Class::IN,
        120,
        A::new([10, 0, 1, 2].into()),
    );
    a.set_cache_flush(true);
    message.push_answer(a);
    message.push_answer(Record::new(
        "turntable.local",
        Class::IN,
        120,
        Aaaa::new("fe80::aa:1".parse().unwrap()),
    ));
    message.push_answer(Record::new(
        "_raop._tcp.local",
        Class::IN,
        120,
        Srv::new(0, 0, 5000, "turntable.local"),
    ));
    message.push_answer(Record::new(
        "_raop._tcp.local",
        Class::IN,
        7200,
        Ptr::new("player@turntable._raop._tcp.local"),
    ));
    message.push_answer(Record::new(
        "player@turntable._raop._tcp.local",
        Class::IN,
        7200,
        ["txtvers=1", "am=Turntable"].into_iter().collect::<Txt>(),
    ));
    message.push_additional(Record::new(
        "turntable.local",
        Class::IN,
        120,
        Nsec::new("turntable.local", vec![Rtype::A, Rtype::AAAA]),
    ));
    let mut opt = Opt::new();
    opt.insert(OptionCode::OWNER, vec![0u8; 8]);
    message.push_additional(Record::new("", Class::IN, 4500, opt));

    let wire = message.to_bytes().unwrap();
    assert_eq!(Message::from_octets(&wire).unwrap(), message);
}

#[test]
fn truncating_the_packet_fails_cleanly() {
    let wire = captured_response();
    for len in 1..wire.len() {
        match Message::from_octets(&wire[..len]) {
            Ok(_) => panic!("truncated packet decoded at length {}", len),
            Err(
                MessageError::Truncated
                | MessageError::Form(_)
                | MessageError::UnsupportedRtype(_),
            ) => {}
            Err(err) => {
                panic!("unexpected error at length {}: {}", len, err)
            }
        }
    }
}
