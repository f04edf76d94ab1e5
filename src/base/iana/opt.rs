//! EDNS option codes.

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// EDNS option codes.
    ///
    /// The record data of an OPT record is a sequence of options, each
    /// identified by a 16 bit code from the [IANA registry]. The codec
    /// does not interpret option values; the constants merely give the
    /// well-known codes names.
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16;

    /// Long-lived queries ([RFC 8764]).
    ///
    /// [RFC 8764]: https://tools.ietf.org/html/rfc8764
    (LLQ => 1, "LLQ")

    /// Dynamic DNS update leases.
    (UL => 2, "UL")

    /// Name server identifier ([RFC 5001]).
    ///
    /// [RFC 5001]: https://tools.ietf.org/html/rfc5001
    (NSID => 3, "NSID")

    /// The EDNS0 owner option used by mDNS sleep proxies
    /// (draft-cheshire-edns0-owner-option).
    (OWNER => 4, "Owner")

    /// DNSSEC algorithm understood ([RFC 6975]).
    ///
    /// [RFC 6975]: https://tools.ietf.org/html/rfc6975
    (DAU => 5, "DAU")

    /// DS hash understood ([RFC 6975]).
    ///
    /// [RFC 6975]: https://tools.ietf.org/html/rfc6975
    (DHU => 6, "DHU")

    /// NSEC3 hash understood ([RFC 6975]).
    ///
    /// [RFC 6975]: https://tools.ietf.org/html/rfc6975
    (N3U => 7, "N3U")

    /// EDNS client subnet ([RFC 7871]).
    ///
    /// [RFC 7871]: https://tools.ietf.org/html/rfc7871
    (CLIENT_SUBNET => 8, "edns-client-subnet")

    /// EDNS cookie ([RFC 7873]).
    ///
    /// [RFC 7873]: https://tools.ietf.org/html/rfc7873
    (COOKIE => 10, "COOKIE")

    /// EDNS padding ([RFC 7830]).
    ///
    /// [RFC 7830]: https://tools.ietf.org/html/rfc7830
    (PADDING => 12, "Padding")
}

int_enum_wire_u16!(OptionCode);
