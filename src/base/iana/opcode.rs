//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query a message contains. It
    /// lives in bits 6 to 3 of the first flag octet of the message
    /// header. Multicast DNS only ever uses the standard query opcode.
    ///
    /// The values are defined in [RFC 1035] and the [IANA registry].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
    =>
    Opcode, u8;

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (1, obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4, [RFC 1996]).
    ///
    /// [RFC 1996]: https://tools.ietf.org/html/rfc1996
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5, [RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (UPDATE => 5, "UPDATE")
}
