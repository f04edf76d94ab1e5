//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a message states whether a query was
    /// processed successfully and, if not, roughly what went wrong. It
    /// occupies the low four bits of the second flag octet of the
    /// header. Multicast DNS responders must not send error responses,
    /// so on that protocol the value is effectively always zero.
    ///
    /// The values are defined in [RFC 1035] and extended by [RFC 2136].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    =>
    Rcode, u8;

    /// No error condition (0).
    (NOERROR => 0, "NOERROR")

    /// The server was unable to interpret the query (1).
    (FORMERR => 1, "FORMERR")

    /// A problem with the server kept it from processing the query (2).
    (SERVFAIL => 2, "SERVFAIL")

    /// The queried domain name does not exist (3).
    (NXDOMAIN => 3, "NXDOMAIN")

    /// The server does not support the requested kind of query (4).
    (NOTIMP => 4, "NOTIMP")

    /// The server refused to process the query (5).
    (REFUSED => 5, "REFUSED")

    /// A name exists that should not ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (YXDOMAIN => 6, "YXDOMAIN")

    /// An RRset exists that should not ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (YXRRSET => 7, "YXRRSET")

    /// An RRset that should exist does not ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (NXRRSET => 8, "NXRRSET")

    /// The server is not authoritative for the zone ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (NOTAUTH => 9, "NOTAUTH")

    /// A name is not within the zone named in the query ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (NOTZONE => 10, "NOTZONE")
}
