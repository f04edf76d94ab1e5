//! DNS class values.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS class values.
    ///
    /// Classes partition the DNS name space into parallel trees. Only
    /// the IN class has ever seen real use, and it is the only class
    /// used by Multicast DNS. On the wire the class shares its 16 bit
    /// field with an mDNS flag bit – the unicast-response bit in
    /// questions and the cache-flush bit in resource records – so only
    /// the low 15 bits carry the class value here.
    ///
    /// See [RFC 1035] and [RFC 6762], section 18.12 and 18.13.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    =>
    Class, u16;

    /// The Internet class (IN).
    (IN => 1, "IN")

    /// The CSNET class (obsolete).
    (CS => 2, "CS")

    /// The Chaos class (CH).
    (CH => 3, "CH")

    /// The Hesiod class (HS).
    (HS => 4, "HS")

    /// Query class None ([RFC 2136]).
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (NONE => 0xFE, "NONE")

    /// Query class Any (*).
    (ANY => 0xFF, "ANY")
}
