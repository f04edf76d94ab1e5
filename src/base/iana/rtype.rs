//! Resource record types.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type code describing what kind
    /// of data it holds. This type wraps that code. The constants cover
    /// the types a Multicast DNS responder is likely to run into – the
    /// codec only knows how to interpret the record data of a subset of
    /// them, but all of them can appear in questions and NSEC bitmaps.
    ///
    /// The values are defined in the [IANA registry]. See the listed
    /// RFCs for the individual types.
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address ([RFC 1035]).
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (A => 1, "A")

    /// An authoritative name server ([RFC 1035]). Unused in mDNS.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (NS => 2, "NS")

    /// The canonical name for an alias ([RFC 1035]).
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (CNAME => 5, "CNAME")

    /// The start of a zone of authority ([RFC 1035]). Unused in mDNS.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (SOA => 6, "SOA")

    /// A well known service description (obsolete, [RFC 1123]).
    ///
    /// [RFC 1123]: https://tools.ietf.org/html/rfc1123
    (WKS => 11, "WKS")

    /// A domain name pointer ([RFC 1035]).
    ///
    /// In DNS-SD, PTR records map a service type to the instances
    /// providing it.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (PTR => 12, "PTR")

    /// Host information ([RFC 1035]).
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (HINFO => 13, "HINFO")

    /// Mail exchange ([RFC 1035]).
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (MX => 15, "MX")

    /// Text strings ([RFC 1035]).
    ///
    /// DNS-SD gives TXT record data its own structure of key-value
    /// strings, described in [RFC 6763].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 6763]: https://tools.ietf.org/html/rfc6763
    (TXT => 16, "TXT")

    /// Responsible person ([RFC 1183]).
    ///
    /// [RFC 1183]: https://tools.ietf.org/html/rfc1183
    (RP => 17, "RP")

    /// AFS data base location ([RFC 1183]).
    ///
    /// [RFC 1183]: https://tools.ietf.org/html/rfc1183
    (AFSDB => 18, "AFSDB")

    /// X.25 PSDN address (obsolete, [RFC 1183]).
    ///
    /// [RFC 1183]: https://tools.ietf.org/html/rfc1183
    (X25 => 19, "X25")

    /// NSAP pointer ([RFC 1706]).
    ///
    /// [RFC 1706]: https://tools.ietf.org/html/rfc1706
    (NSAPPTR => 23, "NSAP-PTR")

    /// A security signature ([RFC 2535]).
    ///
    /// [RFC 2535]: https://tools.ietf.org/html/rfc2535
    (SIG => 24, "SIG")

    /// A security key ([RFC 2535]).
    ///
    /// [RFC 2535]: https://tools.ietf.org/html/rfc2535
    (KEY => 25, "KEY")

    /// An IPv6 host address ([RFC 3596]).
    ///
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    (AAAA => 28, "AAAA")

    /// The next domain (obsoleted by NSEC, [RFC 2535]).
    ///
    /// [RFC 2535]: https://tools.ietf.org/html/rfc2535
    (NXT => 30, "NXT")

    /// Nimrod locator (obsolete draft).
    (NIMLOC => 32, "NIMLOC")

    /// Server selection ([RFC 2782]).
    ///
    /// SRV records carry the host and port a service instance listens
    /// on and are the backbone of DNS-SD service resolution.
    ///
    /// [RFC 2782]: https://tools.ietf.org/html/rfc2782
    (SRV => 33, "SRV")

    /// Naming authority pointer ([RFC 3403]).
    ///
    /// [RFC 3403]: https://tools.ietf.org/html/rfc3403
    (NAPTR => 35, "NAPTR")

    /// Key exchanger ([RFC 2230]).
    ///
    /// [RFC 2230]: https://tools.ietf.org/html/rfc2230
    (KX => 36, "KX")

    /// A certificate ([RFC 4398]).
    ///
    /// [RFC 4398]: https://tools.ietf.org/html/rfc4398
    (CERT => 37, "CERT")

    /// EDNS pseudo record type ([RFC 6891]).
    ///
    /// [RFC 6891]: https://tools.ietf.org/html/rfc6891
    (OPT => 41, "OPT")

    /// Delegation signer ([RFC 4034]).
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    (DS => 43, "DS")

    /// SSH key fingerprint ([RFC 4255]).
    ///
    /// [RFC 4255]: https://tools.ietf.org/html/rfc4255
    (SSHFP => 44, "SSHFP")

    /// IPsec key ([RFC 4025]).
    ///
    /// [RFC 4025]: https://tools.ietf.org/html/rfc4025
    (IPSECKEY => 45, "IPSECKEY")

    /// A DNSSEC signature ([RFC 4034]).
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    (RRSIG => 46, "RRSIG")

    /// Authenticated denial of existence ([RFC 4034]).
    ///
    /// mDNS responders use NSEC records to assert which record types
    /// exist for a name ([RFC 6762], section 6.1).
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    (NSEC => 47, "NSEC")

    /// A DNSSEC key ([RFC 4034]).
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    (DNSKEY => 48, "DNSKEY")

    /// Hashed denial of existence ([RFC 5155]).
    ///
    /// [RFC 5155]: https://tools.ietf.org/html/rfc5155
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters ([RFC 5155]).
    ///
    /// [RFC 5155]: https://tools.ietf.org/html/rfc5155
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA certificate association ([RFC 6698]).
    ///
    /// [RFC 6698]: https://tools.ietf.org/html/rfc6698
    (TLSA => 52, "TLSA")

    /// Transaction key ([RFC 2930]).
    ///
    /// [RFC 2930]: https://tools.ietf.org/html/rfc2930
    (TKEY => 249, "TKEY")

    /// Transaction signature ([RFC 2845]).
    ///
    /// [RFC 2845]: https://tools.ietf.org/html/rfc2845
    (TSIG => 250, "TSIG")

    /// Incremental zone transfer ([RFC 1995]). Unused in mDNS.
    ///
    /// [RFC 1995]: https://tools.ietf.org/html/rfc1995
    (IXFR => 251, "IXFR")

    /// Zone transfer ([RFC 1035]). Unused in mDNS.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (AXFR => 252, "AXFR")

    /// A request for all records the server has available ([RFC 1035]).
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (ANY => 255, "ANY")
}

int_enum_wire_u16!(Rtype);

//============ Testing =======================================================
