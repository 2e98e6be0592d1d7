use num_traits::FromPrimitive;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Resource Record Type, for example, A, CNAME or RRSIG.
///
/// See <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
///
// When adding a record data struct, a matching variant must be added to
// `Resource` in resource/mod.rs.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, FromPrimitive, PartialEq, Eq, Hash,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
#[repr(u16)]
pub enum Type {
    /// IPv4 Address.
    A = 1,

    /// Authoritative name server.
    NS = 2,

    MD = 3, // Obsolete, use MX
    MF = 4, // Obsolete, use MX

    /// Canonical name for an alias.
    CNAME = 5,

    /// Start of a zone of authority.
    SOA = 6,

    MB = 7,
    MG = 8,
    MR = 9,
    NULL = 10,
    WKS = 11,

    /// Domain name pointer.
    PTR = 12,

    /// Host information.
    HINFO = 13,
    MINFO = 14,

    /// Mail exchange.
    MX = 15,

    /// Text strings.
    TXT = 16,

    RP = 17,
    AFSDB = 18,
    X25 = 19,
    ISDN = 20,
    RT = 21,
    NSAP = 22,

    #[strum(serialize = "NSAP-PTR")]
    NSAP_PTR = 23,

    SIG = 24,
    KEY = 25,
    PX = 26,
    GPOS = 27,

    /// IPv6 Address. See [rfc3596].
    ///
    /// [rfc3596]: https://datatracker.ietf.org/doc/html/rfc3596
    AAAA = 28,

    LOC = 29,
    NXT = 30,
    EID = 31,
    NIMLOC = 32,

    /// Server Selection. See [rfc2782].
    ///
    /// [rfc2782]: https://datatracker.ietf.org/doc/html/rfc2782
    SRV = 33,

    ATMA = 34,
    NAPTR = 35,
    KX = 36,
    CERT = 37,
    A6 = 38,
    DNAME = 39,
    SINK = 40,

    /// EDNS(0) Opt type. See [rfc6891].
    ///
    /// [rfc6891]: https://datatracker.ietf.org/doc/html/rfc6891
    OPT = 41,

    APL = 42,

    /// Delegation Signer. See [rfc4034].
    ///
    /// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034
    DS = 43,

    SSHFP = 44,
    IPSECKEY = 45,

    /// Resource Record Signature. See [rfc4034].
    ///
    /// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034
    RRSIG = 46,

    NSEC = 47,

    /// DNS Public Key. See [rfc4034].
    ///
    /// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034
    DNSKEY = 48,

    DHCID = 49,
    NSEC3 = 50,
    NSEC3PARAM = 51,
    TLSA = 52,
    SMIMEA = 53,
    HIP = 55,
    NINFO = 56,
    RKEY = 57,
    TALINK = 58,
    CDS = 59,
    CDNSKEY = 60,
    OPENPGPKEY = 61,
    CSYNC = 62,
    ZONEMD = 63,
    SVCB = 64,
    HTTPS = 65,
    SPF = 99,
    UINFO = 100,
    UID = 101,
    GID = 102,
    UNSPEC = 103,
    NID = 104,
    L32 = 105,
    L64 = 106,
    LP = 107,
    EUI48 = 108,
    EUI64 = 109,

    /// Transaction Key. See [rfc2930].
    ///
    /// [rfc2930]: https://datatracker.ietf.org/doc/html/rfc2930
    TKEY = 249,

    /// Transaction Signature. See [rfc8945].
    ///
    /// [rfc8945]: https://datatracker.ietf.org/doc/html/rfc8945
    TSIG = 250,

    IXFR = 251,
    AXFR = 252,
    MAILB = 253,
    MAILA = 254,

    /// Any record type.
    /// Only valid as a Question Type.
    ANY = 255,

    URI = 256,
    CAA = 257,
    AVC = 258,
    DOA = 259,
    AMTRELAY = 260,

    /// DNSSEC Trust Authorities.
    TA = 32768,

    /// DNSSEC Lookaside Validation. See [rfc4431].
    ///
    /// [rfc4431]: https://datatracker.ietf.org/doc/html/rfc4431
    DLV = 32769,
}

/// Returns true if `code` can never be the type of data in a zone: the
/// reserved type 0, OPT, and the meta and question types in 128..=255.
/// See [rfc6895] section 3.1.
///
/// [rfc6895]: https://datatracker.ietf.org/doc/html/rfc6895#section-3.1
pub fn is_meta_code(code: u16) -> bool {
    code == 0 || code == Type::OPT as u16 || (128..=255).contains(&code)
}

impl Type {
    /// Returns the numeric code of this type, as used on the wire.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Returns the type with the given numeric code, if it is one we know about.
    pub fn from_code(code: u16) -> Option<Type> {
        FromPrimitive::from_u16(code)
    }

    /// Returns the mnemonic of this type, for example "AAAA".
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns true for the meta and question-only types (OPT, TKEY, TSIG,
    /// IXFR, AXFR, MAILB, MAILA and ANY) which never appear as data in a zone.
    pub fn is_meta(self) -> bool {
        is_meta_code(self.code())
    }
}
