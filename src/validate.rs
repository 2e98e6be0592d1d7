//! Stateless checks of presentation format text against the grammars used
//! by record data fields.
//!
//! Each function answers a single yes/no question and holds no state, so
//! they are safe to call from anywhere.

use crate::types::{is_meta_code, Type};
use regex::Regex;
use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length of a domain name, excluding the trailing dot. [RFC1035]
pub const MAX_NAME_LEN: usize = 253;

/// Restricts the length of a domain label to 63 characters. [RFC1034]
pub const MAX_LABEL_LEN: usize = 63;

lazy_static! {
    // Letters, digits, hyphens and underscores, with no hyphen at either end.
    // Underscores show up in service labels such as "_ldap._tcp".
    static ref LABEL: Regex = Regex::new(r"^[A-Za-z0-9_](?:[A-Za-z0-9_-]*[A-Za-z0-9_])?$").unwrap();

    static ref BASE64: Regex = Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap();

    // The RFC 3597 form of an unknown type, e.g. "TYPE65280".
    static ref GENERIC_TYPE: Regex = Regex::new(r"^TYPE([0-9]{1,5})$").unwrap();
}

/// Checks that `s` is an IPv6 address in any of the textual forms allowed by
/// [rfc4291] section 2.2.
///
/// This accepts all eight groups written out, `::` compression (used at most
/// once), and a trailing dotted-quad IPv4 part. Zone identifiers such as
/// `fe80::1%eth0` are not part of the grammar and are rejected.
///
/// ```
/// use rustdns_rdata::validate::is_valid_ipv6_address;
///
/// assert!(is_valid_ipv6_address("2001:db8::1"));
/// assert!(is_valid_ipv6_address("::ffff:192.0.2.1"));
/// assert!(!is_valid_ipv6_address("1200::AB00:1234::2552:7777:1313"));
/// ```
///
/// [rfc4291]: https://datatracker.ietf.org/doc/html/rfc4291
pub fn is_valid_ipv6_address(s: &str) -> bool {
    Ipv6Addr::from_str(s).is_ok()
}

/// Checks that `s` is a dotted-quad IPv4 address.
pub fn is_valid_ipv4_address(s: &str) -> bool {
    Ipv4Addr::from_str(s).is_ok()
}

/// Checks that `s` is a domain name as written in a zone file.
///
/// The name may be absolute (ending in a dot) or relative. Unicode labels are
/// converted to their punycode form before the length limits are checked. A
/// `*` is only allowed as the whole of the first label.
///
/// Labels are limited to letters, digits, hyphens and underscores. This is
/// narrower than [rfc2181] section 11 allows: `\`-escaped labels such as
/// `a\.b.example.com.` and [rfc2317] classless reverse names such as
/// `0/26.2.0.192.in-addr.arpa.` are rejected.
///
/// [rfc2181]: https://datatracker.ietf.org/doc/html/rfc2181#section-11
/// [rfc2317]: https://datatracker.ietf.org/doc/html/rfc2317
pub fn is_valid_domain_name(s: &str) -> bool {
    if s == "." {
        return true; // Root domain
    }

    let name = s.strip_suffix('.').unwrap_or(s);
    if name.is_empty() {
        return false;
    }

    let name = if name.is_ascii() {
        Cow::Borrowed(name)
    } else {
        match idna::domain_to_ascii(name) {
            Ok(ascii) => Cow::Owned(ascii),
            Err(_) => return false,
        }
    };

    if name.len() > MAX_NAME_LEN {
        return false;
    }

    name.split('.').enumerate().all(|(i, label)| {
        label.len() <= MAX_LABEL_LEN && (LABEL.is_match(label) || (i == 0 && label == "*"))
    })
}

/// Checks that `s` looks like base64 text: only the base64 alphabet, with up
/// to two `=` padding characters at the end.
///
/// This is a check of the alphabet, not a full decode.
pub fn is_valid_base64(s: &str) -> bool {
    BASE64.is_match(s)
}

/// Checks that `s` is a non-empty, even length string of hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks that `s` names a record type that can hold data, either by its
/// mnemonic (e.g. "MX", in any case) or in the generic `TYPEnnn` form from
/// [rfc3597].
///
/// [rfc3597]: https://datatracker.ietf.org/doc/html/rfc3597
pub fn is_valid_type_mnemonic(s: &str) -> bool {
    let upper = s.to_ascii_uppercase();
    if let Ok(r#type) = Type::from_str(&upper) {
        return !r#type.is_meta();
    }

    match GENERIC_TYPE.captures(&upper) {
        Some(caps) => match caps[1].parse::<u16>() {
            Ok(code) => !is_meta_code(code),
            Err(_) => false,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv6() {
        let valid = vec![
            "1200:0000:AB00:1234:0000:2552:7777:1313",
            "21DA:D3:0:2F3B:2AA:FF:FE28:9C5A",
            "2001:db8::1",
            "::",
            "::1",
            "1::",
            "1:2:3:4:5:6:7::",
            "::2:3:4:5:6:7:8",
            "fe80::200:5aee:feaa:20a2",
            "::ffff:192.0.2.128",
            "1:2:3:4:5:6:192.0.2.1",
            "64:ff9b::192.0.2.33",
        ];

        for s in valid {
            assert!(is_valid_ipv6_address(s), "'{}' should be valid", s);
        }

        let invalid = vec![
            "",
            "not-an-address",
            "1200::AB00:1234::2552:7777:1313",
            "1200:0000:AB00:1234:0000:2552:7777:1313:1234",
            "1:2:3:4:5:6:7",
            "::1:2:3:4:5:6:7:8",
            "12345::1",
            "1:2:3:4:5:6:7:G",
            ":1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:",
            ":::",
            "fe80::1%eth0",
            "192.0.2.1",
            "::ffff:192.0.2.256",
            "1::2:3:4:5:6:7:192.0.2.1",
            " ::1",
        ];

        for s in invalid {
            assert!(!is_valid_ipv6_address(s), "'{}' should be invalid", s);
        }
    }

    #[test]
    fn test_ipv4() {
        assert!(is_valid_ipv4_address("192.0.2.1"));
        assert!(is_valid_ipv4_address("0.0.0.0"));
        assert!(!is_valid_ipv4_address("192.0.2"));
        assert!(!is_valid_ipv4_address("192.0.2.256"));
        assert!(!is_valid_ipv4_address("::1"));
    }

    #[test]
    fn test_domain_name() {
        let valid = vec![
            ".",
            "com",
            "com.",
            "example.com.",
            "a.b.example.com",
            "_ldap._tcp.google.com.",
            "*.example.com.",
            "xn--74h.com.",
            "académie-française.fr.",
            "3com.net",
        ];

        for s in valid {
            assert!(is_valid_domain_name(s), "'{}' should be valid", s);
        }

        let long_label = "a".repeat(64) + ".com.";
        let long_name = vec!["abcdefghi"; 26].join(".") + ".";

        let invalid = vec![
            "",
            "..",
            "a..b.com.",
            ".example.com.",
            "example.com..",
            "-foo.com.",
            "foo-.com.",
            "exa mple.com.",
            "a.*.example.com.",
            "\"quoted\".com.",
            "a\\.b.example.com.",
            "0/26.2.0.192.in-addr.arpa.",
            long_label.as_str(),
            long_name.as_str(),
        ];

        for s in invalid {
            assert!(!is_valid_domain_name(s), "'{}' should be invalid", s);
        }
    }

    #[test]
    fn test_base64() {
        assert!(is_valid_base64("Kx2mK7txn=="));
        assert!(is_valid_base64("AwEAAagAIKlVZrpC6Ia7gEzahOR+9W29euxhJhVVLOyQbSEW0O8gcCjF"));
        assert!(is_valid_base64("AA=="));
        assert!(!is_valid_base64(""));
        assert!(!is_valid_base64("===="));
        assert!(!is_valid_base64("AA=A"));
        assert!(!is_valid_base64("AA==="));
        assert!(!is_valid_base64("AAAA AAAA"));
        assert!(!is_valid_base64("AA-_"));
    }

    #[test]
    fn test_hex() {
        assert!(is_valid_hex("2BB183AF5F22588179A53B0A98631FAD1A292118"));
        assert!(is_valid_hex("deadbeef"));
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("ABC"));
        assert!(!is_valid_hex("GG"));
    }

    #[test]
    fn test_assigned_type_mnemonics() {
        let tests = vec![
            "MD", "MB", "X25", "ISDN", "RT", "NSAP", "NSAP-PTR", "nsap-ptr", "PX", "GPOS", "NXT",
            "EID", "NIMLOC", "ATMA", "A6", "SINK", "NINFO", "RKEY", "TALINK", "NID", "L32", "L64",
            "LP", "AMTRELAY", "TA", "DLV",
        ];

        for s in tests {
            assert!(is_valid_type_mnemonic(s), "'{}' should be valid", s);
        }
    }

    #[test]
    fn test_type_mnemonic() {
        assert!(is_valid_type_mnemonic("A"));
        assert!(is_valid_type_mnemonic("aaaa"));
        assert!(is_valid_type_mnemonic("DNSKEY"));
        assert!(is_valid_type_mnemonic("TYPE65280"));
        assert!(is_valid_type_mnemonic("type1"));
        assert!(!is_valid_type_mnemonic("ANY"));
        assert!(!is_valid_type_mnemonic("OPT"));
        assert!(!is_valid_type_mnemonic("TYPE255"));
        assert!(!is_valid_type_mnemonic("TYPE254"));
        assert!(!is_valid_type_mnemonic("TYPE253"));
        assert!(!is_valid_type_mnemonic("TYPE128"));
        assert!(!is_valid_type_mnemonic("TYPE41"));
        assert!(!is_valid_type_mnemonic("TYPE0"));
        assert!(!is_valid_type_mnemonic("MAILA"));
        assert!(is_valid_type_mnemonic("TYPE127"));
        assert!(is_valid_type_mnemonic("TYPE256"));
        assert!(!is_valid_type_mnemonic("TYPE65536"));
        assert!(!is_valid_type_mnemonic("TYPE"));
        assert!(!is_valid_type_mnemonic("BOGUS"));
        assert!(!is_valid_type_mnemonic(""));
    }
}
