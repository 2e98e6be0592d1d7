use crate::errors::{Error, Result};
use crate::resource::{assign, assign_str, required, token, RecordData};
use crate::types::Type;
use crate::validate::{is_valid_base64, is_valid_domain_name, is_valid_type_mnemonic};
use chrono::{DateTime, TimeZone, Utc};
use std::convert::TryFrom;

/// The most labels a domain name can have.
pub const MAX_LABELS: u8 = 127;

/// Resource Record Signature. See [rfc4034].
///
/// Holds a signature over the RRset of type [`type_covered`] at the owner
/// name, made with the DNSKEY identified by [`signers_name`], [`algorithm`]
/// and [`key_tag`].
///
/// [`type_covered`]: RRSIG::type_covered
/// [`signers_name`]: RRSIG::signers_name
/// [`algorithm`]: RRSIG::algorithm
/// [`key_tag`]: RRSIG::key_tag
/// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034#section-3
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub struct RRSIG {
    type_covered: Option<String>,
    algorithm: Option<u8>,
    labels: Option<u8>,
    original_ttl: Option<u32>,

    // Seconds since 1 January 1970 00:00:00 UTC, ignoring leap seconds.
    signature_expiration: Option<u32>,
    signature_inception: Option<u32>,

    key_tag: Option<u16>,
    signers_name: Option<String>,

    // Base64, as given.
    signature: Option<String>,
}

impl RRSIG {
    /// Sets the type of the RRset this signature covers, either by mnemonic
    /// or in the `TYPEnnn` form.
    pub fn set_type_covered(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.type_covered,
            Self::TYPE,
            "type covered",
            value,
            is_valid_type_mnemonic,
            "not a record type",
        )
    }

    pub fn type_covered(&self) -> Option<&str> {
        self.type_covered.as_deref()
    }

    /// Sets the number of the cryptographic algorithm used to make the
    /// signature.
    pub fn set_algorithm(&mut self, value: u8) {
        assign(&mut self.algorithm, Self::TYPE, "algorithm", value)
    }

    pub fn algorithm(&self) -> Option<u8> {
        self.algorithm
    }

    /// Sets the number of labels in the original owner name, not counting
    /// the root or a leading wildcard.
    pub fn set_labels(&mut self, value: u8) -> Result<()> {
        if value > MAX_LABELS {
            return Err(Error::out_of_range("labels", value, 0, MAX_LABELS));
        }
        assign(&mut self.labels, Self::TYPE, "labels", value);
        Ok(())
    }

    pub fn labels(&self) -> Option<u8> {
        self.labels
    }

    /// Sets the TTL of the covered RRset as it appears in the authoritative
    /// zone.
    pub fn set_original_ttl(&mut self, value: u32) {
        assign(&mut self.original_ttl, Self::TYPE, "original TTL", value)
    }

    pub fn original_ttl(&self) -> Option<u32> {
        self.original_ttl
    }

    pub fn set_signature_expiration(&mut self, value: u32) {
        assign(
            &mut self.signature_expiration,
            Self::TYPE,
            "signature expiration",
            value,
        )
    }

    pub fn signature_expiration(&self) -> Option<u32> {
        self.signature_expiration
    }

    /// Sets the signature expiration from a point in time, which must fall
    /// within the 32 bit range of seconds after the epoch.
    pub fn set_signature_expiration_time(&mut self, time: DateTime<Utc>) -> Result<()> {
        let secs = to_timestamp("signature expiration", time)?;
        self.set_signature_expiration(secs);
        Ok(())
    }

    pub fn signature_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.signature_expiration.and_then(from_timestamp)
    }

    pub fn set_signature_inception(&mut self, value: u32) {
        assign(
            &mut self.signature_inception,
            Self::TYPE,
            "signature inception",
            value,
        )
    }

    pub fn signature_inception(&self) -> Option<u32> {
        self.signature_inception
    }

    /// Sets the signature inception from a point in time, which must fall
    /// within the 32 bit range of seconds after the epoch.
    pub fn set_signature_inception_time(&mut self, time: DateTime<Utc>) -> Result<()> {
        let secs = to_timestamp("signature inception", time)?;
        self.set_signature_inception(secs);
        Ok(())
    }

    pub fn signature_inception_time(&self) -> Option<DateTime<Utc>> {
        self.signature_inception.and_then(from_timestamp)
    }

    /// Sets the key tag of the DNSKEY that validates this signature.
    pub fn set_key_tag(&mut self, value: u16) {
        assign(&mut self.key_tag, Self::TYPE, "key tag", value)
    }

    pub fn key_tag(&self) -> Option<u16> {
        self.key_tag
    }

    /// Sets the owner name of the DNSKEY that validates this signature.
    pub fn set_signers_name(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.signers_name,
            Self::TYPE,
            "signer's name",
            value,
            is_valid_domain_name,
            "not a valid domain name",
        )
    }

    pub fn signers_name(&self) -> Option<&str> {
        self.signers_name.as_deref()
    }

    /// Sets the signature from its base64 text, which is kept as given.
    pub fn set_signature(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.signature,
            Self::TYPE,
            "signature",
            value,
            is_valid_base64,
            "not valid base64",
        )
    }

    /// Sets the signature from its raw bytes.
    pub fn set_signature_data(&mut self, value: &[u8]) -> Result<()> {
        if value.is_empty() {
            return Err(Error::invalid("signature", "", "signature is empty"));
        }
        assign(
            &mut self.signature,
            Self::TYPE,
            "signature",
            base64::encode(value),
        );
        Ok(())
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns the raw bytes of the signature.
    pub fn signature_data(&self) -> Result<Vec<u8>> {
        let signature = required(&self.signature, Self::TYPE, "signature")?;
        base64::decode(signature)
            .map_err(|_| Error::invalid("signature", signature, "not decodable as base64"))
    }
}

impl RecordData for RRSIG {
    const TYPE: Type = Type::RRSIG;

    fn tokens(&self) -> Result<Vec<String>> {
        // "A 8 2 86400 1893456000 1861920000 12345 example.com. Kx2mK7txn=="
        Ok(vec![
            token(&self.type_covered, Self::TYPE, "type covered")?,
            token(&self.algorithm, Self::TYPE, "algorithm")?,
            token(&self.labels, Self::TYPE, "labels")?,
            token(&self.original_ttl, Self::TYPE, "original TTL")?,
            token(&self.signature_expiration, Self::TYPE, "signature expiration")?,
            token(&self.signature_inception, Self::TYPE, "signature inception")?,
            token(&self.key_tag, Self::TYPE, "key tag")?,
            token(&self.signers_name, Self::TYPE, "signer's name")?,
            token(&self.signature, Self::TYPE, "signature")?,
        ])
    }
}

fn to_timestamp(field: &'static str, time: DateTime<Utc>) -> Result<u32> {
    let secs = time.timestamp();
    u32::try_from(secs).map_err(|_| Error::out_of_range(field, secs, 0, i64::from(u32::MAX)))
}

fn from_timestamp(secs: u32) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs.into(), 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn example() -> RRSIG {
        let mut rrsig = RRSIG::default();
        rrsig.set_type_covered("A").unwrap();
        rrsig.set_algorithm(8);
        rrsig.set_labels(2).unwrap();
        rrsig.set_original_ttl(86400);
        rrsig.set_signature_expiration(1893456000);
        rrsig.set_signature_inception(1861920000);
        rrsig.set_key_tag(12345);
        rrsig.set_signers_name("example.com.").unwrap();
        rrsig.set_signature("Kx2mK7txn==").unwrap();
        rrsig
    }

    #[test]
    fn test_output() {
        assert_eq!(
            example().output().unwrap(),
            "A 8 2 86400 1893456000 1861920000 12345 example.com. Kx2mK7txn=="
        );
    }

    #[test]
    fn test_getters() {
        let rrsig = example();
        assert_eq!(rrsig.type_covered(), Some("A"));
        assert_eq!(rrsig.algorithm(), Some(8));
        assert_eq!(rrsig.labels(), Some(2));
        assert_eq!(rrsig.original_ttl(), Some(86400));
        assert_eq!(rrsig.signature_expiration(), Some(1893456000));
        assert_eq!(rrsig.signature_inception(), Some(1861920000));
        assert_eq!(rrsig.key_tag(), Some(12345));
        assert_eq!(rrsig.signers_name(), Some("example.com."));
        assert_eq!(rrsig.signature(), Some("Kx2mK7txn=="));
    }

    #[test]
    fn test_incomplete() {
        let mut rrsig = RRSIG::default();
        rrsig.set_type_covered("A").unwrap();
        rrsig.set_algorithm(8);
        assert_eq!(
            rrsig.output(),
            Err(Error::IncompleteRecord {
                rtype: Type::RRSIG,
                field: "labels"
            })
        );

        let mut rrsig = example();
        rrsig.signature = None;
        assert_eq!(
            rrsig.output(),
            Err(Error::IncompleteRecord {
                rtype: Type::RRSIG,
                field: "signature"
            })
        );
    }

    #[test]
    fn test_labels() {
        let mut rrsig = example();
        assert_eq!(
            rrsig.set_labels(128),
            Err(Error::OutOfRange {
                field: "labels",
                value: 128,
                min: 0,
                max: 127
            })
        );
        assert_eq!(rrsig.labels(), Some(2));

        rrsig.set_labels(0).unwrap();
        rrsig.set_labels(127).unwrap();
        assert_eq!(rrsig.labels(), Some(127));
    }

    #[test]
    fn test_invalid_strings_keep_previous() {
        let mut rrsig = example();

        assert!(rrsig.set_type_covered("BOGUS").is_err());
        assert!(rrsig.set_type_covered("ANY").is_err());
        assert!(rrsig.set_signers_name("example..com.").is_err());
        assert!(rrsig.set_signature("not base64!").is_err());
        assert!(rrsig.set_signature("").is_err());

        assert_eq!(
            rrsig.output().unwrap(),
            "A 8 2 86400 1893456000 1861920000 12345 example.com. Kx2mK7txn=="
        );
    }

    #[test]
    fn test_type_covered_forms() {
        let mut rrsig = RRSIG::default();
        rrsig.set_type_covered("TYPE65280").unwrap();
        assert_eq!(rrsig.type_covered(), Some("TYPE65280"));

        rrsig.set_type_covered("dnskey").unwrap();
        assert_eq!(rrsig.type_covered(), Some("dnskey"));
    }

    #[test]
    fn test_type_covered_assigned_types() {
        let mut rrsig = RRSIG::default();
        for mnemonic in &["DLV", "NID", "LP", "RT", "AMTRELAY", "GPOS", "NSAP-PTR"] {
            rrsig.set_type_covered(mnemonic).unwrap();
            assert_eq!(rrsig.type_covered(), Some(*mnemonic));
        }
    }

    #[test]
    fn test_type_covered_meta_codes() {
        let mut rrsig = RRSIG::default();
        rrsig.set_type_covered("A").unwrap();

        for mnemonic in &["TYPE0", "TYPE41", "TYPE128", "TYPE253", "TYPE254", "TYPE255", "MAILA"] {
            match rrsig.set_type_covered(mnemonic) {
                Err(Error::Validation { field, .. }) => assert_eq!(field, "type covered"),
                other => panic!("set_type_covered({}) = {:?}, want Validation", mnemonic, other),
            }
        }
        assert_eq!(rrsig.type_covered(), Some("A"));
    }

    #[test]
    fn test_times() {
        let mut rrsig = RRSIG::default();

        let expiration = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        rrsig.set_signature_expiration_time(expiration).unwrap();
        assert_eq!(rrsig.signature_expiration(), Some(1893456000));
        assert_eq!(rrsig.signature_expiration_time(), Some(expiration));

        rrsig.set_signature_inception(1861920000);
        assert_eq!(
            rrsig.signature_inception_time(),
            Some(Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_times_out_of_range() {
        let mut rrsig = RRSIG::default();

        let before_epoch = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            rrsig.set_signature_inception_time(before_epoch),
            Err(Error::OutOfRange {
                field: "signature inception",
                value: -1,
                min: 0,
                max: u32::MAX.into()
            })
        );

        let after_2106 = Utc.with_ymd_and_hms(2106, 2, 8, 0, 0, 0).unwrap();
        assert!(rrsig.set_signature_expiration_time(after_2106).is_err());

        assert_eq!(rrsig.signature_inception(), None);
        assert_eq!(rrsig.signature_expiration(), None);
    }

    #[test]
    fn test_signature_data() {
        let mut rrsig = RRSIG::default();
        rrsig.set_signature_data(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(rrsig.signature(), Some("3q2+7w=="));
        assert_eq!(rrsig.signature_data().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);

        assert!(rrsig.set_signature_data(&[]).is_err());

        // The alphabet is fine, but it can't be decoded.
        rrsig.set_signature("Kx2mK7txn==").unwrap();
        assert!(rrsig.signature_data().is_err());
    }
}
