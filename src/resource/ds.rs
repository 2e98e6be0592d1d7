use crate::errors::{Error, Result};
use crate::resource::{assign, assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_hex;

/// Delegation Signer. See [rfc4034].
///
/// Refers to a DNSKEY in a child zone by its key tag, algorithm and a digest
/// of the key.
///
/// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034#section-5
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DS {
    key_tag: Option<u16>,
    algorithm: Option<u8>,
    digest_type: Option<u8>,

    // Hex, as given.
    digest: Option<String>,
}

impl DS {
    pub fn set_key_tag(&mut self, value: u16) {
        assign(&mut self.key_tag, Self::TYPE, "key tag", value)
    }

    pub fn key_tag(&self) -> Option<u16> {
        self.key_tag
    }

    pub fn set_algorithm(&mut self, value: u8) {
        assign(&mut self.algorithm, Self::TYPE, "algorithm", value)
    }

    pub fn algorithm(&self) -> Option<u8> {
        self.algorithm
    }

    pub fn set_digest_type(&mut self, value: u8) {
        assign(&mut self.digest_type, Self::TYPE, "digest type", value)
    }

    pub fn digest_type(&self) -> Option<u8> {
        self.digest_type
    }

    /// Sets the digest from its hex text, which is kept as given.
    pub fn set_digest(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.digest,
            Self::TYPE,
            "digest",
            value,
            is_valid_hex,
            "not an even number of hex digits",
        )
    }

    /// Sets the digest from raw bytes, stored as upper case hex.
    pub fn set_digest_data(&mut self, value: &[u8]) -> Result<()> {
        if value.is_empty() {
            return Err(Error::invalid("digest", "", "digest is empty"));
        }

        let hex: String = value.iter().map(|b| format!("{:02X}", b)).collect();
        assign(&mut self.digest, Self::TYPE, "digest", hex);
        Ok(())
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

impl RecordData for DS {
    const TYPE: Type = Type::DS;

    fn tokens(&self) -> Result<Vec<String>> {
        // "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118"
        Ok(vec![
            token(&self.key_tag, Self::TYPE, "key tag")?,
            token(&self.algorithm, Self::TYPE, "algorithm")?,
            token(&self.digest_type, Self::TYPE, "digest type")?,
            token(&self.digest, Self::TYPE, "digest")?,
        ])
    }
}
