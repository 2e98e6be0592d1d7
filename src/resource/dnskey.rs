use crate::errors::{Error, Result};
use crate::resource::{assign, assign_str, required, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_base64;

/// DNSKEY protocol field. Any other value makes the key invalid for DNSSEC.
pub const PROTOCOL: u8 = 3;

/// Flag bit set when the key is a DNS zone key.
pub const ZONE_KEY: u16 = 0x0100;

/// Flag bit set when the key is a Secure Entry Point, usually a KSK.
/// See [rfc3757](https://datatracker.ietf.org/doc/html/rfc3757).
pub const SECURE_ENTRY_POINT: u16 = 0x0001;

/// Longest public key that fits in the 65535 octets of record data, after
/// the flags, protocol and algorithm.
pub const MAX_PUBLIC_KEY_LEN: usize = 65535 - 4;

/// RSA/MD5, the one algorithm whose key tag is calculated differently.
const ALGORITHM_RSAMD5: u8 = 1;

/// DNS Public Key. See [rfc4034].
///
/// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034#section-2
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub struct DNSKEY {
    flags: Option<u16>,
    protocol: Option<u8>,
    algorithm: Option<u8>,

    // Base64, as given.
    public_key: Option<String>,
}

impl DNSKEY {
    pub fn set_flags(&mut self, value: u16) {
        assign(&mut self.flags, Self::TYPE, "flags", value)
    }

    pub fn flags(&self) -> Option<u16> {
        self.flags
    }

    /// Returns true if the Zone Key flag is set.
    pub fn is_zone_key(&self) -> bool {
        self.flags.map_or(false, |f| f & ZONE_KEY != 0)
    }

    /// Returns true if the Secure Entry Point flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags.map_or(false, |f| f & SECURE_ENTRY_POINT != 0)
    }

    /// Sets the protocol, which must be 3.
    pub fn set_protocol(&mut self, value: u8) -> Result<()> {
        if value != PROTOCOL {
            return Err(Error::out_of_range("protocol", value, PROTOCOL, PROTOCOL));
        }
        assign(&mut self.protocol, Self::TYPE, "protocol", value);
        Ok(())
    }

    pub fn protocol(&self) -> Option<u8> {
        self.protocol
    }

    pub fn set_algorithm(&mut self, value: u8) {
        assign(&mut self.algorithm, Self::TYPE, "algorithm", value)
    }

    pub fn algorithm(&self) -> Option<u8> {
        self.algorithm
    }

    /// Sets the public key from its base64 text, which is kept as given.
    pub fn set_public_key(&mut self, value: &str) -> Result<()> {
        if decoded_len(value) > MAX_PUBLIC_KEY_LEN {
            return Err(Error::invalid("public key", value, "longer than 65531 octets"));
        }
        assign_str(
            &mut self.public_key,
            Self::TYPE,
            "public key",
            value,
            is_valid_base64,
            "not valid base64",
        )
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    /// Calculates the key tag of this key, as used by the RRSIG and DS
    /// records that refer to it. See [rfc4034] appendix B.
    ///
    /// [rfc4034]: https://datatracker.ietf.org/doc/html/rfc4034#appendix-B
    pub fn key_tag(&self) -> Result<u16> {
        let flags = *required(&self.flags, Self::TYPE, "flags")?;
        let protocol = *required(&self.protocol, Self::TYPE, "protocol")?;
        let algorithm = *required(&self.algorithm, Self::TYPE, "algorithm")?;
        let public_key = required(&self.public_key, Self::TYPE, "public key")?;

        let key = base64::decode(public_key)
            .map_err(|_| Error::invalid("public key", public_key, "not decodable as base64"))?;

        let mut rdata = Vec::with_capacity(4 + key.len());
        rdata.extend_from_slice(&flags.to_be_bytes());
        rdata.push(protocol);
        rdata.push(algorithm);
        rdata.extend_from_slice(&key);

        if algorithm == ALGORITHM_RSAMD5 {
            // The most significant 16 bits of the least significant 24 bits
            // of the modulus, which ends the key.
            let len = rdata.len();
            return Ok(u16::from_be_bytes([rdata[len - 3], rdata[len - 2]]));
        }

        let mut ac: u32 = 0;
        for (i, b) in rdata.iter().enumerate() {
            ac = ac.wrapping_add(if i & 1 == 1 {
                u32::from(*b)
            } else {
                u32::from(*b) << 8
            });
        }
        ac = ac.wrapping_add((ac >> 16) & 0xFFFF);

        Ok((ac & 0xFFFF) as u16)
    }
}

// Number of octets the base64 text decodes to.
fn decoded_len(s: &str) -> usize {
    let padding = s.bytes().rev().take_while(|&b| b == b'=').count();
    (s.len() * 3 / 4).saturating_sub(padding)
}

impl RecordData for DNSKEY {
    const TYPE: Type = Type::DNSKEY;

    fn tokens(&self) -> Result<Vec<String>> {
        // "257 3 8 AwEAAaz/tAm8yTn4Mfeh5eyI..."
        Ok(vec![
            token(&self.flags, Self::TYPE, "flags")?,
            token(&self.protocol, Self::TYPE, "protocol")?,
            token(&self.algorithm, Self::TYPE, "algorithm")?,
            token(&self.public_key, Self::TYPE, "public key")?,
        ])
    }
}
