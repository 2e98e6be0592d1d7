use crate::errors::Result;
use crate::resource::{assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::{is_valid_ipv4_address, is_valid_ipv6_address};

/// IPv4 host address. See [rfc1035].
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.4.1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct A {
    address: Option<String>,
}

impl A {
    /// Sets the address, exactly as given, if it is a valid IPv4 address.
    pub fn set_address(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.address,
            Self::TYPE,
            "address",
            value,
            is_valid_ipv4_address,
            "not a valid IPv4 address",
        )
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl RecordData for A {
    const TYPE: Type = Type::A;

    fn tokens(&self) -> Result<Vec<String>> {
        Ok(vec![token(&self.address, Self::TYPE, "address")?])
    }
}

/// IPv6 host address. See [rfc3596].
///
/// The address is kept in the form it was given in. It is not compressed or
/// otherwise normalised, so `output()` echoes back the exact text that was
/// set.
///
/// [rfc3596]: https://datatracker.ietf.org/doc/html/rfc3596#section-2.2
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub struct AAAA {
    address: Option<String>,
}

impl AAAA {
    /// Sets the address, exactly as given, if it is a valid IPv6 address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if `value` is
    /// not a valid IPv6 address, leaving any previous address in place.
    pub fn set_address(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.address,
            Self::TYPE,
            "address",
            value,
            is_valid_ipv6_address,
            "not a valid IPv6 address",
        )
    }

    /// Returns the address as it was set.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl RecordData for AAAA {
    const TYPE: Type = Type::AAAA;

    fn tokens(&self) -> Result<Vec<String>> {
        Ok(vec![token(&self.address, Self::TYPE, "address")?])
    }
}
