use crate::errors::Result;
use crate::resource::{assign, assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_domain_name;

/// Mail exchange. See [rfc1035].
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MX {
    // The preference given to this RR among others at the same owner.
    // Lower values are preferred.
    preference: Option<u16>,

    // A host willing to act as a mail exchange for the owner name.
    exchange: Option<String>,
}

impl MX {
    pub fn set_preference(&mut self, value: u16) {
        assign(&mut self.preference, Self::TYPE, "preference", value)
    }

    pub fn preference(&self) -> Option<u16> {
        self.preference
    }

    pub fn set_exchange(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.exchange,
            Self::TYPE,
            "exchange",
            value,
            is_valid_domain_name,
            "not a valid domain name",
        )
    }

    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }
}

impl RecordData for MX {
    const TYPE: Type = Type::MX;

    fn tokens(&self) -> Result<Vec<String>> {
        // "10 aspmx.l.google.com."
        Ok(vec![
            token(&self.preference, Self::TYPE, "preference")?,
            token(&self.exchange, Self::TYPE, "exchange")?,
        ])
    }
}
