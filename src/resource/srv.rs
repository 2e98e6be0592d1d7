use crate::errors::Result;
use crate::resource::{assign, assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_domain_name;

/// Service location. See [rfc2782].
///
/// [rfc2782]: https://datatracker.ietf.org/doc/html/rfc2782
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SRV {
    priority: Option<u16>,
    weight: Option<u16>,
    port: Option<u16>,
    target: Option<String>,
}

impl SRV {
    pub fn set_priority(&mut self, value: u16) {
        assign(&mut self.priority, Self::TYPE, "priority", value)
    }

    pub fn priority(&self) -> Option<u16> {
        self.priority
    }

    pub fn set_weight(&mut self, value: u16) {
        assign(&mut self.weight, Self::TYPE, "weight", value)
    }

    pub fn weight(&self) -> Option<u16> {
        self.weight
    }

    pub fn set_port(&mut self, value: u16) {
        assign(&mut self.port, Self::TYPE, "port", value)
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets the host providing the service. A target of "." means the
    /// service is decidedly not available at this domain.
    pub fn set_target(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.target,
            Self::TYPE,
            "target",
            value,
            is_valid_domain_name,
            "not a valid domain name",
        )
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl RecordData for SRV {
    const TYPE: Type = Type::SRV;

    fn tokens(&self) -> Result<Vec<String>> {
        // "5 0 389 ldap.google.com."
        Ok(vec![
            token(&self.priority, Self::TYPE, "priority")?,
            token(&self.weight, Self::TYPE, "weight")?,
            token(&self.port, Self::TYPE, "port")?,
            token(&self.target, Self::TYPE, "target")?,
        ])
    }
}
