use crate::errors::{Error, Result};
use crate::resource::{assign, assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_domain_name;

/// Marks the start of a zone of authority. See [rfc1035].
///
/// All the timer fields are in seconds.
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SOA {
    mname: Option<String>,
    rname: Option<String>,
    serial: Option<u32>,
    refresh: Option<u32>,
    retry: Option<u32>,
    expire: Option<u32>,
    minimum: Option<u32>,
}

impl SOA {
    /// Sets the name of the primary name server for this zone.
    pub fn set_mname(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.mname,
            Self::TYPE,
            "mname",
            value,
            is_valid_domain_name,
            "not a valid domain name",
        )
    }

    pub fn mname(&self) -> Option<&str> {
        self.mname.as_deref()
    }

    /// Sets the mailbox of the person responsible for this zone, written as
    /// a domain name, e.g. "dns-admin.google.com.".
    pub fn set_rname(&mut self, value: &str) -> Result<()> {
        assign_str(
            &mut self.rname,
            Self::TYPE,
            "rname",
            value,
            is_valid_domain_name,
            "not a valid domain name",
        )
    }

    /// Sets the responsible mailbox from an email address, so
    /// "dns-admin@google.com." is stored as "dns-admin.google.com.".
    ///
    /// The local part may not contain a dot, as it can't be told apart from
    /// the domain once converted.
    pub fn set_rname_from_email(&mut self, email: &str) -> Result<()> {
        let (local, domain) = match email.split_once('@') {
            Some(parts) => parts,
            None => return Err(Error::invalid("rname", email, "email address has no '@'")),
        };

        if local.contains('.') {
            return Err(Error::invalid(
                "rname",
                email,
                "email local part contains a '.'",
            ));
        }

        self.set_rname(&format!("{}.{}", local, domain))
    }

    pub fn rname(&self) -> Option<&str> {
        self.rname.as_deref()
    }

    pub fn set_serial(&mut self, value: u32) {
        assign(&mut self.serial, Self::TYPE, "serial", value)
    }

    pub fn serial(&self) -> Option<u32> {
        self.serial
    }

    pub fn set_refresh(&mut self, value: u32) {
        assign(&mut self.refresh, Self::TYPE, "refresh", value)
    }

    pub fn refresh(&self) -> Option<u32> {
        self.refresh
    }

    pub fn set_retry(&mut self, value: u32) {
        assign(&mut self.retry, Self::TYPE, "retry", value)
    }

    pub fn retry(&self) -> Option<u32> {
        self.retry
    }

    pub fn set_expire(&mut self, value: u32) {
        assign(&mut self.expire, Self::TYPE, "expire", value)
    }

    pub fn expire(&self) -> Option<u32> {
        self.expire
    }

    pub fn set_minimum(&mut self, value: u32) {
        assign(&mut self.minimum, Self::TYPE, "minimum", value)
    }

    pub fn minimum(&self) -> Option<u32> {
        self.minimum
    }
}

impl RecordData for SOA {
    const TYPE: Type = Type::SOA;

    fn tokens(&self) -> Result<Vec<String>> {
        // "ns1.google.com. dns-admin.google.com. 376337657 900 900 1800 60"
        Ok(vec![
            token(&self.mname, Self::TYPE, "mname")?,
            token(&self.rname, Self::TYPE, "rname")?,
            token(&self.serial, Self::TYPE, "serial")?,
            token(&self.refresh, Self::TYPE, "refresh")?,
            token(&self.retry, Self::TYPE, "retry")?,
            token(&self.expire, Self::TYPE, "expire")?,
            token(&self.minimum, Self::TYPE, "minimum")?,
        ])
    }
}
