//! Record types whose data is a single domain name.

use crate::errors::Result;
use crate::resource::{assign_str, token, RecordData};
use crate::types::Type;
use crate::validate::is_valid_domain_name;

macro_rules! name_rdata {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[allow(clippy::upper_case_acronyms)]
        pub struct $name {
            target: Option<String>,
        }

        impl $name {
            /// Sets the domain name this record points at.
            pub fn set_target(&mut self, value: &str) -> Result<()> {
                assign_str(
                    &mut self.target,
                    Self::TYPE,
                    $field,
                    value,
                    is_valid_domain_name,
                    "not a valid domain name",
                )
            }

            pub fn target(&self) -> Option<&str> {
                self.target.as_deref()
            }
        }

        impl RecordData for $name {
            const TYPE: Type = Type::$name;

            fn tokens(&self) -> Result<Vec<String>> {
                Ok(vec![token(&self.target, Self::TYPE, $field)?])
            }
        }
    };
}

name_rdata!(
    /// Authoritative name server for the owner's zone. See [rfc1035].
    ///
    /// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.11
    NS,
    "nsdname"
);

name_rdata!(
    /// Canonical name of an alias. See [rfc1035].
    ///
    /// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.1
    CNAME,
    "cname"
);

name_rdata!(
    /// Domain name pointer, used for reverse lookups. See [rfc1035].
    ///
    /// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.12
    PTR,
    "ptrdname"
);
