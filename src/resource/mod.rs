//! Record data (RDATA) for each supported resource record type.
//!
//! Every type here starts out empty, has its fields assigned through
//! setters that reject values outside the field's grammar, and is then
//! turned into zone file presentation format with [`RecordData::output`].
//!
//! ```
//! use rustdns_rdata::resource::{RecordData, AAAA};
//!
//! let mut aaaa = AAAA::default();
//! aaaa.set_address("2001:db8::1")?;
//!
//! assert_eq!(aaaa.type_identifier(), "AAAA");
//! assert_eq!(aaaa.output()?, "2001:db8::1");
//! # Ok::<(), rustdns_rdata::Error>(())
//! ```

use crate::errors::{Error, Result};
use crate::types::Type;
use log::trace;
use std::fmt;

pub use self::address::{A, AAAA};
pub use self::dnskey::DNSKEY;
pub use self::ds::DS;
pub use self::mx::MX;
pub use self::name::{CNAME, NS, PTR};
pub use self::rrsig::RRSIG;
pub use self::soa::SOA;
pub use self::srv::SRV;
pub use self::txt::TXT;

mod address;
mod dnskey;
mod ds;
mod mx;
mod name;
mod rrsig;
mod soa;
mod srv;
mod txt;

/// The capabilities shared by all record data.
pub trait RecordData {
    /// The resource record type this data belongs to.
    const TYPE: Type;

    /// Returns each field formatted for presentation, in the order the
    /// type's RFC lists them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteRecord`] naming the first required field
    /// that has not been set.
    fn tokens(&self) -> Result<Vec<String>>;

    /// Returns the mnemonic of this record's type, for example "RRSIG".
    fn type_identifier(&self) -> &'static str {
        Self::TYPE.as_str()
    }

    /// Returns the record data in zone file presentation format.
    ///
    /// This is the part of a zone file line after the owner name, TTL, class
    /// and type, e.g. `10 aspmx.l.google.com.` for an MX record.
    fn output(&self) -> Result<String> {
        Ok(self.tokens()?.join(" "))
    }
}

/// Stores `value` in `slot`. Callers check the value first.
pub(crate) fn assign<T: fmt::Debug>(
    slot: &mut Option<T>,
    rtype: Type,
    field: &'static str,
    value: T,
) {
    trace!("{} {} set to {:?}", rtype, field, value);
    *slot = Some(value);
}

/// Checks `value` with `valid` and stores a copy in `slot` if it passes.
/// On failure `slot` is left as it was.
pub(crate) fn assign_str(
    slot: &mut Option<String>,
    rtype: Type,
    field: &'static str,
    value: &str,
    valid: fn(&str) -> bool,
    reason: &'static str,
) -> Result<()> {
    if !valid(value) {
        return Err(Error::invalid(field, value, reason));
    }
    assign(slot, rtype, field, value.to_string());
    Ok(())
}

/// Returns the value of a required field, or an [`Error::IncompleteRecord`].
pub(crate) fn required<'a, T>(
    slot: &'a Option<T>,
    rtype: Type,
    field: &'static str,
) -> Result<&'a T> {
    slot.as_ref().ok_or(Error::IncompleteRecord { rtype, field })
}

/// Like [`required`] but formats the value for presentation.
pub(crate) fn token<T: fmt::Display>(
    slot: &Option<T>,
    rtype: Type,
    field: &'static str,
) -> Result<String> {
    Ok(required(slot, rtype, field)?.to_string())
}

// This should be kept in sync with the record data types above.
/// Record data of any supported type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Resource {
    A(A),
    AAAA(AAAA),

    CNAME(CNAME),
    NS(NS),
    PTR(PTR),

    MX(MX),
    SOA(SOA),
    SRV(SRV),
    TXT(TXT),

    DS(DS),
    DNSKEY(DNSKEY),
    RRSIG(RRSIG),
}

impl Resource {
    /// Returns empty record data for the given type, ready to have its fields
    /// set. Returns None if the type isn't supported.
    pub fn empty(r#type: Type) -> Option<Resource> {
        Some(match r#type {
            Type::A => Resource::A(A::default()),
            Type::AAAA => Resource::AAAA(AAAA::default()),
            Type::CNAME => Resource::CNAME(CNAME::default()),
            Type::NS => Resource::NS(NS::default()),
            Type::PTR => Resource::PTR(PTR::default()),
            Type::MX => Resource::MX(MX::default()),
            Type::SOA => Resource::SOA(SOA::default()),
            Type::SRV => Resource::SRV(SRV::default()),
            Type::TXT => Resource::TXT(TXT::default()),
            Type::DS => Resource::DS(DS::default()),
            Type::DNSKEY => Resource::DNSKEY(DNSKEY::default()),
            Type::RRSIG => Resource::RRSIG(RRSIG::default()),
            _ => return None,
        })
    }

    /// Returns the type of this record data.
    pub fn r#type(&self) -> Type {
        match self {
            Resource::A(_) => A::TYPE,
            Resource::AAAA(_) => AAAA::TYPE,
            Resource::CNAME(_) => CNAME::TYPE,
            Resource::NS(_) => NS::TYPE,
            Resource::PTR(_) => PTR::TYPE,
            Resource::MX(_) => MX::TYPE,
            Resource::SOA(_) => SOA::TYPE,
            Resource::SRV(_) => SRV::TYPE,
            Resource::TXT(_) => TXT::TYPE,
            Resource::DS(_) => DS::TYPE,
            Resource::DNSKEY(_) => DNSKEY::TYPE,
            Resource::RRSIG(_) => RRSIG::TYPE,
        }
    }

    /// Returns the mnemonic of this record data's type.
    pub fn type_identifier(&self) -> &'static str {
        self.r#type().as_str()
    }

    /// Returns the record data in zone file presentation format.
    /// See [`RecordData::output`].
    pub fn output(&self) -> Result<String> {
        match self {
            Resource::A(a) => a.output(),
            Resource::AAAA(aaaa) => aaaa.output(),
            Resource::CNAME(cname) => cname.output(),
            Resource::NS(ns) => ns.output(),
            Resource::PTR(ptr) => ptr.output(),
            Resource::MX(mx) => mx.output(),
            Resource::SOA(soa) => soa.output(),
            Resource::SRV(srv) => srv.output(),
            Resource::TXT(txt) => txt.output(),
            Resource::DS(ds) => ds.output(),
            Resource::DNSKEY(dnskey) => dnskey.output(),
            Resource::RRSIG(rrsig) => rrsig.output(),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Resource {
                fn from(data: $variant) -> Self {
                    Resource::$variant(data)
                }
            }
        )*
    };
}

impl_from!(A, AAAA, CNAME, NS, PTR, MX, SOA, SRV, TXT, DS, DNSKEY, RRSIG);
