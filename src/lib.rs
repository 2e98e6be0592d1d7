//! Typed, validated record data (RDATA) for DNS resource records, which
//! renders itself in zone file presentation format.
//!
//! Each supported record type has its own struct in [`resource`]. Fields are
//! set through setters that reject values that don't fit the field's
//! grammar, and [`RecordData::output`] produces the text that follows the
//! owner name, TTL, class and type on a zone file line.
//!
//! ```
//! use rustdns_rdata::{RecordData, RRSIG};
//!
//! let mut rrsig = RRSIG::default();
//! rrsig.set_type_covered("A")?;
//! rrsig.set_algorithm(8);
//! rrsig.set_labels(2)?;
//! rrsig.set_original_ttl(86400);
//! rrsig.set_signature_expiration(1893456000);
//! rrsig.set_signature_inception(1861920000);
//! rrsig.set_key_tag(12345);
//! rrsig.set_signers_name("example.com.")?;
//! rrsig.set_signature("Kx2mK7txn==")?;
//!
//! assert_eq!(
//!     rrsig.output()?,
//!     "A 8 2 86400 1893456000 1861920000 12345 example.com. Kx2mK7txn=="
//! );
//! # Ok::<(), rustdns_rdata::Error>(())
//! ```
//!
//! Parsing zone files, and encoding to or decoding from the wire format,
//! are left to other crates.

mod errors;
pub mod resource;
pub mod types;
pub mod validate;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate num_derive;

pub use crate::errors::{Error, Result};
pub use crate::resource::*;

// Pull up the various types that should be on the front page of the docs.
#[doc(inline)]
pub use crate::resource::RecordData;
#[doc(inline)]
pub use crate::resource::Resource;

#[doc(inline)]
pub use crate::types::Type;
