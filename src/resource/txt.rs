use crate::errors::{Error, Result};
use crate::resource::RecordData;
use crate::types::Type;
use log::trace;

/// The longest character-string a TXT record can hold, in bytes.
pub const MAX_STRING_LEN: usize = 255;

/// Text strings. See [rfc1035].
///
/// Holds one or more character-strings of at most 255 bytes each. Per
/// [rfc4408] the strings are usually read as one, joined without spaces.
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.14
/// [rfc4408]: https://datatracker.ietf.org/doc/html/rfc4408#section-3.1.3
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub struct TXT {
    strings: Vec<Vec<u8>>,
}

impl TXT {
    /// Appends a character-string.
    pub fn push_string<S: AsRef<[u8]>>(&mut self, value: S) -> Result<()> {
        let value = value.as_ref();
        check_length(value)?;

        trace!("TXT string {} set to {:?}", self.strings.len(), value);
        self.strings.push(value.to_vec());
        Ok(())
    }

    /// Replaces all the character-strings. If any of them is too long
    /// nothing is changed.
    pub fn set_strings<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut strings = Vec::new();
        for value in values {
            let value = value.as_ref();
            check_length(value)?;
            strings.push(value.to_vec());
        }

        trace!("TXT strings set to {:?}", strings);
        self.strings = strings;
        Ok(())
    }

    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }
}

impl From<&str> for TXT {
    /// Splits `text` into as many character-strings as needed to hold it.
    fn from(text: &str) -> Self {
        let mut strings: Vec<Vec<u8>> = text
            .as_bytes()
            .chunks(MAX_STRING_LEN)
            .map(|chunk| chunk.to_vec())
            .collect();

        if strings.is_empty() {
            strings.push(Vec::new())
        }

        TXT { strings }
    }
}

impl RecordData for TXT {
    const TYPE: Type = Type::TXT;

    fn tokens(&self) -> Result<Vec<String>> {
        if self.strings.is_empty() {
            return Err(Error::IncompleteRecord {
                rtype: Self::TYPE,
                field: "txt-data",
            });
        }

        Ok(self.strings.iter().map(|s| quote(s)).collect())
    }
}

fn check_length(value: &[u8]) -> Result<()> {
    if value.len() > MAX_STRING_LEN {
        return Err(Error::invalid(
            "txt-data",
            &String::from_utf8_lossy(value),
            "character-string longer than 255 bytes",
        ));
    }
    Ok(())
}

/// Quotes a character-string as described in [rfc1035] section 5.1.
/// Quotes and backslashes are escaped with a backslash, and bytes that
/// aren't printable ASCII are written as `\DDD` in decimal.
///
/// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035#section-5.1
fn quote(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for &b in s {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{:03}", b)),
        }
    }
    out.push('"');
    out
}
