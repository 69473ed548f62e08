//! # Flag module
//!
//! Module dedicated to remote message flags.
//!
//! A flag is like a tag attached to a remote message. This layer
//! only ever adds or removes flags on remote UIDs; it never touches
//! the local read/starred state, which is reconciled later by the
//! sync pass.

mod error;

use std::{fmt, str::FromStr};

#[doc(inline)]
pub use self::error::{Error, Result};

/// The remote message flag.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Flag {
    /// Flag used when the message has been opened.
    Seen,

    /// Flag used when the message has been answered.
    Answered,

    /// Flag used as a bookmark. The meaning is specific to the user:
    /// it could be important, starred, to check etc.
    Flagged,

    /// Flag used when the message is marked for deletion.
    Deleted,

    /// Flag used when the message is a draft.
    Draft,

    /// Flag used for all other use cases.
    Custom(String),
}

impl Flag {
    /// Creates a custom flag.
    pub fn custom(flag: impl ToString) -> Self {
        Self::Custom(flag.to_string())
    }

    /// Returns the wire atom of the flag, as used in IMAP STORE
    /// queries.
    pub fn to_imap_query_string(&self) -> String {
        match self {
            Flag::Seen => String::from("\\Seen"),
            Flag::Answered => String::from("\\Answered"),
            Flag::Flagged => String::from("\\Flagged"),
            Flag::Deleted => String::from("\\Deleted"),
            Flag::Draft => String::from("\\Draft"),
            Flag::Custom(flag) => flag.clone(),
        }
    }
}

/// Parse a flag from a string. If the string does not match any of
/// the existing variants, it is considered as custom.
impl From<&str> for Flag {
    fn from(s: &str) -> Self {
        match s.trim() {
            seen if seen.eq_ignore_ascii_case("seen") => Flag::Seen,
            answered if answered.eq_ignore_ascii_case("answered") => Flag::Answered,
            flagged if flagged.eq_ignore_ascii_case("flagged") => Flag::Flagged,
            deleted if deleted.eq_ignore_ascii_case("deleted") => Flag::Deleted,
            draft if draft.eq_ignore_ascii_case("draft") => Flag::Draft,
            flag => Flag::Custom(flag.into()),
        }
    }
}

/// Parse a flag from a string. If the string does not match any of
/// the existing variants, it returns an error.
impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            seen if seen.eq_ignore_ascii_case("seen") => Ok(Flag::Seen),
            answered if answered.eq_ignore_ascii_case("answered") => Ok(Flag::Answered),
            flagged if flagged.eq_ignore_ascii_case("flagged") => Ok(Flag::Flagged),
            deleted if deleted.eq_ignore_ascii_case("deleted") => Ok(Flag::Deleted),
            draft if draft.eq_ignore_ascii_case("draft") => Ok(Flag::Draft),
            unknown => Err(Error::ParseFlagError(unknown.to_owned())),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            Flag::Seen => "seen".into(),
            Flag::Answered => "answered".into(),
            Flag::Flagged => "flagged".into(),
            Flag::Deleted => "deleted".into(),
            Flag::Draft => "draft".into(),
            Flag::Custom(flag) => flag.clone(),
        };
        write!(f, "{flag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imap_query_string() {
        assert_eq!(Flag::Flagged.to_imap_query_string(), "\\Flagged");
        assert_eq!(Flag::Seen.to_imap_query_string(), "\\Seen");
        assert_eq!(Flag::custom("$Junk").to_imap_query_string(), "$Junk");
    }

    #[test]
    fn parse_flag() {
        assert_eq!(Flag::from("seen"), Flag::Seen);
        assert_eq!(Flag::from("Flagged"), Flag::Flagged);
        assert_eq!(Flag::from("$Junk"), Flag::custom("$Junk"));
        assert!("$Junk".parse::<Flag>().is_err());
    }
}
