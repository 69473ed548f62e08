//! # Account module
//!
//! Module dedicated to account management.
//!
//! An [`Account`] is the unit of remote addressing: every action
//! handler takes an [`AccountId`] and resolves it to an account row
//! before talking to the remote mailbox. The [`Provider`] kind
//! carried by the account determines how folder paths are translated
//! (see [`crate::folder::path`]).

mod error;

use std::{fmt, str::FromStr};

#[doc(inline)]
pub use self::error::{Error, Result};

/// The account identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mailbox provider kind.
///
/// The provider kind drives folder path translation: some providers
/// expose a virtual, label-style namespace where the local `/`
/// hierarchy separator is already native, while plain IMAP providers
/// use their own separator and sometimes a namespace prefix (Fastmail
/// wants `INBOX.A.B` for the local name `A/B`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Provider {
    /// A plain, RFC 3501-class IMAP provider with a hierarchical
    /// folder namespace.
    Imap,

    /// Gmail, where folders behave as labels with a native `/`
    /// hierarchy.
    Gmail,

    /// Exchange ActiveSync, which also exposes a flat namespace.
    Eas,
}

impl Provider {
    /// Whether folders of this provider live in a virtual, flat
    /// namespace.
    ///
    /// When true, local display names are used as-is on the remote
    /// side and no separator or prefix translation happens.
    pub fn uses_virtual_folder_namespace(&self) -> bool {
        matches!(self, Self::Gmail | Self::Eas)
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            imap if imap.eq_ignore_ascii_case("imap") => Ok(Self::Imap),
            generic if generic.eq_ignore_ascii_case("generic") => Ok(Self::Imap),
            gmail if gmail.eq_ignore_ascii_case("gmail") => Ok(Self::Gmail),
            eas if eas.eq_ignore_ascii_case("eas") => Ok(Self::Eas),
            exchange if exchange.eq_ignore_ascii_case("exchange") => Ok(Self::Eas),
            unknown => Err(Error::ParseProviderError(unknown.to_owned())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imap => write!(f, "imap"),
            Self::Gmail => write!(f, "gmail"),
            Self::Eas => write!(f, "eas"),
        }
    }
}

/// The account entity, as read from the datastore.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    /// The account identifier.
    pub id: AccountId,

    /// The account name, used for logging only.
    pub name: String,

    /// The mailbox provider kind of the account.
    pub provider: Provider,
}
