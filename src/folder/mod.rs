//! # Folder module
//!
//! Module dedicated to folder (as known as mailbox) management.
//!
//! The engine's datastore calls folders categories: a [`Category`]
//! row exists locally before the remote folder does, and its display
//! name is the user-facing, `/`-separated hierarchical name. After a
//! successful remote create or rename the display name is rewritten
//! to the provider-native path (see [`path`]), so that subsequent
//! actions address the right remote folder.
//!
//! [`FolderRole`] names the special folders this layer cares about.
//! Roles are optional per account: the absence of a drafts or sent
//! folder is a no-op condition for the draft and sent actions, never
//! an error.

mod error;
pub mod path;

use std::{fmt, str::FromStr};

#[doc(inline)]
pub use self::error::{Error, Result};

/// The local hierarchy separator used by category display names.
pub const LOCAL_SEPARATOR: char = '/';

/// The category (folder) identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The category entity, as read from the datastore.
///
/// A category is the local representation of a remote folder (or
/// label, for virtual-namespace providers).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    /// The category identifier.
    pub id: CategoryId,

    /// The folder display name.
    ///
    /// Hierarchical levels are separated by [`LOCAL_SEPARATOR`].
    /// Once the remote folder exists, this holds the provider-native
    /// path instead.
    pub display_name: String,
}

/// The special folder role.
///
/// A role gives a specific purpose to a remote folder. Providers
/// advertise at most one role per folder, and not every account has
/// a folder for every role.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub enum FolderRole {
    /// The folder that receives incoming messages.
    Inbox,

    /// The folder keeping a copy of sent messages.
    Sent,

    /// The folder keeping unfinished messages.
    Drafts,

    /// The folder used as a trash bin.
    Trash,
}

impl FromStr for FolderRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            inbox if inbox.eq_ignore_ascii_case("inbox") => Ok(Self::Inbox),
            sent if sent.eq_ignore_ascii_case("sent") => Ok(Self::Sent),
            draft if draft.eq_ignore_ascii_case("draft") => Ok(Self::Drafts),
            drafts if drafts.eq_ignore_ascii_case("drafts") => Ok(Self::Drafts),
            trash if trash.eq_ignore_ascii_case("trash") => Ok(Self::Trash),
            unknown => Err(Error::ParseFolderRoleError(unknown.to_owned())),
        }
    }
}

impl fmt::Display for FolderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inbox => write!(f, "inbox"),
            Self::Sent => write!(f, "sent"),
            Self::Drafts => write!(f, "drafts"),
            Self::Trash => write!(f, "trash"),
        }
    }
}
