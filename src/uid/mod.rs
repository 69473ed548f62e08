//! # UID module
//!
//! Module dedicated to remote UID resolution.
//!
//! Remote UID mappings are written by the sync pass as it observes
//! the remote mailbox; this layer only reads them to address
//! messages. A UID is meaningful only within the current UID-validity
//! epoch of its folder, which the IMAP session re-checks on every
//! folder selection.

use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

use crate::{message::MessageId, store::Storage, AnyResult};

/// The remote message UID.
pub type Uid = u32;

/// The remote locations of one message: folder native name mapped to
/// the ordered UIDs of the message inside that folder.
///
/// One message legally has zero, one or many entries; label-style
/// providers put the same message in several folders at once. Backed
/// by a [`BTreeMap`] so iteration order is deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "derive", derive(serde::Serialize, serde::Deserialize))]
pub struct UidMap(BTreeMap<String, Vec<Uid>>);

impl UidMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (folder, uid) pair.
    pub fn insert(&mut self, folder: impl ToString, uid: Uid) {
        self.0.entry(folder.to_string()).or_default().push(uid);
    }
}

impl Deref for UidMap {
    type Target = BTreeMap<String, Vec<Uid>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for UidMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, Uid)> for UidMap {
    fn from_iter<T: IntoIterator<Item = (String, Uid)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (folder, uid) in iter {
            map.insert(folder, uid);
        }
        map
    }
}

impl IntoIterator for UidMap {
    type Item = (String, Vec<Uid>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<Uid>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Resolve the current remote locations of a message.
///
/// An empty map is a normal outcome (the message was never synced, or
/// was already removed remotely) and is the primary no-op trigger for
/// flag and move actions.
pub async fn resolve(store: &dyn Storage, message_id: MessageId) -> AnyResult<UidMap> {
    store.uids_by_folder(message_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uids_keep_insertion_order_per_folder() {
        let map = UidMap::from_iter([
            ("INBOX".to_owned(), 9),
            ("INBOX".to_owned(), 5),
            ("Work".to_owned(), 3),
        ]);

        assert_eq!(map["INBOX"], vec![9, 5]);
        assert_eq!(map["Work"], vec![3]);
    }

    #[test]
    fn folders_iterate_in_name_order() {
        let map = UidMap::from_iter([("Work".to_owned(), 1), ("INBOX".to_owned(), 2)]);
        let folders: Vec<_> = map.keys().collect();
        assert_eq!(folders, ["INBOX", "Work"]);
    }
}
