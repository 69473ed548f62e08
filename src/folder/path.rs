//! # Folder path module
//!
//! Module dedicated to provider-native folder path translation.

use super::LOCAL_SEPARATOR;

/// Translates a local folder display name to a provider-native IMAP
/// path.
///
/// Levels of the display name are separated by `/`; the provider
/// advertises its own hierarchy separator and an optional namespace
/// prefix. `A/B` with separator `.` and prefix `INBOX.` becomes
/// `INBOX.A.B`.
///
/// The translation is pure and deterministic. It avoids doubling the
/// separator when the prefix already ends with it, and leaves the
/// name untouched when it already starts with the prefix (a name that
/// went through a previous translation, e.g. on retry). No reverse
/// translation exists.
///
/// Callers are expected to skip this translation entirely for
/// virtual-namespace providers (see
/// [`Provider::uses_virtual_folder_namespace`](crate::account::Provider::uses_virtual_folder_namespace)).
pub fn imap_folder_path(display_name: &str, separator: char, prefix: &str) -> String {
    let name = display_name
        .trim_matches(LOCAL_SEPARATOR)
        .replace(LOCAL_SEPARATOR, &separator.to_string());

    if prefix.is_empty() {
        return name;
    }

    if name.starts_with(prefix) {
        return name;
    }

    if prefix.ends_with(separator) {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}{separator}{name}")
    }
}
