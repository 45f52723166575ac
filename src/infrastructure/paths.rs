//! Mapping between the paths a user writes in the layout file and the paths
//! the sandboxed plugin can open.
//!
//! Zellij mounts the directory it was started from (normally `$HOME`) at
//! `/host`, so `~/decks/verbs.json` must be opened as `/host/decks/verbs.json`
//! and shown back to the user in its `~` form.

use std::path::PathBuf;

const HOST_MOUNT: &str = "/host";

/// Where rotated trace files are written.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT).join(".local/share/zellij/flashquiz")
}

/// Rewrites a leading `~` onto the host mount. Other paths pass through.
///
/// ```
/// use flashquiz::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/decks/verbs.json"), "/host/decks/verbs.json");
/// assert_eq!(expand_tilde("decks/verbs.json"), "decks/verbs.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_MOUNT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_MOUNT}{rest}"),
        _ => path.to_string(),
    }
}

/// Inverse of [`expand_tilde`], used when a deck path appears in an error.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_MOUNT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_forms() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a.json"), "/host/a.json");
        assert_eq!(expand_tilde("~alice/a.json"), "~alice/a.json");
        assert_eq!(expand_tilde("/srv/a.json"), "/srv/a.json");
    }

    #[test]
    fn only_whole_mount_component_is_stripped() {
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/host/decks/a.json"), "~/decks/a.json");
        assert_eq!(strip_host_prefix("/hostile/a.json"), "/hostile/a.json");
    }

    #[test]
    fn expand_then_strip_restores_user_path() {
        let user = "~/decks/verbs.json";
        assert_eq!(strip_host_prefix(&expand_tilde(user)), user);
    }

    #[test]
    fn data_dir_is_under_host_mount() {
        assert_eq!(data_dir(), PathBuf::from("/host/.local/share/zellij/flashquiz"));
    }
}
