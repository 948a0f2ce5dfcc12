//! Persisted Client State
//!
//! Thin wrapper over `window.localStorage` with fixed, versioned key names.
//! Values are opaque strings or JSON blobs with no integrity guarantee: a
//! missing value or a failed decode falls back to the empty default. The
//! auth token is the only cross-view shared mutable value; writes are
//! user-triggered and last-write-wins.

use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "taskhub.token.v1";
const THEME_KEY: &str = "taskhub.theme.v1";
const AVATAR_KEY: &str = "taskhub.avatar.v1";
const NOTES_KEY: &str = "taskhub.notes.v1";

/// Ad-hoc personal note pinned to a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarNote {
    pub id: u64,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub text: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// ========================
// Auth token
// ========================

pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn save_token(token: &str) {
    write(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_KEY);
}

// ========================
// UI preferences
// ========================

pub fn theme() -> String {
    read(THEME_KEY).unwrap_or_else(|| "light".to_string())
}

pub fn save_theme(theme: &str) {
    write(THEME_KEY, theme);
}

pub fn avatar() -> Option<String> {
    read(AVATAR_KEY)
}

pub fn save_avatar(data_url: &str) {
    write(AVATAR_KEY, data_url);
}

pub fn clear_avatar() {
    remove(AVATAR_KEY);
}

// ========================
// Calendar notes
// ========================

pub fn calendar_notes() -> Vec<CalendarNote> {
    read(NOTES_KEY)
        .map(|raw| decode_notes(&raw))
        .unwrap_or_default()
}

pub fn save_calendar_notes(notes: &[CalendarNote]) {
    if let Some(encoded) = encode_notes(notes) {
        write(NOTES_KEY, &encoded);
    }
}

fn decode_notes(raw: &str) -> Vec<CalendarNote> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_notes(notes: &[CalendarNote]) -> Option<String> {
    serde_json::to_string(notes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_blob_round_trips() {
        let notes = vec![
            CalendarNote {
                id: 1,
                date: "2026-01-23".into(),
                text: "Prep demo".into(),
            },
            CalendarNote {
                id: 2,
                date: "2026-01-30".into(),
                text: "Release cut".into(),
            },
        ];
        let encoded = encode_notes(&notes).unwrap();
        assert_eq!(decode_notes(&encoded), notes);
    }

    #[test]
    fn corrupt_notes_blob_falls_back_to_empty() {
        assert!(decode_notes("not json").is_empty());
        assert!(decode_notes(r#"{"oops":true}"#).is_empty());
        assert!(decode_notes("").is_empty());
    }
}
