use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shield_core::{HistoryEntry, Theme};
use shield_engine::AtomicFileWriter;
use shield_logging::{shield_error, shield_info, shield_warn};

const HISTORY_FILENAME: &str = "scan_history.ron";
const PREFS_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedScan {
    url: String,
    status: String,
    time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedHistory {
    scans: Vec<PersistedScan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    theme: String,
}

/// Reads the persisted scan history. Missing or malformed state yields an
/// empty history, never an error.
pub(crate) fn load_history(state_dir: &Path) -> Vec<HistoryEntry> {
    let path = state_dir.join(HISTORY_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            shield_warn!("Failed to read scan history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let history: PersistedHistory = match ron::from_str(&content) {
        Ok(history) => history,
        Err(err) => {
            shield_warn!("Failed to parse scan history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    shield_info!("Loaded persisted scan history from {:?}", path);
    history
        .scans
        .into_iter()
        .map(|scan| HistoryEntry {
            url: scan.url,
            status: scan.status,
            time: scan.time,
        })
        .collect()
}

/// Overwrites the durable history representation in full. Best-effort: write
/// failures are logged and the session continues.
pub(crate) fn save_history(state_dir: &Path, entries: &[HistoryEntry]) {
    let history = PersistedHistory {
        scans: entries
            .iter()
            .map(|entry| PersistedScan {
                url: entry.url.clone(),
                status: entry.status.clone(),
                time: entry.time.clone(),
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&history, pretty) {
        Ok(text) => text,
        Err(err) => {
            shield_error!("Failed to serialize scan history: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    if let Err(err) = writer.write(HISTORY_FILENAME, &content) {
        shield_error!("Failed to write scan history to {:?}: {}", state_dir, err);
    }
}

/// Reads the persisted display preference, defaulting to light when absent
/// or unrecognized.
pub(crate) fn load_theme(state_dir: &Path) -> Theme {
    let path = state_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Theme::default();
        }
        Err(err) => {
            shield_warn!("Failed to read preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            shield_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    match Theme::from_name(&prefs.theme) {
        Some(theme) => theme,
        None => {
            shield_warn!("Unrecognized theme {:?}; falling back to default", prefs.theme);
            Theme::default()
        }
    }
}

pub(crate) fn save_theme(state_dir: &Path, theme: Theme) {
    let prefs = PersistedPrefs {
        theme: theme.as_str().to_string(),
    };

    let content = match ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new()) {
        Ok(text) => text,
        Err(err) => {
            shield_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    if let Err(err) = writer.write(PREFS_FILENAME, &content) {
        shield_error!("Failed to write preferences to {:?}: {}", state_dir, err);
    }
}
