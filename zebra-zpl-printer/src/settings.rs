//! Persistent settings record (`~/Documents/app_settings.json`).
//!
//! The store owns only the file location. Records are plain values the caller
//! loads, mutates and hands back to [`SettingsStore::save`]; nothing is cached
//! between calls. Access is assumed exclusive to one process, so an external
//! writer racing a batch is last-writer-wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{DEFAULT_IP, DEFAULT_PORT, SETTINGS_DIR, SETTINGS_FILE};
use crate::error::{LabelError, SettingsError};

/// Flat string key-value record. Absent keys stay absent on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_number: Option<String>,
}

impl SettingsRecord {
    pub fn host(&self) -> &str {
        self.ip.as_deref().unwrap_or(DEFAULT_IP)
    }

    /// Printer port. A stored value outside 1..=65535 is an error, not a
    /// fallback to the default.
    pub fn port_number(&self) -> Result<u16, LabelError> {
        match self.port.as_deref() {
            None => Ok(DEFAULT_PORT),
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => Ok(port),
                _ => Err(LabelError::InvalidPort(raw.to_string())),
            },
        }
    }

    pub fn company(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    pub fn ra_code(&self) -> &str {
        self.ra.as_deref().unwrap_or("")
    }

    /// Who provides the control, printed under the company name.
    pub fn control_by(&self) -> &str {
        self.control.as_deref().unwrap_or("")
    }
}

/// The five operator-editable fields. `label_number` is never part of an
/// edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEdit {
    pub ip: String,
    pub port: String,
    pub company_name: String,
    pub ra: String,
    pub control: String,
}

impl SettingsEdit {
    /// Current values with defaults filled in, as an edit form starts out.
    pub fn from_record(record: &SettingsRecord) -> Self {
        Self {
            ip: record.host().to_string(),
            port: record
                .port
                .clone()
                .unwrap_or_else(|| DEFAULT_PORT.to_string()),
            company_name: record.company().to_string(),
            ra: record.ra_code().to_string(),
            control: record.control_by().to_string(),
        }
    }

    fn apply_to(self, record: &mut SettingsRecord) {
        record.ip = Some(self.ip);
        record.port = Some(self.port);
        record.company_name = Some(self.company_name);
        record.ra = Some(self.ra);
        record.control = Some(self.control);
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/Documents/app_settings.json`.
    pub fn default_location() -> Result<Self, SettingsError> {
        let home = dirs::home_dir().ok_or(SettingsError::NoHomeDir)?;
        Ok(Self::new(home.join(SETTINGS_DIR).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the record. A missing file yields an empty record; an unreadable
    /// or malformed one is logged and also yields an empty record.
    pub fn load(&self) -> SettingsRecord {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                return SettingsRecord::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read settings");
                return SettingsRecord::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to parse settings");
            SettingsRecord::default()
        })
    }

    /// Overwrite the file with the full record.
    ///
    /// The JSON goes to a sibling `.tmp` file first and is renamed into place,
    /// so the previous settings survive a failed write.
    pub fn save(&self, record: &SettingsRecord) -> Result<(), SettingsError> {
        let json = to_pretty_json(record)?;
        let write_err = |source: std::io::Error| SettingsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            write_err(e)
        })?;

        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Replace the editable fields, keeping the label counter, and persist.
    pub fn apply_edit(&self, edit: SettingsEdit) -> Result<SettingsRecord, SettingsError> {
        let mut record = self.load();
        edit.apply_to(&mut record);
        self.save(&record)?;
        Ok(record)
    }
}

// 4-space indentation
fn to_pretty_json(record: &SettingsRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(256);
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    record.serialize(&mut ser)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_record() -> SettingsRecord {
        SettingsRecord {
            ip: Some("10.0.0.5".into()),
            port: Some("9100".into()),
            company_name: Some("Acme".into()),
            ra: Some("RA1".into()),
            control: Some("CTRL".into()),
            label_number: Some("000100".into()),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("app_settings.json"));
        assert!(!store.exists());
        assert_eq!(store.load(), SettingsRecord::default());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app_settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = SettingsStore::new(&path);
        assert!(store.exists());
        assert_eq!(store.load(), SettingsRecord::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("app_settings.json"));
        let record = full_record();
        store.save(&record).unwrap();
        assert_eq!(store.load(), record);

        let partial = SettingsRecord {
            ra: Some("X".into()),
            ..Default::default()
        };
        store.save(&partial).unwrap();
        assert_eq!(store.load(), partial);
    }

    #[test]
    fn saved_file_is_four_space_indented_strings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app_settings.json");
        let store = SettingsStore::new(&path);
        store.save(&full_record()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"ip\": \"10.0.0.5\",\n"));
        assert!(text.contains("    \"label_number\": \"000100\"\n}"));
        assert!(!tmp.path().join("app_settings.json.tmp").exists());
    }

    #[test]
    fn save_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("Documents").join("app_settings.json"));
        store.save(&full_record()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn save_into_a_file_path_fails_loudly() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = SettingsStore::new(blocker.join("app_settings.json"));
        let err = store.save(&full_record()).unwrap_err();
        assert!(matches!(err, SettingsError::Write { .. }));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let record = SettingsRecord::default();
        assert_eq!(record.host(), "192.168.1.1");
        assert_eq!(record.port_number().unwrap(), 9100);
        assert_eq!(record.company(), "");
        assert_eq!(record.ra_code(), "");
        assert_eq!(record.control_by(), "");
    }

    #[test]
    fn bad_port_is_rejected() {
        for raw in ["abc", "0", "70000", ""] {
            let record = SettingsRecord {
                port: Some(raw.into()),
                ..Default::default()
            };
            assert!(matches!(record.port_number(), Err(LabelError::InvalidPort(_))), "{raw}");
        }
    }

    #[test]
    fn edit_keeps_label_number() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("app_settings.json"));
        store.save(&full_record()).unwrap();

        let mut edit = SettingsEdit::from_record(&store.load());
        edit.company_name = "Globex".into();
        let saved = store.apply_edit(edit).unwrap();

        assert_eq!(saved.company(), "Globex");
        assert_eq!(saved.label_number.as_deref(), Some("000100"));
        assert_eq!(store.load(), saved);
    }

    #[test]
    fn edit_form_starts_from_defaults() {
        let edit = SettingsEdit::from_record(&SettingsRecord::default());
        assert_eq!(edit.ip, "192.168.1.1");
        assert_eq!(edit.port, "9100");
        assert_eq!(edit.company_name, "");
    }
}
