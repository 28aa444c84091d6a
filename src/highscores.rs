#![warn(clippy::all, clippy::pedantic)]

//! Top-ten score table on top of an opaque key-value store.

use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::ConfigError;
use crate::config::loader::{read_toml, write_toml};

pub const MAX_SCORES: usize = 10;
const SCORES_KEY: &str = "high_scores";

/// String key-value persistence. The engine never depends on its layout.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

/// A string map persisted as a TOML file, rewritten on every `put`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let values = if path.exists() {
            read_toml(&path)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        self.values.insert(key.to_owned(), value);
        write_toml(&self.path, &self.values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    pub level: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl ScoreEntry {
    fn encode(&self) -> String {
        format!("{},{},{}", self.score, self.level, self.timestamp)
    }

    fn decode(raw: &str) -> Option<Self> {
        let mut parts = raw.split(',');
        let score = parts.next()?.trim().parse().ok()?;
        let level = parts.next()?.trim().parse().ok()?;
        let timestamp = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            score,
            level,
            timestamp,
        })
    }
}

pub struct HighScores<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HighScores<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored entries, best first. Malformed records are skipped.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        let Some(raw) = self.store.get(SCORES_KEY) else {
            return Vec::new();
        };
        raw.split(';')
            .filter(|record| !record.is_empty())
            .filter_map(|record| {
                let entry = ScoreEntry::decode(record);
                if entry.is_none() {
                    warn!("Skipping malformed score record {record:?}");
                }
                entry
            })
            .collect()
    }

    pub fn add_score(&mut self, score: u32, level: u32) -> Result<(), ConfigError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        self.add_entry(ScoreEntry {
            score,
            level,
            timestamp,
        })
    }

    /// Inserts an entry and keeps the best `MAX_SCORES`. Equal scores keep
    /// their insertion order.
    pub fn add_entry(&mut self, entry: ScoreEntry) -> Result<(), ConfigError> {
        let mut entries = self.entries();
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_SCORES);

        let encoded = entries
            .iter()
            .map(ScoreEntry::encode)
            .collect::<Vec<_>>()
            .join(";");
        debug!("Saving {} high score(s)", entries.len());
        self.store.put(SCORES_KEY, encoded)
    }

    /// Whether `score` would make it onto the table.
    pub fn is_high_score(&self, score: u32) -> bool {
        let entries = self.entries();
        entries.len() < MAX_SCORES || entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// 1-based position `score` would take; ties rank below existing entries.
    pub fn rank(&self, score: u32) -> usize {
        let entries = self.entries();
        entries
            .iter()
            .position(|entry| score > entry.score)
            .map_or(entries.len() + 1, |index| index + 1)
    }
}
