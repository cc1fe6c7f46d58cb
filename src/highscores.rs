//! Leaderboard of past runs
//!
//! Persisted to LocalStorage, tracks the top 10 scores. Storage failure
//! in either direction is non-fatal: loads fall back to an empty board,
//! saves are best-effort.

use serde::{Deserialize, Serialize};

/// Maximum number of records to keep
pub const MAX_RECORDS: usize = 10;

/// One finished run, immutable once recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique id (creation timestamp in ms)
    pub id: u64,
    /// Final score
    pub score: u64,
    /// Wave reached
    pub wave: u32,
    /// Unix timestamp (ms) when the run ended
    pub timestamp: f64,
}

/// Capped, score-sorted record table
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub records: Vec<GameRecord>,
}

impl Leaderboard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "corn_battles_records";

    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a finished run: append, re-sort descending, truncate.
    /// Returns the rank achieved (1-indexed) or None if the record was
    /// pushed off the end of the table.
    pub fn add_record(&mut self, score: u64, wave: u32, timestamp: f64) -> Option<usize> {
        let id = timestamp as u64;
        self.records.push(GameRecord {
            id,
            score,
            wave,
            timestamp,
        });
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
        self.records.truncate(MAX_RECORDS);
        self.records
            .iter()
            .position(|r| r.id == id)
            .map(|pos| pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.records.first().map(|r| r.score)
    }

    /// Load records from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(board) = serde_json::from_str::<Leaderboard>(&json) {
                    log::info!("Loaded {} records", board.records.len());
                    return board;
                }
                log::warn!("Record table corrupt, starting fresh");
            }
        }

        log::info!("No records found, starting fresh");
        Self::new()
    }

    /// Save records to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Records saved ({} entries)", self.records.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format a record timestamp as a relative date string
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp: f64) -> String {
    let now = js_sys::Date::now();
    let diff_days = (now - timestamp) / 1000.0 / 60.0 / 60.0 / 24.0;

    if diff_days >= 7.0 {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
        format!(
            "{}/{}/{}",
            date.get_month() + 1,
            date.get_date(),
            date.get_full_year() % 100
        )
    } else if diff_days >= 1.0 {
        let days = diff_days.floor() as i32;
        if days == 1 {
            "Yesterday".to_string()
        } else {
            format!("{} days ago", days)
        }
    } else {
        "Today".to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(_timestamp: f64) -> String {
    "N/A".to_string()
}
