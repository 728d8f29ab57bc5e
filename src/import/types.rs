use crate::collection::{FolderFallback, SnapshotFallback};
use std::time::Duration;

/// Pause after every successful insert, to stay under the Discogs rate limit
pub const DEFAULT_COURTESY_DELAY: Duration = Duration::from_secs(4);

pub const PARTIAL_FAILURE_EXIT_STATUS: u8 = 2;
pub const FATAL_EXIT_STATUS: u8 = 1;

/// One row of the batch file
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRequest {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub release_id: Option<u64>,
    pub label: String,
    /// Only used in status lines
    pub title: Option<String>,
}

impl ImportRequest {
    /// Both the release id and the label must be present
    pub fn is_valid(&self) -> bool {
        matches!(self.release_id, Some(id) if id > 0) && !self.label.trim().is_empty()
    }

    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Unknown")
    }
}

/// How the session recovers from failed lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportPolicy {
    pub folder_fallback: FolderFallback,
    pub snapshot_fallback: SnapshotFallback,
    pub courtesy_delay: Duration,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self {
            folder_fallback: FolderFallback::default(),
            snapshot_fallback: SnapshotFallback::default(),
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        }
    }
}

/// What happened to a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// Missing release id or label; never reached the remote
    Skipped,
    Added,
    Duplicate,
    Failed,
}

/// Tally of one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub total_rows: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub duplicates: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ImportOutcome {
    pub fn record(&mut self, status: RequestStatus) {
        self.total_rows += 1;
        match status {
            RequestStatus::Skipped => self.skipped += 1,
            RequestStatus::Added => {
                self.attempted += 1;
                self.succeeded += 1;
            }
            RequestStatus::Duplicate => {
                self.attempted += 1;
                self.duplicates += 1;
            }
            RequestStatus::Failed => {
                self.attempted += 1;
                self.failed += 1;
            }
        }
    }

    /// Process exit status: 0 when nothing failed, 2 when at least one request failed
    pub fn exit_status(&self) -> u8 {
        if self.failed == 0 {
            0
        } else {
            PARTIAL_FAILURE_EXIT_STATUS
        }
    }
}
