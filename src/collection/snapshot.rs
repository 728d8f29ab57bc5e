use crate::collection::remote::CollectionRemote;
use crate::discogs::{DiscogsError, FolderHandle};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// What to do when a folder's contents can't be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFallback {
    /// Treat the folder as empty; may insert duplicates
    #[default]
    AssumeEmpty,
    /// Refuse to insert into a folder whose contents are unknown
    SkipInserts,
}

/// Release ids known to be in one folder
#[derive(Debug, Clone, Default)]
pub struct CollectionSnapshot {
    releases: HashSet<u64>,
    complete: bool,
}

impl CollectionSnapshot {
    pub fn contains(&self, release_id: u64) -> bool {
        self.releases.contains(&release_id)
    }

    pub fn insert(&mut self, release_id: u64) -> bool {
        self.releases.insert(release_id)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// False when the folder listing failed and this snapshot is a fallback
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Per-folder snapshots, built on first use and kept for the session
#[derive(Debug, Default)]
pub struct SnapshotCache {
    snapshots: HashMap<usize, CollectionSnapshot>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cached(&self, folder_index: usize) -> bool {
        self.snapshots.contains_key(&folder_index)
    }

    /// Cached snapshot for a folder, without touching the remote
    pub fn get(&self, folder_index: usize) -> Option<&CollectionSnapshot> {
        self.snapshots.get(&folder_index)
    }

    /// Get the snapshot for `folder`, walking every page of it on first use.
    ///
    /// A failed page fetch leaves an empty, incomplete snapshot in the cache;
    /// callers decide what that means through `SnapshotFallback`.
    pub async fn get_snapshot<R: CollectionRemote + ?Sized>(
        &mut self,
        remote: &R,
        folder: &FolderHandle,
    ) -> &mut CollectionSnapshot {
        if !self.snapshots.contains_key(&folder.index) {
            let snapshot = match fetch_all_releases(remote, folder).await {
                Ok(releases) => {
                    info!(
                        "📚 Folder '{}' holds {} release(s)",
                        folder.name,
                        releases.len()
                    );
                    CollectionSnapshot {
                        releases,
                        complete: true,
                    }
                }
                Err(e) => {
                    warn!(
                        "❌ Error checking existing releases in '{}': {}. Folder contents unknown.",
                        folder.name, e
                    );
                    CollectionSnapshot::default()
                }
            };
            self.snapshots.insert(folder.index, snapshot);
        }

        self.snapshots.entry(folder.index).or_default()
    }
}

/// Walk a folder page by page until past the total reported by page 1,
/// or until a page comes back empty.
async fn fetch_all_releases<R: CollectionRemote + ?Sized>(
    remote: &R,
    folder: &FolderHandle,
) -> Result<HashSet<u64>, DiscogsError> {
    let mut releases = HashSet::new();
    let mut page = 1;
    let mut total_pages = None;

    loop {
        let result = remote.fetch_folder_page(folder, page).await?;
        let total = *total_pages.get_or_insert(result.total_pages);
        debug!(
            "Folder '{}' page {}/{}: {} release(s)",
            folder.name,
            page,
            total,
            result.releases.len()
        );

        if result.releases.is_empty() {
            break;
        }
        releases.extend(result.releases);

        page += 1;
        if page > total {
            break;
        }
    }

    Ok(releases)
}
