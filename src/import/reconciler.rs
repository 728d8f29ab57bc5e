use crate::collection::{CollectionRemote, FolderResolver, SnapshotCache, SnapshotFallback};
use crate::discogs::FolderHandle;
use crate::import::error::ImportError;
use crate::import::types::{ImportOutcome, ImportPolicy, ImportRequest, RequestStatus};
use tracing::{error, info, warn};

/// One import run against one remote collection.
///
/// Owns the resolved folder and the per-folder snapshots for as long as the
/// session lives, so repeated batches reuse both without re-fetching.
pub struct ImportSession<'a, R: CollectionRemote + ?Sized> {
    remote: &'a R,
    policy: ImportPolicy,
    folders: FolderResolver,
    snapshots: SnapshotCache,
}

impl<'a, R: CollectionRemote + ?Sized> ImportSession<'a, R> {
    pub fn new(remote: &'a R, policy: ImportPolicy) -> Self {
        Self {
            remote,
            policy,
            folders: FolderResolver::new(policy.folder_fallback),
            snapshots: SnapshotCache::new(),
        }
    }

    pub fn snapshots(&self) -> &SnapshotCache {
        &self.snapshots
    }

    /// Resolve the target folder (once per session)
    pub async fn resolve_folder(&mut self, name: &str) -> Result<FolderHandle, ImportError> {
        Ok(self.folders.resolve_folder(self.remote, name).await?)
    }

    /// Resolve `folder_name`, then import every request into it
    pub async fn import(
        &mut self,
        requests: &[ImportRequest],
        folder_name: &str,
    ) -> Result<(FolderHandle, ImportOutcome), ImportError> {
        let folder = self.resolve_folder(folder_name).await?;
        let outcome = self.run(requests, &folder).await;
        Ok((folder, outcome))
    }

    /// Import `requests` in order. Individual failures are counted, never returned.
    pub async fn run(
        &mut self,
        requests: &[ImportRequest],
        folder: &FolderHandle,
    ) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();

        for request in requests {
            let status = self.import_one(request, folder).await;
            outcome.record(status);

            if status == RequestStatus::Added && !self.policy.courtesy_delay.is_zero() {
                tokio::time::sleep(self.policy.courtesy_delay).await;
            }
        }

        info!(
            "Processed {} row(s): {} added, {} already present, {} failed, {} skipped",
            outcome.total_rows,
            outcome.succeeded,
            outcome.duplicates,
            outcome.failed,
            outcome.skipped
        );
        outcome
    }

    async fn import_one(
        &mut self,
        request: &ImportRequest,
        folder: &FolderHandle,
    ) -> RequestStatus {
        let release_id = match request.release_id {
            Some(id) if request.is_valid() => id,
            _ => {
                warn!(
                    "⚠️ Missing release_id or Label for {} (row {}), skipped.",
                    request.display_title(),
                    request.row
                );
                return RequestStatus::Skipped;
            }
        };

        let release = match self.remote.fetch_release(release_id).await {
            Ok(release) => release,
            Err(e) => {
                error!("❌ Error adding {}: {}", release_id, e);
                return RequestStatus::Failed;
            }
        };
        let name = release.display_name();
        info!("Adding {} to '{}'...", name, folder.name);

        let snapshot = self.snapshots.get_snapshot(self.remote, folder).await;
        if snapshot.contains(release_id) {
            info!("🔄 {} is already in the collection, skipping.", name);
            return RequestStatus::Duplicate;
        }
        if !snapshot.is_complete()
            && self.policy.snapshot_fallback == SnapshotFallback::SkipInserts
        {
            error!(
                "❌ Contents of '{}' are unknown, not adding {}.",
                folder.name, name
            );
            return RequestStatus::Failed;
        }

        match self.remote.insert_release(folder, release_id).await {
            Ok(()) => {
                snapshot.insert(release_id);
                info!("✅ Added: {}", name);
                RequestStatus::Added
            }
            Err(e) => {
                error!("❌ Error adding {}: {}", name, e);
                RequestStatus::Failed
            }
        }
    }
}
