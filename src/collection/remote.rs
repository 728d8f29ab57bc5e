use crate::discogs::{CollectionPage, DiscogsClient, DiscogsError, FolderHandle, Release, RemoteFolder};

/// Remote collection operations the importer depends on (allows mocking for tests)
#[async_trait::async_trait]
pub trait CollectionRemote: Send + Sync {
    /// The user's collection folders, in the order the service lists them
    async fn list_folders(&self) -> Result<Vec<RemoteFolder>, DiscogsError>;

    async fn fetch_release(&self, release_id: u64) -> Result<Release, DiscogsError>;

    /// One page (1-based) of a folder's contents, with the total page count
    async fn fetch_folder_page(
        &self,
        folder: &FolderHandle,
        page: u32,
    ) -> Result<CollectionPage, DiscogsError>;

    async fn insert_release(&self, folder: &FolderHandle, release_id: u64)
        -> Result<(), DiscogsError>;
}

#[async_trait::async_trait]
impl CollectionRemote for DiscogsClient {
    async fn list_folders(&self) -> Result<Vec<RemoteFolder>, DiscogsError> {
        self.get_folders().await
    }

    async fn fetch_release(&self, release_id: u64) -> Result<Release, DiscogsError> {
        self.get_release(release_id).await
    }

    async fn fetch_folder_page(
        &self,
        folder: &FolderHandle,
        page: u32,
    ) -> Result<CollectionPage, DiscogsError> {
        self.get_folder_releases(folder.id, page).await
    }

    async fn insert_release(
        &self,
        folder: &FolderHandle,
        release_id: u64,
    ) -> Result<(), DiscogsError> {
        self.add_release_to_folder(folder.id, release_id).await
    }
}
