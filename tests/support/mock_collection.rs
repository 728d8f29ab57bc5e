use discogs_import::collection::CollectionRemote;
use discogs_import::discogs::{CollectionPage, DiscogsError, FolderHandle, Release, RemoteFolder};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Every remote call the mock has seen, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListFolders,
    FetchRelease(u64),
    FetchPage { folder_id: u64, page: u32 },
    Insert { folder_id: u64, release_id: u64 },
}

/// In-memory Discogs collection for testing
///
/// Folders hold release ids and are served in pages of `page_size`.
/// Individual operations can be made to fail.
pub struct MockCollection {
    folders: Vec<RemoteFolder>,
    contents: Mutex<HashMap<u64, Vec<u64>>>,
    page_size: usize,
    /// Reported instead of the real page count, to mimic an inconsistent API
    reported_pages: Option<u32>,
    fail_folder_list: bool,
    failing_pages: HashSet<u32>,
    failing_releases: HashSet<u64>,
    failing_inserts: HashSet<u64>,
    calls: Mutex<Vec<Call>>,
}

impl Default for MockCollection {
    fn default() -> Self {
        MockCollection {
            folders: vec![
                folder(0, "All"),
                folder(1, "Uncategorized"),
                folder(4821, "Vinyl"),
            ],
            contents: Mutex::new(HashMap::new()),
            page_size: 100,
            reported_pages: None,
            fail_folder_list: false,
            failing_pages: HashSet::new(),
            failing_releases: HashSet::new(),
            failing_inserts: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

fn folder(id: u64, name: &str) -> RemoteFolder {
    RemoteFolder {
        id,
        name: name.to_string(),
        count: 0,
    }
}

#[allow(unused)]
impl MockCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(self, folder_id: u64, releases: &[u64]) -> Self {
        self.contents
            .lock()
            .unwrap()
            .insert(folder_id, releases.to_vec());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_reported_pages(mut self, pages: u32) -> Self {
        self.reported_pages = Some(pages);
        self
    }

    pub fn failing_folder_list(mut self) -> Self {
        self.fail_folder_list = true;
        self
    }

    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn failing_release(mut self, release_id: u64) -> Self {
        self.failing_releases.insert(release_id);
        self
    }

    pub fn failing_insert(mut self, release_id: u64) -> Self {
        self.failing_inserts.insert(release_id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Insert { release_id, .. } => Some(release_id),
                _ => None,
            })
            .collect()
    }

    pub fn page_fetches(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::FetchPage { .. }))
            .count()
    }

    pub fn folder_contents(&self, folder_id: u64) -> Vec<u64> {
        self.contents
            .lock()
            .unwrap()
            .get(&folder_id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl CollectionRemote for MockCollection {
    async fn list_folders(&self) -> Result<Vec<RemoteFolder>, DiscogsError> {
        self.record(Call::ListFolders);
        if self.fail_folder_list {
            return Err(DiscogsError::InvalidApiKey);
        }
        Ok(self.folders.clone())
    }

    async fn fetch_release(&self, release_id: u64) -> Result<Release, DiscogsError> {
        self.record(Call::FetchRelease(release_id));
        if self.failing_releases.contains(&release_id) {
            return Err(DiscogsError::NotFound);
        }
        Ok(Release {
            id: release_id,
            title: format!("Release {}", release_id),
            year: Some(1987),
        })
    }

    async fn fetch_folder_page(
        &self,
        folder: &FolderHandle,
        page: u32,
    ) -> Result<CollectionPage, DiscogsError> {
        self.record(Call::FetchPage {
            folder_id: folder.id,
            page,
        });
        if self.failing_pages.contains(&page) {
            return Err(DiscogsError::RateLimit);
        }

        let releases = self.folder_contents(folder.id);
        let actual_pages = releases.len().div_ceil(self.page_size).max(1) as u32;
        let start = (page as usize - 1) * self.page_size;

        Ok(CollectionPage {
            releases: releases
                .into_iter()
                .skip(start)
                .take(self.page_size)
                .collect(),
            total_pages: self.reported_pages.unwrap_or(actual_pages),
        })
    }

    async fn insert_release(
        &self,
        folder: &FolderHandle,
        release_id: u64,
    ) -> Result<(), DiscogsError> {
        self.record(Call::Insert {
            folder_id: folder.id,
            release_id,
        });
        if self.failing_inserts.contains(&release_id) {
            return Err(DiscogsError::RateLimit);
        }
        self.contents
            .lock()
            .unwrap()
            .entry(folder.id)
            .or_default()
            .push(release_id);
        Ok(())
    }
}
