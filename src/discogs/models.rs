use serde::Deserialize;

/// Folder id Discogs reserves for "Uncategorized" in every collection
pub const UNCATEGORIZED_FOLDER_ID: u64 = 1;

/// A collection folder as listed by Discogs
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RemoteFolder {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Resolved target folder for an import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderHandle {
    pub name: String,
    /// Position in the user's folder list; snapshots are keyed by this
    pub index: usize,
    /// Folder id used in collection URLs
    pub id: u64,
}

impl FolderHandle {
    /// The folder used when the configured name can't be resolved
    pub fn uncategorized() -> Self {
        Self {
            name: "Uncategorized".to_string(),
            index: 0,
            id: UNCATEGORIZED_FOLDER_ID,
        }
    }
}

/// Display metadata for a release
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: u64,
    pub title: String,
    pub year: Option<u32>,
}

impl Release {
    /// "Title (Year)" as shown in status lines
    pub fn display_name(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

/// One page of a collection folder
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage {
    pub releases: Vec<u64>,
    pub total_pages: u32,
}

/// Discogs API pagination info
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaginationInfo {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub items: u32,
}
