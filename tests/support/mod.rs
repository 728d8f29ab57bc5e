pub mod mock_collection;

pub use mock_collection::{Call, MockCollection};

use discogs_import::discogs::FolderHandle;
use discogs_import::import::ImportRequest;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// The "Vinyl" folder of `MockCollection::default()`
#[allow(unused)]
pub fn vinyl_folder() -> FolderHandle {
    FolderHandle {
        name: "Vinyl".to_string(),
        index: 2,
        id: 4821,
    }
}

/// A valid request for `release_id`
#[allow(unused)]
pub fn request(row: usize, release_id: u64) -> ImportRequest {
    ImportRequest {
        row,
        release_id: Some(release_id),
        label: "RCA".to_string(),
        title: Some(format!("Album {}", release_id)),
    }
}
