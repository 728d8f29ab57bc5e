// # Collection Module
//
// Everything that talks to (or remembers) the remote collection:
//
// - **CollectionRemote**: the four remote operations, implemented by `DiscogsClient`
// - **FolderResolver**: folder name → `FolderHandle`, resolved once per session
// - **SnapshotCache**: per-folder set of release ids, built by paging through the folder

mod folder;
mod remote;
mod snapshot;

pub use folder::{find_folder, FolderError, FolderFallback, FolderResolver};
pub use remote::CollectionRemote;
pub use snapshot::{CollectionSnapshot, SnapshotCache, SnapshotFallback};
