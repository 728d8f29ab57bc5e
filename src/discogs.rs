pub mod client;
pub mod models;

pub use client::{DiscogsClient, DiscogsError};
pub use models::{CollectionPage, FolderHandle, Release, RemoteFolder, UNCATEGORIZED_FOLDER_ID};
