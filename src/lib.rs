// Library exports for the importer binary and integration tests

pub mod collection;
pub mod config;
pub mod discogs;
pub mod import;
