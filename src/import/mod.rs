// # Import Module
//
// Batch import of Discogs release ids into a collection folder:
//
// - **BatchSource**: reads the CSV into ordered `ImportRequest`s
// - **ImportSession**: reconciles requests against the folder snapshot,
//   inserts what is missing and tallies an `ImportOutcome`
//
// Public API:
// - `read_batch` / `parse_batch`: load requests
// - `ImportSession`: resolve the folder and run the batch
// - `ImportPolicy`: fallback modes and courtesy delay

mod batch_source;
mod error;
mod reconciler;
mod types;

pub use batch_source::{parse_batch, read_batch};
pub use error::ImportError;
pub use reconciler::ImportSession;
pub use types::{
    ImportOutcome, ImportPolicy, ImportRequest, RequestStatus, DEFAULT_COURTESY_DELAY,
    FATAL_EXIT_STATUS, PARTIAL_FAILURE_EXIT_STATUS,
};
