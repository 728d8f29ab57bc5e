use crate::import::error::ImportError;
use crate::import::types::ImportRequest;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const RELEASE_ID_COLUMN: &str = "release_id";
const LABEL_COLUMN: &str = "Label";
const TITLE_COLUMN: &str = "Title";

/// Read every data row of a batch CSV file, in file order
pub fn read_batch(path: &Path) -> Result<Vec<ImportRequest>, ImportError> {
    if !path.is_file() {
        return Err(ImportError::InputFileMissing(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|e| ImportError::Csv(e.into()))?;
    let requests = parse_batch(file)?;
    info!("Read {} row(s) from {}", requests.len(), path.display());
    Ok(requests)
}

/// Parse batch rows from any reader. Columns are matched by header name;
/// a missing column leaves that field empty on every row.
pub fn parse_batch<R: Read>(reader: R) -> Result<Vec<ImportRequest>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let release_id_col = column(RELEASE_ID_COLUMN);
    let label_col = column(LABEL_COLUMN);
    let title_col = column(TITLE_COLUMN);

    if release_id_col.is_none() || label_col.is_none() {
        warn!(
            "⚠️ CSV header is missing '{}' or '{}'; every row will be skipped",
            RELEASE_ID_COLUMN, LABEL_COLUMN
        );
    }

    let mut requests = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let cell = |col: Option<usize>| col.and_then(|c| record.get(c)).map(str::trim);
        let row = i + 1;

        let release_id = cell(release_id_col).and_then(|raw| {
            let parsed = parse_release_id(raw);
            if parsed.is_none() && !raw.is_empty() {
                warn!("⚠️ Row {}: '{}' is not a release id", row, raw);
            }
            parsed
        });

        requests.push(ImportRequest {
            row,
            release_id,
            label: cell(label_col).unwrap_or_default().to_string(),
            title: cell(title_col)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        });
    }

    Ok(requests)
}

/// Accepts "249504" as well as spreadsheet-style "249504.0"
fn parse_release_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(id) = raw.parse::<u64>() {
        return Some(id);
    }

    let (whole, fraction) = raw.split_once('.')?;
    if !fraction.is_empty() && fraction.chars().all(|c| c == '0') {
        whole.parse::<u64>().ok()
    } else {
        None
    }
}
