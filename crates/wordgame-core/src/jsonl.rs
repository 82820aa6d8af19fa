//! Line-delimited JSON reading shared by the lexicon and history loaders.

use std::io::BufRead;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, WordGameError};

/// Builds the parse error variant for a given file kind.
pub(crate) type ParseErrorFn = fn(&Path, usize, serde_json::Error) -> WordGameError;

/// Parse every line of `reader` as a `T`.
///
/// Returns each record with its 1-based line number. A final newline ends the
/// last record; any other empty line is malformed. The first malformed line
/// aborts the whole read.
pub(crate) fn read_records<T, R>(
    reader: R,
    path: &Path,
    parse_error: ParseErrorFn,
) -> Result<Vec<(usize, T)>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| WordGameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record = serde_json::from_str(&line).map_err(|e| parse_error(path, line_no, e))?;
        records.push((line_no, record));
    }
    Ok(records)
}
