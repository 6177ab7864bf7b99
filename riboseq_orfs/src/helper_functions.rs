use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Setup logging; `RUST_LOG` wins, `info` otherwise.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// True for zero-byte files. Missing files are an error, not empty.
pub fn is_empty_file(path: &Path) -> PolarsResult<bool> {
    Ok(fs::metadata(path)?.len() == 0)
}

/// Tab-separated table with a header row, every column read as a string.
pub fn read_tsv(file_path: &Path) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(b'\t'))
        .try_into_reader_with_file_path(Some(PathBuf::from(file_path)))?
        .finish()
}

/// Headerless tab-separated table kept as raw text: no type inference and no
/// quote handling, so fields come back exactly as written.
pub fn read_headerless_tsv(file_path: &Path) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(b'\t').with_quote_char(None))
        .try_into_reader_with_file_path(Some(PathBuf::from(file_path)))?
        .finish()
}

/// Writes `df` tab-separated without header or quoting.
pub fn write_headerless_tsv(df: &mut DataFrame, output_path: &Path) -> PolarsResult<()> {
    debug!("Writing {:?} to {}", df.shape(), output_path.display());
    let mut file = File::create(output_path)?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .with_separator(b'\t')
        .with_quote_style(QuoteStyle::Never)
        .finish(df)
}

/// Condition prefix of a replicate file: basename up to the first `-`.
pub fn output_prefix(path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match basename.split_once('-') {
        Some((prefix, _)) => prefix.to_string(),
        None => basename,
    }
}
