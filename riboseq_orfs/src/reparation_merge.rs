use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::data_handling::reparation::ReparationFile;
use crate::helper_functions::{output_prefix, write_headerless_tsv};
use crate::models::Dataset;

pub const REPARATION_SUFFIX: &str = "reparation.gff";

/// `<output_folder>/<prefix>.reparation.gff`, prefix taken from `first_file`.
pub fn merged_output_path(first_file: &Path, output_folder: &Path) -> PathBuf {
    output_folder.join(format!("{}.{}", output_prefix(first_file), REPARATION_SUFFIX))
}

/// Stacks the rows of all non-empty reparation replicates, in file order.
/// Returns `None` when every file is empty.
pub fn concat_reparation(files: &[PathBuf]) -> PolarsResult<Option<DataFrame>> {
    let mut merged: Option<DataFrame> = None;

    for path in files {
        let file = ReparationFile::new(path);
        if file.is_empty()? {
            info!("Skipping empty file {}", path.display());
            continue;
        }

        let df = file.load()?;
        merged = match merged {
            None => Some(df),
            Some(mut acc) => {
                acc.vstack_mut(&df)?;
                Some(acc)
            }
        };
    }

    if let Some(df) = merged.as_ref() {
        debug!("Merged shape: {:?}", df.shape());
    }
    Ok(merged)
}

/// Merges replicate files of one condition into a single GFF in
/// `output_folder`. Nothing is written when all inputs are empty.
pub fn merge_reparation_files(
    files: &[PathBuf],
    output_folder: &Path,
) -> PolarsResult<Option<PathBuf>> {
    let Some(first_file) = files.first() else {
        warn!("No reparation files given, nothing to merge");
        return Ok(None);
    };

    let Some(mut merged) = concat_reparation(files)? else {
        warn!("All {} reparation files are empty, no output written", files.len());
        return Ok(None);
    };

    let output_path = merged_output_path(first_file, output_folder);
    write_headerless_tsv(&mut merged, &output_path)?;
    info!("Wrote {} rows to {}", merged.height(), output_path.display());

    Ok(Some(output_path))
}
