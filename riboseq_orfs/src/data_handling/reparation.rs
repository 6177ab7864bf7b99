use std::path::PathBuf;

use polars::prelude::*;
use tracing::{debug, error, info};

use crate::helper_functions::{is_empty_file, read_headerless_tsv};
use crate::models::Dataset;

/// One replicate GFF produced by reparation. Rows are opaque and are never
/// interpreted, only stacked.
pub struct ReparationFile {
    pub path: PathBuf,
}

impl ReparationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reparation writes zero-byte files for replicates without ORF calls.
    pub fn is_empty(&self) -> PolarsResult<bool> {
        is_empty_file(&self.path)
    }
}

impl Dataset for ReparationFile {
    fn load(&self) -> PolarsResult<DataFrame> {
        info!("Reading reparation data from {}", self.path.display());
        let df = match read_headerless_tsv(&self.path) {
            Ok(df) => df,
            Err(e) => {
                error!("Failed to read reparation file {}: {}", self.path.display(), e);
                return Err(e);
            }
        };
        debug!("Loaded {:?} from {}", df.shape(), self.path.display());
        Ok(df)
    }
}
