use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, info};

use crate::data_handling::ribotish::RibotishFile;
use crate::gff::make_orfs_gff3;
use crate::models::{polars_err, OrfRecord};

/// Inclusive ORF length bounds (amino acids). Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthFilter {
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
}

impl LengthFilter {
    pub fn new(min_length: Option<i64>, max_length: Option<i64>) -> PolarsResult<Self> {
        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(polars_err(
                    format!("min_length {} is larger than max_length {}", min, max).into(),
                ));
            }
        }
        Ok(Self { min_length, max_length })
    }

    pub fn keeps(&self, orf_length: i64) -> bool {
        self.min_length.map_or(true, |min| orf_length >= min)
            && self.max_length.map_or(true, |max| orf_length <= max)
    }

    pub fn is_active(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }
}

/// ORFs collected across input files, unique by `ORF_id_gen`.
/// The first occurrence of an id wins.
#[derive(Debug, Default)]
pub struct OrfTable {
    records: Vec<OrfRecord>,
    seen: HashSet<String>,
    duplicates: usize,
}

impl OrfTable {
    /// Appends `batch`, dropping ids already in the table.
    pub fn absorb(mut self, batch: Vec<OrfRecord>) -> Self {
        for record in batch {
            if self.seen.insert(record.orf_id_gen.clone()) {
                self.records.push(record);
            } else {
                self.duplicates += 1;
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn records(&self) -> &[OrfRecord] {
        &self.records
    }

    /// Records passing `filter`, paired with their position in the table.
    /// Positions are taken before filtering, so dropped rows leave gaps.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a LengthFilter,
    ) -> impl Iterator<Item = (usize, &'a OrfRecord)> + 'a {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| filter.keeps(record.orf_length))
    }
}

/// Reads every non-empty ribotish file in order and folds it into one table.
pub fn collect_orfs(files: &[PathBuf]) -> PolarsResult<OrfTable> {
    files.iter().try_fold(OrfTable::default(), |table, path| {
        let file = RibotishFile::new(path);
        if file.is_empty()? {
            info!("Skipping empty file {}", path.display());
            return Ok(table);
        }

        let batch = file.records()?;
        info!("{} ORFs read from {}", batch.len(), path.display());

        let table = table.absorb(batch);
        debug!(
            "Table holds {} ORFs, {} duplicates dropped so far",
            table.len(),
            table.duplicates()
        );
        Ok(table)
    })
}

/// Converts ribotish ORF tables into GFF3 text.
pub fn convert_ribotish(files: &[PathBuf], filter: &LengthFilter) -> PolarsResult<String> {
    let table = collect_orfs(files)?;

    if let Some(min) = filter.min_length {
        info!("Length filter set to min: {}", min);
    }
    if let Some(max) = filter.max_length {
        info!("Length filter set to max: {}", max);
    }

    let kept: Vec<(usize, &OrfRecord)> = table.filtered(filter).collect();
    if filter.is_active() {
        info!(
            "{} of {} ORFs pass the length filter",
            kept.len(),
            table.len()
        );
    }

    Ok(make_orfs_gff3(kept))
}

/// Converts `files` and writes the GFF3 to `output_path`. The file is only
/// created once conversion succeeded; no surviving ORFs give an empty file.
pub fn write_ribotish_gff(
    files: &[PathBuf],
    filter: &LengthFilter,
    output_path: &Path,
) -> PolarsResult<()> {
    let gff = convert_ribotish(files, filter)?;
    fs::write(output_path, gff)?;
    info!("GFF3 written to {}", output_path.display());
    Ok(())
}
