use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, error, info};

use crate::helper_functions::{is_empty_file, read_tsv};
use crate::models::{polars_err, Dataset, GenomePos, OrfRecord};

/// Ribotish column -> name used downstream.
pub const RIBOTISH_COLUMNS: [(&str, &str); 10] = [
    ("GenomePos", "ORF_id_gen"),
    ("AALen", "ORF_length"),
    ("Gid", "gene_id"),
    ("Symbol", "gene_symbol"),
    ("Tid", "transcript_id"),
    ("StartCodon", "start_codon"),
    ("TisType", "tis_type"),
    ("TISPvalue", "tis_pvalue"),
    ("RiboPvalue", "ribo_pvalue"),
    ("FisherPvalue", "fisher_pvalue"),
];

/// A ribotish ORF table (`*_pred.txt`), tab-separated with a header.
pub struct RibotishFile {
    pub path: PathBuf,
}

/// Keep only the columns of interest, renamed.
fn select_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    for (source, _) in RIBOTISH_COLUMNS {
        if !df.get_column_names().iter().any(|c| c.as_str() == source) {
            return Err(PolarsError::ColumnNotFound(
                format!("required ribotish column '{}' not found", source).into(),
            ));
        }
    }

    let selection: Vec<Expr> = RIBOTISH_COLUMNS
        .iter()
        .map(|&(source, target)| col(source).alias(target))
        .collect();

    df.lazy().select(selection).collect()
}

fn str_column<'a>(df: &'a DataFrame, name: &str) -> PolarsResult<&'a StringChunked> {
    df.column(name)?.str()
}

impl RibotishFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_empty(&self) -> PolarsResult<bool> {
        is_empty_file(&self.path)
    }

    /// Loads the table and turns every row into an `OrfRecord`.
    /// A row whose position or length cannot be parsed fails the whole file.
    pub fn records(&self) -> PolarsResult<Vec<OrfRecord>> {
        let df = self.load()?;
        to_records(&df, &self.path)
    }
}

impl Dataset for RibotishFile {
    fn load(&self) -> PolarsResult<DataFrame> {
        info!("Reading ribotish data from {}", self.path.display());
        let df_original = match read_tsv(&self.path) {
            Ok(df) => df,
            Err(e) => {
                error!("Failed to read ribotish file {}: {}", self.path.display(), e);
                return Err(e);
            }
        };
        debug!("Columns: {:?}", df_original.get_column_names());

        let df = select_columns(df_original)?;
        debug!("Loaded {} rows from {}", df.height(), self.path.display());
        Ok(df)
    }
}

/// Row-wise conversion of a selected ribotish frame.
pub fn to_records(df: &DataFrame, source: &Path) -> PolarsResult<Vec<OrfRecord>> {
    let ids = str_column(df, "ORF_id_gen")?;
    let lengths = str_column(df, "ORF_length")?;
    let gene_ids = str_column(df, "gene_id")?;
    let symbols = str_column(df, "gene_symbol")?;
    let transcripts = str_column(df, "transcript_id")?;
    let start_codons = str_column(df, "start_codon")?;
    let tis_types = str_column(df, "tis_type")?;
    let tis_pvalues = str_column(df, "tis_pvalue")?;
    let ribo_pvalues = str_column(df, "ribo_pvalue")?;
    let fisher_pvalues = str_column(df, "fisher_pvalue")?;

    let text = |ca: &StringChunked, i: usize| ca.get(i).unwrap_or_default().to_string();

    (0..df.height())
        .map(|i| {
            let row = i + 1;
            let orf_id_gen = ids.get(i).ok_or_else(|| {
                polars_err(format!("{}: row {}: empty GenomePos", source.display(), row).into())
            })?;
            let pos: GenomePos = orf_id_gen.parse().map_err(|e| {
                polars_err(format!("{}: row {}: {}", source.display(), row, e).into())
            })?;
            let length = lengths.get(i).unwrap_or_default();
            let orf_length: i64 = length.trim().parse().map_err(|_| {
                polars_err(
                    format!(
                        "{}: row {}: AALen '{}' is not an integer",
                        source.display(),
                        row,
                        length
                    )
                    .into(),
                )
            })?;

            Ok(OrfRecord {
                orf_id_gen: orf_id_gen.to_string(),
                pos,
                orf_length,
                gene_id: text(gene_ids, i),
                gene_symbol: text(symbols, i),
                transcript_id: text(transcripts, i),
                start_codon: text(start_codons, i),
                tis_type: text(tis_types, i),
                tis_pvalue: text(tis_pvalues, i),
                ribo_pvalue: text(ribo_pvalues, i),
                fisher_pvalue: text(fisher_pvalues, i),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strand;
    use polars::df;

    fn selected() -> DataFrame {
        selected_with_ids(&["chr1:100-200:+", "chrX:5-65:-"])
    }

    fn selected_with_ids(ids: &[&str]) -> DataFrame {
        df![
            "ORF_id_gen" => ids,
            "ORF_length" => &["33", "20"],
            "gene_id" => &["ENSG1", "ENSG2"],
            "gene_symbol" => &["ABC1", "XYZ2"],
            "transcript_id" => &["ENST1", "ENST2"],
            "start_codon" => &["ATG", "CTG"],
            "tis_type" => &["5'UTR", "Annotated"],
            "tis_pvalue" => &["0.001", "1e-05"],
            "ribo_pvalue" => &["0.02", "0.5"],
            "fisher_pvalue" => &["0.0003", "0.1"]
        ]
        .unwrap()
    }

    #[test]
    fn converts_rows_to_records() {
        let records = to_records(&selected(), Path::new("a.txt")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pos.start, 101);
        assert_eq!(records[0].orf_length, 33);
        assert_eq!(records[1].pos.chromosome, "chrX");
        assert_eq!(records[1].pos.strand, Strand::Minus);
        assert_eq!(records[1].tis_pvalue, "1e-05");
    }

    #[test]
    fn malformed_position_names_the_row() {
        let df = selected_with_ids(&["chr1:100-200:+", "chrX-5-65"]);
        let err = to_records(&df, Path::new("a.txt")).unwrap_err().to_string();
        assert!(err.contains("row 2"), "{err}");
        assert!(err.contains("chrX-5-65"), "{err}");
    }

    #[test]
    fn missing_column_is_reported() {
        let df = df![
            "GenomePos" => &["chr1:1-10:+"],
            "AALen" => &["3"]
        ]
        .unwrap();
        let err = select_columns(df).unwrap_err();
        assert!(matches!(err, PolarsError::ColumnNotFound(_)));
        assert!(err.to_string().contains("Gid"));
    }
}
