use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use polars::prelude::*;
use regex::Regex;

/// `<chrom>:<start>-<stop>:<strand>` as written by ribotish into `GenomePos`.
/// The chromosome is the leading alphanumeric run, anything up to the first
/// `:` after it is ignored (e.g. `chr1_random` reads as `chr1`).
static GENOME_POS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Za-z]+)[^:]*:([0-9]+)-([0-9]+):([+-])$")
        .expect("valid GenomePos regex")
});

/// Wraps a domain error into the `PolarsError` used across the crate.
pub fn polars_err(e: Box<dyn Error + Send + Sync>) -> PolarsError {
    PolarsError::ComputeError(format!("{}", e).into())
}

/// A loader for one input file.
pub trait Dataset {
    fn load(&self) -> PolarsResult<DataFrame>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Plus,
    Minus,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Strand {
    type Err = PolarsError;

    fn from_str(s: &str) -> PolarsResult<Self> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            other => Err(polars_err(format!("invalid strand '{other}'").into())),
        }
    }
}

/// Genomic coordinates of an ORF. `start` is 1-based inclusive; ribotish
/// reports a 0-based start, so one is added while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomePos {
    pub chromosome: String,
    pub start: u64,
    pub stop: u64,
    pub strand: Strand,
}

impl FromStr for GenomePos {
    type Err = PolarsError;

    fn from_str(s: &str) -> PolarsResult<Self> {
        let caps = GENOME_POS_RE
            .captures(s)
            .ok_or_else(|| polars_err(format!("malformed genome position '{s}'").into()))?;

        let start: u64 = caps[2].parse().map_err(|e| polars_err(Box::new(e)))?;
        let stop: u64 = caps[3].parse().map_err(|e| polars_err(Box::new(e)))?;
        let start = start
            .checked_add(1)
            .ok_or_else(|| polars_err(format!("start out of range in '{s}'").into()))?;

        Ok(GenomePos {
            chromosome: caps[1].to_string(),
            start,
            stop,
            strand: caps[4].parse()?,
        })
    }
}

/// One ribotish ORF after column selection and position parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrfRecord {
    pub orf_id_gen: String,
    pub pos: GenomePos,
    pub orf_length: i64,
    pub gene_id: String,
    pub gene_symbol: String,
    pub transcript_id: String,
    pub start_codon: String,
    pub tis_type: String,
    pub tis_pvalue: String,
    pub ribo_pvalue: String,
    pub fisher_pvalue: String,
}
