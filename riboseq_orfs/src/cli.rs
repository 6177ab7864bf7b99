use clap::Parser;
use polars::prelude::PolarsResult;
use std::path::PathBuf;

use crate::ribotish_conversion::LengthFilter;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Merges the reparation GFF files of all replicates of one condition into one file."
)]
pub struct ReparationArgs {
    #[arg(
        value_name = "REPARATION",
        required = true,
        num_args = 1..,
        help = "Paths to reparation gff files"
    )]
    pub reparation_files: Vec<PathBuf>,

    #[arg(value_name = "OUTPUT_FOLDER", help = "Output folder for the concatenated file")]
    pub output_folder: PathBuf,
}

#[derive(Debug, Parser)]
#[command(version, about = "Converts ribotish ORF predictions to gff3.")]
pub struct RibotishArgs {
    #[arg(
        value_name = "RIBOTISH",
        required = true,
        num_args = 1..,
        help = "Paths to ribotish ORF files"
    )]
    pub ribotish_files: Vec<PathBuf>,

    #[arg(
        long = "output_gff3_filepath",
        value_name = "PATH",
        required = true,
        help = "Path to write gff3 output"
    )]
    pub output_gff3_filepath: PathBuf,

    #[arg(long = "min_length", value_name = "AA", help = "Minimal uORF length")]
    pub min_length: Option<i64>,

    #[arg(long = "max_length", value_name = "AA", help = "Maximal uORF length")]
    pub max_length: Option<i64>,
}

impl RibotishArgs {
    /// Validated length bounds.
    pub fn length_filter(&self) -> PolarsResult<LengthFilter> {
        LengthFilter::new(self.min_length, self.max_length)
    }
}
