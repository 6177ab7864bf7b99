use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use riboseq_orfs::cli::RibotishArgs;
use riboseq_orfs::helper_functions::init_tracing;
use riboseq_orfs::ribotish_conversion::write_ribotish_gff;

fn run(args: &RibotishArgs) -> anyhow::Result<()> {
    let filter = args.length_filter().context("invalid length bounds")?;

    write_ribotish_gff(&args.ribotish_files, &filter, &args.output_gff3_filepath).with_context(
        || {
            format!(
                "failed to convert ribotish files into {}",
                args.output_gff3_filepath.display()
            )
        },
    )?;
    Ok(())
}

fn main() {
    let start = std::time::Instant::now();
    init_tracing();
    let args = RibotishArgs::parse();

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    info!("Elapsed time: {:.3?}", start.elapsed());
}
