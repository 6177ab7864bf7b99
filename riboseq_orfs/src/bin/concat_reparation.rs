use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use riboseq_orfs::cli::ReparationArgs;
use riboseq_orfs::helper_functions::init_tracing;
use riboseq_orfs::reparation_merge::merge_reparation_files;

fn run(args: &ReparationArgs) -> anyhow::Result<()> {
    merge_reparation_files(&args.reparation_files, &args.output_folder).with_context(|| {
        format!(
            "failed to merge reparation files into {}",
            args.output_folder.display()
        )
    })?;
    Ok(())
}

fn main() {
    init_tracing();
    let args = ReparationArgs::parse();
    info!("Merging {} reparation files", args.reparation_files.len());

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
