extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;

mod cli;
mod contig;
mod filter;
mod gc;
mod io;
mod process;
mod summary;

use cli::Cli;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse_args();

    info!("contig-filter v{}", cli::VERSION);

    let thresholds = cli.thresholds();
    if thresholds.is_disabled() {
        warn!("All thresholds are 0, every contig will be kept");
    } else {
        info!("Filtering {} with {}", cli.input, thresholds);
    }

    for (min, max) in thresholds.conflicts() {
        warn!("The {min} bound is above the {max} bound, no contig can pass");
    }

    let summary = process::filter_contigs(
        &cli.input,
        &cli.output,
        &thresholds,
        cli.line_width,
        cli.summary.as_deref(),
    )?;
    summary.log();

    info!("Completed successfully.");
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
