//! `pvsgen`: computes the potentially visible set of a world file.

mod cli;

use cli::*;
use log::{error, info, warn};
use pvsgen::errors::WorldError;
use pvsgen::pipeline::{self, PvsOutcome};
use pvsgen::world::World;
use simplelog::TermLogger;
use std::fs::OpenOptions;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(early) => {
            return match early.status {
                Ok(()) => {
                    println!("{}", early.output);
                    ExitCode::SUCCESS
                },
                Err(()) => {
                    eprintln!("{}", early.output);
                    ExitCode::FAILURE
                },
            };
        },
    };

    if let Err(err) = TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("could not set up logging: {err}");
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn run(options: &CLIOptions) -> Result<(), WorldError> {
    let start = Instant::now();

    info!("loading world {}", options.world.display());
    let mut world = World::load(&options.world)?;
    info!(
        "{} leaves ({} inner), {} nodes",
        world.tree.leaf_count(),
        world.tree.inner_leaf_count(),
        world.tree.nodes.len()
    );

    let config = options.config();
    match pipeline::run(&world.tree, &config)? {
        PvsOutcome::SuperLeavesOnly { count } => {
            info!("{} super leaves, stopping without computing the PVS", count);
        },
        PvsOutcome::Computed { pvs, report } => {
            world.store_pvs(&pvs);
            info!("saving world {}", options.world.display());
            world.save(&options.world)?;

            let record = run_record(
                &timestamp(&chrono::Local::now()),
                &world_name(&options.world),
                start.elapsed(),
                report.checksum,
            );
            if let Err(err) = append_line(&options.log_file(), &record) {
                warn!("could not write run record to {}: {err}", options.log_file().display());
            }
            info!("done in {}, checksum {}", format_elapsed(start.elapsed()), report.checksum);
        },
    }

    Ok(())
}

fn append_line(path: &std::path::Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
