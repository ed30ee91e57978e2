mod allocator;
mod data;
mod error;
mod regroup;
mod server;
mod solver;
mod table;

use clap::{Parser, Subcommand};
use data::{DEFAULT_SEED, RedistributeInput};
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Redistributes class rosters into equally sized exam rooms.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a class table from CSV and write the exam room table to CSV
    Run {
        /// CSV file whose first row names the classes
        #[arg(
            long,
            default_value = "estudiantes_originales.csv",
            env = "ROOM_SHUFFLE_INPUT"
        )]
        input: PathBuf,

        /// CSV file to write the rooms to
        #[arg(long, default_value = "salones_examen.csv", env = "ROOM_SHUFFLE_OUTPUT")]
        output: PathBuf,

        /// Seed for shuffling students within each class
        #[arg(long, default_value_t = DEFAULT_SEED, env = "ROOM_SHUFFLE_SEED")]
        seed: u64,

        /// Keep students in input order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },
    /// Serve redistribution over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080", env = "ROOM_SHUFFLE_ADDR")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<(), error::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Args::parse().command {
        Command::Run {
            input,
            output,
            seed,
            no_shuffle,
        } => {
            let rows = table::read_csv_file(&input)?;
            let result = solver::solve_table(&RedistributeInput {
                table: rows,
                seed,
                shuffle: !no_shuffle,
            })?;
            table::write_csv_file(&output, &result.table)?;
            info!("Output written to {}", output.display());
        }
        Command::Serve { addr } => server::run_server(addr).await?,
    }

    Ok(())
}
