#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use log::Level;

#[derive(FromArgs, Debug)]
/// Pack raw RGB888/BGR888 pixel data into big-endian RGB565/BGR565
struct TopLevel {
    /// log kernel dispatch and per-file progress
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(commands::convert::ConvertCmd),
    ConvertDir(commands::convert_dir::ConvertDirCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    let log_level = match cli.verbose {
        true => Level::Trace,
        false => Level::Warn,
    };
    simple_logger::init_with_level(log_level)?;

    match cli.command {
        Commands::Convert(cmd) => {
            commands::convert::handle_convert_command(cmd)?;
        }
        Commands::ConvertDir(cmd) => {
            commands::convert_dir::handle_convert_dir_command(cmd)?;
        }
    }

    Ok(())
}
