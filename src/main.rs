use clap::Parser;
use std::process;

use taskboard::cli::commands::{Cli, Commands};
use taskboard::config::Config;
use taskboard::{cli, logging};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    // A broken config is reported by the command itself; logging just
    // falls back to defaults here.
    let log_level = Config::load().map(|c| c.log_level).unwrap_or_else(|_| Config::default().log_level);
    logging::init(cli_args.verbose, &log_level);

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output),
        Commands::Show => cli::board::run(json_output),
        Commands::Task(cmd) => cli::task::run(cmd, json_output),
        Commands::Clear => cli::clear::run(json_output),
        Commands::Legend => cli::legend::run(json_output),
        Commands::Reset => cli::reset::run(json_output),
    };

    process::exit(exit_code);
}
