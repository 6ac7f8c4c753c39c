mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;
use format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    tracing::debug!(version = zipcode_core::version(), "zipcode starting");

    if let Err(err) = run(&cli) {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = match cli.format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let config = FormatterConfig::from_flags(mode, cli.no_color, cli.quiet, cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Check {
            value,
            country,
            fields,
            message,
        } => {
            let args = cmd::check::CheckArgs {
                value,
                country: country.as_deref(),
                fields,
                message: message.as_deref(),
            };
            cmd::check::run(args, &config, &mut out)
        }
        Command::Batch { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let stderr = std::io::stderr();
            let mut err = stderr.lock();
            cmd::batch::run(&content, &config, &mut out, &mut err)
        }
        Command::Countries => cmd::countries::run(&config, &mut out),
    }
}
