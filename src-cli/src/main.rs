use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Print SPX inspection labels on a Zebra network printer
#[derive(Parser)]
#[command(name = "spx-label", version)]
#[command(about = "Print SPX inspection labels on a Zebra network printer")]
struct Args {
    /// Settings file (defaults to ~/Documents/app_settings.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log filter, e.g. "info" or "zebra_zpl_printer=debug" (RUST_LOG when omitted)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print labels, one serial per copy
    Print {
        /// Control category, e.g. "SPX by XRY"
        #[arg(short, long, default_value = "SPX by XRY")]
        control: String,

        /// Name printed on the label
        #[arg(short, long, default_value = "")]
        name: String,

        /// Number of copies
        #[arg(long, default_value = "1")]
        copies: String,
    },

    /// Show the label the next copy would carry, without printing
    Preview {
        #[arg(short, long, default_value = "SPX by XRY")]
        control: String,

        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Show or edit printer and label settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// First-run setup: write all printer and label settings
    Setup {
        #[arg(long)]
        ip: String,
        #[arg(long)]
        port: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        ra: String,
        /// Control provided by
        #[arg(long)]
        control: String,
    },

    /// List the control categories
    Controls,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the effective settings
    Show,

    /// Change some settings; omitted fields keep their current values
    Set {
        #[arg(long)]
        ip: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        ra: Option<String>,
        /// Control provided by
        #[arg(long)]
        control: Option<String>,
    },
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let store = commands::open_store(args.settings)?;

    match args.command {
        Command::Print { control, name, copies } => commands::print(&store, &control, name, &copies),
        Command::Preview { control, name } => commands::preview(&store, &control, name),
        Command::Settings(SettingsCommand::Show) => commands::show_settings(&store),
        Command::Settings(SettingsCommand::Set {
            ip,
            port,
            company_name,
            ra,
            control,
        }) => commands::edit_settings(
            &store,
            commands::Changes {
                ip,
                port,
                company_name,
                ra,
                control,
            },
        ),
        Command::Setup {
            ip,
            port,
            company_name,
            ra,
            control,
        } => commands::setup(&store, ip, port, company_name, ra, control),
        Command::Controls => commands::list_controls(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn print_defaults_to_one_copy_of_first_control() {
        let args = Args::try_parse_from(["spx-label", "print", "--name", "J. Doe"]).unwrap();
        match args.command {
            Command::Print { control, name, copies } => {
                assert_eq!(control, "SPX by XRY");
                assert_eq!(name, "J. Doe");
                assert_eq!(copies, "1");
            }
            _ => panic!("expected print"),
        }
    }

    #[test]
    fn settings_override_is_global() {
        let args = Args::try_parse_from(["spx-label", "settings", "show", "--settings", "/tmp/s.json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("/tmp/s.json")));
    }
}
