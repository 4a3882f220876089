//! CLI definitions and entry point

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use carerpassport::config::Config;
use carerpassport::output::OutputMode;

/// carerpassport - Verify and share care-sector documents
#[derive(Parser, Debug)]
#[command(
    name = "carerpassport",
    version,
    about = "Verify and share care-sector documents",
    long_about = "Check carers' documents with the issuing authorities.\n\n\
                  Verifiable documents are checked with the Home Office, DVLA,\n\
                  HMRC or DVSA before upload. Access codes let employers view\n\
                  a carer's documents for a limited time."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $CARERPASSPORT_CONFIG, then ~/.carerpassport/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a document with its issuing authority
    Verify {
        /// Document type, e.g. "Driving Licence"
        document_type: String,

        /// Document field as key=value (repeatable), e.g. --field checkCode=AB12
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Holder's first name
        #[arg(long, default_value = "")]
        first_name: String,

        /// Holder's last name
        #[arg(long, default_value = "")]
        last_name: String,

        /// Holder's date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: Option<String>,

        /// Holder's address
        #[arg(long)]
        address: Option<String>,

        /// Call the real government APIs instead of the simulator
        #[cfg(feature = "http")]
        #[arg(long)]
        live: bool,
    },

    /// Show the fields a document type's verification needs
    Fields {
        /// Document type, e.g. "MOT Certificate"
        document_type: String,
    },

    /// List all document types
    Types,

    /// Generate an access code for an employer
    Share {
        /// Employer name
        employer: String,

        /// Days the code stays valid (overrides config)
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Show version
    Version,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        },
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Verify {
            document_type,
            fields,
            first_name,
            last_name,
            date_of_birth,
            address,
            #[cfg(feature = "http")]
            live,
        }) => {
            let args = commands::VerifyArgs {
                document_type,
                fields: fields.into_iter().collect::<BTreeMap<_, _>>(),
                first_name,
                last_name,
                date_of_birth,
                address,
                #[cfg(feature = "http")]
                live,
            };
            commands::verify(args, &config, output_mode)
        },
        Some(Command::Fields { document_type }) => {
            commands::fields(&document_type, output_mode).map(|()| ExitCode::SUCCESS)
        },
        Some(Command::Types) => commands::types(output_mode).map(|()| ExitCode::SUCCESS),
        Some(Command::Share { employer, days }) => {
            commands::share(&employer, days, &config, output_mode).map(|()| ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("carerpassport v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("carerpassport v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'carerpassport --help' for usage");
                println!("Run 'carerpassport types' to see supported documents");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
