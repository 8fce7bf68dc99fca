//! labdash CLI - Send instrument data files to the plotting backend
//!
//! ```bash
//! labdash forms                                      # List forms and their inputs
//! labdash submit ppms run.dat -f pressure=2.5        # Plot one file
//! labdash submit dewar cool.dat warm.dat --no-slideshow
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labdash::{DashboardShell, Endpoint, FormKind, RequestOutcome, UploadConfig, FORMS};
use labdash_cli::{
    parse_field, run_submit, ClientConfig, ClientError, HttpUploader, SubmitRequest, DEFAULT_LOG_FILTER,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labdash")]
#[command(about = "Upload lab instrument data for plotting and export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every form with its file slots and text fields
    Forms,

    /// Submit data files to one endpoint
    Submit {
        /// Endpoint name (e.g. ppms, dewar, mpms_ac)
        endpoint: Endpoint,

        /// Data files, in slot order
        files: Vec<PathBuf>,

        /// Text field as key=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Do not ask for a PowerPoint slideshow
        #[arg(long)]
        no_slideshow: bool,

        /// Do not ask the backend to save the Origin project
        #[arg(long)]
        no_save_project: bool,

        /// Backend base address (default: $LABDASH_BACKEND_URL or http://localhost:5000)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Forms => cmd_forms(),

        Commands::Submit {
            endpoint,
            files,
            fields,
            no_slideshow,
            no_save_project,
            url,
        } => {
            let upload = UploadConfig::default()
                .with_generate_slideshow(!no_slideshow)
                .with_save_project(!no_save_project);
            let config = ClientConfig::from_env()
                .with_backend_url(url)
                .with_upload(upload);
            cmd_submit(
                config,
                SubmitRequest {
                    endpoint,
                    files,
                    fields,
                },
            )
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_forms() -> Result<(), ClientError> {
    for spec in FORMS {
        let kind = match spec.kind() {
            FormKind::Single => "single file",
            FormKind::Dual => "dual file",
        };
        println!("  📄 {} - {} ({})", spec.endpoint, spec.title, kind);

        let slots: Vec<_> = spec.slots.iter().map(|s| s.name).collect();
        println!("     Files:  {}", slots.join(", "));

        for field in spec.fields {
            println!("     Field:  {} ({})", field.key, field.placeholder);
        }
        println!();
    }
    Ok(())
}

async fn cmd_submit(config: ClientConfig, request: SubmitRequest) -> Result<(), ClientError> {
    let uploader = HttpUploader::new(config.backend_url.as_str())?;
    let mut shell = DashboardShell::with_config(config.upload);

    eprintln!("🔗 Backend: {}", uploader.base_url());
    match run_submit(&mut shell, &uploader, request).await? {
        RequestOutcome::Success(message) => {
            println!("✅ {}", message);
            Ok(())
        }
        RequestOutcome::Failure(message) => Err(ClientError::Rejected(message)),
    }
}
