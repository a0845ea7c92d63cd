use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coffer_core::config::AppConfig;
use coffer_core::lifecycle;
use coffer_ui::UiServices;
use coffer_vault::{CredentialRecord, CredentialVerifier, ProfileWipe, VaultError, VaultVerifier};

mod setup;

#[derive(Parser)]
#[command(name = "coffer", about = "Coffer — a lock screen for your keys")]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI
    Run,

    /// Create the credential record for this machine
    Init {
        /// Read the password from a file instead of prompting
        #[arg(long)]
        password_file: Option<PathBuf>,
    },

    /// Show whether credentials exist and when they were created
    Status,

    /// Delete the profile directory and everything in it
    Reset {
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    lifecycle::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Run => run_gui(config)?,
        Commands::Init { password_file } => {
            setup::init_credentials(&config, password_file.as_deref())?
        }
        Commands::Status => setup::print_status(&config)?,
        Commands::Reset { yes } => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(setup::reset_profile(&config, yes))?;
        }
    }
    Ok(())
}

fn run_gui(config: AppConfig) -> Result<()> {
    lifecycle::log_startup();

    let profile_dir = setup::profile_dir(&config);
    let verifier: Option<Arc<dyn CredentialVerifier>> =
        match CredentialRecord::load(&CredentialRecord::path_in(&profile_dir)) {
            Ok(record) => Some(Arc::new(VaultVerifier::new(record))),
            Err(VaultError::CredentialsNotFound(path)) => {
                tracing::info!("no credential record at {path}");
                None
            }
            Err(err) => {
                tracing::error!("credential record unreadable: {err}");
                return Err(err.into());
            }
        };

    let services = UiServices {
        verifier,
        // No platform authenticator is bridged on desktop yet; the
        // config flag alone cannot surface the button.
        authenticator: None,
        reset: Arc::new(ProfileWipe::new(profile_dir)),
    };

    coffer_ui::run(config, services)?;
    lifecycle::log_shutdown();
    Ok(())
}
