use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use coffer_core::config::AppConfig;
use coffer_core::reset::arms_reset;
use coffer_vault::{AppReset, CredentialRecord, ProfileWipe, VaultError};

pub fn profile_dir(config: &AppConfig) -> PathBuf {
    PathBuf::from(&config.storage.data_dir)
}

pub fn record_path(config: &AppConfig) -> PathBuf {
    CredentialRecord::path_in(&profile_dir(config))
}

/// Interactive `coffer init`: pick a password, write the record.
pub fn init_credentials(config: &AppConfig, password_file: Option<&Path>) -> Result<()> {
    let path = record_path(config);
    if path.exists() {
        anyhow::bail!(
            "credentials already exist at {}; run `coffer reset` first",
            path.display()
        );
    }

    let password = read_new_password(password_file)?;
    fs::create_dir_all(profile_dir(config))?;
    let record = CredentialRecord::create(&password)?;
    record.save(&path)?;
    tracing::info!("credential record created");
    println!("Credentials written to {}", path.display());
    Ok(())
}

fn read_new_password(password_file: Option<&Path>) -> Result<String> {
    let password = match password_file {
        Some(path) => fs::read_to_string(path)?
            .trim_end_matches(['\r', '\n'])
            .to_string(),
        None => {
            let first = rpassword::prompt_password("Choose a password: ")?;
            let confirm = rpassword::prompt_password("Confirm password: ")?;
            if first != confirm {
                anyhow::bail!("passwords do not match");
            }
            first
        }
    };
    if password.trim().is_empty() {
        anyhow::bail!("password cannot be empty");
    }
    Ok(password)
}

pub fn print_status(config: &AppConfig) -> Result<()> {
    let path = record_path(config);
    match CredentialRecord::load(&path) {
        Ok(record) => {
            println!("credentials: present");
            println!("created:     {}", record.created_at);
            println!("record:      {}", path.display());
        }
        Err(VaultError::CredentialsNotFound(_)) => {
            println!("credentials: none (run `coffer init`)");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// `coffer reset`: wipe the profile directory after the same typed
/// confirmation the GUI dialog requires.
pub async fn reset_profile(config: &AppConfig, yes: bool) -> Result<()> {
    let dir = profile_dir(config);
    if !yes {
        print!(
            "This deletes everything under {}. Type RESET to confirm: ",
            dir.display()
        );
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !arms_reset(&answer) {
            anyhow::bail!("reset not confirmed");
        }
    }

    ProfileWipe::new(dir.clone()).reset_application().await?;
    println!("Profile reset at {}", dir.display());
    Ok(())
}
