use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
mod auth;
use hashnest::{HashSettings, PasswordHash, Variant};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
struct SettingsArgs {
    /// Argon2 settings, e.g. "f=argon2id,s=16,k=32,m=64*1024,t=3,p=2"
    #[arg(long, value_name = "SETTINGS", env = "HASHNEST_SETTINGS")]
    settings: Option<String>,

    /// Read the settings string from a file (takes precedence over --settings)
    #[arg(long, value_name = "PATH")]
    settings_file: Option<PathBuf>,
}

impl SettingsArgs {
    fn resolve(&self) -> Result<HashSettings> {
        let text = match (&self.settings_file, &self.settings) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?,
            (None, Some(settings)) => settings.clone(),
            (None, None) => bail!("no settings given; use --settings, --settings-file or HASHNEST_SETTINGS"),
        };

        hashnest::parse_settings(text.trim()).context("invalid argon2 settings")
    }
}

#[derive(Debug, Serialize)]
struct HashInfo {
    variant: Variant,
    version: u32,
    memory_cost: u32,
    iterations: u32,
    parallelism: u8,
    salt_length: usize,
    key_length: usize,
}

impl From<&PasswordHash> for HashInfo {
    fn from(hash: &PasswordHash) -> Self {
        Self {
            variant: hash.variant(),
            version: hash.version(),
            memory_cost: hash.memory_cost(),
            iterations: hash.iterations(),
            parallelism: hash.parallelism(),
            salt_length: hash.salt().len(),
            key_length: hash.key().len(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashnest")]
#[command(
    version,
    about = "Create and verify argon2 password hashes from a plain-text settings string."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password read from HASHNEST_PASSWORD, stdin or a prompt
    Create {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Ask for the password twice
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },

    /// Checks a password against an encoded hash
    #[command(arg_required_else_help = true)]
    Verify { hash: String },

    /// Evaluates a memory expression such as "64*1024"
    #[command(arg_required_else_help = true)]
    Eval { expression: String },

    /// Prints the canonical form of the settings
    Settings {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Shows the parameters stored in an encoded hash
    #[command(arg_required_else_help = true)]
    Inspect {
        hash: String,

        /// Print as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();
    match args.command {
        Commands::Create { settings, confirm } => {
            let settings = settings.resolve()?;
            let password = if confirm {
                auth::read_new_password_with_confirmation()?
            } else {
                auth::read_password()?
            };
            let hash = settings.create(&password)?;
            println!("{hash}");
        }
        Commands::Verify { hash } => {
            let password = auth::read_password()?;
            if hashnest::matches(&password, &hash)? {
                println!("password matches");
            } else {
                bail!("password does not match");
            }
        }
        Commands::Eval { expression } => {
            let value = hashnest::evaluate(&expression)?;
            println!("{value}");
        }
        Commands::Settings { settings } => {
            println!("{}", settings.resolve()?);
        }
        Commands::Inspect { hash, json } => {
            let decoded: PasswordHash = hash.parse()?;
            let info = HashInfo::from(&decoded);
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("variant:     {}", info.variant);
                println!("version:     {}", info.version);
                println!("memory:      {} KiB", info.memory_cost);
                println!("iterations:  {}", info.iterations);
                println!("parallelism: {}", info.parallelism);
                println!("salt:        {} bytes", info.salt_length);
                println!("key:         {} bytes", info.key_length);
            }
        }
    }

    Ok(())
}
