//! CLI command definitions and execution.
//!
//! This module defines the `nsot` command tree and translates parsed
//! arguments into typed resource calls. Console rendering stays here; the
//! library returns structured results only.

use clap::{Parser, Subcommand};
use thiserror::Error;

use nsot_client::resources::{
    NewProtocolType, ProtocolType, ProtocolTypeFilter, ProtocolTypePatch, Site,
};
use nsot_client::{ApiClient, BaseUrl, ConfigError, Email, HttpError, NsotConfig, SiteId};

/// Errors surfaced by CLI execution.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No API URL given. Pass --url or set NSOT_URL.")]
    MissingUrl,
    #[error("No email given. Pass --email or set NSOT_EMAIL.")]
    MissingEmail,
    #[error("Nothing to update. Supply -n/--name and/or -e/--description.")]
    NothingToUpdate,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Command-line interface to the NSoT REST API.
#[derive(Debug, Parser)]
#[command(name = "nsot", version, about = "Network Source of Truth CLI")]
pub struct Cli {
    /// NSoT API base URL (e.g. http://localhost:8990/api).
    #[arg(long, env = "NSOT_URL", global = true)]
    pub url: Option<String>,

    /// Identifying email sent as the X-NSoT-Email header.
    #[arg(long, env = "NSOT_EMAIL", global = true)]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage protocol types.
    #[command(name = "protocol-types", visible_alias = "protocol_types")]
    ProtocolTypes {
        #[command(subcommand)]
        command: ProtocolTypeCommand,
    },

    /// Inspect sites.
    Sites {
        #[command(subcommand)]
        command: SiteCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProtocolTypeCommand {
    /// Add a protocol type.
    Add {
        /// Name of the protocol type.
        #[arg(short = 'n', long)]
        name: String,

        /// Description of the protocol type.
        #[arg(short = 'e', long)]
        description: Option<String>,

        /// Site the protocol type belongs to (defaults to the default site).
        #[arg(short = 's', long)]
        site: Option<u64>,
    },

    /// List protocol types.
    List {
        /// Filter by name.
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Filter by site id.
        #[arg(short = 's', long)]
        site: Option<u64>,

        /// Filter by unique id.
        #[arg(short = 'I', long)]
        id: Option<u64>,
    },

    /// Update a protocol type.
    Update {
        /// Unique id of the protocol type.
        #[arg(short = 'I', long)]
        id: u64,

        /// Site the protocol type belongs to.
        #[arg(short = 's', long)]
        site: u64,

        /// New name.
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// New description.
        #[arg(short = 'e', long)]
        description: Option<String>,
    },

    /// Remove a protocol type.
    Remove {
        /// Unique id of the protocol type.
        #[arg(short = 'I', long)]
        id: u64,

        /// Site the protocol type belongs to.
        #[arg(short = 's', long)]
        site: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// List sites.
    List,
}

/// Builds an authenticated client from the global options.
fn build_client(cli: &Cli) -> Result<ApiClient, CliError> {
    let url = cli.url.as_deref().ok_or(CliError::MissingUrl)?;
    let email = cli.email.as_deref().ok_or(CliError::MissingEmail)?;

    let config = NsotConfig::builder()
        .base_url(BaseUrl::new(url)?)
        .email(Email::new(email)?)
        .build()?;

    Ok(ApiClient::new(&config))
}

/// Prints protocol types as an aligned table.
fn print_protocol_types(protocol_types: &[ProtocolType]) {
    println!("{:<6} {:<20} {:<30} {:<6}", "id", "name", "description", "site");
    for pt in protocol_types {
        println!(
            "{:<6} {:<20} {:<30} {:<6}",
            pt.id, pt.name, pt.description, pt.site_id
        );
    }
}

/// Executes the parsed command against the API.
///
/// # Errors
///
/// Returns [`CliError`] for missing global options, local validation
/// failures, and any HTTP error, carrying the server message verbatim.
pub async fn execute_command(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli)?;

    match cli.command {
        Command::ProtocolTypes { command } => match command {
            ProtocolTypeCommand::Add {
                name,
                description,
                site,
            } => {
                let mut new = NewProtocolType::new(name);
                if let Some(description) = description {
                    new = new.description(description);
                }
                if let Some(site) = site {
                    new = new.site(SiteId(site));
                }

                let created = ProtocolType::create(&client, new).await?;
                tracing::debug!(id = created.id, "created protocol_type");
                println!("Added protocol_type!");
                Ok(())
            }
            ProtocolTypeCommand::List { name, site, id } => {
                let mut filter = ProtocolTypeFilter::default();
                if let Some(name) = name {
                    filter = filter.name(name);
                }
                if let Some(site) = site {
                    filter = filter.site(SiteId(site));
                }
                if let Some(id) = id {
                    filter = filter.id(id);
                }

                let listed = ProtocolType::list(&client, &filter).await?;
                print_protocol_types(&listed);
                Ok(())
            }
            ProtocolTypeCommand::Update {
                id,
                site,
                name,
                description,
            } => {
                let mut patch = ProtocolTypePatch::default();
                if let Some(name) = name {
                    patch = patch.name(name);
                }
                if let Some(description) = description {
                    patch = patch.description(description);
                }
                if patch.is_empty() {
                    return Err(CliError::NothingToUpdate);
                }

                ProtocolType::update(&client, id, SiteId(site), patch).await?;
                println!("Updated protocol_type!");
                Ok(())
            }
            ProtocolTypeCommand::Remove { id, site } => {
                ProtocolType::delete(&client, id, SiteId(site)).await?;
                println!("Removed protocol_type!");
                Ok(())
            }
        },
        Command::Sites { command } => match command {
            SiteCommand::List => {
                let sites = Site::list(&client).await?;
                println!("{:<6} {:<20} {:<30}", "id", "name", "description");
                for site in sites {
                    println!("{:<6} {:<20} {:<30}", site.id, site.name, site.description);
                }
                Ok(())
            }
        },
    }
}
