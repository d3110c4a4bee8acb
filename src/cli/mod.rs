//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pivnet
//! binary. Command execution lives in [`commands`].

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::client::{ClientConfig, DEFAULT_ENDPOINT};
use crate::output::PrintAs;

pub mod commands;

/// User agent sent by the CLI.
pub const CLI_USER_AGENT: &str = concat!("pivnet-cli/", env!("CARGO_PKG_VERSION"));

/// Pivnet API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pivnet", about = "Pivnet API CLI", version, disable_version_flag = true)]
pub struct Cli {
    /// Print the version of pivnet and exit.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Format to print as.
    #[arg(long, global = true, value_enum, default_value_t = PrintAs::Table)]
    pub print_as: PrintAs,

    /// Pivnet API token.
    #[arg(long, global = true, env = "PIVNET_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Pivnet API endpoint.
    #[arg(long, global = true, env = "PIVNET_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log HTTP traffic to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Client configuration derived from the global flags.
    ///
    /// Returns `None` when no API token was supplied. An empty endpoint
    /// falls back to the production host.
    pub fn client_config(&self) -> Option<ClientConfig> {
        let token = self.api_token.as_deref().filter(|t| !t.is_empty())?;
        Some(
            ClientConfig::new(token)
                .with_endpoint(&self.endpoint)
                .with_user_agent(CLI_USER_AGENT),
        )
    }
}

/// Product slug argument shared by most commands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProductArgs {
    /// Product slug, e.g. "pivotal-cf".
    #[arg(short = 'p', long)]
    pub product_slug: String,
}

/// Product slug plus release version.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseArgs {
    /// Product slug, e.g. "pivotal-cf".
    #[arg(short = 'p', long)]
    pub product_slug: String,

    /// Release version, e.g. "1.8.3".
    #[arg(short = 'v', long)]
    pub release_version: String,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List products.
    Products,

    /// Show product.
    Product(ProductArgs),

    /// List releases.
    Releases(ProductArgs),

    /// Show release.
    Release(ReleaseArgs),

    /// Delete release.
    DeleteRelease(ReleaseArgs),

    /// List EULAs.
    Eulas,

    /// Show EULA.
    Eula {
        /// EULA slug, e.g. "pivotal_software_eula".
        #[arg(long)]
        eula_slug: String,
    },

    /// Accept the EULA of a release.
    AcceptEula(ReleaseArgs),

    /// List user groups, or those of one release.
    UserGroups {
        /// Product slug; requires --release-version.
        #[arg(short = 'p', long, requires = "release_version")]
        product_slug: Option<String>,

        /// Release version; requires --product-slug.
        #[arg(short = 'v', long, requires = "product_slug")]
        release_version: Option<String>,
    },

    /// Add user group to release.
    AddUserGroup {
        #[command(flatten)]
        release: ReleaseArgs,

        /// User group ID.
        #[arg(short = 'u', long)]
        user_group_id: u64,
    },

    /// Remove user group from release.
    RemoveUserGroup {
        #[command(flatten)]
        release: ReleaseArgs,

        /// User group ID.
        #[arg(short = 'u', long)]
        user_group_id: u64,
    },

    /// List product files of a product or release.
    ProductFiles {
        /// Product slug.
        #[arg(short = 'p', long)]
        product_slug: String,

        /// Only files attached to this release.
        #[arg(short = 'v', long)]
        release_version: Option<String>,
    },

    /// Show product file.
    ProductFile {
        /// Product slug.
        #[arg(short = 'p', long)]
        product_slug: String,

        /// Product file ID.
        #[arg(short = 'i', long)]
        product_file_id: u64,
    },
}
