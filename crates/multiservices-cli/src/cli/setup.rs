use clap::{Args, Parser, Subcommand};
use multiservices::model::ServiceCategory;
use multiservices::search::ProviderSort;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "multiservices",
    bin_name = "multiservices",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Local directory of home-service providers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $MULTISERVICES_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a provider or a client
    #[command(subcommand, display_order = 1)]
    Register(RegisterCommands),

    /// List providers
    #[command(alias = "ls", display_order = 2)]
    List(ListArgs),

    /// Show a provider with its reviews
    #[command(display_order = 3)]
    Show {
        /// Provider id
        id: String,

        /// Print JSON instead of the styled view
        #[arg(long)]
        json: bool,
    },

    /// Rate a provider from 1 to 5
    #[command(display_order = 4)]
    Review {
        /// Provider id
        provider_id: String,

        /// Rating, 1 to 5
        #[arg(allow_negative_numbers = true)]
        rating: i64,

        /// Free-text comment
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// List clients
    #[command(display_order = 5)]
    Clients {
        /// Print JSON instead of the styled view
        #[arg(long)]
        json: bool,
    },

    /// Add the sample providers to an empty directory
    #[command(display_order = 6)]
    Seed,

    /// Show the data directory and configuration
    #[command(display_order = 7)]
    Config {
        /// Print a commented sample multiservices.toml
        #[arg(long)]
        template: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Search name, service, location and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this service (label like "Pintor" or slug like "painter")
    #[arg(long)]
    pub service: Option<ServiceCategory>,

    /// Order: registered, rating or name
    #[arg(long, default_value = "registered")]
    pub sort: ProviderSort,

    /// Print JSON instead of the styled view
    #[arg(long)]
    pub json: bool,
}

// Missing fields default to blank so the form validator reports every problem
// at once instead of clap stopping at the first.
#[derive(Subcommand, Debug)]
pub enum RegisterCommands {
    /// Register a service provider
    Provider {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Service (label like "Eletricista" or slug like "electrician")
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "")]
        experience: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Hourly rate in R$
        #[arg(long = "rate", default_value = "")]
        hourly_rate: String,
    },

    /// Register a client
    Client {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        location: String,
    },
}
