mod apps;
mod languages;
mod sections;
mod translations;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "langtool",
    author,
    version,
    about = "Command line interface to the Vista Language API with extra goodness."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Connection options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// API authentication token
    #[arg(short = 'k', long, env = "LANGTOOL_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the Language API
    #[arg(
        long,
        env = "LANGTOOL_API_URL",
        default_value = langtool::DEFAULT_BASE_URL
    )]
    pub base_url: String,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Gets all applications
    Apps {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Gets section(s) for one or more applications
    Sections {
        /// Application codes to list sections for
        #[arg(value_name = "APP_CODES")]
        apps: Vec<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Gets languages
    Languages {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Gets translations for the specified culture
    Translations(translations::TranslationsArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Apps { connection } => apps::run(&connection).await,
        Command::Sections { apps, connection } => sections::run(&apps, &connection).await,
        Command::Languages { connection } => languages::run(&connection).await,
        Command::Translations(args) => translations::run(args).await,
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
