use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quotz", version = get_version())]
#[command(about = "Quote collection manager with remote sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a quote to the collection
    #[command(alias = "a")]
    Add {
        /// The quote text
        text: String,

        /// Its category
        category: String,
    },

    /// List quotes (respects the active filter)
    #[command(alias = "ls")]
    List {
        /// Ignore the active filter and list everything
        #[arg(long)]
        all: bool,
    },

    /// List the distinct categories
    #[command(alias = "cats")]
    Categories,

    /// Show or set the active category filter ("all" clears it)
    Filter {
        /// Category name, or "all"
        category: Option<String>,
    },

    /// Show a random quote from the active filter
    #[command(alias = "random")]
    Show,

    /// Import quotes from a JSON file
    Import {
        /// Path to a JSON array of {text, category} objects
        path: PathBuf,

        /// Replace the collection instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Export the collection to a JSON file
    Export {
        /// Target path (defaults to quotes-YYYY-MM-DD.json)
        path: Option<PathBuf>,
    },

    /// Reconcile with the remote endpoint (server wins on conflict)
    Sync {
        /// Keep running, reconciling at the configured interval
        #[arg(long)]
        watch: bool,
    },

    /// Push the local collection to the remote endpoint
    Push,

    /// Get or set configuration (remote-url, sync-interval, default-category)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
