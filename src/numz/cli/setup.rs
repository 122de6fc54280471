use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "numz", bin_name = "numz", version)]
#[command(about = "Generate unique 4-digit numbers with distinct digits", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["generate", "add", "blacklist", "show"])
        .multiple(false)
))]
pub struct Cli {
    /// Generate and record a new unique number
    #[arg(short, long)]
    pub generate: bool,

    /// Record a number of your choosing
    #[arg(short, long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub add: Option<String>,

    /// Record a number so it is never generated
    #[arg(short, long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub blacklist: Option<String>,

    /// Show every recorded number
    #[arg(short, long)]
    pub show: bool,

    /// Storage file (defaults to generated_numbers.json)
    #[arg(short, long, env = "NUMZ_FILE", value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, env = "NUMZ_CONFIG", value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// What a single invocation does. With no action flag the last number is
/// printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate,
    Add(String),
    Blacklist(String),
    Show,
    Last,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.generate {
            Action::Generate
        } else if let Some(number) = &self.add {
            Action::Add(number.clone())
        } else if let Some(number) = &self.blacklist {
            Action::Blacklist(number.clone())
        } else if self.show {
            Action::Show
        } else {
            Action::Last
        }
    }
}
