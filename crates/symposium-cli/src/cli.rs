//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Symposium CLI - Look up historical figures and stage their dinner conversations.
#[derive(Debug, Parser)]
#[command(name = "symposium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SYMPOSIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Text and tables (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up biographical facts for a person
    Facts(FactsArgs),

    /// Extract facts from biography text in a file or stdin
    Extract(ExtractArgs),

    /// Suggest people matching a partial name
    Suggest(SuggestArgs),

    /// Gather quotes, works and an excerpt for one or more people
    Material(MaterialArgs),

    /// Split generated dialogue into speaker turns
    Segment(SegmentArgs),

    /// Build a conversation prompt for a set of guests
    Prompt(PromptArgs),
}

/// Arguments for the facts command.
#[derive(Debug, Parser)]
pub struct FactsArgs {
    /// Person's name (e.g., Abraham Lincoln)
    #[arg(required = true)]
    pub name: Vec<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Subject the text is about
    #[arg(short, long)]
    pub name: String,

    /// File containing the biography text (stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Partial name
    #[arg(required = true)]
    pub query: Vec<String>,
}

/// Arguments for the material command.
#[derive(Debug, Parser)]
pub struct MaterialArgs {
    /// People to gather material for, one argument each
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the segment command.
#[derive(Debug, Parser)]
pub struct SegmentArgs {
    /// File containing generated dialogue (stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the prompt command.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Conversation topic
    #[arg(short, long)]
    pub topic: String,

    /// Guests, one argument each
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facts_joins_name_words() {
        let cli = Cli::parse_from(["symposium", "facts", "Abraham", "Lincoln"]);
        match cli.command {
            Command::Facts(args) => assert_eq!(args.name.join(" "), "Abraham Lincoln"),
            _ => panic!("Expected Facts command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "symposium",
            "material",
            "Plato",
            "Marie Curie",
            "--format",
            "json",
            "--verbose",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Material(args) => assert_eq!(args.names, vec!["Plato", "Marie Curie"]),
            _ => panic!("Expected Material command"),
        }
    }

    #[test]
    fn test_prompt_requires_topic() {
        assert!(Cli::try_parse_from(["symposium", "prompt", "Plato"]).is_err());
        let cli = Cli::try_parse_from(["symposium", "prompt", "-t", "justice", "Plato"]).unwrap();
        assert!(matches!(cli.command, Command::Prompt(_)));
    }

    #[test]
    fn test_segment_file_optional() {
        let cli = Cli::parse_from(["symposium", "segment"]);
        match cli.command {
            Command::Segment(args) => assert!(args.file.is_none()),
            _ => panic!("Expected Segment command"),
        }
    }
}
