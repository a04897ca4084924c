//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::commands::joined_name;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use symposium_sources::WikipediaClient;

/// Execute the suggest command.
pub async fn execute_suggest(
    args: SuggestArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let query = joined_name(&args.query)?;
    let biography = WikipediaClient::new(&config.sources)?;

    let suggestions = biography.suggest(&query).await;
    println!("{}", formatter.format_suggestions(&suggestions)?);

    Ok(())
}
