//! Material command implementation.

use crate::cli::MaterialArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use symposium_aggregator::MaterialAggregator;
use symposium_sources::SourceSet;

/// Execute the material command.
pub async fn execute_material(
    args: MaterialArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let names = clean_names(&args.names)?;
    let sources = SourceSet::from_config(&config.sources)?;
    let aggregator = MaterialAggregator::from_sources(sources, config.aggregator.clone())?;

    let materials = aggregator.aggregate_all(&names).await;
    println!("{}", formatter.format_material(&materials)?);

    Ok(())
}

/// Trim names, rejecting blank ones. Duplicates are kept.
pub(crate) fn clean_names(names: &[String]) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                Err(CliError::InvalidInput("Names must not be blank".to_string()))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}
