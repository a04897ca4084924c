//! Facts command implementation.

use crate::cli::FactsArgs;
use crate::commands::joined_name;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use symposium_extractor::FactExtractor;
use symposium_sources::WikipediaClient;

/// Execute the facts command.
pub async fn execute_facts(args: FactsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let name = joined_name(&args.name)?;
    let biography = WikipediaClient::new(&config.sources)?;
    let extractor = FactExtractor::new(config.extractor.clone())?;

    match extractor.lookup(&biography, &name).await {
        Some(facts) => println!("{}", formatter.format_facts(&name, &facts)?),
        None => eprintln!("{}", formatter.warning(&format!("No biography found for {}", name))),
    }

    Ok(())
}
