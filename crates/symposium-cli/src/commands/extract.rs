//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use symposium_domain::PersonFacts;
use symposium_extractor::FactExtractor;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let facts = extract_facts(&text, &args.name, config)?;
    println!("{}", formatter.format_facts(args.name.trim(), &facts)?);
    Ok(())
}

/// Run the offline extraction over already loaded text.
pub fn extract_facts(text: &str, name: &str, config: &Config) -> Result<PersonFacts> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput("--name must not be empty".to_string()));
    }
    let extractor = FactExtractor::new(config.extractor.clone())?;
    Ok(extractor.extract(text, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_domain::Confidence;

    #[test]
    fn test_extract_facts_offline() {
        let facts = extract_facts(
            "Leonardo da Vinci (1452–1519) was an Italian polymath of the High Renaissance.",
            "Leonardo da Vinci",
            &Config::default(),
        )
        .unwrap();

        assert_eq!(facts.birth_year, Some(1452));
        assert_eq!(facts.death_year, Some(1519));
        assert_eq!(facts.confidence, Confidence::Certain);
    }

    #[test]
    fn test_extract_rejects_blank_name() {
        let result = extract_facts("Some text.", "  ", &Config::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_extract_rejects_invalid_config() {
        let mut config = Config::default();
        config.extractor.intro_window_chars = 0;
        let result = extract_facts("Some text.", "Someone", &config);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
