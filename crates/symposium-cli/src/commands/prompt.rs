//! Prompt command implementation.

use crate::cli::PromptArgs;
use crate::commands::material::clean_names;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use futures::future::join_all;
use symposium_aggregator::{MaterialAggregator, SubjectMaterial};
use symposium_dialogue::PromptBuilder;
use symposium_domain::{GuestRoster, PersonFacts};
use symposium_extractor::FactExtractor;
use symposium_sources::SourceSet;
use tracing::info;

/// Execute the prompt command.
///
/// Biography lookups and material aggregation run concurrently; each guest
/// is seated in a fresh roster owned by this command.
pub async fn execute_prompt(args: PromptArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let names = clean_names(&args.names)?;
    let topic = args.topic.trim();
    if topic.is_empty() {
        return Err(CliError::InvalidInput("--topic must not be empty".to_string()));
    }

    let sources = SourceSet::from_config(&config.sources)?;
    let extractor = FactExtractor::new(config.extractor.clone())?;
    let biography = sources.biography.clone();
    let aggregator = MaterialAggregator::from_sources(sources, config.aggregator.clone())?;

    let (facts, materials) = tokio::join!(
        join_all(names.iter().map(|name| extractor.lookup(&biography, name))),
        aggregator.aggregate_all(&names),
    );

    let mut roster = GuestRoster::new();
    let ids: Vec<String> = names
        .iter()
        .zip(&facts)
        .map(|(name, facts)| seat_guest(&mut roster, name, facts.as_ref()))
        .collect();
    info!(guests = ids.len(), topic, "Guests seated");

    let prompt = build_prompt(topic, &roster, &ids, materials);
    println!("{}", formatter.format_prompt(&prompt)?);

    Ok(())
}

/// Add a guest for `name` to the roster and return its id.
///
/// Without facts the guest gets the roster's default era and description.
pub(crate) fn seat_guest(roster: &mut GuestRoster, name: &str, facts: Option<&PersonFacts>) -> String {
    let (era, description) = match facts {
        Some(facts) => (guest_era(facts), facts.description.clone()),
        None => (String::new(), String::new()),
    };
    roster.add_custom(name, &era, &description).id.clone()
}

fn guest_era(facts: &PersonFacts) -> String {
    if !facts.era.is_empty() {
        return facts.era.clone();
    }
    facts.lifespan_label().unwrap_or_default()
}

/// Build the prompt for the seated guests, pairing each with its material.
pub(crate) fn build_prompt(
    topic: &str,
    roster: &GuestRoster,
    ids: &[String],
    materials: Vec<SubjectMaterial>,
) -> String {
    roster
        .get_many(ids)
        .into_iter()
        .zip(materials)
        .fold(PromptBuilder::new(topic), |builder, (guest, material)| {
            builder.participant(guest, Some(material.bundle))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_aggregator::{BranchReport, BranchStatus};
    use symposium_domain::guest::{DEFAULT_DESCRIPTION, DEFAULT_ERA};
    use symposium_domain::{Confidence, Quote, SourceBundle};

    fn material(subject: &str, quotes: Vec<Quote>) -> SubjectMaterial {
        let delivered = if quotes.is_empty() {
            BranchStatus::Empty
        } else {
            BranchStatus::Delivered
        };
        SubjectMaterial {
            subject: subject.to_string(),
            bundle: SourceBundle::new(subject, quotes, Vec::new(), None),
            report: BranchReport {
                quotation: delivered,
                bibliography: BranchStatus::Empty,
                full_text: BranchStatus::Empty,
            },
        }
    }

    #[test]
    fn test_seat_guest_uses_facts() {
        let mut roster = GuestRoster::new();
        let facts = PersonFacts {
            era: String::new(),
            birth_year: Some(1867),
            death_year: Some(1934),
            deceased: true,
            confidence: Confidence::Certain,
            description: "Physicist and chemist".to_string(),
        };

        let id = seat_guest(&mut roster, "Marie Curie", Some(&facts));
        let guest = roster.get(&id).unwrap();

        assert_eq!(guest.era, "1867 – 1934");
        assert_eq!(guest.description, "Physicist and chemist");
        assert_eq!(guest.initials, "MC");
    }

    #[test]
    fn test_seat_guest_without_facts_uses_defaults() {
        let mut roster = GuestRoster::new();
        let id = seat_guest(&mut roster, "Nobody Known", None);
        let guest = roster.get(&id).unwrap();

        assert_eq!(guest.era, DEFAULT_ERA);
        assert_eq!(guest.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_build_prompt_pairs_guests_with_material() {
        let mut roster = GuestRoster::new();
        let ids = vec![
            seat_guest(&mut roster, "Plato", None),
            seat_guest(&mut roster, "Seneca", None),
        ];
        let materials = vec![
            material("Plato", Vec::new()),
            material(
                "Seneca",
                vec![Quote::new("Luck is what happens when preparation meets opportunity.")],
            ),
        ];

        let prompt = build_prompt("fortune", &roster, &ids, materials);

        assert!(prompt.contains("PARTICIPANTS AND SOURCE MATERIAL:"));
        assert!(prompt.contains("VERIFIED QUOTES from Seneca:"));
        assert!(!prompt.contains("VERIFIED QUOTES from Plato:"));
        assert!(prompt.find("- Plato").unwrap() < prompt.find("- Seneca").unwrap());
        assert!(prompt.contains("TOPIC: They are discussing fortune."));
    }
}
