//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use symposium_aggregator::{BranchReport, SubjectMaterial};
use symposium_domain::{format_year, PersonFacts, SourceBundle, Transcript};
use symposium_sources::Suggestion;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format facts for one subject.
    pub fn format_facts(&self, subject: &str, facts: &PersonFacts) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&facts_json(subject, facts))?),
            OutputFormat::Text => Ok(self.format_facts_table(subject, facts)),
        }
    }

    fn format_facts_table(&self, subject: &str, facts: &PersonFacts) -> String {
        let year = |y: Option<i32>| y.map(format_year).unwrap_or_else(|| "-".to_string());
        let era = if facts.era.is_empty() { "-" } else { facts.era.as_str() };
        let born = year(facts.birth_year);
        let died = year(facts.death_year);

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Subject", subject]);
        builder.push_record(["Era", era]);
        builder.push_record(["Born", born.as_str()]);
        builder.push_record(["Died", died.as_str()]);
        builder.push_record(["Deceased", if facts.deceased { "yes" } else { "no" }]);
        builder.push_record(["Confidence", facts.confidence.as_str()]);
        builder.push_record(["Description", facts.description.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format autocomplete suggestions.
    pub fn format_suggestions(&self, suggestions: &[Suggestion]) -> Result<String> {
        if self.format == OutputFormat::Json {
            let items: Vec<Value> = suggestions
                .iter()
                .map(|s| json!({ "title": s.title, "snippet": s.snippet }))
                .collect();
            return Ok(serde_json::to_string_pretty(&items)?);
        }

        if suggestions.is_empty() {
            return Ok(self.colorize("No matching people found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Title", "Snippet"]);
        for suggestion in suggestions {
            builder.push_record([suggestion.title.as_str(), suggestion.snippet.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        Ok(table.to_string())
    }

    /// Format aggregated material, one block per subject in request order.
    pub fn format_material(&self, materials: &[SubjectMaterial]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<Value> = materials
                    .iter()
                    .map(|m| {
                        let mut item = bundle_json(&m.bundle);
                        item["branches"] = report_json(&m.report);
                        item
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Text => {
                let blocks: Vec<String> = materials.iter().map(|m| self.material_text(m)).collect();
                Ok(blocks.join("\n\n"))
            }
        }
    }

    fn material_text(&self, material: &SubjectMaterial) -> String {
        let bundle = &material.bundle;
        let mut lines = vec![self.colorize(&material.subject, "cyan")];

        if bundle.is_empty() {
            lines.push(self.warning("No material found"));
        }
        if !bundle.quotes().is_empty() {
            lines.push("Quotes:".to_string());
            lines.extend(bundle.quotes().iter().map(|q| format!("  \"{}\"", q.text)));
        }
        if !bundle.works().is_empty() {
            lines.push("Works:".to_string());
            lines.extend(bundle.works().iter().map(|w| format!("  {}", w.title)));
        }
        if let Some(excerpt) = bundle.excerpt() {
            lines.push(format!("Excerpt from {}:", excerpt.work_title));
            lines.extend(excerpt.text.lines().map(|l| format!("  {}", l)));
        }

        let report = &material.report;
        lines.push(format!(
            "Branches: quotation {}, bibliography {}, full text {}",
            report.quotation, report.bibliography, report.full_text
        ));
        lines.join("\n")
    }

    /// Format a transcript.
    pub fn format_transcript(&self, transcript: &Transcript) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let turns: Vec<Value> = transcript
                    .iter()
                    .map(|t| {
                        json!({
                            "ordinal": t.ordinal,
                            "speaker": t.speaker_label,
                            "utterance": t.utterance,
                            "paragraphs": t.paragraphs(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&turns)?)
            }
            OutputFormat::Text => {
                let blocks: Vec<String> = transcript
                    .iter()
                    .map(|t| {
                        let mut block = self.colorize(&format!("{}:", t.speaker_label), "magenta");
                        for paragraph in t.paragraphs() {
                            block.push_str(&format!("\n  {}", paragraph.replace('\n', "\n  ")));
                        }
                        block
                    })
                    .collect();
                Ok(blocks.join("\n\n"))
            }
        }
    }

    /// Format a generated prompt.
    pub fn format_prompt(&self, prompt: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "prompt": prompt }))?),
            OutputFormat::Text => Ok(prompt.to_string()),
        }
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn facts_json(subject: &str, facts: &PersonFacts) -> Value {
    json!({
        "subject": subject,
        "era": facts.era,
        "birth_year": facts.birth_year,
        "death_year": facts.death_year,
        "deceased": facts.deceased,
        "confidence": facts.confidence.as_str(),
        "description": facts.description,
    })
}

fn bundle_json(bundle: &SourceBundle) -> Value {
    json!({
        "subject": bundle.subject(),
        "quotes": bundle.quotes().iter().map(|q| q.text.as_str()).collect::<Vec<_>>(),
        "works": bundle.works().iter().map(|w| w.title.as_str()).collect::<Vec<_>>(),
        "excerpt": bundle.excerpt().map(|e| json!({
            "work_title": e.work_title,
            "text": e.text,
        })),
    })
}

fn report_json(report: &BranchReport) -> Value {
    json!({
        "quotation": report.quotation.as_str(),
        "bibliography": report.bibliography.as_str(),
        "full_text": report.full_text.as_str(),
    })
}
