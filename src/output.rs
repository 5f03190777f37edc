//! Rendering of search outcomes for the terminal

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::search::SearchOutcome;

/// How an outcome is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The index, or -1
    #[default]
    Plain,
    /// One JSON object per sequence
    Json,
    /// Human readable sentence
    Text,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    index: i64,
    value: Option<i64>,
    found: bool,
}

/// Render an outcome for the sequence it was computed on
pub fn render(
    outcome: SearchOutcome,
    sequence: &[i64],
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let value = outcome.index().and_then(|i| sequence.get(i).copied());

    let rendered = match format {
        OutputFormat::Plain => outcome.as_sentinel().to_string(),
        OutputFormat::Json => serde_json::to_string(&Report {
            index: outcome.as_sentinel(),
            value,
            found: outcome.is_found(),
        })?,
        OutputFormat::Text => match (outcome.index(), value) {
            (Some(index), Some(value)) if color => format!(
                "minimum {} at index {}",
                value.to_string().green().bold(),
                index.to_string().cyan()
            ),
            (Some(index), Some(value)) => format!("minimum {} at index {}", value, index),
            _ if color => format!("{} (-1)", "no minimum found".red()),
            _ => "no minimum found (-1)".to_string(),
        },
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let seq = [2, 2, 2, 0, 2, 2];
        assert_eq!(render(SearchOutcome::Found(3), &seq, OutputFormat::Plain, false).unwrap(), "3");
        assert_eq!(
            render(SearchOutcome::InvariantViolation, &seq, OutputFormat::Plain, false).unwrap(),
            "-1"
        );
    }

    #[test]
    fn test_render_json() {
        let seq = [2, 1];
        let json = render(SearchOutcome::Found(1), &seq, OutputFormat::Json, false).unwrap();
        assert_eq!(json, r#"{"index":1,"value":1,"found":true}"#);

        let json = render(SearchOutcome::InvariantViolation, &seq, OutputFormat::Json, false).unwrap();
        assert_eq!(json, r#"{"index":-1,"value":null,"found":false}"#);
    }

    #[test]
    fn test_render_text_without_color() {
        let seq = [5, 6, 1];
        let text = render(SearchOutcome::Found(2), &seq, OutputFormat::Text, false).unwrap();
        assert_eq!(text, "minimum 1 at index 2");

        let text = render(SearchOutcome::InvariantViolation, &seq, OutputFormat::Text, false).unwrap();
        assert_eq!(text, "no minimum found (-1)");
    }

    #[test]
    fn test_render_text_with_color() {
        let text = render(SearchOutcome::Found(0), &[4], OutputFormat::Text, true).unwrap();
        assert!(text.contains("minimum"));
        assert!(text.contains("index"));
    }
}
