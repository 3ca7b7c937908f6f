use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use samurai_types::{CharClassKind, HighlightSettings, MatchRange};
use samurai_charset::{classify_kinds, Classification};
use crate::commands::read_input;
use crate::config_manager::ConfigManager;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct ClassReport<'a> {
    class: CharClassKind,
    count: usize,
    matches: &'a [MatchRange],
}

pub fn classify_command(
    text: Option<String>,
    output: OutputFormat,
    config_manager: &ConfigManager,
) -> Result<()> {
    let settings = config_manager.load_settings()?;
    let input = read_input(text)?;

    let classification = classify_with_settings(&input, &settings);
    info!("Classified {} characters", classification.total());

    match output {
        OutputFormat::Pretty => print!("{}", format_classification(&classification)),
        OutputFormat::Json => {
            let reports: Vec<ClassReport> = classification
                .classes
                .iter()
                .map(|m| ClassReport {
                    class: m.kind,
                    count: m.ranges.len(),
                    matches: &m.ranges,
                })
                .collect();
            let json = serde_json::to_string_pretty(&reports)
                .context("Failed to serialize classification")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Classifies `text` against the classes enabled in `settings`.
pub fn classify_with_settings(text: &str, settings: &HighlightSettings) -> Classification {
    classify_kinds(text, &settings.enabled_classes())
}

fn format_classification(classification: &Classification) -> String {
    let mut out = String::new();
    for class in &classification.classes {
        out.push_str(&format!("{} ({}):\n", class.kind, class.ranges.len()));
        if class.ranges.is_empty() {
            out.push_str("  (none)\n");
        }
        for m in &class.ranges {
            out.push_str(&format!(
                "  {}..{}  {}  U+{:04X}\n",
                m.start, m.end, m.ch, m.ch as u32
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_respects_settings() {
        let settings = HighlightSettings {
            highlight_unicode_dependent_characters: false,
            highlight_platform_dependent_characters: false,
            ..HighlightSettings::default()
        };

        let classification = classify_with_settings("Ａ①～纊", &settings);
        let kinds: Vec<CharClassKind> = classification.classes.iter().map(|m| m.kind).collect();

        assert_eq!(kinds, vec![CharClassKind::FullPitch, CharClassKind::Incompatible]);
        assert_eq!(classification.total(), 2);
    }

    #[test]
    fn test_format_classification() {
        let classification = classify_with_settings("aＡ", &HighlightSettings::default());
        let text = format_classification(&classification);

        assert!(text.contains("full-pitch (1):\n  1..2  Ａ  U+FF21\n"));
        assert!(text.contains("incompatible (0):\n  (none)\n"));
    }
}
