//! Transcript loading and report rendering

use anyhow::{Context, Result};
use moodline_core::{ChatTurn, ConversationReport};
use std::path::Path;

/// Load chat turns from a JSON or YAML file.
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML, everything else as JSON.
pub fn load_turns(path: &Path) -> Result<Vec<ChatTurn>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    let turns = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML transcript {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON transcript {}", path.display()))?
    };

    Ok(turns)
}

/// Render a report for terminal output
pub fn render_text(report: &ConversationReport) -> String {
    let overall = report.overall();
    let mut out = format!(
        "Overall: {} ({:.3})\nTrend:   {}\n",
        overall.label(),
        overall.compound(),
        report.trend()
    );

    if report.per_message().is_empty() {
        out.push_str("No user messages.\n");
        return out;
    }

    out.push_str("Messages:\n");
    for (idx, message) in report.per_message().iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. [{:<8} {:>6.3}] {}\n",
            idx + 1,
            message.label(),
            message.compound(),
            message.text()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodline_core::{MessageSentiment, Role, SentimentResult};
    use std::collections::BTreeMap;
    use std::io::Write as _;

    #[test]
    fn test_load_json_transcript() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"role": "user", "text": "hi"}}, {{"role": "bot", "text": "hello"}}]"#
        )
        .unwrap();

        let turns = load_turns(file.path()).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Bot);
    }

    #[test]
    fn test_load_yaml_transcript() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "- role: user\n  text: this is bad\n  timestamp: 2024-05-01T10:00:00Z\n- role: assistant\n  text: sorry\n"
        )
        .unwrap();

        let turns = load_turns(file.path()).unwrap();
        assert_eq!(turns[0].role, Role::User);
        assert!(turns[0].timestamp.is_some());
        assert_eq!(turns[1].role, Role::Bot);
    }

    #[test]
    fn test_invalid_transcript() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"role": "narrator", "text": "hi"}}]"#).unwrap();

        assert!(load_turns(file.path()).is_err());
    }

    #[test]
    fn test_render_empty_report() {
        let text = render_text(&ConversationReport::empty());
        assert!(text.contains("Overall: Neutral (0.000)"));
        assert!(text.contains("Trend:   stable"));
        assert!(text.contains("No user messages."));
    }

    #[test]
    fn test_render_messages() {
        let message = |text: &str, compound: f64| {
            MessageSentiment::new(text, &SentimentResult::from_compound(compound, BTreeMap::new()))
        };
        let report = ConversationReport::from_messages(vec![
            message("this is bad", -0.5),
            message("fine", 0.0),
        ]);

        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Overall: Negative (-0.250)",
                "Trend:   improving",
                "Messages:",
                "   1. [Negative -0.500] this is bad",
                "   2. [Neutral   0.000] fine",
            ]
        );
    }
}
