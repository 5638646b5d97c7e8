use anyhow::Result;
use serde_json::json;
use tgsearch::ScreenOutcome;

/// Print a plain-text summary of the state the user left the screen in.
pub(crate) fn print_plain(outcome: &ScreenOutcome) {
    println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &ScreenOutcome) -> String {
    let mut lines = Vec::new();
    if outcome.phone.trim().is_empty() {
        lines.push("Phone: (empty)".to_string());
    } else {
        lines.push(format!("Phone: {}", outcome.phone));
    }

    if outcome.results.is_empty() {
        lines.push("Results: none".to_string());
    } else {
        lines.push(format!(
            "Results: {} groups, {} mentions",
            outcome.results.len(),
            total_mentions(outcome)
        ));
        for result in &outcome.results {
            lines.push(format!(
                "  {} [{}] {} messages, {} members, {}",
                result.group_name,
                result.group_kind,
                result.message_count,
                result.members,
                result.last_seen
            ));
        }
    }

    lines.push("History:".to_string());
    for entry in &outcome.history {
        lines.push(format!(
            "  {} | {} | {} results",
            entry.phone, entry.timestamp, entry.results_count
        ));
    }

    lines.join("\n")
}

/// Format the outcome as a JSON document.
pub(crate) fn format_outcome_json(outcome: &ScreenOutcome) -> Result<String> {
    let payload = json!({
        "phone": outcome.phone,
        "total_mentions": total_mentions(outcome),
        "results": outcome.results,
        "history": outcome.history,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &ScreenOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

fn total_mentions(outcome: &ScreenOutcome) -> u64 {
    outcome
        .results
        .iter()
        .map(|result| u64::from(result.message_count))
        .sum()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tgsearch::search::catalog;
    use tgsearch::{HistoryEntry, Locale, SearchHistory};

    use super::*;

    fn outcome() -> ScreenOutcome {
        ScreenOutcome {
            phone: "+7 (900) 000-00-00".to_string(),
            results: catalog::mock_results(Locale::En),
            history: SearchHistory::from_entries([HistoryEntry::new(
                "+7 (900) 000-00-00",
                "just now",
                5,
            )]),
        }
    }

    #[test]
    fn json_format_includes_results_and_history() {
        let json = format_outcome_json(&outcome()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["total_mentions"], 322);
        assert_eq!(value["results"][1]["group_kind"], "channel");
        assert_eq!(value["results"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["history"][0]["results_count"], 5);
    }

    #[test]
    fn plain_format_lists_history() {
        let text = format_outcome_plain(&outcome());
        assert!(text.contains("Results: 5 groups, 322 mentions"));
        assert!(text.contains("+7 (900) 000-00-00 | just now | 5 results"));
    }
}
