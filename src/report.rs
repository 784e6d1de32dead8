// src/report.rs
// =============================================================================
// Renders the final list, either as a table or as JSON.
//
// Everything is written to a `Write` so tests can render into a buffer
// instead of stdout.
// =============================================================================

use anyhow::Result;
use std::io::Write;

use crate::github::{TopRepository, NO_TOP_CONTRIBUTOR};

pub fn print_results(out: &mut impl Write, repositories: &[TopRepository], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(repositories)?;
        writeln!(out, "{}", json_output)?;
    } else {
        print_table(out, repositories)?;
    }
    Ok(())
}

fn print_table(out: &mut impl Write, repositories: &[TopRepository]) -> Result<()> {
    writeln!(out, "{:<6} {:<45} {:<30} {}", "RANK", "REPOSITORY", "TOP CONTRIBUTOR", "URL")?;
    writeln!(out, "{}", "=".repeat(110))?;

    for repository in repositories {
        writeln!(
            out,
            "{:<6} {:<45} {:<30} {}",
            // Ranks are 0-based internally, people count from 1
            repository.rank + 1,
            truncate(&repository.name, 45),
            truncate(&repository.top_contributor, 30),
            repository.url
        )?;
    }

    writeln!(out)?;

    let missing = repositories
        .iter()
        .filter(|r| r.top_contributor == NO_TOP_CONTRIBUTOR)
        .count();

    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   📋 Repositories: {}", repositories.len())?;
    writeln!(out, "   👤 With top contributor: {}", repositories.len() - missing)?;
    writeln!(out, "   ❔ Without: {}", missing)?;
    Ok(())
}

// Shortens long names so the columns stay aligned
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn sample() -> Vec<TopRepository> {
        vec![
            TopRepository {
                rank: 0,
                url: Url::parse("https://github.com/a/a").unwrap(),
                name: "a/a".to_string(),
                top_contributor: "alice".to_string(),
            },
            TopRepository {
                rank: 1,
                url: Url::parse("https://github.com/b/b").unwrap(),
                name: "b/b".to_string(),
                top_contributor: NO_TOP_CONTRIBUTOR.to_string(),
            },
        ]
    }

    #[test]
    fn table_lists_every_repository_in_order() {
        let mut buffer = Vec::new();
        print_results(&mut buffer, &sample(), false).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let a = text.find("a/a").unwrap();
        let b = text.find("b/b").unwrap();
        assert!(a < b);
        assert!(text.contains("alice"));
        assert!(text.contains(NO_TOP_CONTRIBUTOR));
        assert!(text.contains("With top contributor: 1"));
        assert!(text.contains("Without: 1"));
    }

    #[test]
    fn json_output_is_an_array_in_rank_order() {
        let mut buffer = Vec::new();
        print_results(&mut buffer, &sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["rank"], 0);
        assert_eq!(entries[0]["top_contributor"], "alice");
        assert_eq!(entries[1]["rank"], 1);
        assert_eq!(entries[1]["top_contributor"], NO_TOP_CONTRIBUTOR);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
