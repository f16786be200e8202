use std::fmt::Write;

use crate::health;
use crate::history::HealthHistory;
use crate::models::Pet;
use crate::recommendations;

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn build_report(pet: Option<&Pet>, history: &HealthHistory) -> String {
    let mut output = String::new();
    let pet_label = pet.map(|pet| pet.name.as_str()).unwrap_or("your pet");

    let _ = writeln!(output, "# Pet Health Report");
    let _ = writeln!(
        output,
        "Generated for {} across {}",
        pet_label,
        plural(history.len(), "daily check")
    );
    if let Some(pet) = pet {
        let _ = writeln!(
            output,
            "{} {}, {}, {:.1} kg",
            pet.breed,
            pet.species.as_str(),
            plural(pet.age as usize, "year"),
            pet.weight
        );
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "## Latest Check");

    let Some(latest) = history.latest() else {
        let _ = writeln!(output, "No daily checks recorded yet.");
        return output;
    };

    let _ = writeln!(
        output,
        "- Score {:.1} (level {}) on {}",
        latest.score,
        latest.level,
        latest.last_updated.date_naive()
    );
    let _ = writeln!(output, "- {}", health::advice_for_score(latest.score));

    if latest.alerts.is_empty() {
        let _ = writeln!(output, "- No active alerts.");
    } else {
        for alert in latest.alerts.iter() {
            let _ = writeln!(
                output,
                "- [{}] {}: {} ({})",
                alert.severity.as_str(),
                alert.title,
                alert.description,
                alert.recommendation
            );
        }
    }

    if let Some(summary) = history.summary() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Key Metrics");
        let _ = writeln!(output, "- Checks: {}", summary.checks);
        let _ = writeln!(output, "- Average score: {:.1}", summary.average_score);
        let _ = writeln!(output, "- Best score: {:.1}", summary.best_score);
        let _ = writeln!(output, "- Lowest score: {:.1}", summary.worst_score);
        let _ = writeln!(output, "- Improvement: {:+.1}", summary.improvement);
        let _ = writeln!(output, "- Streak: {}", plural(summary.streak_days, "day"));
    }

    let counts = history.alert_counts();
    let _ = writeln!(output);
    let _ = writeln!(output, "## Alert Mix");

    if counts.is_empty() {
        let _ = writeln!(output, "No alerts raised in this history.");
    } else {
        for entry in counts.iter() {
            let _ = writeln!(
                output,
                "- {}: {}",
                entry.category.as_str(),
                plural(entry.count, "alert")
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");
    for card in recommendations::recommendation_cards(latest) {
        let _ = writeln!(output, "### {}", card.title);
        for tip in card.tips {
            let _ = writeln!(output, "- {tip}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Score History");
    for entry in history.entries().iter().rev().take(10) {
        let _ = writeln!(
            output,
            "- {}: {:.1} (level {}, {})",
            entry.last_updated.date_naive(),
            entry.score,
            entry.level,
            plural(entry.alerts.len(), "alert")
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::evaluate_at;
    use crate::models::{DailyInput, Species};
    use chrono::{TimeZone, Utc};

    fn biscuit() -> Pet {
        Pet {
            id: "1717171717171".to_string(),
            name: "Biscuit".to_string(),
            species: Species::Dog,
            breed: "Beagle".to_string(),
            age: 4,
            weight: 11.5,
            profile_picture: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn empty_history_renders_fallback() {
        let report = build_report(None, &HealthHistory::new());
        assert!(report.contains("Generated for your pet across 0 daily checks"));
        assert!(!report.contains(" kg"));
        assert!(report.contains("No daily checks recorded yet."));
        assert!(!report.contains("## Recommendations"));
    }

    #[test]
    fn report_covers_latest_check_and_history() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let mut history = HealthHistory::new();
        history.push(evaluate_at(&DailyInput::default(), 0.0, at));

        let pet = biscuit();
        let report = build_report(Some(&pet), &history);
        assert!(report.contains("Generated for Biscuit across 1 daily check\n"));
        assert!(report.contains("Beagle dog, 4 years, 11.5 kg"));
        assert!(report.contains("- Score 78.0 (level 8) on 2026-03-02"));
        assert!(report.contains("Good health with room for improvement."));
        assert!(report.contains("[medium] Hydration Alert"));
        assert!(report.contains("- activity: 1 alert\n"));
        assert!(report.contains("- Streak: 1 day\n"));
        assert!(report.contains("### Daily Wellness Tips"));
        assert!(report.contains("### Hydration Support"));
        assert!(report.contains("- Improvement: +0.0"));
        assert!(report.contains("- 2026-03-02: 78.0 (level 8, 2 alerts)"));
    }

    #[test]
    fn counts_use_singular_and_plural_forms() {
        assert_eq!(plural(1, "alert"), "1 alert");
        assert_eq!(plural(0, "alert"), "0 alerts");
        assert_eq!(plural(3, "day"), "3 days");
    }
}
