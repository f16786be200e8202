use std::path::Path;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use crate::health;
use crate::history::HealthHistory;
use crate::models::{DailyInput, Pet, StoolConsistency, Symptoms};

#[derive(Debug, Clone, PartialEq)]
pub struct DailyCheck {
    pub date: Option<NaiveDate>,
    pub input: DailyInput,
}

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    date: Option<NaiveDate>,
    meals: Option<i32>,
    treats: Option<i32>,
    water_intake: Option<i32>,
    milk_intake: Option<bool>,
    activity_level: Option<i32>,
    bathroom_frequency: Option<i32>,
    stool_consistency: Option<StoolConsistency>,
    vomiting: Option<bool>,
    diarrhea: Option<bool>,
    lethargy: Option<bool>,
}

impl From<CsvRow> for DailyCheck {
    fn from(row: CsvRow) -> Self {
        let symptoms = if row.vomiting.is_none() && row.diarrhea.is_none() && row.lethargy.is_none()
        {
            None
        } else {
            Some(Symptoms {
                vomiting: row.vomiting.unwrap_or(false),
                diarrhea: row.diarrhea.unwrap_or(false),
                lethargy: row.lethargy.unwrap_or(false),
            })
        };

        DailyCheck {
            date: row.date,
            input: DailyInput {
                meals: row.meals,
                treats: row.treats,
                water_intake: row.water_intake,
                milk_intake: row.milk_intake,
                activity_level: row.activity_level,
                bathroom_frequency: row.bathroom_frequency,
                stool_consistency: row.stool_consistency,
                symptoms,
            },
        }
    }
}

pub fn read_checks(csv_path: &Path) -> anyhow::Result<Vec<DailyCheck>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut checks = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| {
            format!("invalid daily check on row {} of {}", index + 1, csv_path.display())
        })?;
        checks.push(DailyCheck::from(row));
    }

    debug!(count = checks.len(), path = %csv_path.display(), "loaded daily checks");
    Ok(checks)
}

pub fn read_pet(json_path: &Path) -> anyhow::Result<Pet> {
    let raw = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read {}", json_path.display()))?;
    let pet: Pet = serde_json::from_str(&raw)
        .with_context(|| format!("invalid pet profile in {}", json_path.display()))?;
    debug!(name = %pet.name, species = pet.species.as_str(), "loaded pet profile");
    Ok(pet)
}

/// Reads a history previously written by the `history` command.
pub fn read_history(json_path: &Path) -> anyhow::Result<HealthHistory> {
    let raw = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read {}", json_path.display()))?;
    let history: HealthHistory = serde_json::from_str(&raw)
        .with_context(|| format!("invalid score history in {}", json_path.display()))?;
    debug!(count = history.len(), path = %json_path.display(), "loaded score history");
    Ok(history)
}

pub fn score_checks<R: Rng + ?Sized>(checks: &[DailyCheck], rng: &mut R) -> HealthHistory {
    append_checks(HealthHistory::new(), checks, rng)
}

/// Scores the checks and appends them after the existing entries.
pub fn append_checks<R: Rng + ?Sized>(
    mut history: HealthHistory,
    checks: &[DailyCheck],
    rng: &mut R,
) -> HealthHistory {
    for check in checks {
        let at = check
            .date
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or_else(Utc::now);
        let score = health::evaluate_at(&check.input, health::draw_noise(rng), at);
        debug!(
            score = score.score,
            level = score.level,
            alerts = score.alerts.len(),
            "scored daily check"
        );
        history.push(score);
    }

    history
}
