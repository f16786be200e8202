use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{
    AlertCategory, DailyInput, DailyRecord, HealthAlert, HealthScore, Severity, StoolConsistency,
};

pub const BASE_SCORE: f64 = 100.0;
pub const NOISE_BOUND: f64 = 5.0;

const TREAT_ACTIVITY_PENALTY: f64 = 15.0;
const STOOL_PENALTY: f64 = 20.0;
const LOW_ACTIVITY_PENALTY: f64 = 10.0;
const HYDRATION_PENALTY: f64 = 12.0;
const SYMPTOM_PENALTY: f64 = 25.0;

fn alert(
    id: &str,
    category: AlertCategory,
    severity: Severity,
    title: &str,
    description: &str,
    recommendation: &str,
) -> HealthAlert {
    HealthAlert {
        id: id.to_string(),
        category,
        severity,
        title: title.to_string(),
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// Runs every rule against the record and returns the pre-noise score with
/// the triggered alerts in rule order.
pub fn assess(record: &DailyRecord) -> (f64, Vec<HealthAlert>) {
    let mut score = BASE_SCORE;
    let mut alerts = Vec::new();

    if record.treats > 3 && record.activity_level < 3 {
        score -= TREAT_ACTIVITY_PENALTY;
        alerts.push(alert(
            "digestive-1",
            AlertCategory::Digestive,
            Severity::Medium,
            "Digestive Alert",
            "High treat intake with low activity may affect digestion",
            "Reduce treats and increase physical activity",
        ));
    }

    if matches!(
        record.stool_consistency,
        StoolConsistency::Soft | StoolConsistency::Diarrhea
    ) {
        score -= STOOL_PENALTY;
        let severity = if record.stool_consistency == StoolConsistency::Diarrhea {
            Severity::High
        } else {
            Severity::Medium
        };
        alerts.push(alert(
            "digestive-2",
            AlertCategory::Digestive,
            severity,
            "Digestive Concern",
            "Abnormal stool consistency detected",
            "Monitor closely and consult vet if persistent",
        ));
    }

    if record.activity_level < 2 {
        score -= LOW_ACTIVITY_PENALTY;
        alerts.push(alert(
            "activity-1",
            AlertCategory::Activity,
            Severity::Low,
            "Low Activity Alert",
            "Pet needs more physical activity",
            "Increase walk time and play sessions",
        ));
    }

    if record.water_intake < 3 {
        score -= HYDRATION_PENALTY;
        alerts.push(alert(
            "hydration-1",
            AlertCategory::Hydration,
            Severity::Medium,
            "Hydration Alert",
            "Low water intake detected",
            "Encourage more water consumption",
        ));
    }

    // One alert no matter how many flags are set.
    if record.symptoms.any() {
        score -= SYMPTOM_PENALTY;
        alerts.push(alert(
            "symptoms-1",
            AlertCategory::Symptoms,
            Severity::High,
            "Symptom Alert",
            "Concerning symptoms detected",
            "Monitor closely and consult veterinarian",
        ));
    }

    (score, alerts)
}

/// Level 11 is reachable: a score of exactly 100 maps past the 1..=10 tiers.
/// Scores outside 0..=100 are clamped first; NaN maps to level 1.
pub fn level_for_score(score: f64) -> u8 {
    let score = score.clamp(0.0, BASE_SCORE);
    (score / 10.0).floor() as u8 + 1
}

pub fn evaluate_at(input: &DailyInput, noise: f64, at: DateTime<Utc>) -> HealthScore {
    let record = input.normalize();
    let (base, alerts) = assess(&record);

    let noise = if noise.is_finite() {
        noise.clamp(-NOISE_BOUND, NOISE_BOUND)
    } else {
        0.0
    };
    let score = (base + noise).clamp(0.0, BASE_SCORE);

    HealthScore {
        score,
        level: level_for_score(score),
        alerts,
        last_updated: at,
    }
}

pub fn evaluate(input: &DailyInput, noise: f64) -> HealthScore {
    evaluate_at(input, noise, Utc::now())
}

pub fn draw_noise<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-NOISE_BOUND..NOISE_BOUND)
}

pub fn evaluate_with_rng<R: Rng + ?Sized>(input: &DailyInput, rng: &mut R) -> HealthScore {
    evaluate(input, draw_noise(rng))
}

pub fn advice_for_score(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent! Your pet is in great health. Keep up the good work!"
    } else if score >= 70.0 {
        "Good health with room for improvement. Check the recommendations below."
    } else if score >= 50.0 {
        "Some concerns detected. Please review the alerts and take action."
    } else {
        "Multiple health issues detected. Consider consulting your veterinarian."
    }
}
