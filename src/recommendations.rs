use crate::models::{AlertCategory, HealthScore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub id: &'static str,
    pub title: &'static str,
    pub tips: Vec<&'static str>,
}

fn wellness_card() -> RecommendationCard {
    RecommendationCard {
        id: "wellness",
        title: "Daily Wellness Tips",
        tips: vec![
            "Maintain consistent meal times",
            "Provide fresh water daily",
            "Regular playtime and exercise",
            "Monitor bathroom habits",
            "Keep up with regular vet checkups",
        ],
    }
}

pub fn card_for_category(category: AlertCategory) -> RecommendationCard {
    match category {
        AlertCategory::Digestive => RecommendationCard {
            id: "digestive",
            title: "Digestive Health",
            tips: vec![
                "Add fiber-rich foods to diet",
                "Reduce treats temporarily",
                "Consider probiotics for gut health",
                "Monitor stool consistency daily",
                "Consult vet if symptoms persist",
            ],
        },
        AlertCategory::Activity => RecommendationCard {
            id: "activity",
            title: "Exercise & Activity",
            tips: vec![
                "Increase daily walk duration",
                "Add interactive play sessions",
                "Use puzzle toys for mental stimulation",
                "Try new activities (fetch, tug-of-war)",
                "Consider dog park visits for socialization",
            ],
        },
        AlertCategory::Hydration => RecommendationCard {
            id: "hydration",
            title: "Hydration Support",
            tips: vec![
                "Add multiple water bowls around home",
                "Use a pet water fountain",
                "Mix wet food with dry food",
                "Check water freshness regularly",
                "Monitor water intake daily",
            ],
        },
        AlertCategory::Symptoms => RecommendationCard {
            id: "symptoms",
            title: "Symptom Monitoring",
            tips: vec![
                "Keep detailed symptom diary",
                "Monitor frequency and severity",
                "Contact veterinarian if persistent",
                "Avoid sudden diet changes",
                "Ensure comfortable rest area",
            ],
        },
    }
}

/// General wellness card first, then one card per alerted category in the
/// order the categories first appear among the alerts.
pub fn recommendation_cards(score: &HealthScore) -> Vec<RecommendationCard> {
    let mut cards = vec![wellness_card()];
    let mut seen: Vec<AlertCategory> = Vec::new();

    for alert in score.alerts.iter() {
        if seen.contains(&alert.category) {
            continue;
        }
        seen.push(alert.category);
        cards.push(card_for_category(alert.category));
    }

    cards
}
