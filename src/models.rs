use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

/// Profile of the pet the daily checks belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Years.
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoolConsistency {
    #[default]
    Normal,
    Soft,
    Hard,
    Diarrhea,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symptoms {
    pub vomiting: bool,
    pub diarrhea: bool,
    pub lethargy: bool,
}

impl Symptoms {
    pub fn any(&self) -> bool {
        self.vomiting || self.diarrhea || self.lethargy
    }
}

/// One day's observations as submitted. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treats: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_intake: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom_frequency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stool_consistency: Option<StoolConsistency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Symptoms>,
}

impl DailyInput {
    /// Fills every absent field with its default. Values are not range checked.
    pub fn normalize(&self) -> DailyRecord {
        DailyRecord {
            meals: self.meals.unwrap_or(0),
            treats: self.treats.unwrap_or(0),
            water_intake: self.water_intake.unwrap_or(0),
            milk_intake: self.milk_intake.unwrap_or(false),
            activity_level: self.activity_level.unwrap_or(0),
            bathroom_frequency: self.bathroom_frequency.unwrap_or(0),
            stool_consistency: self.stool_consistency.unwrap_or_default(),
            symptoms: self.symptoms.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub meals: i32,
    pub treats: i32,
    pub water_intake: i32,
    pub milk_intake: bool,
    pub activity_level: i32,
    pub bathroom_frequency: i32,
    pub stool_consistency: StoolConsistency,
    pub symptoms: Symptoms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Digestive,
    Activity,
    Hydration,
    Symptoms,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Digestive => "digestive",
            AlertCategory::Activity => "activity",
            AlertCategory::Hydration => "hydration",
            AlertCategory::Symptoms => "symptoms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub score: f64,
    pub level: u8,
    pub alerts: Vec<HealthAlert>,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_a_valid_input() {
        let input: DailyInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, DailyInput::default());

        let record = input.normalize();
        assert_eq!(record.treats, 0);
        assert_eq!(record.activity_level, 0);
        assert!(!record.milk_intake);
        assert_eq!(record.stool_consistency, StoolConsistency::Normal);
        assert!(!record.symptoms.any());
    }

    #[test]
    fn partial_symptoms_default_missing_flags() {
        let input: DailyInput = serde_json::from_str(
            r#"{"waterIntake": 4, "stoolConsistency": "diarrhea", "symptoms": {"lethargy": true}}"#,
        )
        .unwrap();
        let record = input.normalize();
        assert_eq!(record.water_intake, 4);
        assert_eq!(record.stool_consistency, StoolConsistency::Diarrhea);
        assert!(record.symptoms.lethargy);
        assert!(!record.symptoms.vomiting);
        assert!(record.symptoms.any());
    }

    #[test]
    fn negative_counts_pass_through_normalization() {
        let input = DailyInput {
            activity_level: Some(-3),
            ..DailyInput::default()
        };
        assert_eq!(input.normalize().activity_level, -3);
    }

    #[test]
    fn pet_profile_round_trips_through_json() {
        let json = r#"{
            "id": "1717171717171",
            "name": "Biscuit",
            "species": "dog",
            "breed": "Beagle",
            "age": 4,
            "weight": 11.5,
            "createdAt": "2026-03-01T09:30:00Z"
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.age, 4);
        assert_eq!(pet.weight, 11.5);
        assert_eq!(pet.profile_picture, None);

        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(value["species"], "dog");
        assert!(value.get("profilePicture").is_none());
        assert_eq!(value["createdAt"], "2026-03-01T09:30:00Z");

        let back: Pet = serde_json::from_value(value).unwrap();
        assert_eq!(back, pet);
    }

    #[test]
    fn unknown_species_is_rejected() {
        let json = r#"{"id":"1","name":"Koi","species":"fish","breed":"Goldfish","age":1,"weight":0.1,"createdAt":"2026-03-01T09:30:00Z"}"#;
        assert!(serde_json::from_str::<Pet>(json).is_err());
    }

    #[test]
    fn alert_category_serializes_under_type_key() {
        let alert = HealthAlert {
            id: "hydration-1".to_string(),
            category: AlertCategory::Hydration,
            severity: Severity::Medium,
            title: "Hydration Alert".to_string(),
            description: "Low water intake detected".to_string(),
            recommendation: "Encourage more water consumption".to_string(),
        };
        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["type"], "hydration");
        assert_eq!(value["severity"], "medium");
    }
}
