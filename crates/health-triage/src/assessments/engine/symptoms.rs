//! Multi-symptom (common diseases) scoring engine.
//!
//! Submitted symptom tokens are bucketed into six scoring categories by
//! substring containment; the bucketing is non-exclusive, so one token can
//! count toward several categories. The category with the strictly largest
//! match count drives the condition decision table, and a weighted sum of
//! match count, severity, duration, and total symptom count produces the
//! risk score.

use chrono::Utc;

use super::super::domain::{RiskTier, SubPrediction, SymptomPrediction, SymptomReport};
use super::super::recommendations;
use super::super::taxonomy::SymptomCategory;

/// Marker keywords per scoring category, in fixed priority order. Earlier
/// categories win dominance ties. These are the scoring subsets, narrower
/// than the full taxonomy catalog.
const SCORING_BUCKETS: [(SymptomCategory, &[&str]); 6] = [
    (
        SymptomCategory::Respiratory,
        &[
            "shortness_of_breath",
            "cough",
            "wheezing",
            "breathing_difficulty",
            "chest_tightness",
            "snoring",
            "throat_irritation",
            "hoarseness",
        ],
    ),
    (
        SymptomCategory::Cardiovascular,
        &[
            "sharp_chest_pain",
            "chest_pressure",
            "palpitations",
            "irregular_heartbeat",
            "rapid_heartbeat",
            "heart_murmur",
        ],
    ),
    (
        SymptomCategory::Gastrointestinal,
        &[
            "nausea",
            "vomiting",
            "diarrhea",
            "constipation",
            "abdominal_pain",
            "stomach_pain",
            "indigestion",
            "heartburn",
            "bloating",
        ],
    ),
    (
        SymptomCategory::Neurological,
        &[
            "headache",
            "dizziness",
            "confusion",
            "memory_problems",
            "seizures",
            "tremors",
            "numbness",
            "tingling",
            "weakness",
        ],
    ),
    (
        SymptomCategory::Musculoskeletal,
        &[
            "joint_pain",
            "muscle_pain",
            "back_pain",
            "neck_pain",
            "stiffness",
            "muscle_weakness",
        ],
    ),
    (
        SymptomCategory::General,
        &[
            "fever",
            "fatigue",
            "weakness",
            "weight_loss",
            "excessive_thirst",
            "chills",
        ],
    ),
];

pub(crate) fn severity_score(severity: Option<&str>) -> u32 {
    match severity {
        Some("moderate") => 2,
        Some("severe") => 3,
        _ => 1,
    }
}

pub(crate) fn duration_score(duration: Option<&str>) -> u32 {
    match duration {
        Some("3-7days") => 2,
        Some("1-2weeks") => 3,
        Some("over2weeks") => 4,
        _ => 1,
    }
}

struct CategoryMatches<'a> {
    category: SymptomCategory,
    matched: Vec<&'a str>,
}

impl CategoryMatches<'_> {
    fn count(&self) -> u32 {
        self.matched.len() as u32
    }

    fn any_contains(&self, keywords: &[&str]) -> bool {
        self.matched
            .iter()
            .any(|token| keywords.iter().any(|keyword| token.contains(keyword)))
    }
}

fn bucket_symptoms(symptoms: &[String]) -> Vec<CategoryMatches<'_>> {
    SCORING_BUCKETS
        .iter()
        .map(|(category, markers)| CategoryMatches {
            category: *category,
            matched: symptoms
                .iter()
                .map(String::as_str)
                .filter(|token| markers.iter().any(|marker| token.contains(marker)))
                .collect(),
        })
        .collect()
}

/// The category with a strictly greater match count than any earlier one.
/// Returns `None` when no category matched at all.
fn dominant<'a, 'b>(buckets: &'a [CategoryMatches<'b>]) -> Option<&'a CategoryMatches<'b>> {
    let mut best: Option<&CategoryMatches<'_>> = None;
    for bucket in buckets {
        if bucket.count() > best.map(CategoryMatches::count).unwrap_or(0) {
            best = Some(bucket);
        }
    }
    best
}

fn bucket_for<'a, 'b>(
    buckets: &'a [CategoryMatches<'b>],
    category: SymptomCategory,
) -> &'a CategoryMatches<'b> {
    buckets
        .iter()
        .find(|bucket| bucket.category == category)
        .unwrap_or(&buckets[0])
}

/// Condition decision table keyed on the dominant category and marker
/// symptoms inside it. Returns the label and base confidence.
fn classify(
    buckets: &[CategoryMatches<'_>],
    dominant: Option<&CategoryMatches<'_>>,
    total_symptoms: u32,
) -> (String, u32) {
    let Some(leader) = dominant else {
        return (
            "Non-specific Systemic Condition".to_string(),
            60 + total_symptoms * 2,
        );
    };
    let max_symptoms = leader.count();

    let (condition, confidence) = match leader.category {
        SymptomCategory::Respiratory => {
            if leader.any_contains(&["shortness_of_breath", "wheezing"]) {
                let condition = if max_symptoms >= 3 {
                    "Asthma/COPD Exacerbation"
                } else {
                    "Upper Respiratory Infection"
                };
                (condition, 85 + max_symptoms * 3)
            } else {
                ("Respiratory Tract Infection", 80 + max_symptoms * 2)
            }
        }
        SymptomCategory::Cardiovascular => {
            let condition = if max_symptoms >= 3 {
                "Cardiovascular Condition"
            } else {
                "Cardiac Arrhythmia"
            };
            (condition, 82 + max_symptoms * 4)
        }
        SymptomCategory::Gastrointestinal => {
            if leader.any_contains(&["diarrhea", "vomiting"]) {
                ("Acute Gastroenteritis", 88 + max_symptoms * 2)
            } else {
                ("Gastrointestinal Disorder", 78 + max_symptoms * 3)
            }
        }
        SymptomCategory::Neurological => {
            if leader.any_contains(&["headache"]) {
                let febrile = bucket_for(buckets, SymptomCategory::General).any_contains(&["fever"]);
                let condition = if febrile {
                    "Neurological Infection"
                } else {
                    "Primary Headache Disorder"
                };
                (condition, 83 + max_symptoms * 3)
            } else {
                ("Neurological Condition", 75 + max_symptoms * 4)
            }
        }
        SymptomCategory::Musculoskeletal => {
            let condition = if max_symptoms >= 3 {
                "Systemic Inflammatory Condition"
            } else {
                "Musculoskeletal Disorder"
            };
            (condition, 77 + max_symptoms * 3)
        }
        _ => {
            if leader.any_contains(&["fever"]) {
                ("Viral Syndrome", 85 + max_symptoms * 2)
            } else {
                ("Chronic Fatigue Syndrome", 70 + max_symptoms * 3)
            }
        }
    };

    (condition.to_string(), confidence)
}

fn sub_predictions(confidence: u32) -> Vec<SubPrediction> {
    let mut predictions = vec![
        SubPrediction {
            condition: "Viral Infection".to_string(),
            confidence: confidence.saturating_sub(8).max(35),
        },
        SubPrediction {
            condition: "Bacterial Infection".to_string(),
            confidence: confidence.saturating_sub(15).max(25),
        },
        SubPrediction {
            condition: "Autoimmune Disorder".to_string(),
            confidence: confidence.saturating_sub(25).max(20),
        },
        SubPrediction {
            condition: "Allergic Reaction".to_string(),
            confidence: confidence.saturating_sub(12).max(30),
        },
    ];
    predictions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    predictions
}

/// Score a validated symptom report.
pub fn assess(report: &SymptomReport) -> SymptomPrediction {
    let severity = severity_score(report.severity.as_deref());
    let duration = duration_score(report.duration.as_deref());
    let total_symptoms = report.symptoms.len() as u32;

    let buckets = bucket_symptoms(&report.symptoms);
    let leader = dominant(&buckets);
    let max_symptoms = leader.map(CategoryMatches::count).unwrap_or(0);

    let (condition, base_confidence) = classify(&buckets, leader, total_symptoms);

    let risk_score =
        (max_symptoms * 8 + severity * 15 + duration * 10 + total_symptoms * 2).min(100);

    let risk = if risk_score >= 75 || severity == 3 || max_symptoms >= 5 {
        RiskTier::High
    } else if risk_score >= 45 || severity == 2 || max_symptoms >= 3 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    let confidence = (base_confidence + severity * 2 + duration).min(98);

    SymptomPrediction {
        recommendations: recommendations::for_symptom_assessment(risk, &condition),
        sub_predictions: sub_predictions(confidence),
        condition,
        risk,
        confidence,
        risk_score,
        factors: report.clone(),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(symptoms: &[&str], duration: &str, severity: &str) -> SymptomReport {
        SymptomReport {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            duration: Some(duration.to_string()),
            severity: Some(severity.to_string()),
            age: None,
            medical_history: None,
        }
    }

    #[test]
    fn respiratory_breathing_markers_escalate_condition() {
        let prediction = assess(&report(
            &["shortness_of_breath", "wheezing", "cough"],
            "3-7days",
            "moderate",
        ));

        // 3*8 + 2*15 + 2*10 + 3*2 = 80
        assert_eq!(prediction.condition, "Asthma/COPD Exacerbation");
        assert_eq!(prediction.risk_score, 80);
        assert_eq!(prediction.risk, RiskTier::High);
    }

    #[test]
    fn respiratory_without_breathing_markers_stays_generic() {
        let prediction = assess(&report(&["cough", "hoarseness"], "1-2days", "mild"));
        assert_eq!(prediction.condition, "Respiratory Tract Infection");
    }

    #[test]
    fn severe_severity_always_high_tier() {
        let prediction = assess(&report(&["headache"], "1-2days", "severe"));
        assert_eq!(prediction.risk, RiskTier::High);
    }

    #[test]
    fn mild_single_symptom_is_low_tier() {
        let prediction = assess(&report(&["headache"], "1-2days", "mild"));
        assert_eq!(prediction.risk, RiskTier::Low);
        assert_eq!(prediction.condition, "Primary Headache Disorder");
    }

    #[test]
    fn headache_with_fever_reads_as_infection() {
        let prediction = assess(&report(&["headache", "dizziness", "fever"], "1-2days", "mild"));
        assert_eq!(prediction.condition, "Neurological Infection");
    }

    #[test]
    fn no_matching_category_falls_back() {
        let prediction = assess(&report(&["skin_rash"], "1-2days", "mild"));
        assert_eq!(prediction.condition, "Non-specific Systemic Condition");
        assert_eq!(prediction.confidence, (60 + 2) + 2 + 1);
    }

    #[test]
    fn earlier_category_wins_dominance_ties() {
        // One respiratory and one gastrointestinal match; respiratory is
        // declared first and keeps dominance.
        let prediction = assess(&report(&["cough", "nausea"], "1-2days", "mild"));
        assert_eq!(prediction.condition, "Respiratory Tract Infection");
    }

    #[test]
    fn risk_score_clamped_to_100() {
        let symptoms: Vec<&str> = vec![
            "shortness_of_breath",
            "cough",
            "wheezing",
            "breathing_difficulty",
            "chest_tightness",
            "snoring",
            "throat_irritation",
            "hoarseness",
        ];
        let prediction = assess(&report(&symptoms, "over2weeks", "severe"));
        assert_eq!(prediction.risk_score, 100);
        assert!(prediction.confidence <= 98);
    }

    #[test]
    fn sub_predictions_sorted_with_four_entries() {
        let prediction = assess(&report(&["cough"], "1-2days", "mild"));
        assert_eq!(prediction.sub_predictions.len(), 4);
        assert!(prediction
            .sub_predictions
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
    }

    #[test]
    fn unknown_severity_and_duration_default_to_one() {
        assert_eq!(severity_score(Some("catastrophic")), 1);
        assert_eq!(severity_score(None), 1);
        assert_eq!(duration_score(Some("forever")), 1);
    }

    #[test]
    fn scoring_is_idempotent() {
        let input = report(&["cough", "fever"], "3-7days", "moderate");
        let first = assess(&input);
        let second = assess(&input);
        assert_eq!(first.risk_score, second.risk_score);
        assert_eq!(first.risk, second.risk);
        assert_eq!(first.confidence, second.confidence);
    }
}
