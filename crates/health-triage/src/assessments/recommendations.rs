//! Canned advisory text.
//!
//! The multi-symptom assessment composes three layers: a fixed base set,
//! a tier-specific set, and condition-specific sets appended for every
//! keyword the resolved condition label contains. The combined list is
//! capped at eight entries. Single-condition assessments use fixed
//! four-string lists keyed only by tier.

use super::domain::RiskTier;

/// Cap applied to the composed multi-symptom list.
pub const MAX_SYMPTOM_RECOMMENDATIONS: usize = 8;

const BASE: [&str; 3] = [
    "Monitor your symptoms closely and track any changes over time",
    "Maintain adequate hydration by drinking plenty of fluids",
    "Get sufficient rest and avoid strenuous activities",
];

fn tier_set(risk: RiskTier) -> &'static [&'static str] {
    match risk {
        RiskTier::High => &[
            "Seek immediate medical attention or emergency care",
            "Do not delay treatment due to symptom severity",
            "Have someone available to assist you if needed",
            "Prepare a list of all current medications for healthcare providers",
        ],
        RiskTier::Medium => &[
            "Schedule an appointment with your healthcare provider within 24-48 hours",
            "Monitor for any worsening of symptoms",
            "Consider telehealth consultation if in-person visit is not immediately available",
            "Keep track of symptom progression and triggers",
        ],
        RiskTier::Low => &[
            "Continue monitoring symptoms for improvement over the next few days",
            "Consider basic home remedies appropriate for your symptoms",
            "Consult a healthcare provider if symptoms persist beyond a week",
            "Maintain normal activities as tolerated",
        ],
    }
}

const CONDITION_SETS: [(&str, &[&str]); 4] = [
    (
        "respiratory",
        &[
            "Use a humidifier or breathe steam to ease respiratory symptoms",
            "Avoid smoke, dust, and other respiratory irritants",
            "Consider over-the-counter expectorants if appropriate",
        ],
    ),
    (
        "cardiovascular",
        &[
            "Avoid sudden exertion and monitor heart rate",
            "Keep a record of any chest pain or heart rhythm changes",
            "Ensure you have access to emergency services",
        ],
    ),
    (
        "gastrointestinal",
        &[
            "Follow the BRAT diet (bananas, rice, applesauce, toast) if experiencing nausea",
            "Avoid dairy, fatty foods, and caffeine temporarily",
            "Use oral rehydration solutions if experiencing fluid loss",
        ],
    ),
    (
        "neurological",
        &[
            "Rest in a quiet, dark environment for headache relief",
            "Avoid triggers such as bright lights, loud noises, or stress",
            "Keep a symptom diary to identify patterns",
        ],
    ),
];

/// Compose the capped advisory list for a multi-symptom result.
pub fn for_symptom_assessment(risk: RiskTier, condition: &str) -> Vec<String> {
    let mut recommendations: Vec<String> = BASE.iter().map(|s| s.to_string()).collect();
    recommendations.extend(tier_set(risk).iter().map(|s| s.to_string()));

    let condition_lower = condition.to_lowercase();
    for (keyword, set) in CONDITION_SETS {
        if condition_lower.contains(keyword) {
            recommendations.extend(set.iter().map(|s| s.to_string()));
        }
    }

    recommendations.truncate(MAX_SYMPTOM_RECOMMENDATIONS);
    recommendations
}

pub fn for_heart(risk: RiskTier) -> Vec<String> {
    let set: [&str; 4] = if risk == RiskTier::High {
        [
            "Consult with a cardiologist as soon as possible",
            "Monitor blood pressure regularly",
            "Consider lifestyle changes including diet and exercise",
            "Avoid smoking and excessive alcohol consumption",
        ]
    } else {
        [
            "Maintain regular exercise routine",
            "Follow a heart-healthy diet",
            "Schedule regular check-ups with your doctor",
            "Monitor any changes in symptoms",
        ]
    };
    set.iter().map(|s| s.to_string()).collect()
}

pub fn for_diabetes(risk: RiskTier) -> Vec<String> {
    let set: [&str; 4] = if risk == RiskTier::High {
        [
            "Schedule blood glucose testing immediately",
            "Consult with an endocrinologist",
            "Monitor blood sugar levels regularly",
            "Consider dietary changes and weight management",
        ]
    } else {
        [
            "Maintain a healthy diet and exercise routine",
            "Schedule regular blood sugar screenings",
            "Monitor weight and stay hydrated",
            "Be aware of diabetes risk factors",
        ]
    };
    set.iter().map(|s| s.to_string()).collect()
}

pub fn for_parkinsons(risk: RiskTier) -> Vec<String> {
    let set: [&str; 4] = if risk == RiskTier::High {
        [
            "Consult with a neurologist for comprehensive evaluation",
            "Consider DaTscan or other specialized tests",
            "Start physical therapy to maintain mobility",
            "Join support groups for patients and families",
        ]
    } else {
        [
            "Monitor symptoms and track any changes",
            "Maintain regular physical activity",
            "Schedule routine neurological check-ups",
            "Practice balance and coordination exercises",
        ]
    };
    set.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_begins_with_base_set_and_respects_cap() {
        let list = for_symptom_assessment(RiskTier::High, "Asthma/COPD Exacerbation");
        assert_eq!(&list[..3], &BASE.map(String::from));
        assert!(list.len() <= MAX_SYMPTOM_RECOMMENDATIONS);
    }

    #[test]
    fn condition_keywords_append_specific_advice() {
        let list = for_symptom_assessment(RiskTier::Low, "Respiratory Tract Infection");
        assert_eq!(list.len(), MAX_SYMPTOM_RECOMMENDATIONS);
        assert!(list
            .iter()
            .any(|s| s.contains("humidifier") || s.contains("respiratory irritants")));
    }

    #[test]
    fn unmatched_condition_gets_base_and_tier_only() {
        let list = for_symptom_assessment(RiskTier::Medium, "Viral Syndrome");
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn single_condition_lists_are_fixed_length() {
        assert_eq!(for_heart(RiskTier::High).len(), 4);
        assert_eq!(for_diabetes(RiskTier::Low).len(), 4);
        assert_eq!(for_parkinsons(RiskTier::High).len(), 4);
        assert_ne!(for_heart(RiskTier::High), for_heart(RiskTier::Low));
    }
}
