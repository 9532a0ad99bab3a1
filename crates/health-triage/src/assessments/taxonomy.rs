//! Static symptom taxonomy.
//!
//! Eleven body-system categories own fixed lists of symptom identifiers.
//! The catalog backs the grouped symptom picker on the client and is
//! consulted, never constructed, at runtime. Membership of a submitted
//! token is decided by case-sensitive substring containment, so one token
//! may fall into several categories or none.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymptomCategory {
    Respiratory,
    Cardiovascular,
    Gastrointestinal,
    Neurological,
    Musculoskeletal,
    Dermatological,
    Psychological,
    Ent,
    Ophthalmological,
    Genitourinary,
    General,
}

impl SymptomCategory {
    /// All categories in declaration order.
    pub const ALL: [SymptomCategory; 11] = [
        SymptomCategory::Respiratory,
        SymptomCategory::Cardiovascular,
        SymptomCategory::Gastrointestinal,
        SymptomCategory::Neurological,
        SymptomCategory::Musculoskeletal,
        SymptomCategory::Dermatological,
        SymptomCategory::Psychological,
        SymptomCategory::Ent,
        SymptomCategory::Ophthalmological,
        SymptomCategory::Genitourinary,
        SymptomCategory::General,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::Cardiovascular => "Cardiovascular",
            SymptomCategory::Gastrointestinal => "Gastrointestinal",
            SymptomCategory::Neurological => "Neurological",
            SymptomCategory::Musculoskeletal => "Musculoskeletal",
            SymptomCategory::Dermatological => "Dermatological",
            SymptomCategory::Psychological => "Psychological",
            SymptomCategory::Ent => "ENT (Ear, Nose, Throat)",
            SymptomCategory::Ophthalmological => "Ophthalmological",
            SymptomCategory::Genitourinary => "Genitourinary",
            SymptomCategory::General => "General",
        }
    }

    /// Symptom identifiers owned by this category.
    pub const fn symptoms(self) -> &'static [&'static str] {
        match self {
            SymptomCategory::Respiratory => &[
                "shortness_of_breath",
                "cough",
                "wheezing",
                "breathing_difficulty",
                "chest_tightness",
                "snoring",
                "throat_irritation",
                "hoarseness",
                "voice_changes",
                "respiratory_problems",
            ],
            SymptomCategory::Cardiovascular => &[
                "sharp_chest_pain",
                "chest_pressure",
                "palpitations",
                "irregular_heartbeat",
                "rapid_heartbeat",
                "chest_tightness",
                "heart_murmur",
                "circulation_problems",
                "blood_pressure_issues",
            ],
            SymptomCategory::Gastrointestinal => &[
                "nausea",
                "vomiting",
                "diarrhea",
                "constipation",
                "abdominal_pain",
                "stomach_pain",
                "indigestion",
                "heartburn",
                "bloating",
                "loss_of_appetite",
                "difficulty_swallowing",
                "rectal_bleeding",
                "bowel_problems",
                "digestive_issues",
            ],
            SymptomCategory::Neurological => &[
                "headache",
                "dizziness",
                "confusion",
                "memory_problems",
                "seizures",
                "tremors",
                "numbness",
                "tingling",
                "weakness",
                "paralysis",
                "coordination_problems",
                "balance_problems",
                "fainting",
                "loss_of_consciousness",
            ],
            SymptomCategory::Musculoskeletal => &[
                "joint_pain",
                "muscle_pain",
                "back_pain",
                "neck_pain",
                "shoulder_pain",
                "arm_pain",
                "leg_pain",
                "hip_pain",
                "knee_pain",
                "ankle_pain",
                "stiffness",
                "muscle_weakness",
                "joint_swelling",
                "bone_pain",
            ],
            SymptomCategory::Dermatological => &[
                "skin_rash",
                "itching",
                "skin_lesions",
                "bruising",
                "skin_discoloration",
                "hair_loss",
                "nail_problems",
                "skin_growth",
                "wounds",
                "swelling",
            ],
            SymptomCategory::Psychological => &[
                "anxiety_and_nervousness",
                "depression",
                "depressive_or_psychotic_symptoms",
                "mood_changes",
                "behavioral_problems",
                "stress",
                "panic_attacks",
                "irritability",
            ],
            SymptomCategory::Ent => &[
                "ear_pain",
                "hearing_problems",
                "nasal_congestion",
                "runny_nose",
                "nosebleeds",
                "sinus_problems",
                "throat_pain",
                "difficulty_speaking",
                "voice_hoarseness",
            ],
            SymptomCategory::Ophthalmological => &[
                "eye_problems",
                "vision_changes",
                "blurred_vision",
                "eye_pain",
                "eye_discharge",
                "sensitivity_to_light",
                "double_vision",
                "visual_disturbances",
            ],
            SymptomCategory::Genitourinary => &[
                "urinary_problems",
                "painful_urination",
                "frequent_urination",
                "blood_in_urine",
                "kidney_problems",
                "bladder_problems",
                "sexual_problems",
                "reproductive_issues",
            ],
            SymptomCategory::General => &[
                "fever",
                "fatigue",
                "weakness",
                "weight_loss",
                "weight_gain",
                "loss_of_appetite",
                "excessive_thirst",
                "excessive_sweating",
                "chills",
                "sleep_problems",
                "insomnia",
            ],
        }
    }

    /// Whether a submitted token belongs to this category.
    pub fn contains_token(self, token: &str) -> bool {
        self.symptoms().iter().any(|keyword| token.contains(keyword))
    }
}

/// One category group in the client-facing catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: &'static str,
    pub symptoms: &'static [&'static str],
}

/// Full catalog used to render grouped symptom checkboxes.
pub fn catalog() -> Vec<CategoryGroup> {
    SymptomCategory::ALL
        .iter()
        .map(|category| CategoryGroup {
            category: category.label(),
            symptoms: category.symptoms(),
        })
        .collect()
}
