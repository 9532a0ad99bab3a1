//! Single-condition questionnaire scoring.
//!
//! Heart, diabetes, and parkinsons assessments share one mechanism: each
//! categorical answer contributes a fixed integer weight from a per-field
//! table, the weights sum to a raw score, and the score as a percentage of
//! the maximum possible decides a binary risk tier. Answers missing from a
//! table contribute zero rather than erroring.
//!
//! Confidence is a deterministic projection of the risk percentage onto a
//! per-assessment band. The bands match the ranges the product previously
//! randomized over, so published bounds still hold.

use super::super::domain::{DiabetesAnswers, HeartAnswers, ParkinsonsAnswers, RiskTier};

/// Mapping from a categorical answer value to an integer weight for one
/// questionnaire field.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    pub field: &'static str,
    pub weights: &'static [(&'static str, u32)],
}

impl WeightTable {
    pub fn weight(&self, answer: Option<&str>) -> u32 {
        let Some(answer) = answer else { return 0 };
        self.weights
            .iter()
            .find(|(value, _)| *value == answer)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    pub fn max_weight(&self) -> u32 {
        self.weights
            .iter()
            .map(|(_, weight)| *weight)
            .max()
            .unwrap_or(0)
    }
}

/// Confidence band: `base + span * pct / 100`, capped at `ceiling`.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceBand {
    pub base: f64,
    pub span: f64,
    pub ceiling: f64,
}

impl ConfidenceBand {
    fn project(&self, percentage: f64) -> f64 {
        (self.base + self.span * percentage / 100.0).min(self.ceiling)
    }
}

/// Static description of one questionnaire: its weight tables, the
/// percentage above which risk is "high", and the confidence band.
#[derive(Debug, Clone, Copy)]
pub struct QuestionnaireSpec {
    pub tables: &'static [WeightTable],
    pub high_threshold: f64,
    pub band: ConfidenceBand,
}

impl QuestionnaireSpec {
    pub fn max_score(&self) -> u32 {
        self.tables.iter().map(WeightTable::max_weight).sum()
    }

    pub fn evaluate(&self, answers: &[Option<&str>]) -> QuestionnaireOutcome {
        debug_assert_eq!(answers.len(), self.tables.len());

        let raw_score: u32 = self
            .tables
            .iter()
            .zip(answers)
            .map(|(table, answer)| table.weight(*answer))
            .sum();

        let max_score = self.max_score();
        let percentage = f64::from(raw_score) / f64::from(max_score) * 100.0;
        let risk = if percentage > self.high_threshold {
            RiskTier::High
        } else {
            RiskTier::Low
        };

        QuestionnaireOutcome {
            raw_score,
            max_score,
            percentage,
            risk,
            confidence: self.band.project(percentage),
        }
    }
}

/// Scoring result for a single-condition questionnaire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionnaireOutcome {
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk: RiskTier,
    pub confidence: f64,
}

pub const HEART: QuestionnaireSpec = QuestionnaireSpec {
    tables: &[
        WeightTable {
            field: "chestPain",
            weights: &[("often", 3), ("sometimes", 2), ("rarely", 1)],
        },
        WeightTable {
            field: "breathingDifficulty",
            weights: &[("severe", 3), ("moderate", 2), ("mild", 1)],
        },
        WeightTable {
            field: "fatigue",
            weights: &[("always", 3), ("often", 2), ("sometimes", 1)],
        },
        WeightTable {
            field: "heartRate",
            weights: &[("irregular", 3), ("fast", 2), ("slow", 1)],
        },
        WeightTable {
            field: "age",
            weights: &[("over60", 3), ("45-60", 2), ("30-45", 1)],
        },
        WeightTable {
            field: "exerciseHabits",
            weights: &[("rarely", 3), ("monthly", 2), ("weekly", 1)],
        },
    ],
    high_threshold: 50.0,
    band: ConfidenceBand {
        base: 75.0,
        span: 20.0,
        ceiling: 95.0,
    },
};

pub const DIABETES: QuestionnaireSpec = QuestionnaireSpec {
    tables: &[
        WeightTable {
            field: "excessiveThirst",
            weights: &[("often", 3), ("sometimes", 2), ("rarely", 1)],
        },
        WeightTable {
            field: "frequentUrination",
            weights: &[("much", 3), ("moderate", 2), ("slight", 1)],
        },
        WeightTable {
            field: "unexplainedWeightLoss",
            weights: &[("significant", 4), ("moderate", 3), ("slight", 1)],
        },
        WeightTable {
            field: "fatigue",
            weights: &[("always", 3), ("often", 2), ("sometimes", 1)],
        },
        WeightTable {
            field: "blurredVision",
            weights: &[("constantly", 3), ("frequently", 2), ("occasionally", 1)],
        },
        WeightTable {
            field: "slowHealingWounds",
            weights: &[("very", 3), ("much", 2), ("slightly", 1)],
        },
    ],
    high_threshold: 50.0,
    band: ConfidenceBand {
        base: 82.0,
        span: 12.0,
        ceiling: 94.0,
    },
};

pub const PARKINSONS: QuestionnaireSpec = QuestionnaireSpec {
    tables: &[
        WeightTable {
            field: "handShaking",
            weights: &[("often", 4), ("sometimes", 2), ("rarely", 1)],
        },
        WeightTable {
            field: "movementSlowness",
            weights: &[("significant", 4), ("moderate", 3), ("slight", 1)],
        },
        WeightTable {
            field: "muscleStiffness",
            weights: &[("frequently", 3), ("sometimes", 2), ("morning", 1)],
        },
        WeightTable {
            field: "balanceProblems",
            weights: &[("severe", 4), ("frequent", 3), ("occasional", 1)],
        },
        WeightTable {
            field: "voiceChanges",
            weights: &[("monotone", 3), ("hoarse", 2), ("softer", 1)],
        },
        WeightTable {
            field: "writingChanges",
            weights: &[("difficult", 3), ("shaky", 2), ("smaller", 1)],
        },
    ],
    high_threshold: 45.0,
    band: ConfidenceBand {
        base: 80.0,
        span: 15.0,
        ceiling: 92.0,
    },
};

pub fn heart_fields(answers: &HeartAnswers) -> [Option<&str>; 6] {
    [
        answers.chest_pain.as_deref(),
        answers.breathing_difficulty.as_deref(),
        answers.fatigue.as_deref(),
        answers.heart_rate.as_deref(),
        answers.age.as_deref(),
        answers.exercise_habits.as_deref(),
    ]
}

pub fn diabetes_fields(answers: &DiabetesAnswers) -> [Option<&str>; 6] {
    [
        answers.excessive_thirst.as_deref(),
        answers.frequent_urination.as_deref(),
        answers.unexplained_weight_loss.as_deref(),
        answers.fatigue.as_deref(),
        answers.blurred_vision.as_deref(),
        answers.slow_healing_wounds.as_deref(),
    ]
}

pub fn parkinsons_fields(answers: &ParkinsonsAnswers) -> [Option<&str>; 6] {
    [
        answers.hand_shaking.as_deref(),
        answers.movement_slowness.as_deref(),
        answers.muscle_stiffness.as_deref(),
        answers.balance_problems.as_deref(),
        answers.voice_changes.as_deref(),
        answers.writing_changes.as_deref(),
    ]
}

pub fn assess_heart(answers: &HeartAnswers) -> QuestionnaireOutcome {
    HEART.evaluate(&heart_fields(answers))
}

pub fn assess_diabetes(answers: &DiabetesAnswers) -> QuestionnaireOutcome {
    DIABETES.evaluate(&diabetes_fields(answers))
}

pub fn assess_parkinsons(answers: &ParkinsonsAnswers) -> QuestionnaireOutcome {
    PARKINSONS.evaluate(&parkinsons_fields(answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scores_match_table_sums() {
        assert_eq!(HEART.max_score(), 18);
        assert_eq!(DIABETES.max_score(), 19);
        assert_eq!(PARKINSONS.max_score(), 21);
    }

    #[test]
    fn worst_case_heart_answers_score_high() {
        let answers = HeartAnswers {
            chest_pain: Some("often".to_string()),
            breathing_difficulty: Some("severe".to_string()),
            fatigue: Some("always".to_string()),
            heart_rate: Some("irregular".to_string()),
            age: Some("over60".to_string()),
            exercise_habits: Some("rarely".to_string()),
        };
        let outcome = assess_heart(&answers);
        assert_eq!(outcome.raw_score, 18);
        assert_eq!(outcome.percentage, 100.0);
        assert_eq!(outcome.risk, RiskTier::High);
        assert_eq!(outcome.confidence, 95.0);
    }

    #[test]
    fn unrecognized_answers_contribute_zero() {
        let answers = HeartAnswers {
            chest_pain: Some("constantly".to_string()),
            ..HeartAnswers::default()
        };
        let outcome = assess_heart(&answers);
        assert_eq!(outcome.raw_score, 0);
        assert_eq!(outcome.risk, RiskTier::Low);
    }

    #[test]
    fn high_tier_iff_percentage_exceeds_threshold() {
        // 10 of 19 points is 52.6%, just over the diabetes threshold.
        let over = DiabetesAnswers {
            excessive_thirst: Some("often".to_string()),
            unexplained_weight_loss: Some("significant".to_string()),
            fatigue: Some("always".to_string()),
            ..DiabetesAnswers::default()
        };
        assert_eq!(assess_diabetes(&over).risk, RiskTier::High);

        // 9 of 19 points is 47.4%, under the threshold.
        let under = DiabetesAnswers {
            excessive_thirst: Some("often".to_string()),
            unexplained_weight_loss: Some("moderate".to_string()),
            fatigue: Some("always".to_string()),
            ..DiabetesAnswers::default()
        };
        assert_eq!(assess_diabetes(&under).risk, RiskTier::Low);
    }

    #[test]
    fn parkinsons_uses_lower_threshold() {
        // 10 of 21 points is 47.6%: high for parkinsons (>45), which would
        // be low under the shared 50% threshold.
        let answers = ParkinsonsAnswers {
            hand_shaking: Some("often".to_string()),
            movement_slowness: Some("moderate".to_string()),
            voice_changes: Some("monotone".to_string()),
            ..ParkinsonsAnswers::default()
        };
        let outcome = assess_parkinsons(&answers);
        assert!(outcome.percentage > 45.0 && outcome.percentage < 50.0);
        assert_eq!(outcome.risk, RiskTier::High);
    }

    #[test]
    fn confidence_stays_inside_assessment_band() {
        for raw in [ParkinsonsAnswers::default(), worst_parkinsons()] {
            let outcome = assess_parkinsons(&raw);
            assert!(outcome.confidence >= 80.0);
            assert!(outcome.confidence <= 92.0);
        }
    }

    fn worst_parkinsons() -> ParkinsonsAnswers {
        ParkinsonsAnswers {
            hand_shaking: Some("often".to_string()),
            movement_slowness: Some("significant".to_string()),
            muscle_stiffness: Some("frequently".to_string()),
            balance_problems: Some("severe".to_string()),
            voice_changes: Some("monotone".to_string()),
            writing_changes: Some("difficult".to_string()),
        }
    }

    #[test]
    fn confidence_is_deterministic() {
        let answers = HeartAnswers {
            chest_pain: Some("sometimes".to_string()),
            age: Some("45-60".to_string()),
            ..HeartAnswers::default()
        };
        assert_eq!(
            assess_heart(&answers).confidence,
            assess_heart(&answers).confidence
        );
    }
}
