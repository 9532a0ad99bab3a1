//! Assessment intake, scoring, and recommendation pipeline.
//!
//! Four assessment types share one service facade: the multi-symptom
//! common-diseases screen and three single-condition questionnaires (heart,
//! diabetes, parkinsons). Scoring is pure and table-driven; the only I/O is
//! the optional delegate call for heart and diabetes.

pub mod delegate;
pub mod domain;
pub mod engine;
pub mod recommendations;
pub mod router;
pub mod service;
pub mod taxonomy;

pub use delegate::{DelegateError, DelegateGateway, DelegateVerdict, HttpDelegate};
pub use domain::{
    ConditionPrediction, DiabetesAnswers, HeartAnswers, ParkinsonsAnswers, RiskTier, SubPrediction,
    SymptomPrediction, SymptomReport,
};
pub use router::assessment_router;
pub use service::{AssessmentService, ValidationError};
pub use taxonomy::SymptomCategory;
