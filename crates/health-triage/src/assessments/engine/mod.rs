//! Pure scoring engines. Everything in this module is a deterministic
//! function of the submitted answer set; validation happens upstream in the
//! service facade and I/O does not exist here.

pub mod questionnaire;
pub mod symptoms;

pub use questionnaire::{QuestionnaireOutcome, WeightTable};
