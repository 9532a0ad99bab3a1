use std::fs;
use std::io::Read;

use clap::{Args, ValueEnum};
use health_triage::assessments::AssessmentService;
use health_triage::error::AppError;

/// Arguments for the offline assessment command.
#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Assessment type to score
    #[arg(value_enum)]
    pub(crate) kind: AssessmentKind,
    /// Path to a JSON answer document, or '-' to read from stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum AssessmentKind {
    CommonDiseases,
    Heart,
    Diabetes,
    Parkinsons,
}

fn read_input(source: &str) -> Result<String, AppError> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}

/// Score one answer document locally and print the prediction as JSON.
/// The delegate is never consulted here; this path exists for demos and
/// for spot-checking the scoring tables.
pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = read_input(&args.input)?;
    let service = AssessmentService::local();

    let rendered = match args.kind {
        AssessmentKind::CommonDiseases => {
            let prediction = service.symptoms(serde_json::from_str(&raw)?)?;
            serde_json::to_string_pretty(&prediction)?
        }
        AssessmentKind::Heart => {
            let prediction = service.heart(serde_json::from_str(&raw)?).await?;
            serde_json::to_string_pretty(&prediction)?
        }
        AssessmentKind::Diabetes => {
            let prediction = service.diabetes(serde_json::from_str(&raw)?).await?;
            serde_json::to_string_pretty(&prediction)?
        }
        AssessmentKind::Parkinsons => {
            let prediction = service.parkinsons(serde_json::from_str(&raw)?)?;
            serde_json::to_string_pretty(&prediction)?
        }
    };

    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_input_file() {
        let err = read_input("/definitely/not/a/file.json").expect_err("missing file errors");
        assert!(matches!(err, AppError::Io(_)));
    }
}
