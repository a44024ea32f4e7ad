use crate::infra::read_submission;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{validate, ScoreBreakdown, ScoringEngine};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) file: PathBuf,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let breakdown = score_file(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_breakdown(&breakdown));
    }

    Ok(())
}

fn score_file(args: &ScoreArgs) -> Result<ScoreBreakdown, AppError> {
    let submission = read_submission(&args.file)?;
    let receipt = validate(submission)?;
    Ok(ScoringEngine::new().breakdown(&receipt))
}

fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::from("Receipt points\n");
    for component in &breakdown.components {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            component.rule.label(),
            component.points,
            component.notes
        ));
    }
    out.push_str(&format!("Total: {}\n", breakdown.total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points::receipts::{ReceiptServiceError, ValidationError};
    use std::fs;

    fn write_receipt(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "receipt-points-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, body).expect("write fixture");
        path
    }

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    }"#;

    #[test]
    fn scores_receipt_file() {
        let path = write_receipt("target", TARGET);
        let breakdown = score_file(&ScoreArgs {
            file: path.clone(),
            json: false,
        })
        .expect("scores file");
        fs::remove_file(path).ok();

        assert_eq!(breakdown.total, 28);
        let rendered = render_breakdown(&breakdown);
        assert!(rendered.contains("Retailer name: 6"));
        assert!(rendered.ends_with("Total: 28\n"));
    }

    #[test]
    fn invalid_receipt_file_reports_validation_error() {
        let path = write_receipt(
            "empty",
            r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","total":"1.00","items":[]}"#,
        );
        let result = score_file(&ScoreArgs {
            file: path.clone(),
            json: false,
        });
        fs::remove_file(path).ok();

        assert!(matches!(
            result,
            Err(AppError::Receipt(ReceiptServiceError::Validation(
                ValidationError::NoItems
            )))
        ));
    }

    #[test]
    fn malformed_file_is_a_decode_error() {
        let path = write_receipt("broken", "{ not json");
        let result = score_file(&ScoreArgs {
            file: path.clone(),
            json: true,
        });
        fs::remove_file(path).ok();

        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = score_file(&ScoreArgs {
            file: PathBuf::from("/definitely/not/here/receipt.json"),
            json: false,
        });
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
