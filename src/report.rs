//! The single line printed for each CLI outcome.

use crate::error::{CollectError, PullError};
use crate::services::PaletteRun;

/// Printed when no source path was given on the command line.
pub const MISSING_ARGUMENT: &str = "You have to specify a source path to an image or a directory.";

/// Printed when the source path does not exist.
pub const SOURCE_NOT_FOUND: &str = "The provided path does not exist.";

/// Format the outcome of a run as one line of user-facing text.
pub fn outcome_line(outcome: &anyhow::Result<PaletteRun>) -> String {
    match outcome {
        Ok(report) => format!(
            "Done! The palette image was written to \"{}\".",
            report.output.display()
        ),
        Err(e) => match e.downcast_ref::<PullError>() {
            Some(PullError::Collect(CollectError::NotFound(_))) => SOURCE_NOT_FOUND.to_string(),
            _ => format!("An error occurred while working on the source path: {e:#}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::services::CollectStats;
    use std::path::PathBuf;

    #[test]
    fn test_success_line_names_output() {
        let run = PaletteRun {
            output: PathBuf::from("/art/setPalette.png"),
            colours: 3,
            width: 1,
            height: 3,
            stats: CollectStats::default(),
        };
        assert_eq!(
            outcome_line(&Ok(run)),
            "Done! The palette image was written to \"/art/setPalette.png\"."
        );
    }

    #[test]
    fn test_missing_source_line() {
        let err = PullError::from(CollectError::NotFound(PathBuf::from("/nope")));
        assert_eq!(outcome_line(&Err(err.into())), SOURCE_NOT_FOUND);
    }

    #[test]
    fn test_other_errors_carry_cause() {
        let err = PullError::from(RenderError::OutputPath(PathBuf::from("/")));
        let line = outcome_line(&Err(err.into()));
        assert!(line.starts_with("An error occurred while working on the source path: "));
        assert!(line.contains("Cannot derive an output name from /"), "{line}");
        assert!(!line.contains('\n'));
    }
}
