//! Rendering of validation results

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::ValidationOutcome;

/// Render the failures of a batch in the requested format.
///
/// The JSON format is the list of failure records callers consume; the text
/// format is a numbered list for people.
pub fn render(failures: &[ValidationOutcome], format: &str) -> Result<String> {
    if format == output_formats::TEXT {
        return Ok(render_text(failures));
    }
    Ok(serde_json::to_string(failures)?)
}

fn render_text(failures: &[ValidationOutcome]) -> String {
    if failures.is_empty() {
        return "No issues!".to_string();
    }

    let mut lines = vec![format!("> Issues ({})", failures.len())];
    lines.extend(
        failures
            .iter()
            .enumerate()
            .map(|(i, failure)| format!("{:4}. {}", i + 1, failure)),
    );
    lines.join("\n")
}
