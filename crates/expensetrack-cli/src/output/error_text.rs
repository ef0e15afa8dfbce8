use expensetrack_client::ClientError;
use serde_json::Value;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    let issues = error
        .data
        .as_ref()
        .and_then(|data| data.get("issues"))
        .and_then(Value::as_array);
    if let Some(issues) = issues.filter(|issues| !issues.is_empty()) {
        lines.push(String::new());
        lines.push("Issues:".to_string());
        lines.extend(issues.iter().map(render_issue));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn render_issue(issue: &Value) -> String {
    let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
    let description = issue
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("");
    match issue.get("row").and_then(Value::as_i64) {
        Some(row) => format!("  - row {row}, {field}: {description}"),
        None => format!("  - {field}: {description}"),
    }
}

#[cfg(test)]
mod tests {
    use expensetrack_client::ClientError;
    use expensetrack_client::contracts::types::EntryIssue;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = ClientError::invalid_argument_with_recovery(
            "bad input",
            vec!["run expensetrack --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Something went wrong, but it's easy to fix."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run expensetrack --help"));
        assert!(!rendered.contains("Issues:"));
    }

    #[test]
    fn lists_validation_issues_before_recovery_steps() {
        let error = ClientError::entry_validation_failed(vec![EntryIssue {
            field: "amount".to_string(),
            code: "invalid_amount".to_string(),
            description: "Invalid amount.".to_string(),
        }]);

        let rendered = render_error(&error);
        assert!(rendered.contains("Issues:\n  - amount: Invalid amount."));
    }
}
