use spendsight_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    if let Some(data) = &error.data
        && let Some(headers) = data.get("actual_headers").and_then(|value| value.as_array())
    {
        let names = headers
            .iter()
            .filter_map(|value| value.as_str())
            .collect::<Vec<&str>>();
        lines.push(String::new());
        lines.push(format!("Columns found: {}", names.join(", ")));
    }

    lines.join("\n")
}
