/// Re-indents JSON text for display, returning the input untouched if it does
/// not parse.
pub fn pretty_print_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_string())
}
