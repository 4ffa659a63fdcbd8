/// Render participant names as a JSON array for stdout.
pub fn render_names(names: &[String], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(names)
    } else {
        serde_json::to_string(names)
    }
}
