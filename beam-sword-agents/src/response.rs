const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strip the markdown fence and surrounding newlines the model sometimes
/// wraps its JSON answer in. Idempotent.
pub fn trim_response(content: &str) -> String {
    let mut content = content.trim_matches('\n');

    while let Some(rest) = content.strip_prefix(JSON_FENCE) {
        content = rest.strip_suffix(FENCE).unwrap_or(rest).trim_matches('\n');
    }

    content.to_string()
}
