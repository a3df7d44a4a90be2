//! javac-style `-A key=value` processor options

/// Parse one `key=value` pair. The value may itself contain `=`; an empty
/// value is kept as an empty string.
pub fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("option key is empty in '{}'", raw));
    }

    Ok((key.to_string(), value.to_string()))
}
