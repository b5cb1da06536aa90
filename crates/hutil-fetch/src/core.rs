//! Pure helpers: header lookup and filename resolution.

/// Case-insensitive header lookup; the first match wins.
pub fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Filename from a `Content-Disposition` value.
///
/// Takes what follows `filename=`, up to the closing quote when quoted or
/// the next `;` otherwise. Names that are empty, `.`, `..` or contain a
/// path separator are rejected.
pub fn content_disposition_filename(value: &str) -> Option<String> {
    const TOKEN: &str = "filename=";
    let start = value.to_ascii_lowercase().find(TOKEN)? + TOKEN.len();
    let rest = value[start..].trim();

    let name = match rest.strip_prefix('"') {
        Some(quoted) => quoted.split('"').next().unwrap_or_default(),
        None => rest.split(';').next().unwrap_or_default(),
    }
    .trim();

    is_safe_filename(name).then(|| name.to_owned())
}

fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Name for a download into a directory: `Content-Disposition` first, then
/// the resolver's hint.
pub fn resolve_filename(headers: &[(String, String)], hint: Option<&str>) -> Option<String> {
    header_value(headers, "content-disposition")
        .and_then(content_disposition_filename)
        .or_else(|| hint.filter(|h| is_safe_filename(h)).map(str::to_owned))
}
