//! Shared CLI utilities.

/// Parse the `--extensions` value into dotted, lowercase extensions.
///
/// `"go, GOX,.tmpl"` becomes `[".go", ".gox", ".tmpl"]`. Returns `None` when the
/// flag is absent or lists nothing usable.
pub fn parse_extensions(value: Option<&str>) -> Option<Vec<String>> {
    let extensions: Vec<String> = value?
        .split(',')
        .map(|part| part.trim().trim_start_matches('.'))
        .filter(|part| !part.is_empty())
        .map(|part| format!(".{}", part.to_lowercase()))
        .collect();
    (!extensions.is_empty()).then_some(extensions)
}
