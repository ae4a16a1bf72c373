use crate::error::ConfigError;

/// Splits a `{points/skip}` label into its two raw integers.
///
/// Only the syntax is checked here. Sign and ordering rules are enforced by
/// [`StarParameters::new`](super::StarParameters::new).
///
/// # Errors
///
/// Returns [`ConfigError::MalformedStarLabel`] if the braces or the slash are
/// missing, or either side is not an integer.
pub fn parse_star_label(label: &str) -> Result<(i64, i64), ConfigError> {
    let malformed = || ConfigError::MalformedStarLabel(label.to_owned());

    let inner = label
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(malformed)?;
    let (points, skip) = inner.split_once('/').ok_or_else(malformed)?;

    let points = points.trim().parse::<i64>().map_err(|_| malformed())?;
    let skip = skip.trim().parse::<i64>().map_err(|_| malformed())?;
    Ok((points, skip))
}
