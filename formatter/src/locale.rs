// Locale lookup on top of the CLDR tables shipped with num-format
use crate::error::FormatError;
use num_format::Locale;

/// Resolves a locale tag such as "id", "id-ID" or "id_ID".
///
/// The full tag is tried first; on a miss, trailing subtags are dropped one at a
/// time until a known name is found, so "id-ID" resolves to "id".
pub fn resolve_locale(tag: &str) -> Result<Locale, FormatError> {
    let normalized = tag.trim().replace('_', "-");
    if normalized.is_empty() {
        return Err(FormatError::UnknownLocale(tag.to_string()));
    }

    let mut candidate = normalized.as_str();
    loop {
        if let Ok(locale) = Locale::from_name(candidate) {
            tracing::debug!(requested = %tag, resolved = locale.name(), "Resolved formatter locale");
            return Ok(locale);
        }
        match candidate.rfind('-') {
            Some(pos) => candidate = &candidate[..pos],
            None => return Err(FormatError::UnknownLocale(tag.to_string())),
        }
    }
}
