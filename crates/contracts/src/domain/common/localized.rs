//! Bilingual labels stored as a single string: `"English|fr:French"`.

/// Separator between the English and the French segment
pub const FRENCH_DELIMITER: &str = "|fr:";

/// Pick the label segment for `locale`.
///
/// Only French has a dedicated segment. Any other locale, an unset locale, or a
/// French locale without a French segment falls back to the English part.
pub fn localized_label(raw: &str, locale: Option<&str>) -> String {
    let (english, french) = match raw.split_once(FRENCH_DELIMITER) {
        Some((en, fr)) => (en, Some(fr)),
        None => (raw, None),
    };

    match (locale, french) {
        (Some("fr"), Some(fr)) if !fr.is_empty() => fr.to_string(),
        _ => english.to_string(),
    }
}
