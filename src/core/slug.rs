use crate::utils::error::{DirectoryError, Result};

/// Separates the normalized name from the registration digits. Resolution
/// always uses the rightmost occurrence, so names containing "crp" stay
/// decodable.
pub const SLUG_MARKER: &str = "-crp-";

const MIN_CODE_DIGITS: usize = 3;

/// Canonical slug for a listing: normalized display name, the marker, then
/// the digits of the registration code. The name portion is lossy; only the
/// registration code round-trips.
pub fn listing_slug(display_name: &str, registration_code: &str) -> String {
    let name = normalize_name(display_name);
    let digits: String = registration_code
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("{}{}{}", name, SLUG_MARKER, digits)
}

/// Recover the registration code from a slug: everything after the rightmost
/// marker is the digit run, split as 2-digit prefix + "/" + remainder.
pub fn decode_slug(slug: &str) -> Result<String> {
    let marker_at = slug
        .rfind(SLUG_MARKER)
        .ok_or_else(|| DirectoryError::MalformedSlug {
            slug: slug.to_string(),
            reason: "missing registration marker".to_string(),
        })?;

    let digits = &slug[marker_at + SLUG_MARKER.len()..];
    // The encoder only ever emits ASCII digits after the marker; anything
    // else is a crafted token and must fail cleanly, not slice mid-char.
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DirectoryError::MalformedSlug {
            slug: slug.to_string(),
            reason: "non-digit characters after marker".to_string(),
        });
    }
    if digits.len() < MIN_CODE_DIGITS {
        return Err(DirectoryError::MalformedSlug {
            slug: slug.to_string(),
            reason: format!("expected at least {} digits after marker", MIN_CODE_DIGITS),
        });
    }

    let (prefix, rest) = digits.split_at(2);
    Ok(format!("{}/{}", prefix, rest))
}

// Case fold, strip diacritics, collapse non-alphanumeric runs to a single
// hyphen, trim the ends.
fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let folded = fold_diacritic(ch);
        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(folded);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

// Lowercase Latin-1 accents as they occur in Portuguese names. Anything else
// non-ASCII falls through and is treated as a separator.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
