//! Display names derived from folder and file names.
//!
//! Category folders and image files carry their own names (`street-art/`,
//! `old_town-square.jpg`). The updater turns those into the labels and alt
//! text written to the gallery document:
//! - `street-art` → "Street Art" (category name)
//! - `old_town-square.jpg` in `street-art` → "Old Town Square - Street-Art photography" (alt text)
//!
//! Casing follows the usual title-case rule: a letter is upper-cased when it
//! does not follow another letter, lower-cased otherwise.

use std::path::Path;

/// Title-case a string: every letter that starts a run of letters is upper-cased.
///
/// - `"street art"` → `"Street Art"`
/// - `"OLD town"` → `"Old Town"`
/// - `"street-art"` → `"Street-Art"` (the dash is kept)
/// - `"2nd try"` → `"2Nd Try"` (digits do not start a word)
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Replace `-` and `_` with spaces.
pub fn spaced(name: &str) -> String {
    name.replace(['-', '_'], " ")
}

/// Display name for a category folder: `"street-art"` → `"Street Art"`.
pub fn category_display_name(folder: &str) -> String {
    title_case(&spaced(folder))
}

/// Alt text for a newly discovered image.
///
/// The extension is dropped, separators become spaces, and the category
/// folder name is appended as-is apart from casing.
pub fn generate_alt_text(file_name: &str, category: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    format!(
        "{} - {} photography",
        title_case(&spaced(&stem)),
        title_case(category)
    )
}
