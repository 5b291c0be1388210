use caseless::default_case_fold_str;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a claim name into its trie key form: NFD decomposition
/// followed by Unicode default case folding.
///
/// Names that are empty or not valid UTF-8 pass through unchanged; the
/// chain accepts arbitrary bytes as names and only well-formed Unicode is
/// subject to normalization.
pub fn normalize_name(name: &[u8]) -> Vec<u8> {
    match core::str::from_utf8(name) {
        Ok(text) if !text.is_empty() => {
            let decomposed: String = text.nfd().collect();
            default_case_fold_str(&decomposed).into_bytes()
        }
        _ => name.to_vec(),
    }
}
