//! Transliteration engine
//!
//! Whole-utterance Romanized Arabic → Arabic script, plus the dual-form
//! expansion used on native Arabic text.

use crate::vnl::rules::{fold_eastern_digit, ARABIC_NUMBER_WORDS, DUAL_SUFFIXES, TAA_MARBUTA, TRANSLITERATION_TABLE};
use crate::vnl::tokenizer::Tokenizer;
use crate::vnl::types::{Replacement, ReplacementReason};

/// Transliterate a Romanized-Arabic utterance
///
/// Lower-cases, splits on whitespace runs, maps each token through the
/// transliteration table and re-joins with single spaces. Expects input the
/// classifier accepted as Romanized Arabic; unknown tokens are kept as-is.
pub fn transliterate(raw: &str) -> String {
    apply_transliteration(raw).0
}

/// Transliterate and record every mapped token
pub(crate) fn apply_transliteration(raw: &str) -> (String, Vec<Replacement>) {
    let mut words = Vec::new();
    let mut replacements = Vec::new();

    for token in Tokenizer::tokenize(raw).into_iter().filter(|t| t.is_word()) {
        let lower = token.text.to_lowercase();
        match TRANSLITERATION_TABLE.get(&lower) {
            Some(arabic) => {
                replacements.push(Replacement {
                    original: token.text.to_string(),
                    replaced: arabic.to_string(),
                    start: token.start,
                    end: token.end,
                    reason: ReplacementReason::Transliteration,
                });
                words.push(arabic.to_string());
            }
            None => {
                tracing::debug!("transliteration miss: {}", lower);
                words.push(lower);
            }
        }
    }

    (words.join(" "), replacements)
}

/// Expand Arabic dual nouns: "قهوتين" → "2 قهوة"
///
/// Suffix heuristic: any token ending in ان / ين / تان / تين is treated as a
/// dual, unless the previous token ends in a digit (the speaker already gave a
/// quantity). Numeral words such as "اثنين" are left for the number pass.
pub fn expand_duals(text: &str) -> String {
    apply_dual_expansion(text).0
}

pub(crate) fn apply_dual_expansion(text: &str) -> (String, Vec<Replacement>) {
    let mut result = String::with_capacity(text.len() + 8);
    let mut replacements = Vec::new();
    let mut prev_ends_with_digit = false;

    for token in Tokenizer::tokenize(text) {
        if !token.is_word() {
            result.push_str(token.text);
            continue;
        }

        let expanded = if prev_ends_with_digit {
            None
        } else {
            expand_dual_word(token.text)
        };

        let emitted = match expanded {
            Some(expanded) => {
                replacements.push(Replacement {
                    original: token.text.to_string(),
                    replaced: expanded.clone(),
                    start: token.start,
                    end: token.end,
                    reason: ReplacementReason::DualExpansion,
                });
                expanded
            }
            None => token.text.to_string(),
        };

        prev_ends_with_digit = emitted.chars().last().is_some_and(is_digit);
        result.push_str(&emitted);
    }

    (result, replacements)
}

fn expand_dual_word(word: &str) -> Option<String> {
    let (prefix, core, suffix) = Tokenizer::split_affixes(word);

    if core.is_empty() || core.chars().any(is_digit) || ARABIC_NUMBER_WORDS.contains(core) {
        return None;
    }

    for dual in DUAL_SUFFIXES.iter() {
        let Some(stem) = core.strip_suffix(dual.suffix) else {
            continue;
        };
        if stem.is_empty() {
            return None;
        }

        let mut singular = stem.to_string();
        if dual.feminine {
            singular.push(TAA_MARBUTA);
        }
        return Some(format!("{}2 {}{}", prefix, singular, suffix));
    }

    None
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || fold_eastern_digit(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_greeting() {
        assert_eq!(transliterate("marhaba habibi"), "مرحبا حبيبي");
    }

    #[test]
    fn test_transliterate_collapses_whitespace_and_case() {
        assert_eq!(transliterate("  Marhaba \t HABIBI "), "مرحبا حبيبي");
    }

    #[test]
    fn test_transliterate_records_replacements() {
        let (text, applied) = apply_transliteration("abgha qahwa");
        assert_eq!(text, "أبغى قهوة");
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[1].original, "qahwa");
        assert_eq!(applied[1].start, 6);
        assert_eq!(applied[1].reason, ReplacementReason::Transliteration);
    }

    #[test]
    fn test_transliterate_multiword_value() {
        assert_eq!(transliterate("shukran inshallah"), "شكرا إن شاء الله");
    }

    #[test]
    fn test_expand_feminine_dual() {
        assert_eq!(expand_duals("قهوتين"), "2 قهوة");
        assert_eq!(expand_duals("وجبتان"), "2 وجبة");
    }

    #[test]
    fn test_expand_masculine_dual() {
        assert_eq!(expand_duals("عصيرين"), "2 عصير");
        assert_eq!(expand_duals("برجران"), "2 برجر");
    }

    #[test]
    fn test_explicit_quantity_blocks_expansion() {
        assert_eq!(expand_duals("3 قهوتين"), "3 قهوتين");
        assert_eq!(expand_duals("٣ قهوتين"), "٣ قهوتين");
    }

    #[test]
    fn test_expansion_in_sentence() {
        assert_eq!(expand_duals("ابغى قهوتين لو سمحت"), "ابغى 2 قهوة لو سمحت");
        assert_eq!(expand_duals("قهوتين و عصيرين"), "2 قهوة و 2 عصير");
    }

    #[test]
    fn test_expansion_keeps_punctuation() {
        assert_eq!(expand_duals("قهوتين،"), "2 قهوة،");
    }

    #[test]
    fn test_number_words_not_expanded() {
        assert_eq!(expand_duals("اثنين برجر"), "اثنين برجر");
        assert_eq!(expand_duals("عشرين"), "عشرين");
    }

    #[test]
    fn test_bare_suffix_not_expanded() {
        assert_eq!(expand_duals("ين"), "ين");
        assert_eq!(expand_duals("برجر"), "برجر");
    }

    #[test]
    fn test_expansion_is_stable() {
        let once = expand_duals("ميدانين");
        assert_eq!(once, "2 ميدان");
        // "ميدان" still ends in ان but now follows a digit
        assert_eq!(expand_duals(&once), once);
    }
}
