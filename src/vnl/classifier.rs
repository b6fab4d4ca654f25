//! Language classifier
//!
//! Three rules, first match wins:
//! 1. any Arabic-block code point → Arabic script
//! 2. Latin letters and every token in the transliteration table → Romanized Arabic
//! 3. otherwise → English

use crate::vnl::rules::TRANSLITERATION_TABLE;
use crate::vnl::tokenizer::Tokenizer;
use crate::vnl::types::{Classification, ScriptClass};

/// Classify a raw transcript. Total over all inputs.
pub fn classify(raw: &str) -> Classification {
    Classification::from(classify_script(raw))
}

fn classify_script(raw: &str) -> ScriptClass {
    if raw.chars().any(Tokenizer::is_arabic) {
        return ScriptClass::ArabicScript;
    }

    if is_romanized_arabic(raw) {
        return ScriptClass::RomanizedArabic;
    }

    ScriptClass::English
}

/// Every token must be a known transliteration key; one unknown token is enough
/// to reject, so partially Romanized text is never guessed as Arabic.
fn is_romanized_arabic(raw: &str) -> bool {
    if !raw.chars().any(Tokenizer::is_latin_letter) {
        return false;
    }

    let tokens = Tokenizer::lowercase_words(raw);
    !tokens.is_empty()
        && tokens
            .iter()
            .all(|token| TRANSLITERATION_TABLE.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnl::types::LanguageTag;

    #[test]
    fn test_romanized_arabic() {
        let c = classify("marhaba habibi");
        assert_eq!(c.script_class, ScriptClass::RomanizedArabic);
        assert_eq!(c.lang_hint, LanguageTag::Ar);
    }

    #[test]
    fn test_romanized_arabic_case_insensitive() {
        assert_eq!(
            classify("Marhaba  HABIBI").script_class,
            ScriptClass::RomanizedArabic
        );
    }

    #[test]
    fn test_unknown_token_falls_back_to_english() {
        let c = classify("marhaba dude");
        assert_eq!(c.script_class, ScriptClass::English);
        assert_eq!(c.lang_hint, LanguageTag::En);
    }

    #[test]
    fn test_arabic_script_dominates() {
        let c = classify("two قهوة please");
        assert_eq!(c.script_class, ScriptClass::ArabicScript);
        assert_eq!(c.lang_hint, LanguageTag::Ar);

        // Arabic-Indic digits live in the Arabic block too
        assert_eq!(classify("burger ٣").script_class, ScriptClass::ArabicScript);
    }

    #[test]
    fn test_degenerate_inputs_are_english() {
        for raw in ["", "   ", "?!...", "123", "3", "你好", "Привет"] {
            let c = classify(raw);
            assert_eq!(c.script_class, ScriptClass::English, "input {:?}", raw);
            assert_eq!(c.lang_hint, LanguageTag::En);
        }
    }

    #[test]
    fn test_arabizi_digits_need_latin_letters() {
        // "7ar" carries a Latin letter, a bare "3" does not
        assert_eq!(classify("7ar").script_class, ScriptClass::RomanizedArabic);
        assert_eq!(classify("3").script_class, ScriptClass::English);
    }

    #[test]
    fn test_plain_english() {
        assert_eq!(
            classify("two burgers please").script_class,
            ScriptClass::English
        );
    }
}
