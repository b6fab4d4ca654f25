//! VNL engine
//!
//! Composes pre-processing, classification, transliteration and number
//! normalization into one pass per utterance.

use std::time::Instant;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizerConfig;
use crate::vnl::classifier::classify;
use crate::vnl::numbers::NumberNormalizer;
use crate::vnl::rules::{fold_eastern_digit, LeadingConnectors};
use crate::vnl::tokenizer::Tokenizer;
use crate::vnl::transliterate::apply_transliteration;
use crate::vnl::types::{NormalizedResult, Replacement, ReplacementReason, ScriptClass};

/// VNL engine (reusable, tables are shared statics)
pub struct VnlEngine {
    config: NormalizerConfig,
    numbers: NumberNormalizer,
    connectors: LeadingConnectors,
}

impl VnlEngine {
    pub fn new(config: NormalizerConfig) -> Self {
        let numbers = NumberNormalizer::new(config.expand_duals, config.fuse_compounds);
        Self {
            config,
            numbers,
            connectors: LeadingConnectors::new(),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a completed transcript
    ///
    /// Pure and infallible: unexpected input degrades to English and passes
    /// through unchanged.
    pub fn normalize(&self, raw: &str) -> NormalizedResult {
        let start = Instant::now();

        if !self.config.enabled {
            return NormalizedResult::unchanged(raw.to_string(), classify(raw), 0);
        }

        let mut applied = Vec::new();

        // 1. NFC + whitespace folding
        let mut text = if self.config.fold_whitespace {
            unicode_normalize(raw)
        } else {
            raw.to_string()
        };
        if text != raw {
            applied.push(Replacement {
                original: raw.to_string(),
                replaced: text.clone(),
                start: 0,
                end: raw.len(),
                reason: ReplacementReason::WhitespaceFolding,
            });
        }

        // 2. Classification, before anything drops a word
        let classification = classify(&text);
        tracing::debug!(
            "classified {:?} as {:?}",
            text,
            classification.script_class
        );

        // 3. Leading "and" / "و" of a continuation note
        if self.config.strip_leading_connector {
            if let Some((stripped, replacement)) = self.strip_leading_connector(&text) {
                applied.push(replacement);
                text = stripped;
            }
        }

        // 4. Arabic-Indic digits → ASCII
        if self.config.fold_eastern_digits {
            let (folded, replacements) = fold_eastern_digits(&text);
            applied.extend(replacements);
            text = folded;
        }

        // 5. Transliteration (Romanized path only)
        if classification.script_class == ScriptClass::RomanizedArabic {
            let (arabic, replacements) = apply_transliteration(&text);
            tracing::debug!("transliterated {:?} -> {:?}", text, arabic);
            applied.extend(replacements);
            text = arabic;
        }

        // 6. Numbers
        let (final_text, replacements) = self.numbers.normalize(&text, classification.lang_hint);
        applied.extend(replacements);

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = final_text != raw;
        tracing::debug!(
            "normalized {:?} -> {:?} ({}, {} replacements, {}us)",
            raw,
            final_text,
            classification.lang_hint,
            applied.len(),
            elapsed_us
        );

        NormalizedResult {
            final_text,
            lang_hint: classification.lang_hint,
            script_class: classification.script_class,
            changed,
            applied,
            elapsed_us,
        }
    }

    /// Drop a leading connector, keeping at least one word
    fn strip_leading_connector(&self, text: &str) -> Option<(String, Replacement)> {
        let tokens = Tokenizer::tokenize(text);
        let mut words = tokens.iter().filter(|t| t.is_word());
        let first = words.next()?;
        let next = words.next()?;

        if !self.connectors.contains(first.text) {
            return None;
        }

        let stripped = text[next.start..].to_string();
        Some((
            stripped,
            Replacement {
                original: text[first.start..next.start].to_string(),
                replaced: String::new(),
                start: first.start,
                end: next.start,
                reason: ReplacementReason::LeadingConnector,
            },
        ))
    }
}

impl Default for VnlEngine {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Unicode normalization + whitespace folding
fn unicode_normalize(text: &str) -> String {
    // NFC
    let nfc: String = text.nfc().collect();

    // Whitespace runs -> single space
    let mut result = String::with_capacity(nfc.len());
    let mut prev_whitespace = false;

    for ch in nfc.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result.trim().to_string()
}

/// Fold Arabic-Indic digits, one replacement per affected word
fn fold_eastern_digits(text: &str) -> (String, Vec<Replacement>) {
    let mut result = String::with_capacity(text.len());
    let mut replacements = Vec::new();

    for token in Tokenizer::tokenize(text) {
        let folded: String = token
            .text
            .chars()
            .map(|ch| fold_eastern_digit(ch).unwrap_or(ch))
            .collect();

        if folded != token.text {
            replacements.push(Replacement {
                original: token.text.to_string(),
                replaced: folded.clone(),
                start: token.start,
                end: token.end,
                reason: ReplacementReason::DigitFolding,
            });
        }
        result.push_str(&folded);
    }

    (result, replacements)
}
