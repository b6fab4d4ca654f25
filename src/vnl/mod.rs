//! VNL (Voice Normalization Layer)
//!
//! Runs between speech recognition and the chat backend. Deterministic rules
//! only, no model calls.
//!
//! ## Processing flow
//! 1. Unicode normalization + whitespace folding
//! 2. Language classification (Arabic script / Romanized Arabic / English)
//! 3. Arabic-Indic digit folding
//! 4. Transliteration of Romanized Arabic (closed dictionary)
//! 5. Dual-form expansion and number-word substitution

mod classifier;
mod engine;
mod numbers;
mod rules;
mod tokenizer;
mod transliterate;
mod types;

pub use classifier::classify;
pub use engine::VnlEngine;
pub use numbers::{normalize_numbers, NumberNormalizer};
pub use transliterate::{expand_duals, transliterate};
pub use types::{
    ChatPayload, Classification, LanguageTag, NormalizedResult, Replacement, ReplacementReason,
    ScriptClass,
};
