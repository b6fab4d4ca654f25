// Voice input normalization for the bilingual ordering assistant
//
// Raw transcript → language hint + normalized text, ready for the chat
// transport. Everything here is synchronous and side-effect free.

pub mod config;
pub mod vnl;

pub use config::NormalizerConfig;
pub use vnl::{
    classify, expand_duals, normalize_numbers, transliterate, ChatPayload, Classification,
    LanguageTag, NormalizedResult, Replacement, ReplacementReason, ScriptClass, VnlEngine,
};

lazy_static::lazy_static! {
    /// Engine with the default configuration
    static ref DEFAULT_ENGINE: VnlEngine = VnlEngine::default();
}

/// Normalize one completed transcript with the default configuration
pub fn normalize_utterance(raw: &str) -> NormalizedResult {
    DEFAULT_ENGINE.normalize(raw)
}
