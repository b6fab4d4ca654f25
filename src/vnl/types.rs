//! VNL type definitions

use serde::{Deserialize, Serialize};

/// Language hint attached to the outgoing chat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    En,
    Ar,
}

impl LanguageTag {
    /// Wire code (`"en"` / `"ar"`)
    pub fn code(&self) -> &'static str {
        match self {
            LanguageTag::En => "en",
            LanguageTag::Ar => "ar",
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Script class of a raw transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptClass {
    /// Contains at least one Arabic-block code point
    ArabicScript,
    /// Latin letters, every token found in the transliteration table
    RomanizedArabic,
    /// Everything else
    English,
}

impl ScriptClass {
    /// Language hint implied by the script class
    pub fn lang_hint(&self) -> LanguageTag {
        match self {
            ScriptClass::ArabicScript | ScriptClass::RomanizedArabic => LanguageTag::Ar,
            ScriptClass::English => LanguageTag::En,
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub script_class: ScriptClass,
    pub lang_hint: LanguageTag,
}

impl From<ScriptClass> for Classification {
    fn from(script_class: ScriptClass) -> Self {
        Self {
            script_class,
            lang_hint: script_class.lang_hint(),
        }
    }
}

/// One rewrite made by a pipeline stage, for tracing what changed and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// Original text
    pub original: String,
    /// Text after replacement
    pub replaced: String,
    /// Start byte offset in the input of the stage that made the change
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Why the replacement happened
    pub reason: ReplacementReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementReason {
    /// Romanized token mapped to Arabic script ("habibi" → "حبيبي")
    Transliteration,
    /// Dual noun expanded ("قهوتين" → "2 قهوة")
    DualExpansion,
    /// Spelled-out number replaced by digits
    NumberWord,
    /// Tens + ones digits fused ("20 1" → "21")
    CompoundNumber,
    /// Arabic-Indic digit folded to ASCII
    DigitFolding,
    /// Leading "and"/"و" dropped
    LeadingConnector,
    /// NFC or whitespace runs folded; spans the whole raw input
    WhitespaceFolding,
}

/// Pipeline output: the text for the chat backend plus the trace of how it was derived
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Text forwarded to the chat backend
    pub final_text: String,
    /// Language hint (`lang_hint` on the wire)
    pub lang_hint: LanguageTag,
    /// Script class the classifier picked
    pub script_class: ScriptClass,
    /// Whether `final_text` differs from the raw input
    pub changed: bool,
    /// Replacements applied, in pipeline order
    pub applied: Vec<Replacement>,
    /// Processing time (microseconds)
    pub elapsed_us: u64,
}

impl NormalizedResult {
    /// Result with no modification
    pub fn unchanged(text: String, classification: Classification, elapsed_us: u64) -> Self {
        Self {
            final_text: text,
            lang_hint: classification.lang_hint,
            script_class: classification.script_class,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }

    /// Build the payload handed to the chat transport
    pub fn to_chat_payload(&self) -> ChatPayload {
        ChatPayload {
            message: self.final_text.clone(),
            lang_hint: self.lang_hint,
            is_voice: true,
        }
    }
}

/// Outgoing chat request body for a voice-originated message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    pub lang_hint: LanguageTag,
    pub is_voice: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_tag_wire_format() {
        assert_eq!(serde_json::to_string(&LanguageTag::Ar).unwrap(), "\"ar\"");
        assert_eq!(serde_json::to_string(&LanguageTag::En).unwrap(), "\"en\"");
        assert_eq!(LanguageTag::Ar.to_string(), "ar");
    }

    #[test]
    fn test_script_class_hint() {
        assert_eq!(ScriptClass::ArabicScript.lang_hint(), LanguageTag::Ar);
        assert_eq!(ScriptClass::RomanizedArabic.lang_hint(), LanguageTag::Ar);
        assert_eq!(ScriptClass::English.lang_hint(), LanguageTag::En);
    }

    #[test]
    fn test_chat_payload() {
        let result = NormalizedResult::unchanged(
            "hello".to_string(),
            Classification::from(ScriptClass::English),
            0,
        );
        let payload = result.to_chat_payload();
        assert!(payload.is_voice);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["message"], "hello");
        assert_eq!(json["lang_hint"], "en");
        assert_eq!(json["is_voice"], true);
    }
}
