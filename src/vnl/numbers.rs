//! Number normalizer
//!
//! Spelled-out numbers → digits. Arabic: dual expansion, then whole-word
//! numeral substitution. English: whole-word substitution, then a single
//! fusion pass joining a tens word with a following ones word.

use crate::vnl::rules::{NumberWordKind, ARABIC_NUMBER_WORDS, ENGLISH_NUMBER_WORDS};
use crate::vnl::tokenizer::{Token, Tokenizer};
use crate::vnl::transliterate::apply_dual_expansion;
use crate::vnl::types::{LanguageTag, Replacement, ReplacementReason};

/// Normalize spelled-out numbers with every stage enabled
pub fn normalize_numbers(text: &str, lang: LanguageTag) -> String {
    NumberNormalizer::default().normalize(text, lang).0
}

/// Number normalizer (stateless apart from its stage switches)
#[derive(Debug, Clone, Copy)]
pub struct NumberNormalizer {
    /// Run dual-form expansion before Arabic substitution
    pub expand_duals: bool,
    /// Fuse "20 1" → "21" after English substitution
    pub fuse_compounds: bool,
}

impl NumberNormalizer {
    pub fn new(expand_duals: bool, fuse_compounds: bool) -> Self {
        Self {
            expand_duals,
            fuse_compounds,
        }
    }

    /// Normalize, returning the text and the replacements made
    ///
    /// Pure: the same text and language always give the same output.
    pub fn normalize(&self, text: &str, lang: LanguageTag) -> (String, Vec<Replacement>) {
        match lang {
            LanguageTag::Ar => self.normalize_arabic(text),
            LanguageTag::En => self.normalize_english(text),
        }
    }

    fn normalize_arabic(&self, text: &str) -> (String, Vec<Replacement>) {
        let (expanded, mut replacements) = if self.expand_duals {
            apply_dual_expansion(text)
        } else {
            (text.to_string(), Vec::new())
        };

        let mut result = String::with_capacity(expanded.len());
        for token in Tokenizer::tokenize(&expanded) {
            if !token.is_word() {
                result.push_str(token.text);
                continue;
            }

            let (prefix, core, suffix) = Tokenizer::split_affixes(token.text);
            match ARABIC_NUMBER_WORDS.get(core) {
                Some(value) => {
                    let replaced = format!("{}{}{}", prefix, value, suffix);
                    replacements.push(number_word_replacement(&token, &replaced));
                    result.push_str(&replaced);
                }
                None => result.push_str(token.text),
            }
        }

        (result, replacements)
    }

    fn normalize_english(&self, text: &str) -> (String, Vec<Replacement>) {
        let mut replacements = Vec::new();

        // Pass 1: independent word substitution
        let mut pieces: Vec<Piece<'_>> = Vec::new();
        for token in Tokenizer::tokenize(text) {
            if !token.is_word() {
                pieces.push(Piece::plain(&token));
                continue;
            }

            let (prefix, core, suffix) = Tokenizer::split_affixes(token.text);

            // "twenty-one" is a single token; fused here, never re-fused below
            if self.fuse_compounds {
                if let Some(value) = parse_hyphenated(core) {
                    let replaced = format!("{}{}{}", prefix, value, suffix);
                    replacements.push(Replacement {
                        original: token.text.to_string(),
                        replaced: replaced.clone(),
                        start: token.start,
                        end: token.end,
                        reason: ReplacementReason::CompoundNumber,
                    });
                    pieces.push(Piece {
                        text: replaced,
                        number: None,
                        start: token.start,
                        end: token.end,
                    });
                    continue;
                }
            }

            match ENGLISH_NUMBER_WORDS.get(core) {
                Some((value, kind)) => {
                    let replaced = format!("{}{}{}", prefix, value, suffix);
                    replacements.push(number_word_replacement(&token, &replaced));
                    pieces.push(Piece {
                        text: replaced,
                        number: Some(SpokenNumber {
                            value,
                            kind,
                            prefix,
                            suffix,
                        }),
                        start: token.start,
                        end: token.end,
                    });
                }
                None => pieces.push(Piece::plain(&token)),
            }
        }

        if !self.fuse_compounds {
            let joined: String = pieces.into_iter().map(|p| p.text).collect();
            return (joined, replacements);
        }

        // Pass 2: tens + ones fusion over adjacent substituted tokens
        let mut result = String::with_capacity(text.len());
        let mut i = 0;
        while i < pieces.len() {
            if let Some(fused) = fuse_at(&pieces, i) {
                replacements.push(Replacement {
                    original: text[pieces[i].start..pieces[i + 2].end].to_string(),
                    replaced: fused.clone(),
                    start: pieces[i].start,
                    end: pieces[i + 2].end,
                    reason: ReplacementReason::CompoundNumber,
                });
                result.push_str(&fused);
                i += 3;
                continue;
            }

            result.push_str(&pieces[i].text);
            i += 1;
        }

        (result, replacements)
    }
}

impl Default for NumberNormalizer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// A number word substituted in pass 1
#[derive(Debug, Clone, Copy)]
struct SpokenNumber<'a> {
    value: u32,
    kind: NumberWordKind,
    prefix: &'a str,
    suffix: &'a str,
}

/// Output piece of pass 1, with its span in the input text
#[derive(Debug, Clone)]
struct Piece<'a> {
    text: String,
    number: Option<SpokenNumber<'a>>,
    start: usize,
    end: usize,
}

impl<'a> Piece<'a> {
    fn plain(token: &Token<'a>) -> Self {
        Self {
            text: token.text.to_string(),
            number: None,
            start: token.start,
            end: token.end,
        }
    }
}

/// Fuse pieces[i] (tens), pieces[i + 1] (whitespace), pieces[i + 2] (ones)
///
/// Punctuation between the two words ("twenty, one") blocks fusion.
fn fuse_at(pieces: &[Piece<'_>], i: usize) -> Option<String> {
    let tens = pieces.get(i)?.number?;
    let gap = pieces.get(i + 1)?;
    let ones = pieces.get(i + 2)?.number?;

    if gap.number.is_some() || !gap.text.chars().all(char::is_whitespace) {
        return None;
    }
    if tens.kind != NumberWordKind::Tens || !(20..=90).contains(&tens.value) || tens.value % 10 != 0 {
        return None;
    }
    if ones.kind != NumberWordKind::Unit || !(1..=9).contains(&ones.value) {
        return None;
    }
    if !tens.suffix.is_empty() || !ones.prefix.is_empty() {
        return None;
    }

    Some(format!(
        "{}{}{}",
        tens.prefix,
        tens.value + ones.value,
        ones.suffix
    ))
}

/// "twenty-one" → 21; only a tens word joined to a ones word 1-9
fn parse_hyphenated(core: &str) -> Option<u32> {
    let (left, right) = core.split_once('-')?;
    let (tens, tens_kind) = ENGLISH_NUMBER_WORDS.get(left)?;
    let (ones, ones_kind) = ENGLISH_NUMBER_WORDS.get(right)?;

    let is_pair = tens_kind == NumberWordKind::Tens
        && ones_kind == NumberWordKind::Unit
        && (1..=9).contains(&ones);
    is_pair.then_some(tens + ones)
}

fn number_word_replacement(token: &Token<'_>, replaced: &str) -> Replacement {
    Replacement {
        original: token.text.to_string(),
        replaced: replaced.to_string(),
        start: token.start,
        end: token.end,
        reason: ReplacementReason::NumberWord,
    }
}
