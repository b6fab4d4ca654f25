//! VNL tokenizer
//!
//! Splits input into words and whitespace runs, keeping byte offsets so the
//! rewriting stages can rebuild the text without touching what they skip.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Run of non-whitespace characters
    Word,
    /// Run of whitespace
    Whitespace,
}

/// Slice of the source text; offsets index the text it was cut from
#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub text: &'a str,
    pub token_type: TokenType,
    /// Start byte offset in the source text
    pub start: usize,
    /// End byte offset in the source text (exclusive)
    pub end: usize,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

/// Arabic punctuation that should not count as part of a word
const ARABIC_PUNCTUATION: [char; 5] = ['\u{060C}', '\u{061B}', '\u{061F}', '\u{066A}', '\u{06D4}'];

pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize
    ///
    /// Word and whitespace tokens alternate; concatenating every token's text
    /// yields the input again.
    pub fn tokenize(text: &str) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();
        let mut current: Option<(TokenType, usize)> = None;

        for (idx, ch) in text.char_indices() {
            let char_type = if ch.is_whitespace() {
                TokenType::Whitespace
            } else {
                TokenType::Word
            };

            match current {
                Some((ct, _)) if ct == char_type => {}
                Some((ct, start)) => {
                    tokens.push(Token {
                        text: &text[start..idx],
                        token_type: ct,
                        start,
                        end: idx,
                    });
                    current = Some((char_type, idx));
                }
                None => current = Some((char_type, idx)),
            }
        }

        if let Some((ct, start)) = current {
            tokens.push(Token {
                text: &text[start..],
                token_type: ct,
                start,
                end: text.len(),
            });
        }

        tokens
    }

    /// Whitespace-delimited words, lower-cased
    pub fn lowercase_words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }

    /// Whether the character lies in the Arabic block (U+0600..U+06FF)
    pub fn is_arabic(ch: char) -> bool {
        ('\u{0600}'..='\u{06FF}').contains(&ch)
    }

    /// Whether the character is a Latin letter (Basic Latin through Latin Extended-B)
    pub fn is_latin_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic() || (('\u{00C0}'..='\u{024F}').contains(&ch) && ch.is_alphabetic())
    }

    /// Whether the character belongs to a word core (letters, digits, Arabic marks)
    fn is_word_char(ch: char) -> bool {
        if Self::is_arabic(ch) {
            return !ARABIC_PUNCTUATION.contains(&ch);
        }
        ch.is_alphanumeric()
    }

    /// Split a word into (leading punctuation, core, trailing punctuation)
    ///
    /// A word with no core characters comes back as `(word, "", "")`.
    pub fn split_affixes(word: &str) -> (&str, &str, &str) {
        let Some(core_start) = word.find(Self::is_word_char) else {
            return (word, "", "");
        };
        let core_end = word
            .char_indices()
            .rev()
            .find(|(_, ch)| Self::is_word_char(*ch))
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(word.len());

        (
            &word[..core_start],
            &word[core_start..core_end],
            &word[core_end..],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed() {
        let tokens = Tokenizer::tokenize("two  قهوة\tplease");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].text, "two");
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert_eq!(tokens[1].text, "  ");
        assert_eq!(tokens[1].token_type, TokenType::Whitespace);
        assert_eq!(tokens[2].text, "قهوة");
        assert_eq!(tokens[3].text, "\t");
        assert_eq!(tokens[4].end, "two  قهوة\tplease".len());
    }

    #[test]
    fn test_tokenize_roundtrip_preserves_text() {
        let text = " leading and trailing ";
        let rebuilt: String = Tokenizer::tokenize(text).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::tokenize("").is_empty());
    }

    #[test]
    fn test_script_detection() {
        assert!(Tokenizer::is_arabic('ق'));
        assert!(Tokenizer::is_arabic('٣'));
        assert!(!Tokenizer::is_arabic('q'));
        assert!(Tokenizer::is_latin_letter('q'));
        assert!(Tokenizer::is_latin_letter('é'));
        assert!(!Tokenizer::is_latin_letter('7'));
    }

    #[test]
    fn test_split_affixes() {
        assert_eq!(Tokenizer::split_affixes("three,"), ("", "three", ","));
        assert_eq!(Tokenizer::split_affixes("(five)"), ("(", "five", ")"));
        assert_eq!(Tokenizer::split_affixes("قهوتين؟"), ("", "قهوتين", "؟"));
        assert_eq!(Tokenizer::split_affixes("..."), ("...", "", ""));
        assert_eq!(Tokenizer::split_affixes("burger"), ("", "burger", ""));
    }
}
