//! VNL rule tables
//!
//! Transliteration dictionary, English/Arabic number words, dual suffixes,
//! leading connectors. All tables are built once and never written again.

use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    /// Process-wide transliteration table
    pub static ref TRANSLITERATION_TABLE: TransliterationTable = TransliterationTable::new();
    /// Process-wide English number words
    pub static ref ENGLISH_NUMBER_WORDS: EnglishNumberWords = EnglishNumberWords::new();
    /// Process-wide Arabic number words
    pub static ref ARABIC_NUMBER_WORDS: ArabicNumberWords = ArabicNumberWords::new();
}

/// Romanized Arabic → Arabic script
///
/// Closed vocabulary for the ordering domain. Keys are lowercase; words that
/// also read as plain English (brand names, "menu", "law") are deliberately
/// absent so English utterances never classify as Romanized Arabic.
pub struct TransliterationTable {
    map: HashMap<&'static str, &'static str>,
}

impl TransliterationTable {
    pub fn new() -> Self {
        let map = HashMap::from([
            // Greetings
            ("marhaba", "مرحبا"),
            ("marhaban", "مرحبا"),
            ("ahlan", "أهلا"),
            ("hala", "هلا"),
            ("salam", "سلام"),
            ("assalam", "السلام"),
            ("alsalam", "السلام"),
            ("alaikum", "عليكم"),
            ("alaykum", "عليكم"),
            ("habibi", "حبيبي"),
            ("sabah", "صباح"),
            ("masa", "مساء"),
            ("alkhair", "الخير"),
            ("kheir", "خير"),
            ("yalla", "يلا"),
            ("inshallah", "إن شاء الله"),
            ("mashallah", "ما شاء الله"),
            // Courtesy / confirmation
            ("shukran", "شكرا"),
            ("shukraan", "شكرا"),
            ("afwan", "عفوا"),
            ("fadlak", "فضلك"),
            ("fadlik", "فضلك"),
            ("minfadlak", "من فضلك"),
            ("tamam", "تمام"),
            ("khalas", "خلاص"),
            ("akeed", "أكيد"),
            ("naam", "نعم"),
            ("na3am", "نعم"),
            ("aywa", "أيوه"),
            ("la2", "لا"),
            // Ordering verbs
            ("ureed", "أريد"),
            ("areed", "أريد"),
            ("abi", "أبي"),
            ("abgha", "أبغى"),
            ("abga", "أبغى"),
            ("abghi", "أبغى"),
            ("atlub", "أطلب"),
            ("talab", "طلب"),
            // Numbers
            ("wahid", "واحد"),
            ("wahed", "واحد"),
            ("wahda", "واحدة"),
            ("ithnain", "اثنين"),
            ("ithnein", "اثنين"),
            ("itnain", "اثنين"),
            ("etneen", "اثنين"),
            ("thalatha", "ثلاثة"),
            ("talata", "ثلاثة"),
            ("arbaa", "أربعة"),
            ("arba3a", "أربعة"),
            ("khamsa", "خمسة"),
            ("sitta", "ستة"),
            ("sabaa", "سبعة"),
            ("sab3a", "سبعة"),
            ("thamanya", "ثمانية"),
            ("tisaa", "تسعة"),
            ("tis3a", "تسعة"),
            ("ashara", "عشرة"),
            ("3ashara", "عشرة"),
            // Menu
            ("qahwa", "قهوة"),
            ("gahwa", "قهوة"),
            ("qahwatain", "قهوتين"),
            ("shai", "شاي"),
            ("asir", "عصير"),
            ("aseer", "عصير"),
            ("mai", "ماء"),
            ("moya", "موية"),
            ("mooya", "موية"),
            ("batates", "بطاطس"),
            ("batatis", "بطاطس"),
            ("dajaj", "دجاج"),
            ("djaj", "دجاج"),
            ("lahm", "لحم"),
            ("laham", "لحم"),
            ("shawarma", "شاورما"),
            ("wajba", "وجبة"),
            ("kabeer", "كبير"),
            ("kbeer", "كبير"),
            ("sagheer", "صغير"),
            ("sghir", "صغير"),
            ("har", "حار"),
            ("7ar", "حار"),
            ("aadi", "عادي"),
            ("3adi", "عادي"),
            ("bidoon", "بدون"),
            ("bdoon", "بدون"),
            ("ma3", "مع"),
            ("maa", "مع"),
            ("wa", "و"),
            // Checkout / branch
            ("kam", "كم"),
            ("bikam", "بكم"),
            ("qaima", "قائمة"),
            ("fatoora", "فاتورة"),
            ("hisab", "حساب"),
            ("kash", "كاش"),
            ("tawseel", "توصيل"),
            ("far3", "فرع"),
        ]);

        Self { map }
    }

    /// Look up a lowercase token
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.map.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.map.contains_key(token)
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&&'static str, &&'static str)> {
        self.map.iter()
    }
}

impl Default for TransliterationTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of an English number word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberWordKind {
    /// zero..nineteen
    Unit,
    /// twenty..ninety
    Tens,
    /// hundred
    Magnitude,
}

/// English number words (case-insensitive lookup)
pub struct EnglishNumberWords {
    map: HashMap<&'static str, (u32, NumberWordKind)>,
}

impl EnglishNumberWords {
    pub fn new() -> Self {
        use NumberWordKind::*;

        let map = HashMap::from([
            ("zero", (0, Unit)),
            ("one", (1, Unit)),
            ("two", (2, Unit)),
            ("three", (3, Unit)),
            ("four", (4, Unit)),
            ("five", (5, Unit)),
            ("six", (6, Unit)),
            ("seven", (7, Unit)),
            ("eight", (8, Unit)),
            ("nine", (9, Unit)),
            ("ten", (10, Unit)),
            ("eleven", (11, Unit)),
            ("twelve", (12, Unit)),
            ("thirteen", (13, Unit)),
            ("fourteen", (14, Unit)),
            ("fifteen", (15, Unit)),
            ("sixteen", (16, Unit)),
            ("seventeen", (17, Unit)),
            ("eighteen", (18, Unit)),
            ("nineteen", (19, Unit)),
            ("twenty", (20, Tens)),
            ("thirty", (30, Tens)),
            ("forty", (40, Tens)),
            ("fifty", (50, Tens)),
            ("sixty", (60, Tens)),
            ("seventy", (70, Tens)),
            ("eighty", (80, Tens)),
            ("ninety", (90, Tens)),
            ("hundred", (100, Magnitude)),
        ]);

        Self { map }
    }

    /// Look up a word in any letter case
    pub fn get(&self, word: &str) -> Option<(u32, NumberWordKind)> {
        if let Some(hit) = self.map.get(word) {
            return Some(*hit);
        }
        self.map.get(word.to_lowercase().as_str()).copied()
    }
}

impl Default for EnglishNumberWords {
    fn default() -> Self {
        Self::new()
    }
}

/// Arabic numeral words, including gender, hamza and taa-marbuta spellings
pub struct ArabicNumberWords {
    map: HashMap<&'static str, u32>,
}

impl ArabicNumberWords {
    pub fn new() -> Self {
        let map = HashMap::from([
            ("صفر", 0),
            ("واحد", 1),
            ("واحدة", 1),
            ("واحده", 1),
            ("اثنين", 2),
            ("اثنان", 2),
            ("إثنين", 2),
            ("إثنان", 2),
            ("اثنتين", 2),
            ("اثنتان", 2),
            ("ثنتين", 2),
            ("ثلاثة", 3),
            ("ثلاثه", 3),
            ("ثلاث", 3),
            ("أربعة", 4),
            ("اربعة", 4),
            ("اربعه", 4),
            ("أربع", 4),
            ("اربع", 4),
            ("خمسة", 5),
            ("خمسه", 5),
            ("خمس", 5),
            ("ستة", 6),
            ("سته", 6),
            ("ست", 6),
            ("سبعة", 7),
            ("سبعه", 7),
            ("سبع", 7),
            ("ثمانية", 8),
            ("ثمانيه", 8),
            ("ثماني", 8),
            ("ثمان", 8),
            ("تسعة", 9),
            ("تسعه", 9),
            ("تسع", 9),
            ("عشرة", 10),
            ("عشره", 10),
            ("عشر", 10),
            ("عشرين", 20),
            ("ثلاثين", 30),
            ("أربعين", 40),
            ("اربعين", 40),
            ("خمسين", 50),
            ("ستين", 60),
            ("سبعين", 70),
            ("ثمانين", 80),
            ("تسعين", 90),
            ("مية", 100),
            ("مئة", 100),
            ("مائة", 100),
        ]);

        Self { map }
    }

    /// Exact (case-sensitive) lookup
    pub fn get(&self, word: &str) -> Option<u32> {
        self.map.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }
}

impl Default for ArabicNumberWords {
    fn default() -> Self {
        Self::new()
    }
}

/// Dual suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualSuffix {
    pub suffix: &'static str,
    /// Feminine duals drop the taa of the suffix and restore the taa marbuta
    pub feminine: bool,
}

/// Dual suffixes, feminine forms first so "قهوتين" yields "قهوة" rather than "قهوت"
pub const DUAL_SUFFIXES: [DualSuffix; 4] = [
    DualSuffix { suffix: "تان", feminine: true },
    DualSuffix { suffix: "تين", feminine: true },
    DualSuffix { suffix: "ان", feminine: false },
    DualSuffix { suffix: "ين", feminine: false },
];

/// Taa marbuta
pub const TAA_MARBUTA: char = 'ة';

/// Connectors a continuation voice note may start with ("and five juices")
pub struct LeadingConnectors {
    words: HashSet<&'static str>,
}

impl LeadingConnectors {
    pub fn new() -> Self {
        Self {
            words: ["and", "wa", "w", "و"].into_iter().collect(),
        }
    }

    /// Case-insensitive check
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

impl Default for LeadingConnectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an Arabic-Indic (U+0660..) or extended Arabic-Indic (U+06F0..) digit to ASCII
pub fn fold_eastern_digit(ch: char) -> Option<char> {
    let base = match ch {
        '\u{0660}'..='\u{0669}' => 0x0660,
        '\u{06F0}'..='\u{06F9}' => 0x06F0,
        _ => return None,
    };
    char::from_digit(ch as u32 - base, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnl::tokenizer::Tokenizer;

    #[test]
    fn test_transliteration_table() {
        let table = TransliterationTable::new();
        assert_eq!(table.get("marhaba"), Some("مرحبا"));
        assert_eq!(table.get("habibi"), Some("حبيبي"));
        assert_eq!(table.get("MARHABA"), None); // callers lowercase first
        assert!(!table.contains("dude"));
    }

    #[test]
    fn test_transliteration_values_are_arabic() {
        for (key, value) in TRANSLITERATION_TABLE.entries() {
            assert_eq!(key.to_lowercase(), key.to_string(), "key not lowercase");
            assert!(
                value
                    .chars()
                    .all(|c| c == ' ' || Tokenizer::is_arabic(c)),
                "mixed script value for {}: {}",
                key,
                value
            );
        }
    }

    #[test]
    fn test_transliteration_values_survive_dual_expansion() {
        // Values flow through dual expansion on the Arabic path; only real
        // duals may be rewritten there ("وين" would become "2 و").
        const DUALS: [&str; 1] = ["qahwatain"];

        for (key, value) in TRANSLITERATION_TABLE.entries() {
            if DUALS.contains(key) {
                continue;
            }
            assert_eq!(
                crate::vnl::expand_duals(value),
                value.to_string(),
                "{} -> {} is rewritten as a dual",
                key,
                value
            );
        }

        assert_eq!(crate::vnl::expand_duals("قهوتين"), "2 قهوة");
    }

    #[test]
    fn test_transliterated_numbers_are_known_arabic_numbers() {
        for key in ["wahid", "ithnain", "thalatha", "arbaa", "khamsa", "ashara"] {
            let arabic = TRANSLITERATION_TABLE.get(key).unwrap();
            assert!(ARABIC_NUMBER_WORDS.contains(arabic), "{} -> {}", key, arabic);
        }
    }

    #[test]
    fn test_english_number_words() {
        let words = EnglishNumberWords::new();
        assert_eq!(words.get("twenty"), Some((20, NumberWordKind::Tens)));
        assert_eq!(words.get("Twenty"), Some((20, NumberWordKind::Tens)));
        assert_eq!(words.get("NINE"), Some((9, NumberWordKind::Unit)));
        assert_eq!(words.get("hundred"), Some((100, NumberWordKind::Magnitude)));
        assert_eq!(words.get("thousand"), None);
    }

    #[test]
    fn test_arabic_number_words() {
        let words = ArabicNumberWords::new();
        assert_eq!(words.get("ثلاثة"), Some(3));
        assert_eq!(words.get("ثلاث"), Some(3));
        assert_eq!(words.get("أربعة"), Some(4));
        assert_eq!(words.get("اربعة"), Some(4));
        assert_eq!(words.get("برجر"), None);
    }

    #[test]
    fn test_leading_connectors() {
        let connectors = LeadingConnectors::new();
        assert!(connectors.contains("And"));
        assert!(connectors.contains("و"));
        assert!(!connectors.contains("andrew"));
    }

    #[test]
    fn test_fold_eastern_digit() {
        assert_eq!(fold_eastern_digit('٣'), Some('3'));
        assert_eq!(fold_eastern_digit('۷'), Some('7'));
        assert_eq!(fold_eastern_digit('٠'), Some('0'));
        assert_eq!(fold_eastern_digit('3'), None);
    }
}
