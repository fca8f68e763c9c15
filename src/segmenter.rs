use std::collections::HashSet;
use once_cell::sync::Lazy;

// @module: Word-segmentation oracle consulted by line layout

/// One lexical token inside a segmented string, in codepoint coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    /// Codepoint index of the first character of the token
    pub start: usize,
    /// Token length in codepoints
    pub len: usize,
}

/// Common trait for word-segmentation backends.
///
/// Line layout only ever consults the oracle on two-codepoint windows, but
/// the interface accepts arbitrary text so real segmenters can be plugged in
/// unchanged.
pub trait Segmenter {
    /// Split the text into token spans covering it end to end
    fn segment(&self, text: &str) -> Vec<TokenSpan>;

    /// True when the whole text is a single indivisible token
    fn is_single_token(&self, text: &str) -> bool {
        let total = text.chars().count();
        let spans = self.segment(text);
        spans.len() == 1 && spans[0].len == total
    }
}

// @const: Two-codepoint Cantonese words that must not be split across lines.
// Seeded from the question-word and interjection inventories of the rule
// material this tool ships alongside.
static DEFAULT_LEXICON: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "做乜", "係咪", "有冇", "好冇", "邊個", "點解", "幾耐", "幾時",
        "邊度", "點樣", "幾多", "乜嘢", "咩嘢", "你哋", "我哋", "佢哋",
        "而家", "唔係", "唔好", "唔使", "唔該", "多謝", "屋企", "返工",
        "放工", "鍾意", "得閒", "今日", "聽日", "琴日", "宜家", "嗰度",
        "呢度", "嗰啲", "呢啲", "咁樣", "跟住", "不過", "所以", "因為",
    ]
    .into_iter()
    .collect()
});

/// Lexicon-backed segmenter: a window is one token iff it appears in an
/// immutable word list. Matching is greedy left-to-right over two-codepoint
/// candidates; everything else is a one-character token.
pub struct LexiconSegmenter {
    lexicon: HashSet<String>,
}

impl Default for LexiconSegmenter {
    fn default() -> Self {
        LexiconSegmenter {
            lexicon: DEFAULT_LEXICON.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl LexiconSegmenter {
    // @creates: Segmenter over a caller-supplied word list
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LexiconSegmenter {
            lexicon: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// True when the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Segmenter for LexiconSegmenter {
    fn segment(&self, text: &str) -> Vec<TokenSpan> {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() {
                let window: String = chars[i..i + 2].iter().collect();
                if self.lexicon.contains(&window) {
                    spans.push(TokenSpan { start: i, len: 2 });
                    i += 2;
                    continue;
                }
            }
            spans.push(TokenSpan { start: i, len: 1 });
            i += 1;
        }

        spans
    }
}
