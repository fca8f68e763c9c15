use log::debug;

use crate::errors::LayoutError;
use crate::segmenter::Segmenter;

// @module: Two-line display layout for a single cleaned cue

/// Default display-width budget per line, in codepoints
pub const DEFAULT_MAX_LINE: usize = 21;

// @const: Punctuation that closes a segment and makes a preferred break point
const DELIMITING_PUNCTUATION: [char; 7] = ['，', '？', '！', '…', '。', '：', '；'];

fn is_delimiting(c: char) -> bool {
    DELIMITING_PUNCTUATION.contains(&c)
}

// Break-anywhere characters for the word-safe fallback pass
fn is_breakable(c: char) -> bool {
    is_delimiting(c) || c.is_whitespace() || c == '-' || c == '－'
}

/// Chooses where to break one cleaned line of text into two display lines.
///
/// A candidate position `p` is the codepoint index of the last character of
/// the prospective first line; splitting at `p` yields `text[..=p]` and
/// `text[p+1..]`.
pub struct LineLayout {
    // @field: Per-line codepoint budget
    max_line: usize,

    // @field: Word oracle consulted by the fallback pass
    segmenter: Box<dyn Segmenter>,
}

impl LineLayout {
    // @creates: Layout engine with an explicit budget and oracle
    pub fn new(max_line: usize, segmenter: Box<dyn Segmenter>) -> Self {
        LineLayout { max_line, segmenter }
    }

    /// Decide a single break for the text, or return it unchanged.
    ///
    /// Fails only when the input already contains a break marker, which the
    /// pipeline ordering is supposed to make impossible. Finding no safe
    /// break position is a degraded outcome, not an error: the text comes
    /// back unsplit with a diagnostic.
    pub fn break_line(&self, text: &str) -> Result<String, LayoutError> {
        if text.contains('\n') {
            return Err(LayoutError::AlreadyBroken(text.to_string()));
        }

        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();

        // Fits on one line with margin
        if len <= self.max_line.saturating_sub(2) {
            return Ok(text.to_string());
        }

        let min_first = (len / 4).max(4);
        let soft_max = (len / 2).min(self.max_line.saturating_sub(1));
        let ext_max = (3 * len / 4).min(self.max_line.saturating_sub(3));

        // Pass A: delimiting punctuation on the near side, longest first line
        // wins within the soft budget
        if soft_max >= min_first {
            for p in (min_first..=soft_max).rev() {
                if p + 1 < len && is_delimiting(chars[p]) {
                    return Ok(Self::split_after(&chars, p));
                }
            }
        }

        // Pass B: relax past the soft budget, nearest punctuation wins
        for p in (soft_max + 1)..=ext_max {
            if p + 1 < len && is_delimiting(chars[p]) {
                return Ok(Self::split_after(&chars, p));
            }
        }

        // Pass C: purely positional, but never inside a word
        if soft_max >= min_first {
            for p in (min_first..=soft_max).rev() {
                if p + 1 >= len {
                    continue;
                }
                if is_breakable(chars[p]) {
                    return Ok(Self::split_after(&chars, p));
                }
                let window: String = chars[p..=p + 1].iter().collect();
                if !self.segmenter.is_single_token(&window) {
                    return Ok(Self::split_after(&chars, p));
                }
            }
        }

        debug!("No safe break position found for: {}", text);
        Ok(text.to_string())
    }

    fn split_after(chars: &[char], p: usize) -> String {
        let mut out = String::with_capacity(chars.len() * 3 + 1);
        out.extend(&chars[..=p]);
        out.push('\n');
        out.extend(&chars[p + 1..]);
        out
    }
}
