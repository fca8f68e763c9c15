/*!
 * Tests for the two-line layout algorithm
 */

use cantosub::errors::LayoutError;
use cantosub::line_layout::{LineLayout, DEFAULT_MAX_LINE};
use cantosub::segmenter::{LexiconSegmenter, Segmenter};

fn default_layout() -> LineLayout {
    LineLayout::new(DEFAULT_MAX_LINE, Box::new(LexiconSegmenter::default()))
}

/// Text within the margin comes back byte-identical
#[test]
fn test_layout_breakLine_withShortText_shouldReturnUnchanged() {
    let layout = default_layout();
    // 19 codepoints == max_line - 2, the margin boundary
    let text = "一二三四五六七八九十一二三四五六七八九";
    assert_eq!(text.chars().count(), DEFAULT_MAX_LINE - 2);

    assert_eq!(layout.break_line(text).unwrap(), text);
}

/// Pre-broken input is a caller error
#[test]
fn test_layout_breakLine_withExistingBreak_shouldFail() {
    let err = default_layout().break_line("你好\n世界").unwrap_err();
    assert!(matches!(err, LayoutError::AlreadyBroken(_)));
}

/// Pass A: the largest qualifying punctuation index at or below the soft
/// budget wins
#[test]
fn test_layout_breakLine_withNearSidePunctuation_shouldSplitAfterIt() {
    let layout = default_layout();
    let text = "今日天氣真係好好呀，我哋不如出去行下山啦";

    let out = layout.break_line(text).unwrap();
    assert_eq!(out, "今日天氣真係好好呀，\n我哋不如出去行下山啦");
}

/// Pass A prefers the later of two qualifying commas
#[test]
fn test_layout_breakLine_withTwoNearCommas_shouldPreferLargerIndex() {
    let layout = default_layout();
    // Commas at codepoint indices 4 and 9; soft_max = 10
    let text = "一二三四，六七八九，十一二三四五六七八九十";

    let out = layout.break_line(text).unwrap();
    assert_eq!(out, "一二三四，六七八九，\n十一二三四五六七八九十");
}

/// Pass B: punctuation past the soft budget is a second choice
#[test]
fn test_layout_breakLine_withFarSidePunctuationOnly_shouldSplitAfterIt() {
    let layout = default_layout();
    let text = "琴日佢同我講咗好多嘢都仲未講完？你知唔知呀";

    let out = layout.break_line(text).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with('？'));
    assert!(lines[0].chars().count() > text.chars().count() / 2);
}

/// Pass C: without punctuation the split is positional but never inside a
/// word the oracle reports as a single token
#[test]
fn test_layout_breakLine_withNoPunctuation_shouldRespectWordBoundaries() {
    let layout = default_layout();
    let text = "我哋而家唔係返工唔係放工唔係得閒去飲茶啦";

    let out = layout.break_line(text).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 2);

    let first: Vec<char> = lines[0].chars().collect();
    let second: Vec<char> = lines[1].chars().collect();
    let window: String = [*first.last().unwrap(), second[0]].iter().collect();
    assert!(
        !LexiconSegmenter::default().is_single_token(&window),
        "split landed inside token window {:?}",
        window
    );
}

/// The output never holds more than one break marker
#[test]
fn test_layout_breakLine_withManyCommas_shouldInsertSingleBreak() {
    let layout = default_layout();
    let text = "一二三，四五六，七八九，十一二，三四五，六七八";

    let out = layout.break_line(text).unwrap();
    assert_eq!(out.matches('\n').count(), 1);
}

/// Layout exhaustion is a degraded outcome, not an error
#[test]
fn test_layout_breakLine_withNoSafePosition_shouldReturnUnsplit() {
    let segmenter = LexiconSegmenter::with_words(["月月"]);
    let layout = LineLayout::new(8, Box::new(segmenter));
    let text = "月月月月月月月月月月";

    assert_eq!(layout.break_line(text).unwrap(), text);
}

/// The second line is never empty: trailing punctuation does not qualify
#[test]
fn test_layout_breakLine_withTrailingPunctuationOnly_shouldNotLeaveEmptyLine() {
    let layout = default_layout();
    let text = "一二三四五六七八九十一二三四五六七八九？";

    let out = layout.break_line(text).unwrap();
    for line in out.split('\n') {
        assert!(!line.is_empty());
    }
}

/// A run of punctuation splits after its last character within the budget
#[test]
fn test_layout_breakLine_withPunctuationRun_shouldSplitAfterRun() {
    let layout = default_layout();
    // Ellipsis run at indices 6-7, soft_max = 10
    let text = "等埋我先得㗎……你哋行得實在太快喇係咪先";

    let out = layout.break_line(text).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert!(lines[0].ends_with('…'));
    assert!(!lines[1].starts_with('…'));
}
