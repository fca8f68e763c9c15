use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use anyhow::{Result, anyhow};
use log::{warn, debug};

use crate::timecode::Timecode;

// @module: SRT cue storage, parsing and normalization

// @const: Blank-line block separator (tolerates stray whitespace)
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").unwrap()
});

// @struct: Single timed subtitle cue
#[derive(Debug, Clone)]
pub struct Cue {
    // @field: Display interval
    pub timecode: Timecode,

    // @field: Cue text; holds at most one internal line break once laid out
    pub text: String,
}

impl Cue {
    pub fn new(timecode: Timecode, text: String) -> Self {
        Cue { timecode, text }
    }
}

/// Ordered sequence of cues for one subtitle file.
///
/// Insertion order equals the chronological order of appearance in the
/// source. Cue identity is positional; sequence numbers are assigned fresh
/// on serialization.
#[derive(Debug, Default)]
pub struct CueStore {
    /// Cues in source order
    pub cues: Vec<Cue>,
}

impl CueStore {
    /// Parse SRT content into a cue store.
    ///
    /// Blocks with fewer than three lines are dropped silently; blocks whose
    /// timecode line fails to parse are dropped with a diagnostic. The index
    /// line of each block is ignored. Fails only when no valid cue remains.
    pub fn parse(content: &str) -> Result<Self> {
        let mut cues = Vec::new();

        for block in BLOCK_SEPARATOR_REGEX.split(content.trim()) {
            let lines: Vec<&str> = block.lines().map(|l| l.trim_end_matches('\r')).collect();
            if lines.len() < 3 {
                debug!("Skipping short subtitle block: {:?}", block);
                continue;
            }

            // lines[0] is the index line; cues are renumbered on write
            let timecode = match lines[1].parse::<Timecode>() {
                Ok(tc) => tc,
                Err(e) => {
                    warn!("Dropping cue with invalid timecode line '{}': {}", lines[1], e);
                    continue;
                }
            };

            cues.push(Cue::new(timecode, lines[2..].join("\n")));
        }

        if cues.is_empty() {
            return Err(anyhow!("No valid subtitle cues were found in the SRT content"));
        }

        Ok(CueStore { cues })
    }

    /// Serialize to SRT, renumbering cues sequentially from 1
    pub fn to_srt_string(&self) -> String {
        let blocks: Vec<String> = self
            .cues
            .iter()
            .enumerate()
            .map(|(i, cue)| format!("{}\n{}\n{}", i + 1, cue.timecode, cue.text))
            .collect();

        let mut content = blocks.join("\n\n");
        content.push('\n');
        content
    }

    /// Number of cues in the store
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// True when the store holds no cues
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Restore the no-overlap invariant across the whole sequence.
    ///
    /// Single forward pass. When a cue's end overruns its successor's start,
    /// the end is clamped to one millisecond before that start; starts are
    /// never altered. A cue whose interval would be inverted by the clamp is
    /// fully swallowed by its successor and removed with a diagnostic, which
    /// can re-expose an earlier cue to the same check. Returns the number of
    /// cues removed as degenerate.
    pub fn normalize(&mut self) -> usize {
        let mut kept: Vec<Cue> = Vec::with_capacity(self.cues.len());
        let mut dropped = 0;

        for cue in self.cues.drain(..) {
            while let Some(prev) = kept.last_mut() {
                if prev.timecode.end_ms() <= cue.timecode.start_ms() {
                    break;
                }
                if cue.timecode.start_ms() > prev.timecode.start_ms() + 1 {
                    prev.timecode.set_end_ms(cue.timecode.start_ms() - 1);
                    break;
                }
                // Clamping would invert the previous interval
                warn!(
                    "Dropping degenerate cue ({}) swallowed by its successor",
                    prev.timecode
                );
                kept.pop();
                dropped += 1;
            }
            kept.push(cue);
        }

        self.cues = kept;
        dropped
    }

    /// Shift every cue by the same signed offset
    pub fn add_offset_all(&mut self, delta_ms: i64) {
        for cue in &mut self.cues {
            cue.timecode.add_offset(delta_ms);
        }
    }

    /// Extend every cue's display time by the same signed delta
    pub fn add_duration_all(&mut self, delta_ms: i64) {
        for cue in &mut self.cues {
            cue.timecode.add_duration(delta_ms);
        }
    }

    /// Join multi-line cue text into a single line.
    ///
    /// CJK lines are glued without a separator, matching how the source
    /// material splits sentences mid-character. Runs before cleaning so the
    /// layout precondition (no pre-existing breaks) holds by construction.
    pub fn flatten_text_lines(&mut self) {
        for cue in &mut self.cues {
            if cue.text.contains('\n') {
                cue.text = cue.text.split('\n').map(str::trim).collect();
            }
        }
    }

    /// Remove cues whose text is empty after cleaning or migration.
    /// Returns the number of cues removed.
    pub fn drop_empty(&mut self) -> usize {
        let before = self.cues.len();
        self.cues.retain(|cue| !cue.text.trim().is_empty());
        let removed = before - self.cues.len();
        if removed > 0 {
            debug!("Dropped {} empty cue(s)", removed);
        }
        removed
    }
}

impl fmt::Display for CueStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CueStore with {} cue(s)", self.cues.len())
    }
}
