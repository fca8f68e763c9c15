use std::collections::HashSet;
use log::debug;

use crate::app_config::RepairConfig;
use crate::subtitle_processor::CueStore;

// @module: Cross-cue repair of text split across a cue boundary

/// Characters that legitimately start a sentence on their own and must never
/// be pulled back across a cue boundary
pub const DEFAULT_EXCLUDED_CHARS: &str = "噉喂噢嗯哦";

/// Default inter-cue gap above which a migration is assumed intentional
pub const DEFAULT_MAX_GAP_MS: u64 = 1000;

/// Repairs the transcription artifact where a trailing interjection plus
/// punctuation is cut from the end of one spoken line and glued to the front
/// of the next cue.
///
/// The pass is forward-only: it moves a single leading character (plus an
/// optional trailing `？`) one cue backward, at most once per adjacent pair,
/// and each decision sees the already-repaired previous cue.
pub struct BoundaryMigrator {
    // @field: Gap threshold in ms; at or above it no migration happens
    max_gap_ms: u64,

    // @field: Immutable set of characters exempt from migration
    excluded: HashSet<char>,
}

impl Default for BoundaryMigrator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GAP_MS, DEFAULT_EXCLUDED_CHARS)
    }
}

impl BoundaryMigrator {
    // @creates: Migrator with an explicit threshold and exclusion set
    pub fn new(max_gap_ms: u64, excluded_chars: &str) -> Self {
        BoundaryMigrator {
            max_gap_ms,
            excluded: excluded_chars.chars().collect(),
        }
    }

    /// Build a migrator from the repair section of the configuration
    pub fn from_config(config: &RepairConfig) -> Self {
        Self::new(config.max_gap_ms, &config.excluded_chars)
    }

    /// Run the repair pass over the whole store, left to right.
    /// Returns the number of migrations performed.
    pub fn repair(&self, store: &mut CueStore) -> usize {
        let mut migrated = 0;

        for i in 1..store.cues.len() {
            let (head, tail) = store.cues.split_at_mut(i);
            let prev = &mut head[i - 1];
            let current = &mut tail[0];

            // Never touch a boundary after embedded Latin text
            let Some(prev_last) = prev.text.chars().last() else {
                continue;
            };
            if prev_last.is_ascii() {
                continue;
            }

            // Leading pattern: exactly one non-ASCII character immediately
            // followed by a fullwidth comma or question mark
            let mut chars = current.text.chars();
            let (Some(lead), Some(punct)) = (chars.next(), chars.next()) else {
                continue;
            };
            if lead.is_ascii() || (punct != '，' && punct != '？') {
                continue;
            }

            let gap = prev.timecode.gap_ms(&current.timecode);
            if gap >= self.max_gap_ms || self.excluded.contains(&lead) {
                continue;
            }

            debug!(
                "Migrating leading '{}{}' backward across a {}ms gap",
                lead, punct, gap
            );

            prev.text.push(lead);
            // A question mark travels with its character; a comma is dropped
            if punct == '？' {
                prev.text.push(punct);
            }
            let cut = lead.len_utf8() + punct.len_utf8();
            current.text.drain(..cut);
            migrated += 1;
        }

        migrated
    }
}
