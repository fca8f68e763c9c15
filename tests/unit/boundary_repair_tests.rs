/*!
 * Tests for the cross-cue boundary repair pass
 */

use cantosub::app_config::RepairConfig;
use cantosub::boundary_repair::{BoundaryMigrator, DEFAULT_EXCLUDED_CHARS, DEFAULT_MAX_GAP_MS};
use cantosub::subtitle_processor::{Cue, CueStore};
use cantosub::timecode::Timecode;

fn store(cues: &[(u64, u64, &str)]) -> CueStore {
    CueStore {
        cues: cues
            .iter()
            .map(|&(start, end, text)| Cue::new(Timecode::new(start, end).unwrap(), text.to_string()))
            .collect(),
    }
}

/// Happy path: one non-ASCII character plus comma migrates within the gap,
/// and the comma itself is dropped
#[test]
fn test_migrator_repair_withCommaPatternAndSmallGap_shouldMoveCharOnly() {
    let mut s = store(&[(1_000, 2_000, "你做咩"), (2_300, 3_000, "喎，我走先")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 1);
    assert_eq!(s.cues[0].text, "你做咩喎");
    assert_eq!(s.cues[1].text, "我走先");
}

/// A question mark travels with its character
#[test]
fn test_migrator_repair_withQuestionMarkPattern_shouldMoveCharAndMark() {
    let mut s = store(&[(1_000, 2_000, "你去唔去"), (2_500, 3_200, "呀？唔知喎")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 1);
    assert_eq!(s.cues[0].text, "你去唔去呀？");
    assert_eq!(s.cues[1].text, "唔知喎");
}

/// No migration at or above the gap threshold, regardless of the pattern
#[test]
fn test_migrator_repair_withGapAtThreshold_shouldNotMigrate() {
    let mut s = store(&[(1_000, 2_000, "你做咩"), (3_000, 4_000, "喎，我走先")]);
    let migrated = BoundaryMigrator::new(DEFAULT_MAX_GAP_MS, "").repair(&mut s);

    assert_eq!(migrated, 0);
    assert_eq!(s.cues[0].text, "你做咩");
    assert_eq!(s.cues[1].text, "喎，我走先");
}

/// Embedded Latin text in the previous cue blocks migration entirely
#[test]
fn test_migrator_repair_withAsciiTailInPreviousCue_shouldNotMigrate() {
    let mut s = store(&[(1_000, 2_000, "你識唔識Tom"), (2_100, 3_000, "呀？佢好勁")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 0);
    assert_eq!(s.cues[1].text, "呀？佢好勁");
}

/// Members of the exclusion set stay put even when timing permits
#[test]
fn test_migrator_repair_withExcludedLeadingChar_shouldNotMigrate() {
    for ch in DEFAULT_EXCLUDED_CHARS.chars() {
        let leading = format!("{}，你點睇", ch);
        let mut s = store(&[(1_000, 2_000, "係呀"), (2_100, 3_000, leading.as_str())]);
        let migrated = BoundaryMigrator::default().repair(&mut s);

        assert_eq!(migrated, 0, "'{}' must never migrate", ch);
        assert_eq!(s.cues[1].text, leading);
    }
}

/// Scenario from the design notes: a cue starting with the punctuation
/// itself has no leading character and does not match
#[test]
fn test_migrator_repair_withLeadingCommaOnly_shouldNotMigrate() {
    let mut s = store(&[(1_000, 2_000, "喂"), (2_300, 3_000, "，你好")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 0);
    assert_eq!(s.cues[0].text, "喂");
    assert_eq!(s.cues[1].text, "，你好");
}

/// Scenario from the design notes: the second character must be the
/// punctuation, so "？點算呀" does not match
#[test]
fn test_migrator_repair_withLeadingQuestionMarkOnly_shouldNotMigrate() {
    let mut s = store(&[(1_000, 2_000, "佢好忙"), (2_500, 3_500, "？點算呀")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 0);
    assert_eq!(s.cues[1].text, "？點算呀");
}

/// ASCII leading characters never match the pattern
#[test]
fn test_migrator_repair_withAsciiLeadingChar_shouldNotMigrate() {
    let mut s = store(&[(1_000, 2_000, "好啦"), (2_100, 3_000, "a，得唔得")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 0);
}

/// The first cue has no predecessor and is always skipped
#[test]
fn test_migrator_repair_withSingleCue_shouldDoNothing() {
    let mut s = store(&[(1_000, 2_000, "喎，我走先")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 0);
    assert_eq!(s.cues[0].text, "喎，我走先");
}

/// Each decision sees the already-repaired previous cue
#[test]
fn test_migrator_repair_withChainedMigrations_shouldUseRepairedState() {
    let mut s = store(&[
        (0, 1_000, "好啦"),
        (1_200, 2_000, "喎，得"),
        (2_200, 3_000, "嘛，走啦"),
    ]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 2);
    assert_eq!(s.cues[0].text, "好啦喎");
    assert_eq!(s.cues[1].text, "得嘛");
    assert_eq!(s.cues[2].text, "走啦");
}

/// A two-character cue migrates down to empty text
#[test]
fn test_migrator_repair_withTwoCharCue_shouldLeaveEmptyText() {
    let mut s = store(&[(0, 1_000, "收到"), (1_200, 2_000, "喇？")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 1);
    assert_eq!(s.cues[0].text, "收到喇？");
    assert_eq!(s.cues[1].text, "");
}

/// Overlapping timecodes gap to zero and therefore always pass the gap test
#[test]
fn test_migrator_repair_withOverlappingCues_shouldMigrate() {
    let mut s = store(&[(1_000, 2_500, "你做咩"), (2_000, 3_000, "喎，我走先")]);
    let migrated = BoundaryMigrator::default().repair(&mut s);

    assert_eq!(migrated, 1);
}

/// Config threading: a custom threshold and exclusion set apply
#[test]
fn test_migrator_fromConfig_withCustomValues_shouldHonorThem() {
    let config = RepairConfig {
        max_gap_ms: 200,
        excluded_chars: "喎".to_string(),
    };
    let migrator = BoundaryMigrator::from_config(&config);

    // Gap 300 >= custom 200 threshold
    let mut s = store(&[(1_000, 2_000, "你做咩"), (2_300, 3_000, "呀，我走先")]);
    assert_eq!(migrator.repair(&mut s), 0);

    // Custom exclusion blocks 喎 even with a tiny gap
    let mut s = store(&[(1_000, 2_000, "你做咩"), (2_100, 3_000, "喎，我走先")]);
    assert_eq!(migrator.repair(&mut s), 0);
}
