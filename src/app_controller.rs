use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::path::PathBuf;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::boundary_repair::BoundaryMigrator;
use crate::cleaner::{RuleCleaner, SubtitleCleaner};
use crate::file_utils::FileManager;
use crate::line_layout::LineLayout;
use crate::segmenter::LexiconSegmenter;
use crate::subtitle_processor::CueStore;

// @module: Application controller for the subtitle cleaning pipeline

/// Per-invocation options that are not part of the persisted configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct JobOptions {
    /// Signed global shift applied to every cue after cleaning
    pub offset_ms: i64,

    /// Display-time extension applied to every cue after cleaning
    pub extend_ms: i64,

    /// Overwrite existing output files
    pub force_overwrite: bool,
}

/// Main application controller for subtitle cleaning
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Text-cleaning collaborator
    cleaner: Box<dyn SubtitleCleaner>,

    // @field: Cross-cue boundary repair pass
    migrator: BoundaryMigrator,

    // @field: Two-line layout engine
    layout: LineLayout,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let cleaner: Box<dyn SubtitleCleaner> = match &config.rules_file {
            Some(path) => Box::new(RuleCleaner::with_rules_file(path)?),
            None => Box::new(RuleCleaner::baseline()),
        };

        let migrator = BoundaryMigrator::from_config(&config.repair);
        let layout = LineLayout::new(
            config.layout.max_line,
            Box::new(LexiconSegmenter::default()),
        );

        Ok(Self {
            config,
            cleaner,
            migrator,
            layout,
        })
    }

    /// Run the whole pipeline over one file's SRT content.
    ///
    /// Parse, clean each cue, apply any global timing adjustment, repair cue
    /// boundaries, lay out each cue, normalize, and serialize back to SRT.
    pub fn process(&self, content: &str, options: &JobOptions) -> Result<String> {
        let mut store = CueStore::parse(content)?;
        let parsed = store.len();

        store.flatten_text_lines();

        for cue in &mut store.cues {
            let cleaned = self.cleaner.clean(&cue.text);
            debug!("Cleaned cue at {}: {} → {}", cue.timecode, cue.text, cleaned);
            cue.text = cleaned;
        }
        store.drop_empty();

        if options.offset_ms != 0 {
            store.add_offset_all(options.offset_ms);
        }
        if options.extend_ms != 0 {
            store.add_duration_all(options.extend_ms);
        }

        let migrated = self.migrator.repair(&mut store);
        if migrated > 0 {
            debug!("Repaired {} cue boundar{}", migrated, if migrated == 1 { "y" } else { "ies" });
        }
        // A migration can leave a two-character cue empty
        store.drop_empty();

        for cue in &mut store.cues {
            cue.text = self.layout.break_line(&cue.text)?;
        }

        let degenerate = store.normalize();
        if degenerate > 0 {
            warn!("Removed {} degenerate cue(s) during normalization", degenerate);
        }

        if store.is_empty() {
            return Err(anyhow!("All {} parsed cue(s) were dropped during processing", parsed));
        }

        debug!("Pipeline kept {} of {} parsed cue(s)", store.len(), parsed);
        Ok(store.to_srt_string())
    }

    /// Run the pipeline for a single input file
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, options: &JobOptions) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        let output_path =
            FileManager::output_path(&input_file, &output_dir, &self.config.output_prefix);
        if output_path.exists() && !options.force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite)");
            return Ok(());
        }

        let content = FileManager::read_to_string(&input_file)?;
        let cleaned = self
            .process(&content, options)
            .with_context(|| format!("Failed to process subtitle file: {:?}", input_file))?;

        FileManager::write_to_file(&output_path, &cleaned)?;

        info!(
            "Cleaned {:?} → {:?} in {}",
            input_file,
            output_path,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Run the pipeline for every .srt file in a directory
    pub fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf, options: &JobOptions) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let srt_files = FileManager::find_srt_files(&input_dir)?;
        if srt_files.is_empty() {
            return Err(anyhow!("No .srt files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(srt_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        for srt_file in srt_files.iter() {
            let file_name = srt_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            // Outputs of a previous run carry the prefix; reprocessing them
            // would cascade prefixes on every invocation
            if file_name.starts_with(&self.config.output_prefix) {
                debug!("Skipping previous output file: {}", file_name);
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            folder_pb.set_message(format!("Processing: {}", file_name));

            let file_output_dir = match srt_file.parent() {
                Some(parent) if output_dir == input_dir => parent.to_path_buf(),
                _ => output_dir.clone(),
            };

            match self.run(srt_file.clone(), file_output_dir, options) {
                Ok(_) => {
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Done");

        info!(
            "Folder run complete: {} cleaned, {} skipped, {} failed",
            success_count, skip_count, error_count
        );

        if error_count > 0 {
            return Err(anyhow!("{} file(s) failed to process", error_count));
        }

        Ok(())
    }

    // @formats: Elapsed duration for log output
    fn format_duration(duration: std::time::Duration) -> String {
        let total_ms = duration.as_millis();
        if total_ms < 1_000 {
            format!("{}ms", total_ms)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}
