use log::{error, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{AppError, AppResult};
use crate::file_utils::FileManager;
use crate::subtitle_processor;
use crate::transcript::Transcript;

// @module: Application controller for transcript conversion

/// Outcome of one input file
#[derive(Debug)]
pub struct FileReport {
    pub file_name: String,
    /// Segment count, or the error that caused the file to be skipped
    pub outcome: Result<usize, AppError>,
}

/// Counts reported at the end of a successful run
#[derive(Debug)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_skipped: usize,
    pub segments_total: usize,
    pub lines_written: usize,
    pub output_path: PathBuf,
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    /// Files that yielded at least one segment
    pub fn files_with_text(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Ok(count) if count > 0))
            .count()
    }
}

/// Main application controller for subtitle-to-text conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Convert every subtitle file of `input_dir` into one transcript at `output_file`
    pub fn run(&self, input_dir: &Path, output_file: &Path) -> AppResult<RunSummary> {
        FileManager::validate_input_dir(input_dir)?;

        let extension = self.config.extension();
        let files = FileManager::find_files(input_dir, extension)?;
        if files.is_empty() {
            return Err(AppError::NoMatchingFiles {
                dir: input_dir.to_path_buf(),
                extension: extension.to_uppercase(),
            });
        }

        info!("Found {} {} file(s):", files.len(), extension.to_uppercase());
        for file in &files {
            info!("  - {}", Self::display_name(file));
        }

        let (transcript, reports) = self.build_transcript(&files);

        if transcript.is_empty() {
            return Err(AppError::EmptyResult {
                extension: extension.to_uppercase(),
            });
        }

        let content = transcript.render();
        FileManager::write_atomic(output_file, &content)?;

        let lines_written = transcript.non_blank_line_count();
        info!("Successfully created: {}", output_file.display());
        info!("Total lines written: {}", lines_written);

        Ok(RunSummary {
            files_found: files.len(),
            files_skipped: reports.iter().filter(|r| r.outcome.is_err()).count(),
            segments_total: transcript.segment_count(),
            lines_written,
            output_path: output_file.to_path_buf(),
            reports,
        })
    }

    /// Parse each file in order, skipping the ones that fail
    pub fn build_transcript(&self, files: &[PathBuf]) -> (Transcript, Vec<FileReport>) {
        let mut transcript = Transcript::new(self.config.include_headers);
        let mut reports = Vec::with_capacity(files.len());

        for file in files {
            let file_name = Self::display_name(file);
            info!("Processing: {}", file_name);

            let outcome = match subtitle_processor::parse_file(file, self.config.latin1_fallback) {
                Ok(segments) => {
                    let count = segments.len();
                    info!("  Extracted {} text segments", count);
                    transcript.push_file(file_name.clone(), segments);
                    Ok(count)
                }
                Err(e) => {
                    error!("  Error processing {}: {}", file_name, e);
                    Err(e)
                }
            };

            reports.push(FileReport { file_name, outcome });
        }

        debug!("Transcript holds {} segments from {} file(s)", transcript.segment_count(), transcript.sections().len());
        (transcript, reports)
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}
