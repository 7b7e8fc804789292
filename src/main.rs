// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use srtscribe::app_config::{Config, LogLevel};
use srtscribe::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// srtscribe - SRT subtitles to a plain-text transcript
///
/// Combines every SRT file of a folder into one text file, removing
/// sequence numbers, timestamps and formatting tags.
#[derive(Parser, Debug)]
#[command(name = "srtscribe")]
#[command(version)]
#[command(about = "Convert multiple SRT files to a single TXT file, removing timestamps")]
#[command(long_about = "srtscribe combines the SRT files of a folder into one plain-text transcript.

EXAMPLES:
    srtscribe /path/to/srt/files output.txt
    srtscribe ./subtitles combined_transcription.txt
    srtscribe --no-headers . all_transcripts.txt
    srtscribe --generate-completions bash > srtscribe.bash

CONFIGURATION:
    Settings are read from conf.json when it exists. Use --config to point at
    another file. Command line options take precedence over the file.")]
struct CommandLineOptions {
    /// Folder containing the SRT files
    #[arg(value_name = "INPUT_FOLDER", required_unless_present = "generate_completions")]
    input_folder: Option<PathBuf>,

    /// Path for the output TXT file
    #[arg(value_name = "OUTPUT_FILE", required_unless_present = "generate_completions")]
    output_file: Option<PathBuf>,

    /// Print shell completions for srtscribe and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    generate_completions: Option<Shell>,

    /// Do not add filename headers between files
    #[arg(long)]
    no_headers: bool,

    /// Subtitle file extension to collect
    #[arg(short, long)]
    extension: Option<String>,

    /// Skip files that are not valid UTF-8 instead of reading them as Latin-1
    #[arg(long)]
    strict_utf8: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Console logger writing to stdout
struct ConsoleLogger {
    color: bool,
}

impl ConsoleLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(ConsoleLogger {
            color: std::io::stdout().is_terminal(),
        });
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[0m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The level is adjusted after config loading through log::set_max_level
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stdout = std::io::stdout().lock();
        let _ = match (record.level(), self.color) {
            (Level::Info, _) => writeln!(stdout, "{}", record.args()),
            (level, true) => {
                let now = chrono::Local::now().format("%H:%M:%S.%3f");
                writeln!(stdout, "{}{} {:<5} {}\x1B[0m", Self::color_for_level(level), now, level, record.args())
            }
            (level, false) => {
                let now = chrono::Local::now().format("%H:%M:%S.%3f");
                writeln!(stdout, "{} {:<5} {}", now, level, record.args())
            }
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

fn main() -> ExitCode {
    // Usage errors exit with 1 like every other failure
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    if let Some(shell) = cli.generate_completions {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "srtscribe", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = ConsoleLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match run_convert(cli) {
        Ok(()) => {
            info!("\nConversion completed successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            info!("\nConversion failed.");
            ExitCode::FAILURE
        }
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    if let Some(level) = &options.log_level {
        let level: LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)
        .context("Failed to load configuration")?;

    // Command line options take precedence over the config file
    if options.no_headers {
        config.include_headers = false;
    }
    if options.strict_utf8 {
        config.latin1_fallback = false;
    }
    if let Some(extension) = options.extension {
        config.subtitle_extension = extension;
    }
    match options.log_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    // clap enforces both positionals unless completions are requested
    let input_folder = options.input_folder.context("INPUT_FOLDER is required")?;
    let output_file = options.output_file.context("OUTPUT_FILE is required")?;

    controller.run(&input_folder, &output_file)?;
    Ok(())
}
