use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use screener_big5::AnswerMap;
use screener_core::RawDocument;
use screener_core::config_file::{self, ConfigFile};
use screener_ingest::TextExtractor;
use screener_parsing::{ParsingConfigBuilder, ResumeExtractor};
use screener_reporting::{CandidateReport, ExportFormat};

mod output;

use output::ColorMode;

/// Default upload limit when the config file does not set one.
const DEFAULT_MAX_FILE_SIZE_MB: u32 = 10;

/// Candidate screener - parse resumes and score Big Five questionnaires
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log pipeline details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a structured profile from a resume (PDF, DOCX or plain text)
    Parse {
        /// Path to the resume
        file_path: PathBuf,

        /// Declared media type; the file extension is used when absent
        #[arg(long)]
        media_type: Option<String>,

        /// Output format: json, markdown or text
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score Big Five questionnaire answers from a JSON object like {"1": 5, "2": 4}
    Score {
        /// Path to the answers file
        answers: PathBuf,

        /// Output format: json, markdown or text
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a resume and, optionally, score questionnaire answers into one report
    Report {
        /// Path to the resume
        file_path: PathBuf,

        /// Path to the questionnaire answers file
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Declared media type; the file extension is used when absent
        #[arg(long)]
        media_type: Option<String>,

        /// Output format: json, markdown or text
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the Big Five questionnaire items
    Questions,

    /// List the accepted resume formats
    Formats,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config()?;
    let color_allowed = !cli.no_color
        && config.display.as_ref().and_then(|d| d.color).unwrap_or(true)
        && std::io::stdout().is_terminal();

    match cli.command {
        Command::Parse {
            file_path,
            media_type,
            format,
            output,
        } => {
            let report = parse_report(&file_path, media_type, &config)?;
            emit(&[report], &config, format, output.as_deref(), color_allowed)
        }
        Command::Score {
            answers,
            format,
            output,
        } => {
            let scores = screener_big5::score(&load_answers(&answers)?);
            let report = CandidateReport::new(display_name(&answers)).with_big5(scores);
            emit(&[report], &config, format, output.as_deref(), color_allowed)
        }
        Command::Report {
            file_path,
            answers,
            media_type,
            format,
            output,
        } => {
            let mut report = parse_report(&file_path, media_type, &config)?;
            if let Some(path) = answers {
                report = report.with_big5(screener_big5::score(&load_answers(&path)?));
            }
            emit(&[report], &config, format, output.as_deref(), color_allowed)
        }
        Command::Questions => {
            output::print_questions(&mut std::io::stdout().lock(), ColorMode(color_allowed))?;
            Ok(())
        }
        Command::Formats => {
            output::print_formats(&mut std::io::stdout().lock(), ColorMode(color_allowed))?;
            Ok(())
        }
    }
}

/// Log to stderr. `-v` forces debug output; otherwise `RUST_LOG` applies,
/// defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `SCREENER_CONFIG` names an explicit file; otherwise cascade the platform
/// and working-directory config files.
fn load_config() -> anyhow::Result<ConfigFile> {
    match std::env::var_os("SCREENER_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            config_file::load_from_path(&path).with_context(|| {
                format!(
                    "SCREENER_CONFIG points at {}, which is missing or not valid TOML",
                    path.display()
                )
            })
        }
        None => Ok(config_file::load_config()),
    }
}

fn build_parser(config: &ConfigFile) -> anyhow::Result<ResumeExtractor> {
    let builder = match &config.parsing {
        Some(section) => ParsingConfigBuilder::from_config_file(section),
        None => ParsingConfigBuilder::new(),
    };
    let parsing = builder
        .build()
        .context("invalid [parsing] section in config file")?;
    Ok(ResumeExtractor::with_config(parsing))
}

fn max_file_size_bytes(config: &ConfigFile) -> u64 {
    let mb = config
        .input
        .as_ref()
        .and_then(|i| i.max_file_size_mb)
        .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);
    u64::from(mb) * 1024 * 1024
}

/// Read a resume from disk, refusing files over the size limit before
/// reading their content.
fn load_document(
    path: &Path,
    media_type: Option<String>,
    max_bytes: u64,
) -> anyhow::Result<RawDocument> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("File not found: {}", path.display()))?;
    if metadata.len() > max_bytes {
        anyhow::bail!(
            "{} is {} bytes, over the {} MB upload limit (input.max_file_size_mb)",
            path.display(),
            metadata.len(),
            max_bytes / (1024 * 1024)
        );
    }

    let doc = RawDocument::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(match media_type {
        Some(media_type) => doc.with_media_type(media_type),
        None => doc,
    })
}

fn parse_report(
    path: &Path,
    media_type: Option<String>,
    config: &ConfigFile,
) -> anyhow::Result<CandidateReport> {
    let doc = load_document(path, media_type, max_file_size_bytes(config))?;
    let parser = build_parser(config)?;
    let profile = screener_ingest::parse_document_with(&doc, &TextExtractor::new(), &parser)?;
    if profile.is_empty() {
        tracing::warn!(file = %doc.file_name, "no profile fields recognized");
    }
    Ok(CandidateReport::new(doc.file_name).with_profile(profile))
}

fn load_answers(path: &Path) -> anyhow::Result<AnswerMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;
    parse_answers(&content).with_context(|| format!("Invalid answers file {}", path.display()))
}

/// Answers are a JSON object mapping item id to answer: `{"1": 5, "4": 2}`.
fn parse_answers(content: &str) -> anyhow::Result<AnswerMap> {
    Ok(serde_json::from_str(content)?)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Precedence: `--format`, then the output file's extension, then
/// `display.format` from the config file. `None` means no format was chosen.
fn resolve_format(
    flag: Option<ExportFormat>,
    output: Option<&Path>,
    config: &ConfigFile,
) -> anyhow::Result<Option<ExportFormat>> {
    if let Some(format) = flag {
        return Ok(Some(format));
    }
    if let Some(format) = output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .and_then(|e| e.parse().ok())
    {
        return Ok(Some(format));
    }
    config
        .display
        .as_ref()
        .and_then(|d| d.format.as_deref())
        .map(|name| {
            name.parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("invalid display.format in config file")
        })
        .transpose()
}

fn emit(
    reports: &[CandidateReport],
    config: &ConfigFile,
    format: Option<ExportFormat>,
    output_path: Option<&Path>,
    color_allowed: bool,
) -> anyhow::Result<()> {
    let format = resolve_format(format, output_path, config)?;

    if let Some(path) = output_path {
        let format = format.unwrap_or(ExportFormat::Text);
        screener_reporting::export_reports(reports, format, path)?;
        eprintln!("Wrote {} report to {}", format.label(), path.display());
        return Ok(());
    }

    write_reports(
        &mut std::io::stdout().lock(),
        reports,
        format,
        ColorMode(color_allowed),
    )
}

/// Write reports to a stream. A chosen format renders exactly as the exported
/// file would; with no format the terminal view is used.
fn write_reports(
    w: &mut dyn Write,
    reports: &[CandidateReport],
    format: Option<ExportFormat>,
    color: ColorMode,
) -> anyhow::Result<()> {
    match format {
        Some(format) => write!(w, "{}", screener_reporting::render(reports, format)?)?,
        None => {
            for report in reports {
                output::print_terminal_view(w, report, color)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::config_file::{DisplayConfig, InputConfig};

    #[test]
    fn test_parse_answers_string_keys() {
        let answers = parse_answers(r#"{"1": 5, "4": 1, "25": 3}"#).unwrap();
        assert_eq!(answers.get(&1), Some(&5));
        assert_eq!(answers.get(&4), Some(&1));
        assert_eq!(answers.len(), 3);
    }

    #[test]
    fn test_parse_answers_rejects_non_object() {
        assert!(parse_answers("[5, 4, 3]").is_err());
        assert!(parse_answers(r#"{"one": 5}"#).is_err());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = ConfigFile {
            display: Some(DisplayConfig {
                format: Some("markdown".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = Path::new("report.json");

        assert_eq!(
            resolve_format(Some(ExportFormat::Text), Some(out), &config).unwrap(),
            Some(ExportFormat::Text)
        );
        assert_eq!(
            resolve_format(None, Some(out), &config).unwrap(),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            resolve_format(None, None, &config).unwrap(),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(resolve_format(None, None, &ConfigFile::default()).unwrap(), None);
    }

    #[test]
    fn test_text_on_stdout_matches_exported_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let reports = vec![CandidateReport::new("cv.txt").with_big5(Default::default())];

        screener_reporting::export_reports(&reports, ExportFormat::Text, &path).unwrap();
        let mut stdout = Vec::new();
        write_reports(&mut stdout, &reports, Some(ExportFormat::Text), ColorMode(false)).unwrap();

        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            std::fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_no_format_uses_terminal_view() {
        let reports = vec![CandidateReport::new("cv.txt")];
        let mut stdout = Vec::new();
        write_reports(&mut stdout, &reports, None, ColorMode(false)).unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), "cv.txt\n======\n\n");
    }

    #[test]
    fn test_resolve_format_bad_config_value() {
        let config = ConfigFile {
            display: Some(DisplayConfig {
                format: Some("html".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(resolve_format(None, None, &config).is_err());
    }

    #[test]
    fn test_max_file_size_default_and_override() {
        assert_eq!(max_file_size_bytes(&ConfigFile::default()), 10 * 1024 * 1024);
        let config = ConfigFile {
            input: Some(InputConfig {
                max_file_size_mb: Some(1),
            }),
            ..Default::default()
        };
        assert_eq!(max_file_size_bytes(&config), 1024 * 1024);
    }

    #[test]
    fn test_load_document_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        std::fs::write(&path, vec![b'a'; 2048]).unwrap();

        let err = load_document(&path, None, 1024).unwrap_err();
        assert!(err.to_string().contains("upload limit"), "{err}");

        let doc = load_document(&path, Some("text/plain".into()), 4096).unwrap();
        assert_eq!(doc.media_type.as_deref(), Some("text/plain"));
        assert_eq!(doc.file_name, "big.txt");
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document(Path::new("/nonexistent/cv.pdf"), None, 1024).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_parse_report_uses_config_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        std::fs::write(&path, "Sam Ops\nSkills\nTerraform, Docker\n").unwrap();

        let config = ConfigFile {
            parsing: Some(screener_core::config_file::ParsingSection {
                extra_skills: Some(vec!["Terraform".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = parse_report(&path, None, &config).unwrap();
        let profile = report.profile.unwrap();
        assert_eq!(report.file_name, "ops.txt");
        assert!(profile.skills.contains(&"Terraform".to_string()));
        assert!(profile.skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["screener", "score", "a.json", "--no-color", "-f", "json"])
            .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Command::Score { format, .. } => assert_eq!(format, Some(ExportFormat::Json)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
