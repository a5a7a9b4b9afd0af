use std::io::Write;
use std::path::Path;

use thiserror::Error;

use screener_big5::{Trait, TraitScoreSet};
use screener_core::ParsedProfile;

use crate::types::{CandidateReport, ExportFormat};

const INSUFFICIENT_DATA: &str = "insufficient data";
const NOT_FOUND: &str = "not found";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render reports for a set of candidates and write them to `path`.
pub fn export_reports(
    reports: &[CandidateReport],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let content = render(reports, format)?;

    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    Ok(())
}

/// Render reports as a single document in `format`.
pub fn render(reports: &[CandidateReport], format: ExportFormat) -> Result<String, ExportError> {
    Ok(match format {
        ExportFormat::Json => export_json(reports)?,
        ExportFormat::Markdown => export_markdown(reports),
        ExportFormat::Text => export_text(reports),
    })
}

fn export_json(reports: &[CandidateReport]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(reports)?;
    out.push('\n');
    Ok(out)
}

fn or_not_found(s: &str) -> &str {
    if s.is_empty() { NOT_FOUND } else { s }
}

fn score_str(score: Option<u8>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => INSUFFICIENT_DATA.to_string(),
    }
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

// ── Markdown ────────────────────────────────────────────────────────

fn export_markdown(reports: &[CandidateReport]) -> String {
    let mut out = String::from("# Candidate Report\n\n");

    for report in reports {
        out.push_str(&format!("## {}\n\n", report.file_name));
        if let Some(profile) = &report.profile {
            write_md_profile(&mut out, profile);
        }
        if let Some(scores) = &report.big5 {
            write_md_big5(&mut out, scores);
        }
    }

    out
}

fn write_md_profile(out: &mut String, p: &ParsedProfile) {
    out.push_str(&format!("- **Name:** {}\n", or_not_found(&p.name)));
    out.push_str(&format!("- **Email:** {}\n", or_not_found(&p.email)));
    out.push_str(&format!("- **Phone:** {}\n", or_not_found(&p.phone)));
    out.push_str(&format!("- **Location:** {}\n\n", or_not_found(&p.location)));

    out.push_str("### Skills\n\n");
    if p.skills.is_empty() {
        out.push_str("_None found_\n\n");
    } else {
        out.push_str(&format!("{}\n\n", p.skills.join(", ")));
    }

    out.push_str("### Experience\n\n");
    if p.experience.is_empty() {
        out.push_str("_None found_\n\n");
    } else {
        out.push_str("| Title | Company | Duration |\n|---|---|---|\n");
        for e in &p.experience {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                md_escape(&e.title),
                md_escape(&e.company),
                md_escape(&e.duration)
            ));
        }
        out.push('\n');
    }

    out.push_str("### Education\n\n");
    if p.education.is_empty() {
        out.push_str("_None found_\n\n");
    } else {
        out.push_str("| Degree | Institution | Year |\n|---|---|---|\n");
        for e in &p.education {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                md_escape(&e.degree),
                md_escape(&e.institution),
                md_escape(&e.year)
            ));
        }
        out.push('\n');
    }
}

fn write_md_big5(out: &mut String, scores: &TraitScoreSet) {
    out.push_str("### Big Five Personality Profile\n\n");
    out.push_str("| Trait | Score | Description |\n|---|---|---|\n");
    for t in Trait::ALL {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            t.label(),
            score_str(scores.display_score(t)),
            t.description()
        ));
    }
    out.push('\n');
}

// ── Plain text ──────────────────────────────────────────────────────

fn export_text(reports: &[CandidateReport]) -> String {
    let mut out = String::from("Candidate Report\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    for report in reports {
        out.push_str(&format!("\n{}\n", report.file_name));
        out.push_str(&"-".repeat(report.file_name.chars().count()));
        out.push('\n');

        if let Some(p) = &report.profile {
            write_text_profile(&mut out, p);
        }
        if let Some(scores) = &report.big5 {
            out.push_str("\n  Big Five\n");
            for t in Trait::ALL {
                out.push_str(&format!(
                    "    {:<24} {}\n",
                    t.label(),
                    score_str(scores.display_score(t))
                ));
            }
        }
    }

    out
}

fn write_text_profile(out: &mut String, p: &ParsedProfile) {
    out.push_str(&format!("  Name:      {}\n", or_not_found(&p.name)));
    out.push_str(&format!("  Email:     {}\n", or_not_found(&p.email)));
    out.push_str(&format!("  Phone:     {}\n", or_not_found(&p.phone)));
    out.push_str(&format!("  Location:  {}\n", or_not_found(&p.location)));
    out.push_str(&format!(
        "  Skills:    {}\n",
        if p.skills.is_empty() {
            NOT_FOUND.to_string()
        } else {
            p.skills.join(", ")
        }
    ));

    if !p.experience.is_empty() {
        out.push_str("\n  Experience\n");
        for e in &p.experience {
            out.push_str(&format!("    {}", e.title));
            if !e.company.is_empty() {
                out.push_str(&format!(", {}", e.company));
            }
            if !e.duration.is_empty() {
                out.push_str(&format!(" ({})", e.duration));
            }
            out.push('\n');
        }
    }

    if !p.education.is_empty() {
        out.push_str("\n  Education\n");
        for e in &p.education {
            out.push_str(&format!("    {}", e.degree));
            if !e.institution.is_empty() {
                out.push_str(&format!(", {}", e.institution));
            }
            if !e.year.is_empty() {
                out.push_str(&format!(" ({})", e.year));
            }
            out.push('\n');
        }
    }
}
