use std::io::Write;

use owo_colors::OwoColorize;
use screener_big5::{Trait, TraitScoreSet, items_for};
use screener_core::ParsedProfile;
use screener_ingest::SUPPORTED_FORMATS;
use screener_reporting::CandidateReport;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

fn write_field(w: &mut dyn Write, label: &str, value: &str, color: ColorMode) -> std::io::Result<()> {
    let label = format!("{:<10}", format!("{label}:"));
    match (value.is_empty(), color.enabled()) {
        (true, true) => writeln!(w, "  {}{}", label.cyan(), "not found".dimmed()),
        (true, false) => writeln!(w, "  {}not found", label),
        (false, true) => writeln!(w, "  {}{}", label.cyan(), value),
        (false, false) => writeln!(w, "  {}{}", label, value),
    }
}

fn write_heading(w: &mut dyn Write, heading: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "\n  {}", heading.bold())
    } else {
        writeln!(w, "\n  {}", heading)
    }
}

/// Print one candidate report as the terminal view used when no output
/// format is chosen.
pub fn print_terminal_view(
    w: &mut dyn Write,
    report: &CandidateReport,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", report.file_name.bold().underline())?;
    } else {
        writeln!(w, "{}", report.file_name)?;
        writeln!(w, "{}", "=".repeat(report.file_name.chars().count()))?;
    }

    if let Some(profile) = &report.profile {
        print_profile(w, profile, color)?;
    }
    if let Some(scores) = &report.big5 {
        print_scores(w, scores, color)?;
    }
    writeln!(w)?;
    Ok(())
}

fn print_profile(w: &mut dyn Write, p: &ParsedProfile, color: ColorMode) -> std::io::Result<()> {
    write_field(w, "Name", &p.name, color)?;
    write_field(w, "Email", &p.email, color)?;
    write_field(w, "Phone", &p.phone, color)?;
    write_field(w, "Location", &p.location, color)?;
    write_field(w, "Skills", &p.skills.join(", "), color)?;

    write_heading(w, &format!("Experience ({})", p.experience.len()), color)?;
    for e in &p.experience {
        let detail = [e.company.as_str(), e.duration.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if color.enabled() {
            writeln!(w, "    {} {}", e.title.green(), detail.dimmed())?;
        } else {
            writeln!(w, "    {} {}", e.title, detail)?;
        }
    }

    write_heading(w, &format!("Education ({})", p.education.len()), color)?;
    for e in &p.education {
        let detail = [e.institution.as_str(), e.year.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if color.enabled() {
            writeln!(w, "    {} {}", e.degree.green(), detail.dimmed())?;
        } else {
            writeln!(w, "    {} {}", e.degree, detail)?;
        }
    }
    Ok(())
}

fn print_scores(w: &mut dyn Write, scores: &TraitScoreSet, color: ColorMode) -> std::io::Result<()> {
    write_heading(w, "Big Five Personality Profile", color)?;
    for t in Trait::ALL {
        let label = format!("{:<24}", t.label());
        match (scores.display_score(t), color.enabled()) {
            (Some(score), true) => writeln!(w, "    {}{:>3}  {}", label, score.green(), bar(score))?,
            (Some(score), false) => writeln!(w, "    {}{:>3}  {}", label, score, bar(score))?,
            (None, true) => writeln!(w, "    {}{}", label, "insufficient data".yellow())?,
            (None, false) => writeln!(w, "    {}insufficient data", label)?,
        }
    }
    Ok(())
}

/// Twenty-cell bar for a 0–100 score.
fn bar(score: u8) -> String {
    let filled = usize::from(score) / 5;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

/// Print the questionnaire catalog.
pub fn print_questions(w: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    for t in Trait::ALL {
        if color.enabled() {
            writeln!(w, "{} {}", t.label().bold(), format!("- {}", t.description()).dimmed())?;
        } else {
            writeln!(w, "{} - {}", t.label(), t.description())?;
        }
        for item in items_for(t) {
            let reverse = if item.reverse_scored { " (reverse-scored)" } else { "" };
            if color.enabled() {
                writeln!(w, "  {:>2}. {}{}", item.id, item.text, reverse.dimmed())?;
            } else {
                writeln!(w, "  {:>2}. {}{}", item.id, item.text, reverse)?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "Answer each item from 1 (strongly disagree) to 5 (strongly agree).")?;
    Ok(())
}

/// Print the accepted upload formats.
pub fn print_formats(w: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    for format in SUPPORTED_FORMATS {
        if color.enabled() {
            writeln!(
                w,
                "{:<14} {:<6} {}",
                format.description(),
                format.extension().green(),
                format.media_type().dimmed()
            )?;
        } else {
            writeln!(
                w,
                "{:<14} {:<6} {}",
                format.description(),
                format.extension(),
                format.media_type()
            )?;
        }
    }
    writeln!(w, "Legacy Word (.doc) documents are not supported.")?;
    Ok(())
}
