use std::fmt::{self, Write as _};

use super::views::{percent_of, ScoreCircle, SCORE_RING_CIRCUMFERENCE};
use super::Report;
use crate::survey::domain::Category;
use crate::survey::scoring::CATEGORY_MAX;

const REPORT_STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827; margin: 0; padding: 40px; background: #ffffff; }
.report { max-width: 800px; margin: 0 auto; }
header { text-align: center; border-bottom: 3px solid #2563eb; padding-bottom: 24px; margin-bottom: 32px; }
h1 { margin: 0 0 8px; font-size: 28px; }
h2 { font-size: 20px; margin: 32px 0 16px; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px; }
h3 { font-size: 16px; margin: 20px 0 8px; }
.meta { color: #6b7280; font-size: 14px; }
.score { display: flex; align-items: center; justify-content: center; gap: 32px; margin: 24px 0; }
.badge { display: inline-block; padding: 6px 16px; border-radius: 9999px; font-weight: 600; }
.bar-row { display: flex; align-items: center; gap: 12px; margin-bottom: 12px; }
.bar-label { width: 110px; font-weight: 500; }
.bar { flex: 1; height: 10px; background: #e5e7eb; border-radius: 9999px; overflow: hidden; }
.bar-fill { height: 100%; border-radius: 9999px; }
.bar-value { width: 60px; text-align: right; font-weight: 700; }
.rec { border-left: 4px solid #2563eb; background: #f9fafb; padding: 12px 16px; margin-bottom: 12px; border-radius: 0 8px 8px 0; }
.rec h4 { margin: 0 0 4px; }
.rec p { margin: 0; font-size: 14px; color: #374151; }
table { width: 100%; border-collapse: collapse; font-size: 13px; margin-bottom: 16px; }
td, th { border-bottom: 1px solid #e5e7eb; padding: 6px 8px; text-align: left; vertical-align: top; }
td.score-cell { width: 60px; text-align: right; white-space: nowrap; }
.print-button { position: fixed; top: 16px; right: 16px; background: #2563eb; color: #fff; border: none; padding: 10px 18px; border-radius: 8px; font-size: 14px; cursor: pointer; }
@media print { .print-button { display: none; } body { padding: 0; } }
"#;

/// Renders the report as a standalone, printable HTML document.
pub fn render_printable_html(report: &Report) -> String {
    let mut out = String::with_capacity(16 * 1024);
    write_document(&mut out, report).expect("writing to a String cannot fail");
    out
}

fn write_document(out: &mut String, report: &Report) -> fmt::Result {
    let respondent = &report.respondent;
    let title = if respondent.name.trim().is_empty() {
        "AI Readiness Report".to_string()
    } else {
        format!("AI Readiness Report - {}", respondent.name.trim())
    };

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape(&title))?;
    writeln!(out, "<style>{REPORT_STYLES}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        "<button class=\"print-button\" onclick=\"window.print()\">Print / Save as PDF</button>"
    )?;
    writeln!(out, "<div class=\"report\">")?;

    write_header(out, report)?;
    write_score(out, report)?;
    write_category_bars(out, report)?;
    write_recommendations(out, report)?;
    write_transcript(out, report)?;
    write_industry_advice(out, report)?;

    writeln!(
        out,
        "<p class=\"meta\">Generated {}</p>",
        report.generated_at.format("%d %B %Y")
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_header(out: &mut String, report: &Report) -> fmt::Result {
    let respondent = &report.respondent;
    writeln!(out, "<header>")?;
    writeln!(out, "<h1>AI Readiness Assessment Report</h1>")?;
    if !respondent.name.trim().is_empty() {
        write!(out, "<p class=\"meta\">Prepared for {}", escape(&respondent.name))?;
        if !respondent.company.trim().is_empty() {
            write!(out, ", {}", escape(&respondent.company))?;
        }
        writeln!(out, "</p>")?;
    }
    if let Some(industry) = report.industry() {
        writeln!(out, "<p class=\"meta\">Industry: {}</p>", escape(industry.label()))?;
    }
    writeln!(out, "</header>")
}

fn write_score(out: &mut String, report: &Report) -> fmt::Result {
    let circle = ScoreCircle::for_total(report.total);
    let level = report.maturity.level;
    let (background, foreground) = level.badge_colors();

    writeln!(out, "<section class=\"score\">")?;
    writeln!(
        out,
        "<svg width=\"160\" height=\"160\" viewBox=\"0 0 100 100\" style=\"transform: rotate(-90deg)\">"
    )?;
    writeln!(
        out,
        "<circle cx=\"50\" cy=\"50\" r=\"{}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-width=\"10\"/>",
        circle.radius
    )?;
    writeln!(
        out,
        "<circle cx=\"50\" cy=\"50\" r=\"{}\" fill=\"none\" stroke=\"#06b6d4\" stroke-width=\"10\" stroke-dasharray=\"{:.2} {}\" stroke-linecap=\"round\"/>",
        circle.radius,
        circle.arc_length(),
        SCORE_RING_CIRCUMFERENCE
    )?;
    writeln!(out, "</svg>")?;
    writeln!(out, "<div>")?;
    writeln!(
        out,
        "<div style=\"font-size: 40px; font-weight: 700\">{} <span class=\"meta\">of {}</span></div>",
        circle.total, circle.max
    )?;
    writeln!(
        out,
        "<span class=\"badge\" style=\"background: {background}; color: {foreground}\">{}</span>",
        level.label()
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")?;
    writeln!(out, "<p>{}</p>", level.description())
}

fn write_category_bars(out: &mut String, report: &Report) -> fmt::Result {
    writeln!(out, "<h2>Score by Category</h2>")?;
    for (category, score) in report.scores.iter() {
        writeln!(
            out,
            "<div class=\"bar-row\"><span class=\"bar-label\">{}</span><div class=\"bar\"><div class=\"bar-fill\" style=\"width: {:.0}%; background: {}\"></div></div><span class=\"bar-value\">{}/{}</span></div>",
            category.label(),
            percent_of(score, CATEGORY_MAX),
            category.color(),
            score,
            CATEGORY_MAX
        )?;
    }
    Ok(())
}

fn write_recommendations(out: &mut String, report: &Report) -> fmt::Result {
    writeln!(out, "<h2>Priority Recommendations</h2>")?;
    for (position, entry) in report.priority_recommendations().iter().enumerate() {
        writeln!(out, "<div class=\"rec\">")?;
        writeln!(
            out,
            "<h4>{}. {} <span class=\"meta\">({}: {}/{})</span></h4>",
            position + 1,
            escape(entry.recommendation.title),
            entry.category.label(),
            entry.score,
            CATEGORY_MAX
        )?;
        writeln!(out, "<p>{}</p>", escape(entry.recommendation.description))?;
        writeln!(out, "</div>")?;
    }
    Ok(())
}

fn write_transcript(out: &mut String, report: &Report) -> fmt::Result {
    writeln!(out, "<h2>Your Responses</h2>")?;
    for category in Category::ordered() {
        writeln!(out, "<h3>{}</h3>", category.label())?;
        writeln!(out, "<table>")?;
        for entry in report.transcript_for(category) {
            writeln!(
                out,
                "<tr><td>{}. {}</td><td>{}</td><td class=\"score-cell\">{}/4</td></tr>",
                entry.question_number,
                escape(entry.question),
                escape(entry.answer_label()),
                entry.score_value()
            )?;
        }
        writeln!(out, "</table>")?;
    }
    Ok(())
}

fn write_industry_advice(out: &mut String, report: &Report) -> fmt::Result {
    let Some(industry) = report.industry() else {
        return Ok(());
    };
    if report.industry_recommendations.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "<h2>{} Recommendations</h2>",
        escape(industry.label())
    )?;
    for advice in &report.industry_recommendations {
        writeln!(out, "<div class=\"rec\">")?;
        writeln!(
            out,
            "<h4>{} <span class=\"meta\">({})</span></h4>",
            escape(advice.title),
            advice.category.label()
        )?;
        writeln!(out, "<p>{}</p>", escape(advice.description))?;
        writeln!(out, "</div>")?;
    }
    Ok(())
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
