use advisory_site::config::AppConfig;
use advisory_site::content::{GuideLibrary, GuideMeta};
use advisory_site::error::AppError;
use advisory_site::survey::scoring::{CATEGORY_MAX, TOTAL_MAX};
use advisory_site::survey::{
    render_printable_html, AnswerStore, Industry, QuestionBank, Report, Respondent,
};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// One `--answers` entry: an option index, or `-` for a skipped question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnswerSlot(Option<usize>);

#[derive(Args, Debug)]
pub(crate) struct SurveyReportArgs {
    /// Comma-separated option indices (0-3), one per question in bank order; '-' skips a question
    #[arg(long, value_delimiter = ',', value_parser = parse_answer_slot)]
    pub(crate) answers: Vec<AnswerSlot>,
    /// Respondent name shown on the report
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Respondent email
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    /// Company name shown on the report
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    /// Industry slug or label, enabling industry-specific advice
    #[arg(long, value_parser = parse_industry)]
    pub(crate) industry: Option<Industry>,
    /// Write the printable HTML report to this path
    #[arg(long)]
    pub(crate) html: Option<PathBuf>,
    /// Write the answer transcript as CSV to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GuidesListArgs {
    /// Guides directory (defaults to GUIDES_DIR)
    #[arg(long)]
    pub(crate) dir: Option<PathBuf>,
    /// Only list guides in this category
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Only list guides carrying this tag
    #[arg(long)]
    pub(crate) tag: Option<String>,
}

pub(crate) fn parse_answer_slot(raw: &str) -> Result<AnswerSlot, String> {
    let trimmed = raw.trim();
    if trimmed == "-" || trimmed.is_empty() {
        return Ok(AnswerSlot(None));
    }
    trimmed
        .parse::<usize>()
        .map(|option| AnswerSlot(Some(option)))
        .map_err(|_| format!("'{raw}' is not an option index or '-'"))
}

pub(crate) fn parse_industry(raw: &str) -> Result<Industry, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn run_survey_report(args: SurveyReportArgs) -> Result<(), AppError> {
    let SurveyReportArgs {
        answers,
        name,
        email,
        company,
        industry,
        html,
        csv,
    } = args;

    let bank = QuestionBank::standard();
    let slots = answers.into_iter().map(|AnswerSlot(slot)| slot).collect();
    let answers = AnswerStore::from_slots(&bank, slots)?;
    let respondent = Respondent {
        name,
        email,
        phone: String::new(),
        company,
        industry,
    }
    .normalized();

    let report = Report::build(&bank, &answers, &respondent);
    for line in survey_summary_lines(&report) {
        println!("{line}");
    }

    if let Some(path) = html {
        fs::write(&path, render_printable_html(&report))?;
        println!("\nPrintable report written to {}", path.display());
    }
    if let Some(path) = csv {
        fs::write(&path, report.transcript_csv()?)?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn survey_summary_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    let name = report.respondent.name.trim();
    let name = if name.is_empty() { "Respondent" } else { name };
    let company = report.respondent.company.trim();
    if company.is_empty() {
        lines.push(format!("AI readiness report for {name}"));
    } else {
        lines.push(format!("AI readiness report for {name}, {company}"));
    }
    lines.push(format!(
        "Generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    let percent = u32::from(report.total) * 100 / u32::from(TOTAL_MAX);
    lines.push(format!(
        "Overall: {}/{} ({}%) - {}",
        report.total,
        TOTAL_MAX,
        percent,
        report.maturity.level.label()
    ));

    lines.push(String::new());
    lines.push("Category scores".to_string());
    for (category, score) in report.scores.iter() {
        lines.push(format!(
            "- {:<11} {:>2}/{}",
            category.label(),
            score,
            CATEGORY_MAX
        ));
    }

    lines.push(String::new());
    lines.push("Priority recommendations".to_string());
    for (position, ranked) in report.priority_recommendations().iter().enumerate() {
        lines.push(format!(
            "{}. {} ({} tier): {}",
            position + 1,
            ranked.category.label(),
            ranked.tier.label(),
            ranked.recommendation.title
        ));
    }

    if let Some(industry) = report.industry() {
        lines.push(String::new());
        lines.push(format!("{} focus", industry.label()));
        for advice in report.priority_industry_recommendations() {
            lines.push(format!("- [{}] {}", advice.category.label(), advice.title));
        }
    }

    let unanswered = report
        .transcript
        .iter()
        .filter(|entry| entry.answer.is_none())
        .count();
    if unanswered > 0 {
        lines.push(String::new());
        lines.push(format!("{unanswered} question(s) left unanswered"));
    }

    lines
}

pub(crate) fn run_guides_list(args: GuidesListArgs) -> Result<(), AppError> {
    let GuidesListArgs { dir, category, tag } = args;
    let dir = match dir {
        Some(dir) => dir,
        None => AppConfig::load()?.content.guides_dir,
    };

    let library = GuideLibrary::new(dir);
    let guides = match (category, tag) {
        (Some(category), _) => library.posts_by_category(&category)?,
        (None, Some(tag)) => library.posts_by_tag(&tag)?,
        (None, None) => library.all_posts()?,
    };

    if guides.is_empty() {
        println!("No guides found in {}", library.root().display());
        return Ok(());
    }

    println!("Guides in {}", library.root().display());
    for guide in &guides {
        println!("{}", guide_line(guide));
    }

    Ok(())
}

fn guide_line(guide: &GuideMeta) -> String {
    format!(
        "- {}  {} ({}) [{}]",
        guide.date, guide.title, guide.reading_time, guide.slug
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(answers: Vec<Option<usize>>, industry: Option<Industry>) -> Report {
        let bank = QuestionBank::standard();
        let answers = AnswerStore::from_slots(&bank, answers).expect("aligned answers");
        let respondent = Respondent {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: String::new(),
            company: "Coastal Dental".to_string(),
            industry,
        };
        Report::build(&bank, &answers, &respondent)
    }

    #[test]
    fn parses_answer_slots() {
        assert_eq!(parse_answer_slot("2"), Ok(AnswerSlot(Some(2))));
        assert_eq!(parse_answer_slot(" - "), Ok(AnswerSlot(None)));
        assert!(parse_answer_slot("two").is_err());
    }

    #[test]
    fn parses_industry_arguments() {
        assert_eq!(parse_industry("healthcare"), Ok(Industry::Healthcare));
        assert!(parse_industry("basket weaving").is_err());
    }

    #[test]
    fn summary_lists_scores_and_priorities() {
        let report = report_with(vec![Some(3); 20], Some(Industry::Healthcare));
        let lines = survey_summary_lines(&report);

        assert_eq!(lines[0], "AI readiness report for Sam, Coastal Dental");
        assert!(lines.contains(&"Overall: 80/80 (100%) - Advanced".to_string()));
        assert!(lines.iter().any(|line| line.starts_with("1. Strategy (high tier)")));
        assert!(lines.contains(&"Healthcare focus".to_string()));
        assert!(!lines.iter().any(|line| line.contains("unanswered")));
    }

    #[test]
    fn summary_counts_unanswered_questions() {
        let mut answers = vec![Some(0); 20];
        answers[3] = None;
        answers[7] = None;
        let report = report_with(answers, None);
        let lines = survey_summary_lines(&report);

        assert!(lines.contains(&"2 question(s) left unanswered".to_string()));
        assert!(!lines.iter().any(|line| line.ends_with(" focus")));
    }

    #[test]
    fn survey_report_rejects_short_answer_lists() {
        let args = SurveyReportArgs {
            answers: vec![AnswerSlot(Some(1)); 5],
            name: String::new(),
            email: String::new(),
            company: String::new(),
            industry: None,
            html: None,
            csv: None,
        };
        assert!(matches!(run_survey_report(args), Err(AppError::Answers(_))));
    }

    #[test]
    fn survey_report_writes_requested_exports() {
        let dir = std::env::temp_dir().join(format!("advisory-cli-report-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let html = dir.join("report.html");
        let csv = dir.join("transcript.csv");

        let args = SurveyReportArgs {
            answers: vec![AnswerSlot(Some(2)); 20],
            name: "Sam".to_string(),
            email: String::new(),
            company: String::new(),
            industry: None,
            html: Some(html.clone()),
            csv: Some(csv.clone()),
        };
        run_survey_report(args).expect("report runs");

        let document = fs::read_to_string(&html).expect("html written");
        assert!(document.contains("window.print()"));
        let transcript = fs::read_to_string(&csv).expect("csv written");
        assert_eq!(transcript.lines().count(), 21);

        fs::remove_dir_all(&dir).ok();
    }
}
