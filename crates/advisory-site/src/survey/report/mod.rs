mod html;
mod payload;
pub mod views;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::answers::AnswerStore;
use super::bank::QuestionBank;
use super::catalogue::industry_recommendations;
use super::domain::{Category, Industry, IndustryRecommendation};
use super::respondent::Respondent;
use super::scoring::{
    classify_maturity, compute_category_scores, rank_recommendations, CategoryScores, Maturity,
    RankedRecommendation,
};

pub use html::render_printable_html;
pub use payload::RelayPayload;

/// Number of ranked recommendations surfaced as priority areas.
pub const PRIORITY_COUNT: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to write transcript csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("transcript csv was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One line of the answer transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub question_number: usize,
    pub category: Category,
    pub question: &'static str,
    pub answer: Option<&'static str>,
    pub score: Option<u8>,
}

impl TranscriptEntry {
    pub fn answer_label(&self) -> &'static str {
        self.answer.unwrap_or("Not answered")
    }

    pub fn score_value(&self) -> u8 {
        self.score.unwrap_or(0)
    }
}

/// Scores, bands and advice for one respondent, computed on demand and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub respondent: Respondent,
    pub scores: CategoryScores,
    pub total: u8,
    pub maturity: Maturity,
    pub ranked: Vec<RankedRecommendation>,
    pub industry_recommendations: Vec<IndustryRecommendation>,
    pub transcript: Vec<TranscriptEntry>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn build(bank: &QuestionBank, answers: &AnswerStore, respondent: &Respondent) -> Self {
        let scores = compute_category_scores(answers, bank);
        let total = scores.total();

        Self {
            respondent: respondent.clone(),
            scores,
            total,
            maturity: classify_maturity(total),
            ranked: rank_recommendations(&scores),
            industry_recommendations: respondent
                .industry
                .map(|industry| industry_recommendations(industry).to_vec())
                .unwrap_or_default(),
            transcript: build_transcript(bank, answers),
            generated_at: Utc::now(),
        }
    }

    pub fn industry(&self) -> Option<Industry> {
        self.respondent.industry
    }

    /// The lowest-scoring categories, weakest first.
    pub fn priority_recommendations(&self) -> &[RankedRecommendation] {
        let count = PRIORITY_COUNT.min(self.ranked.len());
        &self.ranked[..count]
    }

    /// Industry advice targeting one of the priority categories.
    pub fn priority_industry_recommendations(&self) -> Vec<IndustryRecommendation> {
        let priorities: Vec<Category> = self
            .priority_recommendations()
            .iter()
            .map(|entry| entry.category)
            .collect();
        self.industry_recommendations
            .iter()
            .filter(|advice| priorities.contains(&advice.category))
            .copied()
            .collect()
    }

    /// Transcript entries in fixed category order.
    pub fn transcript_for(&self, category: Category) -> impl Iterator<Item = &TranscriptEntry> {
        self.transcript
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// `"{category} - {question}: {answer} ({score}/4)"`, one line per question.
    pub fn transcript_text(&self) -> String {
        Category::ordered()
            .into_iter()
            .flat_map(|category| self.transcript_for(category))
            .map(|entry| {
                format!(
                    "{} - {}: {} ({}/4)",
                    entry.category,
                    entry.question,
                    entry.answer_label(),
                    entry.score_value()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn transcript_csv(&self) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["question_number", "category", "question", "answer", "score"])?;
        for category in Category::ordered() {
            for entry in self.transcript_for(category) {
                writer.write_record([
                    entry.question_number.to_string(),
                    entry.category.label().to_string(),
                    entry.question.to_string(),
                    entry.answer_label().to_string(),
                    entry.score_value().to_string(),
                ])?;
            }
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn build_transcript(bank: &QuestionBank, answers: &AnswerStore) -> Vec<TranscriptEntry> {
    bank.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = answers
                .selected(index)
                .and_then(|option| question.options.get(option));
            TranscriptEntry {
                question_number: index + 1,
                category: question.category,
                question: question.text,
                answer: chosen.map(|option| option.label),
                score: chosen.map(|option| option.score),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::domain::{MaturityLevel, Tier};

    fn report_with(option: Option<usize>, industry: Option<Industry>) -> Report {
        let bank = QuestionBank::standard();
        let answers = AnswerStore::from_slots(&bank, vec![option; bank.len()]).expect("answers");
        let respondent = Respondent {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            industry,
            ..Respondent::default()
        };
        Report::build(&bank, &answers, &respondent)
    }

    #[test]
    fn lowest_answers_land_on_developing_boundary() {
        let report = report_with(Some(0), None);
        assert_eq!(report.total, 20);
        assert_eq!(report.maturity.level, MaturityLevel::Developing);
        assert!(report.ranked.iter().all(|entry| entry.tier == Tier::Low));
        assert!(report.industry_recommendations.is_empty());
    }

    #[test]
    fn highest_answers_are_advanced() {
        let report = report_with(Some(3), Some(Industry::Healthcare));
        assert_eq!(report.total, 80);
        assert_eq!(report.maturity.level, MaturityLevel::Advanced);
        assert!(report.ranked.iter().all(|entry| entry.tier == Tier::High));
        assert_eq!(report.industry_recommendations.len(), 3);
    }

    #[test]
    fn priority_recommendations_are_top_three_of_ranking() {
        let report = report_with(Some(1), None);
        let priorities = report.priority_recommendations();
        assert_eq!(priorities.len(), PRIORITY_COUNT);
        assert_eq!(priorities, &report.ranked[..3]);
        assert_eq!(priorities[0].category, Category::Strategy);
    }

    #[test]
    fn transcript_text_lists_every_question() {
        let report = report_with(Some(2), None);
        let text = report.transcript_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(
            lines[0],
            "Strategy - How well-defined is your organization's AI strategy and vision?: Documented strategy (3/4)"
        );
        assert!(lines[19].starts_with("Governance - "));
    }

    #[test]
    fn unanswered_questions_show_in_transcript() {
        let report = report_with(None, None);
        assert!(report
            .transcript
            .iter()
            .all(|entry| entry.answer_label() == "Not answered" && entry.score_value() == 0));
    }

    #[test]
    fn transcript_csv_has_header_and_rows() {
        let report = report_with(Some(0), None);
        let csv = report.transcript_csv().expect("csv renders");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("question_number,category,question,answer,score")
        );
        assert_eq!(lines.count(), 20);
    }
}
