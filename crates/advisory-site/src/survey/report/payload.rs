use std::collections::BTreeMap;

use serde::Serialize;

use super::Report;
use crate::survey::scoring::CATEGORY_MAX;

/// Flat key/value body posted to the external form relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelayPayload(BTreeMap<String, String>);

impl RelayPayload {
    /// Full results submission, sent once when the results screen is reached.
    pub fn results(report: &Report) -> Self {
        let mut payload = Self::with_respondent(report);
        payload.insert(
            "_subject",
            format!(
                "AI Readiness Survey Results - {}",
                display_name(report)
            ),
        );
        for (category, score) in report.scores.iter() {
            payload.insert(
                &format!("{}_score", category.label().to_ascii_lowercase()),
                format!("{score}/{CATEGORY_MAX}"),
            );
        }
        payload.insert("total_score", format!("{}/80", report.total));
        payload.insert("maturity_level", report.maturity.level.label().to_string());
        payload.insert("answers", report.transcript_text());
        payload
    }

    /// Explicit "email my results" request, adding a reply-to and a recommendations summary.
    pub fn email_request(report: &Report, reply_to: &str) -> Self {
        let mut payload = Self::with_respondent(report);
        payload.insert(
            "_subject",
            format!("AI Readiness Report Request - {}", display_name(report)),
        );
        payload.insert("_replyto", reply_to.to_string());
        payload.insert("total_score", format!("{}/80", report.total));
        payload.insert("maturity_level", report.maturity.level.label().to_string());
        payload.insert("recommendations", recommendations_summary(report));
        payload
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("_subject")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn with_respondent(report: &Report) -> Self {
        let respondent = &report.respondent;
        let mut payload = Self::default();
        payload.insert("name", respondent.name.clone());
        payload.insert("email", respondent.email.clone());
        payload.insert("phone", respondent.phone.clone());
        payload.insert("company", respondent.company.clone());
        payload.insert(
            "industry",
            respondent
                .industry
                .map(|industry| industry.label().to_string())
                .unwrap_or_default(),
        );
        payload
    }

    fn insert(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }
}

fn display_name(report: &Report) -> String {
    let respondent = &report.respondent;
    match (respondent.name.trim(), respondent.company.trim()) {
        ("", "") => "Anonymous".to_string(),
        (name, "") => name.to_string(),
        ("", company) => company.to_string(),
        (name, company) => format!("{name} ({company})"),
    }
}

fn recommendations_summary(report: &Report) -> String {
    let mut lines: Vec<String> = report
        .priority_recommendations()
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            format!(
                "{}. {} ({}: {}/{})\n{}",
                position + 1,
                entry.recommendation.title,
                entry.category,
                entry.score,
                CATEGORY_MAX,
                entry.recommendation.description
            )
        })
        .collect();

    if let Some(industry) = report.industry() {
        for advice in &report.industry_recommendations {
            lines.push(format!(
                "[{}] {}\n{}",
                industry.label(),
                advice.title,
                advice.description
            ));
        }
    }

    lines.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::answers::AnswerStore;
    use crate::survey::bank::QuestionBank;
    use crate::survey::domain::Industry;
    use crate::survey::respondent::Respondent;

    fn report() -> Report {
        let bank = QuestionBank::standard();
        let answers = AnswerStore::from_slots(&bank, vec![Some(3); 20]).expect("answers");
        let respondent = Respondent {
            name: "Morgan".to_string(),
            email: "morgan@example.com".to_string(),
            phone: "0412345678".to_string(),
            company: "Bayside Legal".to_string(),
            industry: Some(Industry::ProfessionalServices),
        };
        Report::build(&bank, &answers, &respondent)
    }

    #[test]
    fn results_payload_carries_scores_and_transcript() {
        let payload = RelayPayload::results(&report());
        assert_eq!(
            payload.subject(),
            Some("AI Readiness Survey Results - Morgan (Bayside Legal)")
        );
        assert_eq!(payload.get("strategy_score"), Some("16/16"));
        assert_eq!(payload.get("governance_score"), Some("16/16"));
        assert_eq!(payload.get("total_score"), Some("80/80"));
        assert_eq!(payload.get("maturity_level"), Some("Advanced"));
        assert_eq!(payload.get("industry"), Some("Professional Services"));
        let answers = payload.get("answers").expect("transcript");
        assert_eq!(answers.lines().count(), 20);
        assert!(answers.lines().all(|line| line.ends_with("(4/4)")));
        assert!(payload.get("_replyto").is_none());
    }

    #[test]
    fn email_payload_adds_reply_to_and_summary() {
        let payload = RelayPayload::email_request(&report(), "morgan@example.com");
        assert_eq!(payload.get("_replyto"), Some("morgan@example.com"));
        let summary = payload.get("recommendations").expect("summary");
        assert!(summary.starts_with("1. Optimize for Competitive Advantage (Strategy: 16/16)"));
        assert!(summary.contains("[Professional Services]"));
        assert!(payload.get("answers").is_none());
    }

    #[test]
    fn payload_serializes_as_flat_object() {
        let value = serde_json::to_value(RelayPayload::results(&report())).expect("json");
        let object = value.as_object().expect("flat object");
        assert!(object.values().all(serde_json::Value::is_string));
        assert!(object.contains_key("_subject"));
    }
}
