use serde::Serialize;

use super::Report;
use crate::survey::domain::{Category, IndustryRecommendation, MaturityLevel};
use crate::survey::scoring::{RankedRecommendation, CATEGORY_MAX, TOTAL_MAX};

/// Circumference of the r=45 progress ring, rounded as drawn by the front end.
pub const SCORE_RING_CIRCUMFERENCE: f32 = 283.0;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCircle {
    pub total: u8,
    pub max: u8,
    pub percent: f32,
    pub radius: u8,
    pub stroke_dasharray: String,
}

impl ScoreCircle {
    pub fn for_total(total: u8) -> Self {
        let percent = percent_of(total, TOTAL_MAX);
        Self {
            total,
            max: TOTAL_MAX,
            percent,
            radius: 45,
            stroke_dasharray: format!(
                "{:.2} {}",
                percent * SCORE_RING_CIRCUMFERENCE / 100.0,
                SCORE_RING_CIRCUMFERENCE
            ),
        }
    }

    pub fn arc_length(&self) -> f32 {
        self.percent * SCORE_RING_CIRCUMFERENCE / 100.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaturityBadge {
    pub level: MaturityLevel,
    pub label: &'static str,
    pub display_class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBar {
    pub category: Category,
    pub label: &'static str,
    pub score: u8,
    pub max: u8,
    pub percent: f32,
    pub color: &'static str,
}

/// Radar chart configuration: one axis per category on a 0-16 scale.
#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub labels: Vec<&'static str>,
    pub dataset_label: &'static str,
    pub data: Vec<u8>,
    pub scale_min: u8,
    pub scale_max: u8,
    pub step_size: u8,
    pub background_color: &'static str,
    pub border_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryAdviceView {
    pub industry: &'static str,
    pub recommendations: Vec<IndustryRecommendation>,
}

/// Everything the on-page results screen needs.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub respondent_name: String,
    pub score_circle: ScoreCircle,
    pub maturity: MaturityBadge,
    pub categories: Vec<CategoryBar>,
    pub radar: RadarChart,
    pub recommendations: Vec<RankedRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_advice: Option<IndustryAdviceView>,
    pub answered: usize,
    pub question_count: usize,
}

impl Report {
    pub fn results_view(&self) -> ResultsView {
        let categories = self
            .scores
            .iter()
            .map(|(category, score)| CategoryBar {
                category,
                label: category.label(),
                score,
                max: CATEGORY_MAX,
                percent: percent_of(score, CATEGORY_MAX),
                color: category.color(),
            })
            .collect();

        let industry_advice = self.industry().map(|industry| IndustryAdviceView {
            industry: industry.label(),
            recommendations: self.priority_industry_recommendations(),
        });

        ResultsView {
            respondent_name: self.respondent.name.clone(),
            score_circle: ScoreCircle::for_total(self.total),
            maturity: MaturityBadge {
                level: self.maturity.level,
                label: self.maturity.level.label(),
                display_class: self.maturity.display_class,
            },
            categories,
            radar: self.radar_chart(),
            recommendations: self.priority_recommendations().to_vec(),
            industry_advice,
            answered: self
                .transcript
                .iter()
                .filter(|entry| entry.answer.is_some())
                .count(),
            question_count: self.transcript.len(),
        }
    }

    pub fn radar_chart(&self) -> RadarChart {
        RadarChart {
            labels: Category::ordered().iter().map(|c| c.label()).collect(),
            dataset_label: "Your Score",
            data: self.scores.iter().map(|(_, score)| score).collect(),
            scale_min: 0,
            scale_max: CATEGORY_MAX,
            step_size: 4,
            background_color: "rgba(37, 99, 235, 0.2)",
            border_color: "rgba(37, 99, 235, 1)",
        }
    }
}

pub(crate) fn percent_of(value: u8, max: u8) -> f32 {
    if max == 0 {
        return 0.0;
    }
    f32::from(value) / f32::from(max) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::answers::AnswerStore;
    use crate::survey::bank::QuestionBank;
    use crate::survey::domain::Industry;
    use crate::survey::respondent::Respondent;

    fn report(option: usize, industry: Option<Industry>) -> Report {
        let bank = QuestionBank::standard();
        let answers = AnswerStore::from_slots(&bank, vec![Some(option); 20]).expect("answers");
        let respondent = Respondent {
            name: "Riley".to_string(),
            industry,
            ..Respondent::default()
        };
        Report::build(&bank, &answers, &respondent)
    }

    #[test]
    fn score_circle_arc_is_proportional_to_total() {
        let circle = ScoreCircle::for_total(40);
        assert!((circle.percent - 50.0).abs() < f32::EPSILON);
        assert!((circle.arc_length() - 141.5).abs() < 0.01);
        assert_eq!(circle.stroke_dasharray, "141.50 283");
        assert_eq!(ScoreCircle::for_total(80).stroke_dasharray, "283.00 283");
    }

    #[test]
    fn results_view_has_five_axes_and_three_priorities() {
        let view = report(2, None).results_view();
        assert_eq!(view.categories.len(), 5);
        assert_eq!(view.radar.data, vec![12; 5]);
        assert_eq!(view.radar.scale_max, 16);
        assert_eq!(view.recommendations.len(), 3);
        assert!(view.industry_advice.is_none());
        assert_eq!(view.answered, 20);
    }

    #[test]
    fn industry_advice_targets_priority_categories() {
        let view = report(0, Some(Industry::Government)).results_view();
        let advice = view.industry_advice.expect("industry selected");
        assert_eq!(advice.industry, "Government & Public Sector");
        // Ties keep declaration order, so Strategy, People and Process are the priorities.
        assert!(advice
            .recommendations
            .iter()
            .all(|entry| matches!(entry.category, Category::Strategy | Category::People | Category::Process)));
        assert_eq!(advice.recommendations.len(), 1);
    }
}
