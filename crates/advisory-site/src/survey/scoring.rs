use serde::ser::{Serialize, Serializer};

use super::answers::AnswerStore;
use super::bank::QuestionBank;
use super::catalogue::recommendation;
use super::domain::{Category, MaturityLevel, Recommendation, Tier};

/// Highest score a single category can reach (4 questions x 4 points).
pub const CATEGORY_MAX: u8 = 16;
/// Highest overall score (5 categories x 16 points).
pub const TOTAL_MAX: u8 = 80;

/// Per-category totals, stored in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryScores {
    scores: [u8; Category::COUNT],
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        self.scores[category.index()]
    }

    pub fn total(&self) -> u8 {
        self.scores.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ordered()
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    fn add(&mut self, category: Category, score: u8) {
        self.scores[category.index()] += score;
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(category, score)| (category.label(), score)))
    }
}

/// Sums the chosen option's score per category; unanswered slots count as zero.
///
/// The answer store must be built for `bank`; a length mismatch is a defect and panics.
pub fn compute_category_scores(answers: &AnswerStore, bank: &QuestionBank) -> CategoryScores {
    assert_eq!(
        answers.len(),
        bank.len(),
        "answer store is not aligned with the question bank"
    );

    let mut scores = CategoryScores::default();
    for (question, slot) in bank.questions().iter().zip(answers.slots()) {
        if let Some(option) = slot {
            scores.add(question.category, question.options[*option].score);
        }
    }
    scores
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Maturity {
    pub level: MaturityLevel,
    pub display_class: &'static str,
}

/// Bands the total on inclusive lower bounds of 75%, 50% and 25% of the maximum.
pub fn classify_maturity(total: u8) -> Maturity {
    let scaled = u32::from(total) * 100;
    let max = u32::from(TOTAL_MAX);
    let level = if scaled >= 75 * max {
        MaturityLevel::Advanced
    } else if scaled >= 50 * max {
        MaturityLevel::Established
    } else if scaled >= 25 * max {
        MaturityLevel::Developing
    } else {
        MaturityLevel::Beginner
    };

    Maturity {
        level,
        display_class: level.display_class(),
    }
}

/// Tier for a category score on the 0-16 scale: >=70% high, >=40% medium.
pub fn tier_for(score: u8) -> Tier {
    let scaled = u32::from(score) * 100;
    let max = u32::from(CATEGORY_MAX);
    if scaled >= 70 * max {
        Tier::High
    } else if scaled >= 40 * max {
        Tier::Medium
    } else {
        Tier::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RankedRecommendation {
    pub category: Category,
    pub score: u8,
    pub tier: Tier,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Orders every category from weakest to strongest; ties keep declaration order.
pub fn rank_recommendations(scores: &CategoryScores) -> Vec<RankedRecommendation> {
    let mut ranked: Vec<RankedRecommendation> = scores
        .iter()
        .map(|(category, score)| {
            let tier = tier_for(score);
            RankedRecommendation {
                category,
                score,
                tier,
                recommendation: recommendation(category, tier),
            }
        })
        .collect();
    ranked.sort_by_key(|entry| entry.score);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_answers(bank: &QuestionBank, option: Option<usize>) -> AnswerStore {
        AnswerStore::from_slots(bank, vec![option; bank.len()]).expect("aligned answers")
    }

    #[test]
    fn unanswered_store_scores_zero_everywhere() {
        let bank = QuestionBank::standard();
        let scores = compute_category_scores(&uniform_answers(&bank, None), &bank);
        assert!(scores.iter().all(|(_, score)| score == 0));
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn partial_answers_only_count_answered_slots() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerStore::for_bank(&bank);
        answers.record(&bank, 0, 3).expect("strategy answer");
        answers.record(&bank, 19, 1).expect("governance answer");

        let scores = compute_category_scores(&answers, &bank);
        assert_eq!(scores.get(Category::Strategy), 4);
        assert_eq!(scores.get(Category::Governance), 2);
        assert_eq!(scores.get(Category::People), 0);
        assert_eq!(scores.total(), 6);
    }

    #[test]
    fn maturity_bands_use_inclusive_lower_bounds() {
        assert_eq!(classify_maturity(0).level, MaturityLevel::Beginner);
        assert_eq!(classify_maturity(19).level, MaturityLevel::Beginner);
        assert_eq!(classify_maturity(20).level, MaturityLevel::Developing);
        assert_eq!(classify_maturity(39).level, MaturityLevel::Developing);
        assert_eq!(classify_maturity(40).level, MaturityLevel::Established);
        assert_eq!(classify_maturity(59).level, MaturityLevel::Established);
        assert_eq!(classify_maturity(60).level, MaturityLevel::Advanced);
        assert_eq!(classify_maturity(80).level, MaturityLevel::Advanced);
    }

    #[test]
    fn maturity_never_decreases_as_total_grows() {
        let levels: Vec<MaturityLevel> = (0..=TOTAL_MAX)
            .map(|total| classify_maturity(total).level)
            .collect();
        assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn tiers_follow_seventy_and_forty_percent_thresholds() {
        assert_eq!(tier_for(0), Tier::Low);
        assert_eq!(tier_for(6), Tier::Low);
        assert_eq!(tier_for(7), Tier::Medium);
        assert_eq!(tier_for(11), Tier::Medium);
        assert_eq!(tier_for(12), Tier::High);
        assert_eq!(tier_for(16), Tier::High);
    }

    #[test]
    fn ranking_is_ascending_with_declaration_order_ties() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerStore::for_bank(&bank);
        // People and Data stay at zero; Strategy gets 4, Process 8, Governance 4.
        answers.record(&bank, 0, 3).expect("strategy");
        answers.record(&bank, 8, 3).expect("process");
        answers.record(&bank, 9, 3).expect("process");
        answers.record(&bank, 16, 3).expect("governance");

        let ranked = rank_recommendations(&compute_category_scores(&answers, &bank));
        let order: Vec<Category> = ranked.iter().map(|entry| entry.category).collect();
        assert_eq!(
            order,
            vec![
                Category::People,
                Category::Data,
                Category::Strategy,
                Category::Governance,
                Category::Process,
            ]
        );
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[4].tier, Tier::Medium);
    }
}
