use std::sync::Mutex;

use advisory_site::survey::{
    compute_category_scores, dispatch, rank_recommendations, render_printable_html, AnswerStore,
    Category, DeliveryError, Industry, MaturityLevel, QuestionBank, RelayPayload, Report,
    ReportDelivery, Respondent, Stage, SurveyCommand, SurveyEvent, SurveyState, Tier,
};

#[derive(Default)]
struct CapturingDelivery {
    payloads: Mutex<Vec<RelayPayload>>,
}

impl ReportDelivery for CapturingDelivery {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), DeliveryError> {
        self.payloads
            .lock()
            .expect("delivery mutex")
            .push(payload.clone());
        Ok(())
    }
}

fn respondent() -> Respondent {
    Respondent {
        name: "Taylor Nguyen".to_string(),
        email: "taylor@example.com.au".to_string(),
        phone: "+61 2 9876 5432".to_string(),
        company: "Southbank Advisory".to_string(),
        industry: Some(Industry::FinancialServices),
    }
}

/// Drives the reducer the way the front end would and runs emitted commands.
fn complete_survey(
    bank: &QuestionBank,
    option: usize,
    delivery: &dyn ReportDelivery,
) -> SurveyState {
    let mut state = SurveyState::new(bank)
        .apply(bank, SurveyEvent::Start)
        .state
        .apply(
            bank,
            SurveyEvent::SubmitRespondent {
                respondent: respondent(),
            },
        )
        .state;
    assert_eq!(state.stage, Stage::InProgress);

    for _ in 0..bank.len() {
        let transition = state.apply(bank, SurveyEvent::SelectAnswer { option });
        state = transition.state;
        for command in &transition.commands {
            let report = Report::build(bank, &state.answers, &state.respondent);
            dispatch(command, &report, delivery);
        }
    }
    state
}

#[test]
fn lowest_answers_score_twenty_and_land_on_developing() {
    let bank = QuestionBank::standard();
    let delivery = CapturingDelivery::default();
    let state = complete_survey(&bank, 0, &delivery);
    assert_eq!(state.stage, Stage::Results);

    let report = Report::build(&bank, &state.answers, &state.respondent);
    assert_eq!(report.total, 20);
    assert_eq!(report.maturity.level, MaturityLevel::Developing);
    for (category, score) in report.scores.iter() {
        assert_eq!(score, 4, "{category} should score four");
    }
    assert!(report.ranked.iter().all(|entry| entry.tier == Tier::Low));
}

#[test]
fn highest_answers_score_eighty_and_are_advanced() {
    let bank = QuestionBank::standard();
    let delivery = CapturingDelivery::default();
    let state = complete_survey(&bank, 3, &delivery);

    let report = Report::build(&bank, &state.answers, &state.respondent);
    assert_eq!(report.total, 80);
    assert_eq!(report.maturity.level, MaturityLevel::Advanced);
    assert!(report.ranked.iter().all(|entry| entry.tier == Tier::High));
}

#[test]
fn results_are_delivered_once_per_results_entry() {
    let bank = QuestionBank::standard();
    let delivery = CapturingDelivery::default();
    let state = complete_survey(&bank, 2, &delivery);

    // Re-rendering the results view is pure and sends nothing.
    let report = Report::build(&bank, &state.answers, &state.respondent);
    for _ in 0..3 {
        let _ = report.results_view();
        let _ = render_printable_html(&report);
    }
    let ignored = state.clone().apply(&bank, SurveyEvent::Next);
    assert!(ignored.commands.is_empty());

    let payloads = delivery.payloads.lock().expect("delivery mutex");
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].get("total_score"), Some("60/80"));
    assert_eq!(payloads[0].get("maturity_level"), Some("Advanced"));
    assert_eq!(payloads[0].get("industry"), Some("Financial Services"));
}

#[test]
fn email_request_is_separate_from_results_submission() {
    let bank = QuestionBank::standard();
    let delivery = CapturingDelivery::default();
    let state = complete_survey(&bank, 1, &delivery);

    let transition = state.apply(&bank, SurveyEvent::RequestEmail { reply_to: None });
    assert_eq!(
        transition.commands,
        vec![SurveyCommand::EmailResults {
            reply_to: "taylor@example.com.au".to_string()
        }]
    );
    let report = Report::build(&bank, &transition.state.answers, &transition.state.respondent);
    dispatch(&transition.commands[0], &report, &delivery);

    let payloads = delivery.payloads.lock().expect("delivery mutex");
    assert_eq!(payloads.len(), 2);
    assert!(payloads[1].get("_replyto").is_some());
    assert!(payloads[1].get("recommendations").is_some());
}

#[test]
fn restart_returns_to_welcome_with_empty_store() {
    let bank = QuestionBank::standard();
    let delivery = CapturingDelivery::default();
    let state = complete_survey(&bank, 2, &delivery)
        .apply(&bank, SurveyEvent::Restart)
        .state;

    assert_eq!(state.stage, Stage::Welcome);
    assert_eq!(state.answers.answered_count(), 0);
    assert_eq!(state.respondent, Respondent::default());

    // A second pass delivers again because the flag was reset.
    let _ = complete_survey(&bank, 0, &delivery);
    assert_eq!(delivery.payloads.lock().expect("delivery mutex").len(), 2);
}

#[test]
fn totals_match_category_sums_for_mixed_answers() {
    let bank = QuestionBank::standard();
    let patterns: [[Option<usize>; 4]; 4] = [
        [None, Some(0), Some(1), Some(3)],
        [Some(3), None, None, Some(2)],
        [Some(1), Some(1), Some(2), None],
        [None, None, None, None],
    ];

    for pattern in patterns {
        let slots: Vec<Option<usize>> = pattern.iter().copied().cycle().take(bank.len()).collect();
        let answers = AnswerStore::from_slots(&bank, slots).expect("aligned");
        let scores = compute_category_scores(&answers, &bank);
        let sum: u8 = Category::ordered().iter().map(|c| scores.get(*c)).sum();
        assert_eq!(scores.total(), sum);
        assert!(scores.total() <= 80);

        let ranked = rank_recommendations(&scores);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|pair| pair[0].score <= pair[1].score));
    }
}

#[test]
fn complete_answer_sets_keep_categories_between_four_and_sixteen() {
    let bank = QuestionBank::standard();
    let slots: Vec<Option<usize>> = (0..bank.len()).map(|index| Some(index % 4)).collect();
    let answers = AnswerStore::from_slots(&bank, slots).expect("aligned");
    let scores = compute_category_scores(&answers, &bank);
    assert!(scores.iter().all(|(_, score)| (4..=16).contains(&score)));
}
