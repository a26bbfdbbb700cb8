use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::{AnswerError, AnswerStore};
use super::bank::QuestionBank;
use super::respondent::{is_valid_email, FieldErrors, Respondent, RespondentField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Welcome,
    Capture,
    InProgress,
    Results,
}

/// User interactions driving the survey.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurveyEvent {
    Start,
    SubmitRespondent { respondent: Respondent },
    SelectAnswer { option: usize },
    Next,
    Previous,
    RequestEmail {
        #[serde(default)]
        reply_to: Option<String>,
    },
    Restart,
}

/// Side effects requested by a transition, executed outside the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurveyCommand {
    DeliverResults,
    EmailResults { reply_to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyState {
    pub stage: Stage,
    pub answers: AnswerStore,
    pub respondent: Respondent,
    pub current_question: usize,
    pub results_submitted: bool,
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SurveyState,
    pub commands: Vec<SurveyCommand>,
    pub field_errors: Option<FieldErrors>,
    /// Set when a selection names an option the current question does not have.
    pub rejected_answer: Option<AnswerError>,
}

impl Transition {
    fn quiet(state: SurveyState) -> Self {
        Self {
            state,
            commands: Vec::new(),
            field_errors: None,
            rejected_answer: None,
        }
    }

    fn invalid(state: SurveyState, errors: FieldErrors) -> Self {
        Self {
            field_errors: Some(errors),
            ..Self::quiet(state)
        }
    }
}

impl SurveyState {
    pub fn new(bank: &QuestionBank) -> Self {
        Self {
            stage: Stage::Welcome,
            answers: AnswerStore::for_bank(bank),
            respondent: Respondent::default(),
            current_question: 0,
            results_submitted: false,
        }
    }

    /// Applies one event. Events that make no sense for the current stage leave the state untouched.
    pub fn apply(mut self, bank: &QuestionBank, event: SurveyEvent) -> Transition {
        match (self.stage, event) {
            (Stage::Welcome, SurveyEvent::Start) => {
                self.stage = Stage::Capture;
                Transition::quiet(self)
            }
            (Stage::Capture, SurveyEvent::SubmitRespondent { respondent }) => {
                match respondent.validate() {
                    Ok(()) => {
                        self.respondent = respondent.normalized();
                        self.stage = Stage::InProgress;
                        self.current_question = 0;
                        Transition::quiet(self)
                    }
                    Err(errors) => {
                        self.respondent = respondent;
                        Transition::invalid(self, errors)
                    }
                }
            }
            (Stage::InProgress, SurveyEvent::SelectAnswer { option }) => {
                if let Err(err) = self.answers.record(bank, self.current_question, option) {
                    debug!(%err, "rejecting answer selection");
                    return Transition {
                        rejected_answer: Some(err),
                        ..Transition::quiet(self)
                    };
                }
                self.advance(bank)
            }
            (Stage::InProgress, SurveyEvent::Next) => {
                if self.answers.selected(self.current_question).is_none() {
                    return Transition::quiet(self);
                }
                self.advance(bank)
            }
            (Stage::InProgress, SurveyEvent::Previous) => {
                self.current_question = self.current_question.saturating_sub(1);
                Transition::quiet(self)
            }
            (Stage::Results, SurveyEvent::RequestEmail { reply_to }) => {
                let reply_to = reply_to
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| self.respondent.email.clone());
                if !is_valid_email(&reply_to) {
                    let mut errors = FieldErrors::default();
                    errors.insert(RespondentField::Email, "Please enter a valid email address");
                    return Transition::invalid(self, errors);
                }
                Transition {
                    commands: vec![SurveyCommand::EmailResults { reply_to }],
                    ..Transition::quiet(self)
                }
            }
            (Stage::Results, SurveyEvent::Restart) => {
                self.stage = Stage::Welcome;
                self.answers.clear();
                self.respondent = Respondent::default();
                self.current_question = 0;
                self.results_submitted = false;
                Transition::quiet(self)
            }
            (stage, event) => {
                debug!(?stage, ?event, "event ignored for current stage");
                Transition::quiet(self)
            }
        }
    }

    fn advance(mut self, bank: &QuestionBank) -> Transition {
        if self.current_question < bank.last_index() {
            self.current_question += 1;
            return Transition::quiet(self);
        }

        self.stage = Stage::Results;
        let mut commands = Vec::new();
        if !self.results_submitted {
            self.results_submitted = true;
            commands.push(SurveyCommand::DeliverResults);
        }
        Transition {
            commands,
            ..Transition::quiet(self)
        }
    }
}

/// A survey in flight, as held by the HTTP service.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub state: SurveyState,
}

impl SurveySession {
    pub fn new(id: String, bank: &QuestionBank) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            state: SurveyState::new(bank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_respondent() -> Respondent {
        Respondent {
            name: " Alex ".to_string(),
            email: "alex@example.com".to_string(),
            phone: "0412 345 678".to_string(),
            company: "Acme".to_string(),
            industry: None,
        }
    }

    fn in_progress(bank: &QuestionBank) -> SurveyState {
        let state = SurveyState::new(bank).apply(bank, SurveyEvent::Start).state;
        state
            .apply(
                bank,
                SurveyEvent::SubmitRespondent {
                    respondent: valid_respondent(),
                },
            )
            .state
    }

    #[test]
    fn capture_rejects_invalid_details_and_keeps_values() {
        let bank = QuestionBank::standard();
        let state = SurveyState::new(&bank).apply(&bank, SurveyEvent::Start).state;
        let respondent = Respondent {
            name: "Alex".to_string(),
            email: "not-an-email".to_string(),
            ..Respondent::default()
        };

        let transition = state.apply(
            &bank,
            SurveyEvent::SubmitRespondent {
                respondent: respondent.clone(),
            },
        );

        assert_eq!(transition.state.stage, Stage::Capture);
        assert_eq!(transition.state.respondent, respondent);
        let errors = transition.field_errors.expect("field errors");
        assert!(errors.contains(RespondentField::Email));
    }

    #[test]
    fn selecting_commits_and_advances() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank);
        assert_eq!(state.respondent.name, "Alex");

        let state = state.apply(&bank, SurveyEvent::SelectAnswer { option: 2 }).state;
        assert_eq!(state.current_question, 1);
        assert_eq!(state.answers.selected(0), Some(2));
    }

    #[test]
    fn previous_keeps_answer_and_reselect_overwrites() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank)
            .apply(&bank, SurveyEvent::SelectAnswer { option: 0 })
            .state
            .apply(&bank, SurveyEvent::Previous)
            .state;
        assert_eq!(state.current_question, 0);
        assert_eq!(state.answers.selected(0), Some(0));

        let state = state.apply(&bank, SurveyEvent::SelectAnswer { option: 3 }).state;
        assert_eq!(state.answers.selected(0), Some(3));
        assert_eq!(state.answers.answered_count(), 1);
        assert_eq!(state.current_question, 1);
    }

    #[test]
    fn previous_on_first_question_stays_put() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank).apply(&bank, SurveyEvent::Previous).state;
        assert_eq!(state.current_question, 0);
        assert_eq!(state.stage, Stage::InProgress);
    }

    #[test]
    fn next_requires_an_answer() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank).apply(&bank, SurveyEvent::Next).state;
        assert_eq!(state.current_question, 0);
    }

    #[test]
    fn final_answer_enters_results_and_delivers_once() {
        let bank = QuestionBank::standard();
        let mut state = in_progress(&bank);
        let mut delivered = 0;
        for _ in 0..bank.len() {
            let transition = state.apply(&bank, SurveyEvent::SelectAnswer { option: 1 });
            delivered += transition
                .commands
                .iter()
                .filter(|command| **command == SurveyCommand::DeliverResults)
                .count();
            state = transition.state;
        }
        assert_eq!(state.stage, Stage::Results);
        assert_eq!(delivered, 1);

        for event in [SurveyEvent::SelectAnswer { option: 0 }, SurveyEvent::Next] {
            let transition = state.apply(&bank, event);
            assert!(transition.commands.is_empty());
            state = transition.state;
        }
        assert!(state.results_submitted);
    }

    #[test]
    fn email_request_uses_respondent_address_by_default() {
        let bank = QuestionBank::standard();
        let mut state = in_progress(&bank);
        for _ in 0..bank.len() {
            state = state.apply(&bank, SurveyEvent::SelectAnswer { option: 3 }).state;
        }

        let transition = state.apply(&bank, SurveyEvent::RequestEmail { reply_to: None });
        assert_eq!(
            transition.commands,
            vec![SurveyCommand::EmailResults {
                reply_to: "alex@example.com".to_string()
            }]
        );

        let transition = transition.state.apply(
            &bank,
            SurveyEvent::RequestEmail {
                reply_to: Some("nope".to_string()),
            },
        );
        assert!(transition.commands.is_empty());
        assert!(transition.field_errors.is_some());
    }

    #[test]
    fn restart_clears_answers_and_respondent() {
        let bank = QuestionBank::standard();
        let mut state = in_progress(&bank);
        for _ in 0..bank.len() {
            state = state.apply(&bank, SurveyEvent::SelectAnswer { option: 2 }).state;
        }
        let state = state.apply(&bank, SurveyEvent::Restart).state;

        assert_eq!(state.stage, Stage::Welcome);
        assert!(state.answers.slots().iter().all(Option::is_none));
        assert_eq!(state.respondent, Respondent::default());
        assert_eq!(state.current_question, 0);
        assert!(!state.results_submitted);
    }

    #[test]
    fn restart_is_only_offered_on_results() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank)
            .apply(&bank, SurveyEvent::SelectAnswer { option: 1 })
            .state;

        let transition = state.clone().apply(&bank, SurveyEvent::Restart);
        assert_eq!(transition.state, state);
        assert!(transition.commands.is_empty());

        let welcome = SurveyState::new(&bank);
        assert_eq!(
            welcome.clone().apply(&bank, SurveyEvent::Restart).state,
            welcome
        );
    }

    #[test]
    fn out_of_range_selection_is_rejected_without_advancing() {
        let bank = QuestionBank::standard();
        let state = in_progress(&bank);

        let transition = state.clone().apply(&bank, SurveyEvent::SelectAnswer { option: 4 });
        assert_eq!(
            transition.rejected_answer,
            Some(AnswerError::UnknownOption {
                index: 0,
                option: 4
            })
        );
        assert_eq!(transition.state, state);

        let transition = state.apply(&bank, SurveyEvent::SelectAnswer { option: 3 });
        assert!(transition.rejected_answer.is_none());
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: SurveyEvent =
            serde_json::from_str(r#"{"type":"select_answer","option":2}"#).expect("event");
        assert_eq!(event, SurveyEvent::SelectAnswer { option: 2 });
        let event: SurveyEvent = serde_json::from_str(r#"{"type":"request_email"}"#).expect("event");
        assert_eq!(event, SurveyEvent::RequestEmail { reply_to: None });
    }
}
