//! AI readiness survey: question bank, scoring, state machine and reporting.

pub mod answers;
pub mod bank;
pub mod catalogue;
pub mod delivery;
pub mod domain;
pub mod machine;
pub mod report;
pub mod respondent;
pub mod scoring;

pub use answers::{AnswerError, AnswerStore};
pub use bank::{BankError, QuestionBank};
pub use delivery::{dispatch, DeliveryError, DisabledDelivery, FormRelayClient, ReportDelivery};
pub use domain::{Category, Industry, MaturityLevel, Question, Tier};
pub use machine::{Stage, SurveyCommand, SurveyEvent, SurveySession, SurveyState, Transition};
pub use report::{render_printable_html, RelayPayload, Report, ReportError};
pub use respondent::{FieldErrors, Respondent, RespondentField};
pub use scoring::{
    classify_maturity, compute_category_scores, rank_recommendations, tier_for, CategoryScores,
};
