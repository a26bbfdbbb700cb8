use super::domain::{AnswerOption, Category, Question};

pub const QUESTIONS_PER_CATEGORY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("category {category} has {found} questions (expected 4)")]
    CategorySize { category: Category, found: usize },
    #[error("question {index} options must have strictly increasing scores between 1 and 4")]
    OptionScores { index: usize },
}

/// Fixed, ordered questionnaire driving the survey.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    /// Builds a bank from custom questions, enforcing the shape the scoring engine relies on.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        for category in Category::ordered() {
            let found = questions
                .iter()
                .filter(|question| question.category == category)
                .count();
            if found != QUESTIONS_PER_CATEGORY {
                return Err(BankError::CategorySize { category, found });
            }
        }

        for (index, question) in questions.iter().enumerate() {
            let ascending = question
                .options
                .windows(2)
                .all(|pair| pair[0].score < pair[1].score);
            let bounded = question
                .options
                .iter()
                .all(|option| (1..=4).contains(&option.score));
            if !ascending || !bounded {
                return Err(BankError::OptionScores { index });
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Questions for one category, paired with their position in the bank.
    pub fn questions_for(&self, category: Category) -> Vec<(usize, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| question.category == category)
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

const fn option(label: &'static str, description: &'static str, score: u8) -> AnswerOption {
    AnswerOption {
        label,
        description,
        score,
    }
}

const fn question(category: Category, text: &'static str, options: [AnswerOption; 4]) -> Question {
    Question {
        category,
        text,
        options,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            Category::Strategy,
            "How well-defined is your organization's AI strategy and vision?",
            [
                option("No AI strategy", "We haven't developed any formal AI strategy or vision", 1),
                option("Informal discussions", "Some conversations about AI, but no documented strategy", 2),
                option("Documented strategy", "We have a written AI strategy aligned with some business goals", 3),
                option("Comprehensive roadmap", "Clear AI vision with detailed roadmap tied to business objectives", 4),
            ],
        ),
        question(
            Category::Strategy,
            "How does leadership support AI initiatives in your organization?",
            [
                option("No executive support", "Leadership is not engaged or aware of AI potential", 1),
                option("Passive interest", "Some curiosity from leadership but no active sponsorship", 2),
                option("Active sponsorship", "One or more executives champion AI with allocated resources", 3),
                option("Strategic priority", "AI is a board-level priority with dedicated budget and governance", 4),
            ],
        ),
        question(
            Category::Strategy,
            "How do you identify and prioritize AI use cases?",
            [
                option("Ad-hoc exploration", "No systematic approach to identifying AI opportunities", 1),
                option("Reactive approach", "We explore AI when specific problems arise", 2),
                option("Structured evaluation", "We have criteria to evaluate and prioritize AI use cases", 3),
                option("Value-driven portfolio", "Systematic process linking use cases to measurable business value", 4),
            ],
        ),
        question(
            Category::Strategy,
            "How do you measure the ROI and impact of AI initiatives?",
            [
                option("No measurement", "We don't track AI initiative outcomes", 1),
                option("Basic tracking", "We track some outputs but lack comprehensive metrics", 2),
                option("KPI framework", "Defined KPIs for AI projects with regular reporting", 3),
                option("Continuous optimization", "Real-time dashboards with feedback loops for improvement", 4),
            ],
        ),
        question(
            Category::People,
            "What is the current level of AI literacy across your organization?",
            [
                option("Very limited", "Most employees have little understanding of AI", 1),
                option("Basic awareness", "General awareness exists but skills are concentrated in IT", 2),
                option("Growing competency", "Multiple departments have AI-literate team members", 3),
                option("Widespread fluency", "AI literacy is embedded across all levels and functions", 4),
            ],
        ),
        question(
            Category::People,
            "How equipped is your workforce to work alongside AI tools?",
            [
                option("Not equipped", "Employees lack training and tools to use AI effectively", 1),
                option("Early adoption", "Some teams experimenting with AI tools informally", 2),
                option("Structured enablement", "Training programs and approved tools available", 3),
                option("AI-augmented workforce", "AI tools integrated into workflows with ongoing upskilling", 4),
            ],
        ),
        question(
            Category::People,
            "How does your organization address AI talent needs?",
            [
                option("No plan", "We haven't addressed AI talent requirements", 1),
                option("Reactive hiring", "Hiring AI talent as specific needs arise", 2),
                option("Talent strategy", "Proactive recruiting and internal development programs", 3),
                option("Talent ecosystem", "Comprehensive approach including partnerships, academies, retention", 4),
            ],
        ),
        question(
            Category::People,
            "How is change management handled for AI adoption?",
            [
                option("No change management", "AI changes implemented without structured support", 1),
                option("Basic communication", "Some announcements but limited change support", 2),
                option("Formal program", "Change management processes for major AI initiatives", 3),
                option("Culture of adaptation", "Embedded change capability with continuous learning mindset", 4),
            ],
        ),
        question(
            Category::Process,
            "How mature are your processes for developing and deploying AI solutions?",
            [
                option("No defined process", "AI development is ad-hoc without standard practices", 1),
                option("Basic workflows", "Some documented steps but inconsistent application", 2),
                option("Standardized methodology", "Defined AI development lifecycle with quality gates", 3),
                option("MLOps excellence", "Automated pipelines with CI/CD, monitoring, and retraining", 4),
            ],
        ),
        question(
            Category::Process,
            "How well integrated is AI into your core business processes?",
            [
                option("Not integrated", "AI exists as isolated experiments or proofs of concept", 1),
                option("Limited integration", "AI supports a few specific workflows", 2),
                option("Meaningful integration", "AI embedded in multiple key business processes", 3),
                option("Core to operations", "AI is fundamental to how we operate and compete", 4),
            ],
        ),
        question(
            Category::Process,
            "How do you handle AI model maintenance and updates?",
            [
                option("No maintenance plan", "Models deployed without ongoing maintenance consideration", 1),
                option("Reactive fixes", "We address issues when they become apparent", 2),
                option("Scheduled reviews", "Regular model performance reviews and planned updates", 3),
                option("Continuous monitoring", "Automated drift detection with proactive retraining", 4),
            ],
        ),
        question(
            Category::Process,
            "How do you scale successful AI pilots to production?",
            [
                option("Struggle to scale", "Pilots rarely make it to production deployment", 1),
                option("Case-by-case", "Some pilots scale but without repeatable process", 2),
                option("Scaling playbook", "Documented approach for transitioning pilots to production", 3),
                option("Industrialized scaling", "Platform and processes enable rapid, reliable scaling", 4),
            ],
        ),
        question(
            Category::Data,
            "How would you rate the quality and accessibility of your data?",
            [
                option("Poor quality/siloed", "Data is scattered, inconsistent, and hard to access", 1),
                option("Improving", "Some data cleaning efforts but significant gaps remain", 2),
                option("Good foundation", "Clean, documented data with reasonable accessibility", 3),
                option("Data excellence", "High-quality, well-governed data readily available for AI", 4),
            ],
        ),
        question(
            Category::Data,
            "How mature is your data infrastructure for AI workloads?",
            [
                option("Legacy systems", "Outdated infrastructure not suited for AI workloads", 1),
                option("Basic capability", "Some modern tools but limited AI-specific infrastructure", 2),
                option("AI-ready platform", "Modern data platform supporting AI development needs", 3),
                option("Advanced architecture", "Scalable, cloud-native infrastructure optimized for AI/ML", 4),
            ],
        ),
        question(
            Category::Data,
            "How do you manage data governance and data privacy?",
            [
                option("Minimal governance", "Limited policies or controls around data usage", 1),
                option("Basic policies", "Some data policies but inconsistent enforcement", 2),
                option("Formal governance", "Comprehensive data governance with privacy controls", 3),
                option("Privacy by design", "Advanced governance with automated compliance and privacy", 4),
            ],
        ),
        question(
            Category::Data,
            "How prepared is your data for AI training and deployment?",
            [
                option("Not prepared", "Data needs significant work before AI use", 1),
                option("Partially ready", "Some datasets ready but labeling/preparation gaps exist", 2),
                option("Mostly ready", "Well-curated datasets available for key use cases", 3),
                option("Fully optimized", "Feature stores, data pipelines, and versioning in place", 4),
            ],
        ),
        question(
            Category::Governance,
            "How does your organization approach AI ethics and responsible AI?",
            [
                option("Not addressed", "AI ethics hasn't been formally considered", 1),
                option("Awareness stage", "Discussions happening but no formal framework", 2),
                option("Guidelines in place", "Documented AI ethics principles and review processes", 3),
                option("Embedded in culture", "Responsible AI is core to strategy with governance structures", 4),
            ],
        ),
        question(
            Category::Governance,
            "How do you manage AI-related risks?",
            [
                option("No risk framework", "AI risks not systematically identified or managed", 1),
                option("Basic awareness", "Some risks recognized but no formal management", 2),
                option("Risk framework", "AI risks assessed and managed within enterprise risk", 3),
                option("Proactive management", "Comprehensive AI risk management with continuous monitoring", 4),
            ],
        ),
        question(
            Category::Governance,
            "How compliant are your AI practices with relevant regulations?",
            [
                option("Unknown status", "Haven't assessed AI regulatory requirements", 1),
                option("Initial assessment", "Aware of regulations but compliance gaps exist", 2),
                option("Compliance program", "Active program to meet AI regulatory requirements", 3),
                option("Ahead of regulations", "Proactively exceeding requirements with audit readiness", 4),
            ],
        ),
        question(
            Category::Governance,
            "How transparent and explainable are your AI systems?",
            [
                option("Black box", "AI decisions cannot be explained or audited", 1),
                option("Limited visibility", "Some documentation but explainability is limited", 2),
                option("Explainable outputs", "Key AI systems have explainability mechanisms", 3),
                option("Full transparency", "Comprehensive explainability with stakeholder-appropriate views", 4),
            ],
        ),    ]
}
