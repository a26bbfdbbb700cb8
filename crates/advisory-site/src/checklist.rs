use crate::survey::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ITEMS_PER_SECTION: usize = 4;
pub const CHECKLIST_MAX: u8 = (ITEMS_PER_SECTION * 5) as u8;
/// Sections with fewer ticks than this are flagged for attention.
pub const ATTENTION_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("checklist section '{0}' does not exist")]
    UnknownSection(String),
    #[error("item {item} is out of range for checklist section '{section}'")]
    UnknownItem { section: String, item: usize },
}

/// One block of yes/no statements on the self-assessment checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistSection {
    pub id: &'static str,
    pub number: u8,
    pub category: Category,
    pub title: &'static str,
    pub items: [&'static str; ITEMS_PER_SECTION],
    pub recommendation: &'static str,
}

pub static SECTIONS: [ChecklistSection; 5] = [
    ChecklistSection {
        id: "strategy",
        number: 1,
        category: Category::Strategy,
        title: "Strategy & Ambition",
        items: [
            "Leadership is aligned on why AI matters and which business goals it supports.",
            "We've identified 2–3 priority AI use-cases to start with.",
            "A named sponsor (CEO/GM/COO) is accountable for AI direction.",
            "We've defined success metrics for our first AI initiatives (e.g., time saved, NPS, error reduction).",
        ],
        recommendation: "Run a 90-minute executive alignment session and identify 2–3 use cases.",
    },
    ChecklistSection {
        id: "people",
        number: 2,
        category: Category::People,
        title: "People & Capability",
        items: [
            "Executives and managers understand AI basics and our approach.",
            "Staff know which approved AI tools they can use for work.",
            "We've delivered at least one structured training session (not just ad-hoc experimenting).",
            "Someone owns AI capability (ops/strategy/L&D) and answers day-to-day questions.",
        ],
        recommendation: "Book executive training and a 60-minute staff session.",
    },
    ChecklistSection {
        id: "processes",
        number: 3,
        category: Category::Process,
        title: "Processes & Ways of Working",
        items: [
            "We've identified workflows where AI could save time (service, finance, ops).",
            "We have a process for testing and approving new AI workflows.",
            "Teams have bandwidth to adopt a new, AI-enabled way of working.",
            "We've chosen at least one function to pilot first (services, finance, ops).",
        ],
        recommendation: "Pick one team, one workflow, and run a 2-week pilot.",
    },
    ChecklistSection {
        id: "data",
        number: 4,
        category: Category::Data,
        title: "Data & Tools",
        items: [
            "We have an approved AI tools list (e.g., Copilot, Gemini, ChatGPT Plus).",
            "Business documents and data are organized enough for AI tools to use.",
            "We've defined what data must not be pasted into public AI tools (red/amber/green or R/A/G rules).",
            "Core platforms (Microsoft/Google/CRM) are up to date to support AI features.",
        ],
        recommendation: "List your approved tools and assess and classify your data.",
    },
    ChecklistSection {
        id: "governance",
        number: 5,
        category: Category::Governance,
        title: "Governance & Risk",
        items: [
            "We have a one-page AI policy that's published and easy to find.",
            "Human review is required for material outputs (customer comms, board papers, finance content).",
            "We track AI usage via approved tools or a simple log.",
            "We review tools/policy quarterly and share examples of good AI use.",
        ],
        recommendation: "Draft your one-page policy and establish governance approach.",
    },
];

pub fn section(id: &str) -> Option<(usize, &'static ChecklistSection)> {
    SECTIONS
        .iter()
        .enumerate()
        .find(|(_, section)| section.id == id)
}

/// Reference to a single checklist statement as sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub section: String,
    pub item: usize,
}

/// Set of ticked statements keyed by (section position, item position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistTicks {
    ticked: BTreeSet<(usize, usize)>,
}

impl ChecklistTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tick set from client references. Duplicates collapse into one tick.
    pub fn from_refs<'a, I>(refs: I) -> Result<Self, ChecklistError>
    where
        I: IntoIterator<Item = &'a ItemRef>,
    {
        let mut ticks = Self::new();
        for reference in refs {
            ticks.tick(&reference.section, reference.item)?;
        }
        Ok(ticks)
    }

    pub fn tick(&mut self, section_id: &str, item: usize) -> Result<(), ChecklistError> {
        let key = Self::key(section_id, item)?;
        self.ticked.insert(key);
        Ok(())
    }

    /// Flips one statement and reports whether it is ticked afterwards.
    pub fn toggle(&mut self, section_id: &str, item: usize) -> Result<bool, ChecklistError> {
        let key = Self::key(section_id, item)?;
        if self.ticked.remove(&key) {
            Ok(false)
        } else {
            self.ticked.insert(key);
            Ok(true)
        }
    }

    pub fn is_ticked(&self, section_id: &str, item: usize) -> bool {
        Self::key(section_id, item)
            .map(|key| self.ticked.contains(&key))
            .unwrap_or(false)
    }

    pub fn total(&self) -> u8 {
        self.ticked.len() as u8
    }

    pub fn section_count(&self, position: usize) -> u8 {
        self.ticked
            .iter()
            .filter(|(section, _)| *section == position)
            .count() as u8
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary::from_ticks(self)
    }

    fn key(section_id: &str, item: usize) -> Result<(usize, usize), ChecklistError> {
        let (position, section) = section(section_id)
            .ok_or_else(|| ChecklistError::UnknownSection(section_id.to_string()))?;
        if item >= section.items.len() {
            return Err(ChecklistError::UnknownItem {
                section: section_id.to_string(),
                item,
            });
        }
        Ok((position, item))
    }
}

/// Interpretation of the overall tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultBand {
    ReadyToScale,
    Foundations,
    StartWithStrategy,
}

impl ResultBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::ReadyToScale, Self::Foundations, Self::StartWithStrategy]
    }

    /// Inclusive tick range covered by the band.
    pub const fn range(self) -> (u8, u8) {
        match self {
            Self::ReadyToScale => (15, 20),
            Self::Foundations => (8, 14),
            Self::StartWithStrategy => (0, 7),
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::ReadyToScale => "You're ready to scale",
            Self::Foundations => "You have foundations to build on",
            Self::StartWithStrategy => "Start with strategy",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ReadyToScale => {
                "Standardize 2-3 workflows and train managers to review AI outputs."
            }
            Self::Foundations => "Align leadership, publish your policy, and run staff training.",
            Self::StartWithStrategy => {
                "Begin with executive alignment, pick 2-3 use cases, and set guardrails."
            }
        }
    }

    /// Totals outside every range fall back to the lowest band.
    pub fn for_total(total: u8) -> Self {
        Self::ordered()
            .into_iter()
            .find(|band| {
                let (min, max) = band.range();
                (min..=max).contains(&total)
            })
            .unwrap_or(Self::StartWithStrategy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Empty,
    NeedsAttention,
    OnTrack,
}

impl SectionStatus {
    pub fn for_count(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            count if count < ATTENTION_THRESHOLD => Self::NeedsAttention,
            _ => Self::OnTrack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub id: &'static str,
    pub number: u8,
    pub title: &'static str,
    pub ticked: u8,
    pub of: u8,
    pub status: SectionStatus,
    /// Set for any section below the threshold, including untouched ones.
    pub needs_attention: bool,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandSummary {
    pub band: ResultBand,
    pub min: u8,
    pub max: u8,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<ResultBand> for BandSummary {
    fn from(band: ResultBand) -> Self {
        let (min, max) = band.range();
        Self {
            band,
            min,
            max,
            title: band.title(),
            description: band.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub total: u8,
    pub max: u8,
    pub percent: u8,
    pub band: BandSummary,
    pub sections: Vec<SectionSummary>,
}

impl ChecklistSummary {
    pub fn from_ticks(ticks: &ChecklistTicks) -> Self {
        let total = ticks.total();
        let sections = SECTIONS
            .iter()
            .enumerate()
            .map(|(position, section)| {
                let ticked = ticks.section_count(position);
                SectionSummary {
                    id: section.id,
                    number: section.number,
                    title: section.title,
                    ticked,
                    of: section.items.len() as u8,
                    status: SectionStatus::for_count(ticked),
                    needs_attention: ticked < ATTENTION_THRESHOLD,
                    recommendation: section.recommendation,
                }
            })
            .collect();

        Self {
            total,
            max: CHECKLIST_MAX,
            percent: (u32::from(total) * 100 / u32::from(CHECKLIST_MAX)) as u8,
            band: ResultBand::for_total(total).into(),
            sections,
        }
    }

    pub fn attention_sections(&self) -> impl Iterator<Item = &SectionSummary> {
        self.sections.iter().filter(|section| section.needs_attention)
    }
}
