use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Readiness dimension used to group questions and scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Strategy,
    People,
    Process,
    Data,
    Governance,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Strategy,
            Self::People,
            Self::Process,
            Self::Data,
            Self::Governance,
        ]
    }

    /// Position in declaration order; used to index per-category arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::Strategy => 0,
            Self::People => 1,
            Self::Process => 2,
            Self::Data => 3,
            Self::Governance => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strategy => "Strategy",
            Self::People => "People",
            Self::Process => "Process",
            Self::Data => "Data",
            Self::Governance => "Governance",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Strategy => "#2563eb",
            Self::People => "#10b981",
            Self::Process => "#f59e0b",
            Self::Data => "#8b5cf6",
            Self::Governance => "#ec4899",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Overall readiness band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Beginner,
    Developing,
    Established,
    Advanced,
}

impl MaturityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Advanced => "Advanced",
        }
    }

    pub const fn display_class(self) -> &'static str {
        match self {
            Self::Beginner => "bg-red-100 text-red-700",
            Self::Developing => "bg-amber-100 text-amber-700",
            Self::Established => "bg-cyan-100 text-cyan-700",
            Self::Advanced => "bg-emerald-100 text-emerald-700",
        }
    }

    /// Fixed paragraph shown in the printable report.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Beginner => "Your organisation is at the start of its AI journey. Foundational work on strategy, skills and data will unlock the first practical wins and build confidence for larger initiatives.",
            Self::Developing => "Your organisation has begun exploring AI and some building blocks are in place. Closing the gaps in your lowest-scoring areas will turn isolated experiments into repeatable value.",
            Self::Established => "Your organisation has solid AI foundations and is delivering value in several areas. The focus now is scaling what works, standardising delivery and strengthening governance.",
            Self::Advanced => "Your organisation is operating at a high level of AI maturity. Continued investment in differentiating capabilities and responsible AI leadership will sustain your competitive advantage.",
        }
    }

    pub const fn badge_colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Beginner => ("#fee2e2", "#b91c1c"),
            Self::Developing => ("#fef3c7", "#b45309"),
            Self::Established => ("#cffafe", "#0e7490"),
            Self::Advanced => ("#d1fae5", "#047857"),
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Industries offered on the respondent form; `Other` is always last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    ProfessionalServices,
    FinancialServices,
    Healthcare,
    RetailEcommerce,
    Manufacturing,
    ConstructionProperty,
    Education,
    Government,
    Agriculture,
    HospitalityTourism,
    Technology,
    Other,
}

impl Industry {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::ProfessionalServices,
            Self::FinancialServices,
            Self::Healthcare,
            Self::RetailEcommerce,
            Self::Manufacturing,
            Self::ConstructionProperty,
            Self::Education,
            Self::Government,
            Self::Agriculture,
            Self::HospitalityTourism,
            Self::Technology,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfessionalServices => "Professional Services",
            Self::FinancialServices => "Financial Services",
            Self::Healthcare => "Healthcare",
            Self::RetailEcommerce => "Retail & E-commerce",
            Self::Manufacturing => "Manufacturing",
            Self::ConstructionProperty => "Construction & Property",
            Self::Education => "Education",
            Self::Government => "Government & Public Sector",
            Self::Agriculture => "Agriculture",
            Self::HospitalityTourism => "Hospitality & Tourism",
            Self::Technology => "Technology",
            Self::Other => "Other",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::ProfessionalServices => "professional_services",
            Self::FinancialServices => "financial_services",
            Self::Healthcare => "healthcare",
            Self::RetailEcommerce => "retail_ecommerce",
            Self::Manufacturing => "manufacturing",
            Self::ConstructionProperty => "construction_property",
            Self::Education => "education",
            Self::Government => "government",
            Self::Agriculture => "agriculture",
            Self::HospitalityTourism => "hospitality_tourism",
            Self::Technology => "technology",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown industry '{0}'")]
pub struct UnknownIndustry(pub String);

impl FromStr for Industry {
    type Err = UnknownIndustry;

    /// Accepts either the slug or the display label, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ordered()
            .into_iter()
            .find(|industry| {
                industry.slug().eq_ignore_ascii_case(needle)
                    || industry.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownIndustry(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub description: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub category: Category,
    pub text: &'static str,
    pub options: [AnswerOption; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
}

/// Domain-specific advice tagged with the dimension it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryRecommendation {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_index_follows_declaration_order() {
        for (position, category) in Category::ordered().into_iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn industries_end_with_other() {
        let industries = Industry::ordered();
        assert_eq!(industries.len(), 12);
        assert_eq!(industries[11], Industry::Other);
    }

    #[test]
    fn industry_parses_from_slug_or_label() {
        assert_eq!("healthcare".parse::<Industry>(), Ok(Industry::Healthcare));
        assert_eq!(
            "Retail & E-commerce".parse::<Industry>(),
            Ok(Industry::RetailEcommerce)
        );
        assert!("space mining".parse::<Industry>().is_err());
    }
}
