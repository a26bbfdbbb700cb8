use super::domain::{Category, Industry, IndustryRecommendation, Recommendation, Tier};

/// Generic advice for a category at a given tier. Every combination is covered by the match.
pub const fn recommendation(category: Category, tier: Tier) -> Recommendation {
    match (category, tier) {
        (Category::Strategy, Tier::Low) => Recommendation {
            title: "Develop Your AI Strategy Foundation",
            description: "Start by defining clear AI objectives tied to business outcomes. Identify 2-3 high-impact use cases that can demonstrate value quickly. Secure executive sponsorship and establish a cross-functional AI steering committee to guide priorities.",
        },
        (Category::Strategy, Tier::Medium) => Recommendation {
            title: "Strengthen Strategic Alignment",
            description: "Refine your AI roadmap with specific milestones and success metrics. Create a business case framework for AI investments that quantifies expected ROI. Consider developing an AI Center of Excellence to coordinate efforts.",
        },
        (Category::Strategy, Tier::High) => Recommendation {
            title: "Optimize for Competitive Advantage",
            description: "Focus on differentiating AI capabilities that create sustainable competitive advantage. Explore advanced applications like AI-driven business model innovation. Share learnings and establish thought leadership in your industry.",
        },
        (Category::People, Tier::Low) => Recommendation {
            title: "Build AI Literacy and Awareness",
            description: "Launch an organization-wide AI awareness program covering basics and potential applications. Identify AI champions in each department. Start with accessible AI tools that provide quick wins and build confidence.",
        },
        (Category::People, Tier::Medium) => Recommendation {
            title: "Accelerate Skill Development",
            description: "Implement role-specific AI training programs. Create clear career paths for AI roles. Establish communities of practice and encourage experimentation. Consider partnerships with universities or training providers.",
        },
        (Category::People, Tier::High) => Recommendation {
            title: "Cultivate an AI-First Culture",
            description: "Embed AI thinking into all roles and decisions. Create innovation programs that encourage AI experimentation. Develop internal AI certification programs and recognize AI achievements across the organization.",
        },
        (Category::Process, Tier::Low) => Recommendation {
            title: "Establish AI Development Foundations",
            description: "Document basic AI/ML workflows and quality standards. Start with well-defined pilot projects to build capabilities. Create templates for AI project planning, risk assessment, and success criteria.",
        },
        (Category::Process, Tier::Medium) => Recommendation {
            title: "Standardize and Scale Operations",
            description: "Implement MLOps practices for reliable model deployment. Create reusable components and accelerators. Establish model monitoring and alerting. Build a portfolio view of AI initiatives across the organization.",
        },
        (Category::Process, Tier::High) => Recommendation {
            title: "Achieve Operational Excellence",
            description: "Implement advanced MLOps with automated retraining and deployment. Create self-service platforms for business users. Focus on reducing time-to-value for new AI initiatives through platform investments.",
        },
        (Category::Data, Tier::Low) => Recommendation {
            title: "Improve Data Fundamentals",
            description: "Conduct a data audit to understand current state and gaps. Prioritize data quality improvements for key AI use cases. Establish basic data governance and create a data catalog to improve discoverability.",
        },
        (Category::Data, Tier::Medium) => Recommendation {
            title: "Modernize Data Infrastructure",
            description: "Invest in scalable, AI-ready data platforms. Implement data quality monitoring and automated validation. Create feature stores and data pipelines to accelerate AI development. Strengthen data privacy controls.",
        },
        (Category::Data, Tier::High) => Recommendation {
            title: "Maximize Data Value",
            description: "Implement advanced data architectures like data mesh or data fabric. Create real-time data pipelines for operational AI. Explore synthetic data generation and external data partnerships to enhance AI capabilities.",
        },
        (Category::Governance, Tier::Low) => Recommendation {
            title: "Establish Responsible AI Foundations",
            description: "Develop AI ethics principles aligned with company values. Create basic risk assessment processes for AI projects. Start tracking AI regulatory requirements relevant to your industry and geography.",
        },
        (Category::Governance, Tier::Medium) => Recommendation {
            title: "Formalize AI Governance",
            description: "Implement an AI governance framework with clear roles and responsibilities. Establish model documentation standards and review processes. Create audit trails for AI decisions and conduct regular ethics reviews.",
        },
        (Category::Governance, Tier::High) => Recommendation {
            title: "Lead in Responsible AI",
            description: "Implement advanced explainability and fairness monitoring. Conduct regular AI audits and third-party assessments. Share responsible AI practices externally and contribute to industry standards development.",
        },
    }
}

const fn advice(
    category: Category,
    title: &'static str,
    description: &'static str,
) -> IndustryRecommendation {
    IndustryRecommendation {
        category,
        title,
        description,
    }
}

/// Domain-specific advice for a respondent's industry.
pub fn industry_recommendations(industry: Industry) -> &'static [IndustryRecommendation] {
    match industry {
        Industry::ProfessionalServices => &PROFESSIONAL_SERVICES,
        Industry::FinancialServices => &FINANCIAL_SERVICES,
        Industry::Healthcare => &HEALTHCARE,
        Industry::RetailEcommerce => &RETAIL_ECOMMERCE,
        Industry::Manufacturing => &MANUFACTURING,
        Industry::ConstructionProperty => &CONSTRUCTION_PROPERTY,
        Industry::Education => &EDUCATION,
        Industry::Government => &GOVERNMENT,
        Industry::Agriculture => &AGRICULTURE,
        Industry::HospitalityTourism => &HOSPITALITY_TOURISM,
        Industry::Technology => &TECHNOLOGY,
        Industry::Other => &OTHER,
    }
}

static PROFESSIONAL_SERVICES: [IndustryRecommendation; 3] = [
    advice(Category::Process, "Automate Document-Heavy Workflows", "Apply AI to proposal drafting, contract review and report preparation so consultants spend more time on client judgement and less on formatting and first drafts."),
    advice(Category::People, "Upskill Client-Facing Teams", "Give advisers practical training on prompt design and output review so AI-assisted work meets professional standards before it reaches a client."),
    advice(Category::Governance, "Protect Client Confidentiality", "Set clear rules on which client information may be used with AI tools and prefer enterprise offerings that keep data out of model training."),
];

static FINANCIAL_SERVICES: [IndustryRecommendation; 3] = [
    advice(Category::Governance, "Align AI With Regulatory Obligations", "Map AI use cases against APRA and ASIC expectations, document model risk controls and keep an auditable trail for credit, advice and fraud decisions."),
    advice(Category::Data, "Strengthen Customer Data Foundations", "Consolidate customer and transaction data with clear lineage so fraud detection, personalisation and risk models can be trained and explained."),
    advice(Category::Process, "Target High-Volume Operations", "Start with claims triage, reconciliation and customer enquiries where AI can reduce handling time without changing the risk profile of decisions."),
];

static HEALTHCARE: [IndustryRecommendation; 3] = [
    advice(Category::Governance, "Prioritise Patient Safety and Privacy", "Establish clinical governance for AI tools, validate outputs against clinical guidelines and ensure health information is handled under the Privacy Act and My Health Record rules."),
    advice(Category::Process, "Reduce Administrative Burden", "Use AI for clinical note summarisation, referral letters and appointment scheduling to give clinicians more time with patients."),
    advice(Category::People, "Involve Clinicians Early", "Co-design AI initiatives with practitioners so tools fit real clinical workflows and earn the trust needed for adoption."),
];

static RETAIL_ECOMMERCE: [IndustryRecommendation; 3] = [
    advice(Category::Data, "Unify Customer and Inventory Data", "Bring online, in-store and inventory data together so demand forecasting and personalised recommendations draw on a single view of the customer."),
    advice(Category::Process, "Personalise the Customer Journey", "Pilot AI-driven product recommendations, dynamic merchandising and conversational support, measuring uplift in conversion and basket size."),
    advice(Category::Strategy, "Forecast Demand With AI", "Use machine learning forecasts to reduce stock-outs and markdowns, starting with your highest-volume product categories."),
];

static MANUFACTURING: [IndustryRecommendation; 3] = [
    advice(Category::Data, "Instrument the Production Line", "Capture sensor and machine data consistently so predictive maintenance and quality models have reliable inputs."),
    advice(Category::Process, "Start With Predictive Maintenance", "Pilot failure prediction on critical equipment where unplanned downtime is most costly, then expand to quality inspection."),
    advice(Category::People, "Bridge Operations and Analytics", "Pair experienced operators with data specialists so models reflect shop-floor realities and recommendations are acted on."),
];

static CONSTRUCTION_PROPERTY: [IndustryRecommendation; 3] = [
    advice(Category::Process, "Streamline Tendering and Documentation", "Apply AI to tender analysis, specification review and site reporting to cut administrative time across projects."),
    advice(Category::Data, "Digitise Project Records", "Standardise how drawings, RFIs and site diaries are stored so project data can support cost and schedule prediction."),
    advice(Category::Governance, "Manage Safety-Critical Use Carefully", "Keep a qualified person accountable for any AI-assisted safety or compliance decision and document how outputs were checked."),
];

static EDUCATION: [IndustryRecommendation; 3] = [
    advice(Category::Governance, "Set Clear Academic Integrity Policies", "Define acceptable AI use for staff and students, update assessment design and communicate expectations consistently."),
    advice(Category::People, "Build Educator Confidence", "Offer professional learning that shows teachers how AI can support lesson planning, feedback and differentiation."),
    advice(Category::Process, "Reduce Administrative Load", "Use AI to draft communications, summarise reports and streamline enrolment workflows so staff can focus on learners."),
];

static GOVERNMENT: [IndustryRecommendation; 3] = [
    advice(Category::Governance, "Adopt the National AI Assurance Framework", "Align projects with the Australian Government's AI assurance and transparency requirements, including published AI transparency statements."),
    advice(Category::Strategy, "Focus on Citizen Outcomes", "Prioritise use cases that improve service delivery and reduce wait times, with clear measures of public value."),
    advice(Category::Data, "Improve Data Sharing Safely", "Use the Data Availability and Transparency Act framework to enable responsible data sharing between agencies."),
];

static AGRICULTURE: [IndustryRecommendation; 3] = [
    advice(Category::Data, "Harness Farm and Environmental Data", "Combine yield, soil, weather and satellite data so AI can support planting, irrigation and harvest decisions."),
    advice(Category::Process, "Pilot Precision Agriculture", "Trial AI-assisted crop monitoring or livestock health detection on a single paddock or herd before scaling."),
    advice(Category::Strategy, "Partner With AgTech Providers", "Work with established agtech platforms and research bodies rather than building bespoke tools from scratch."),
];

static HOSPITALITY_TOURISM: [IndustryRecommendation; 3] = [
    advice(Category::Process, "Optimise Bookings and Pricing", "Use AI for demand-based pricing, booking forecasts and staffing rosters aligned to expected occupancy."),
    advice(Category::People, "Support Frontline Staff", "Provide AI assistants for multilingual guest communication and quick access to operating procedures."),
    advice(Category::Data, "Understand Guest Preferences", "Bring reviews, booking history and feedback together to personalise offers while respecting guest privacy."),
];

static TECHNOLOGY: [IndustryRecommendation; 3] = [
    advice(Category::Strategy, "Differentiate With AI-Native Features", "Identify where AI can become a core product capability rather than an add-on, and validate demand with customers early."),
    advice(Category::Process, "Embed AI in the Delivery Lifecycle", "Adopt AI-assisted coding, testing and incident response with guardrails for code quality and security review."),
    advice(Category::Governance, "Prepare for Customer Due Diligence", "Document model provenance, data handling and evaluation results so enterprise customers can assess your AI features."),
];

static OTHER: [IndustryRecommendation; 3] = [
    advice(Category::Strategy, "Start With a Focused Pilot", "Choose one well-understood business problem with measurable outcomes and run a time-boxed AI pilot to build evidence and momentum."),
    advice(Category::People, "Identify AI Champions", "Nominate curious, respected staff in each team to trial tools, share what works and support colleagues."),
    advice(Category::Governance, "Publish a Simple AI Use Policy", "Give staff clear, practical guidance on approved tools, data handling and human review before AI use spreads informally."),
];
