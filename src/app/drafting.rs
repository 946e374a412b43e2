//! Guided section drafting.
//!
//! Each draftable section carries a short questionnaire and a system prompt
//! describing the JSON shape the model must return. The wizard collects
//! answers, sends one prompt, and lets the user review (and hand-edit) the
//! reply before accepting it.
//!
//! Accepting is strict: the reply must deserialize into the target section's
//! typed structure or nothing is merged. A reply wrapped in Markdown code
//! fences is unwrapped first, since models routinely fence JSON output.

use crate::app::plan::{BusinessPlan, Risk, SuccessFactor};
use anyhow::{Context, Result};

/// A draftable region of the plan. Scalar-only regions (the company header)
/// have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Executive,
    Opportunity,
    Solution,
    Business,
    Gtm,
    Financial,
    Roadmap,
    Risks,
    SuccessFactors,
}

impl SectionKind {
    pub const ALL: &'static [SectionKind] = &[
        SectionKind::Executive,
        SectionKind::Opportunity,
        SectionKind::Solution,
        SectionKind::Business,
        SectionKind::Gtm,
        SectionKind::Financial,
        SectionKind::Roadmap,
        SectionKind::Risks,
        SectionKind::SuccessFactors,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Executive => "Executive Summary",
            SectionKind::Opportunity => "Opportunity",
            SectionKind::Solution => "Solution & Technology",
            SectionKind::Business => "Business Model",
            SectionKind::Gtm => "GTM Strategy",
            SectionKind::Financial => "Financial Projections",
            SectionKind::Roadmap => "Roadmap & Milestones",
            SectionKind::Risks => "Risks & Mitigation",
            SectionKind::SuccessFactors => "Success Factors",
        }
    }

    pub fn questions(&self) -> &'static [DraftQuestion] {
        match self {
            SectionKind::Executive => EXECUTIVE_QUESTIONS,
            SectionKind::Opportunity => OPPORTUNITY_QUESTIONS,
            SectionKind::Solution => SOLUTION_QUESTIONS,
            SectionKind::Business => BUSINESS_QUESTIONS,
            SectionKind::Gtm => GTM_QUESTIONS,
            SectionKind::Financial => FINANCIAL_QUESTIONS,
            SectionKind::Roadmap => ROADMAP_QUESTIONS,
            SectionKind::Risks => RISKS_QUESTIONS,
            SectionKind::SuccessFactors => SUCCESS_FACTORS_QUESTIONS,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            SectionKind::Executive => EXECUTIVE_PROMPT,
            SectionKind::Opportunity => OPPORTUNITY_PROMPT,
            SectionKind::Solution => SOLUTION_PROMPT,
            SectionKind::Business => BUSINESS_PROMPT,
            SectionKind::Gtm => GTM_PROMPT,
            SectionKind::Financial => FINANCIAL_PROMPT,
            SectionKind::Roadmap => ROADMAP_PROMPT,
            SectionKind::Risks => RISKS_PROMPT,
            SectionKind::SuccessFactors => SUCCESS_FACTORS_PROMPT,
        }
    }
}

/// One questionnaire entry. `multiline` selects a multi-row text box in the
/// wizard; it does not affect the prompt.
#[derive(Debug, Clone, Copy)]
pub struct DraftQuestion {
    pub question: &'static str,
    pub placeholder: &'static str,
    pub multiline: bool,
}

const EXECUTIVE_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What problem does your business solve?",
        placeholder: "e.g., Small businesses struggle with managing invoices and payments efficiently",
        multiline: true,
    },
    DraftQuestion {
        question: "What is your solution?",
        placeholder: "e.g., An automated invoicing platform that integrates with accounting software",
        multiline: true,
    },
    DraftQuestion {
        question: "Who is your target market and how big is it?",
        placeholder: "e.g., 5M small businesses in the US, $10B TAM",
        multiline: true,
    },
    DraftQuestion {
        question: "What gives you an unfair advantage?",
        placeholder: "e.g., Proprietary AI technology, exclusive partnerships, unique data",
        multiline: true,
    },
    DraftQuestion {
        question: "What is your revenue model and Year 3 target?",
        placeholder: "e.g., SaaS subscription, $5M ARR by Year 3",
        multiline: false,
    },
];

const OPPORTUNITY_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What is the total addressable market (TAM)?",
        placeholder: "e.g., $50B global market for project management software",
        multiline: false,
    },
    DraftQuestion {
        question: "What is the market growth rate?",
        placeholder: "e.g., Growing at 15% CAGR, driven by remote work trends",
        multiline: false,
    },
    DraftQuestion {
        question: "What are your primary customer segments?",
        placeholder: "e.g., Enterprise (>1000 employees), Mid-market (100-1000), SMB (<100)",
        multiline: true,
    },
    DraftQuestion {
        question: "What are the key market growth drivers?",
        placeholder: "e.g., Digital transformation, remote work, regulatory changes",
        multiline: true,
    },
    DraftQuestion {
        question: "How do you compare to competitors?",
        placeholder: "e.g., Our AI features and pricing give us 2x better value than Competitor X",
        multiline: true,
    },
];

const SOLUTION_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "Describe your solution in detail",
        placeholder: "e.g., A cloud-based platform that automates workflow management using AI",
        multiline: true,
    },
    DraftQuestion {
        question: "What are the 3-5 key features?",
        placeholder: "e.g., Real-time collaboration, AI-powered insights, Mobile app, Integrations",
        multiline: true,
    },
    DraftQuestion {
        question: "What technology stack will you use?",
        placeholder: "e.g., React, Node.js, PostgreSQL, AWS",
        multiline: true,
    },
    DraftQuestion {
        question: "How is your solution different from competitors?",
        placeholder: "e.g., First to offer AI-powered predictive analytics in this space",
        multiline: true,
    },
    DraftQuestion {
        question: "What are the next features on your roadmap?",
        placeholder: "e.g., Mobile app, API access, advanced reporting, integrations",
        multiline: true,
    },
];

const BUSINESS_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What is your revenue model?",
        placeholder: "e.g., SaaS subscription with tiered pricing ($49, $99, $299/mo)",
        multiline: true,
    },
    DraftQuestion {
        question: "How did you determine your pricing?",
        placeholder: "e.g., Value-based pricing, 70% margin, competitive analysis",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your unit economics?",
        placeholder: "e.g., $1200 ARR, $400 CAC, $4800 LTV, 3-month payback",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your target profit margins?",
        placeholder: "e.g., 70% gross margin, 20% net margin at scale",
        multiline: false,
    },
];

const GTM_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "Who is your ideal customer profile?",
        placeholder: "e.g., Tech-savvy SMB owners, 20-50 employees, $2-10M revenue",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your primary customer acquisition channels?",
        placeholder: "e.g., SEO/Content, LinkedIn ads, Partner referrals, Sales outreach",
        multiline: true,
    },
    DraftQuestion {
        question: "Describe your sales process",
        placeholder: "e.g., Self-service signup -> 14-day trial -> Sales call -> Close",
        multiline: true,
    },
    DraftQuestion {
        question: "What strategic partnerships will you pursue?",
        placeholder: "e.g., Integration partners, resellers, industry associations",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your GTM phases over the next 12 months?",
        placeholder: "e.g., Month 1-3: Launch beta, Month 4-6: Scale content, Month 7-12: Partner channel",
        multiline: true,
    },
];

const FINANCIAL_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "Year 1: Revenue, customers, and key milestones?",
        placeholder: "e.g., $500K revenue, 50 customers, launch MVP",
        multiline: true,
    },
    DraftQuestion {
        question: "Year 2: Revenue, customers, and key milestones?",
        placeholder: "e.g., $2M revenue, 200 customers, expand to enterprise",
        multiline: true,
    },
    DraftQuestion {
        question: "Year 3: Revenue, customers, and key milestones?",
        placeholder: "e.g., $5M revenue, 500 customers, international expansion",
        multiline: true,
    },
    DraftQuestion {
        question: "How much funding do you need and what will you use it for?",
        placeholder: "e.g., $2M seed round for product development (40%), sales/marketing (40%), operations (20%)",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your main cost categories?",
        placeholder: "e.g., Engineering (40%), Sales (30%), Marketing (20%), Operations (10%)",
        multiline: true,
    },
];

const ROADMAP_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What are your launch plans for the next 6 months?",
        placeholder: "e.g., Month 1-2: Private beta, Month 3-4: Public launch, Month 5-6: Feature updates",
        multiline: true,
    },
    DraftQuestion {
        question: "What product features will you build each quarter?",
        placeholder: "e.g., Q1: Core features, Q2: Mobile app, Q3: Integrations, Q4: Enterprise features",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your hiring plans?",
        placeholder: "e.g., Year 1: 5 engineers, 2 sales. Year 2: 10 engineers, 5 sales, 2 marketing",
        multiline: true,
    },
    DraftQuestion {
        question: "What are your key performance indicators (KPIs)?",
        placeholder: "e.g., MRR growth, CAC, LTV, Churn rate, NPS",
        multiline: true,
    },
];

const RISKS_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What are the main market risks?",
        placeholder: "e.g., Market adoption slower than expected, new competitors",
        multiline: true,
    },
    DraftQuestion {
        question: "What are the technical risks?",
        placeholder: "e.g., Scaling challenges, integration complexity, security concerns",
        multiline: true,
    },
    DraftQuestion {
        question: "What competitive risks do you face?",
        placeholder: "e.g., Large incumbents enter space, price wars",
        multiline: true,
    },
    DraftQuestion {
        question: "How will you mitigate these risks?",
        placeholder: "e.g., Diversify revenue streams, build moat with IP, strong customer relationships",
        multiline: true,
    },
];

const SUCCESS_FACTORS_QUESTIONS: &[DraftQuestion] = &[
    DraftQuestion {
        question: "What are the 3-5 critical success factors for your business?",
        placeholder: "e.g., Product-market fit, strong unit economics, scalable tech, talented team",
        multiline: true,
    },
    DraftQuestion {
        question: "What sustainable competitive advantages will you build?",
        placeholder: "e.g., Network effects, proprietary data, brand, switching costs",
        multiline: true,
    },
    DraftQuestion {
        question: "How will you execute on these success factors?",
        placeholder: "e.g., Hire top talent, invest in R&D, build strong culture",
        multiline: true,
    },
];

const EXECUTIVE_PROMPT: &str = r#"You are an expert business plan consultant. Generate a comprehensive Executive Summary section based on the user's answers. Return a JSON object with this structure:
{
  "marketSize": "string",
  "yearThreeRevenue": "string",
  "uniqueValue": "string",
  "problems": [{"title": "string", "description": "string"}],
  "solution": "string",
  "advantages": [{"metric": "string", "description": "string"}]
}"#;

const OPPORTUNITY_PROMPT: &str = r#"You are an expert market analyst. Generate a comprehensive Opportunity section based on the user's answers. Return a JSON object with this structure:
{
  "marketSize": "string",
  "marketGrowth": "string",
  "targetPercent": "string",
  "targetDescription": "string",
  "growthDrivers": ["string"],
  "customerSegments": [{"segment": "string", "size": "string", "arr": "string", "priority": "string"}],
  "competitiveAdvantages": [{"feature": "string", "us": true, "competitor1": false, "competitor2": false}]
}"#;

const SOLUTION_PROMPT: &str = r#"You are an expert product strategist. Generate a comprehensive Solution section based on the user's answers. Return a JSON object with this structure:
{
  "description": "string",
  "features": [{"name": "string", "description": "string", "capabilities": ["string"], "revenue": "string"}],
  "techStack": [{"layer": "string", "technologies": ["string"]}]
}"#;

const BUSINESS_PROMPT: &str = r#"You are an expert business model consultant. Generate a comprehensive Business Model section based on the user's answers. Return a JSON object with this structure:
{
  "revenueStreams": [{"stream": "string", "model": "string", "pricing": "string", "margin": "string", "split": "string"}],
  "pricingTiers": [{"tier": "string", "price": "string", "target": "string", "includes": ["string"]}],
  "unitEconomics": {"arr": "string", "cac": "string", "ltv": "string", "payback": "string"}
}"#;

const GTM_PROMPT: &str = r#"You are an expert go-to-market strategist. Generate a comprehensive GTM Strategy section based on the user's answers. Return a JSON object with this structure:
{
  "phases": [{"name": "string", "duration": "string", "target": "string", "channels": "string", "offer": "string", "focus": "string"}],
  "channels": [{"channel": "string", "investment": "string", "roi": "string", "timeframe": "string"}],
  "salesProcess": [{"stage": "string", "duration": "string", "conversion": "string"}],
  "partnerships": [{"partner": "string", "value": "string", "type": "string"}]
}"#;

const FINANCIAL_PROMPT: &str = r#"You are an expert financial analyst. Generate a comprehensive Financial Projections section based on the user's answers. Return a JSON object with this structure:
{
  "years": {
    "1": {"revenue": "string", "clients": "string", "arr": "string", "margin": "string", "team": "string", "milestones": ["string"]},
    "2": {"revenue": "string", "clients": "string", "arr": "string", "margin": "string", "team": "string", "milestones": ["string"]},
    "3": {"revenue": "string", "clients": "string", "arr": "string", "margin": "string", "team": "string", "milestones": ["string"]}
  },
  "revenueBreakdown": [{"stream": "string", "y1": 0, "y2": 0, "y3": 0}],
  "costs": [{"category": "string", "percent": "string"}],
  "funding": {"amount": "string", "uses": [{"use": "string", "amount": "string"}]},
  "keyMetrics": {"currentARR": "string", "projectedARR": "string", "ltv": "string"}
}"#;

const ROADMAP_PROMPT: &str = r#"You are an expert business execution strategist. Generate a comprehensive Roadmap section based on the user's answers. Return a JSON object with this structure:
{
  "launch": [{"month": "string", "focus": "string", "tasks": ["string"]}],
  "productRoadmap": [{"quarter": "string", "items": ["string"]}],
  "teamBuilding": [{"department": "string", "hires": {"y1": 0, "y2": 0, "y3": 0}, "key": ["string"]}],
  "kpis": [{"metric": "string", "target": "string"}]
}"#;

const RISKS_PROMPT: &str = r#"You are an expert risk management consultant. Generate a comprehensive Risks & Mitigation section based on the user's answers. Return a JSON array with this structure:
[
  {"risk": "string", "level": "High/Medium/Low", "description": "string", "mitigation": ["string"]}
]"#;

const SUCCESS_FACTORS_PROMPT: &str = r#"You are an expert business strategist. Generate a comprehensive Success Factors section based on the user's answers. Return a JSON array with this structure:
[
  {"factor": "string", "description": "string"}
]"#;

/// Assemble the generation prompt: system prompt, then each question with
/// its answer (or "Not answered"), then the closing instruction.
pub fn draft_prompt(kind: SectionKind, answers: &[String]) -> String {
    let answers_text = kind
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = answers
                .get(i)
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .unwrap_or("Not answered");
            format!("{}\n{}", q.question, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n\nUSER'S ANSWERS:\n{}\n\nGenerate comprehensive, professional content for the {} section based on these answers. Format the output as JSON that matches the expected data structure.",
        kind.system_prompt(),
        answers_text,
        kind.title()
    )
}

/// Strip a single Markdown code fence wrapping the reply, if present.
/// ```` ```json {...}``` ```` becomes `{...}`; anything else passes through.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence.
    match inner.split_once('\n') {
        Some((first_line, body)) if !first_line.trim().contains(' ') => body.trim(),
        _ => inner.trim(),
    }
}

/// Validate a reply against the target section's structure and merge it into
/// the plan. The reply must parse as JSON and deserialize into the section's
/// types; on any failure the plan is left untouched and the error describes
/// what went wrong.
pub fn apply_draft(plan: &mut BusinessPlan, kind: SectionKind, reply: &str) -> Result<()> {
    let json = strip_code_fences(reply);
    match kind {
        SectionKind::Executive => {
            plan.executive = serde_json::from_str(json)
                .context("The reply is not a valid Executive Summary section")?;
        }
        SectionKind::Opportunity => {
            plan.opportunity = serde_json::from_str(json)
                .context("The reply is not a valid Opportunity section")?;
        }
        SectionKind::Solution => {
            plan.solution = serde_json::from_str(json)
                .context("The reply is not a valid Solution section")?;
        }
        SectionKind::Business => {
            plan.business = serde_json::from_str(json)
                .context("The reply is not a valid Business Model section")?;
        }
        SectionKind::Gtm => {
            plan.gtm = serde_json::from_str(json)
                .context("The reply is not a valid GTM Strategy section")?;
        }
        SectionKind::Financial => {
            plan.financial = serde_json::from_str(json)
                .context("The reply is not a valid Financial Projections section")?;
        }
        SectionKind::Roadmap => {
            plan.roadmap = serde_json::from_str(json)
                .context("The reply is not a valid Roadmap section")?;
        }
        SectionKind::Risks => {
            let risks: Vec<Risk> = serde_json::from_str(json)
                .context("The reply is not a valid list of risks")?;
            plan.risks = risks;
        }
        SectionKind::SuccessFactors => {
            let factors: Vec<SuccessFactor> = serde_json::from_str(json)
                .context("The reply is not a valid list of success factors")?;
            plan.success_factors = factors;
        }
    }
    tracing::info!(section = kind.title(), "Draft accepted into plan");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_marks_missing_answers() {
        let answers = vec!["We automate invoicing".to_string()];
        let prompt = draft_prompt(SectionKind::Executive, &answers);
        assert!(prompt.contains("We automate invoicing"));
        assert!(prompt.contains("Not answered"));
        assert!(prompt.contains("Executive Summary"));
    }

    #[test]
    fn fences_are_stripped() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn invalid_draft_leaves_plan_unchanged() {
        let mut plan = BusinessPlan::default();
        let before = plan.clone();
        let result = apply_draft(&mut plan, SectionKind::Executive, "not json at all");
        assert!(result.is_err());
        assert_eq!(plan, before);
    }

    #[test]
    fn valid_risks_array_replaces_risks() {
        let mut plan = BusinessPlan::default();
        let reply = r#"[{"risk":"Churn","level":"High","description":"Early churn","mitigation":["Onboarding"]}]"#;
        apply_draft(&mut plan, SectionKind::Risks, reply).unwrap();
        assert_eq!(plan.risks.len(), 1);
        assert_eq!(plan.risks[0].risk, "Churn");
    }
}
