#[cfg(test)]
mod tests {
    use planboard::app::drafting::{apply_draft, draft_prompt, strip_code_fences, SectionKind};
    use planboard::app::plan::BusinessPlan;
    use planboard::app::prompts;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_section_has_questions_and_a_prompt() {
        for kind in SectionKind::ALL {
            assert!(
                !kind.questions().is_empty(),
                "{} has no questions",
                kind.title()
            );
            assert!(
                kind.system_prompt().contains("JSON"),
                "{} prompt does not name the output format",
                kind.title()
            );
        }
    }

    #[test]
    fn test_draft_prompt_includes_answers_in_question_order() {
        let answers = vec![
            "Invoices get lost".to_string(),
            "We automate them".to_string(),
        ];
        let prompt = draft_prompt(SectionKind::Executive, &answers);

        let first = prompt.find("Invoices get lost").unwrap();
        let second = prompt.find("We automate them").unwrap();
        assert!(first < second);
        assert!(prompt.contains("USER'S ANSWERS:"));
        // Unanswered questions are marked, not dropped
        assert!(prompt.contains("Not answered"));
    }

    #[test]
    fn test_blank_answers_count_as_unanswered() {
        let answers = vec!["   ".to_string(); 5];
        let prompt = draft_prompt(SectionKind::Executive, &answers);
        assert_eq!(prompt.matches("Not answered").count(), 5);
    }

    #[test]
    fn test_strip_code_fences_variants() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  \n```json\n[1, 2]\n```\n  "), "[1, 2]");
    }

    #[test]
    fn test_accepting_valid_executive_draft_replaces_section() {
        let mut plan = BusinessPlan::default();
        let reply = r#"```json
{
  "marketSize": "$9B",
  "yearThreeRevenue": "$3M",
  "uniqueValue": "One-click books",
  "problems": [{"title": "Manual entry", "description": "Hours wasted weekly"}],
  "solution": "Automated bookkeeping",
  "advantages": [{"metric": "5x faster", "description": "Closing the books"}]
}
```"#;

        apply_draft(&mut plan, SectionKind::Executive, reply).unwrap();

        assert_eq!(plan.executive.market_size, "$9B");
        assert_eq!(plan.executive.problems.len(), 1);
        assert_eq!(plan.executive.problems[0].title, "Manual entry");
        // Other sections untouched
        assert_eq!(plan.opportunity, BusinessPlan::default().opportunity);
    }

    #[test]
    fn test_non_json_draft_is_rejected_without_changes() {
        let mut plan = BusinessPlan::default();
        let before = plan.clone();

        let result = apply_draft(
            &mut plan,
            SectionKind::Executive,
            "Here is a great summary of your business...",
        );

        assert!(result.is_err());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_wrong_shape_draft_is_rejected_without_changes() {
        let mut plan = BusinessPlan::default();
        let before = plan.clone();

        // Valid JSON, but an opportunity payload aimed at the executive slot
        let reply = r#"{"marketSize": "$1B", "growthDrivers": ["remote work"]}"#;
        let result = apply_draft(&mut plan, SectionKind::Executive, reply);

        assert!(result.is_err());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_financial_draft_round_trips_year_keys() {
        let mut plan = BusinessPlan::default();
        let reply = r#"{
  "years": {
    "1": {"revenue": "$100K", "clients": "10", "arr": "$90K", "margin": "50%", "team": "2", "milestones": ["Launch"]},
    "2": {"revenue": "$1M", "clients": "80", "arr": "$900K", "margin": "60%", "team": "6", "milestones": ["Scale"]},
    "3": {"revenue": "$3M", "clients": "250", "arr": "$2.7M", "margin": "70%", "team": "15", "milestones": ["Expand"]}
  },
  "revenueBreakdown": [{"stream": "Subscriptions", "y1": 100, "y2": 90, "y3": 80}],
  "costs": [{"category": "Engineering", "percent": "50%"}],
  "funding": {"amount": "$1M", "uses": [{"use": "Product", "amount": "60%"}]},
  "keyMetrics": {"currentARR": "$0", "projectedARR": "$2.7M", "ltv": "$10K"}
}"#;

        apply_draft(&mut plan, SectionKind::Financial, reply).unwrap();

        assert_eq!(plan.financial.years.len(), 3);
        assert_eq!(plan.financial.years[&2].revenue, "$1M");
        assert_eq!(plan.financial.funding.uses[0].r#use, "Product");
    }

    #[test]
    fn test_risks_draft_accepts_top_level_array() {
        let mut plan = BusinessPlan::default();
        let reply = r#"[
  {"risk": "Adoption", "level": "High", "description": "Slow uptake", "mitigation": ["Pilot program"]},
  {"risk": "Pricing", "level": "Low", "description": "Race to the bottom", "mitigation": []}
]"#;

        apply_draft(&mut plan, SectionKind::Risks, reply).unwrap();

        assert_eq!(plan.risks.len(), 2);
        assert_eq!(plan.risks[1].level, "Low");
    }

    #[test]
    fn test_success_factors_draft_accepts_top_level_array() {
        let mut plan = BusinessPlan::default();
        let reply = r#"[{"factor": "Team", "description": "Domain veterans"}]"#;

        apply_draft(&mut plan, SectionKind::SuccessFactors, reply).unwrap();

        assert_eq!(plan.success_factors.len(), 1);
        assert_eq!(plan.success_factors[0].factor, "Team");
    }

    #[test]
    fn test_ask_ai_prompt_carries_full_document() {
        let mut plan = BusinessPlan::default();
        plan.company_name = "Distinctive Name Ltd".to_string();
        plan.risks[0].risk = "A very specific risk".to_string();

        let prompt = prompts::ask_ai_prompt(&plan, "Where am I weakest?").unwrap();

        assert!(prompt.contains("Distinctive Name Ltd"));
        assert!(prompt.contains("A very specific risk"));
        assert!(prompt.contains("USER'S QUESTION:"));
        assert!(prompt.contains("Where am I weakest?"));
    }
}
