#[cfg(test)]
mod tests {
    use planboard::app::plan::{BusinessPlan, CompetitiveAdvantage, Risk};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_plan_is_populated() {
        let plan = BusinessPlan::default();

        assert!(!plan.company_name.is_empty());
        assert!(!plan.executive.problems.is_empty());
        assert!(!plan.opportunity.customer_segments.is_empty());
        assert!(!plan.business.pricing_tiers.is_empty());
        assert!(!plan.gtm.phases.is_empty());
        assert_eq!(plan.financial.years.len(), 3);
        assert!(!plan.roadmap.kpis.is_empty());
        assert!(!plan.risks.is_empty());
        assert!(!plan.success_factors.is_empty());
    }

    #[test]
    fn test_json_round_trip_preserves_document() {
        let plan = BusinessPlan::default();
        let json = serde_json::to_string_pretty(&plan).unwrap();
        let restored: BusinessPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, restored);
    }

    #[test]
    fn test_export_uses_camel_case_keys() {
        let plan = BusinessPlan::default();
        let value = serde_json::to_value(&plan).unwrap();

        assert!(value.get("companyName").is_some());
        assert!(value.get("targetValuation").is_some());
        assert!(value["executive"].get("yearThreeRevenue").is_some());
        assert!(value["opportunity"].get("growthDrivers").is_some());
        assert!(value["solution"].get("techStack").is_some());
        assert!(value["business"].get("unitEconomics").is_some());
        assert!(value["gtm"].get("salesProcess").is_some());
        assert!(value["financial"].get("revenueBreakdown").is_some());
        assert!(value["financial"]["keyMetrics"].get("currentARR").is_some());
        assert!(value["roadmap"].get("productRoadmap").is_some());
        assert!(value.get("successFactors").is_some());

        // Snake case must not leak into the export
        assert!(value.get("company_name").is_none());
        assert!(value["financial"].get("revenue_breakdown").is_none());
    }

    #[test]
    fn test_financial_years_use_string_keys() {
        let plan = BusinessPlan::default();
        let value = serde_json::to_value(&plan).unwrap();

        for key in ["1", "2", "3"] {
            assert!(
                value["financial"]["years"].get(key).is_some(),
                "missing year {key}"
            );
        }
    }

    #[test]
    fn test_partnership_serializes_type_keyword() {
        let plan = BusinessPlan::default();
        let value = serde_json::to_value(&plan).unwrap();
        assert!(value["gtm"]["partnerships"][0].get("type").is_some());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        let mut plan = BusinessPlan::default();
        plan.company_name = "Roundtrip Inc.".to_string();
        plan.save_to_path(&path).unwrap();

        let loaded = BusinessPlan::load_from_file(&path).unwrap();
        assert_eq!(loaded, plan);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.json");
        assert!(BusinessPlan::load_from_file(&path).is_err());
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json ").unwrap();
        assert!(BusinessPlan::load_from_file(&path).is_err());
    }

    #[test]
    fn test_load_wrong_shape_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wrong.json");
        std::fs::write(&path, r#"{"companyName": 42}"#).unwrap();
        assert!(BusinessPlan::load_from_file(&path).is_err());
    }

    #[test]
    fn test_add_appends_placeholder_row() {
        let mut plan = BusinessPlan::default();

        let before = plan.executive.problems.len();
        plan.executive.add_problem();
        assert_eq!(plan.executive.problems.len(), before + 1);
        assert_eq!(plan.executive.problems.last().unwrap().title, "New Problem");

        let before = plan.opportunity.growth_drivers.len();
        plan.opportunity.add_growth_driver();
        assert_eq!(plan.opportunity.growth_drivers.len(), before + 1);
        assert_eq!(
            plan.opportunity.growth_drivers.last().unwrap(),
            "New Driver"
        );

        plan.add_risk();
        let risk = plan.risks.last().unwrap();
        assert_eq!(risk.risk, "New Risk");
        assert_eq!(risk.level, "Medium");
        assert!(risk.mitigation.is_empty());
    }

    #[test]
    fn test_remove_targets_only_the_given_index() {
        let mut plan = BusinessPlan::default();
        plan.opportunity.competitive_advantages = vec![
            CompetitiveAdvantage {
                feature: "first".to_string(),
                us: true,
                competitor1: false,
                competitor2: false,
            },
            CompetitiveAdvantage {
                feature: "second".to_string(),
                us: false,
                competitor1: true,
                competitor2: false,
            },
            CompetitiveAdvantage {
                feature: "third".to_string(),
                us: false,
                competitor1: false,
                competitor2: true,
            },
        ];

        plan.opportunity.remove_competitive_advantage(1);

        let features: Vec<&str> = plan
            .opportunity
            .competitive_advantages
            .iter()
            .map(|a| a.feature.as_str())
            .collect();
        assert_eq!(features, vec!["first", "third"]);
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let mut plan = BusinessPlan::default();
        let before = plan.clone();

        plan.executive.remove_problem(999);
        plan.opportunity.remove_customer_segment(999);
        plan.business.remove_pricing_tier(999);
        plan.gtm.remove_partnership(999);
        plan.financial.remove_cost(999);
        plan.roadmap.remove_kpi(999);
        plan.remove_risk(999);
        plan.remove_success_factor(999);

        assert_eq!(plan, before);
    }

    #[test]
    fn test_edit_is_local_to_one_row() {
        let mut plan = BusinessPlan::default();
        let other_rows: Vec<Risk> = plan.risks[1..].to_vec();

        plan.risks[0].level = "Low".to_string();

        assert_eq!(plan.risks[0].level, "Low");
        assert_eq!(&plan.risks[1..], &other_rows[..]);
    }

    #[test]
    fn test_nested_list_operations() {
        let mut plan = BusinessPlan::default();

        let feature = &mut plan.solution.features[0];
        let before = feature.capabilities.len();
        feature.add_capability();
        assert_eq!(feature.capabilities.len(), before + 1);
        feature.remove_capability(before);
        assert_eq!(feature.capabilities.len(), before);

        let year = plan.financial.years.get_mut(&1).unwrap();
        let before = year.milestones.len();
        year.add_milestone();
        assert_eq!(year.milestones.last().unwrap(), "New milestone");
        assert_eq!(year.milestones.len(), before + 1);
    }

    #[test]
    fn test_import_of_exported_document_from_any_section_state() {
        // Exports carry no view state, so a plan mutated through every kind
        // of operation still round-trips exactly.
        let mut plan = BusinessPlan::default();
        plan.executive.add_problem();
        plan.executive.problems[0].title = "Edited".to_string();
        plan.gtm.add_channel();
        plan.gtm.remove_sales_stage(0);
        plan.financial.funding.add_use();
        plan.roadmap.add_department();

        let json = serde_json::to_string_pretty(&plan).unwrap();
        let restored: BusinessPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, restored);
    }
}
