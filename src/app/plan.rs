//! # Business Plan Document Model
//!
//! This module is the central data layer of PlanBoard: one [`BusinessPlan`]
//! tree holding every section of the plan, mutated in place by the section
//! editors and serialized verbatim for import/export.
//!
//! ## Document shape
//!
//! The plan is a fixed tree of named sections. Each section is a record of
//! scalar strings plus ordered lists of sub-records (for example a list of
//! [`Risk`] records, each carrying a severity level and a list of mitigation
//! strings). Keys are fixed by section type; list order is insertion order and
//! carries no meaning beyond display order.
//!
//! ## Persistence
//!
//! The document round-trips through pretty-printed JSON:
//!
//! ```rust
//! use planboard::app::plan::BusinessPlan;
//!
//! let plan = BusinessPlan::default();
//! let json = serde_json::to_string_pretty(&plan).unwrap();
//! let restored: BusinessPlan = serde_json::from_str(&json).unwrap();
//! assert_eq!(plan, restored);
//! ```
//!
//! Field names are serialized in camelCase and the financial projection years
//! are keyed `"1"`, `"2"`, `"3"`; the on-disk format is fixed and has no
//! version field, so a plan exported by any build imports into any other.
//! Import replaces the in-memory document wholesale; a file that fails to
//! parse leaves the current document untouched (the caller surfaces the
//! error).
//!
//! ## Editing contract
//!
//! Every list-typed field supports exactly three operations: append a
//! placeholder row, edit one field of one row by position, and remove one row
//! by position. All three are synchronous and total: removing an
//! out-of-range index is a no-op, and no validation is applied to field
//! content (every scalar is free text).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A problem the business solves, shown in the executive summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStatement {
    pub title: String,
    pub description: String,
}

impl ProblemStatement {
    pub fn placeholder() -> Self {
        Self {
            title: "New Problem".to_string(),
            description: "Description".to_string(),
        }
    }
}

/// A headline advantage metric, shown in the executive summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfairAdvantage {
    pub metric: String,
    pub description: String,
}

impl UnfairAdvantage {
    pub fn placeholder() -> Self {
        Self {
            metric: "New Metric".to_string(),
            description: "Description".to_string(),
        }
    }
}

/// Executive summary: headline figures plus problem/solution framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSection {
    pub market_size: String,
    pub year_three_revenue: String,
    pub unique_value: String,
    pub problems: Vec<ProblemStatement>,
    pub solution: String,
    pub advantages: Vec<UnfairAdvantage>,
}

impl ExecutiveSection {
    pub fn add_problem(&mut self) {
        self.problems.push(ProblemStatement::placeholder());
    }

    pub fn remove_problem(&mut self, index: usize) {
        if index < self.problems.len() {
            self.problems.remove(index);
        }
    }

    pub fn add_advantage(&mut self) {
        self.advantages.push(UnfairAdvantage::placeholder());
    }

    pub fn remove_advantage(&mut self, index: usize) {
        if index < self.advantages.len() {
            self.advantages.remove(index);
        }
    }
}

/// One target customer segment row in the opportunity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegment {
    pub segment: String,
    pub size: String,
    pub arr: String,
    pub priority: String,
}

impl CustomerSegment {
    pub fn placeholder() -> Self {
        Self {
            segment: "New Segment".to_string(),
            size: String::new(),
            arr: String::new(),
            priority: String::new(),
        }
    }
}

/// Feature comparison row: us against two competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAdvantage {
    pub feature: String,
    pub us: bool,
    pub competitor1: bool,
    pub competitor2: bool,
}

impl CompetitiveAdvantage {
    pub fn placeholder() -> Self {
        Self {
            feature: "New Feature".to_string(),
            us: false,
            competitor1: false,
            competitor2: false,
        }
    }
}

/// Market opportunity: sizing scalars plus growth drivers, segments, and the
/// competitive comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitySection {
    pub market_size: String,
    pub market_growth: String,
    pub target_percent: String,
    pub target_description: String,
    pub growth_drivers: Vec<String>,
    pub customer_segments: Vec<CustomerSegment>,
    pub competitive_advantages: Vec<CompetitiveAdvantage>,
}

impl OpportunitySection {
    pub fn add_growth_driver(&mut self) {
        self.growth_drivers.push("New Driver".to_string());
    }

    pub fn remove_growth_driver(&mut self, index: usize) {
        if index < self.growth_drivers.len() {
            self.growth_drivers.remove(index);
        }
    }

    pub fn add_customer_segment(&mut self) {
        self.customer_segments.push(CustomerSegment::placeholder());
    }

    pub fn remove_customer_segment(&mut self, index: usize) {
        if index < self.customer_segments.len() {
            self.customer_segments.remove(index);
        }
    }

    pub fn add_competitive_advantage(&mut self) {
        self.competitive_advantages
            .push(CompetitiveAdvantage::placeholder());
    }

    pub fn remove_competitive_advantage(&mut self, index: usize) {
        if index < self.competitive_advantages.len() {
            self.competitive_advantages.remove(index);
        }
    }
}

/// A product feature or vertical, with its own capability list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionFeature {
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub revenue: String,
}

impl SolutionFeature {
    pub fn placeholder() -> Self {
        Self {
            name: "New Feature".to_string(),
            description: String::new(),
            capabilities: Vec::new(),
            revenue: String::new(),
        }
    }

    pub fn add_capability(&mut self) {
        self.capabilities.push("New Capability".to_string());
    }

    pub fn remove_capability(&mut self, index: usize) {
        if index < self.capabilities.len() {
            self.capabilities.remove(index);
        }
    }
}

/// One layer of the technology stack with its technology tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackLayer {
    pub layer: String,
    pub technologies: Vec<String>,
}

impl TechStackLayer {
    pub fn placeholder() -> Self {
        Self {
            layer: "New Layer".to_string(),
            technologies: Vec::new(),
        }
    }

    pub fn add_technology(&mut self) {
        self.technologies.push("New Technology".to_string());
    }

    pub fn remove_technology(&mut self, index: usize) {
        if index < self.technologies.len() {
            self.technologies.remove(index);
        }
    }
}

/// Solution and technology section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSection {
    pub description: String,
    pub features: Vec<SolutionFeature>,
    pub tech_stack: Vec<TechStackLayer>,
}

impl SolutionSection {
    pub fn add_feature(&mut self) {
        self.features.push(SolutionFeature::placeholder());
    }

    pub fn remove_feature(&mut self, index: usize) {
        if index < self.features.len() {
            self.features.remove(index);
        }
    }

    pub fn add_tech_stack_layer(&mut self) {
        self.tech_stack.push(TechStackLayer::placeholder());
    }

    pub fn remove_tech_stack_layer(&mut self, index: usize) {
        if index < self.tech_stack.len() {
            self.tech_stack.remove(index);
        }
    }
}

/// One revenue stream row in the business model table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStream {
    pub stream: String,
    pub model: String,
    pub pricing: String,
    pub margin: String,
    pub split: String,
}

impl RevenueStream {
    pub fn placeholder() -> Self {
        Self {
            stream: "New Stream".to_string(),
            model: String::new(),
            pricing: String::new(),
            margin: String::new(),
            split: String::new(),
        }
    }
}

/// A pricing tier card, with a list of included features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub tier: String,
    pub price: String,
    pub target: String,
    pub includes: Vec<String>,
}

impl PricingTier {
    pub fn placeholder() -> Self {
        Self {
            tier: "New Tier".to_string(),
            price: String::new(),
            target: String::new(),
            includes: Vec::new(),
        }
    }

    pub fn add_include(&mut self) {
        self.includes.push("New Feature".to_string());
    }

    pub fn remove_include(&mut self, index: usize) {
        if index < self.includes.len() {
            self.includes.remove(index);
        }
    }
}

/// Headline unit-economics figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomics {
    pub arr: String,
    pub cac: String,
    pub ltv: String,
    pub payback: String,
}

/// Business model section: revenue streams, pricing, unit economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSection {
    pub revenue_streams: Vec<RevenueStream>,
    pub pricing_tiers: Vec<PricingTier>,
    pub unit_economics: UnitEconomics,
}

impl BusinessSection {
    pub fn add_revenue_stream(&mut self) {
        self.revenue_streams.push(RevenueStream::placeholder());
    }

    pub fn remove_revenue_stream(&mut self, index: usize) {
        if index < self.revenue_streams.len() {
            self.revenue_streams.remove(index);
        }
    }

    pub fn add_pricing_tier(&mut self) {
        self.pricing_tiers.push(PricingTier::placeholder());
    }

    pub fn remove_pricing_tier(&mut self, index: usize) {
        if index < self.pricing_tiers.len() {
            self.pricing_tiers.remove(index);
        }
    }
}

/// One go-to-market phase card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmPhase {
    pub name: String,
    pub duration: String,
    pub target: String,
    pub channels: String,
    pub offer: String,
    pub focus: String,
}

impl GtmPhase {
    pub fn placeholder() -> Self {
        Self {
            name: "New Phase".to_string(),
            duration: String::new(),
            target: String::new(),
            channels: String::new(),
            offer: String::new(),
            focus: String::new(),
        }
    }
}

/// One acquisition channel row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmChannel {
    pub channel: String,
    pub investment: String,
    pub roi: String,
    pub timeframe: String,
}

impl GtmChannel {
    pub fn placeholder() -> Self {
        Self {
            channel: "New Channel".to_string(),
            investment: String::new(),
            roi: String::new(),
            timeframe: String::new(),
        }
    }
}

/// One stage of the sales process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesProcessStage {
    pub stage: String,
    pub duration: String,
    pub conversion: String,
}

impl SalesProcessStage {
    pub fn placeholder() -> Self {
        Self {
            stage: "New Stage".to_string(),
            duration: String::new(),
            conversion: String::new(),
        }
    }
}

/// One strategic partnership row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub partner: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Partnership {
    pub fn placeholder() -> Self {
        Self {
            partner: "New Partner".to_string(),
            value: String::new(),
            kind: String::new(),
        }
    }
}

/// Go-to-market section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmSection {
    pub phases: Vec<GtmPhase>,
    pub channels: Vec<GtmChannel>,
    pub sales_process: Vec<SalesProcessStage>,
    pub partnerships: Vec<Partnership>,
}

impl GtmSection {
    pub fn add_phase(&mut self) {
        self.phases.push(GtmPhase::placeholder());
    }

    pub fn remove_phase(&mut self, index: usize) {
        if index < self.phases.len() {
            self.phases.remove(index);
        }
    }

    pub fn add_channel(&mut self) {
        self.channels.push(GtmChannel::placeholder());
    }

    pub fn remove_channel(&mut self, index: usize) {
        if index < self.channels.len() {
            self.channels.remove(index);
        }
    }

    pub fn add_sales_stage(&mut self) {
        self.sales_process.push(SalesProcessStage::placeholder());
    }

    pub fn remove_sales_stage(&mut self, index: usize) {
        if index < self.sales_process.len() {
            self.sales_process.remove(index);
        }
    }

    pub fn add_partnership(&mut self) {
        self.partnerships.push(Partnership::placeholder());
    }

    pub fn remove_partnership(&mut self, index: usize) {
        if index < self.partnerships.len() {
            self.partnerships.remove(index);
        }
    }
}

/// Projections for a single year, selected by tab in the financial editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYear {
    pub revenue: String,
    pub clients: String,
    pub arr: String,
    pub margin: String,
    pub team: String,
    pub milestones: Vec<String>,
}

impl FinancialYear {
    pub fn add_milestone(&mut self) {
        self.milestones.push("New milestone".to_string());
    }

    pub fn remove_milestone(&mut self, index: usize) {
        if index < self.milestones.len() {
            self.milestones.remove(index);
        }
    }
}

/// Revenue share of one stream across the three projection years, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub stream: String,
    pub y1: u32,
    pub y2: u32,
    pub y3: u32,
}

impl RevenueBreakdown {
    pub fn placeholder() -> Self {
        Self {
            stream: "New Stream".to_string(),
            y1: 0,
            y2: 0,
            y3: 0,
        }
    }
}

/// One cost category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategory {
    pub category: String,
    pub percent: String,
}

impl CostCategory {
    pub fn placeholder() -> Self {
        Self {
            category: "New Category".to_string(),
            percent: String::new(),
        }
    }
}

/// A single use-of-funds line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingUse {
    pub r#use: String,
    pub amount: String,
}

impl FundingUse {
    pub fn placeholder() -> Self {
        Self {
            r#use: "New use of funds".to_string(),
            amount: String::new(),
        }
    }
}

/// Funding ask and its uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funding {
    pub amount: String,
    pub uses: Vec<FundingUse>,
}

impl Funding {
    pub fn add_use(&mut self) {
        self.uses.push(FundingUse::placeholder());
    }

    pub fn remove_use(&mut self, index: usize) {
        if index < self.uses.len() {
            self.uses.remove(index);
        }
    }
}

/// Headline financial metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    #[serde(rename = "currentARR")]
    pub current_arr: String,
    #[serde(rename = "projectedARR")]
    pub projected_arr: String,
    pub ltv: String,
}

/// Financial projections section. Years are keyed 1 through 3; the JSON
/// serialization uses string keys ("1", "2", "3") to match the export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSection {
    pub years: BTreeMap<u8, FinancialYear>,
    pub revenue_breakdown: Vec<RevenueBreakdown>,
    pub costs: Vec<CostCategory>,
    pub funding: Funding,
    pub key_metrics: KeyMetrics,
}

impl FinancialSection {
    pub fn add_revenue_breakdown(&mut self) {
        self.revenue_breakdown.push(RevenueBreakdown::placeholder());
    }

    pub fn remove_revenue_breakdown(&mut self, index: usize) {
        if index < self.revenue_breakdown.len() {
            self.revenue_breakdown.remove(index);
        }
    }

    pub fn add_cost(&mut self) {
        self.costs.push(CostCategory::placeholder());
    }

    pub fn remove_cost(&mut self, index: usize) {
        if index < self.costs.len() {
            self.costs.remove(index);
        }
    }
}

/// One launch-plan phase with its task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPhase {
    pub month: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

impl LaunchPhase {
    pub fn placeholder() -> Self {
        Self {
            month: "New Phase".to_string(),
            focus: String::new(),
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self) {
        self.tasks.push("New Task".to_string());
    }

    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }
}

/// One quarter column of the product roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapQuarter {
    pub quarter: String,
    pub items: Vec<String>,
}

impl RoadmapQuarter {
    pub fn placeholder() -> Self {
        Self {
            quarter: "New Quarter".to_string(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self) {
        self.items.push("New Item".to_string());
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }
}

/// Planned hires per year for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHires {
    pub y1: u32,
    pub y2: u32,
    pub y3: u32,
}

/// Hiring plan row for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBuildingDepartment {
    pub department: String,
    pub hires: TeamHires,
    pub key: Vec<String>,
}

impl TeamBuildingDepartment {
    pub fn placeholder() -> Self {
        Self {
            department: "New Dept.".to_string(),
            hires: TeamHires { y1: 0, y2: 0, y3: 0 },
            key: Vec::new(),
        }
    }
}

/// One key performance indicator row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub metric: String,
    pub target: String,
}

impl Kpi {
    pub fn placeholder() -> Self {
        Self {
            metric: "New KPI".to_string(),
            target: String::new(),
        }
    }
}

/// Roadmap and milestones section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSection {
    pub launch: Vec<LaunchPhase>,
    pub product_roadmap: Vec<RoadmapQuarter>,
    pub team_building: Vec<TeamBuildingDepartment>,
    pub kpis: Vec<Kpi>,
}

impl RoadmapSection {
    pub fn add_launch_phase(&mut self) {
        self.launch.push(LaunchPhase::placeholder());
    }

    pub fn remove_launch_phase(&mut self, index: usize) {
        if index < self.launch.len() {
            self.launch.remove(index);
        }
    }

    pub fn add_roadmap_quarter(&mut self) {
        self.product_roadmap.push(RoadmapQuarter::placeholder());
    }

    pub fn remove_roadmap_quarter(&mut self, index: usize) {
        if index < self.product_roadmap.len() {
            self.product_roadmap.remove(index);
        }
    }

    pub fn add_department(&mut self) {
        self.team_building
            .push(TeamBuildingDepartment::placeholder());
    }

    pub fn remove_department(&mut self, index: usize) {
        if index < self.team_building.len() {
            self.team_building.remove(index);
        }
    }

    pub fn add_kpi(&mut self) {
        self.kpis.push(Kpi::placeholder());
    }

    pub fn remove_kpi(&mut self, index: usize) {
        if index < self.kpis.len() {
            self.kpis.remove(index);
        }
    }
}

/// A risk with severity level and mitigation steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub risk: String,
    pub level: String,
    pub description: String,
    pub mitigation: Vec<String>,
}

impl Risk {
    pub fn placeholder() -> Self {
        Self {
            risk: "New Risk".to_string(),
            level: "Medium".to_string(),
            description: String::new(),
            mitigation: Vec::new(),
        }
    }

    pub fn add_mitigation(&mut self) {
        self.mitigation.push("New mitigation step".to_string());
    }

    pub fn remove_mitigation(&mut self, index: usize) {
        if index < self.mitigation.len() {
            self.mitigation.remove(index);
        }
    }
}

/// A key success factor card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFactor {
    pub factor: String,
    pub description: String,
}

impl SuccessFactor {
    pub fn placeholder() -> Self {
        Self {
            factor: "New Factor".to_string(),
            description: String::new(),
        }
    }
}

/// The complete business plan document. One instance lives in memory for the
/// lifetime of the application, is mutated synchronously by the section
/// editors, and is replaced wholesale by a successful import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlan {
    pub company_name: String,
    pub tagline: String,
    pub industry: String,
    pub target_valuation: String,
    pub executive: ExecutiveSection,
    pub opportunity: OpportunitySection,
    pub solution: SolutionSection,
    pub business: BusinessSection,
    pub gtm: GtmSection,
    pub financial: FinancialSection,
    pub roadmap: RoadmapSection,
    pub risks: Vec<Risk>,
    pub success_factors: Vec<SuccessFactor>,
}

impl BusinessPlan {
    pub fn add_risk(&mut self) {
        self.risks.push(Risk::placeholder());
    }

    pub fn remove_risk(&mut self, index: usize) {
        if index < self.risks.len() {
            self.risks.remove(index);
        }
    }

    pub fn add_success_factor(&mut self) {
        self.success_factors.push(SuccessFactor::placeholder());
    }

    pub fn remove_success_factor(&mut self, index: usize) {
        if index < self.success_factors.len() {
            self.success_factors.remove(index);
        }
    }

    /// Save the plan to a specific file path as pretty-printed JSON.
    pub fn save_to_path(&self, file_path: &Path) -> Result<()> {
        let json_content = serde_json::to_string_pretty(self)?;
        std::fs::write(file_path, json_content)?;
        tracing::info!("Plan saved to {}", file_path.display());
        Ok(())
    }

    /// Load a plan from a specific file path. On any error (missing file,
    /// malformed JSON, wrong shape) the caller keeps its current document.
    pub fn load_from_file(file_path: &Path) -> Result<BusinessPlan> {
        let content = std::fs::read_to_string(file_path)?;
        let plan: BusinessPlan = serde_json::from_str(&content)?;
        tracing::info!("Plan loaded from {}", file_path.display());
        Ok(plan)
    }
}

impl Default for BusinessPlan {
    /// The sample plan shown on first launch.
    fn default() -> Self {
        let mut years = BTreeMap::new();
        years.insert(
            1,
            FinancialYear {
                revenue: "$500K".to_string(),
                clients: "50".to_string(),
                arr: "$400K".to_string(),
                margin: "60%".to_string(),
                team: "Founders + Contractors".to_string(),
                milestones: vec![
                    "Launch MVP to first paying customers".to_string(),
                    "Reach 50 active workspaces".to_string(),
                    "Hire founding engineer".to_string(),
                ],
            },
        );
        years.insert(
            2,
            FinancialYear {
                revenue: "$2M".to_string(),
                clients: "200".to_string(),
                arr: "$1.8M".to_string(),
                margin: "70%".to_string(),
                team: "8-12".to_string(),
                milestones: vec![
                    "Launch self-serve onboarding".to_string(),
                    "Expand to mid-market accounts".to_string(),
                    "Open partner integration program".to_string(),
                ],
            },
        );
        years.insert(
            3,
            FinancialYear {
                revenue: "$5M".to_string(),
                clients: "500".to_string(),
                arr: "$4.5M".to_string(),
                margin: "75%".to_string(),
                team: "20-30".to_string(),
                milestones: vec![
                    "International expansion".to_string(),
                    "Enterprise tier launch".to_string(),
                    "Series A readiness".to_string(),
                ],
            },
        );

        Self {
            company_name: "Northwind Analytics".to_string(),
            tagline: "Operational intelligence for growing teams".to_string(),
            industry: "B2B SaaS / Analytics".to_string(),
            target_valuation: "$20M-$40M".to_string(),

            executive: ExecutiveSection {
                market_size: "$50B".to_string(),
                year_three_revenue: "$5M".to_string(),
                unique_value: "Insight without analysts".to_string(),
                problems: vec![
                    ProblemStatement {
                        title: "Data locked in silos".to_string(),
                        description: "Operational data is spread across tools that do not talk to each other.".to_string(),
                    },
                    ProblemStatement {
                        title: "Analysts are a bottleneck".to_string(),
                        description: "Small teams cannot afford dedicated data staff for routine questions.".to_string(),
                    },
                ],
                solution: "A self-serve analytics workspace that connects the tools a team already uses and answers operational questions in plain language.".to_string(),
                advantages: vec![
                    UnfairAdvantage {
                        metric: "10x faster setup".to_string(),
                        description: "Connect and query in under an hour, no warehouse required.".to_string(),
                    },
                    UnfairAdvantage {
                        metric: "Zero analyst headcount".to_string(),
                        description: "Plain-language querying removes the specialist dependency.".to_string(),
                    },
                ],
            },

            opportunity: OpportunitySection {
                market_size: "$50B".to_string(),
                market_growth: "12% CAGR".to_string(),
                target_percent: "SMB + Mid-market".to_string(),
                target_description: "Operations-heavy teams of 20-500 people without dedicated data staff".to_string(),
                growth_drivers: vec![
                    "Tool sprawl in growing companies".to_string(),
                    "Falling cost of managed data infrastructure".to_string(),
                    "Plain-language interfaces going mainstream".to_string(),
                ],
                customer_segments: vec![
                    CustomerSegment {
                        segment: "Mid-market operations teams".to_string(),
                        size: "200K companies".to_string(),
                        arr: "$12K-$40K".to_string(),
                        priority: "Primary".to_string(),
                    },
                    CustomerSegment {
                        segment: "SMB founders".to_string(),
                        size: "2M companies".to_string(),
                        arr: "$1.2K-$6K".to_string(),
                        priority: "Secondary".to_string(),
                    },
                ],
                competitive_advantages: vec![
                    CompetitiveAdvantage {
                        feature: "No warehouse required".to_string(),
                        us: true,
                        competitor1: false,
                        competitor2: false,
                    },
                    CompetitiveAdvantage {
                        feature: "Plain-language queries".to_string(),
                        us: true,
                        competitor1: true,
                        competitor2: false,
                    },
                    CompetitiveAdvantage {
                        feature: "Setup under one hour".to_string(),
                        us: true,
                        competitor1: false,
                        competitor2: true,
                    },
                ],
            },

            solution: SolutionSection {
                description: "Northwind connects directly to the SaaS tools a team already runs, builds a live operational model, and lets anyone ask questions against it.".to_string(),
                features: vec![
                    SolutionFeature {
                        name: "1. Connectors".to_string(),
                        description: "One-click integrations for common operational tools.".to_string(),
                        capabilities: vec![
                            "CRM, billing, and support sources".to_string(),
                            "Incremental sync".to_string(),
                            "No warehouse needed".to_string(),
                        ],
                        revenue: "Included".to_string(),
                    },
                    SolutionFeature {
                        name: "2. Workspace".to_string(),
                        description: "Shared dashboards and plain-language querying.".to_string(),
                        capabilities: vec![
                            "Saved questions".to_string(),
                            "Scheduled digests".to_string(),
                            "Role-based sharing".to_string(),
                        ],
                        revenue: "$99-$499/mo".to_string(),
                    },
                ],
                tech_stack: vec![
                    TechStackLayer {
                        layer: "Ingestion".to_string(),
                        technologies: vec![
                            "Managed connectors".to_string(),
                            "Change data capture".to_string(),
                        ],
                    },
                    TechStackLayer {
                        layer: "Query".to_string(),
                        technologies: vec![
                            "Embedded columnar engine".to_string(),
                            "Semantic layer".to_string(),
                        ],
                    },
                ],
            },

            business: BusinessSection {
                revenue_streams: vec![
                    RevenueStream {
                        stream: "Workspace subscriptions".to_string(),
                        model: "Per-workspace SaaS".to_string(),
                        pricing: "$99-$499/mo".to_string(),
                        margin: "High".to_string(),
                        split: "Core".to_string(),
                    },
                    RevenueStream {
                        stream: "Enterprise tier".to_string(),
                        model: "Annual contract".to_string(),
                        pricing: "$30K+/yr".to_string(),
                        margin: "High".to_string(),
                        split: "Expansion".to_string(),
                    },
                ],
                pricing_tiers: vec![
                    PricingTier {
                        tier: "Starter".to_string(),
                        price: "$99/mo".to_string(),
                        target: "SMB".to_string(),
                        includes: vec![
                            "3 connectors".to_string(),
                            "5 seats".to_string(),
                        ],
                    },
                    PricingTier {
                        tier: "Growth".to_string(),
                        price: "$499/mo".to_string(),
                        target: "Mid-market".to_string(),
                        includes: vec![
                            "Unlimited connectors".to_string(),
                            "25 seats".to_string(),
                            "Scheduled digests".to_string(),
                        ],
                    },
                ],
                unit_economics: UnitEconomics {
                    arr: "$4.5M by Y3".to_string(),
                    cac: "$1.5K".to_string(),
                    ltv: "$18K".to_string(),
                    payback: "6 months".to_string(),
                },
            },

            gtm: GtmSection {
                phases: vec![
                    GtmPhase {
                        name: "Design partners".to_string(),
                        duration: "Months 1-4".to_string(),
                        target: "10 operations teams".to_string(),
                        channels: "Founder network".to_string(),
                        offer: "Free pilot".to_string(),
                        focus: "Prove the setup-to-insight time claim with real workloads.".to_string(),
                    },
                    GtmPhase {
                        name: "Self-serve launch".to_string(),
                        duration: "Months 5-12".to_string(),
                        target: "SMB".to_string(),
                        channels: "Content + integrations marketplace".to_string(),
                        offer: "14-day trial".to_string(),
                        focus: "Convert marketplace traffic into paying workspaces.".to_string(),
                    },
                ],
                channels: vec![
                    GtmChannel {
                        channel: "Integration marketplaces".to_string(),
                        investment: "Listing + co-marketing".to_string(),
                        roi: "High".to_string(),
                        timeframe: "3-6 months".to_string(),
                    },
                    GtmChannel {
                        channel: "SEO / content".to_string(),
                        investment: "2 posts per week".to_string(),
                        roi: "Medium".to_string(),
                        timeframe: "6-12 months".to_string(),
                    },
                ],
                sales_process: vec![
                    SalesProcessStage {
                        stage: "Trial signup".to_string(),
                        duration: "Day 0".to_string(),
                        conversion: "100%".to_string(),
                    },
                    SalesProcessStage {
                        stage: "First connector live".to_string(),
                        duration: "Day 1".to_string(),
                        conversion: "60%".to_string(),
                    },
                    SalesProcessStage {
                        stage: "Paid conversion".to_string(),
                        duration: "Day 14".to_string(),
                        conversion: "20%".to_string(),
                    },
                ],
                partnerships: vec![
                    Partnership {
                        partner: "CRM platform marketplace".to_string(),
                        value: "Distribution to installed base".to_string(),
                        kind: "Channel".to_string(),
                    },
                ],
            },

            financial: FinancialSection {
                years,
                revenue_breakdown: vec![
                    RevenueBreakdown {
                        stream: "Subscriptions".to_string(),
                        y1: 90,
                        y2: 75,
                        y3: 60,
                    },
                    RevenueBreakdown {
                        stream: "Enterprise".to_string(),
                        y1: 10,
                        y2: 25,
                        y3: 40,
                    },
                ],
                costs: vec![
                    CostCategory {
                        category: "Engineering".to_string(),
                        percent: "45%".to_string(),
                    },
                    CostCategory {
                        category: "Sales & Marketing".to_string(),
                        percent: "30%".to_string(),
                    },
                    CostCategory {
                        category: "Infrastructure".to_string(),
                        percent: "15%".to_string(),
                    },
                ],
                funding: Funding {
                    amount: "$1.5M seed".to_string(),
                    uses: vec![
                        FundingUse {
                            r#use: "Engineering (connectors + query engine)".to_string(),
                            amount: "50%".to_string(),
                        },
                        FundingUse {
                            r#use: "Go-to-market".to_string(),
                            amount: "35%".to_string(),
                        },
                        FundingUse {
                            r#use: "Operations".to_string(),
                            amount: "15%".to_string(),
                        },
                    ],
                },
                key_metrics: KeyMetrics {
                    current_arr: "$0 (Pre-launch)".to_string(),
                    projected_arr: "$4.5M".to_string(),
                    ltv: "$18K".to_string(),
                },
            },

            roadmap: RoadmapSection {
                launch: vec![
                    LaunchPhase {
                        month: "Phase 1: Foundation (Next 90 days)".to_string(),
                        focus: "Design partners live on core connectors".to_string(),
                        tasks: vec![
                            "Ship CRM and billing connectors".to_string(),
                            "Onboard 10 design partners".to_string(),
                            "Instrument setup-to-insight time".to_string(),
                        ],
                    },
                    LaunchPhase {
                        month: "Phase 2: Launch (Months 4-9)".to_string(),
                        focus: "Self-serve signup and billing".to_string(),
                        tasks: vec![
                            "Public launch on integration marketplaces".to_string(),
                            "Automated onboarding flow".to_string(),
                            "Usage-based alerting".to_string(),
                        ],
                    },
                ],
                product_roadmap: vec![
                    RoadmapQuarter {
                        quarter: "Q1".to_string(),
                        items: vec![
                            "Core connectors".to_string(),
                            "Workspace sharing".to_string(),
                        ],
                    },
                    RoadmapQuarter {
                        quarter: "Q2".to_string(),
                        items: vec![
                            "Self-serve billing".to_string(),
                            "Scheduled digests".to_string(),
                        ],
                    },
                    RoadmapQuarter {
                        quarter: "Q3+".to_string(),
                        items: vec![
                            "Enterprise controls".to_string(),
                            "Partner API".to_string(),
                        ],
                    },
                ],
                team_building: vec![
                    TeamBuildingDepartment {
                        department: "Engineering".to_string(),
                        hires: TeamHires { y1: 2, y2: 5, y3: 10 },
                        key: vec!["Founding engineer".to_string(), "Connector lead".to_string()],
                    },
                    TeamBuildingDepartment {
                        department: "Go-to-market".to_string(),
                        hires: TeamHires { y1: 0, y2: 3, y3: 6 },
                        key: vec!["Growth lead".to_string()],
                    },
                ],
                kpis: vec![
                    Kpi {
                        metric: "Setup-to-insight time".to_string(),
                        target: "< 1 hour".to_string(),
                    },
                    Kpi {
                        metric: "Net revenue retention".to_string(),
                        target: "> 110%".to_string(),
                    },
                    Kpi {
                        metric: "Trial-to-paid conversion".to_string(),
                        target: "> 15%".to_string(),
                    },
                ],
            },

            risks: vec![
                Risk {
                    risk: "Platform dependency".to_string(),
                    level: "Medium".to_string(),
                    description: "Connector access depends on third-party platform APIs and their terms.".to_string(),
                    mitigation: vec![
                        "Spread coverage across many source platforms".to_string(),
                        "Maintain certified partner status on key marketplaces".to_string(),
                    ],
                },
                Risk {
                    risk: "Incumbent response".to_string(),
                    level: "High".to_string(),
                    description: "BI incumbents could ship lightweight self-serve tiers aimed at the same buyer.".to_string(),
                    mitigation: vec![
                        "Win on setup time and operational focus".to_string(),
                        "Build switching costs through saved questions and digests".to_string(),
                    ],
                },
            ],

            success_factors: vec![
                SuccessFactor {
                    factor: "Time to first insight".to_string(),
                    description: "The entire wedge depends on setup being dramatically faster than alternatives.".to_string(),
                },
                SuccessFactor {
                    factor: "Connector coverage".to_string(),
                    description: "Breadth of supported tools determines the addressable market.".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_three_projection_years() {
        let plan = BusinessPlan::default();
        assert_eq!(plan.financial.years.len(), 3);
        assert!(plan.financial.years.contains_key(&1));
        assert!(plan.financial.years.contains_key(&3));
    }

    #[test]
    fn years_serialize_with_string_keys() {
        let plan = BusinessPlan::default();
        let value = serde_json::to_value(&plan).unwrap();
        assert!(value["financial"]["years"]["1"]["revenue"].is_string());
    }

    #[test]
    fn partnership_type_field_round_trips() {
        let p = Partnership {
            partner: "Acme".to_string(),
            value: "Distribution".to_string(),
            kind: "Channel".to_string(),
        };
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["type"], "Channel");
        let back: Partnership = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }
}
