//! Prompt assembly for the Ask AI window.
//!
//! The assistant answers questions about the plan from the full serialized
//! document plus a block of supplementary notes, so the model sees the exact
//! state being edited rather than a summary of it.

use crate::app::plan::BusinessPlan;
use anyhow::Result;

/// Supplementary notes appended to every Ask AI prompt. Kept alongside the
/// plan rather than inside it so the document export stays clean.
pub const REFERENCE_NOTES: &str = "\
- The company is pre-revenue; all financial figures are projections.
- Pricing figures assume annual billing unless a row says otherwise.
- Competitor columns in the comparison table refer to the two closest \
incumbent products in the category.
- Hiring counts in the roadmap are cumulative new hires per year, not \
total headcount.";

/// Build the analyst prompt for a free-form question: fixed preamble, the
/// plan serialized as pretty JSON, the supplementary notes, then the question.
pub fn ask_ai_prompt(plan: &BusinessPlan, query: &str) -> Result<String> {
    let plan_json = serde_json::to_string_pretty(plan)?;
    Ok(format!(
        "You are an expert business analyst AI. Your task is to answer questions about a business plan.\n\
         You will be given the full business plan in JSON format, along with supplementary documents for context.\n\
         Analyze all the provided information to give a comprehensive and insightful answer to the user's question.\n\
         Format your response using Markdown for better readability.\n\
         \n\
         BUSINESS PLAN (JSON):\n\
         {plan_json}\n\
         \n\
         SUPPLEMENTARY DOCUMENTS:\n\
         {REFERENCE_NOTES}\n\
         \n\
         USER'S QUESTION:\n\
         {query}\n"
    ))
}

/// Starter questions offered as one-click suggestions in the Ask AI window.
pub const STARTER_QUESTIONS: &[&str] = &[
    "How do I calculate my TAM?",
    "What should my profit margins be?",
    "Help me write my executive summary",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_plan_and_question() {
        let plan = BusinessPlan::default();
        let prompt = ask_ai_prompt(&plan, "What is my biggest risk?").unwrap();
        assert!(prompt.contains("BUSINESS PLAN (JSON):"));
        assert!(prompt.contains(&plan.company_name));
        assert!(prompt.contains("SUPPLEMENTARY DOCUMENTS:"));
        assert!(prompt.ends_with("What is my biggest risk?\n"));
    }
}
