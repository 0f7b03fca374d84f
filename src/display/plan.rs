//! Plan display formatting

use crate::models::{Category, Plan};

/// Confirmation shown after a plan is saved
pub fn format_plan_saved(plan: &Plan, categories: &[Category]) -> String {
    let mut output = String::new();

    output.push_str("Allowance plan saved:\n");
    output.push_str(&format!("  Income: {}\n", plan.income()));

    for category in categories {
        output.push_str(&format!(
            "  {:<8}: {}\n",
            category.title(),
            plan.category_amount(category)
        ));
    }

    let unallocated = plan.unallocated();
    if unallocated.value() > 0.0 && !unallocated.is_zero() {
        output.push_str(&format!("  Unallocated: {}\n", unallocated));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_plan_saved() {
        let allocation: BTreeMap<_, _> = [
            (Category::Save, Amount::new(5.0)),
            (Category::Spend, Amount::new(10.0)),
        ]
        .into_iter()
        .collect();
        let plan = Plan::new(Amount::new(20.0), allocation).unwrap();

        let text = format_plan_saved(&plan, &[Category::Save, Category::Spend]);
        assert_eq!(
            text,
            "Allowance plan saved:\n  Income: 20.00\n  Save    : 5.00\n  Spend   : 10.00\n  Unallocated: 5.00\n"
        );
    }

    #[test]
    fn test_fully_allocated_has_no_unallocated_line() {
        let allocation: BTreeMap<_, _> = [(Category::Need, Amount::new(3.0))].into_iter().collect();
        let plan = Plan::new(Amount::new(3.0), allocation).unwrap();

        let text = format_plan_saved(&plan, &[Category::Need]);
        assert!(!text.contains("Unallocated"));
    }
}
