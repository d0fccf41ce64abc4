//! Per-category spend summary and amount formatting.

use std::collections::HashMap;

use crate::model::Expense;

/// aggregated spend for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub total: f64,
}

/// group expenses by category and sum their amounts, largest total first
///
/// categories with equal totals keep the order in which they first appear
/// in `expenses`.
pub fn compute_summary(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut summary: Vec<CategorySummary> = Vec::new();
    // category -> position in `summary`
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&i) => summary[i].total += expense.amount,
            None => {
                index.insert(&expense.category, summary.len());
                summary.push(CategorySummary {
                    category: expense.category.clone(),
                    total: expense.amount,
                });
            }
        }
    }

    summary.sort_by(|a, b| b.total.total_cmp(&a.total));
    summary
}

/// render an amount with exactly two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> Expense {
        Expense {
            id: format!("{category}-{amount}"),
            amount,
            category: category.to_string(),
            description: String::new(),
            date: "2024-01-01".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_summary_sorted_by_descending_total() {
        let expenses = vec![
            expense("A", 30.0),
            expense("B", 10.0),
            expense("C", 20.0),
        ];
        let order: Vec<_> = compute_summary(&expenses)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_summary_groups_and_sums() {
        let expenses = vec![
            expense("food", 12.5),
            expense("bus", 2.25),
            expense("food", 7.5),
        ];
        let summary = compute_summary(&expenses);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "food");
        assert!((summary[0].total - 20.0).abs() < 1e-9);
        assert!((summary[1].total - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_summary_ties_keep_first_seen_order() {
        let expenses = vec![expense("x", 5.0), expense("y", 5.0), expense("z", 5.0)];
        let order: Vec<_> = compute_summary(&expenses)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_summary_totals_match_list_total() {
        let expenses = vec![
            expense("food", 0.1),
            expense("rent", 950.0),
            expense("food", 0.2),
            expense("fun", 33.33),
        ];
        let list_total: f64 = expenses.iter().map(|e| e.amount).sum();
        let summary_total: f64 = compute_summary(&expenses).iter().map(|s| s.total).sum();
        assert!((list_total - summary_total).abs() < 1e-6);
    }

    #[test]
    fn test_interleaved_categories_accumulate() {
        let expenses: Vec<_> = (0..300)
            .map(|i| expense(&format!("cat{}", i % 100), 1.0))
            .collect();
        let summary = compute_summary(&expenses);
        assert_eq!(summary.len(), 100);
        assert!(summary.iter().all(|s| (s.total - 3.0).abs() < 1e-9));
        // equal totals, so first-seen order survives the sort
        assert_eq!(summary[0].category, "cat0");
        assert_eq!(summary[99].category, "cat99");
    }

    #[test]
    fn test_empty_summary() {
        assert!(compute_summary(&[]).is_empty());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.0), "1234.00");
        assert_eq!(format_amount(1.234), "1.23");
    }
}
