use serde::{Deserialize, Serialize};

/// One budget category as returned by the budget service.
///
/// The service responds to `GET /budget` with a JSON array of these records.
/// Array order is significant: the dashboard renders categories in exactly
/// the order they arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name, unique within one dashboard load
    pub title: String,
    /// Allocated amount for the category (expected non-negative)
    pub budget: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_budget_payload_in_order() {
        let payload = r#"[
            {"title": "Groceries", "budget": 450.0},
            {"title": "Rent", "budget": 1200.0},
            {"title": "Utilities", "budget": 180.5}
        ]"#;

        let categories: Vec<BudgetCategory> = serde_json::from_str(payload).unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].title, "Groceries");
        assert_eq!(categories[1].title, "Rent");
        assert_eq!(categories[2].budget, 180.5);
    }

    #[test]
    fn rejects_records_missing_required_fields() {
        let missing_budget = r#"[{"title": "Groceries"}]"#;
        assert!(serde_json::from_str::<Vec<BudgetCategory>>(missing_budget).is_err());

        let missing_title = r#"[{"budget": 450.0}]"#;
        assert!(serde_json::from_str::<Vec<BudgetCategory>>(missing_title).is_err());
    }

    #[test]
    fn tolerates_extra_fields_in_payload() {
        let payload = r#"[{"title": "Groceries", "budget": 450.0, "id": 7, "owner": "me"}]"#;
        let categories: Vec<BudgetCategory> = serde_json::from_str(payload).unwrap();
        assert_eq!(categories[0].title, "Groceries");
        assert_eq!(categories[0].budget, 450.0);
    }

    #[test]
    fn parses_empty_payload() {
        let categories: Vec<BudgetCategory> = serde_json::from_str("[]").unwrap();
        assert!(categories.is_empty());
    }
}
