use shared::BudgetCategory;

use super::palette::{color_at, SEGMENT_PALETTE};

/// One category's share of the chart, ready for either renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub title: String,
    pub value: f64,
    pub color: &'static str,
}

/// Build chart segments from budget categories.
///
/// Output order and length match the input. Colors are assigned by input
/// position from the shared palette, so both renderers agree on which color
/// represents which category. Negative or non-finite budgets are clamped to
/// zero before they can reach any geometry.
pub fn build_segments(categories: &[BudgetCategory]) -> Vec<ChartSegment> {
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| ChartSegment {
            title: category.title.clone(),
            value: sanitize(category.budget),
            color: color_at(SEGMENT_PALETTE, index),
        })
        .collect()
}

fn sanitize(budget: f64) -> f64 {
    if budget.is_finite() && budget > 0.0 {
        budget
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str, budget: f64) -> BudgetCategory {
        BudgetCategory {
            title: title.to_string(),
            budget,
        }
    }

    #[test]
    fn preserves_input_order_and_length() {
        let categories = vec![
            category("Rent", 1200.0),
            category("Groceries", 450.0),
            category("Fun", 100.0),
        ];

        let segments = build_segments(&categories);

        assert_eq!(segments.len(), categories.len());
        for (segment, category) in segments.iter().zip(&categories) {
            assert_eq!(segment.title, category.title);
            assert_eq!(segment.value, category.budget);
        }
    }

    #[test]
    fn is_deterministic() {
        let categories = vec![category("A", 1.0), category("B", 2.0)];
        assert_eq!(build_segments(&categories), build_segments(&categories));
    }

    #[test]
    fn assigns_palette_colors_by_position() {
        let categories: Vec<BudgetCategory> = (0..8)
            .map(|i| category(&format!("Category {i}"), 10.0))
            .collect();

        let segments = build_segments(&categories);

        assert_eq!(segments[0].color, SEGMENT_PALETTE[0]);
        assert_eq!(segments[5].color, SEGMENT_PALETTE[5]);
        // The seventh category wraps around to the first color.
        assert_eq!(segments[6].color, SEGMENT_PALETTE[0]);
        assert_eq!(segments[7].color, SEGMENT_PALETTE[1]);
    }

    #[test]
    fn clamps_negative_and_non_finite_budgets_to_zero() {
        let categories = vec![
            category("Negative", -50.0),
            category("NaN", f64::NAN),
            category("Infinite", f64::INFINITY),
            category("Normal", 75.0),
        ];

        let segments = build_segments(&categories);

        assert_eq!(segments[0].value, 0.0);
        assert_eq!(segments[1].value, 0.0);
        assert_eq!(segments[2].value, 0.0);
        assert_eq!(segments[3].value, 75.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(build_segments(&[]).is_empty());
    }
}
