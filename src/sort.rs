//! Column Sorting
//!
//! Ordering for the rendered table rows. A click sorts ascending; when the rows
//! are already ascending (no swaps needed) the same click sorts descending.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Compare two cell texts: numerically when both parse, otherwise case-insensitively
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Adjacent-swap passes over `order` until a pass makes no swap.
/// Returns the number of swaps made.
fn bubble_sort(order: &mut [usize], cells: &[String], direction: SortDirection) -> usize {
    let out_of_order = |a: usize, b: usize| {
        let ord = compare_cells(&cells[a], &cells[b]);
        match direction {
            SortDirection::Ascending => ord == Ordering::Greater,
            SortDirection::Descending => ord == Ordering::Less,
        }
    };

    let mut swaps = 0;
    loop {
        let mut switched = false;
        for i in 1..order.len() {
            if out_of_order(order[i - 1], order[i]) {
                order.swap(i - 1, i);
                switched = true;
                swaps += 1;
            }
        }
        if !switched {
            return swaps;
        }
    }
}

/// New row order for the given column texts (current display order) and the
/// direction that was applied
pub fn toggle_sort(cells: &[String]) -> (Vec<usize>, SortDirection) {
    let mut order: Vec<usize> = (0..cells.len()).collect();
    if bubble_sort(&mut order, cells, SortDirection::Ascending) > 0 {
        return (order, SortDirection::Ascending);
    }
    bubble_sort(&mut order, cells, SortDirection::Descending);
    (order, SortDirection::Descending)
}
