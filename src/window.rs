//! Finds the run of consecutive weeks with the lowest total.

use crate::types::weekly::WeekValue;
use serde::Serialize;

pub const DEFAULT_WINDOW: usize = 2;

/// The winning window: ISO week of its first and last row, and the summed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekWindow {
    pub first_week: u32,
    pub last_week: u32,
    pub total: f64,
}

/// Scans every run of `window` adjacent rows and returns the one with the smallest sum.
///
/// Rows must already be ordered by week. Sums are compared with a strict `<`, so among equal
/// sums the earliest window wins. Windows whose sum is NaN never win.
///
/// Returns `None` when `window` is zero or longer than `rows`.
///
/// # Examples
///
/// ```
/// use rain_window::{find_min_window, WeekNormal};
///
/// let rows = [
///     WeekNormal { iso_week: 30, value: 5.0 },
///     WeekNormal { iso_week: 31, value: 1.0 },
///     WeekNormal { iso_week: 32, value: 1.0 },
///     WeekNormal { iso_week: 33, value: 9.0 },
/// ];
/// let best = find_min_window(&rows, 2).unwrap();
/// assert_eq!((best.first_week, best.last_week), (31, 32));
/// ```
pub fn find_min_window<T: WeekValue>(rows: &[T], window: usize) -> Option<WeekWindow> {
    if window == 0 || rows.len() < window {
        return None;
    }

    let mut min_total = f64::INFINITY;
    let mut best = None;
    for (start, run) in rows.windows(window).enumerate() {
        let total: f64 = run.iter().map(WeekValue::value).sum();
        if total < min_total {
            min_total = total;
            best = Some(start);
        }
    }

    best.map(|start| WeekWindow {
        first_week: rows[start].iso_week(),
        last_week: rows[start + window - 1].iso_week(),
        total: min_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weekly::WeekNormal;

    fn rows(values: &[(u32, f64)]) -> Vec<WeekNormal> {
        values
            .iter()
            .map(|&(iso_week, value)| WeekNormal { iso_week, value })
            .collect()
    }

    #[test]
    fn strict_minimum() {
        let table = rows(&[(30, 5.0), (31, 1.0), (32, 1.0), (33, 9.0)]);
        assert_eq!(
            find_min_window(&table, DEFAULT_WINDOW),
            Some(WeekWindow {
                first_week: 31,
                last_week: 32,
                total: 2.0
            })
        );
    }

    #[test]
    fn earliest_window_wins_ties() {
        let table = rows(&[(30, 2.0), (31, 2.0), (32, 4.0), (33, 2.0), (34, 2.0)]);
        let best = find_min_window(&table, 2).unwrap();
        assert_eq!((best.first_week, best.last_week), (30, 31));
        assert_eq!(best.total, 4.0);
    }

    #[test]
    fn last_window_is_considered() {
        let table = rows(&[(30, 3.0), (31, 3.0), (32, 3.0), (33, 0.5), (34, 0.5)]);
        let best = find_min_window(&table, 2).unwrap();
        assert_eq!((best.first_week, best.last_week), (33, 34));
    }

    #[test]
    fn wider_windows() {
        let table = rows(&[(30, 1.0), (31, 9.0), (32, 0.0), (33, 0.0), (34, 0.5), (35, 7.0)]);
        let best = find_min_window(&table, 3).unwrap();
        assert_eq!((best.first_week, best.last_week), (32, 34));
        assert_eq!(best.total, 0.5);

        let whole = find_min_window(&table, table.len()).unwrap();
        assert_eq!((whole.first_week, whole.last_week), (30, 35));
    }

    #[test]
    fn window_of_one_picks_the_single_driest_week() {
        let table = rows(&[(40, 0.3), (41, 0.1), (42, 0.1)]);
        let best = find_min_window(&table, 1).unwrap();
        assert_eq!((best.first_week, best.last_week), (41, 41));
    }

    #[test]
    fn last_week_comes_from_the_row_not_arithmetic() {
        // Week 32 is missing from the table.
        let table = rows(&[(30, 4.0), (31, 0.0), (33, 0.0), (34, 4.0)]);
        let best = find_min_window(&table, 2).unwrap();
        assert_eq!((best.first_week, best.last_week), (31, 33));
    }

    #[test]
    fn too_few_rows_or_empty_window() {
        let table = rows(&[(30, 1.0)]);
        assert_eq!(find_min_window(&table, 2), None);
        assert_eq!(find_min_window(&table, 0), None);
        assert_eq!(find_min_window::<WeekNormal>(&[], 1), None);
    }

    #[test]
    fn nan_sums_never_win() {
        let table = rows(&[(30, f64::NAN), (31, 1.0), (32, 1.0)]);
        let best = find_min_window(&table, 2).unwrap();
        assert_eq!((best.first_week, best.last_week), (31, 32));

        let all_nan = rows(&[(30, f64::NAN), (31, f64::NAN)]);
        assert_eq!(find_min_window(&all_nan, 2), None);
    }
}
