use chrono::{Datelike, NaiveDate};

/// Builds the cell sequence for a month view: one leading `None` per
/// weekday before the 1st (Sunday-first weeks), then every day of the
/// month in order. No trailing padding; the renderer lays the cells
/// out in a 7-column grid and a short last row is fine.
///
/// Only the year and month of `reference` matter.
pub fn month_grid(reference: NaiveDate) -> Vec<Option<NaiveDate>> {
    let year = reference.year();
    let month = reference.month();
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(reference);

    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.resize(leading, None);
    for day in 1..=days {
        cells.push(NaiveDate::from_ymd_opt(year, month, day));
    }
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn grid_for(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
        month_grid(NaiveDate::from_ymd_opt(year, month, 15).unwrap())
    }

    #[test]
    fn leading_padding_matches_weekday_of_first_day() {
        // 2024-01-01 is a Monday → one empty cell before it.
        let grid = grid_for(2024, 1);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 1);
        assert_eq!(grid.len(), 1 + 31);
    }

    #[test]
    fn month_starting_on_sunday_has_no_padding() {
        // 2024-09-01 is a Sunday.
        let grid = grid_for(2024, 9);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 9, 1));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn month_starting_on_saturday_has_six_empty_cells() {
        // 2024-06-01 is a Saturday.
        let grid = grid_for(2024, 6);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 6);
        assert_eq!(grid.len(), 6 + 30);
    }

    #[test]
    fn february_leap_year_has_29_day_cells() {
        let grid = grid_for(2024, 2);
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 29);
    }

    #[test]
    fn february_non_leap_year_has_28_day_cells() {
        let grid = grid_for(2023, 2);
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 28);
    }

    #[test]
    fn day_cells_are_consecutive_and_ascending() {
        let grid = grid_for(2024, 3);
        let days: Vec<NaiveDate> = grid.into_iter().flatten().collect();
        assert_eq!(days.first().map(|d| d.day()), Some(1));
        assert_eq!(days.last().map(|d| d.day()), Some(31));
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn any_day_of_the_month_produces_the_same_grid() {
        let from_first = month_grid(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        let from_last = month_grid(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
        assert_eq!(from_first, from_last);
    }

    #[test]
    fn grid_length_is_padding_plus_days_for_a_whole_year() {
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(2026, month, 1).unwrap();
            let grid = month_grid(first);
            let leading = first.weekday().num_days_from_sunday() as usize;
            assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), leading);
            assert!(grid[leading..].iter().all(|c| c.is_some()));
        }
        // Spot-check the weekday convention itself.
        assert_eq!(
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().weekday(),
            Weekday::Sun
        );
    }
}
