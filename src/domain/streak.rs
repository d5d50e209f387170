/// Streak accounting
///
/// The authoritative streak is an incremental counter driven by check-in
/// events in the order they happen. It is never recomputed from history:
/// flipping an old date only moves the counter by the rule below.
///
/// `trailing_run` and `longest_run` recompute runs of completed days from the
/// history map. They are reported next to the counter as an alternate view
/// and must not be used to overwrite it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Apply one check-in event to a streak counter
///
/// A completed check-in extends the streak by one, anything else resets it.
pub fn next_streak(current: u32, completed: bool) -> u32 {
    if completed {
        current.saturating_add(1)
    } else {
        0
    }
}

/// Count consecutive completed days ending at `as_of`
///
/// If `as_of` itself has no record yet the count starts from the day before,
/// so a streak isn't shown as broken before today's check-in happens.
pub fn trailing_run(history: &BTreeMap<NaiveDate, bool>, as_of: NaiveDate) -> u32 {
    let start = if history.contains_key(&as_of) {
        Some(as_of)
    } else {
        as_of.pred_opt()
    };
    let Some(mut checking_date) = start else {
        return 0;
    };

    let mut run = 0;
    while history.get(&checking_date).copied().unwrap_or(false) {
        run += 1;
        checking_date = match checking_date.pred_opt() {
            Some(date) => date,
            None => break,
        };
    }
    run
}

/// Longest run of consecutive completed days anywhere in the history
pub fn longest_run(history: &BTreeMap<NaiveDate, bool>) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for (&date, &completed) in history {
        if !completed {
            current = 0;
        } else if previous.and_then(|p| p.succ_opt()) == Some(date) && current > 0 {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}
