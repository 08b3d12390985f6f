//! Streak and completion rules for habits.
//!
//! Everything here is a pure function of a habit's completion timestamps and
//! the clock. Dates are compared as local calendar days, so 23:55 and 00:05
//! are different days while 08:00 and 21:00 are the same one.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use super::types::Habit;
use crate::clock::Clock;

/// True if any completion falls on today's local date.
pub fn is_completed_today(completed: &[DateTime<Utc>], clock: &dyn Clock) -> bool {
    let today = clock.today();
    completed.iter().any(|d| clock.local_date(*d) == today)
}

/// Number of consecutive local days, ending today, that have a completion.
///
/// Several completions on one day count once. Completions dated after today
/// are ignored. If today has no completion the streak is 0, even when
/// yesterday's run is intact.
pub fn current_streak(completed: &[DateTime<Utc>], clock: &dyn Clock) -> u32 {
    let days: BTreeSet<NaiveDate> = completed.iter().map(|d| clock.local_date(*d)).collect();

    let mut streak = 0;
    let mut expected = clock.today();
    while days.contains(&expected) {
        streak += 1;
        match expected.pred_opt() {
            Some(previous) => expected = previous,
            None => break,
        }
    }

    streak
}

/// Recompute `current_streak` and raise `best_streak` to match if needed.
pub fn recompute_streak(habit: &mut Habit, clock: &dyn Clock) {
    habit.current_streak = current_streak(&habit.completed_dates, clock);
    habit.best_streak = habit.best_streak.max(habit.current_streak);
}

/// Mark today done, or undo it if it already is. Returns the new state.
///
/// Un-marking removes every completion dated today, so a day never keeps a
/// stray duplicate. Streaks are recomputed either way.
pub fn toggle_completion(habit: &mut Habit, clock: &dyn Clock) -> bool {
    let today = clock.today();
    let before = habit.completed_dates.len();
    habit
        .completed_dates
        .retain(|d| clock.local_date(*d) != today);

    let completed = habit.completed_dates.len() == before;
    if completed {
        habit.completed_dates.push(clock.now());
    }

    recompute_streak(habit, clock);
    completed
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, FixedOffset, TimeZone};

    fn clock() -> FixedClock {
        FixedClock::utc(Utc.with_ymd_and_hms(2024, 5, 15, 18, 30, 0).unwrap())
    }

    fn habit_with(dates: Vec<DateTime<Utc>>) -> Habit {
        let mut habit = Habit::new("Meditate", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        habit.completed_dates = dates;
        habit
    }

    mod streak {
        use super::*;

        #[test]
        fn empty_history_is_zero() {
            let clock = clock();
            assert_eq!(current_streak(&[], &clock), 0);
        }

        #[test]
        fn only_today_is_one() {
            let clock = clock();
            assert_eq!(current_streak(&[clock.now()], &clock), 1);
        }

        #[test]
        fn three_consecutive_days() {
            let clock = clock();
            let dates = vec![clock.days_ago(2), clock.now(), clock.days_ago(1)];
            assert_eq!(current_streak(&dates, &clock), 3);
        }

        #[test]
        fn gap_ends_streak() {
            let clock = clock();
            let dates = vec![clock.now(), clock.days_ago(3)];
            assert_eq!(current_streak(&dates, &clock), 1);
        }

        #[test]
        fn missing_today_is_zero() {
            let clock = clock();
            let dates = vec![clock.days_ago(1), clock.days_ago(2)];
            assert_eq!(current_streak(&dates, &clock), 0);
        }

        #[test]
        fn same_day_duplicates_count_once() {
            let clock = clock();
            let dates = vec![
                clock.now(),
                clock.now() - Duration::hours(5),
                clock.days_ago(1),
                clock.days_ago(1) - Duration::hours(2),
                clock.days_ago(2),
            ];
            assert_eq!(current_streak(&dates, &clock), 3);
        }

        #[test]
        fn future_entries_are_ignored() {
            let clock = clock();
            let dates = vec![clock.now() + Duration::days(1), clock.now()];
            assert_eq!(current_streak(&dates, &clock), 1);
        }

        #[test]
        fn day_boundary_follows_local_offset() {
            // 23:30 UTC on the 15th is already the 16th in UTC+2
            let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
            let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 15, 23, 30, 0).unwrap(), plus_two);

            // 21:00 UTC on the 15th is 23:00 local on the 15th: yesterday
            let yesterday = Utc.with_ymd_and_hms(2024, 5, 15, 21, 0, 0).unwrap();
            assert_eq!(current_streak(&[clock.now(), yesterday], &clock), 2);
            assert_eq!(current_streak(&[yesterday], &clock), 0);
        }

        #[test]
        fn recompute_raises_best_but_never_lowers_it() {
            let clock = clock();
            let mut habit = habit_with(vec![clock.now(), clock.days_ago(1)]);
            habit.best_streak = 1;

            recompute_streak(&mut habit, &clock);
            assert_eq!((habit.current_streak, habit.best_streak), (2, 2));

            habit.completed_dates.clear();
            recompute_streak(&mut habit, &clock);
            assert_eq!((habit.current_streak, habit.best_streak), (0, 2));
        }

        #[test]
        fn best_is_at_least_current_after_recompute() {
            let clock = clock();
            for days in 0..6 {
                let dates = (0..days).map(|d| clock.days_ago(d)).collect();
                let mut habit = habit_with(dates);
                recompute_streak(&mut habit, &clock);

                assert_eq!(habit.current_streak, days as u32);
                assert!(habit.best_streak >= habit.current_streak);
            }
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn completed_today_checks_calendar_day() {
            let clock = clock();
            let morning = Utc.with_ymd_and_hms(2024, 5, 15, 0, 5, 0).unwrap();

            assert!(is_completed_today(&[morning], &clock));
            assert!(!is_completed_today(&[clock.days_ago(1)], &clock));
            assert!(!is_completed_today(&[], &clock));
        }

        #[test]
        fn toggle_marks_today() {
            let clock = clock();
            let mut habit = habit_with(vec![clock.days_ago(1)]);

            assert!(habit.toggle_completion(&clock));

            assert!(habit.is_completed_today(&clock));
            assert_eq!(habit.completed_dates.len(), 2);
            assert_eq!(habit.current_streak, 2);
            assert_eq!(habit.best_streak, 2);
        }

        #[test]
        fn toggle_twice_round_trips() {
            let clock = clock();
            let mut habit = habit_with(vec![clock.days_ago(1), clock.days_ago(2)]);
            habit.recompute_streak(&clock);
            let original_len = habit.completed_dates.len();
            let original_streak = habit.current_streak;

            assert!(habit.toggle_completion(&clock));
            assert!(habit.is_completed_today(&clock));

            assert!(!habit.toggle_completion(&clock));
            assert!(!habit.is_completed_today(&clock));
            assert_eq!(habit.completed_dates.len(), original_len);
            assert_eq!(habit.current_streak, original_streak);
        }

        #[test]
        fn untoggle_removes_every_entry_for_today() {
            let clock = clock();
            let mut habit = habit_with(vec![
                clock.now() - Duration::hours(3),
                clock.days_ago(1),
                clock.now() - Duration::hours(1),
            ]);

            assert!(!habit.toggle_completion(&clock));

            assert_eq!(habit.completed_dates, vec![clock.days_ago(1)]);
            assert!(!habit.is_completed_today(&clock));
            assert_eq!(habit.current_streak, 0);
        }

        #[test]
        fn toggle_keeps_best_streak() {
            let clock = clock();
            let mut habit = habit_with(vec![clock.days_ago(1), clock.days_ago(2)]);

            habit.toggle_completion(&clock);
            habit.toggle_completion(&clock);

            assert_eq!(habit.current_streak, 0);
            assert_eq!(habit.best_streak, 3);
        }
    }
}
