//! Planner - the persisted task list.

use std::sync::Arc;

use super::types::Task;
use crate::clock::Clock;
use crate::event_bus::EventBus;
use crate::persistence::Persistence;
use crate::records::{RecordCollection, RecordId};

pub struct Planner {
    tasks: RecordCollection<Task>,
    clock: Arc<dyn Clock>,
}

impl Planner {
    pub fn load(persistence: Persistence, events: Option<Arc<EventBus>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: RecordCollection::load(persistence, events),
            clock,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.records()
    }

    pub fn find(&self, id: RecordId) -> Option<&Task> {
        self.tasks.find(id)
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.add(task)
    }

    pub fn update(&mut self, task: Task) -> Option<&Task> {
        self.tasks.update(task)
    }

    pub fn delete(&mut self, id: RecordId) -> Option<Task> {
        self.tasks.delete(id)
    }

    /// Flip a task between done and pending.
    pub fn toggle_completion(&mut self, id: RecordId) -> Option<&Task> {
        self.tasks.modify(id, |task| task.is_completed = !task.is_completed)
    }

    /// Tasks due today, highest priority first.
    pub fn todays_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<_> = self
            .tasks()
            .iter()
            .filter(|t| self.clock.is_today(t.due_date))
            .collect();

        tasks.sort_by_key(|t| t.priority.sort_order());
        tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks().iter().filter(|t| t.is_completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks().iter().filter(|t| !t.is_completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::persistence::slots;
    use crate::tasks::Priority;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed() -> FixedClock {
        FixedClock::utc(Utc.with_ymd_and_hms(2024, 9, 2, 14, 0, 0).unwrap())
    }

    #[test]
    fn todays_tasks_are_filtered_and_ordered() {
        let clock = fixed();
        let mut planner = Planner::load(Persistence::in_memory(), None, Arc::new(clock));

        let now = clock.now();
        planner.add(Task::new("low", now, now).with_priority(Priority::Low));
        planner.add(Task::new("tomorrow", now + Duration::days(1), now).with_priority(Priority::High));
        planner.add(Task::new("high", now - Duration::hours(13), now).with_priority(Priority::High));
        planner.add(Task::new("medium", now, now));

        let titles: Vec<_> = planner.todays_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "medium", "low"]);
    }

    #[test]
    fn toggle_flips_and_counts() {
        let clock = fixed();
        let persistence = Persistence::in_memory();
        let mut planner = Planner::load(persistence.clone(), None, Arc::new(clock));
        let now = clock.now();
        let id = planner.add(Task::new("a", now, now)).id;
        planner.add(Task::new("b", now, now));

        assert!(planner.toggle_completion(id).unwrap().is_completed);
        assert_eq!((planner.completed_count(), planner.pending_count()), (1, 1));
        assert!(persistence.load::<Task>(slots::TASKS)[0].is_completed);

        assert!(!planner.toggle_completion(id).unwrap().is_completed);
        assert_eq!(planner.completed_count(), 0);
        assert!(planner.toggle_completion(RecordId::new()).is_none());
    }

    #[test]
    fn update_and_delete_by_id() {
        let clock = fixed();
        let mut planner = Planner::load(Persistence::in_memory(), None, Arc::new(clock));
        let now = clock.now();
        let mut task = planner.add(Task::new("draft", now, now)).clone();

        task.title = "final".to_string();
        assert_eq!(planner.update(task.clone()).unwrap().title, "final");

        assert!(planner.delete(task.id).is_some());
        assert!(planner.find(task.id).is_none());
        assert!(planner.delete(task.id).is_none());
    }
}
