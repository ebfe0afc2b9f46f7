//! Wall-clock delayed actions, polled once per tick.
//!
//! Each [`TimedAction`] has at most one pending entry: scheduling it again
//! replaces the earlier fire time instead of stacking a second callback.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimedAction {
    RevertPlayerColor,
    RespawnPowerup,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScheduledTask {
    fire_at_ms: f64,
    action: TimedAction,
}

#[derive(Clone, Debug, Default)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `action` to fire at `fire_at_ms`, replacing any pending entry for it.
    pub fn schedule(&mut self, action: TimedAction, fire_at_ms: f64) {
        self.cancel(action);
        self.tasks.push(ScheduledTask { fire_at_ms, action });
    }

    /// Returns true if a pending entry was removed.
    pub fn cancel(&mut self, action: TimedAction) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.action != action);
        self.tasks.len() != before
    }

    pub fn pending(&self, action: TimedAction) -> Option<f64> {
        self.tasks.iter().find(|t| t.action == action).map(|t| t.fire_at_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove and return every action due at `now_ms`, earliest first.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<TimedAction> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|t| {
            if t.fire_at_ms <= now_ms {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.fire_at_ms.total_cmp(&b.fire_at_ms));
        due.into_iter().map(|t| t.action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescheduling_overwrites_instead_of_stacking() {
        let mut s = Schedule::new();
        s.schedule(TimedAction::RevertPlayerColor, 1_000.0);
        s.schedule(TimedAction::RevertPlayerColor, 4_000.0);
        assert_eq!(s.pending(TimedAction::RevertPlayerColor), Some(4_000.0));
        assert!(s.take_due(2_000.0).is_empty());
        assert_eq!(s.take_due(4_000.0), vec![TimedAction::RevertPlayerColor]);
        assert!(s.is_empty());
    }

    #[test]
    fn due_actions_come_out_in_fire_order() {
        let mut s = Schedule::new();
        s.schedule(TimedAction::RespawnPowerup, 300.0);
        s.schedule(TimedAction::RevertPlayerColor, 100.0);
        assert_eq!(
            s.take_due(500.0),
            vec![TimedAction::RevertPlayerColor, TimedAction::RespawnPowerup]
        );
    }

    #[test]
    fn cancel_reports_whether_anything_was_pending() {
        let mut s = Schedule::new();
        assert!(!s.cancel(TimedAction::RespawnPowerup));
        s.schedule(TimedAction::RespawnPowerup, 10.0);
        assert!(s.cancel(TimedAction::RespawnPowerup));
        assert_eq!(s.pending(TimedAction::RespawnPowerup), None);
    }
}
