/// Named one-shot deadlines checked against the frame clock.
///
/// Scheduling a key that is already pending replaces its deadline. Due keys come out of
/// `take_due` in deadline order and are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerTable<K> {
    pending: Vec<(K, f64)>,
}

impl<K> Default for TimerTable<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> TimerTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: K, deadline: f64) {
        self.cancel(key);
        self.pending.push((key, deadline));
    }

    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != key);
        self.pending.len() != before
    }

    pub fn deadline(&self, key: K) -> Option<f64> {
        self.pending
            .iter()
            .find(|(pending, _)| *pending == key)
            .map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.deadline(key).is_some()
    }

    pub fn take_due(&mut self, now: f64) -> Vec<K> {
        self.drain_due(now).into_iter().map(|(key, _)| key).collect()
    }

    /// Like `take_due`, keeping each key's deadline.
    pub fn drain_due(&mut self, now: f64) -> Vec<(K, f64)> {
        let mut due: Vec<(K, f64)> = Vec::new();
        self.pending.retain(|&(key, deadline)| {
            if deadline <= now {
                due.push((key, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        A,
        B,
        C,
    }

    #[test]
    fn due_keys_come_out_in_deadline_order() {
        let mut timers = TimerTable::new();
        timers.schedule(Key::A, 3.0);
        timers.schedule(Key::B, 1.0);
        timers.schedule(Key::C, 5.0);
        assert!(timers.take_due(0.5).is_empty());
        assert_eq!(timers.take_due(3.0), vec![Key::B, Key::A]);
        assert_eq!(timers.take_due(10.0), vec![Key::C]);
        assert!(timers.is_empty());
    }

    #[test]
    fn rescheduling_replaces_deadline() {
        let mut timers = TimerTable::new();
        timers.schedule(Key::A, 1.0);
        timers.schedule(Key::A, 4.0);
        assert_eq!(timers.deadline(Key::A), Some(4.0));
        assert!(timers.take_due(2.0).is_empty());
    }

    #[test]
    fn cancel_and_clear() {
        let mut timers = TimerTable::new();
        timers.schedule(Key::A, 1.0);
        timers.schedule(Key::B, 1.0);
        assert!(timers.cancel(Key::A));
        assert!(!timers.cancel(Key::A));
        assert!(timers.is_pending(Key::B));
        timers.clear();
        assert!(timers.take_due(100.0).is_empty());
    }
}
