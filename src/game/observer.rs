//! Change subscriptions for a game log.

use super::log::GameLog;

/// Callback run after every change to a game log.
pub type Observer = Box<dyn Fn(&GameLog) + Send + Sync>;

/// Handle returned by [`GameLog::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&self, log: &GameLog) {
        for (_, observer) in &self.entries {
            observer(log);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
