//! Per-member serialization of portal work.
//!
//! The platform offers no compare-and-create, so two overlapping joins for the
//! same member could both see "no category" and both create one. Work for a
//! given (guild, member) pair therefore runs one task at a time; unrelated
//! members are not blocked.

use crate::Snowflake;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key identifying one member in one guild.
pub type MemberKey = (Snowflake, Snowflake);

/// Table of per-member async locks.
#[derive(Debug, Default)]
pub struct MemberLocks {
    slots: DashMap<MemberKey, Arc<Mutex<()>>>,
}

impl MemberLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` while holding the lock for `key`.
    ///
    /// The slot is released even if the returned future is dropped early.
    pub async fn run<F, T>(&self, key: MemberKey, work: F) -> T
    where
        F: Future<Output = T>,
    {
        let slot = SlotRelease {
            slots: &self.slots,
            key,
            slot: self.slots.entry(key).or_default().clone(),
        };
        let _guard = slot.slot.lock().await;
        work.await
    }

    /// Number of members with work in flight or queued.
    pub fn active(&self) -> usize {
        self.slots.len()
    }
}

/// Removes an idle slot from the table when dropped.
struct SlotRelease<'a> {
    slots: &'a DashMap<MemberKey, Arc<Mutex<()>>>,
    key: MemberKey,
    slot: Arc<Mutex<()>>,
}

impl Drop for SlotRelease<'_> {
    fn drop(&mut self) {
        // The table's reference plus ours: nobody else holds or awaits it.
        self.slots
            .remove_if(&self.key, |_, slot| Arc::strong_count(slot) == 2);
    }
}
