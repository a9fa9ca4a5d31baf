use crate::domain::model::{Pool, RevenueEvent};

/// Attaches every event whose team matches a pool and whose date falls
/// inside the pool's range to that pool, keeping original event order.
///
/// O(pools x events); fine at report scale. Events whose team has no pool
/// covering their date stay unassigned and only appear in the raw view.
pub fn assign_events(pools: &mut [Pool], events: &[RevenueEvent]) {
    for pool in pools.iter_mut() {
        pool.events = events
            .iter()
            .filter(|e| e.team == pool.team && pool.covers(e.date))
            .cloned()
            .collect();
    }
}
