use crate::domain::model::{Ledger, Pool, ReportingPeriod};

/// Run-length encodes daily team membership into pools.
///
/// Walks the period day by day (day-major, team-minor over first-seen team
/// order) and keeps one open pool per team. A day whose member sequence
/// matches the open pool extends it; a different non-empty sequence starts a
/// new pool; an empty day retires the open pool for good, so an identical
/// membership reappearing later starts a fresh pool rather than reopening
/// the old one. Membership comparison is order-sensitive sequence equality.
///
/// The returned pools are sorted by (team, first_day) for reporting.
pub fn segment_pools(ledger: &Ledger, period: &ReportingPeriod) -> Vec<Pool> {
    let teams = ledger.team_names();
    let mut pools: Vec<Pool> = Vec::new();
    // Per-team state: index of the still-extendable pool, if any. Indexed
    // state instead of a last-pool scan keeps the pass linear in pools.
    let mut open: Vec<Option<usize>> = vec![None; teams.len()];

    for day in period.days() {
        for (ti, team) in teams.iter().enumerate() {
            let members = ledger.members_on(team, day);
            let state = open[ti];
            match state {
                Some(_) if members.is_empty() => {
                    open[ti] = None;
                }
                Some(idx) if members == pools[idx].member_resources => {
                    pools[idx].last_day = day;
                }
                _ if members.is_empty() => {}
                _ => {
                    pools.push(Pool::open(team.clone(), members, day));
                    open[ti] = Some(pools.len() - 1);
                }
            }
        }
    }

    pools.sort_by(|a, b| a.team.cmp(&b.team).then(a.first_day.cmp(&b.first_day)));
    pools
}
