use std::collections::HashSet;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::model::{DrawResult, Player, PlayerId, TicketEntry, TierSizing};
use crate::money::Money;

/// Expand each player's ticket count into individual pool entries.
pub fn build_pool(players: &[Player]) -> Vec<TicketEntry> {
    players
        .iter()
        .flat_map(|p| (1..=p.tickets).map(move |ticket| TicketEntry { player: p.id, ticket }))
        .collect()
}

/// Build the pool, shuffle it uniformly and allocate prizes.
pub fn run_draw(players: &[Player], ticket_price: u32, rng: &mut dyn RngCore) -> DrawResult {
    let mut pool = build_pool(players);
    pool.shuffle(rng);
    allocate(&pool, ticket_price)
}

/// Allocate prizes over an already-shuffled pool.
///
/// Entries are consumed front to back: one for the grand prize, then
/// `second_tier_count` for the second tier, then `third_tier_count` for the
/// third. A slice longer than what remains takes only what remains. Each tier
/// pays its prize once per distinct owner in its slice. Tiers are deduplicated
/// independently, so an owner of entries in several slices wins in each.
pub fn allocate(pool: &[TicketEntry], ticket_price: u32) -> DrawResult {
    let Some((grand, rest)) = pool.split_first() else {
        tracing::info!("no tickets sold, nothing to draw");
        return DrawResult::no_tickets(ticket_price);
    };
    let sizing = TierSizing::new(pool.len() as u64, ticket_price);

    let (second_slice, rest) = rest.split_at(slice_len(sizing.second_tier_count, rest.len()));
    let third_slice = &rest[..slice_len(sizing.third_tier_count, rest.len())];

    let second_tier_winners = distinct_owners(second_slice);
    let third_tier_winners = distinct_owners(third_slice);

    let mut result = DrawResult {
        sizing,
        grand_prize_winner: Some(grand.player),
        second_tier_winners,
        third_tier_winners,
        house_profit: Money::ZERO,
    };
    result.house_profit = sizing.total_revenue - result.total_payout();

    tracing::debug!(
        pool_size = sizing.pool_size,
        second_slots = second_slice.len(),
        second_winners = result.second_tier_winners.len(),
        third_slots = third_slice.len(),
        third_winners = result.third_tier_winners.len(),
        house_profit = %result.house_profit,
        "prizes allocated"
    );
    result
}

fn slice_len(count: u64, remaining: usize) -> usize {
    usize::try_from(count).map_or(remaining, |c| c.min(remaining))
}

/// Owners of `entries` in first-seen order, each listed once.
fn distinct_owners(entries: &[TicketEntry]) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|e| e.player)
        .filter(|id| seen.insert(*id))
        .collect()
}
