use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::money::{Money, round_half_even};

/// Share of revenue paid to the single grand prize winner, in percent.
pub const GRAND_PRIZE_PERCENT: i64 = 50;
/// Share of revenue split across second tier winners, in percent.
pub const SECOND_TIER_PERCENT: i64 = 30;
/// Share of revenue split across third tier winners, in percent.
pub const THIRD_TIER_PERCENT: i64 = 10;
/// Share of the ticket pool that wins a second tier slot, in percent.
pub const SECOND_TIER_SLOTS_PERCENT: u64 = 10;
/// Share of the ticket pool that wins a third tier slot, in percent.
pub const THIRD_TIER_SLOTS_PERCENT: u64 = 20;

/// One purchased ticket in the draw pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketEntry {
    pub player: PlayerId,
    /// 1-based index of the ticket among its owner's tickets.
    pub ticket: u32,
}

/// Tier slot counts and per-winner prizes, derived from the pool size before
/// any entry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSizing {
    pub pool_size: u64,
    pub total_revenue: Money,
    pub grand_prize: Money,
    pub second_tier_count: u64,
    pub second_tier_prize: Money,
    pub third_tier_count: u64,
    pub third_tier_prize: Money,
}

impl TierSizing {
    pub fn new(pool_size: u64, ticket_price: u32) -> Self {
        let revenue_units = pool_size as i64 * ticket_price as i64;
        let total_revenue = Money::from_units(revenue_units);
        // Grand prize is floored to whole units.
        let grand_prize = Money::from_units(revenue_units * GRAND_PRIZE_PERCENT / 100);

        let second_tier_count = slot_count(pool_size, SECOND_TIER_SLOTS_PERCENT);
        let third_tier_count = slot_count(pool_size, THIRD_TIER_SLOTS_PERCENT);

        Self {
            pool_size,
            total_revenue,
            grand_prize,
            second_tier_count,
            second_tier_prize: total_revenue
                .percent(SECOND_TIER_PERCENT)
                .div_round(second_tier_count),
            third_tier_count,
            third_tier_prize: total_revenue
                .percent(THIRD_TIER_PERCENT)
                .div_round(third_tier_count),
        }
    }
}

fn slot_count(pool_size: u64, percent: u64) -> u64 {
    round_half_even((pool_size * percent) as i64, 100) as u64
}

/// Outcome of one draw. `grand_prize_winner` is `None` only when no tickets were sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub sizing: TierSizing,
    pub grand_prize_winner: Option<PlayerId>,
    /// Distinct second tier winners, in draw order.
    pub second_tier_winners: Vec<PlayerId>,
    /// Distinct third tier winners, in draw order.
    pub third_tier_winners: Vec<PlayerId>,
    pub house_profit: Money,
}

impl DrawResult {
    /// Result of a draw over an empty pool: nobody wins and nothing is collected.
    pub fn no_tickets(ticket_price: u32) -> Self {
        Self {
            sizing: TierSizing::new(0, ticket_price),
            grand_prize_winner: None,
            second_tier_winners: Vec::new(),
            third_tier_winners: Vec::new(),
            house_profit: Money::ZERO,
        }
    }

    pub fn total_payout(&self) -> Money {
        let grand = if self.grand_prize_winner.is_some() {
            self.sizing.grand_prize
        } else {
            Money::ZERO
        };
        grand
            + self.sizing.second_tier_prize * self.second_tier_winners.len() as u64
            + self.sizing.third_tier_prize * self.third_tier_winners.len() as u64
    }

    /// Everything `player` won in this draw.
    pub fn winnings_of(&self, player: PlayerId) -> Money {
        let mut total = Money::ZERO;
        if self.grand_prize_winner == Some(player) {
            total += self.sizing.grand_prize;
        }
        if self.second_tier_winners.contains(&player) {
            total += self.sizing.second_tier_prize;
        }
        if self.third_tier_winners.contains(&player) {
            total += self.sizing.third_tier_prize;
        }
        total
    }
}
