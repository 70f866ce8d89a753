use std::fmt;

use crate::model::{DrawResult, LotteryConfig, PlayerId};
use crate::money::Money;

/// Greeting shown to the primary player before ticket sales.
pub fn welcome(config: &LotteryConfig, other_players: usize) -> String {
    Welcome {
        config,
        other_players,
    }
    .to_string()
}

/// Human-readable draw results.
pub fn report(result: &DrawResult, config: &LotteryConfig) -> String {
    DrawReport { result, config }.to_string()
}

struct Welcome<'a> {
    config: &'a LotteryConfig,
    other_players: usize,
}

impl fmt::Display for Welcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to the Bede Lottery, {}!", PlayerId::PRIMARY)?;
        writeln!(f)?;
        writeln!(
            f,
            "* Your digital balance: ${}",
            Money::from_units(self.config.player_balance.into())
        )?;
        writeln!(
            f,
            "* Ticket Price: ${} each",
            Money::from_units(self.config.ticket_price.into())
        )?;
        writeln!(f)?;
        writeln!(f, "{} other players have joined the lottery.", self.other_players)
    }
}

struct DrawReport<'a> {
    result: &'a DrawResult,
    config: &'a LotteryConfig,
}

impl fmt::Display for DrawReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizing = &self.result.sizing;
        writeln!(f, "Ticket Draw Results:")?;
        writeln!(f)?;

        let Some(grand) = self.result.grand_prize_winner else {
            writeln!(f, "No tickets were sold, so there are no winners.")?;
            writeln!(f)?;
            return writeln!(f, "House Revenue: ${}", self.result.house_profit);
        };

        writeln!(f, "* Grand Prize: {grand} wins ${}!", sizing.grand_prize)?;
        write_tier(f, "Second Tier", &self.result.second_tier_winners, sizing.second_tier_prize)?;
        write_tier(f, "Third Tier", &self.result.third_tier_winners, sizing.third_tier_prize)?;
        writeln!(f)?;
        writeln!(f, "Congratulations to the winners!")?;
        writeln!(f)?;
        writeln!(
            f,
            "Tickets sold: {} at ${} each (${} total)",
            sizing.pool_size,
            Money::from_units(self.config.ticket_price.into()),
            sizing.total_revenue
        )?;
        writeln!(f, "House Revenue: ${}", self.result.house_profit)
    }
}

fn write_tier(f: &mut fmt::Formatter<'_>, label: &str, winners: &[PlayerId], prize: Money) -> fmt::Result {
    if winners.is_empty() {
        return Ok(());
    }
    let names = winners
        .iter()
        .map(PlayerId::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(f, "* {label}: Players {names} win ${prize} each!")
}
