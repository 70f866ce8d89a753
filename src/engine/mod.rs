mod draw;
mod population;

pub use draw::{allocate, build_pool, run_draw};
pub use population::{
    MAX_AUTO_REQUEST, MIN_AUTO_REQUEST, generate_population, primary_request_limit, sell_tickets,
};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::input::InputProvider;
use crate::model::{ConfigError, DrawResult, LotteryConfig, Player};

pub const PRIMARY_REQUEST_PROMPT: &str = "How many tickets do you want to buy, Player 1? ";

/// Players after ticket sales plus the draw they took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub players: Vec<Player>,
    pub result: DrawResult,
}

/// Drives one lottery run: population, ticket sales, draw.
///
/// All randomness comes from the RNG handed in at construction, so a seeded
/// engine reproduces the same population, requests and shuffle every time.
pub struct LotteryEngine<R = SmallRng> {
    config: LotteryConfig,
    rng: R,
    players: Vec<Player>,
}

impl LotteryEngine<SmallRng> {
    pub fn seeded(config: LotteryConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> LotteryEngine<R> {
    /// Rejects configs that fail [`LotteryConfig::validate`].
    pub fn new(config: LotteryConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            players: Vec::new(),
        })
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Replace the player list with a freshly generated population.
    /// Returns the number of players besides the primary one.
    pub fn generate_population(&mut self) -> usize {
        self.players = generate_population(&self.config, &mut self.rng);
        let others = self.players.len().saturating_sub(1);
        tracing::info!(players = self.players.len(), "population generated");
        others
    }

    /// Ask `input` for the primary player's request, then sell to everyone.
    pub fn sell_tickets(&mut self, input: &mut dyn InputProvider) {
        if self.players.is_empty() {
            tracing::warn!("ticket sale requested before population was generated");
            return;
        }
        let limit = primary_request_limit(&self.config);
        let primary_request = input.get_validated_int(PRIMARY_REQUEST_PROMPT, 0, 0, limit);
        let purchases = sell_tickets(
            &mut self.players,
            primary_request,
            self.config.ticket_price,
            &mut self.rng,
        );
        let sold: u32 = purchases.iter().map(|p| p.bought()).sum();
        let clamped = purchases.iter().filter(|p| p.is_clamped()).count();
        tracing::info!(sold, clamped, "tickets sold");
    }

    pub fn draw(&mut self) -> DrawResult {
        let result = run_draw(&self.players, self.config.ticket_price, &mut self.rng);
        tracing::info!(
            pool_size = result.sizing.pool_size,
            house_profit = %result.house_profit,
            "draw complete"
        );
        result
    }

    /// Run the whole pipeline and hand back the final player state.
    pub fn run(mut self, input: &mut dyn InputProvider) -> RunSummary {
        self.generate_population();
        self.sell_tickets(input);
        let result = self.draw();
        RunSummary {
            players: self.players,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DefaultInput, ScriptedInput};
    use crate::model::PlayerId;

    #[test]
    fn primary_request_is_clamped_to_limit() {
        let config = LotteryConfig::new(10, 3, 2, 2).unwrap();
        let mut engine = LotteryEngine::seeded(config, 1).unwrap();
        engine.generate_population();
        // 4 is above the 3-ticket limit, so the default of 0 applies
        engine.sell_tickets(&mut ScriptedInput::new(["4"]));
        assert_eq!(engine.players()[0].tickets, 0);
        assert_eq!(engine.players()[0].balance, 10);
    }

    #[test]
    fn primary_request_is_honored() {
        let config = LotteryConfig::new(10, 2, 2, 2).unwrap();
        let mut engine = LotteryEngine::seeded(config, 1).unwrap();
        engine.generate_population();
        engine.sell_tickets(&mut ScriptedInput::new(["5"]));
        assert_eq!(engine.players()[0].tickets, 5);
        assert_eq!(engine.players()[0].balance, 0);
    }

    #[test]
    fn selling_before_population_does_nothing() {
        let mut engine = LotteryEngine::seeded(LotteryConfig::default(), 1).unwrap();
        let mut input = ScriptedInput::new(["3"]);
        engine.sell_tickets(&mut input);
        assert!(engine.players().is_empty());
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn run_reports_every_player() {
        let config = LotteryConfig::default();
        let summary = LotteryEngine::seeded(config, 42).unwrap().run(&mut ScriptedInput::new(["5"]));
        assert!((10..=15).contains(&summary.players.len()));
        assert_eq!(summary.players[0].id, PlayerId::PRIMARY);
        assert_eq!(summary.players[0].tickets, 5);
        let tickets: u64 = summary.players.iter().map(|p| p.tickets as u64).sum();
        assert_eq!(summary.result.sizing.pool_size, tickets);
        assert!(summary.result.grand_prize_winner.is_some());
    }

    #[test]
    fn lone_player_buying_nothing_gets_empty_draw() {
        let config = LotteryConfig::new(10, 1, 1, 1).unwrap();
        let summary = LotteryEngine::seeded(config, 7).unwrap().run(&mut DefaultInput);
        assert_eq!(summary.players.len(), 1);
        assert_eq!(summary.result, DrawResult::no_tickets(1));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = LotteryConfig {
            min_players: 8,
            max_players: 4,
            ..LotteryConfig::default()
        };
        let err = LotteryEngine::seeded(config, 1).err().unwrap();
        assert!(matches!(err, ConfigError::PlayerRange { min: 8, max: 4 }));

        let config = LotteryConfig {
            ticket_price: 0,
            ..LotteryConfig::default()
        };
        assert!(LotteryEngine::seeded(config, 1).is_err());
    }

    #[test]
    fn same_seed_same_run() {
        let config = LotteryConfig::default();
        let a = LotteryEngine::seeded(config, 99).unwrap().run(&mut ScriptedInput::new(["3"]));
        let b = LotteryEngine::seeded(config, 99).unwrap().run(&mut ScriptedInput::new(["3"]));
        assert_eq!(a, b);
    }
}
