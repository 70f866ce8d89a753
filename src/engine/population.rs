use rand::{Rng, RngCore};

use crate::model::{LotteryConfig, Player, PlayerId, Purchase};

/// Ticket requests made by non-primary players are drawn from this range.
pub const MIN_AUTO_REQUEST: u32 = 1;
pub const MAX_AUTO_REQUEST: u32 = 10;

/// Create the primary player plus a random number of others.
///
/// The total, primary included, is uniform in `min_players..=max_players`.
pub fn generate_population(config: &LotteryConfig, rng: &mut dyn RngCore) -> Vec<Player> {
    let total = rng
        .random_range(config.min_players..=config.max_players)
        .max(1);
    (1..=total)
        .map(|n| Player::new(PlayerId(n), config.player_balance))
        .collect()
}

/// Largest request the primary player may enter.
pub fn primary_request_limit(config: &LotteryConfig) -> u32 {
    config
        .player_balance
        .checked_div(config.ticket_price)
        .unwrap_or(0)
}

/// Apply the primary player's request, then a random request for everyone else.
///
/// Players are processed in order, so the RNG is consumed once per
/// non-primary player.
pub fn sell_tickets(
    players: &mut [Player],
    primary_request: u32,
    ticket_price: u32,
    rng: &mut dyn RngCore,
) -> Vec<Purchase> {
    players
        .iter_mut()
        .map(|player| {
            let requested = if player.id.is_primary() {
                primary_request
            } else {
                rng.random_range(MIN_AUTO_REQUEST..=MAX_AUTO_REQUEST)
            };
            let purchase = player.buy_tickets(requested, ticket_price);
            if let Purchase::Clamped { requested, bought } = purchase {
                tracing::debug!(
                    player = %player.id,
                    requested,
                    bought,
                    "insufficient balance, purchase clamped"
                );
            }
            purchase
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn population_size_within_bounds() {
        let config = LotteryConfig::new(10, 1, 3, 6).unwrap();
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let players = generate_population(&config, &mut rng);
            assert!((3..=6).contains(&players.len()), "seed {seed}: {}", players.len());
        }
    }

    #[test]
    fn primary_player_first_and_numbered_sequentially() {
        let config = LotteryConfig::new(10, 1, 4, 4).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let players = generate_population(&config, &mut rng);
        assert_eq!(players.len(), 4);
        assert!(players[0].id.is_primary());
        for (i, player) in players.iter().enumerate() {
            assert_eq!(player.id, PlayerId(i as u32 + 1));
            assert_eq!(player.balance, 10);
            assert_eq!(player.tickets, 0);
        }
    }

    #[test]
    fn single_player_population() {
        let config = LotteryConfig::new(10, 1, 1, 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        let players = generate_population(&config, &mut rng);
        assert_eq!(players.len(), 1);
        assert!(players[0].id.is_primary());
    }

    #[test]
    fn request_limit_uses_integer_division() {
        let config = LotteryConfig::new(10, 3, 2, 2).unwrap();
        assert_eq!(primary_request_limit(&config), 3);
    }

    #[test]
    fn others_buy_between_one_and_ten() {
        let config = LotteryConfig::new(100, 1, 30, 30).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut players = generate_population(&config, &mut rng);
        sell_tickets(&mut players, 0, config.ticket_price, &mut rng);
        assert_eq!(players[0].tickets, 0);
        for player in &players[1..] {
            assert!((1..=10).contains(&player.tickets), "{}", player.tickets);
        }
    }

    #[test]
    fn purchases_never_exceed_balance() {
        let config = LotteryConfig::new(10, 3, 20, 20).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut players = generate_population(&config, &mut rng);
        let purchases = sell_tickets(&mut players, 3, config.ticket_price, &mut rng);
        assert_eq!(purchases.len(), players.len());
        for (player, purchase) in players.iter().zip(&purchases) {
            assert!(player.tickets <= 3);
            assert_eq!(purchase.bought(), player.tickets);
            assert_eq!(player.balance, 10 - player.tickets * 3);
        }
    }
}
