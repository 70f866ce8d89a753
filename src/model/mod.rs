pub mod config;
pub mod draw;
pub mod player;

pub use config::{ConfigBounds, ConfigError, FieldBounds, LotteryConfig};
pub use draw::{DrawResult, TicketEntry, TierSizing};
pub use player::{Player, PlayerId, Purchase};
