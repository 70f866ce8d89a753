pub mod engine;
pub mod flush;
pub mod input;
pub mod model;
pub mod money;
pub mod report;

pub use engine::{LotteryEngine, RunSummary};
pub use input::{ConsoleInput, DefaultInput, InputError, InputProvider, ScriptedInput};
pub use model::{DrawResult, LotteryConfig, Player, PlayerId, TicketEntry, TierSizing};
pub use money::Money;
