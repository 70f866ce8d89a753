use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a player within one run. Player 1 is always the primary player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub const PRIMARY: PlayerId = PlayerId(1);

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A lottery participant. Balance is held in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub balance: u32,
    pub tickets: u32,
}

/// Result of a ticket purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    /// Every requested ticket was bought.
    Full { bought: u32 },
    /// The balance could not cover the request; only `bought` tickets were taken.
    Clamped { requested: u32, bought: u32 },
}

impl Purchase {
    pub fn bought(self) -> u32 {
        match self {
            Purchase::Full { bought } | Purchase::Clamped { bought, .. } => bought,
        }
    }

    pub fn is_clamped(self) -> bool {
        matches!(self, Purchase::Clamped { .. })
    }
}

impl Player {
    pub fn new(id: PlayerId, balance: u32) -> Self {
        Self {
            id,
            name: id.to_string(),
            balance,
            tickets: 0,
        }
    }

    /// How many tickets the current balance covers at `ticket_price`.
    pub fn affordable(&self, ticket_price: u32) -> u32 {
        if ticket_price == 0 {
            return 0;
        }
        self.balance / ticket_price
    }

    /// Buy up to `requested` tickets, silently clamping to what the balance affords.
    pub fn buy_tickets(&mut self, requested: u32, ticket_price: u32) -> Purchase {
        let bought = requested.min(self.affordable(ticket_price));
        self.tickets += bought;
        self.balance -= bought * ticket_price;
        if bought < requested {
            Purchase::Clamped { requested, bought }
        } else {
            Purchase::Full { bought }
        }
    }
}
