mod jsonl;

pub use jsonl::{DRAW_FILE, PLAYERS_FILE, flush_to_json};
