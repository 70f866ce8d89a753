#![allow(dead_code)]

use lottery_sim::{LotteryConfig, LotteryEngine, RunSummary, ScriptedInput};

/// Run a full seeded lottery with Player 1 requesting `primary_tickets`.
pub fn run_seeded(config: LotteryConfig, seed: u64, primary_tickets: u32) -> RunSummary {
    let mut input = ScriptedInput::new([primary_tickets.to_string()]);
    LotteryEngine::seeded(config, seed)
        .expect("test config is valid")
        .run(&mut input)
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
