use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::engine::RunSummary;
use crate::model::{DrawResult, LotteryConfig};

pub const PLAYERS_FILE: &str = "players.jsonl";
pub const DRAW_FILE: &str = "draw.json";

#[derive(Serialize)]
struct DrawRecord<'a> {
    config: &'a LotteryConfig,
    #[serde(flatten)]
    result: &'a DrawResult,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Export a finished run into `output_dir`, creating it if needed.
///
/// - `players.jsonl`: one player per line, state after ticket sales
/// - `draw.json`: the run config, tier sizing, winners and house profit
///
/// Currency fields are written as hundredths.
pub fn flush_to_json(
    summary: &RunSummary,
    config: &LotteryConfig,
    output_dir: &Path,
) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join(PLAYERS_FILE), summary.players.iter())?;

    let mut writer = BufWriter::new(File::create(output_dir.join(DRAW_FILE))?);
    let record = DrawRecord {
        config,
        result: &summary.result,
    };
    serde_json::to_writer_pretty(&mut writer, &record)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(dir = %output_dir.display(), "run exported");
    Ok(())
}
