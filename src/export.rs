use crate::analysis::champion_stats::ChampionStats;
use crate::error::AppError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_CSV_PATH: &str = "top_champs.csv";
const HEADER: &str = "Champion,Plays,Wins,WinRate";

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_csv<W: Write>(out: &mut W, stats: &[ChampionStats]) -> Result<(), AppError> {
    writeln!(out, "{}", HEADER)?;
    for champ in stats {
        writeln!(
            out,
            "{},{},{},{}",
            escape(&champ.name),
            champ.plays,
            champ.wins,
            champ.win_rate_label()
        )?;
    }
    Ok(())
}

pub fn export_csv(path: &Path, stats: &[ChampionStats]) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, stats)?;
    writer.flush()?;

    info!(path = %path.display(), rows = stats.len(), "csv written");
    Ok(())
}
