use crate::analysis::champion_stats::ChampionStats;
use crate::config::DEFAULT_MATCH_COUNT;
use crate::error::AppError;
use crate::export;
use crate::identity::RiotId;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "top_champs")]
#[command(about = "Top champions by play count and win rate for a Riot ID", long_about = None)]
pub struct Args {
    /// Riot ID as gameName#tagLine (prompted when omitted)
    pub riot_id: Option<String>,

    /// Platform routing value, e.g. tr1, euw1, na1 (default: RIOT_REGION or tr1)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Number of recent matches to scan (prompted when omitted, default: 100)
    #[arg(short, long)]
    pub matches: Option<usize>,

    /// Only scan matches of this type (ranked, normal, tourney, tutorial)
    #[arg(long = "type")]
    pub match_type: Option<String>,

    /// Number of champions to list
    #[arg(short, long, default_value = "10")]
    pub top_n: usize,

    /// Write the table to CSV without asking
    #[arg(long, conflicts_with = "no_csv")]
    pub csv: bool,

    /// Never write CSV and don't ask
    #[arg(long)]
    pub no_csv: bool,

    /// CSV destination
    #[arg(long, default_value = export::DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Skip the ranked-queue lookup
    #[arg(long)]
    pub skip_ranked: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn riot_id<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<RiotId, AppError> {
        match &self.riot_id {
            Some(raw) => raw.parse(),
            None => prompter.riot_id(),
        }
    }

    /// `--matches 0` is an error; a missing flag is asked for.
    pub fn match_count<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<usize, AppError> {
        match self.matches {
            Some(0) => Err(AppError::ConfigError(
                "--matches must be at least 1".to_string(),
            )),
            Some(n) => Ok(n),
            None => prompter.match_count(DEFAULT_MATCH_COUNT),
        }
    }

    pub fn top_n(&self) -> Result<usize, AppError> {
        if self.top_n == 0 {
            return Err(AppError::ConfigError("--top-n must be at least 1".to_string()));
        }
        Ok(self.top_n)
    }

    /// Nothing to write means no question. `--no-csv` never asks, `--csv`
    /// never asks; otherwise the user decides.
    pub fn wants_csv<R: BufRead, W: Write>(
        &self,
        top: &[ChampionStats],
        prompter: &mut Prompter<R, W>,
    ) -> Result<bool, AppError> {
        if top.is_empty() || self.no_csv {
            return Ok(false);
        }
        if self.csv {
            return Ok(true);
        }
        prompter.confirm(&format!(
            "Write top champions to CSV ({})?",
            self.csv_path.display()
        ))
    }
}
