use crate::analysis::champion_stats::ChampionStats;
use crate::analysis::ranked::RankedInfo;
use crate::api::models::LeagueEntryDto;
use crate::history::ScanReport;
use crate::identity::PlayerIdentity;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Champion")]
    champion: String,
    #[tabled(rename = "Plays")]
    plays: String,
    #[tabled(rename = "Win%")]
    win_rate: String,
}

#[derive(Tabled)]
struct RankedRow {
    #[tabled(rename = "Queue")]
    queue: String,
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "LP")]
    league_points: String,
    #[tabled(rename = "W/L")]
    record: String,
    #[tabled(rename = "Win%")]
    win_rate: String,
}

pub fn render_champion_table(stats: &[ChampionStats]) -> String {
    let rows: Vec<ChampionRow> = stats
        .iter()
        .enumerate()
        .map(|(idx, champ)| ChampionRow {
            rank: format!("{}", idx + 1),
            champion: champ.name.clone(),
            plays: champ.plays.to_string(),
            win_rate: format!("{}%", champ.win_rate_label()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_ranked_table(entries: &[LeagueEntryDto]) -> String {
    let rows: Vec<RankedRow> = entries
        .iter()
        .map(|entry| RankedRow {
            queue: entry.queue_type.clone(),
            rank: format!("{} {}", entry.tier, entry.rank).trim().to_string(),
            league_points: entry.league_points.to_string(),
            record: format!("{}W/{}L", entry.wins, entry.losses),
            win_rate: format!("{:.2}%", entry.win_rate()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn display_champion_report(identity: &PlayerIdentity, report: &ScanReport, top: &[ChampionStats]) {
    println!(
        "\n{}",
        format!("🎮 Top {} champions for {}", top.len(), identity)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!("{} {}", "PUUID:".bold(), identity.puuid);
    println!(
        "{} {} scanned, {} skipped\n",
        "Matches:".bold(),
        report.scanned.to_string().green(),
        if report.skipped.is_empty() {
            "0".normal()
        } else {
            report.skipped.len().to_string().yellow()
        }
    );

    for skipped in &report.skipped {
        println!("{} {} ({})", "Skipped:".yellow(), skipped.match_id, skipped.reason);
    }

    if top.is_empty() {
        println!(
            "{}",
            "No champion data available (no match could be scanned)".yellow()
        );
        return;
    }

    println!("\n{}", render_champion_table(top));
}

pub fn display_ranked(ranked: Option<&RankedInfo>) {
    println!("\n{}", "🏆 RANKED QUEUES".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    match ranked {
        None => println!(
            "{}",
            "Ranked data unavailable for this key/region".yellow()
        ),
        Some(info) if info.entries.is_empty() => {
            println!("No ranked entries on this account.")
        }
        Some(info) => println!("{}", render_ranked_table(&info.entries)),
    }
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn warning_line(message: &str) -> String {
    format!("{} {}", "⏳".yellow(), message)
}

pub fn display_warning(message: &str) {
    println!("{}", warning_line(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(name: &str, plays: usize, wins: usize) -> ChampionStats {
        ChampionStats {
            name: name.to_string(),
            plays,
            wins,
        }
    }

    #[test]
    fn champion_table_lists_rank_name_plays_and_win_rate() {
        let table = render_champion_table(&[champ("Jinx", 2, 2), champ("Yasuo", 1, 0)]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines.iter().any(|l| l.contains("Champion") && l.contains("Win%")));
        let jinx = lines.iter().position(|l| l.contains("Jinx")).unwrap();
        let yasuo = lines.iter().position(|l| l.contains("Yasuo")).unwrap();
        assert!(jinx < yasuo);
        assert!(lines[jinx].contains("100.00%"));
        assert!(lines[yasuo].contains("0.00%"));
    }

    #[test]
    fn table_rows_are_aligned() {
        let table = render_champion_table(&[champ("Jinx", 12, 7), champ("Aurelion Sol", 3, 1)]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn ranked_table_shows_tier_lp_and_record() {
        let table = render_ranked_table(&[LeagueEntryDto {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            league_points: 45,
            wins: 30,
            losses: 10,
        }]);

        assert!(table.contains("RANKED_SOLO_5x5"));
        assert!(table.contains("GOLD II"));
        assert!(table.contains("45"));
        assert!(table.contains("30W/10L"));
        assert!(table.contains("75.00%"));
    }
}
