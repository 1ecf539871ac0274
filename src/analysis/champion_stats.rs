use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionStats {
    pub name: String,
    pub plays: usize,
    pub wins: usize, // always <= plays
}

impl ChampionStats {
    pub fn new(name: String) -> Self {
        ChampionStats {
            name,
            plays: 0,
            wins: 0,
        }
    }

    /// Win percentage in `0.0..=100.0`.
    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            (self.wins as f64 / self.plays as f64) * 100.0
        }
    }

    /// Win percentage with two decimals, e.g. `66.67`.
    pub fn win_rate_label(&self) -> String {
        format!("{:.2}", self.win_rate())
    }

    /// Most played first, then champion name A-Z.
    pub fn ranking_order(a: &ChampionStats, b: &ChampionStats) -> Ordering {
        b.plays.cmp(&a.plays).then_with(|| a.name.cmp(&b.name))
    }
}

#[derive(Debug)]
pub struct ChampionStatsTracker {
    stats: HashMap<String, ChampionStats>,
}

impl ChampionStatsTracker {
    pub fn new() -> Self {
        ChampionStatsTracker {
            stats: HashMap::new(),
        }
    }

    pub fn add_game(&mut self, champion_name: &str, won: bool) {
        let entry = self
            .stats
            .entry(champion_name.to_string())
            .or_insert_with(|| ChampionStats::new(champion_name.to_string()));

        entry.plays += 1;
        if won {
            entry.wins += 1;
        }
    }

    pub fn total_plays(&self) -> usize {
        self.stats.values().map(|s| s.plays).sum()
    }

    /// Every champion in ranking order.
    pub fn ranked(&self) -> Vec<ChampionStats> {
        let mut stats: Vec<ChampionStats> = self.stats.values().cloned().collect();
        stats.sort_by(ChampionStats::ranking_order);
        stats
    }

    pub fn top(&self, n: usize) -> Vec<ChampionStats> {
        let mut stats = self.ranked();
        stats.truncate(n);
        stats
    }

    #[cfg(test)]
    pub fn get_champion(&self, name: &str) -> Option<ChampionStats> {
        self.stats.get(name).cloned()
    }
}

impl Default for ChampionStatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
