pub mod champion_stats;
pub mod match_summary;
pub mod ranked;
