pub mod card;
pub mod classify;
pub mod filter;
pub mod format;

pub use card::PredictionCard;
pub use classify::Thresholds;
pub use filter::Filter;

use serde::Serialize;

use crate::feed::{PredictionFeed, StatsSummary};

/// Formatted stats row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_games: String,
    pub high_confidence: String,
    pub win_rate_7d: String,
    pub win_rate_30d: String,
}

impl StatsView {
    pub fn from_summary(stats: &StatsSummary) -> Self {
        StatsView {
            total_games: format::count(stats.total_games),
            high_confidence: format::count(stats.high_confidence),
            win_rate_7d: format::rate(stats.model_win_rate_7d),
            win_rate_30d: format::rate(stats.model_win_rate_30d),
        }
    }

    /// What the page shows before a feed has been loaded.
    pub fn placeholder() -> Self {
        Self::from_summary(&StatsSummary::default())
    }
}

/// View-model for one load of the feed: the classified cards plus the active
/// filter. Card visibility is always derived from `filter`.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub stats: StatsView,
    pub timestamp: String,
    pub filter: Filter,
    pub cards: Vec<PredictionCard>,
}

impl Board {
    /// Classify every record, keeping feed order.
    pub fn from_feed(feed: &PredictionFeed, thresholds: &Thresholds) -> Self {
        let cards = feed
            .predictions
            .iter()
            .flatten()
            .map(|record| PredictionCard::from_record(record, thresholds))
            .collect();

        Board {
            stats: StatsView::from_summary(&feed.stats),
            timestamp: feed.timestamp.clone(),
            filter: Filter::All,
            cards,
        }
    }

    /// Make `filter` the active filter and recompute visibility of every card.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.filter = filter;
        for card in &mut self.cards {
            card.visible = filter.matches(card);
        }
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &PredictionCard> {
        self.cards.iter().filter(|c| c.visible)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
