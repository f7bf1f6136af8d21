use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AssessmentEntry;

/// Number of entries shown in the recent activity view.
pub const RECENT_ACTIVITY_LEN: usize = 5;

/// Direction of a category's score between its first and latest entry.
///
/// Lower scores mean fewer symptoms, so a falling score is `Improving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Increasing,
    Stable,
}

impl Trend {
    fn between(first: u8, latest: u8) -> Self {
        match first.cmp(&latest) {
            std::cmp::Ordering::Greater => Trend::Improving,
            std::cmp::Ordering::Less => Trend::Increasing,
            std::cmp::Ordering::Equal => Trend::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Increasing => "increasing",
            Trend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhobiaAnalytics {
    #[serde(rename = "type")]
    pub category: String,
    pub sessions: usize,
    pub first_score: u8,
    pub latest_score: u8,
    /// `first_score - latest_score`; positive means symptoms went down.
    pub improvement: i32,
    pub trend: Trend,
    pub avg_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_sessions: usize,
    /// One summary per category, in order of first appearance.
    pub by_phobia: Vec<PhobiaAnalytics>,
    /// Most recent entries first.
    pub recent_activity: Vec<AssessmentEntry>,
    pub join_date: DateTime<Utc>,
}

impl Analytics {
    pub fn category(&self, category: &str) -> Option<&PhobiaAnalytics> {
        self.by_phobia.iter().find(|p| p.category == category)
    }
}

/// Summarize a history in recording order. Returns `None` for an empty one.
pub fn summarize(entries: &[AssessmentEntry], join_date: DateTime<Utc>) -> Option<Analytics> {
    if entries.is_empty() {
        return None;
    }

    let mut partitions: Vec<(&str, Vec<u8>)> = Vec::new();
    for entry in entries {
        match partitions.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, scores)) => scores.push(entry.score),
            None => partitions.push((entry.category.as_str(), vec![entry.score])),
        }
    }

    let by_phobia = partitions
        .into_iter()
        .map(|(category, scores)| summarize_category(category, &scores))
        .collect();

    let recent_activity = entries
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_LEN)
        .cloned()
        .collect();

    Some(Analytics {
        total_sessions: entries.len(),
        by_phobia,
        recent_activity,
        join_date,
    })
}

fn summarize_category(category: &str, scores: &[u8]) -> PhobiaAnalytics {
    let first = scores[0];
    let latest = scores[scores.len() - 1];
    PhobiaAnalytics {
        category: category.to_string(),
        sessions: scores.len(),
        first_score: first,
        latest_score: latest,
        improvement: i32::from(first) - i32::from(latest),
        trend: Trend::between(first, latest),
        avg_score: super::mean_score(scores),
    }
}
