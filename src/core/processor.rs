//! Statistics derived from a parsed log.
//!
//! [`get_stats`] is a read-only projection over a [`ChatLog`]; it can be
//! recomputed at any time and holds no state of its own.

use std::collections::BTreeMap;

use serde::Serialize;

use super::models::{ChatLog, Event};
use crate::message::MessageKind;

/// Message share of a single sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderStats {
    pub sender: String,
    pub count: usize,
    /// `round(100 * count / total_messages)`
    pub percentage: u32,
}

/// Summary statistics of a chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_messages: usize,
    /// Number of date markers.
    pub total_days: usize,
    pub unique_senders: usize,
    /// Sorted by count descending, ties in order of first appearance.
    pub senders: Vec<SenderStats>,
    pub by_kind: BTreeMap<MessageKind, usize>,
}

impl Stats {
    /// Looks up the entry of one sender.
    pub fn sender(&self, name: &str) -> Option<&SenderStats> {
        self.senders.iter().find(|s| s.sender == name)
    }

    /// Returns how many messages have the given kind.
    pub fn kind_count(&self, kind: MessageKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Computes statistics over the messages and date markers of a log.
///
/// # Example
///
/// ```
/// let log = kakaolog::parse(
///     "[A] [10:00] one\n[A] [10:01] two\n[A] [10:02] three\n[B] [10:03] four\n",
/// );
/// let stats = kakaolog::get_stats(&log);
///
/// assert_eq!(stats.total_messages, 4);
/// assert_eq!(stats.sender("A").unwrap().percentage, 75);
/// assert_eq!(stats.sender("B").unwrap().percentage, 25);
/// ```
pub fn get_stats(log: &ChatLog) -> Stats {
    let mut total_messages = 0;
    let mut total_days = 0;
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut by_kind = BTreeMap::new();

    for event in log.events() {
        match event {
            Event::DateMarker { .. } => total_days += 1,
            Event::Message(msg) => {
                total_messages += 1;
                *by_kind.entry(msg.kind()).or_insert(0) += 1;
                match counts.iter_mut().find(|(name, _)| *name == msg.sender) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((&msg.sender, 1)),
                }
            }
        }
    }

    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let senders: Vec<SenderStats> = counts
        .into_iter()
        .map(|(sender, count)| SenderStats {
            sender: sender.to_string(),
            count,
            percentage: percentage(count, total_messages),
        })
        .collect();

    Stats {
        total_messages,
        total_days,
        unique_senders: senders.len(),
        senders,
        by_kind,
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u32
}
