//! Sequence-stamping item processor.
//!
//! [`DataProcessor`] wraps each item it sees with a monotonically increasing
//! sequence id and a processing timestamp. Each processor owns its own
//! counter, so independent processors number independently; sharing one
//! across threads requires external serialization (it is single-writer by
//! construction, `&mut self`).

use serde::{Deserialize, Serialize};
use timeutil::current_timestamp;

/// An item stamped by [`DataProcessor::process_item`].
///
/// The payload moves through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedItem<T> {
    /// Sequence id, 1-based in call order.
    pub id: u64,
    /// Local ISO-8601 timestamp taken when the item was processed.
    pub processed_at: String,
    /// The original payload.
    pub data: T,
}

/// Cumulative processing statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorStats {
    /// Items processed so far.
    pub total_processed: u64,
    /// Timestamp taken when the stats were read, not when the last item was
    /// processed.
    pub last_processed_at: String,
}

/// Stateful processor with a per-instance counter.
///
/// The counter only increases, once per processed item, and never resets for
/// the lifetime of the instance.
#[derive(Debug, Default)]
pub struct DataProcessor {
    processed_count: u64,
}

impl DataProcessor {
    /// Create a fresh processor (count 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp an item with the next sequence id and the current timestamp.
    pub fn process_item<T>(&mut self, item: T) -> ProcessedItem<T> {
        self.processed_count += 1;
        tracing::debug!(id = self.processed_count, "Processed item");
        ProcessedItem {
            id: self.processed_count,
            processed_at: current_timestamp(),
            data: item,
        }
    }

    /// Cumulative statistics for this processor.
    pub fn stats(&self) -> ProcessorStats {
        ProcessorStats {
            total_processed: self.processed_count,
            last_processed_at: current_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut processor = DataProcessor::new();

        let first = processor.process_item("a");
        let second = processor.process_item("b");
        let third = processor.process_item("c");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_payload_passes_through_unmodified() {
        let mut processor = DataProcessor::new();
        let payload = json!({"key": "value", "nested": [1, 2, 3]});

        let item = processor.process_item(payload.clone());

        assert_eq!(item.data, payload);
    }

    #[test]
    fn test_stats_track_total() {
        let mut processor = DataProcessor::new();
        assert_eq!(processor.stats().total_processed, 0);

        for n in 0..3 {
            processor.process_item(n);
        }

        assert_eq!(processor.stats().total_processed, 3);
    }

    #[test]
    fn test_processors_count_independently() {
        let mut left = DataProcessor::new();
        let mut right = DataProcessor::new();

        left.process_item("x");
        left.process_item("y");

        assert_eq!(right.process_item("z").id, 1);
        assert_eq!(left.stats().total_processed, 2);
        assert_eq!(right.stats().total_processed, 1);
    }

    #[test]
    fn test_processed_at_is_parseable() {
        let mut processor = DataProcessor::new();
        let item = processor.process_item(());

        assert!(item
            .processed_at
            .parse::<chrono::NaiveDateTime>()
            .is_ok());
    }
}
