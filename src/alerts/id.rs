//! Alert identifiers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Issues alert ids for one batch.
///
/// Ids have the form `<unix-millis>-<sequence>-<random>`: the sequence is a
/// counter local to the generator, which makes ids unique within a batch, and
/// the random part comes from a v4 UUID, which keeps batches apart.
#[derive(Debug)]
pub struct AlertIdGenerator {
    millis: i64,
    sequence: u32,
}

impl AlertIdGenerator {
    /// Creates a generator stamped with the batch time.
    #[must_use]
    pub fn new(batch_time: DateTime<Utc>) -> Self {
        Self {
            millis: batch_time.timestamp_millis(),
            sequence: 0,
        }
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> String {
        self.sequence += 1;
        let random = Uuid::new_v4().simple().to_string();
        format!("{}-{:04}-{}", self.millis, self.sequence, &random[..12])
    }
}
