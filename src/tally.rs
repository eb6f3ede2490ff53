use std::collections::HashMap;

use palette::Srgb;

/// Occurrence counts of composited colors for a single extraction.
///
/// The leader is tracked while counting: a color takes the lead only when
/// its count strictly exceeds the current maximum. Among colors tied at the
/// final maximum, the one that reached that count first in scan order wins,
/// independent of map iteration order.
#[derive(Debug, Default)]
pub struct ColorTally {
    counts: HashMap<[u8; 3], usize>,
    leader: Option<([u8; 3], usize)>,
    total: usize,
}

impl ColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `color` and return its new count.
    pub fn record(&mut self, color: Srgb<u8>) -> usize {
        let key = [color.red, color.green, color.blue];
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        let count = *count;

        let max = self.leader.map_or(0, |(_, n)| n);
        if count > max {
            self.leader = Some((key, count));
        }

        self.total += 1;
        count
    }

    /// Most frequent color and its count.
    pub fn leader(&self) -> Option<(Srgb<u8>, usize)> {
        self.leader
            .map(|([r, g, b], count)| (Srgb::new(r, g, b), count))
    }

    /// Number of recorded pixels.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct colors.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count_of(&self, color: Srgb<u8>) -> usize {
        self.counts
            .get(&[color.red, color.green, color.blue])
            .copied()
            .unwrap_or(0)
    }
}
