use crate::maps::GameMap;

/// Rounds in the look-back window; the round after it is the one predicted.
pub const WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakBucket {
    pub attempts: u32,
    pub successes: u32,
}

impl StreakBucket {
    /// Share of windows followed by a win, in `[0, 1]`; zero without attempts.
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.successes as f64 / self.attempts as f64
    }
}

/// Buckets keyed by how many of the `WINDOW` rounds the team won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakBuckets {
    buckets: [StreakBucket; WINDOW + 1],
}

impl StreakBuckets {
    pub fn from_buckets(buckets: [StreakBucket; WINDOW + 1]) -> Self {
        Self { buckets }
    }

    pub fn get(&self, wins: usize) -> Option<&StreakBucket> {
        self.buckets.get(wins)
    }

    /// `(wins, bucket)` pairs from the longest streak down to none.
    pub fn iter_desc(&self) -> impl Iterator<Item = (usize, &StreakBucket)> {
        self.buckets.iter().enumerate().rev()
    }

    pub fn total_attempts(&self) -> u32 {
        self.buckets.iter().map(|b| b.attempts).sum()
    }

    pub fn merge(mut self, other: &StreakBuckets) -> Self {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            mine.attempts += theirs.attempts;
            mine.successes += theirs.successes;
        }
        self
    }

    fn record(&mut self, wins: usize, next_won: bool) {
        let bucket = &mut self.buckets[wins];
        bucket.attempts += 1;
        if next_won {
            bucket.successes += 1;
        }
    }
}

/// Slides a stride-1 window over every map and buckets the window's win count
/// against the result of the following round. Counts are summed across maps.
pub fn analyze(maps: &[GameMap], team_name: &str) -> StreakBuckets {
    let mut out = StreakBuckets::default();
    for map in maps {
        let won: Vec<bool> = map.winners().map(|w| w == team_name).collect();
        for window in won.windows(WINDOW + 1) {
            let (last, next) = window.split_at(WINDOW);
            let wins = last.iter().filter(|&&w| w).count();
            out.record(wins, next[0]);
        }
    }
    out
}
