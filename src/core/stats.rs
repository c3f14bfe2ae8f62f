//! Lock-free counters for diagnostic statistics.
//!
//! Worker threads bump the counters concurrently while rays are being
//! traced, the totals are only read once rendering has finished.

// others
use atomic::{Atomic, Ordering};
use log::info;

// see stats.h

#[derive(Debug)]
pub struct StatCounter {
    pub title: &'static str,
    count: Atomic<u64>,
}

impl StatCounter {
    pub fn new(title: &'static str) -> Self {
        StatCounter {
            title,
            count: Atomic::new(0_u64),
        }
    }
    pub fn inc(&self) {
        self.count.fetch_add(1_u64, Ordering::Relaxed);
    }
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
    pub fn report(&self) {
        info!("{:<40} {:>12}", self.title, self.get());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_from_many_threads() {
        let counter: StatCounter = StatCounter::new("Test/Increments");
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        counter.inc();
                    }
                });
            }
        });
        assert_eq!(counter.get(), 4000);
        assert_eq!(counter.title, "Test/Increments");
    }
}
