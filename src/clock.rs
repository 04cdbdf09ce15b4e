use std::{thread::sleep, time::{Duration, Instant}};

/// Frame-rate limiter: each `tick` returns no sooner than one interval
/// after the previous one.
pub struct Clock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = Duration::from_secs(1) / ticks_per_second.max(1);
        Clock { interval, last_tick: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn tick(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }
}
