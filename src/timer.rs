use std::time::{ Duration, Instant };

/// Stopwatch for the pipeline stages.
pub struct Timer{
    start: Instant,
    lap: Instant,
}

impl Timer{
    pub fn new() -> Self{
        let start = Instant::now();
        Self{ start, lap: start }
    }

    /// Time since the last lap, then starts a new lap.
    pub fn lap(&mut self) -> Duration{
        let now = Instant::now();
        let elapsed = now - self.lap;
        self.lap = now;
        elapsed
    }

    pub fn total(&self) -> Duration{
        self.start.elapsed()
    }
}
