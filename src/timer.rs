use std::hint::black_box;

/// Wall-clock stopwatch with nanosecond resolution.
#[derive(Copy, Clone)]
pub struct Timer {
    last_time: u64,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            last_time: time::precise_time_ns(),
        }
    }

    /// Marks a new tick time and returns the time elapsed in seconds since
    /// the last call to tick().
    pub fn tick(&mut self) -> f64 {
        let n = time::precise_time_ns();
        let dt = n - self.last_time;
        self.last_time = n;

        dt as f64 / 1_000_000_000.0
    }
}

/// Timing results for a batch of evaluations.
#[derive(Debug, Copy, Clone)]
pub struct BatchStats {
    pub evaluations: u32,
    pub seconds: f64,
    /// Sum of all results, so the work can't be optimized away.
    pub checksum: f64,
}

impl BatchStats {
    pub fn evaluations_per_second(&self) -> f64 {
        if self.seconds > 0.0 {
            self.evaluations as f64 / self.seconds
        } else {
            0.0
        }
    }
}

/// Times `count` evaluations of `f` on inputs spread around `n`.
pub fn time_batch<F: Fn(f32) -> f32>(n: f32, count: u32, f: F) -> BatchStats {
    let mut timer = Timer::new();
    let mut checksum = 0.0f64;
    for i in 0..count {
        // Nudge the input up by a few ulps each round.
        let x = f32::from_bits(n.to_bits().wrapping_add(i & 0xff));
        checksum += black_box(f(black_box(x))) as f64;
    }
    let seconds = timer.tick();

    BatchStats {
        evaluations: count,
        seconds,
        checksum,
    }
}
