use std::fmt::{Display, Error, Formatter};

fn now() -> f64 {
    // `instant::now()` reports milliseconds.
    instant::now() / 1000.0
}

/// A resumable timer accumulating wall-clock seconds.
#[derive(Copy, Clone, Debug, Default)]
pub struct Timer {
    time: f64,
    start: Option<f64>,
}

impl Timer {
    /// Creates a new timer initialized to zero, not running.
    pub fn new() -> Self {
        Timer {
            time: 0.0,
            start: None,
        }
    }

    /// Resets the accumulated time to zero and stops the timer.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.start = None;
    }

    /// Resumes the timer.
    pub fn resume(&mut self) {
        self.start = Some(now());
    }

    /// Pauses the timer, adding the elapsed time since the last resume to the
    /// accumulated total.
    pub fn pause(&mut self) {
        if let Some(start) = self.start {
            self.time += now() - start;
        }
        self.start = None;
    }

    /// The time accumulated by this timer, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Display for Timer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}s", self.time)
    }
}

#[cfg(test)]
mod test {
    use super::Timer;

    #[test]
    fn pause_accumulates_and_reset_clears() {
        let mut timer = Timer::new();
        timer.resume();
        timer.pause();
        assert!(timer.time() >= 0.0);

        timer.reset();
        assert_eq!(timer.time(), 0.0);
    }

    #[test]
    fn pause_without_resume_is_a_noop() {
        let mut timer = Timer::new();
        timer.pause();
        assert_eq!(timer.time(), 0.0);
    }
}
