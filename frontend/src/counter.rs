//! Count-up animation state, independent of the DOM.
//!
//! A counter waits until it is triggered (first time it scrolls into view),
//! then interpolates linearly from 0 to its target over a fixed duration.
//! Frame timestamps are milliseconds, as handed out by `requestAnimationFrame`.

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    NotTriggered,
    /// `started_at` is filled in by the first frame after triggering.
    Animating { started_at: Option<f64> },
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterMachine {
    target: u32,
    duration_ms: f64,
    value: u32,
    progress: f64,
    phase: CounterPhase,
}

impl CounterMachine {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            value: 0,
            progress: 0.0,
            phase: CounterPhase::NotTriggered,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Fraction of the duration elapsed, in `[0, 1]`.
    pub fn elapsed_ratio(&self) -> f64 {
        self.progress
    }

    /// Starts the animation. Only the first call has any effect.
    ///
    /// Returns whether frames need to be scheduled; a zero target or zero
    /// duration completes right away.
    pub fn trigger(&mut self) -> bool {
        if self.phase != CounterPhase::NotTriggered {
            return false;
        }
        if self.target == 0 || self.duration_ms <= 0.0 {
            self.finish();
            return false;
        }
        self.phase = CounterPhase::Animating { started_at: None };
        true
    }

    /// Advances to the frame at `now`. Returns whether another frame is wanted.
    pub fn frame(&mut self, now: f64) -> bool {
        let started_at = match self.phase {
            CounterPhase::Animating { started_at: Some(start) } => start,
            CounterPhase::Animating { started_at: None } => {
                self.phase = CounterPhase::Animating { started_at: Some(now) };
                now
            }
            CounterPhase::NotTriggered | CounterPhase::Complete => return false,
        };

        let progress = ((now - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.finish();
            return false;
        }

        self.progress = self.progress.max(progress);
        let value = (self.progress * f64::from(self.target)).floor() as u32;
        self.value = self.value.max(value.min(self.target));
        true
    }

    fn finish(&mut self) {
        self.progress = 1.0;
        self.value = self.target;
        self.phase = CounterPhase::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(machine: &mut CounterMachine, start: f64, step: f64) -> Vec<u32> {
        let mut seen = vec![machine.value()];
        let mut now = start;
        while machine.frame(now) {
            seen.push(machine.value());
            now += step;
        }
        seen.push(machine.value());
        seen
    }

    #[test]
    fn reaches_target_without_going_backwards() {
        for target in [1, 7, 72, 98, 150, 10_000] {
            let mut machine = CounterMachine::new(target, DEFAULT_DURATION_MS);
            assert!(machine.trigger());
            let seen = run_to_completion(&mut machine, 1234.5, 16.7);

            assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]), "target {target}");
            assert!(seen.iter().all(|v| *v <= target));
            assert_eq!(machine.value(), target);
            assert_eq!(machine.phase(), CounterPhase::Complete);
            assert_eq!(machine.elapsed_ratio(), 1.0);
        }
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut machine = CounterMachine::new(0, DEFAULT_DURATION_MS);
        assert!(!machine.trigger());
        assert_eq!(machine.value(), 0);
        assert_eq!(machine.phase(), CounterPhase::Complete);
        assert!(!machine.frame(10.0));
    }

    #[test]
    fn nothing_happens_before_trigger() {
        let mut machine = CounterMachine::new(150, DEFAULT_DURATION_MS);
        assert!(!machine.frame(500.0));
        assert_eq!(machine.value(), 0);
        assert_eq!(machine.phase(), CounterPhase::NotTriggered);
    }

    #[test]
    fn triggers_at_most_once() {
        let mut machine = CounterMachine::new(150, 1000.0);
        assert!(machine.trigger());
        assert!(machine.frame(0.0));
        assert!(machine.frame(500.0));
        assert_eq!(machine.value(), 75);

        assert!(!machine.trigger());
        assert_eq!(machine.phase(), CounterPhase::Animating { started_at: Some(0.0) });

        assert!(!machine.frame(1000.0));
        assert!(!machine.trigger());
        assert_eq!(machine.value(), 150);
    }

    #[test]
    fn first_frame_sets_the_clock() {
        let mut machine = CounterMachine::new(100, 2000.0);
        machine.trigger();
        assert!(machine.frame(10_000.0));
        assert_eq!(machine.value(), 0);
        assert!(machine.frame(11_000.0));
        assert_eq!(machine.value(), 50);
        assert!(!machine.frame(12_000.0));
        assert_eq!(machine.value(), 100);
    }

    #[test]
    fn late_frame_jumps_straight_to_target() {
        let mut machine = CounterMachine::new(72, 2000.0);
        machine.trigger();
        machine.frame(0.0);
        assert!(!machine.frame(60_000.0));
        assert_eq!(machine.value(), 72);
    }
}
