//! Cyclic step indicator for the "work process" section.

/// 1-based position in a fixed cycle of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCycle {
    current: usize,
    total: usize,
}

impl StepCycle {
    pub fn new(total: usize) -> Self {
        Self { current: 1, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Move to the next step, wrapping to 1 after the last.
    pub fn advance(&mut self) -> usize {
        self.current = if self.current >= self.total { 1 } else { self.current + 1 };
        self.current
    }

    /// Jump to `step`. Out-of-range numbers are ignored.
    pub fn jump(&mut self, step: usize) -> bool {
        if step == 0 || step > self.total {
            return false;
        }
        self.current = step;
        true
    }
}

pub fn parse_step(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
