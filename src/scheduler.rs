/// Fixed-period launch clock.
///
/// The counter counts the current tick, so with a period of `P` a batch is
/// due on ticks `P-1`, `2P-1`, ... (zero based) and `N` ticks hold exactly
/// `N / P` batches.
#[derive(Debug, Clone)]
pub struct Scheduler {
    period: u32,
    counter: u32,
}

impl Scheduler {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            counter: 0,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn is_due(&self) -> bool {
        self.counter + 1 == self.period
    }

    pub fn advance(&mut self) {
        self.counter = (self.counter + 1) % self.period;
    }
}
