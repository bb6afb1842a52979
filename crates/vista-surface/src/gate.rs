//! The one-shot fetch gate.

/// Phase of a usage site's fetch lifecycle.
///
/// The gate moves from `NotRequested` to `Requested` exactly once and
/// never reverts for the life of the usage site. Unmounting discards
/// the gate along with the rest of the site's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been dispatched yet.
    NotRequested,
    /// The fetch request has been dispatched.
    Requested,
}

/// A two-state latch guarding the on-mount fetch dispatch.
#[derive(Debug)]
pub struct FetchGate {
    phase: FetchPhase,
}

impl FetchGate {
    /// A gate that has not fired.
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::NotRequested,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// True once the gate has fired.
    pub fn is_requested(&self) -> bool {
        self.phase == FetchPhase::Requested
    }

    /// Transition to `Requested`. Returns true on the transition call
    /// only; every later call returns false.
    pub fn fire(&mut self) -> bool {
        match self.phase {
            FetchPhase::NotRequested => {
                self.phase = FetchPhase::Requested;
                true
            }
            FetchPhase::Requested => false,
        }
    }
}

impl Default for FetchGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut gate = FetchGate::new();
        assert_eq!(gate.phase(), FetchPhase::NotRequested);
        assert!(gate.fire());
        assert_eq!(gate.phase(), FetchPhase::Requested);
        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.is_requested());
    }
}
