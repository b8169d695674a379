use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// hands out load generations. beginning a new load makes every ticket
/// issued before it stale.
#[derive(Debug, Clone, Default)]
pub struct LoadCoordinator {
    current: Arc<AtomicU64>,
}

/// proof that a load was started, checked before its result is kept.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LoadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            current: self.current.clone(),
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    pub fn is_current(&self) -> bool {
        self.generation == self.current_generation()
    }
}

#[cfg(test)]
mod test {
    use super::LoadCoordinator;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let coordinator = LoadCoordinator::new();
        let first = coordinator.begin();
        assert!(first.is_current());
        let second = coordinator.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(coordinator.current_generation(), 2);
    }
}
