//! Strategy enum for selecting how a step counts neighbors.
//!
//! Both strategies produce the same next generation; they differ only in
//! whether neighbor counting is spread across rayon's thread pool.

/// Available neighbor-counting strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single HashMap, one thread
    #[default]
    Serial,
    /// Per-thread HashMaps folded and merged with rayon
    Parallel,
}

impl Strategy {
    #[cfg(test)]
    fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel]
    }

    /// Display name for the status line
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
        }
    }

    /// The other strategy
    pub fn toggled(self) -> Self {
        match self {
            Strategy::Serial => Strategy::Parallel,
            Strategy::Parallel => Strategy::Serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Strategy::default(), Strategy::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Strategy::all().iter().map(|s| s.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_toggled_round_trips() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.toggled().toggled(), strategy);
        }
    }
}
