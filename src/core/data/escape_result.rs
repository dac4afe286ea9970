/// Outcome of iterating a single point.
///
/// `iterations` is always in `1..=max_iterations`; a `NonTerminated` result
/// always carries `max_iterations` itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    Escaped { iterations: u32 },
    NonTerminated { iterations: u32 },
}

impl EscapeResult {
    #[must_use]
    pub const fn iterations(self) -> u32 {
        match self {
            Self::Escaped { iterations } | Self::NonTerminated { iterations } => iterations,
        }
    }
}
