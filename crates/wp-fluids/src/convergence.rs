//! Outcome of a capped iterative solve.

/// Result of an iterative solver bounded by a fixed iteration cap.
///
/// Non-convergence is an ordinary value rather than an error: callers
/// decide whether to drop the sample that needed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Convergence<T> {
    Converged { value: T, iterations: usize },
    DidNotConverge { last: T, iterations: usize },
}

impl<T> Convergence<T> {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// The converged value, or `None` if the cap was hit.
    pub fn converged(self) -> Option<T> {
        match self {
            Self::Converged { value, .. } => Some(value),
            Self::DidNotConverge { .. } => None,
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            Self::Converged { iterations, .. } | Self::DidNotConverge { iterations, .. } => {
                *iterations
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Convergence<U> {
        match self {
            Self::Converged { value, iterations } => Convergence::Converged {
                value: f(value),
                iterations,
            },
            Self::DidNotConverge { last, iterations } => Convergence::DidNotConverge {
                last: f(last),
                iterations,
            },
        }
    }
}
