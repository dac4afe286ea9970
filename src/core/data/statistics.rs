use crate::core::data::escape_result::EscapeResult;
use std::fmt;

/// Escape-count bounds over the escaped points of one render.
///
/// When no point escaped both bounds are `0`; [`Statistics::has_escapes`]
/// tells that case apart from a real escape count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Statistics {
    quickest_escape: u32,
    slowest_escape: u32,
    escaped: usize,
    non_terminated: usize,
}

impl Statistics {
    #[must_use]
    pub fn quickest_escape(&self) -> u32 {
        self.quickest_escape
    }

    #[must_use]
    pub fn slowest_escape(&self) -> u32 {
        self.slowest_escape
    }

    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.escaped
    }

    #[must_use]
    pub fn non_terminated_count(&self) -> usize {
        self.non_terminated
    }

    #[must_use]
    pub fn has_escapes(&self) -> bool {
        self.escaped > 0
    }

    fn record(&mut self, result: EscapeResult) {
        match result {
            EscapeResult::Escaped { iterations } => {
                if self.escaped == 0 {
                    self.quickest_escape = iterations;
                    self.slowest_escape = iterations;
                } else {
                    self.quickest_escape = self.quickest_escape.min(iterations);
                    self.slowest_escape = self.slowest_escape.max(iterations);
                }
                self.escaped += 1;
            }
            EscapeResult::NonTerminated { .. } => {
                self.non_terminated += 1;
            }
        }
    }
}

impl FromIterator<EscapeResult> for Statistics {
    fn from_iter<I: IntoIterator<Item = EscapeResult>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut statistics, result| {
                statistics.record(result);
                statistics
            })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_escapes() {
            return write!(
                f,
                "no points escaped ({} non-terminated)",
                self.non_terminated
            );
        }

        write!(
            f,
            "quickest escape: {}, slowest escape: {} ({} escaped, {} non-terminated)",
            self.quickest_escape, self.slowest_escape, self.escaped, self.non_terminated
        )
    }
}
