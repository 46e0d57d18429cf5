//! Per-attempt match state

use seqmatch_core::Event;

/// The in-progress binding of terms to events for one match attempt.
///
/// Bindings hold indices into the borrowed event slice, parallel to the
/// definition's term order; events are only cloned when a completed match
/// is finalized. A context is private to one matcher invocation and never
/// shared across concurrent attempts.
#[derive(Debug)]
pub struct MatchContext<'a> {
    events: &'a [Event],
    bindings: Vec<Vec<usize>>,
}

impl<'a> MatchContext<'a> {
    /// Create an empty context for a definition with `term_count` terms
    pub fn new(events: &'a [Event], term_count: usize) -> Self {
        Self {
            events,
            bindings: vec![Vec::new(); term_count],
        }
    }

    /// Indices of the events currently bound to the term at `index`
    pub fn bound(&self, index: usize) -> &[usize] {
        &self.bindings[index]
    }

    /// Last event bound to the term at `index`, if any.
    ///
    /// A term satisfied through a zero-count quantifier has no last event;
    /// conditions referencing it then evaluate to false.
    pub fn last_event(&self, index: usize) -> Option<&'a Event> {
        self.bindings[index].last().map(|&i| &self.events[i])
    }

    /// Whether no term has bound an event yet
    pub fn is_unanchored(&self) -> bool {
        self.bindings.iter().all(|binding| binding.is_empty())
    }

    /// Index of the last event bound by any term
    pub fn last_bound_index(&self) -> Option<usize> {
        self.bindings
            .iter()
            .filter_map(|binding| binding.last().copied())
            .max()
    }

    pub(crate) fn set_binding(&mut self, index: usize, indices: Vec<usize>) {
        self.bindings[index] = indices;
    }

    pub(crate) fn clear_binding(&mut self, index: usize) {
        self.bindings[index].clear();
    }

    pub(crate) fn clear_all(&mut self) {
        for binding in &mut self.bindings {
            binding.clear();
        }
    }
}
