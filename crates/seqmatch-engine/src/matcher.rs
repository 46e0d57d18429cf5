//! Iterative backtracking matcher
//!
//! The search keeps one frame per term on an explicit stack; each frame
//! owns the remaining (start, count) alternatives for its term, ordered by
//! the quantifier's preference. Matches are enumerated left to right by
//! their first bound event: an attempt anchored at index `s` must bind
//! `events[s]` as its first event, so no match is ever reported twice.
//!
//! Definitions without a `->>` edge emit at most one match per anchor and
//! resume after the consumed region. Definitions containing `->>` fork one
//! branch per satisfying start position of each relaxed-any term and emit
//! one match per fork, with the anchor advancing a single event at a time
//! so overlapping matches are found.

use crate::context::MatchContext;
use crate::eval;
use crate::result::PatternMatch;
use seqmatch_core::ast::Contiguity;
use seqmatch_core::ir::{CompiledTerm, PatternDefinition};
use seqmatch_core::Event;
use std::collections::HashMap;

/// Collect every match of `definition` over `events`
pub fn find_matches(definition: &PatternDefinition, events: &[Event]) -> Vec<PatternMatch> {
    Matcher::new(definition, events).collect()
}

/// One alternative for a term: bind `count` events starting at `start`, or
/// bind nothing at all
#[derive(Debug, Clone, Copy, PartialEq)]
enum Alternative {
    Bind { start: usize, count: usize },
    Skip,
}

/// Attempt state for one term
#[derive(Debug)]
struct Frame {
    /// Term index this frame explores
    term: usize,
    /// Cursor position before this term began
    cursor: usize,
    /// Remaining alternatives, in preference order
    alternatives: Vec<Alternative>,
    /// Position of the next alternative to apply
    next: usize,
    /// Currently applied alternative
    applied: Option<Alternative>,
}

/// Lazy match iterator over one event sequence.
///
/// Each call to `next` resumes the saved search state, so results are
/// produced on demand in the order they are finalized.
pub struct Matcher<'a> {
    definition: &'a PatternDefinition,
    events: &'a [Event],
    ctx: MatchContext<'a>,
    stack: Vec<Frame>,
    anchor: usize,
    /// Any relaxed-any edge in the definition
    forking: bool,
    exhausted: bool,
}

impl<'a> Matcher<'a> {
    /// Create a matcher for `definition` over `events`
    pub fn new(definition: &'a PatternDefinition, events: &'a [Event]) -> Self {
        let forking = definition
            .terms()
            .iter()
            .any(|term| term.contiguity == Contiguity::RelaxedAny);
        Self {
            definition,
            events,
            ctx: MatchContext::new(events, definition.term_count()),
            stack: Vec::new(),
            anchor: 0,
            forking,
            exhausted: definition.term_count() == 0,
        }
    }

    /// Start positions the term may bind from, given its contiguity and
    /// whether the attempt has bound its first event yet
    fn candidate_starts(&self, term: &CompiledTerm, cursor: usize) -> Vec<usize> {
        if cursor >= self.events.len() {
            return Vec::new();
        }
        // until the first event is bound, every term starts at the anchor
        if self.ctx.is_unanchored() {
            return vec![cursor];
        }
        match term.contiguity {
            Contiguity::Strict => vec![cursor],
            Contiguity::Relaxed => (cursor..self.events.len())
                .find(|&i| eval::evaluate(&term.predicate, &self.events[i], &self.ctx))
                .map(|i| vec![i])
                .unwrap_or_default(),
            Contiguity::RelaxedAny => (cursor..self.events.len())
                .filter(|&i| eval::evaluate(&term.predicate, &self.events[i], &self.ctx))
                .collect(),
        }
    }

    /// Longest run of consecutive predicate-satisfying events at `start`,
    /// capped at the quantifier's max
    fn run_length(&self, term: &CompiledTerm, start: usize) -> usize {
        let cap = term
            .quantifier
            .max
            .map(|max| max as usize)
            .unwrap_or(self.events.len() - start);
        let mut length = 0;
        while length < cap
            && start + length < self.events.len()
            && eval::evaluate(&term.predicate, &self.events[start + length], &self.ctx)
        {
            length += 1;
        }
        length
    }

    /// Build the frame for `term_index` with the cursor at `cursor`,
    /// enumerating its alternatives in preference order
    fn make_frame(&self, term_index: usize, cursor: usize) -> Frame {
        let term = &self.definition.terms()[term_index];
        let spec = &term.quantifier;

        let zero_allowed = spec.allows_zero();
        // reluctant zero-minimum quantifiers try the empty binding first;
        // optional and greedy ones fall back to it last
        let zero_first = zero_allowed && spec.min == 0 && !spec.greedy;

        let mut alternatives = Vec::new();
        if zero_first {
            alternatives.push(Alternative::Skip);
        }
        for start in self.candidate_starts(term, cursor) {
            let available = self.run_length(term, start);
            let lowest = spec.min.max(1) as usize;
            if available >= lowest {
                if spec.greedy {
                    for count in (lowest..=available).rev() {
                        alternatives.push(Alternative::Bind { start, count });
                    }
                } else {
                    for count in lowest..=available {
                        alternatives.push(Alternative::Bind { start, count });
                    }
                }
            }
        }
        if zero_allowed && !zero_first {
            alternatives.push(Alternative::Skip);
        }

        Frame {
            term: term_index,
            cursor,
            alternatives,
            next: 0,
            applied: None,
        }
    }

    /// Finalize the current context into a match result
    fn finalize(&self) -> PatternMatch {
        let mut bindings = HashMap::new();
        for (index, term) in self.definition.terms().iter().enumerate() {
            let bound = self.ctx.bound(index);
            if !bound.is_empty() {
                bindings.insert(
                    term.name.clone(),
                    bound.iter().map(|&i| self.events[i].clone()).collect(),
                );
            }
        }
        PatternMatch::new(bindings)
    }

    /// After emitting a match, drop state down to the nearest relaxed-any
    /// frame that still has an unexplored start position. Remaining counts
    /// at the applied start are quantifier alternatives, not forks, and
    /// are skipped. With no fork left, the anchor advances by one.
    fn unwind_to_fork(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            let contiguity = self.definition.terms()[frame.term].contiguity;
            if contiguity == Contiguity::RelaxedAny {
                if let Some(Alternative::Bind { start, .. }) = frame.applied {
                    while let Some(Alternative::Bind { start: s, .. }) =
                        frame.alternatives.get(frame.next)
                    {
                        if *s != start {
                            break;
                        }
                        frame.next += 1;
                    }
                }
                if frame.next < frame.alternatives.len() {
                    return;
                }
            }
            let term = frame.term;
            self.ctx.clear_binding(term);
            self.stack.pop();
        }
        self.anchor += 1;
    }
}

impl<'a> Iterator for Matcher<'a> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<PatternMatch> {
        if self.exhausted {
            return None;
        }
        loop {
            if self.stack.is_empty() {
                if self.anchor >= self.events.len() {
                    self.exhausted = true;
                    return None;
                }
                tracing::trace!(anchor = self.anchor, "starting match attempt");
                let frame = self.make_frame(0, self.anchor);
                self.stack.push(frame);
            }

            // take the next alternative of the top frame
            let (frame_term, frame_cursor, alternative) = {
                let frame = self.stack.last_mut().expect("stack is non-empty");
                match frame.alternatives.get(frame.next).copied() {
                    Some(alternative) => {
                        frame.next += 1;
                        frame.applied = Some(alternative);
                        (frame.term, frame.cursor, alternative)
                    }
                    None => {
                        // exhausted: undo this term and backtrack
                        let term = frame.term;
                        self.ctx.clear_binding(term);
                        self.stack.pop();
                        if self.stack.is_empty() {
                            self.anchor += 1;
                        }
                        continue;
                    }
                }
            };

            tracing::trace!(term = frame_term, ?alternative, "applying alternative");
            let cursor_after = match alternative {
                Alternative::Bind { start, count } => {
                    self.ctx
                        .set_binding(frame_term, (start..start + count).collect());
                    start + count
                }
                Alternative::Skip => {
                    self.ctx.clear_binding(frame_term);
                    frame_cursor
                }
            };

            if frame_term + 1 < self.definition.term_count() {
                let frame = self.make_frame(frame_term + 1, cursor_after);
                self.stack.push(frame);
                continue;
            }

            // every term satisfied; reject traversals that bound nothing
            if let Some(last) = self.ctx.last_bound_index() {
                let result = self.finalize();
                tracing::debug!(anchor = self.anchor, end = last, "match finalized");
                if self.forking {
                    self.unwind_to_fork();
                } else {
                    // resume after the consumed region
                    self.ctx.clear_all();
                    self.stack.clear();
                    self.anchor = last + 1;
                }
                return Some(result);
            }
        }
    }
}
