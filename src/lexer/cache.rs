//! Memo of pattern searches for one lex run.
//!
//! The scan position never moves backwards, so a search made from an earlier
//! position stays valid until the position passes the match it found. The
//! only match a later search could add is one starting exactly at the new
//! position, where the haystack now begins; an anchored check covers that.
//! Each pattern's full searches therefore scan disjoint stretches of the
//! input, which keeps a run linear in the input length.
//!
//! Entries are keyed by pattern, not by frame: a mode's `begin` is the same
//! pattern whichever mode contains it, and re-entering a mode reuses what
//! earlier frames of it already found.

use crate::grammar::ModeId;
use crate::pattern::Matcher;

/// Which pattern of a mode is being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Slot {
    Begin = 0,
    End = 1,
    Illegal = 2,
}

const SLOTS_PER_MODE: usize = 3;

impl Slot {
    /// `end` may close a mode with an empty match; `begin` and `illegal`
    /// must consume input.
    fn allows_empty(self) -> bool {
        matches!(self, Self::End)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Position the result was computed for
    from: usize,
    found: Option<(usize, usize)>,
}

#[derive(Debug)]
pub(super) struct SearchCache {
    entries: Vec<Option<Entry>>,
}

impl SearchCache {
    pub(super) fn new(mode_count: usize) -> Self {
        Self {
            entries: vec![None; mode_count * SLOTS_PER_MODE],
        }
    }

    /// First match of `pattern` at or after `pos`, non-empty unless the slot
    /// allows empty matches.
    pub(super) fn find(
        &mut self,
        mode: ModeId,
        slot: Slot,
        pattern: &dyn Matcher,
        text: &str,
        pos: usize,
    ) -> Option<(usize, usize)> {
        let index = mode.index() * SLOTS_PER_MODE + slot as usize;
        let allows_empty = slot.allows_empty();

        let found = match self.entries[index] {
            Some(entry) if entry.from == pos => return entry.found,
            Some(entry)
                if entry.from < pos && entry.found.is_none_or(|(start, _)| start >= pos) =>
            {
                match pattern
                    .match_at(text, pos)
                    .filter(|&end| allows_empty || end > pos)
                {
                    Some(end) => Some((pos, end)),
                    // The cached match began here but was found with more
                    // text behind it.
                    None if entry.found.is_some_and(|(start, _)| start == pos) => {
                        search(pattern, text, pos, allows_empty)
                    }
                    None => entry.found,
                }
            }
            _ => search(pattern, text, pos, allows_empty),
        };

        self.entries[index] = Some(Entry { from: pos, found });
        found
    }
}

fn search(pattern: &dyn Matcher, text: &str, pos: usize, allows_empty: bool) -> Option<(usize, usize)> {
    if allows_empty {
        pattern.find(text, pos)
    } else {
        pattern.find_non_empty(text, pos)
    }
}
