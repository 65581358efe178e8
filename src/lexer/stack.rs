//! The explicit mode stack.
//!
//! Grammars may nest a mode inside itself, so nesting depth depends on the
//! input. Frames live on the heap instead of the call stack.

use crate::grammar::ModeId;

/// One active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStackFrame {
    pub mode: ModeId,
    /// Offset of the begin token that opened the mode
    pub entry_offset: usize,
    /// Start of this mode's own text that has not been emitted yet
    pub text_start: usize,
}

/// Stack of active modes. Never empty: the bottom frame is the default mode
/// and is never popped.
#[derive(Debug, Clone)]
pub struct ModeStack {
    frames: Vec<ModeStackFrame>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ModeStackFrame {
                mode: ModeId::DEFAULT,
                entry_offset: 0,
                text_start: 0,
            }],
        }
    }

    pub fn top(&self) -> ModeStackFrame {
        self.frames[self.frames.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut ModeStackFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn push(&mut self, mode: ModeId, entry_offset: usize) {
        self.frames.push(ModeStackFrame {
            mode,
            entry_offset,
            text_start: entry_offset,
        });
    }

    /// Pop the top frame. The bottom frame stays.
    pub fn pop(&mut self) -> Option<ModeStackFrame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Number of frames, the bottom frame included
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_at_bottom(&self) -> bool {
        self.frames.len() == 1
    }

    /// Frames above the default mode, outermost first.
    pub fn open_frames(&self) -> &[ModeStackFrame] {
        &self.frames[1..]
    }
}
