use std::collections::VecDeque;

use crate::grid::Pos;

/// Snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Pos>,
}

impl Snake {
    /// A single segment at `head`.
    pub fn new(head: Pos) -> Self {
        Snake {
            body: VecDeque::from([head]),
        }
    }

    /// Builds a snake from its segments, head first. Returns `None` for an empty body.
    pub fn from_segments(segments: impl IntoIterator<Item = Pos>) -> Option<Self> {
        let body: VecDeque<Pos> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Pos> {
        self.body.iter().copied().collect()
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.body.contains(&pos)
    }

    pub fn move_head(&mut self, new_head: Pos) {
        self.body.push_front(new_head);
    }

    /// Removes the last segment, but never the head.
    pub fn drop_tail(&mut self) -> Option<Pos> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// True if the head shares a cell with any later segment.
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}
