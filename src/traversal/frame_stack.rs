use core::fmt::{self, Debug, Formatter};
use log::trace;
use crate::{
    util::{position_by_identity, Stack},
    CursorError,
    CursorResult,
    Direction,
    Node,
};
use super::PreorderCursor;

/// One level of the path: the sibling list being walked and the node of that list which is on the path.
struct Frame<'a, T> {
    siblings: &'a [Node<T>],
    current: &'a Node<T>,
}
impl<'a, T> Frame<'a, T> {
    /// Locates `current` among `siblings`. Done on every sibling move instead of storing the index.
    fn position(&self) -> usize {
        position_by_identity(self.siblings, self.current)
            .expect("frame's current node is not in its sibling list")
    }
}
impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        Self {
            siblings: self.siblings,
            current: self.current,
        }
    }
}
impl<T: Debug> Debug for Frame<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("position", &self.position())
            .field("current", &self.current.value())
            .finish()
    }
}

/// How to reach the node after the gap.
enum Advance<'a, T> {
    /// Push a new level for the first of these children.
    Descend(&'a [Node<T>], &'a Node<T>),
    /// Drop every level deeper than `level`, then move that level to `node`.
    Sibling { level: usize, node: &'a Node<T> },
}
impl<'a, T> Advance<'a, T> {
    fn node(&self) -> &'a Node<T> {
        match self {
            Self::Descend(_, node) | Self::Sibling { node, .. } => *node,
        }
    }
}

/// A pre-order cursor which keeps, for every level of its path, the list of siblings being walked and the node of that list which is on the path.
///
/// The position of a node among its siblings is not stored; it's recomputed by looking the node up by identity whenever the cursor moves to a sibling. Descending and ascending only push and pop frames. Memory use is proportional to the depth of the tree.
///
/// See the [module-level documentation] for cursor semantics. [`IterStackCursor`] yields the same sequences with a different bookkeeping strategy.
///
/// # Example
/// ```rust
/// use kindling::{Node, FrameStackCursor};
///
/// let tree = Node::new(0)
///     .with_child(Node::new(1).with_child(Node::new(2)))
///     .with_child(Node::new(3));
///
/// // A fresh cursor can also start from the end.
/// let mut cursor = FrameStackCursor::new(&tree);
/// let mut values = Vec::new();
/// while cursor.has_previous() {
///     values.push(*cursor.previous()?.value());
/// }
/// assert_eq!(values, [3, 2, 1]);
/// # Ok::<(), kindling::CursorError>(())
/// ```
///
/// [module-level documentation]: index.html " "
/// [`IterStackCursor`]: struct.IterStackCursor.html " "
pub struct FrameStackCursor<'a, T> {
    root: &'a Node<T>,
    frames: Stack<Frame<'a, T>>,
    started: bool,
}
impl<'a, T> FrameStackCursor<'a, T> {
    /// Creates an unstarted cursor over the descendants of `root`.
    #[inline]
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            root,
            frames: Stack::new(),
            started: false,
        }
    }
    /// Returns the node the cursor was created for.
    #[inline(always)]
    pub const fn root(&self) -> &'a Node<T> {
        self.root
    }
    /// Returns the depth of the node right before the cursor, or 0 if there is none.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
    /// Brings the cursor back into the unstarted state.
    #[inline]
    pub fn reset(&mut self) {
        self.frames.clear();
        self.started = false;
    }

    fn advance(&self) -> Option<Advance<'a, T>> {
        // Before the first node, or on a branch: the next node is the first child.
        let parent = self.frames.last().map_or(self.root, |top| top.current);
        if let Some(first) = parent.first_child() {
            return Some(Advance::Descend(parent.children(), first));
        }
        // On a leaf: the next node is the following sibling of the deepest level which has one.
        self.frames
            .iter()
            .enumerate()
            .rev()
            .find_map(|(level, frame)| {
                frame
                    .siblings
                    .get(frame.position() + 1)
                    .map(|node| Advance::Sibling { level, node })
            })
    }
    /// Pushes frames for the chain of last children below the top node, ending on a leaf.
    fn descend_to_last(&mut self) {
        while let Some(top) = self.frames.last() {
            let current = top.current;
            match current.last_child() {
                Some(last) => self.frames.push(Frame {
                    siblings: current.children(),
                    current: last,
                }),
                None => break,
            }
        }
    }
    /// Places the cursor right after the last node of the sequence. Returns `false` if there are no nodes.
    fn seek_end(&mut self) -> bool {
        let last = if let Some(last) = self.root.last_child() {
            last
        } else {
            return false;
        };
        trace!("frame stack cursor seeking the end of the sequence");
        self.frames.push(Frame {
            siblings: self.root.children(),
            current: last,
        });
        self.descend_to_last();
        true
    }

    /// Returns the node which would be returned by `next`, without moving the cursor.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a Node<T>> {
        self.advance().as_ref().map(Advance::node)
    }
    /// Returns the node which would be returned by `previous`, without moving the cursor.
    #[inline]
    pub fn peek_previous(&self) -> Option<&'a Node<T>> {
        match self.frames.last() {
            Some(top) => Some(top.current),
            None if self.started => None,
            None => self.root.last_descendant(),
        }
    }
    /// Returns `true` if `next` would succeed. Never moves the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.peek_next().is_some()
    }
    /// Returns `true` if `previous` would succeed. Never moves the cursor.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.peek_previous().is_some()
    }

    /// Moves the cursor past the next node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is past the last node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    pub fn next(&mut self) -> CursorResult<&'a Node<T>> {
        let node = match self.advance() {
            Some(Advance::Descend(siblings, first)) => {
                self.frames.push(Frame {
                    siblings,
                    current: first,
                });
                first
            }
            Some(Advance::Sibling { level, node }) => {
                self.frames.truncate(level + 1);
                self.frames[level].current = node;
                node
            }
            None => {
                trace!("frame stack cursor exhausted at depth {}", self.depth());
                return Err(CursorError::Exhausted(Direction::Forward));
            }
        };
        self.started = true;
        Ok(node)
    }
    /// Moves the cursor before the previous node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is before the first node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    pub fn previous(&mut self) -> CursorResult<&'a Node<T>> {
        if self.frames.is_empty() && (self.started || !self.seek_end()) {
            trace!("frame stack cursor exhausted before the first node");
            return Err(CursorError::Exhausted(Direction::Backward));
        }
        self.started = true;
        let top = self
            .frames
            .last_mut()
            .expect("frame stack cannot be empty after seeking the end");
        let node = top.current;
        match top.position().checked_sub(1) {
            Some(position) => {
                // The previous node is the last descendant of the previous sibling.
                let siblings = top.siblings;
                top.current = &siblings[position];
                self.descend_to_last();
            }
            None => {
                // First among its siblings: the previous node is the parent.
                self.frames.pop();
            }
        }
        Ok(node)
    }
}
impl<T> Clone for FrameStackCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            frames: self.frames.clone(),
            started: self.started,
        }
    }
}
impl<T: Debug> Debug for FrameStackCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameStackCursor")
            .field("root", &self.root.value())
            .field("frames", &self.frames)
            .field("started", &self.started)
            .finish()
    }
}
impl<'a, T> PreorderCursor<'a> for FrameStackCursor<'a, T> {
    type Payload = T;

    #[inline(always)]
    fn root(&self) -> &'a Node<T> {
        self.root
    }
    #[inline(always)]
    fn peek_next(&self) -> Option<&'a Node<T>> {
        FrameStackCursor::peek_next(self)
    }
    #[inline(always)]
    fn peek_previous(&self) -> Option<&'a Node<T>> {
        FrameStackCursor::peek_previous(self)
    }
    #[inline(always)]
    fn next(&mut self) -> CursorResult<&'a Node<T>> {
        FrameStackCursor::next(self)
    }
    #[inline(always)]
    fn previous(&mut self) -> CursorResult<&'a Node<T>> {
        FrameStackCursor::previous(self)
    }
    #[inline(always)]
    fn depth(&self) -> usize {
        self.frames.len()
    }
    #[inline(always)]
    fn reset(&mut self) {
        FrameStackCursor::reset(self)
    }
}
