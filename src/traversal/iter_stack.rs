use core::fmt::{self, Debug, Formatter};
use log::trace;
use crate::{util::Stack, CursorError, CursorResult, Direction, Node};
use super::PreorderCursor;

/// A bidirectional cursor over a slice, sitting in one of the `len + 1` gaps between its elements.
struct ListCursor<'a, T> {
    items: &'a [T],
    gap: usize,
}
impl<'a, T> ListCursor<'a, T> {
    /// Creates a cursor before the first element.
    const fn at_front(items: &'a [T]) -> Self {
        Self { items, gap: 0 }
    }
    /// Creates a cursor after the last element.
    const fn at_back(items: &'a [T]) -> Self {
        Self {
            items,
            gap: items.len(),
        }
    }
    fn peek_next(&self) -> Option<&'a T> {
        self.items.get(self.gap)
    }
    fn peek_previous(&self) -> Option<&'a T> {
        let index = self.gap.checked_sub(1)?;
        self.items.get(index)
    }
    const fn has_next(&self) -> bool {
        self.gap < self.items.len()
    }
    const fn has_previous(&self) -> bool {
        self.gap > 0
    }
    fn next(&mut self) -> Option<&'a T> {
        let item = self.peek_next()?;
        self.gap += 1;
        Some(item)
    }
    fn previous(&mut self) -> Option<&'a T> {
        let item = self.peek_previous()?;
        self.gap -= 1;
        Some(item)
    }
}
impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            gap: self.gap,
        }
    }
}
impl<T> Debug for ListCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCursor")
            .field("len", &self.items.len())
            .field("gap", &self.gap)
            .finish()
    }
}

/// A pre-order cursor which keeps a stack of bidirectional list cursors, one per level of its path, and lets them handle movement between siblings.
///
/// Every list cursor sits right after the node of its level which is on the path. When the cursor passes a branch node going forward, a list cursor over that node's children is pushed right away, positioned before the first child; the same pending list cursor is left behind when walking backward onto a branch node. Going forward thus only needs to find the deepest list cursor which still has elements ahead of it. Going backward either moves the top list cursor back and descends along the chain of last children of the new neighbor, or ascends a level.
///
/// See the [module-level documentation] for cursor semantics. [`FrameStackCursor`] yields the same sequences with a different bookkeeping strategy.
///
/// # Example
/// ```rust
/// use kindling::{Node, IterStackCursor, PreorderCursor};
///
/// let tree = Node::new("root")
///     .with_child(Node::new("a").with_child(Node::new("aa")))
///     .with_child(Node::new("b"));
///
/// let mut cursor = IterStackCursor::new(&tree);
/// assert_eq!(cursor.peek_next().map(|n| *n.value()), Some("a"));
/// let names: Vec<_> = (&mut cursor).forward().map(|n| *n.value()).collect();
/// assert_eq!(names, ["a", "aa", "b"]);
/// assert!(!cursor.has_next());
/// assert!(cursor.has_previous());
/// ```
///
/// [module-level documentation]: index.html " "
/// [`FrameStackCursor`]: struct.FrameStackCursor.html " "
pub struct IterStackCursor<'a, T> {
    root: &'a Node<T>,
    levels: Stack<ListCursor<'a, Node<T>>>,
}
impl<'a, T> IterStackCursor<'a, T> {
    /// Creates an unstarted cursor over the descendants of `root`.
    #[inline]
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            root,
            levels: Stack::new(),
        }
    }
    /// Returns the node the cursor was created for.
    #[inline(always)]
    pub const fn root(&self) -> &'a Node<T> {
        self.root
    }
    /// Returns the depth of the node right before the cursor, or 0 if there is none.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len() - usize::from(self.has_pending_level())
    }
    /// Brings the cursor back into the unstarted state.
    #[inline]
    pub fn reset(&mut self) {
        self.levels.clear();
    }

    /// Whether the top level is an unentered list over the children of the node right before the cursor.
    fn has_pending_level(&self) -> bool {
        self.levels.last().map_or(false, |top| !top.has_previous())
    }
    /// Pushes levels positioned after the last child along the chain of last children starting at `node`.
    fn descend_to_last(&mut self, mut node: &'a Node<T>) {
        while node.is_branch() {
            let level = ListCursor::at_back(node.children());
            node = level
                .peek_previous()
                .expect("branch nodes have a last child");
            self.levels.push(level);
        }
    }
    /// Places the cursor right after the last node of the sequence. Returns `false` if there are no nodes.
    fn seek_end(&mut self) -> bool {
        if self.root.is_leaf() {
            return false;
        }
        trace!("iterator stack cursor seeking the end of the sequence");
        self.descend_to_last(self.root);
        true
    }

    /// Returns the node which would be returned by `next`, without moving the cursor.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a Node<T>> {
        if self.levels.is_empty() {
            return self.root.first_child();
        }
        self.levels
            .iter()
            .rev()
            .find_map(ListCursor::peek_next)
    }
    /// Returns the node which would be returned by `previous`, without moving the cursor.
    #[inline]
    pub fn peek_previous(&self) -> Option<&'a Node<T>> {
        let depth = self.depth();
        if self.levels.is_empty() {
            self.root.last_descendant()
        } else if depth == 0 {
            None
        } else {
            self.levels[depth - 1].peek_previous()
        }
    }
    /// Returns `true` if `next` would succeed. Never moves the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        if self.levels.is_empty() {
            return self.root.is_branch();
        }
        self.levels.iter().any(ListCursor::has_next)
    }
    /// Returns `true` if `previous` would succeed. Never moves the cursor.
    #[inline]
    pub fn has_previous(&self) -> bool {
        if self.levels.is_empty() {
            self.root.is_branch()
        } else {
            self.depth() > 0
        }
    }

    /// Moves the cursor past the next node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is past the last node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    pub fn next(&mut self) -> CursorResult<&'a Node<T>> {
        if self.levels.is_empty() && self.root.is_branch() {
            self.levels.push(ListCursor::at_front(self.root.children()));
        }
        let level = if let Some(level) = self.levels.iter().rposition(ListCursor::has_next) {
            level
        } else {
            trace!("iterator stack cursor exhausted at depth {}", self.depth());
            return Err(CursorError::Exhausted(Direction::Forward));
        };
        // Levels above the one which moves have nothing left ahead of them.
        self.levels.truncate(level + 1);
        let node = self.levels[level]
            .next()
            .expect("level was checked to have a next element");
        if node.is_branch() {
            self.levels.push(ListCursor::at_front(node.children()));
        }
        Ok(node)
    }
    /// Moves the cursor before the previous node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is before the first node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    pub fn previous(&mut self) -> CursorResult<&'a Node<T>> {
        if (self.levels.is_empty() && !self.seek_end()) || self.depth() == 0 {
            trace!("iterator stack cursor exhausted before the first node");
            return Err(CursorError::Exhausted(Direction::Backward));
        }
        if self.has_pending_level() {
            self.levels.pop();
        }
        let top = self
            .levels
            .last_mut()
            .expect("depth is non-zero, so a non-pending level exists");
        let node = top.previous().expect("non-pending levels have a previous element");
        // If the top level reached its front, it's now the pending level of its parent node, which is the new node right before the cursor.
        if let Some(sibling) = top.peek_previous() {
            self.descend_to_last(sibling);
        }
        Ok(node)
    }
}
impl<T> Clone for IterStackCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            levels: self.levels.clone(),
        }
    }
}
impl<T: Debug> Debug for IterStackCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterStackCursor")
            .field("root", &self.root.value())
            .field("levels", &self.levels)
            .finish()
    }
}
impl<'a, T> PreorderCursor<'a> for IterStackCursor<'a, T> {
    type Payload = T;

    #[inline(always)]
    fn root(&self) -> &'a Node<T> {
        self.root
    }
    #[inline(always)]
    fn peek_next(&self) -> Option<&'a Node<T>> {
        IterStackCursor::peek_next(self)
    }
    #[inline(always)]
    fn peek_previous(&self) -> Option<&'a Node<T>> {
        IterStackCursor::peek_previous(self)
    }
    #[inline(always)]
    fn has_next(&self) -> bool {
        IterStackCursor::has_next(self)
    }
    #[inline(always)]
    fn has_previous(&self) -> bool {
        IterStackCursor::has_previous(self)
    }
    #[inline(always)]
    fn next(&mut self) -> CursorResult<&'a Node<T>> {
        IterStackCursor::next(self)
    }
    #[inline(always)]
    fn previous(&mut self) -> CursorResult<&'a Node<T>> {
        IterStackCursor::previous(self)
    }
    #[inline(always)]
    fn depth(&self) -> usize {
        IterStackCursor::depth(self)
    }
    #[inline(always)]
    fn reset(&mut self) {
        IterStackCursor::reset(self)
    }
}
