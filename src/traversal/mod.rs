//! Bidirectional pre-order traversal of trees.
//!
//! The module is home to the following items:
//! - [`PreorderCursor`], the *trait for stateful cursors* walking the pre-order sequence of a node's descendants in both directions
//! - Its two implementations, [`FrameStackCursor`] and [`IterStackCursor`], which produce identical sequences and differ only in how they keep track of their position
//! - [`Forward`] and [`Backward`], wrapping a cursor into an iterator interface
//!
//! # Cursor positions
//! A cursor never sits *on* a node; it sits in the gap between two consecutive nodes of the sequence, like a text cursor between two characters. `next` returns the node after the gap and moves past it, `previous` returns the node before the gap and moves before it. Consequently, calling `previous` right after `next` returns the same node again.
//!
//! A freshly created cursor is *unstarted*: it can be stepped either way, towards the first node with `next` or towards the last one with `previous`. Once it has moved, the two ends of the sequence become proper boundaries: a cursor which has passed the last node keeps reporting [`CursorError::Exhausted`] from `next` until it is stepped back with `previous`, and vice versa. [`reset`] brings a cursor back into the unstarted state.
//!
//! Cursors store the path from just below the root down to the node right before the gap, one frame per level. The root itself is never yielded.
//!
//! # Example
//! ```rust
//! use kindling::{Node, PreorderCursor, CursorError, Direction};
//!
//! let tree = Node::new('r')
//!     .with_child(Node::new('a').with_child(Node::new('b')))
//!     .with_child(Node::new('c'));
//!
//! let mut cursor = tree.frame_cursor();
//! assert_eq!(cursor.next().map(|n| *n.value()), Ok('a'));
//! assert_eq!(cursor.next().map(|n| *n.value()), Ok('b'));
//! assert_eq!(cursor.depth(), 2);
//! // Turning around yields the node which was just passed.
//! assert_eq!(cursor.previous().map(|n| *n.value()), Ok('b'));
//! assert_eq!(cursor.previous().map(|n| *n.value()), Ok('a'));
//! assert_eq!(cursor.previous(), Err(CursorError::Exhausted(Direction::Backward)));
//! ```
//!
//! [`PreorderCursor`]: trait.PreorderCursor.html " "
//! [`FrameStackCursor`]: struct.FrameStackCursor.html " "
//! [`IterStackCursor`]: struct.IterStackCursor.html " "
//! [`Forward`]: struct.Forward.html " "
//! [`Backward`]: struct.Backward.html " "
//! [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
//! [`reset`]: trait.PreorderCursor.html#tymethod.reset " "

#[cfg(feature = "frame_stack_cursor")]
mod frame_stack;
#[cfg(feature = "frame_stack_cursor")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "frame_stack_cursor")))]
pub use frame_stack::FrameStackCursor;

#[cfg(feature = "iter_stack_cursor")]
mod iter_stack;
#[cfg(feature = "iter_stack_cursor")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "iter_stack_cursor")))]
pub use iter_stack::IterStackCursor;


use core::{iter::FusedIterator, marker::PhantomData};
use crate::{CursorResult, Direction, Node, ReadOnlyCursorError};

/// Stateful cursors over the pre-order sequence of the descendants of a root node.
///
/// See the [module-level documentation] for the exact semantics of cursor positions.
///
/// The mutation methods exist so that cursors present the full interface of a list cursor, but tree cursors only ever hold a shared borrow of their tree: those methods never have any effect and report [`ReadOnlyCursorError`]. Since the borrow lasts as long as the cursor, the tree also cannot be modified from elsewhere while a cursor is alive.
///
/// [module-level documentation]: index.html " "
/// [`ReadOnlyCursorError`]: ../struct.ReadOnlyCursorError.html " "
pub trait PreorderCursor<'a> {
    /// The payload type of the nodes of the traversed tree.
    type Payload: 'a;

    /// Returns the node the cursor was created for. It is never yielded by the cursor itself.
    fn root(&self) -> &'a Node<Self::Payload>;
    /// Returns the node which would be returned by `next`, without moving the cursor.
    fn peek_next(&self) -> Option<&'a Node<Self::Payload>>;
    /// Returns the node which would be returned by `previous`, without moving the cursor.
    fn peek_previous(&self) -> Option<&'a Node<Self::Payload>>;
    /// Moves the cursor past the next node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is past the last node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    fn next(&mut self) -> CursorResult<&'a Node<Self::Payload>>;
    /// Moves the cursor before the previous node of the sequence and returns that node.
    ///
    /// # Errors
    /// Fails with [`CursorError::Exhausted`] if the cursor is before the first node, in which case it does not move.
    ///
    /// [`CursorError::Exhausted`]: ../enum.CursorError.html#variant.Exhausted " "
    fn previous(&mut self) -> CursorResult<&'a Node<Self::Payload>>;
    /// Returns the depth of the node right before the cursor, with the children of the root being at depth 1, or 0 if there is no such node.
    fn depth(&self) -> usize;
    /// Brings the cursor back into the unstarted state, from which both ends of the sequence are reachable.
    fn reset(&mut self);

    /// Returns `true` if `next` would succeed. Never moves the cursor.
    #[inline]
    fn has_next(&self) -> bool {
        self.peek_next().is_some()
    }
    /// Returns `true` if `previous` would succeed. Never moves the cursor.
    #[inline]
    fn has_previous(&self) -> bool {
        self.peek_previous().is_some()
    }
    /// Steps the cursor in the specified direction.
    ///
    /// # Errors
    /// See [`next`] and [`previous`].
    ///
    /// [`next`]: #tymethod.next " "
    /// [`previous`]: #tymethod.previous " "
    #[inline]
    fn step(&mut self, direction: Direction) -> CursorResult<&'a Node<Self::Payload>> {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        }
    }

    /// Does nothing: cursors cannot insert nodes into the tree. The node is given back inside the error.
    ///
    /// # Errors
    /// Always fails.
    #[inline]
    fn insert_before(
        &mut self,
        node: Node<Self::Payload>,
    ) -> Result<(), ReadOnlyCursorError<Node<Self::Payload>>> {
        Err(ReadOnlyCursorError { rejected: node })
    }
    /// Does nothing: cursors cannot remove nodes from the tree.
    ///
    /// # Errors
    /// Always fails.
    #[inline]
    fn remove_current(&mut self) -> Result<(), ReadOnlyCursorError> {
        Err(ReadOnlyCursorError { rejected: () })
    }
    /// Does nothing: cursors cannot replace nodes of the tree. The node is given back inside the error.
    ///
    /// # Errors
    /// Always fails.
    #[inline]
    fn replace_current(
        &mut self,
        node: Node<Self::Payload>,
    ) -> Result<(), ReadOnlyCursorError<Node<Self::Payload>>> {
        Err(ReadOnlyCursorError { rejected: node })
    }
    /// Always returns 0. Cursors do not keep track of their index in the sequence.
    #[inline(always)]
    fn next_index(&self) -> usize {
        0
    }
    /// Always returns 0. Cursors do not keep track of their index in the sequence.
    #[inline(always)]
    fn previous_index(&self) -> usize {
        0
    }

    /// Wraps the cursor into an iterator which steps it forward until the end of the sequence.
    #[inline(always)]
    fn forward(self) -> Forward<'a, Self>
    where
        Self: Sized,
    {
        Forward::new(self)
    }
    /// Wraps the cursor into an iterator which steps it backward until the start of the sequence.
    #[inline(always)]
    fn backward(self) -> Backward<'a, Self>
    where
        Self: Sized,
    {
        Backward::new(self)
    }
}

/// An iterator which steps a [`PreorderCursor`] forward, yielding nodes until `next` reports exhaustion. After that, it will only return `None`.
///
/// The cursor is not consumed by reaching the end, and can be taken back with [`into_inner`] to walk in the other direction.
///
/// [`PreorderCursor`]: trait.PreorderCursor.html " "
/// [`into_inner`]: #method.into_inner " "
#[derive(Copy, Clone, Debug)]
pub struct Forward<'a, C> {
    cursor: C,
    _tree: PhantomData<&'a ()>,
}
impl<'a, C: PreorderCursor<'a>> Forward<'a, C> {
    /// Wraps the specified cursor.
    #[inline(always)]
    pub const fn new(cursor: C) -> Self {
        Self {
            cursor,
            _tree: PhantomData,
        }
    }
    /// Returns the wrapped cursor.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> C {
        self.cursor
    }
}
impl<'a, C: PreorderCursor<'a>> From<C> for Forward<'a, C> {
    #[inline(always)]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}
impl<'a, C: PreorderCursor<'a>> Iterator for Forward<'a, C> {
    type Item = &'a Node<C::Payload>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().ok()
    }
}
impl<'a, C: PreorderCursor<'a>> FusedIterator for Forward<'a, C> {}

/// An iterator which steps a [`PreorderCursor`] backward, yielding nodes until `previous` reports exhaustion. After that, it will only return `None`.
///
/// See [`Forward`] for a version which walks in the other direction.
///
/// [`PreorderCursor`]: trait.PreorderCursor.html " "
/// [`Forward`]: struct.Forward.html " "
#[derive(Copy, Clone, Debug)]
pub struct Backward<'a, C> {
    cursor: C,
    _tree: PhantomData<&'a ()>,
}
impl<'a, C: PreorderCursor<'a>> Backward<'a, C> {
    /// Wraps the specified cursor.
    #[inline(always)]
    pub const fn new(cursor: C) -> Self {
        Self {
            cursor,
            _tree: PhantomData,
        }
    }
    /// Returns the wrapped cursor.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> C {
        self.cursor
    }
}
impl<'a, C: PreorderCursor<'a>> From<C> for Backward<'a, C> {
    #[inline(always)]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}
impl<'a, C: PreorderCursor<'a>> Iterator for Backward<'a, C> {
    type Item = &'a Node<C::Payload>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.previous().ok()
    }
}
impl<'a, C: PreorderCursor<'a>> FusedIterator for Backward<'a, C> {}

//──────────────────────────────────────────────────┐
// Implementations for pointer types               │
//──────────────────────────────────────────────────┘
impl<'a, C: PreorderCursor<'a>> PreorderCursor<'a> for &mut C {
    type Payload = C::Payload;

    #[inline(always)]
    fn root(&self) -> &'a Node<Self::Payload> {
        (**self).root()
    }
    #[inline(always)]
    fn peek_next(&self) -> Option<&'a Node<Self::Payload>> {
        (**self).peek_next()
    }
    #[inline(always)]
    fn peek_previous(&self) -> Option<&'a Node<Self::Payload>> {
        (**self).peek_previous()
    }
    #[inline(always)]
    fn next(&mut self) -> CursorResult<&'a Node<Self::Payload>> {
        (**self).next()
    }
    #[inline(always)]
    fn previous(&mut self) -> CursorResult<&'a Node<Self::Payload>> {
        (**self).previous()
    }
    #[inline(always)]
    fn depth(&self) -> usize {
        (**self).depth()
    }
    #[inline(always)]
    fn reset(&mut self) {
        (**self).reset()
    }
    #[inline(always)]
    fn has_next(&self) -> bool {
        (**self).has_next()
    }
    #[inline(always)]
    fn has_previous(&self) -> bool {
        (**self).has_previous()
    }
}
