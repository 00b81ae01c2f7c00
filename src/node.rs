use alloc::{string::String, vec::Vec};
use core::{fmt::{Display, Write}, mem, slice};
#[cfg(feature = "frame_stack_cursor")]
use crate::traversal::FrameStackCursor;
#[cfg(feature = "iter_stack_cursor")]
use crate::traversal::{Forward, IterStackCursor, PreorderCursor};

/// A node of an ordered tree, owning its payload and its children.
///
/// Children are stored in the order in which they were added, which is also the order in which cursors visit them. Since every node exclusively owns its children, a node can never become its own descendant.
///
/// # Example
/// ```rust
/// use kindling::Node;
///
/// let mut root = Node::new(1);
/// root.add_child(Node::new(2)).add_child(Node::new(3));
///
/// assert_eq!(root.children().len(), 2);
/// assert_eq!(root.last_child().map(Node::value), Some(&3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}
impl<T> Node<T> {
    /// Creates a leaf node with the specified payload.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
    /// Creates a node with the specified payload and children, in iteration order.
    #[inline]
    pub fn with_children(value: T, children: impl IntoIterator<Item = Node<T>>) -> Self {
        Self {
            value,
            children: children.into_iter().collect(),
        }
    }
    /// Appends a child and returns the node, for building trees in a single expression.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Node;
    /// let tree = Node::new("c")
    ///     .with_child(Node::new("ca"))
    ///     .with_child(Node::new("cb"));
    /// assert_eq!(tree.first_child().map(Node::value), Some(&"ca"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: Node<T>) -> Self {
        self.children.push(child);
        self
    }
    /// Appends a child to the end of the node's children, returning the node itself so that calls can be chained.
    #[inline]
    pub fn add_child(&mut self, child: Node<T>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Returns a reference to the payload.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }
    /// Returns a *mutable* reference to the payload.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
    /// Replaces the payload, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }
    /// Consumes the node, dropping its children and returning the payload.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the children of the node, in order.
    #[inline(always)]
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }
    /// Returns the first child, or `None` if the node is a leaf.
    #[inline]
    pub fn first_child(&self) -> Option<&Node<T>> {
        self.children.first()
    }
    /// Returns the last child, or `None` if the node is a leaf.
    #[inline]
    pub fn last_child(&self) -> Option<&Node<T>> {
        self.children.last()
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    /// Returns `true` if the node has one or more children, `false` otherwise.
    #[inline(always)]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// Returns the last node of the pre-order sequence of descendants, i.e. the deepest node along the chain of last children, or `None` if the node is a leaf.
    pub(crate) fn last_descendant(&self) -> Option<&Node<T>> {
        let mut last = self.last_child()?;
        while let Some(child) = last.last_child() {
            last = child;
        }
        Some(last)
    }

    /// Creates a [`FrameStackCursor`] over the descendants of this node.
    ///
    /// [`FrameStackCursor`]: traversal/struct.FrameStackCursor.html " "
    #[cfg(feature = "frame_stack_cursor")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "frame_stack_cursor")))]
    #[inline(always)]
    pub fn frame_cursor(&self) -> FrameStackCursor<'_, T> {
        FrameStackCursor::new(self)
    }
    /// Creates an [`IterStackCursor`] over the descendants of this node.
    ///
    /// [`IterStackCursor`]: traversal/struct.IterStackCursor.html " "
    #[cfg(feature = "iter_stack_cursor")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "iter_stack_cursor")))]
    #[inline(always)]
    pub fn iter_cursor(&self) -> IterStackCursor<'_, T> {
        IterStackCursor::new(self)
    }
    /// Returns an iterator over the descendants of this node in pre-order. The node itself is not included.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Node;
    /// let tree = Node::new(0)
    ///     .with_child(Node::new(1).with_child(Node::new(2)))
    ///     .with_child(Node::new(3));
    /// let values: Vec<_> = tree.descendants().map(|node| *node.value()).collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    #[cfg(feature = "iter_stack_cursor")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "iter_stack_cursor")))]
    #[inline]
    pub fn descendants(&self) -> Forward<'_, IterStackCursor<'_, T>> {
        self.iter_cursor().forward()
    }
}
impl<T: Display> Node<T> {
    /// Renders the payload of this node and of all of its descendants in pre-order, one per line.
    ///
    /// Every line, including the last one, ends with `\n`. Meant for debugging and snapshot comparisons.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Node;
    /// let tree = Node::new("root")
    ///     .with_child(Node::new("a").with_child(Node::new("aa")))
    ///     .with_child(Node::new("b"));
    /// assert_eq!(tree.info(), "root\na\naa\nb\n");
    /// ```
    pub fn info(&self) -> String {
        let mut out = String::new();
        let mut pending: Vec<slice::Iter<'_, Node<T>>> = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{}", current.value);
            pending.push(current.children.iter());
            node = None;
            while let Some(siblings) = pending.last_mut() {
                if let Some(next) = siblings.next() {
                    node = Some(next);
                    break;
                }
                pending.pop();
            }
        }
        out
    }
}
impl<T> From<T> for Node<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
