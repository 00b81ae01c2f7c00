//! Ordered trees with bidirectional pre-order traversal cursors.
//!
//! ------------------------
//!
//! # Overview
//! Kindling implements a plain owning tree, [`Node`], where every node holds one payload and an ordered list of children it exclusively owns. The tree is append-only: children are added with [`add_child`] and never removed or reordered, so the order in which they were added is the order in which they are traversed.
//!
//! The interesting part is traversal. Both cursors in the [`traversal`] module walk the *pre-order* sequence of a node's descendants (the node itself is never yielded) forward and backward, one step at a time, without ever materializing that sequence. Their state is a stack of frames, one per level of the path from the root to the current position, so memory use is proportional to the depth of the tree rather than its size:
//! - [`FrameStackCursor`] keeps the sibling list and the visited node for every level and finds sibling positions by identity lookup
//! - [`IterStackCursor`] keeps one bidirectional list cursor per level and lets it handle movement within a level
//!
//! The two are observably equivalent and implement the same [`PreorderCursor`] trait.
//!
//! # Example
//! ```rust
//! use kindling::{Node, PreorderCursor};
//!
//! let mut root = Node::new("root");
//! root.add_child(
//!     Node::new("a")
//!         .with_child(Node::new("aa"))
//!         .with_child(Node::new("ab")),
//! )
//! .add_child(Node::new("b"));
//!
//! let mut cursor = root.iter_cursor();
//! let mut forward = Vec::new();
//! while cursor.has_next() {
//!     forward.push(*cursor.next()?.value());
//! }
//! assert_eq!(forward, ["a", "aa", "ab", "b"]);
//!
//! // The cursor is now past the last node and can walk all the way back.
//! let backward: Vec<_> = cursor.backward().map(|node| *node.value()).collect();
//! assert_eq!(backward, ["b", "ab", "aa", "a"]);
//! # Ok::<(), kindling::CursorError>(())
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. Without it, the crate still requires a global allocator.
//! - `frame_stack_cursor` (**enabled by default**): adds [`FrameStackCursor`].
//! - `iter_stack_cursor` (**enabled by default**): adds [`IterStackCursor`] and [`Node::descendants`], which is built on it.
//! - `smallvec`: keeps the frame stacks of cursors inline in a [`SmallVec`] instead of a [`Vec`], avoiding allocation for trees which are not very deep.
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `thiserror` (**required**): `^2`
//! - `log` (**required**): `^0.4`, cursors emit `trace` records when they hit the end of the sequence
//! - `smallvec` (*optional*): `^1`
//!
//! [`add_child`]: struct.Node.html#method.add_child " "
//! [`traversal`]: traversal/index.html " "
//! [`FrameStackCursor`]: traversal/struct.FrameStackCursor.html " "
//! [`IterStackCursor`]: traversal/struct.IterStackCursor.html " "
//! [`PreorderCursor`]: traversal/trait.PreorderCursor.html " "
//! [`Node::descendants`]: struct.Node.html#method.descendants " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

mod node;
pub use node::Node;

pub mod traversal;
#[doc(no_inline)]
pub use traversal::{PreorderCursor, Forward, Backward};
#[cfg(feature = "frame_stack_cursor")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "frame_stack_cursor")))]
#[doc(no_inline)]
pub use traversal::FrameStackCursor;
#[cfg(feature = "iter_stack_cursor")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "iter_stack_cursor")))]
#[doc(no_inline)]
pub use traversal::IterStackCursor;

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};
use thiserror::Error;

/// The direction of a single cursor step through the pre-order sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the sequence, as taken by `next`.
    Forward,
    /// Towards the start of the sequence, as taken by `previous`.
    Backward,
}
impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}
impl Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        })
    }
}

/// The error type returned by cursor steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CursorError {
    /// There is no node left in the specified direction. The cursor did not move and will keep reporting this until it's stepped in the other direction.
    #[error("the cursor has no more nodes in the {0} direction")]
    Exhausted(Direction),
}
/// A result type for cursor steps.
pub type CursorResult<T> = Result<T, CursorError>;

/// The error type returned by the mutation entry points of cursors.
///
/// Cursors hold a shared borrow of the tree they traverse and never modify it; the mutation methods only exist so that cursors present the complete list cursor interface. The node which was passed in, if any, is given back to the caller instead of being dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("tree cursors are read-only and cannot modify the tree they traverse")]
pub struct ReadOnlyCursorError<N = ()> {
    /// The node which was supplied to the rejected operation.
    pub rejected: N,
}
impl<N> ReadOnlyCursorError<N> {
    /// Extracts the node which was supplied to the rejected operation.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_rejected(self) -> N {
        self.rejected
    }
}
