//! Property-based tests checking both cursors against a materialized pre-order listing.
//!
//! - Forward traversal of either cursor equals a recursive pre-order listing of the descendants
//! - Walking forward to the end and then all the way back yields the reversed listing
//! - Any interleaving of forward and backward steps behaves like an index into the listing
#![cfg(all(feature = "frame_stack_cursor", feature = "iter_stack_cursor"))]

use kindling::{CursorError, Direction, FrameStackCursor, IterStackCursor, Node, PreorderCursor};
use proptest::prelude::*;
use std::ptr;

// ===========================================================================
// Strategy Helpers
// ===========================================================================

/// Generate trees of varying width and depth
fn trees() -> impl Strategy<Value = Node<u32>> {
    let leaf = any::<u32>().prop_map(Node::new);
    leaf.prop_recursive(8, 96, 6, |inner| {
        (any::<u32>(), prop::collection::vec(inner, 0..6))
            .prop_map(|(value, children)| Node::with_children(value, children))
    })
}

/// Generate a sequence of cursor steps
fn walks(max_steps: usize) -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(
        prop_oneof![Just(Direction::Forward), Just(Direction::Backward)],
        0..max_steps,
    )
}

/// Recursive pre-order listing of the descendants of `node`, with their depths
fn listing<'a>(node: &'a Node<u32>, depth: usize, out: &mut Vec<(&'a Node<u32>, usize)>) {
    for child in node.children() {
        out.push((child, depth + 1));
        listing(child, depth + 1, out);
    }
}

fn same_nodes(a: &[&Node<u32>], b: &[&Node<u32>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| ptr::eq(*x, *y))
}

/// A cursor over a materialized listing, tracking the gap it sits in (`None` while unstarted)
struct Model {
    len: usize,
    gap: Option<usize>,
}

impl Model {
    fn step(&mut self, direction: Direction) -> Result<usize, CursorError> {
        match direction {
            Direction::Forward => {
                let gap = self.gap.unwrap_or(0);
                if gap < self.len {
                    self.gap = Some(gap + 1);
                    Ok(gap)
                } else {
                    Err(CursorError::Exhausted(direction))
                }
            }
            Direction::Backward => {
                let gap = self.gap.unwrap_or(self.len);
                if gap > 0 {
                    self.gap = Some(gap - 1);
                    Ok(gap - 1)
                } else {
                    Err(CursorError::Exhausted(direction))
                }
            }
        }
    }

    fn has_next(&self) -> bool {
        self.gap.unwrap_or(0) < self.len
    }

    fn has_previous(&self) -> bool {
        self.gap.unwrap_or(self.len) > 0
    }
}

fn check_walk<'a, C>(
    mut cursor: C,
    expected: &[(&'a Node<u32>, usize)],
    walk: &[Direction],
) -> Result<(), TestCaseError>
where
    C: PreorderCursor<'a, Payload = u32>,
{
    let mut model = Model {
        len: expected.len(),
        gap: None,
    };
    for (step, &direction) in walk.iter().enumerate() {
        let actual = cursor.step(direction);
        match model.step(direction) {
            Ok(index) => {
                let node = actual.map_err(|e| {
                    TestCaseError::fail(format!("step {} ({}) failed: {}", step, direction, e))
                })?;
                prop_assert!(ptr::eq(node, expected[index].0), "step {} yielded the wrong node", step);
            }
            Err(error) => {
                prop_assert_eq!(actual.err(), Some(error), "step {} should fail", step);
            }
        }
        let depth = match model.gap {
            Some(gap) if gap > 0 => expected[gap - 1].1,
            _ => 0,
        };
        prop_assert_eq!(cursor.depth(), depth, "depth after step {}", step);
        prop_assert_eq!(cursor.has_next(), model.has_next());
        prop_assert_eq!(cursor.has_previous(), model.has_previous());
    }
    Ok(())
}

// ===========================================================================
// Equivalence Properties
// ===========================================================================

proptest! {
    /// Property: both cursors yield the recursive pre-order listing, root excluded
    #[test]
    fn forward_matches_listing(tree in trees()) {
        let mut expected = Vec::new();
        listing(&tree, 0, &mut expected);
        let expected: Vec<_> = expected.into_iter().map(|(node, _)| node).collect();

        let frames: Vec<_> = FrameStackCursor::new(&tree).forward().collect();
        let levels: Vec<_> = IterStackCursor::new(&tree).forward().collect();

        prop_assert!(same_nodes(&frames, &expected));
        prop_assert!(same_nodes(&levels, &expected));
    }

    /// Property: going to the end and back yields the reversed listing
    #[test]
    fn round_trip_is_reversed(tree in trees()) {
        let mut expected = Vec::new();
        listing(&tree, 0, &mut expected);
        let reversed: Vec<_> = expected.iter().rev().map(|&(node, _)| node).collect();

        let mut frames = FrameStackCursor::new(&tree);
        let mut levels = IterStackCursor::new(&tree);
        prop_assert_eq!((&mut frames).forward().count(), expected.len());
        prop_assert_eq!((&mut levels).forward().count(), expected.len());
        prop_assert!(!frames.has_next() && !levels.has_next());

        let frames_back: Vec<_> = frames.backward().collect();
        let levels_back: Vec<_> = levels.backward().collect();
        prop_assert!(same_nodes(&frames_back, &reversed));
        prop_assert!(same_nodes(&levels_back, &reversed));
    }

    /// Property: random walks behave like a gap index into the listing
    #[test]
    fn random_walks_match_model(tree in trees(), walk in walks(120)) {
        let mut expected = Vec::new();
        listing(&tree, 0, &mut expected);

        check_walk(FrameStackCursor::new(&tree), &expected, &walk)?;
        check_walk(IterStackCursor::new(&tree), &expected, &walk)?;
    }
}
