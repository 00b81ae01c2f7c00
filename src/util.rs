#[cfg(feature = "smallvec")]
const INLINE_STACK_SIZE: usize = 16;

#[cfg(feature = "smallvec")]
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type Stack<T> = alloc::vec::Vec<T>;

/// Finds the index of `needle` in `haystack` by address rather than by value.
///
/// Payloads are not required to implement `PartialEq`, and two distinct nodes may compare equal anyway.
#[cfg(feature = "frame_stack_cursor")]
#[inline]
pub(crate) fn position_by_identity<T>(haystack: &[T], needle: &T) -> Option<usize> {
    haystack.iter().position(|x| core::ptr::eq(x, needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "frame_stack_cursor")]
    fn identity_lookup_ignores_equal_values() {
        let values = [7, 7, 7];
        assert_eq!(position_by_identity(&values, &values[2]), Some(2));
        let lookalike = 7;
        assert_eq!(position_by_identity(&values, &lookalike), None);
    }
}
