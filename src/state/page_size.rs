//! Client page-size growth policy.
//!
//! Loading more server data widens the default view window: after a successful
//! load-more the client page size becomes at least `server_pages_consumed * base`.
//! Invoked only from the load-more action.

use std::num::NonZeroUsize;

/// Page size after a successful load-more.
pub fn next_page_size(
    prev_page_size: NonZeroUsize,
    server_pages_consumed: u32,
    base_page_size: NonZeroUsize,
) -> NonZeroUsize {
    let consumed = usize::try_from(server_pages_consumed).unwrap_or(usize::MAX);
    let grown = base_page_size.get().saturating_mul(consumed);
    prev_page_size.max(NonZeroUsize::new(grown).unwrap_or(prev_page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn grows_to_consumed_times_base() {
        assert_eq!(next_page_size(nz(6), 2, nz(6)), nz(12));
        assert_eq!(next_page_size(nz(12), 3, nz(6)), nz(18));
    }

    #[test]
    fn never_shrinks() {
        assert_eq!(next_page_size(nz(12), 1, nz(6)), nz(12));
        assert_eq!(next_page_size(nz(3), 0, nz(6)), nz(3));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(
            next_page_size(nz(6), u32::MAX, nz(usize::MAX)),
            nz(usize::MAX)
        );
    }
}
