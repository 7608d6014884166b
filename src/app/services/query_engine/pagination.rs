//! Fixed-size pagination over a filtered result set
//!
//! Pages are 1-based. Out-of-range page numbers yield an empty slice rather
//! than an error. The page-reset-on-criteria-change invariant is enforced by
//! the session, not here.

/// Slice one page out of a result set, clipped to the available length
pub fn paginate<T>(records: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }

    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// Number of pages needed for a result set; zero records means zero pages
pub fn page_count(record_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    record_count.div_ceil(page_size)
}
