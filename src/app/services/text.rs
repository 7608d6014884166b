//! Text comparison primitives for search and sorting
//!
//! Search is accent- and case-insensitive, so every compared string first goes
//! through [`normalize`]. The default browsing order follows physical
//! warehouse layout, which needs the numeric-aware [`natural_cmp`] so that
//! "A10" sorts after "A2".

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a string for comparison: NFD decompose, strip combining marks,
/// lowercase
///
/// Idempotent, never fails; empty input yields the empty string. Two strings
/// differing only in case or accents normalize to the same value.
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compare two strings with numeric-segment awareness
///
/// Digit runs are compared by magnitude, everything else character by
/// character ignoring case (lowercase sorts first on a case-only tie). This
/// reproduces the locale comparison with numeric collation used for the
/// default location order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digit_run(&mut left);
                let run_b = take_digit_run(&mut right);
                match compare_digit_runs(&run_a, &run_b) {
                    Ordering::Equal => continue,
                    ordering => return ordering,
                }
            }
            (Some(x), Some(y)) => {
                if x == y {
                    left.next();
                    right.next();
                    continue;
                }
                let folded = x.to_lowercase().cmp(y.to_lowercase());
                if folded != Ordering::Equal {
                    return folded;
                }
                // Case-only difference: lowercase first
                return x.cmp(&y).reverse();
            }
        }
    }
}

/// Consume a run of consecutive ASCII digits
fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by magnitude without parsing into an integer type
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
