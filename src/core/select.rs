//! core::select
//!
//! Parsing of user-supplied task/tag selections.
//!
//! # Formats
//!
//! Selections are comma-separated. Each token is either a 1-based index
//! (`3`), an inclusive range (`1-3`, order-insensitive), or - for tags -
//! a literal name. Indices are converted to zero-based offsets into the
//! snapshot fetched during the same invocation.
//!
//! # Example
//!
//! ```
//! use questline::core::select::{parse_index_list, Selection};
//!
//! let indices = parse_index_list("1,3-5").unwrap();
//! assert_eq!(indices.into_iter().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
//!
//! match Selection::parse("Work,School") {
//!     Selection::Names(names) => assert_eq!(names, vec!["Work", "School"]),
//!     Selection::Indices(_) => unreachable!(),
//! }
//! ```

use std::collections::BTreeSet;

use thiserror::Error;

/// Errors from selection parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("cannot parse '{0}' as an index or range")]
    BadToken(String),
}

/// A user selection, classified in a single pass over the tokens.
///
/// A selection where every token is an index or range is `Indices`;
/// anything else is `Names`. Mixing numeric and name tokens therefore
/// resolves the whole selection as names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based, de-duplicated, ascending indices.
    Indices(BTreeSet<usize>),
    /// Literal names, order preserved, duplicates kept.
    Names(Vec<String>),
}

impl Selection {
    /// Classify and parse a raw selection string in one pass over the
    /// tokens: indices accumulate as long as every token parses, and
    /// the first non-index token settles the whole selection as names.
    pub fn parse(input: &str) -> Selection {
        let mut indices = BTreeSet::new();
        for token in input.split(',') {
            if token.is_empty() {
                return Selection::Indices(BTreeSet::new());
            }
            match parse_token(token) {
                Ok(range) => indices.extend(range),
                Err(SelectError::BadToken(_)) => {
                    return Selection::Names(parse_name_list(input))
                }
            }
        }
        Selection::Indices(indices)
    }
}

/// Parse a comma-separated list of 1-based indices and inclusive ranges
/// into a zero-based index set.
///
/// Ranges may be given in either order; `5-3` means `3-5`. Duplicates
/// collapse. An empty input - or an empty token anywhere in the list -
/// yields an empty set.
pub fn parse_index_list(input: &str) -> Result<BTreeSet<usize>, SelectError> {
    let mut indices = BTreeSet::new();
    for token in input.split(',') {
        if token.is_empty() {
            return Ok(BTreeSet::new());
        }
        indices.extend(parse_token(token)?);
    }
    Ok(indices)
}

/// Parse one token into the zero-based range it covers. A bare ordinal
/// covers one index.
fn parse_token(token: &str) -> Result<std::ops::Range<usize>, SelectError> {
    if let Some((lo, hi)) = token.split_once('-') {
        let (mut lo, mut hi) = (parse_ordinal(lo, token)?, parse_ordinal(hi, token)?);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        Ok(lo - 1..hi)
    } else {
        let ordinal = parse_ordinal(token, token)?;
        Ok(ordinal - 1..ordinal)
    }
}

/// Parse a single 1-based ordinal. Zero is rejected: there is no task
/// "0" in any listing we print.
fn parse_ordinal(text: &str, token: &str) -> Result<usize, SelectError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(SelectError::BadToken(token.to_string())),
    }
}

/// Split a comma-separated list of names. Empty input yields an empty
/// list; order and duplicates are preserved.
pub fn parse_name_list(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[usize]) -> BTreeSet<usize> {
        values.iter().copied().collect()
    }

    #[test]
    fn singles_and_ranges() {
        let indices = parse_index_list("1,2-3,9,15-17").unwrap();
        assert_eq!(indices, set(&[0, 1, 2, 8, 14, 15, 16]));
    }

    #[test]
    fn empty_input_is_empty_set() {
        assert_eq!(parse_index_list("").unwrap(), BTreeSet::new());
    }

    #[test]
    fn reversed_range_is_swapped() {
        let indices = parse_index_list("17,1,5-3").unwrap();
        assert_eq!(indices, set(&[0, 2, 3, 4, 16]));
    }

    #[test]
    fn duplicates_collapse() {
        let indices = parse_index_list("2,2,1-3").unwrap();
        assert_eq!(indices, set(&[0, 1, 2]));
    }

    #[test]
    fn empty_token_clears_selection() {
        assert_eq!(parse_index_list("1,,3").unwrap(), BTreeSet::new());
    }

    #[test]
    fn non_numeric_token_fails() {
        assert_eq!(
            parse_index_list("1,foo"),
            Err(SelectError::BadToken("foo".to_string()))
        );
    }

    #[test]
    fn zero_is_rejected() {
        assert!(parse_index_list("0").is_err());
        assert!(parse_index_list("0-2").is_err());
    }

    #[test]
    fn malformed_range_fails() {
        assert!(parse_index_list("1-2-3").is_err());
        assert!(parse_index_list("-3").is_err());
        assert!(parse_index_list("3-").is_err());
    }

    #[test]
    fn name_list_empty() {
        assert!(parse_name_list("").is_empty());
    }

    #[test]
    fn name_list_single_and_order() {
        assert_eq!(parse_name_list("foo"), vec!["foo"]);
        assert_eq!(
            parse_name_list("Work,School,Work"),
            vec!["Work", "School", "Work"]
        );
    }

    #[test]
    fn selection_classifies_indices() {
        assert_eq!(
            Selection::parse("1,2-3"),
            Selection::Indices(set(&[0, 1, 2]))
        );
    }

    #[test]
    fn selection_classifies_names() {
        assert_eq!(
            Selection::parse("Work,School"),
            Selection::Names(vec!["Work".to_string(), "School".to_string()])
        );
    }

    #[test]
    fn mixed_tokens_resolve_as_names() {
        assert_eq!(
            Selection::parse("1,Work"),
            Selection::Names(vec!["1".to_string(), "Work".to_string()])
        );
    }

    #[test]
    fn empty_token_settles_before_a_name_token() {
        // The empty token clears the selection before "foo" is reached.
        assert_eq!(
            Selection::parse("1,,foo"),
            Selection::Indices(BTreeSet::new())
        );
    }
}
