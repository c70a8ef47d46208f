//! Property-based tests for selection parsing and request building.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use questline::api::RequestSpec;
use questline::core::fields::{merge_fields, Difficulty};
use questline::core::select::{parse_index_list, parse_name_list, Selection};

/// Strategy for a single valid selection token: an ordinal or a range.
fn selection_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (1usize..200).prop_map(|n| n.to_string()),
        (1usize..200, 1usize..200).prop_map(|(a, b)| format!("{}-{}", a, b)),
    ]
}

/// Strategy for a comma-joined selection of valid tokens.
fn valid_selection() -> impl Strategy<Value = String> {
    prop::collection::vec(selection_token(), 1..8).prop_map(|tokens| tokens.join(","))
}

proptest! {
    /// Parsing never panics, whatever the user types.
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = parse_index_list(&input);
        let _ = Selection::parse(&input);
    }

    /// Every valid selection parses, and every index is zero-based
    /// and below the largest ordinal mentioned.
    #[test]
    fn valid_selections_parse_in_bounds(input in valid_selection()) {
        let indices = parse_index_list(&input).unwrap();
        let bound = input
            .split(&[',', '-'])
            .map(|t| t.parse::<usize>().unwrap())
            .max()
            .unwrap();
        for index in indices {
            prop_assert!(index < bound);
        }
    }

    /// Ranges are order-insensitive: `a-b` selects the same set as `b-a`.
    #[test]
    fn range_order_is_irrelevant(a in 1usize..200, b in 1usize..200) {
        let forward = parse_index_list(&format!("{}-{}", a, b)).unwrap();
        let backward = parse_index_list(&format!("{}-{}", b, a)).unwrap();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.len(), a.abs_diff(b) + 1);
    }

    /// Token order and duplication never change the selected set.
    #[test]
    fn selection_is_a_set(mut tokens in prop::collection::vec(selection_token(), 1..8)) {
        let original = parse_index_list(&tokens.join(",")).unwrap();
        tokens.reverse();
        tokens.push(tokens[0].clone());
        let shuffled = parse_index_list(&tokens.join(",")).unwrap();
        prop_assert_eq!(original, shuffled);
    }

    /// An all-numeric selection always classifies as indices.
    #[test]
    fn numeric_selections_classify_as_indices(input in valid_selection()) {
        prop_assert!(matches!(Selection::parse(&input), Selection::Indices(_)));
    }

    /// Splitting names preserves count and order.
    #[test]
    fn name_list_preserves_order(names in prop::collection::vec("[a-zA-Z ]{1,12}", 1..6)) {
        let parsed = parse_name_list(&names.join(","));
        prop_assert_eq!(parsed, names);
    }

    /// Merging fields is last-writer-wins for every key.
    #[test]
    fn merge_is_last_writer_wins(
        keys in prop::collection::vec("[a-z]{1,8}", 1..6),
        old in any::<i64>(),
        new in any::<i64>(),
    ) {
        let mut base = serde_json::Map::new();
        let mut updates = serde_json::Map::new();
        for key in &keys {
            base.insert(key.clone(), serde_json::json!(old));
            updates.insert(key.clone(), serde_json::json!(new));
        }
        merge_fields(&mut base, &updates);
        for key in &keys {
            prop_assert_eq!(&base[key], &serde_json::json!(new));
        }
    }

    /// Difficulty multipliers stay within the service's accepted band.
    #[test]
    fn difficulty_multiplier_in_band(word in prop::sample::select(vec!["easy", "medium", "hard"])) {
        let difficulty = Difficulty::parse_arg(word).unwrap();
        let multiplier = difficulty.multiplier();
        prop_assert!((1.0..=2.0).contains(&multiplier));
    }

    /// A request for an identified item always embeds the id in the
    /// path, never in the payload.
    #[test]
    fn identified_requests_move_id_to_path(id in "[a-f0-9]{8}", aspect in "[a-z]{3,8}") {
        let mut payload = serde_json::Map::new();
        payload.insert("_id".to_string(), serde_json::json!(id.clone()));
        payload.insert("text".to_string(), serde_json::json!("keep me"));

        let built = RequestSpec::new("user")
            .aspect(aspect.clone())
            .method(reqwest::Method::PUT)
            .fields(payload)
            .build("https://svc.example/api/v3");

        let expected_suffix = format!("{}/{}", aspect, id);
        prop_assert!(built.url.ends_with(&expected_suffix));
        prop_assert!(!built.payload.contains_key("_id"));
        prop_assert_eq!(&built.payload["text"], &serde_json::json!("keep me"));
    }
}
