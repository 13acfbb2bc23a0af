//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for idempotence and
//! cleanliness. This module focuses on naming and relationships.

use super::base::BasePathResolver;
use super::normalize::normalize_with;
use super::relationship::PathRelationship;
use super::syntax::PathSyntax;
use super::types::NormalizedPath;
use proptest::prelude::*;

fn posix(raw: &str, cwd: &NormalizedPath) -> NormalizedPath {
    normalize_with(raw, cwd, PathSyntax::POSIX)
}

// Strategy for generating plain path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

fn cwd_strategy() -> impl Strategy<Value = NormalizedPath> {
    prop::collection::vec(segment_strategy(), 0..4)
        .prop_map(|parts| posix(&format!("/{}", parts.join("/")), &NormalizedPath::root()))
}

// Interleave "." and empty segments without changing meaning
fn noisy_spelling(parts: &[String], noise: &[u8]) -> String {
    let mut out = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        match noise.get(i).copied().unwrap_or(0) % 4 {
            1 => out.push(".".to_string()),
            // a leading empty segment would make the path absolute
            2 if i > 0 => out.push(String::new()),
            3 => {
                out.push("decoy".to_string());
                out.push("..".to_string());
            }
            _ => {}
        }
        out.push(part.clone());
    }
    out.join("/")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A file under the base path is named by its remainder below the base
    #[test]
    fn base_path_prefix_is_stripped(
        cwd in cwd_strategy(),
        base in segments_strategy(),
        rest in segments_strategy(),
    ) {
        let base_text = format!("/{}", base.join("/"));
        let resolver = BasePathResolver::new(cwd.clone(), Some(&base_text));
        let file = posix(&format!("{base_text}/{}", rest.join("/")), &cwd);
        let resolution = resolver.resolve(&file);
        prop_assert_eq!(resolution.source_unit_name.as_str(), rest.join("/"));
        prop_assert_eq!(resolution.directory.as_str(), base_text);
    }

    // Spellings differing only in ".", "x/.." or doubled separators get the same name
    #[test]
    fn dot_spellings_are_equivalent(
        cwd in cwd_strategy(),
        parts in segments_strategy(),
        noise in prop::collection::vec(any::<u8>(), 0..6),
    ) {
        let resolver = BasePathResolver::new(cwd.clone(), None);
        let plain = resolver.resolve(&posix(&parts.join("/"), &cwd));
        let noisy = resolver.resolve(&posix(&noisy_spelling(&parts, &noise), &cwd));
        prop_assert_eq!(plain.source_unit_name, noisy.source_unit_name);
    }

    // Any number of leading ".." on an absolute path clamps at the root
    #[test]
    fn dot_dot_clamps_at_root(ups in 1usize..6, parts in segments_strategy()) {
        let raw = format!("/{}{}", "../".repeat(ups), parts.join("/"));
        let normalized = posix(&raw, &NormalizedPath::root());
        prop_assert_eq!(normalized.as_str(), format!("/{}", parts.join("/")));
    }

    // Every path is within the root, and within itself
    #[test]
    fn everything_is_within_root(cwd in cwd_strategy(), parts in segments_strategy()) {
        let path = posix(&parts.join("/"), &cwd);
        prop_assert!(PathRelationship::is_within(&path, &NormalizedPath::root()));
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Ancestor and descendant are mirror images
    #[test]
    fn relationship_is_antisymmetric(a in segments_strategy(), b in segments_strategy()) {
        let root = NormalizedPath::root();
        let left = posix(&format!("/{}", a.join("/")), &root);
        let right = posix(&format!("/{}/{}", a.join("/"), b.join("/")), &root);
        prop_assert_eq!(PathRelationship::between(&left, &right), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(&right, &left), PathRelationship::Descendant);
    }
}
