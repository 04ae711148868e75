//! Record Normalizer: scope canonicalization and namespace-key derivation.
//!
//! TextMate sometimes encodes a multi-scope declaration as newline-joined
//! identifiers; canonicalization folds those into the usual dot-hierarchical
//! form. The namespace key then takes the second and third dot segments
//! (skipping the top-level "source"/"text" segment) so that fine-grained
//! scopes like `source.python.django.migrations` collapse into one output
//! file per broad language/framework, and appends the domain suffix to keep
//! the output distinguishable from other snippet sets in the same directory.
//!
//! Both functions are pure; same inputs always give the same key.

/// Replace every literal newline in a scope declaration with a period.
pub fn canonicalize(scope: &str) -> String {
    scope.replace('\n', ".")
}

/// Derive the grouping/file-naming key from a canonicalized scope.
///
/// Segments at 0-indexed positions 1 and 2 (whatever subset exists) joined
/// with '-', then the domain appended with '-'. A scope with fewer than two
/// segments yields keys like "-zope".
pub fn namespace_key(canonical_scope: &str, domain: &str) -> String {
    let picked: Vec<&str> = canonical_scope.split('.').skip(1).take(2).collect();
    format!("{}-{}", picked.join("-"), domain)
}
