//! Legacy definition names.
//!
//! Collections moved into the `HH` namespace keep their old URLs alive
//! through permanent redirects. Lookups are exact and case-sensitive.

/// Old name -> canonical name.
const RENAMED_APIS: &[(&str, &str)] = &[
    ("ImmMap", "HH.ImmMap"),
    ("ImmSet", "HH.ImmSet"),
    ("ImmVector", "HH.ImmVector"),
    ("Map", "HH.Map"),
    ("Pair", "HH.Pair"),
    ("Set", "HH.Set"),
    ("Vector", "HH.Vector"),
];

/// Canonical name for a renamed definition, if `old` is a legacy name.
#[must_use]
pub fn renamed_api(old: &str) -> Option<&'static str> {
    RENAMED_APIS
        .iter()
        .find(|(legacy, _)| *legacy == old)
        .map(|&(_, canonical)| canonical)
}

/// Every legacy name and its canonical replacement.
#[must_use]
pub fn renamed_apis() -> &'static [(&'static str, &'static str)] {
    RENAMED_APIS
}
