use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("Any", "Any"),
        ("Boolean", "Boolean"),
        ("Byte", "Byte"),
        ("Char", "Char"),
        ("Double", "Double"),
        ("Float", "Float"),
        ("Int", "Int"),
        ("Long", "Long"),
        ("Nothing", "Nothing"),
        ("Short", "Short"),
        ("Unit", "Unit"),
    ])
});

pub(super) static STANDARD_LIBRARY: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("List", "kotlin.collections.List"),
        ("Map", "kotlin.collections.Map"),
        ("MutableList", "kotlin.collections.MutableList"),
        ("MutableMap", "kotlin.collections.MutableMap"),
        ("MutableSet", "kotlin.collections.MutableSet"),
        ("Pair", "kotlin.Pair"),
        ("Sequence", "kotlin.sequences.Sequence"),
        ("Set", "kotlin.collections.Set"),
        ("String", "kotlin.String"),
    ])
});
