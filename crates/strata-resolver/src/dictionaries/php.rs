use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("array", "array"),
        ("bool", "bool"),
        ("callable", "callable"),
        ("float", "float"),
        ("int", "int"),
        ("iterable", "iterable"),
        ("mixed", "mixed"),
        ("null", "null"),
        ("object", "object"),
        ("string", "string"),
        ("void", "void"),
    ])
});
