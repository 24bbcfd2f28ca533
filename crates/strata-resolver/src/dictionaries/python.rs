use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("None", "None"),
        ("bool", "bool"),
        ("bytes", "bytes"),
        ("dict", "dict"),
        ("float", "float"),
        ("frozenset", "frozenset"),
        ("int", "int"),
        ("list", "list"),
        ("object", "object"),
        ("set", "set"),
        ("str", "str"),
        ("tuple", "tuple"),
    ])
});
