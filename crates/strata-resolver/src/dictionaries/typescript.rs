use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("any", "any"),
        ("bigint", "bigint"),
        ("boolean", "boolean"),
        ("never", "never"),
        ("null", "null"),
        ("number", "number"),
        ("object", "object"),
        ("string", "string"),
        ("symbol", "symbol"),
        ("undefined", "undefined"),
        ("unknown", "unknown"),
        ("void", "void"),
    ])
});
