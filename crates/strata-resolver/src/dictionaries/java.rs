use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("boolean", "boolean"),
        ("byte", "byte"),
        ("char", "char"),
        ("double", "double"),
        ("float", "float"),
        ("int", "int"),
        ("long", "long"),
        ("short", "short"),
        ("var", "var"),
        ("void", "void"),
    ])
});

pub(super) static STANDARD_LIBRARY: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("ArrayList", "java.util.ArrayList"),
        ("Boolean", "java.lang.Boolean"),
        ("Collection", "java.util.Collection"),
        ("Double", "java.lang.Double"),
        ("Exception", "java.lang.Exception"),
        ("HashMap", "java.util.HashMap"),
        ("HashSet", "java.util.HashSet"),
        ("Integer", "java.lang.Integer"),
        ("Iterable", "java.lang.Iterable"),
        ("Iterator", "java.util.Iterator"),
        ("List", "java.util.List"),
        ("Long", "java.lang.Long"),
        ("Map", "java.util.Map"),
        ("Object", "java.lang.Object"),
        ("Optional", "java.util.Optional"),
        ("RuntimeException", "java.lang.RuntimeException"),
        ("Set", "java.util.Set"),
        ("Stream", "java.util.stream.Stream"),
        ("String", "java.lang.String"),
        ("StringBuilder", "java.lang.StringBuilder"),
        ("Throwable", "java.lang.Throwable"),
    ])
});
