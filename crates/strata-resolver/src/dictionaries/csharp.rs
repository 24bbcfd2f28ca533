use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("bool", "bool"),
        ("byte", "byte"),
        ("char", "char"),
        ("decimal", "decimal"),
        ("double", "double"),
        ("dynamic", "dynamic"),
        ("float", "float"),
        ("int", "int"),
        ("long", "long"),
        ("object", "object"),
        ("sbyte", "sbyte"),
        ("short", "short"),
        ("string", "string"),
        ("uint", "uint"),
        ("ulong", "ulong"),
        ("ushort", "ushort"),
        ("var", "var"),
        ("void", "void"),
    ])
});

pub(super) static STANDARD_LIBRARY: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("DateTime", "System.DateTime"),
        ("Dictionary", "System.Collections.Generic.Dictionary"),
        ("Exception", "System.Exception"),
        ("Guid", "System.Guid"),
        ("HashSet", "System.Collections.Generic.HashSet"),
        ("IEnumerable", "System.Collections.Generic.IEnumerable"),
        ("IList", "System.Collections.Generic.IList"),
        ("List", "System.Collections.Generic.List"),
        ("Nullable", "System.Nullable"),
        ("String", "System.String"),
        ("Task", "System.Threading.Tasks.Task"),
        ("TimeSpan", "System.TimeSpan"),
    ])
});
