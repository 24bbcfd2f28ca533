use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("auto", "auto"),
        ("bool", "bool"),
        ("char", "char"),
        ("double", "double"),
        ("float", "float"),
        ("int", "int"),
        ("int16_t", "int16_t"),
        ("int32_t", "int32_t"),
        ("int64_t", "int64_t"),
        ("int8_t", "int8_t"),
        ("long", "long"),
        ("short", "short"),
        ("signed", "signed"),
        ("size_t", "size_t"),
        ("uint16_t", "uint16_t"),
        ("uint32_t", "uint32_t"),
        ("uint64_t", "uint64_t"),
        ("uint8_t", "uint8_t"),
        ("unsigned", "unsigned"),
        ("void", "void"),
        ("wchar_t", "wchar_t"),
    ])
});

pub(super) static STANDARD_LIBRARY: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("array", "std.array"),
        ("deque", "std.deque"),
        ("function", "std.function"),
        ("map", "std.map"),
        ("optional", "std.optional"),
        ("pair", "std.pair"),
        ("set", "std.set"),
        ("shared_ptr", "std.shared_ptr"),
        ("string", "std.string"),
        ("string_view", "std.string_view"),
        ("tuple", "std.tuple"),
        ("unique_ptr", "std.unique_ptr"),
        ("unordered_map", "std.unordered_map"),
        ("unordered_set", "std.unordered_set"),
        ("variant", "std.variant"),
        ("vector", "std.vector"),
        ("weak_ptr", "std.weak_ptr"),
    ])
});
