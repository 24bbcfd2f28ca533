use once_cell::sync::Lazy;

use super::{table, Dictionary};

pub(super) static PRIMITIVES: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("any", "any"),
        ("bool", "bool"),
        ("byte", "byte"),
        ("complex128", "complex128"),
        ("complex64", "complex64"),
        ("error", "error"),
        ("float32", "float32"),
        ("float64", "float64"),
        ("int", "int"),
        ("int16", "int16"),
        ("int32", "int32"),
        ("int64", "int64"),
        ("int8", "int8"),
        ("rune", "rune"),
        ("string", "string"),
        ("uint", "uint"),
        ("uint16", "uint16"),
        ("uint32", "uint32"),
        ("uint64", "uint64"),
        ("uint8", "uint8"),
        ("uintptr", "uintptr"),
    ])
});

pub(super) static STANDARD_LIBRARY: Lazy<Dictionary> = Lazy::new(|| {
    table(&[
        ("Buffer", "bytes.Buffer"),
        ("Context", "context.Context"),
        ("Duration", "time.Duration"),
        ("Mutex", "sync.Mutex"),
        ("Reader", "io.Reader"),
        ("RWMutex", "sync.RWMutex"),
        ("Time", "time.Time"),
        ("WaitGroup", "sync.WaitGroup"),
        ("Writer", "io.Writer"),
    ])
});
