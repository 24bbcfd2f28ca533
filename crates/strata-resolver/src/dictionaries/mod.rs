//! Per-language lookup tables
//!
//! Each language contributes two pure `name -> SymbolPath` maps: builtin
//! primitives/keywords and well-known standard-library types. Selected by
//! language tag; languages without a configured table get an empty map.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use strata_core::{Language, SymbolPath};

mod cpp;
mod csharp;
mod go;
mod java;
mod kotlin;
mod php;
mod python;
mod typescript;

pub type Dictionary = BTreeMap<&'static str, SymbolPath>;

static EMPTY: Lazy<Dictionary> = Lazy::new(BTreeMap::new);

/// Builtin primitive/keyword types for a language.
pub fn primitives(language: Language) -> &'static Dictionary {
    match language {
        Language::Java => &java::PRIMITIVES,
        Language::CSharp => &csharp::PRIMITIVES,
        Language::TypeScript => &typescript::PRIMITIVES,
        Language::Go => &go::PRIMITIVES,
        Language::Python => &python::PRIMITIVES,
        Language::Cpp => &cpp::PRIMITIVES,
        Language::Php => &php::PRIMITIVES,
        Language::Kotlin => &kotlin::PRIMITIVES,
        Language::JavaScript | Language::Vue => &EMPTY,
    }
}

/// Well-known standard-library types mapped to their canonical paths.
pub fn standard_library(language: Language) -> &'static Dictionary {
    match language {
        Language::Java => &java::STANDARD_LIBRARY,
        Language::CSharp => &csharp::STANDARD_LIBRARY,
        Language::Go => &go::STANDARD_LIBRARY,
        Language::Cpp => &cpp::STANDARD_LIBRARY,
        Language::Kotlin => &kotlin::STANDARD_LIBRARY,
        Language::TypeScript
        | Language::JavaScript
        | Language::Python
        | Language::Php
        | Language::Vue => &EMPTY,
    }
}

/// Build a dictionary from `(name, dotted canonical path)` pairs.
pub(crate) fn table(entries: &[(&'static str, &str)]) -> Dictionary {
    entries
        .iter()
        .map(|(name, canonical)| (*name, SymbolPath::from_dotted(canonical)))
        .collect()
}
