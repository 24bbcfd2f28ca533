//! Node and dependency model shared by every pipeline stage

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::path::SymbolPath;

/// Source languages the upstream analyzers can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    CSharp,
    TypeScript,
    JavaScript,
    Go,
    Python,
    Cpp,
    Php,
    Kotlin,
    Vue,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Php => "php",
            Language::Kotlin => "kotlin",
            Language::Vue => "vue",
        }
    }
}

/// Discriminates what kind of code entity a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Class,
    Interface,
    Enum,
    Struct,
    Function,
    Method,
    Variable,
    Constant,
    Script,
    #[default]
    Unknown,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Enum => "enum",
            NodeKind::Struct => "struct",
            NodeKind::Function => "function",
            NodeKind::Method => "method",
            NodeKind::Variable => "variable",
            NodeKind::Constant => "constant",
            NodeKind::Script => "script",
            NodeKind::Unknown => "unknown",
        }
    }
}

/// How a referenced type is used at the reference site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum UsageKind {
    #[default]
    Usage,
    Inheritance,
    Implementation,
    ConstantAccess,
    ReturnValue,
    Instantiation,
    Argument,
}

impl UsageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageKind::Usage => "usage",
            UsageKind::Inheritance => "inheritance",
            UsageKind::Implementation => "implementation",
            UsageKind::ConstantAccess => "constant_access",
            UsageKind::ReturnValue => "return_value",
            UsageKind::Instantiation => "instantiation",
            UsageKind::Argument => "argument",
        }
    }
}

/// Render a set of usage kinds as the report's edge `type` string.
pub fn join_usages<'a>(usages: impl IntoIterator<Item = &'a UsageKind>) -> String {
    let parts: Vec<&str> = usages.into_iter().map(UsageKind::as_str).collect();
    parts.join(",")
}

/// A raw import statement captured during parsing, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependency {
    pub path: SymbolPath,
    /// `import pkg.*` style blanket reference.
    #[serde(default)]
    pub wildcard: bool,
    /// Go-style dot import: makes the package's symbols available unqualified.
    #[serde(default)]
    pub dot_import: bool,
}

impl RawDependency {
    pub fn simple(path: SymbolPath) -> Self {
        RawDependency {
            path,
            wildcard: false,
            dot_import: false,
        }
    }

    pub fn wildcard(path: SymbolPath) -> Self {
        RawDependency {
            path,
            wildcard: true,
            dot_import: false,
        }
    }
}

/// A referenced type name with its nested type parameters, e.g. `List<Foo>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub usage: UsageKind,
    #[serde(default)]
    pub type_parameters: Vec<TypeRef>,
}

impl TypeRef {
    pub fn simple(name: &str) -> Self {
        TypeRef {
            name: name.to_string(),
            usage: UsageKind::Usage,
            type_parameters: Vec::new(),
        }
    }

    pub fn with_usage(name: &str, usage: UsageKind) -> Self {
        TypeRef {
            name: name.to_string(),
            usage,
            type_parameters: Vec::new(),
        }
    }

    /// This type and every type nested in its parameters, depth-first.
    pub fn flatten(&self) -> Vec<&TypeRef> {
        let mut refs = vec![self];
        let mut i = 0;
        while i < refs.len() {
            let current = refs[i];
            refs.extend(current.type_parameters.iter());
            i += 1;
        }
        refs
    }
}

/// One analyzed symbol as produced by a per-language analyzer, unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    pub path: SymbolPath,
    pub physical_path: String,
    #[serde(default)]
    pub kind: NodeKind,
    pub language: Language,
    #[serde(default)]
    pub imports: Vec<RawDependency>,
    #[serde(default)]
    pub used_types: Vec<TypeRef>,
    /// Alternate exported names that resolve to this symbol (wildcard
    /// re-exports and friends). Consulted during lookup, never identity.
    #[serde(default)]
    pub aliases: Vec<SymbolPath>,
}

impl SourceNode {
    pub fn id(&self) -> String {
        self.path.dotted()
    }
}

/// A dependency after resolution: a canonical path plus the wildcard flag
/// and the set of usage kinds observed at the reference sites.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDependency {
    pub path: SymbolPath,
    pub wildcard: bool,
    pub usages: BTreeSet<UsageKind>,
}

impl ResolvedDependency {
    /// Stable identifier; wildcard references carry a `.*` suffix so they
    /// can never collide with a concrete node id.
    pub fn id(&self) -> String {
        if self.wildcard {
            format!("{}.*", self.path.dotted())
        } else {
            self.path.dotted()
        }
    }

    pub fn usage_label(&self) -> String {
        join_usages(&self.usages)
    }
}

/// One analyzed symbol with its dependencies finally classified.
///
/// Created once by the resolver, read-only for every later stage. The
/// internal/external split is exhaustive and mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNode {
    pub path: SymbolPath,
    pub physical_path: String,
    pub kind: NodeKind,
    pub language: Language,
    /// Dependencies on other resolved nodes in this run.
    pub internal: BTreeSet<ResolvedDependency>,
    /// Everything else: stdlib/primitive matches and unknown placeholders.
    pub external: BTreeSet<ResolvedDependency>,
    /// Referenced types, kept for diagnostics and visualization.
    pub used_types: Vec<TypeRef>,
}

impl ResolvedNode {
    /// Primary key within one analysis run.
    pub fn id(&self) -> String {
        self.path.dotted()
    }

    pub fn name(&self) -> &str {
        self.path.name()
    }

    /// Minimal projection for the graph algorithms. Contains only edges to
    /// ids that are themselves valid node ids in this run.
    pub fn node_info(&self) -> NodeInfo {
        NodeInfo {
            id: self.id(),
            dependencies: self.internal.iter().map(ResolvedDependency::id).collect(),
        }
    }
}

/// Graph-algorithm view of a node: id plus internal dependency ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeInfo {
    pub id: String,
    pub dependencies: BTreeSet<String>,
}

impl NodeInfo {
    pub fn new<I, S>(id: &str, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodeInfo {
            id: id.to_string(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}
