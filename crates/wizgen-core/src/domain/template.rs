//! Template model: in-memory trees of files and directories.
//!
//! A template unit is a tree, not a disk path. Sources hand the renderer
//! fully materialized trees so rendering never touches template storage,
//! only the output filesystem.

/// Marker suffix identifying files whose body contains placeholders.
///
/// `package.json.tpl` renders to `package.json` with substitution applied;
/// a file without the suffix is copied byte-for-byte.
pub const TPL_SUFFIX: &str = ".tpl";

/// One node of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    File { name: String, body: String },
    Dir {
        name: String,
        children: Vec<TemplateNode>,
    },
}

impl TemplateNode {
    pub fn file(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TemplateNode>) -> Self {
        Self::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Dir { name, .. } => name,
        }
    }
}

/// A complete template unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTree {
    pub nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub fn new(nodes: Vec<TemplateNode>) -> Self {
        Self { nodes }
    }

    /// A unit consisting of a single file.
    pub fn single(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            nodes: vec![TemplateNode::file(name, body)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Whether `name` carries the template marker.
pub fn is_templated(name: &str) -> bool {
    name.ends_with(TPL_SUFFIX)
}

/// Output file name: the input name with the marker stripped, if present.
pub fn output_name(name: &str) -> &str {
    name.strip_suffix(TPL_SUFFIX).unwrap_or(name)
}
