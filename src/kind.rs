use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds a graph document may contain.
///
/// The kind of a node is the first line of its label text, as written by the
/// visual editor. A node always has exactly one kind; the composite
/// categories below are fixed groupings used by the converter, not states a
/// node can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Text,
    Role,
    Root,
    Event,
    Button,
    Version,
    End,
    Lookup,
    Fail,
    Success,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::Text,
        NodeKind::Role,
        NodeKind::Root,
        NodeKind::Event,
        NodeKind::Button,
        NodeKind::Version,
        NodeKind::End,
        NodeKind::Lookup,
        NodeKind::Fail,
        NodeKind::Success,
    ];

    /// Content-bearing kinds that become entities in the script tree.
    pub const PROCESS: &'static [NodeKind] = &[
        NodeKind::Text,
        NodeKind::Event,
        NodeKind::Button,
        NodeKind::End,
        NodeKind::Lookup,
        NodeKind::Fail,
        NodeKind::Success,
        NodeKind::Root,
    ];

    /// Kinds that anchor the script tree.
    pub const ROOT: &'static [NodeKind] = &[NodeKind::Root];

    /// Terminal outcome kinds of a lookup branch.
    pub const RESULT: &'static [NodeKind] = &[NodeKind::Fail, NodeKind::Success];

    /// Resolves a label keyword (the first line of a node's text) to its kind.
    ///
    /// The keyword spellings are those the editor writes, which is why some
    /// differ from the variant names.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "text" => Some(NodeKind::Text),
            "role" => Some(NodeKind::Role),
            "root" => Some(NodeKind::Root),
            "event" => Some(NodeKind::Event),
            "btn" => Some(NodeKind::Button),
            "version" => Some(NodeKind::Version),
            "end" => Some(NodeKind::End),
            "zhao-cha" => Some(NodeKind::Lookup),
            "fail" => Some(NodeKind::Fail),
            "succ" => Some(NodeKind::Success),
            _ => None,
        }
    }

    /// The label keyword this kind is written as.
    pub fn keyword(self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Role => "role",
            NodeKind::Root => "root",
            NodeKind::Event => "event",
            NodeKind::Button => "btn",
            NodeKind::Version => "version",
            NodeKind::End => "end",
            NodeKind::Lookup => "zhao-cha",
            NodeKind::Fail => "fail",
            NodeKind::Success => "succ",
        }
    }

    pub fn is_process(self) -> bool {
        Self::PROCESS.contains(&self)
    }

    pub fn is_root(self) -> bool {
        Self::ROOT.contains(&self)
    }

    pub fn is_result(self) -> bool {
        Self::RESULT.contains(&self)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
