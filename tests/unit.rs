//! Unit tests for the node kind registry and error types.
mod common;
use kyakuhon::prelude::*;

#[test]
fn test_keyword_round_trip() {
    for kind in NodeKind::ALL {
        assert_eq!(
            NodeKind::from_keyword(kind.keyword()),
            Some(*kind),
            "keyword '{}' should resolve back to {:?}",
            kind.keyword(),
            kind
        );
    }
}

#[test]
fn test_editor_keyword_spellings() {
    // The editor's label spellings differ from the variant names for these
    assert_eq!(NodeKind::from_keyword("btn"), Some(NodeKind::Button));
    assert_eq!(NodeKind::from_keyword("zhao-cha"), Some(NodeKind::Lookup));
    assert_eq!(NodeKind::from_keyword("succ"), Some(NodeKind::Success));
}

#[test]
fn test_unknown_keyword() {
    assert_eq!(NodeKind::from_keyword("npc"), None);
    assert_eq!(NodeKind::from_keyword(""), None);
    assert_eq!(NodeKind::from_keyword("Text"), None);
}

#[test]
fn test_composite_categories() {
    // Result kinds are process-eligible but never roots
    for kind in [NodeKind::Fail, NodeKind::Success] {
        assert!(kind.is_result());
        assert!(kind.is_process());
        assert!(!kind.is_root());
    }

    // The root kind anchors the tree and is itself content-bearing
    assert!(NodeKind::Root.is_root());
    assert!(NodeKind::Root.is_process());
    assert!(!NodeKind::Root.is_result());

    // Document-level kinds produce no tree entity
    for kind in [NodeKind::Role, NodeKind::Version] {
        assert!(!kind.is_process());
        assert!(!kind.is_root());
        assert!(!kind.is_result());
    }

    for kind in [
        NodeKind::Text,
        NodeKind::Event,
        NodeKind::Button,
        NodeKind::End,
        NodeKind::Lookup,
    ] {
        assert!(kind.is_process());
        assert!(!kind.is_root());
        assert!(!kind.is_result());
    }
}

#[test]
fn test_kind_display_uses_keyword() {
    assert_eq!(format!("{}", NodeKind::Button), "btn");
    assert_eq!(format!("{}", NodeKind::Lookup), "zhao-cha");
    assert_eq!(format!("{}", NodeKind::Text), "text");
}

#[test]
fn test_error_display_carries_context() {
    let err = ConvertError::UnknownNodeKind {
        keyword: "npc".to_string(),
        uuid: "0042".to_string(),
        text: "npc\nGuard".to_string(),
    };
    assert!(err.to_string().contains("npc"));
    assert!(err.to_string().contains("0042"));

    let err = ConvertError::UnknownAssociationSource {
        source_uuid: "ghost-1".to_string(),
        target: "0001".to_string(),
    };
    assert!(err.to_string().contains("ghost-1"));

    let err = ConvertError::RootChildCount {
        uuid: "0001".to_string(),
        count: 3,
    };
    assert!(err.to_string().contains("0001"));
    assert!(err.to_string().contains('3'));
}
