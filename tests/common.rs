//! Common test utilities for building graph documents.
use kyakuhon::prelude::*;
use std::path::PathBuf;

/// A raw editor export with the extra geometry fields the converter ignores.
#[allow(dead_code)]
pub const SIMPLE_GRAPH_JSON: &str = r#"{
  "entities": [
    { "type": "core:text_node", "uuid": "0001", "text": "root\nChapter 1", "location": [0, 0], "size": [120, 60] },
    { "type": "core:text_node", "uuid": "0002", "text": "version\n1.2.3", "location": [0, 120] },
    { "type": "core:text_node", "uuid": "0003", "text": "role\nid:hero\nname:Aria", "location": [0, 240] },
    { "type": "core:text_node", "uuid": "0004", "text": "text\nhero\nHello there.", "location": [200, 0] },
    { "type": "core:text_node", "uuid": "0005", "text": "end", "location": [400, 0] }
  ],
  "associations": [
    { "source": "0001", "target": "0004", "uuid": "edge-0001" },
    { "source": "0004", "target": "0005", "uuid": "edge-0002" }
  ]
}"#;

#[allow(dead_code)]
pub fn text_node(uuid: &str, text: &str) -> RawEntity {
    RawEntity {
        entity_type: TEXT_NODE_TYPE.to_string(),
        uuid: uuid.to_string(),
        text: text.to_string(),
    }
}

#[allow(dead_code)]
pub fn association(source: &str, target: &str) -> RawAssociation {
    RawAssociation {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// A small, valid document: root -> text -> end, plus a version node and
/// one role definition.
#[allow(dead_code)]
pub fn create_simple_graph() -> GraphDocument {
    GraphDocument {
        entities: vec![
            text_node("0001", "root\nChapter 1"),
            text_node("0002", "version\n1.2.3"),
            text_node("0003", "role\nid:hero\nname:Aria"),
            text_node("0004", "text\nhero\nHello there."),
            text_node("0005", "end"),
        ],
        associations: vec![association("0001", "0004"), association("0004", "0005")],
    }
}

/// A document exercising the lookup branch: the lookup node fans out into
/// the two terminal result kinds.
#[allow(dead_code)]
pub fn create_lookup_graph() -> GraphDocument {
    GraphDocument {
        entities: vec![
            text_node("1001", "root\nLookup Demo"),
            text_node("1002", "zhao-cha\nFind the differences."),
            text_node("1003", "fail\nToo bad."),
            text_node("1004", "succ\nWell done."),
        ],
        associations: vec![
            association("1001", "1002"),
            association("1002", "1003"),
            association("1002", "1004"),
        ],
    }
}

/// A scratch directory for tests that write files.
#[allow(dead_code)]
pub fn setup_test_dir() -> PathBuf {
    std::env::temp_dir().join("kyakuhon_tests")
}
