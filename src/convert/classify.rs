use crate::error::ConvertError;
use crate::graph::{RawEntity, TEXT_NODE_TYPE};
use crate::kind::NodeKind;
use crate::script::{Entity, Role};
use ahash::AHashMap;
use itertools::Itertools;

/// What one classified node contributes to the script document.
///
/// Classification is side-effect-free: it returns effects, and the converter
/// merges them into the accumulating document. A node may contribute more
/// than one (a root node yields both an entity and the root designation).
#[derive(Debug, Clone)]
pub(super) enum NodeEffect {
    SetVersion(String),
    DefineRole(Role),
    InsertEntity(Entity),
    MarkRoot { uuid: String, name: Option<String> },
}

/// Classifies one raw node by its label text.
pub(super) fn classify(raw: &RawEntity) -> Result<Vec<NodeEffect>, ConvertError> {
    if raw.entity_type != TEXT_NODE_TYPE {
        return Err(ConvertError::UnexpectedEntityType {
            entity_type: raw.entity_type.clone(),
            uuid: raw.uuid.clone(),
            text: raw.text.clone(),
        });
    }

    // split('\n') always yields at least one element, so line 0 exists even
    // for an empty label (it resolves to an unknown keyword below).
    let lines: Vec<&str> = raw.text.split('\n').collect();
    let keyword = lines[0];
    let kind =
        NodeKind::from_keyword(keyword).ok_or_else(|| ConvertError::UnknownNodeKind {
            keyword: keyword.to_string(),
            uuid: raw.uuid.clone(),
            text: raw.text.clone(),
        })?;

    let mut effects = Vec::new();
    match kind {
        NodeKind::Version => {
            if let Some(version) = lines.get(1) {
                effects.push(NodeEffect::SetVersion((*version).to_string()));
            }
        }
        NodeKind::Role => {
            effects.push(NodeEffect::DefineRole(parse_role(raw, &lines[1..])?));
        }
        kind if kind.is_process() => {
            effects.push(NodeEffect::InsertEntity(Entity {
                uuid: raw.uuid.clone(),
                kind,
                payload: lines[1..].iter().map(|line| (*line).to_string()).collect(),
                children: Vec::new(),
            }));
        }
        other => {
            return Err(ConvertError::UnhandledKind {
                kind: other,
                uuid: raw.uuid.clone(),
            });
        }
    }

    if kind.is_root() {
        effects.push(NodeEffect::MarkRoot {
            uuid: raw.uuid.clone(),
            name: lines.get(1).map(|line| (*line).to_string()),
        });
    }

    Ok(effects)
}

/// Parses a `role` node's remaining lines as `key:value` attribute pairs.
/// Both the ASCII colon and the full-width colon the editor's IME produces
/// are accepted as the separator.
fn parse_role(raw: &RawEntity, lines: &[&str]) -> Result<Role, ConvertError> {
    let mut id = None;
    let mut attributes = AHashMap::new();

    for line in lines {
        let (key, value): (&str, &str) = line
            .split(|c| c == ':' || c == '：')
            .collect_tuple()
            .ok_or_else(|| ConvertError::RoleParameter {
                uuid: raw.uuid.clone(),
                message: format!("attribute line {:?} must be a single 'key:value' pair", line),
            })?;

        if key == "id" {
            id = Some(value.to_string());
        } else {
            attributes.insert(key.to_string(), value.to_string());
        }
    }

    let id = id.ok_or_else(|| ConvertError::RoleParameter {
        uuid: raw.uuid.clone(),
        message: "missing required 'id' attribute".to_string(),
    })?;

    Ok(Role { id, attributes })
}
