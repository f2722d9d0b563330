use crate::error::ConvertError;
use crate::script::Entity;
use ahash::AHashMap;

/// Checks the structural invariants of the assembled entity tree.
///
/// Every root entity must have exactly one child. Non-root entities carry
/// no enforced invariant yet. With `strict_references`, every child uuid
/// must also resolve to an entity in the document; the default leaves
/// target resolution to the consumer.
pub(super) fn validate(
    entities: &AHashMap<String, Entity>,
    strict_references: bool,
) -> Result<(), ConvertError> {
    for entity in entities.values() {
        if entity.kind.is_root() && entity.children.len() != 1 {
            return Err(ConvertError::RootChildCount {
                uuid: entity.uuid.clone(),
                count: entity.children.len(),
            });
        }
    }

    if strict_references {
        for entity in entities.values() {
            for child in &entity.children {
                if !entities.contains_key(child) {
                    return Err(ConvertError::DanglingChildReference {
                        source_uuid: entity.uuid.clone(),
                        target: child.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}
