use crate::error::ConvertError;
use crate::graph::RawAssociation;
use crate::script::Entity;
use ahash::AHashMap;

/// Attaches each association's target to the child list of its source
/// entity. Child order follows association input order.
///
/// Only the source side is resolved here; a target uuid that matches no
/// entity is accepted and stays a plain reference. The strict validation
/// pass reports those if the caller opted in.
pub(super) fn assemble(
    entities: &mut AHashMap<String, Entity>,
    associations: &[RawAssociation],
) -> Result<(), ConvertError> {
    for association in associations {
        let entity = entities.get_mut(&association.source).ok_or_else(|| {
            ConvertError::UnknownAssociationSource {
                source_uuid: association.source.clone(),
                target: association.target.clone(),
            }
        })?;
        entity.children.push(association.target.clone());
    }
    Ok(())
}
