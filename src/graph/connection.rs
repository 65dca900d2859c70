use crate::error::ConnectionError;
use crate::node::NodeKind;

/// Decides whether a `source`-kind node may connect downstream to a
/// `target`-kind node.
///
/// Pure and total over all kind pairs: the answer depends only on the
/// adjacency table in [`NodeKind::allowed_targets`]. On rejection the error
/// carries the source kind's full allowed-target list so the editor can
/// explain what would have been accepted instead of a bare "invalid".
pub fn check(source: NodeKind, target: NodeKind) -> Result<(), ConnectionError> {
    let allowed = source.allowed_targets();
    if allowed.contains(&target) {
        Ok(())
    } else {
        Err(ConnectionError {
            source_kind: source,
            target_kind: target,
            allowed,
        })
    }
}
