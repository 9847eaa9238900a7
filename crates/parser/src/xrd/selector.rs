//! Referenceable version selection

use super::types::{CompositeResourceDefinition, XrdVersion};
use tracing::{debug, warn};
use xrd_openapi_common::{Result, XrdError};

/// Pick the version other resources reference
///
/// Scans `spec.versions` in declaration order and returns the first entry
/// flagged `referenceable`. When several are flagged the first still wins and
/// the others are reported with a warning.
pub fn select_referenceable_version(xrd: &CompositeResourceDefinition) -> Result<&XrdVersion> {
    let mut referenceable = xrd.spec.versions.iter().filter(|v| v.referenceable);

    let selected = referenceable
        .next()
        .ok_or(XrdError::NoReferenceableVersion)?;

    let ignored: Vec<&str> = referenceable.map(|v| v.name.as_str()).collect();
    if !ignored.is_empty() {
        warn!(
            xrd = %xrd.name(),
            selected = %selected.name,
            ignored = ?ignored,
            "multiple referenceable versions, using the first one"
        );
    }

    debug!(xrd = %xrd.name(), version = %selected.name, "selected referenceable version");
    Ok(selected)
}
