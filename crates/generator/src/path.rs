//! Claim endpoint path synthesis

use xrd_openapi_parser::{CompositeResourceDefinition, XrdVersion};

/// Path of the namespaced claim endpoint of an XRD version
///
/// `{namespace}` and `{name}` stay literal path-parameter placeholders. The
/// group, version and plural are inserted verbatim.
///
/// # Examples
/// ```
/// use xrd_openapi_generator::claim_path_for;
///
/// assert_eq!(
///     claim_path_for("example.org", "v1", "widgets"),
///     "/apis/example.org/v1/widgets/{namespace}/{name}"
/// );
/// ```
pub fn claim_path(xrd: &CompositeResourceDefinition, version: &XrdVersion) -> String {
    claim_path_for(xrd.group(), &version.name, xrd.claim_plural())
}

/// Path of the namespaced claim endpoint from its raw components
pub fn claim_path_for(group: &str, version: &str, plural: &str) -> String {
    format!("/apis/{}/{}/{}/{{namespace}}/{{name}}", group, version, plural)
}
