//! Provider configuration synthesis

use crate::openapi::PathSource;
use tracing::debug;
use xrd_openapi_common::{ProviderConfig, ResourceConfig};

/// Resource name of an XRD in the provider configuration
///
/// # Examples
/// ```
/// use xrd_openapi_generator::resource_name;
///
/// assert_eq!(resource_name("widgets.example.org"), "widgets_example_org");
/// ```
pub fn resource_name(definition_name: &str) -> String {
    definition_name.replace('.', "_")
}

/// Build the provider configuration for a set of registered paths
///
/// Every source becomes one resource whose create, read, update and delete
/// operations all point at the source's path.
pub fn synthesize_provider_config(provider_name: &str, sources: &[PathSource]) -> ProviderConfig {
    let mut config = ProviderConfig::new(provider_name);

    for source in sources {
        let name = resource_name(&source.definition_name);
        debug!(resource = %name, path = %source.path, "mapped CRUD operations");
        config
            .resources
            .insert(name, ResourceConfig::for_path(&source.path));
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrd_openapi_common::HttpMethod;

    fn source(definition_name: &str, path: &str) -> PathSource {
        PathSource {
            path: path.to_string(),
            definition_name: definition_name.to_string(),
            version: "v1".to_string(),
        }
    }

    #[test]
    fn test_resource_name_replaces_every_dot() {
        assert_eq!(resource_name("a.b.c.d"), "a_b_c_d");
        assert_eq!(resource_name("nodots"), "nodots");
        assert_eq!(resource_name(".lead.trail."), "_lead_trail_");
    }

    #[test]
    fn test_single_source() {
        let path = "/apis/example.org/v1/widgets/{namespace}/{name}";
        let sources = [source("widgets.example.org", path)];
        let config = synthesize_provider_config("example_crossplane", &sources);

        assert_eq!(config.provider.name, "example_crossplane");
        assert_eq!(config.resources.len(), 1);

        let resource = &config.resources["widgets_example_org"];
        assert_eq!(resource.create.method, HttpMethod::Post);
        assert_eq!(resource.read.method, HttpMethod::Get);
        assert_eq!(resource.update.method, HttpMethod::Put);
        assert_eq!(resource.delete.method, HttpMethod::Delete);
        assert!(resource.operations().iter().all(|(_, op)| op.path == path));
    }

    #[test]
    fn test_no_sources() {
        let config = synthesize_provider_config("p", &[]);
        assert!(config.resources.is_empty());
    }
}
