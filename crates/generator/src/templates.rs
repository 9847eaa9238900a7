//! Template loading

use tera::Tera;
use xrd_openapi_common::{Result, XrdError};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template("README.md", include_str!("../templates/README.md.tera"))
        .map_err(|e| XrdError::Render(format!("Failed to load README.md template: {}", e)))?;

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        let tera = load_templates().unwrap();
        assert!(tera.get_template_names().any(|name| name == "README.md"));
    }
}
