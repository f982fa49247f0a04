pub const APP_NAME: &str = "Slab Scout";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, otherwise `v<crate version>`.
pub fn version_label() -> String {
    format_label(GIT_TAG, APP_VERSION)
}

/// `"Slab Scout v1.0.0"`, used for the window title and the footer.
pub fn app_title() -> String {
    format!("{APP_NAME} {}", version_label())
}

fn format_label(tag: Option<&str>, version: &str) -> String {
    match tag.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_git_tag() {
        assert_eq!(format_label(Some("v1.2.0-rc1"), "1.0.0"), "v1.2.0-rc1");
        assert_eq!(format_label(None, "1.0.0"), "v1.0.0");
        assert_eq!(format_label(Some("  "), "1.0.0"), "v1.0.0");
    }

    #[test]
    fn title_starts_with_app_name() {
        assert!(app_title().starts_with("Slab Scout "));
    }
}
