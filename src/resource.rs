//! Resource path normalization for `@`-prefixed attribute values.

/// Resolves `@relative/path` against the package directory of `controller`.
///
/// `@../images/a.png` under `com.example.Main` becomes `/com/images/a.png`.
/// Leading `../` segments climb out of the package directory; climbing past the
/// top stays at the top.
pub fn normalize_resource_path(controller: Option<&str>, value: &str) -> String {
    let relative = value.strip_prefix('@').unwrap_or(value);

    let mut base: Vec<&str> = controller
        .map(|c| c.split('.').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    // The last segment is the type itself.
    base.pop();

    let mut relative: Vec<&str> = relative.split('/').collect();
    while relative.len() > 1 && relative[0] == ".." {
        relative.remove(0);
        base.pop();
    }
    let relative = relative.into_iter().filter(|s| !s.is_empty() && *s != ".");

    let segments: Vec<&str> = base.into_iter().chain(relative).collect();
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_segment_climbs_one_package() {
        assert_eq!(
            normalize_resource_path(Some("com.example.Main"), "@../images/a.png"),
            "/com/images/a.png"
        );
    }

    #[test]
    fn test_sibling_resource() {
        assert_eq!(
            normalize_resource_path(Some("com.example.Main"), "@style.css"),
            "/com/example/style.css"
        );
        assert_eq!(
            normalize_resource_path(Some("com.example.Main"), "@./img/logo.png"),
            "/com/example/img/logo.png"
        );
    }

    #[test]
    fn test_climbing_past_root_is_clamped() {
        assert_eq!(
            normalize_resource_path(Some("com.Main"), "@../../x.png"),
            "/x.png"
        );
    }

    #[test]
    fn test_without_controller() {
        assert_eq!(normalize_resource_path(None, "@icons/x.png"), "/icons/x.png");
    }
}
