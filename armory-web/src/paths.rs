//! URL helpers for static assets and remote item imagery.

const IMAGE_HOST: &str = "https://www.bungie.net";

/// Prefix a static asset with the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/armory` for GitHub Pages),
/// generated URLs are prefixed accordingly.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, or `None` to serve from root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Absolute URL for an icon path from the item manifest.
///
/// Paths that are already absolute URLs pass through untouched.
#[must_use]
pub fn item_image(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{IMAGE_HOST}/{}", path.trim_start_matches('/'))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
