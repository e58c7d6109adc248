//! Configuration for the frontend application

/// Site name shown in the navbar, footer and document title.
pub const APP_NAME: &str = "StremioLabAR";

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/stremiolabar/"
#[cfg(not(feature = "pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "pages")]
pub const BASE_URL: &str = "/stremiolabar/";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_joins_onto_base() {
        assert_eq!(asset_path("images/logoS.jpg"), format!("{BASE_URL}images/logoS.jpg"));
        assert_eq!(asset_path("/images/logoS.jpg"), asset_path("images/logoS.jpg"));
    }
}
