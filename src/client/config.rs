/// Base URL of the external API, compiled in and overridable at build time
/// with `REVENTO_API_BASE`.
const DEFAULT_API_BASE: &str = "http://localhost/revento-backend/";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("REVENTO_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
        }
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of an uploaded event photo.
    pub fn upload_url(&self, photo: &str) -> String {
        self.endpoint(&format!("uploads/{photo}"))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    /// Joins endpoint paths without doubling slashes.
    #[test]
    fn endpoint_join_normalizes_slashes() {
        let config = ApiConfig {
            base_url: "http://localhost/revento-backend/".to_string(),
        };
        assert_eq!(
            config.endpoint("/routes/events/get_events.php"),
            "http://localhost/revento-backend/routes/events/get_events.php"
        );
        assert_eq!(
            config.upload_url("photo.jpg"),
            "http://localhost/revento-backend/uploads/photo.jpg"
        );
    }
}
