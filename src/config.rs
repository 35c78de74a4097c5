pub const LOGIN_ROUTE: &str = "/marvin/login";
pub const DOWNLOAD_FILES_ROUTE: &str = "/marvin/downloadFiles";

/// Where the Marvin routes are served from.
/// Given by the page when it creates the app, previously the `$SCRIPT_ROOT` global.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    script_root: String,
}

impl AppConfig {
    pub fn new(script_root: &str) -> Self {
        Self {
            script_root: script_root.trim_end_matches('/').to_owned(),
        }
    }

    pub fn script_root(&self) -> &str {
        &self.script_root
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{route}", self.script_root)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, DOWNLOAD_FILES_ROUTE, LOGIN_ROUTE};

    #[test]
    fn should_build_url_from_root() {
        let config = AppConfig::new("https://sas.sdss.org/marvin2");
        assert_eq!(
            "https://sas.sdss.org/marvin2/marvin/login",
            config.url(LOGIN_ROUTE)
        );
    }

    #[test]
    fn should_trim_trailing_slash() {
        let config = AppConfig::new("/marvin2/");
        assert_eq!("/marvin2", config.script_root());
        assert_eq!("/marvin2/marvin/downloadFiles", config.url(DOWNLOAD_FILES_ROUTE));
    }

    #[test]
    fn should_build_relative_url_with_empty_root() {
        let config = AppConfig::new("");
        assert_eq!("/marvin/login", config.url(LOGIN_ROUTE));
    }
}
