use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STATIC_EXTENSION: &str = ".html";
pub const DEFAULT_NOT_FOUND_ROUTES: [&str; 2] = ["/404", "/_error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    #[default]
    SpecificFirst,
    DefinedFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    pub match_order: MatchOrder,
    pub static_extension: String,
    pub strict_trailing_slash: bool,
    pub decode_params: bool,
    pub not_found_routes: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            match_order: MatchOrder::default(),
            static_extension: DEFAULT_STATIC_EXTENSION.to_string(),
            strict_trailing_slash: false,
            decode_params: true,
            not_found_routes: DEFAULT_NOT_FOUND_ROUTES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        let ext = self.static_extension.as_str();
        if ext.len() < 2 || !ext.starts_with('.') || ext.contains('/') {
            return Err(RouterConfigError::InvalidStaticExtension {
                value: self.static_extension.clone(),
            });
        }
        if let Some(route) = self
            .not_found_routes
            .iter()
            .find(|route| !route.starts_with('/'))
        {
            return Err(RouterConfigError::InvalidNotFoundRoute {
                route: route.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn match_order(mut self, value: MatchOrder) -> Self {
        self.config.match_order = value;
        self
    }

    pub fn static_extension<S: Into<String>>(mut self, value: S) -> Self {
        self.config.static_extension = value.into();
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.config.strict_trailing_slash = value;
        self
    }

    pub fn decode_params(mut self, value: bool) -> Self {
        self.config.decode_params = value;
        self
    }

    pub fn not_found_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.not_found_routes = routes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("static extension '{value}' must look like '.html'")]
    InvalidStaticExtension { value: String },
    #[error("not-found route '{route}' must start with '/'")]
    InvalidNotFoundRoute { route: String },
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
