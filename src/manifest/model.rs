use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serialized with the camelCase keys the edge and rendering handlers read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub pages: Pages,
    #[serde(default)]
    pub public_files: IndexMap<String, String>,
    #[serde(default)]
    pub cloud_front_origins: CloudFrontOrigins,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pages {
    pub ssr: SsrPages,
    #[serde(default)]
    pub html: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrPages {
    /// Keyed by positional-parameter path; order is resolution order.
    #[serde(default)]
    pub dynamic: IndexMap<String, DynamicPage>,
    #[serde(default)]
    pub non_dynamic: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicPage {
    pub file: String,
    pub regex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudFrontOrigins {
    #[serde(default)]
    pub ssr_api: OriginDomain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_origin: Option<OriginDomain>,
}

impl CloudFrontOrigins {
    pub fn is_provisioned(&self) -> bool {
        self.ssr_api.domain_name.is_some() && self.static_origin.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

impl OriginDomain {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: Some(domain_name.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
    Html,
    NonDynamic,
    Dynamic,
}

impl BuildManifest {
    pub fn route_count(&self) -> usize {
        self.pages.html.len() + self.pages.ssr.non_dynamic.len() + self.pages.ssr.dynamic.len()
    }

    pub fn route_kind(&self, key: &str) -> Option<RouteKind> {
        if self.pages.html.contains_key(key) {
            Some(RouteKind::Html)
        } else if self.pages.ssr.non_dynamic.contains_key(key) {
            Some(RouteKind::NonDynamic)
        } else if self.pages.ssr.dynamic.contains_key(key) {
            Some(RouteKind::Dynamic)
        } else {
            None
        }
    }

    pub fn set_origins(
        &mut self,
        ssr_api_host: impl Into<String>,
        static_host: impl Into<String>,
    ) {
        self.cloud_front_origins = CloudFrontOrigins {
            ssr_api: OriginDomain::new(ssr_api_host),
            static_origin: Some(OriginDomain::new(static_host)),
        };
    }
}
