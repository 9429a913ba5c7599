use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use validator::Validate;

use crate::errors::SdsResult;

use super::mask_secret;
use super::uri::SdsUri;

pub const DEFAULT_API_VERSION: &str = "v1";

/// Connection settings of one tenant namespace.
///
/// File keys follow the `appsettings.json` layout (`TenantId`,
/// `NamespaceId`, `Resource`, `ClientId`, `ClientKey`, `ApiVersion`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ClientSettings {
    #[validate(length(min = 1))]
    pub tenant_id: String,
    #[validate(length(min = 1))]
    pub namespace_id: String,
    /// Base URL of the service, e.g. `https://dat-b.osisoft.com`.
    #[validate(url)]
    pub resource: String,
    #[validate(length(min = 1))]
    pub client_id: String,
    #[validate(length(min = 1))]
    pub client_key: String,
    #[serde(default = "default_api_version")]
    #[validate(length(min = 1))]
    pub api_version: String,
    #[serde(default)]
    pub accept_verbosity: bool,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.into()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            namespace_id: String::new(),
            resource: String::new(),
            client_id: String::new(),
            client_key: String::new(),
            api_version: default_api_version(),
            accept_verbosity: false,
        }
    }
}

impl ClientSettings {
    /// Reads `path`, layers `overlay` on top when that file exists, then
    /// applies `SDS_*` environment overrides (`.env` included).
    pub fn load(path: &Path, overlay: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with(path, overlay, |key| std::env::var(key).ok())
    }

    /// Same as [`ClientSettings::load`], with overrides read from `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(path: &Path, overlay: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut value = read_json(path)?;

        if let Some(overlay) = overlay.filter(|p| p.exists()) {
            debug!("Applying settings overlay {}", overlay.display());
            merge_json(&mut value, read_json(overlay)?);
        }

        let mut settings: ClientSettings =
            serde_json::from_value(value).context("Failed to parse client settings")?;

        settings.apply_env(lookup);
        settings.check().context("Invalid client settings")?;

        info!(
            "Loaded client settings for tenant {} namespace {}",
            settings.tenant_id, settings.namespace_id
        );
        Ok(settings)
    }

    /// Builds settings from `SDS_*` environment variables (and `.env`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut settings = ClientSettings::default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings.check().context("Invalid client settings from environment")?;
        Ok(settings)
    }

    /// Overrides fields from `lookup`; blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get("SDS_TENANT_ID") {
            self.tenant_id = v;
        }
        if let Some(v) = get("SDS_NAMESPACE_ID") {
            self.namespace_id = v;
        }
        if let Some(v) = get("SDS_RESOURCE") {
            self.resource = v;
        }
        if let Some(v) = get("SDS_CLIENT_ID") {
            self.client_id = v;
        }
        if let Some(v) = get("SDS_CLIENT_KEY") {
            self.client_key = v;
        }
        if let Some(v) = get("SDS_API_VERSION") {
            self.api_version = v;
        }
        if let Some(v) = get("SDS_ACCEPT_VERBOSITY") {
            self.accept_verbosity = v.eq_ignore_ascii_case("true");
        }
    }

    pub fn check(&self) -> SdsResult<()> {
        self.validate()?;
        Ok(())
    }

    pub fn uri(&self) -> SdsUri {
        SdsUri::new(
            self.resource.as_str(),
            self.api_version.as_str(),
            self.tenant_id.as_str(),
            self.namespace_id.as_str(),
        )
    }

    /// Mask the client key for safe display (keeps last 4 chars).
    pub fn masked_client_key(&self) -> String {
        mask_secret(&self.client_key)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse settings file {}", path.display()))
}

/// Top-level keys of `overlay` replace those of `base`.
fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (k, v) in overlay {
                base.insert(k, v);
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const APPSETTINGS: &str = r#"{
        "TenantId": "tenant-1",
        "NamespaceId": "samples",
        "Resource": "https://dat-b.osisoft.com",
        "ClientId": "client",
        "ClientKey": "0123456789abcdef"
    }"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults_api_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "appsettings.json", APPSETTINGS);

        let settings = ClientSettings::load_with(&path, None, no_env).unwrap();
        assert_eq!(settings.tenant_id, "tenant-1");
        assert_eq!(settings.api_version, "v1");
        assert!(!settings.accept_verbosity);
        assert_eq!(
            settings.uri().namespace_base(),
            "https://dat-b.osisoft.com/api/v1/Tenants/tenant-1/Namespaces/samples"
        );
    }

    #[test]
    fn test_overlay_replaces_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "appsettings.json", APPSETTINGS);
        let overlay = write_file(
            &dir,
            "appsettings.test.json",
            r#"{ "NamespaceId": "test", "ApiVersion": "v2-preview" }"#,
        );

        let settings = ClientSettings::load_with(&path, Some(overlay.as_path()), no_env).unwrap();
        assert_eq!(settings.namespace_id, "test");
        assert_eq!(settings.api_version, "v2-preview");

        let missing = dir.path().join("absent.json");
        assert!(ClientSettings::load_with(&path, Some(missing.as_path()), no_env).is_ok());
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let bad_url = write_file(
            &dir,
            "bad.json",
            &APPSETTINGS.replace("https://dat-b.osisoft.com", "not a url"),
        );
        assert!(ClientSettings::load_with(&bad_url, None, no_env).is_err());

        let broken = write_file(&dir, "broken.json", "{ \"TenantId\": ");
        assert!(ClientSettings::load_with(&broken, None, no_env).is_err());

        assert!(ClientSettings::load_with(&dir.path().join("none.json"), None, no_env).is_err());
    }

    #[test]
    fn test_load_with_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "appsettings.json", APPSETTINGS);
        let overlay = write_file(&dir, "appsettings.test.json", r#"{ "NamespaceId": "test" }"#);

        let settings = ClientSettings::load_with(&path, Some(overlay.as_path()), |k| match k {
            "SDS_NAMESPACE_ID" => Some("from-env".into()),
            "SDS_API_VERSION" => Some("v2".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.namespace_id, "from-env");
        assert_eq!(settings.api_version, "v2");
        assert_eq!(settings.tenant_id, "tenant-1");

        let bad = ClientSettings::load_with(&path, None, |k| {
            (k == "SDS_RESOURCE").then(|| "not a url".to_string())
        });
        assert!(bad.is_err());
    }

    #[test]
    fn test_apply_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SDS_TENANT_ID", "from-env"),
            ("SDS_NAMESPACE_ID", "   "),
            ("SDS_ACCEPT_VERBOSITY", "TRUE"),
        ]
        .into_iter()
        .collect();

        let mut settings: ClientSettings = serde_json::from_str(APPSETTINGS).unwrap();
        settings.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.tenant_id, "from-env");
        assert_eq!(settings.namespace_id, "samples");
        assert!(settings.accept_verbosity);
    }

    #[test]
    fn test_check_reports_config_error() {
        let err = ClientSettings::default().check().unwrap_err();
        assert!(matches!(err, crate::errors::SdsError::Config(_)));
    }

    #[test]
    fn test_masked_client_key() {
        let settings: ClientSettings = serde_json::from_str(APPSETTINGS).unwrap();
        assert_eq!(settings.masked_client_key(), "***cdef");
    }
}
