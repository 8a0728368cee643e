//! Static file serving service
//!
//! Serves stylesheets, the session script and enterprise logos with content
//! types and cache headers picked from the file extension.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{ComponentId, component_debug, component_warn};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Real static file server implementation
#[derive(Clone)]
pub struct RealStaticFileServer {
    /// Base directory for static files
    base_dir: PathBuf,

    /// MIME type mappings
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealStaticFileServer {
    /// Create new static file server
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let mime_types = HashMap::from([
            ("html", "text/html; charset=utf-8"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
        ]);

        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mime_types,
        }
    }

    fn extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Get MIME type from file extension
    fn mime_type(&self, path: &str) -> String {
        Self::extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or(FALLBACK_MIME)
            .to_string()
    }

    /// Get cache control header based on file type
    fn cache_control(path: &str) -> Option<String> {
        let max_age = match Self::extension(path)?.as_str() {
            "html" => return Some("no-cache".to_string()),
            "js" | "css" => 3600,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" => 86400,
            "woff" | "woff2" => 604800,
            _ => return None,
        };
        Some(format!("public, max-age={max_age}"))
    }

    /// Resolve file path and prevent directory traversal
    fn resolve_path(&self, request_path: &str) -> WebServerResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        if clean_path.is_empty() {
            return Err(WebServerError::http("Directory listing not allowed"));
        }

        let canonical_path = self
            .base_dir
            .join(clean_path)
            .canonicalize()
            .map_err(|_| WebServerError::http(format!("File not found: {request_path}")))?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            component_warn!(ComponentId::WebServer, "Static base directory not accessible: {}", e);
            WebServerError::internal("Static file base directory not accessible")
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(WebServerError::http("Access denied"));
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        let file_path = self.resolve_path(path)?;
        if file_path.is_dir() {
            return Err(WebServerError::http("Directory listing not allowed"));
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                component_debug!(ComponentId::WebServer, "📄 Served static file: {} ({} bytes)", path, content.len());

                let mut response = StaticFileResponse::new(content, self.mime_type(path));
                if let Some(cache) = Self::cache_control(path) {
                    response = response.with_cache_control(cache);
                }
                Ok(response)
            }
            Err(e) => {
                component_warn!(ComponentId::WebServer, "❌ Failed to read static file {}: {}", path, e);
                Err(WebServerError::http(format!("File not found: {path}")))
            }
        }
    }
}
