//! Media upload models

use serde::{Deserialize, Serialize};

/// Signed upload ticket from `POST /uploads/sign`.
///
/// The backend resolves the folder and signs the request; the client then
/// posts the file straight to the media host using exactly these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    /// Media host API key
    pub api_key: String,

    /// Unix timestamp the signature covers
    pub timestamp: i64,

    /// Request signature
    pub signature: String,

    /// Resolved destination folder
    pub folder: String,

    /// Media-host upload endpoint to POST the form to
    pub upload_url: String,
}

/// Result of a direct media-host upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Public, CDN-backed URL
    pub secure_url: String,

    /// Opaque asset identifier on the media host
    pub public_id: String,
}

/// Request body for the signing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SignUploadRequest {
    /// Folder hint; the backend may rewrite it
    pub folder: String,
}
