//! Direct media-host uploads
//!
//! Images (payment proofs, event banners) never pass through the backend.
//! The backend signs an upload ticket; the client then posts the file
//! straight to the media host with exactly the fields the ticket names and
//! hands the resulting public URL back to whoever needed it.

use std::path::Path;

use log::debug;

use crate::client::MarketplaceClient;
use crate::client::models::UploadedAsset;
use crate::error::{Error, Result};

/// Upload a local image file, returning its public URL and asset id.
///
/// One attempt only: if either the signing call or the media-host call is
/// rejected, the error is returned and the caller decides whether to rerun.
pub async fn upload_image(
    client: &MarketplaceClient,
    token: &str,
    folder: &str,
    path: &Path,
) -> Result<UploadedAsset> {
    let ticket = client.sign_upload(token, folder).await?;
    debug!(
        "Got upload ticket for folder {} (ts {})",
        ticket.folder, ticket.timestamp
    );

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| Error::Validation(format!("Not a file path: {}", path.display())))?;

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("api_key", ticket.api_key)
        .text("timestamp", ticket.timestamp.to_string())
        .text("signature", ticket.signature)
        .text("folder", ticket.folder);

    let asset: UploadedAsset = client.post_multipart_to(&ticket.upload_url, form).await?;
    debug!("Uploaded {} as {}", path.display(), asset.public_id);

    Ok(asset)
}
