//! File uploads and promotional banners. Both use multipart bodies.

use dinedesk_api_models::{Banner, UploadedFile};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, FilePart, MultipartPayload, Payload, segment};

/// Fields of the banner creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerUpload {
    /// Headline shown on the banner.
    pub title: String,
    /// Optional sub-heading.
    pub description: Option<String>,
    /// Link followed when the banner is tapped.
    pub redirect_url: Option<String>,
    /// Banner artwork.
    pub image: FilePart,
}

impl BannerUpload {
    fn into_multipart(self) -> MultipartPayload {
        MultipartPayload::new()
            .text("title", self.title)
            .text_opt("description", self.description)
            .text_opt("redirect_url", self.redirect_url)
            .file("image", self.image)
    }
}

impl ApiClient {
    /// Upload a file and return the public URL the backend assigned.
    pub async fn upload_file(&self, file: FilePart) -> ApiResult<UploadedFile> {
        self.send(
            Endpoint::put("/upload", "upload file"),
            Payload::Multipart(MultipartPayload::new().file("file", file)),
        )
        .await
    }

    /// Create a banner from its form fields.
    pub async fn create_banner(&self, banner: BannerUpload) -> ApiResult<Banner> {
        self.send(
            Endpoint::post("/banner/create", "create banner"),
            Payload::Multipart(banner.into_multipart()),
        )
        .await
    }

    /// Every banner.
    pub async fn get_banners(&self) -> ApiResult<Vec<Banner>> {
        self.send(Endpoint::get("/banner", "get banners"), Payload::Empty)
            .await
    }

    /// Delete a banner.
    pub async fn delete_banner(&self, banner_id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(format!("/banner/{}", segment(banner_id)), "delete banner"),
            Payload::Empty,
        )
        .await
    }
}
