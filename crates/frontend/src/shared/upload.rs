//! Image hosting: files go to imgbb, forms keep only the returned URLs.

use super::config::use_config;
use super::error::UploadError;
use async_trait::async_trait;
use futures::future::join_all;
use gloo_net::http::Request;
use serde::Deserialize;

pub const IMGBB_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

#[async_trait(?Send)]
pub trait ImageHost {
    type File;

    /// Uploads one file and returns its public URL.
    async fn upload(&self, file: &Self::File) -> Result<String, UploadError>;
}

/// Uploads every file concurrently. Any single failure fails the batch and
/// no partial URL list is returned.
pub async fn upload_all<H: ImageHost + ?Sized>(
    host: &H,
    files: &[H::File],
) -> Result<Vec<String>, UploadError> {
    let results = join_all(files.iter().map(|file| host.upload(file))).await;
    let total = results.len();
    let mut urls = Vec::with_capacity(total);
    let mut failed = 0;
    for result in results {
        match result {
            Ok(url) => urls.push(url),
            Err(UploadError::MissingApiKey) => return Err(UploadError::MissingApiKey),
            Err(e) => {
                log::warn!("image upload failed: {}", e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(UploadError::Batch { failed, total });
    }
    Ok(urls)
}

/// Uploads `file` when one is picked, otherwise keeps `current`.
pub async fn upload_or_keep<H: ImageHost + ?Sized>(
    host: &H,
    file: Option<&H::File>,
    current: &str,
) -> Result<String, UploadError> {
    match file {
        Some(file) => host.upload(file).await,
        None => Ok(current.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    #[serde(default)]
    success: bool,
    data: Option<ImgbbData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImgbbHost {
    api_key: Option<String>,
}

impl ImgbbHost {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait(?Send)]
impl ImageHost for ImgbbHost {
    type File = web_sys::File;

    async fn upload(&self, file: &web_sys::File) -> Result<String, UploadError> {
        let key = self.api_key.as_deref().ok_or(UploadError::MissingApiKey)?;
        let name = file.name();
        let network = |reason: String| UploadError::Network {
            file: name.clone(),
            reason,
        };

        let form = web_sys::FormData::new().map_err(|e| network(format!("{:?}", e)))?;
        form.append_with_blob("image", file)
            .map_err(|e| network(format!("{:?}", e)))?;

        let url = format!("{}?key={}", IMGBB_UPLOAD_URL, urlencoding::encode(key));
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| network(e.to_string()))?
            .send()
            .await
            .map_err(|e| network(e.to_string()))?;
        if !response.ok() {
            return Err(UploadError::Rejected { file: name });
        }
        let body: ImgbbResponse = response
            .json()
            .await
            .map_err(|e| network(e.to_string()))?;
        match body {
            ImgbbResponse {
                success: true,
                data: Some(data),
            } => Ok(data.url),
            _ => Err(UploadError::Rejected { file: name }),
        }
    }
}

pub fn use_image_host() -> ImgbbHost {
    ImgbbHost::new(use_config().imgbb_api_key)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Host that fails for file names listed in `failing`.
    pub(crate) struct FakeHost {
        pub failing: Vec<&'static str>,
        pub uploaded: RefCell<Vec<&'static str>>,
    }

    impl FakeHost {
        pub(crate) fn failing(names: &[&'static str]) -> Self {
            Self {
                failing: names.to_vec(),
                uploaded: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ImageHost for FakeHost {
        type File = &'static str;

        async fn upload(&self, file: &&'static str) -> Result<String, UploadError> {
            if self.failing.contains(file) {
                return Err(UploadError::Rejected {
                    file: file.to_string(),
                });
            }
            self.uploaded.borrow_mut().push(file);
            Ok(format!("https://i.ibb.co/{}", file))
        }
    }

    #[test]
    fn test_upload_all_keeps_order() {
        let host = FakeHost::failing(&[]);
        let urls = block_on(upload_all(&host, &["a.png", "b.png", "c.png"])).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://i.ibb.co/a.png",
                "https://i.ibb.co/b.png",
                "https://i.ibb.co/c.png"
            ]
        );
    }

    #[test]
    fn test_one_failure_fails_the_batch() {
        let host = FakeHost::failing(&["b.png"]);
        let result = block_on(upload_all(&host, &["a.png", "b.png", "c.png"]));
        assert_eq!(result, Err(UploadError::Batch { failed: 1, total: 3 }));
    }

    #[test]
    fn test_empty_batch() {
        let host = FakeHost::failing(&[]);
        assert_eq!(block_on(upload_all(&host, &[])), Ok(vec![]));
    }

    #[test]
    fn test_upload_or_keep() {
        let host = FakeHost::failing(&[]);
        assert_eq!(
            block_on(upload_or_keep(&host, None, "https://old.png")).unwrap(),
            "https://old.png"
        );
        assert_eq!(
            block_on(upload_or_keep(&host, Some(&"new.png"), "https://old.png")).unwrap(),
            "https://i.ibb.co/new.png"
        );
    }
}
