use crate::document::charset::decode_body;
use crate::document::error::FetchError;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Issues the single GET behind every page the crate reads.
pub struct DocumentLoader {
    download_client: Client,
}

impl DocumentLoader {
    pub fn new(
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<DocumentLoader, reqwest::Error> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(DocumentLoader {
            download_client: builder.build()?,
        })
    }

    /// Fetches `url` and returns the decoded HTML body.
    ///
    /// Anything but a `200 OK` is an error. The body is decoded with the charset
    /// from the `Content-Type` header, else the one declared in the page, else
    /// Latin-1.
    pub async fn fetch(&self, url: Url) -> Result<String, FetchError> {
        let url_text = url.to_string();
        info!("Requesting {}", url_text);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url_text.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url_text, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url_text,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url_text, e)
                });
            }
        };

        if response.status() != StatusCode::OK {
            warn!("Unexpected status {} for {}", response.status(), url_text);
            return Err(FetchError::UnexpectedStatus {
                url: url_text,
                status: response.status(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyRead(url_text.clone(), e))?;
        debug!("Received {} bytes from {}", bytes.len(), url_text);
        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}
