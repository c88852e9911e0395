use crate::prelude::{AppError, Contact};

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Where a default contact list comes from when nothing is stored locally.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, AppError>;

    fn describe(&self) -> String;
}

/// Reads a JSON array of contacts with a single GET request.
pub struct HttpContactSource {
    pub url: Url,
    client: Client,
}

impl HttpContactSource {
    pub fn new(url: &str) -> Result<Self, AppError> {
        Ok(Self {
            url: Url::parse(url)?,
            client: Client::new(),
        })
    }
}

#[async_trait]
impl RemoteSource for HttpContactSource {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let contacts: Vec<Contact> = serde_json::from_str(&body)?;
        Ok(contacts)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
