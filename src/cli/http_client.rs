use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Adds a scheme when missing: http:// for local hosts, https:// otherwise.
#[must_use]
pub fn normalize_server_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');

    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
        format!("http://{}", url)
    } else {
        format!("https://{}", url)
    }
}

impl ApiClient {
    pub fn new(server_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        if server_url.trim().is_empty() {
            anyhow::bail!("Server URL cannot be empty");
        }
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: normalize_server_url(server_url),
            token,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(self.client.get(&url)).send()?;
        self.handle_response(resp)
    }

    pub fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(self.client.get(&url).query(query)).send()?;
        self.handle_response(resp)
    }

    pub fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(self.client.post(&url)).json(body).send()?;
        self.handle_response(resp)
    }

    pub fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(self.client.put(&url)).json(body).send()?;
        self.handle_response(resp)
    }

    pub fn delete(&self, path: &str) -> anyhow::Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(self.client.delete(&url)).send()?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(resp))
        }
    }

    fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::blocking::Response,
    ) -> anyhow::Result<T> {
        if resp.status().is_success() {
            let api_resp: ApiResponse<T> = resp.json()?;
            api_resp
                .data
                .ok_or_else(|| anyhow::anyhow!("Server returned an empty response"))
        } else {
            Err(Self::error_from(resp))
        }
    }

    fn error_from(resp: reqwest::blocking::Response) -> anyhow::Error {
        let status = resp.status();
        match resp.json::<ApiResponse<()>>() {
            Ok(ApiResponse {
                error: Some(message),
                ..
            }) => anyhow::anyhow!("{message} ({})", status.as_u16()),
            _ => anyhow::anyhow!("Server error {} (no details provided)", status.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_server_url() {
        assert_eq!(normalize_server_url("localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_server_url("127.0.0.1:3000"), "http://127.0.0.1:3000");
        assert_eq!(normalize_server_url("missions.example.com"), "https://missions.example.com");
        assert_eq!(normalize_server_url(" http://host:1 "), "http://host:1");
    }

    #[test]
    fn test_empty_server_url_rejected() {
        assert!(ApiClient::new("  ", None).is_err());
    }
}
