use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{SheetPush, SheetsError};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";
const MAX_RETRIES: usize = 3;
const RETRY_DELAYS: [u64; 4] = [0, 1, 2, 4];

/// Client for the Google Sheets v4 values API.
///
/// Takes a ready bearer token; minting one from service-account
/// credentials is the deployment's concern, not this adapter's.
pub struct SheetsClient {
    client: reqwest::Client,
    token: String,
    spreadsheet_id: String,
    base_url: String,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("token", &"***")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_rows: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<serde_json::Value>>>,
}

impl SheetsClient {
    /// Creates a client against the production Sheets endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built, or if
    /// `spreadsheet_id` is empty.
    pub fn new(token: String, spreadsheet_id: String) -> Result<Self, SheetsError> {
        Self::with_base_url(token, spreadsheet_id, DEFAULT_BASE_URL.to_owned())
    }

    /// Creates a client against a custom endpoint (tests, proxies).
    pub fn with_base_url(
        token: String,
        spreadsheet_id: String,
        base_url: String,
    ) -> Result<Self, SheetsError> {
        if spreadsheet_id.trim().is_empty() {
            return Err(SheetsError::ClientInit("spreadsheet id is not configured".to_owned()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SheetsError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            token,
            spreadsheet_id,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn values_url(&self, range: &str, verb: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.base_url, self.spreadsheet_id, range, verb
        )
    }

    async fn check(&self, response: reqwest::Response) -> Result<String, SheetsError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(SheetsError::HttpStatus { code: status.as_u16(), body })
        }
    }

    /// Writes `headers` into row 1 if the sheet's first cell is empty.
    async fn setup_headers(&self, sheet: &str, headers: &[&str]) -> Result<(), SheetsError> {
        let url = self.values_url(&format!("{sheet}!A1:A1"), "");
        let body = self
            .check(self.client.get(&url).bearer_auth(&self.token).send().await?)
            .await?;
        let range: ValueRange = serde_json::from_str(&body).map_err(|source| {
            SheetsError::JsonParse { context: "header probe".to_owned(), source }
        })?;
        if range.values.is_some_and(|v| !v.is_empty()) {
            return Ok(());
        }

        let url = format!(
            "{}?valueInputOption=RAW",
            self.values_url(&format!("{sheet}!A1"), "")
        );
        self.check(
            self.client
                .put(&url)
                .bearer_auth(&self.token)
                .json(&json!({ "values": [headers] }))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    async fn append_once(
        &self,
        sheet: &str,
        rows: &[Vec<String>],
    ) -> Result<usize, SheetsError> {
        let url = format!(
            "{}?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
            self.values_url(&format!("{sheet}!A1"), ":append")
        );
        let body = self
            .check(
                self.client
                    .post(&url)
                    .bearer_auth(&self.token)
                    .json(&json!({ "values": rows }))
                    .send()
                    .await?,
            )
            .await?;
        let parsed: AppendResponse = serde_json::from_str(&body).map_err(|source| {
            SheetsError::JsonParse { context: "append response".to_owned(), source }
        })?;
        parsed
            .updates
            .and_then(|u| u.updated_rows)
            .ok_or_else(|| SheetsError::MissingField("updates.updatedRows".to_owned()))
    }
}

#[async_trait]
impl SheetPush for SheetsClient {
    async fn push(
        &self,
        sheet: &str,
        headers: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Result<usize, SheetsError> {
        if rows.is_empty() {
            return Ok(0);
        }
        self.setup_headers(sheet, headers).await?;

        let mut last_error: Option<SheetsError> = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let delay_secs = RETRY_DELAYS.get(attempt).copied().unwrap_or(4);
                tokio::time::sleep(std::time::Duration::from_secs(delay_secs)).await;
                tracing::warn!("Sheets append retry attempt {attempt}/{MAX_RETRIES}");
            }
            match self.append_once(sheet, &rows).await {
                Ok(count) => return Ok(count),
                Err(e) if e.is_transient() => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(SheetsError::RetriesExhausted(Box::new(
            last_error.unwrap_or(SheetsError::MissingField("response".to_owned())),
        )))
    }
}
