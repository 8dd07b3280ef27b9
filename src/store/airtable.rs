use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RecordStore;
use crate::error::StoreError;
use crate::model::{ConfigFields, StoredRecord};

/// Airtable REST client for a single table.
#[derive(Debug, Clone)]
pub struct AirtableStore {
    client: Client,
    table_url: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize)]
struct NewRecord {
    fields: ConfigFields,
}

#[derive(Debug, Serialize)]
struct RecordPatch<'a> {
    id: &'a str,
    fields: ConfigFields,
}

#[derive(Debug, Serialize)]
struct Batch<T> {
    records: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Airtable reports errors either as a bare type string or as an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Code(String),
    Object {
        #[serde(rename = "type")]
        kind: Option<String>,
        message: Option<String>,
    },
}

impl ErrorDetail {
    fn into_message(self) -> String {
        match self {
            Self::Code(code) => code,
            Self::Object { kind, message } => message.or(kind).unwrap_or_default(),
        }
    }
}

impl AirtableStore {
    /// Builds a client for `{endpoint}/{base_id}/{table}`.
    ///
    /// The table name is percent-encoded as a single path segment.
    pub fn new(
        endpoint: &str,
        base_id: &str,
        table: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let mut table_url = Url::parse(endpoint)
            .map_err(|e| StoreError::Malformed(format!("invalid store endpoint: {}", e)))?;
        table_url
            .path_segments_mut()
            .map_err(|_| StoreError::Malformed("store endpoint cannot be a base".to_string()))?
            .pop_if_empty()
            .push(base_id)
            .push(table);

        Ok(Self {
            client: Client::new(),
            table_url,
            api_key: api_key.into(),
        })
    }

    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    async fn records(response: Response) -> Result<Vec<StoredRecord>, StoreError> {
        let response = Self::check(response).await?;
        let list: RecordList = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(list.records)
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error.into_message())
            .unwrap_or(body);
        Err(StoreError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RecordStore for AirtableStore {
    async fn find_singleton(&self) -> Result<Option<StoredRecord>, StoreError> {
        debug!("Listing first record of {}", self.table_url);
        let mut url = self.table_url.clone();
        url.query_pairs_mut().append_pair("maxRecords", "1");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(Self::records(response).await?.into_iter().next())
    }

    async fn create(&self, fields: ConfigFields) -> Result<StoredRecord, StoreError> {
        let response = self
            .client
            .post(self.table_url.clone())
            .bearer_auth(&self.api_key)
            .json(&Batch {
                records: vec![NewRecord { fields }],
            })
            .send()
            .await?;
        Self::records(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Malformed("create returned no records".to_string()))
    }

    async fn update_fields(&self, id: &str, fields: ConfigFields) -> Result<(), StoreError> {
        debug!("Patching record {}", id);
        let response = self
            .client
            .patch(self.table_url.clone())
            .bearer_auth(&self.api_key)
            .json(&Batch {
                records: vec![RecordPatch { id, fields }],
            })
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }
}
