//! Configuration record and request/response payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::avatar;
use crate::error::ApiError;
use crate::prizes;

/// Model name written when the store holds no configuration record yet.
pub const DEFAULT_MODEL_NAME: &str = "Nombre por Defecto";
/// Prize column written when the store holds no configuration record yet.
pub const DEFAULT_PRIZES: &str = "Premio A, Premio B, Premio C";

/// Columns of the configuration table.
///
/// Every column is optional: the store omits empty columns when reading, and
/// updates only carry the columns being changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFields {
    #[serde(rename = "Nombre Modelo", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(rename = "avatarURL", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(rename = "Premios", default, skip_serializing_if = "Option::is_none")]
    pub prizes: Option<String>,
}

impl ConfigFields {
    /// Seed values for a freshly created configuration record.
    pub fn defaults() -> Self {
        Self {
            model_name: Some(DEFAULT_MODEL_NAME.to_string()),
            avatar: Some(String::new()),
            prizes: Some(DEFAULT_PRIZES.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.model_name.is_none() && self.avatar.is_none() && self.prizes.is_none()
    }
}

/// A configuration record as held by the store. The id is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(default)]
    pub fields: ConfigFields,
}

/// Body of `GET` on the config endpoint, under `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigView {
    #[serde(rename = "nombreModelo")]
    pub model_name: String,
    #[serde(rename = "avatarURL")]
    pub avatar: String,
    #[serde(rename = "premios")]
    pub prizes: Vec<String>,
}

impl From<&ConfigFields> for ConfigView {
    fn from(fields: &ConfigFields) -> Self {
        Self {
            model_name: fields.model_name.clone().unwrap_or_default(),
            avatar: fields.avatar.clone().unwrap_or_default(),
            prizes: prizes::from_column(fields.prizes.as_deref()),
        }
    }
}

/// Body of `POST` on the config endpoint.
///
/// `None` means the key was not sent at all. For the name and prize list the
/// inner `Option` tracks an explicit `null`; the avatar is kept raw so any
/// falsy value can clear it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdate {
    #[serde(rename = "nuevoNombreModelo", default, deserialize_with = "present")]
    pub model_name: Option<Option<String>>,
    #[serde(rename = "nuevaAvatarURL", default, deserialize_with = "raw")]
    pub avatar: Option<Value>,
    #[serde(rename = "nuevaListaPremios", default, deserialize_with = "present")]
    pub prizes: Option<Option<Vec<String>>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn raw<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JavaScript truthiness of a JSON value: `null`, `false`, `0` and `""` are
/// falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ConfigUpdate {
    /// Builds the partial column map for this update, validating the avatar.
    ///
    /// Keys sent as `null` clear their column, as does any falsy avatar. A
    /// truthy avatar that is not a string cannot be checked and fails the
    /// request as a server error.
    pub fn into_fields(self) -> Result<ConfigFields, ApiError> {
        let avatar = match self.avatar {
            Some(value) if !is_truthy(&value) => Some(String::new()),
            Some(Value::String(value)) => {
                avatar::validate(&value)?;
                Some(value)
            }
            Some(_) => {
                return Err(ApiError::Internal(
                    "nuevaAvatarURL is not a string".to_string(),
                ));
            }
            None => None,
        };

        Ok(ConfigFields {
            model_name: self.model_name.map(Option::unwrap_or_default),
            avatar,
            prizes: self
                .prizes
                .map(|list| prizes::to_column(&list.unwrap_or_default())),
        })
    }
}

/// Body of `POST` on the login endpoint.
///
/// Values are kept raw: presence is judged by truthiness, and only a string
/// username can ever match the configured one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}
