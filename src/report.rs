//! Report events: one recorded unit of progress feedback.

use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::payload::Payload;

/// Status conventionally meaning success.
pub const STATUS_OK: i64 = 0;

/// Subject, status and optional auxiliary data of one finished step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEvent {
    pub object: Payload,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

impl ReportEvent {
    /// Report with status 0 and no data.
    pub fn new(object: Payload) -> Self {
        Self {
            object,
            status: STATUS_OK,
            data: None,
        }
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }

    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = Some(data);
        self
    }

    /// Build an event from serializable subject and data; both must serialize to mappings.
    pub fn from_serialize<O, D>(object: &O, status: i64, data: Option<&D>) -> Result<Self, UiError>
    where
        O: Serialize + ?Sized,
        D: Serialize + ?Sized,
    {
        let object = Payload::from_serialize(object)?;
        let data = data.map(Payload::from_serialize).transpose()?;
        Ok(Self {
            object,
            status,
            data,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}
