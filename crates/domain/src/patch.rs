//! Partial-update documents
//!
//! The API accepts an ordered list of JSON-Patch style operations. The
//! client only ever emits `replace` on scalar header fields; nested
//! sections are always sent as a full replace of the entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ordering::OrderChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
}

/// One `{op, path, value}` operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: Value,
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: value.into(),
        }
    }

    /// `replace /order` with the given position
    pub fn set_order(order: u32) -> Self {
        Self::replace("/order", order)
    }
}

impl<Id> From<&OrderChange<Id>> for PatchOperation {
    fn from(change: &OrderChange<Id>) -> Self {
        Self::set_order(change.order)
    }
}
