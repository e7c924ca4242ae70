use serde::{Deserialize, Serialize};

use crate::consts::consts::RecordId;

/// A stored record, the `id` is always assigned by the store
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub email: String,
    pub id: RecordId,
}

/// Payload accepted when creating a record.
///
/// Unknown fields are ignored, which includes any `id` the client sends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecordInput {
    pub name: String,
    pub email: String,
}

impl RecordInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        RecordInput {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            name: self.name,
            email: self.email,
            id,
        }
    }

    pub fn new_test() -> Self {
        RecordInput::new("Full Name", "name@example.com")
    }
}
