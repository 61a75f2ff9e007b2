//! Function descriptor: the declared contract of the `run` operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::CALLBACK_ID;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub callback_id: String,
    pub title: String,
    pub description: String,
    pub operations: Vec<OperationDescriptor>,
    pub input_schema: SchemaIr,
    pub output_schema: SchemaIr,
    pub schema_hash: String,
}

/// Closed schema IR for the declared input/output shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaIr {
    String {
        title: String,
        description: String,
        format: Option<String>,
    },
    RichText {
        title: String,
        description: String,
    },
    Object {
        title: String,
        description: String,
        fields: BTreeMap<String, SchemaField>,
        additional_properties: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaField {
    pub required: bool,
    pub schema: SchemaIr,
}

pub fn build_describe_payload() -> FunctionDescriptor {
    let input_schema = input_schema();
    let output_schema = output_schema();

    FunctionDescriptor {
        callback_id: CALLBACK_ID.to_string(),
        title: "Outgoing Webhook".to_string(),
        description: "Render a rich text message to mrkdwn and POST it to a webhook".to_string(),
        operations: vec![OperationDescriptor {
            name: "run".to_string(),
            title: "Run".to_string(),
            description: "Dispatch the rendered message to the webhook URL".to_string(),
        }],
        schema_hash: schema_hash(&input_schema, &output_schema),
        input_schema,
        output_schema,
    }
}

fn input_schema() -> SchemaIr {
    let mut fields = BTreeMap::new();
    fields.insert(
        "webhook".to_string(),
        SchemaField {
            required: true,
            schema: SchemaIr::String {
                title: "Webhook".to_string(),
                description: "The url of the webhook you want to trigger".to_string(),
                format: Some("url".to_string()),
            },
        },
    );
    fields.insert(
        "message".to_string(),
        SchemaField {
            required: true,
            schema: SchemaIr::RichText {
                title: "Message".to_string(),
                description: "The content payload to be sent with the webhook".to_string(),
            },
        },
    );
    SchemaIr::Object {
        title: "Inputs".to_string(),
        description: "Outgoing webhook inputs".to_string(),
        fields,
        additional_properties: false,
    }
}

fn output_schema() -> SchemaIr {
    let mut fields = BTreeMap::new();
    fields.insert(
        "response".to_string(),
        SchemaField {
            required: true,
            schema: SchemaIr::String {
                title: "Response".to_string(),
                description: "The webhook response".to_string(),
                format: None,
            },
        },
    );
    SchemaIr::Object {
        title: "Outputs".to_string(),
        description: "Outgoing webhook outputs".to_string(),
        fields,
        additional_properties: false,
    }
}

pub fn schema_hash(input: &SchemaIr, output: &SchemaIr) -> String {
    let value = serde_json::json!({
        "input": input,
        "output": output,
    });
    // BTreeMap fields and declaration-ordered structs make this byte-stable.
    let bytes = serde_json::to_vec(&value).unwrap_or_default();
    sha256_hex(&bytes)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
