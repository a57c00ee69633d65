//! Testing utilities for the KuFlow document workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use std::sync::Once;

use kuflow_reference::{FileReference, PrincipalReference, ReferenceKind};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process
///
/// Honors `RUST_LOG`, defaulting to `debug` for the workspace crates.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kuflow_document=debug,kuflow_reference=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn sample_file() -> FileReference {
    FileReference::new(
        "ku:dms/e9b0c0a1-0f0b-4a49-9d4a-77c3d1f6c2a1/file/7a1b6c49-5d26-4a8f-8f3d-1b5f0a8e2c44",
        "application/pdf",
        "dummy.pdf",
        500,
    )
    .with_original_name("dummy original.pdf")
}

pub fn sample_file_without_original_name() -> FileReference {
    FileReference::new(
        "ku:dms/e9b0c0a1-0f0b-4a49-9d4a-77c3d1f6c2a1/file/c2d3e4f5-0000-4b11-9c22-aa33bb44cc55",
        "text/plain",
        "notes & ideas.txt",
        1000,
    )
}

pub fn sample_principal() -> PrincipalReference {
    PrincipalReference::new("d9729dc3-10ee-4ed9-9839-c9e0a4e0f0d2", "USER", "Homer Simpson")
}

pub fn sample_principal_user() -> PrincipalReference {
    PrincipalReference::new("5f3c1d8e-6a2b-4c9d-8e7f-0a1b2c3d4e5f", "USER", "Marge Simpson")
}

/// Document covering every typed reader
pub fn sample_document() -> Value {
    json!({
        "key1": "value1",
        "key2": {
            "key2_key1": [
                {"key2_key1_key1": "value 0", "key2_key1_key2": "2020-01-01"},
                {"key2_key1_key1": "value 1", "key2_key1_key2": "3030-01-01"}
            ],
            "key2_key2": 500
        },
        "number": 500,
        "numberAsString": "1000",
        "numbers": [500, "1000"],
        "boolean": true,
        "booleans": [true, false, "true", "false"],
        "date": "2020-01-01",
        "dates": ["2020-01-01", "3030-01-01"],
        "file": sample_file().encode(),
        "files": [sample_file().encode(), sample_file_without_original_name().encode()],
        "principal": sample_principal().encode(),
        "principals": [
            sample_principal().encode(),
            sample_principal_user().encode_as(ReferenceKind::PrincipalUser)
        ],
        "object": {"nested": {"deep": [1, 2, 3]}},
        "nothing": null
    })
}

/// Array of objects used to exercise pruning
pub fn pruning_document() -> Value {
    json!({
        "key2": [
            {"key1": true, "key2": "2020-01-01"},
            {"key1": false, "key2": "3030-01-01"}
        ]
    })
}
