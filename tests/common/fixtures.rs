#![allow(dead_code)]

use serde_json::{json, Value};

pub const API_KEY: &str = "test-api-key";

/// A record match as the search-data endpoint returns it.
pub fn record_json(name: &str, record_type: &str, content: &str, zone: &str, ttl: u32) -> Value {
    json!({
        "name": name,
        "type": record_type,
        "content": content,
        "object_type": "record",
        "zone": zone,
        "zone_id": zone,
        "ttl": ttl,
        "disabled": false,
    })
}

/// Zone matches carry no type, content or ttl.
pub fn zone_json(name: &str) -> Value {
    json!({
        "name": name,
        "object_type": "zone",
        "zone_id": name,
    })
}
