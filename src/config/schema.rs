use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "rates": {
                "type": "object",
                "properties": {
                    "maintenance_reduction": { "$ref": "#/$defs/rate" },
                    "downtime_reduction": { "$ref": "#/$defs/rate" }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            },
            "cache": {
                "type": "object",
                "properties": {
                    "enabled": { "type": "boolean" },
                    "max_entries": { "type": "integer", "minimum": 0 }
                }
            },
            "presentation": {
                "type": "object",
                "properties": {
                    "default_industry": {
                        "type": "string",
                        "enum": ["Manufacturing", "Energy", "Logistics", "Defense", "Other"]
                    },
                    "simulate_latency": { "type": "boolean" }
                }
            }
        },
        "$defs": {
            "rate": { "type": "number", "minimum": 0, "maximum": 1 }
        }
    })
});
