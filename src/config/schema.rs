use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "fork": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "weights": { "$ref": "#/$defs/per_field" },
                    "thresholds": { "$ref": "#/$defs/per_field" },
                    "indicator": {
                        "type": "object",
                        "required": ["medium", "high"],
                        "additionalProperties": false,
                        "properties": {
                            "medium": { "$ref": "#/$defs/percent" },
                            "high": { "$ref": "#/$defs/percent" }
                        }
                    }
                }
            },
            "live": {
                "type": "object",
                "properties": {
                    "debounce_ms": { "type": "integer", "minimum": 0, "maximum": 60000 }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "db": { "type": "string" }
                }
            }
        },
        "$defs": {
            "percent": { "type": "integer", "minimum": 0, "maximum": 100 },
            "per_field": {
                "type": "object",
                "required": ["title", "pitch", "description"],
                "additionalProperties": false,
                "properties": {
                    "title": { "$ref": "#/$defs/percent" },
                    "pitch": { "$ref": "#/$defs/percent" },
                    "description": { "$ref": "#/$defs/percent" }
                }
            }
        }
    })
});
