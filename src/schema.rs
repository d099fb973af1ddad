// 📐 Static API Documents
// The JSON Schema served by /api/schema and the endpoint catalog served by
// /api/endpoints. Both are fixed documents; values never vary per request.

use serde_json::{json, Value};

use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_TOTAL_RECORDS};

/// JSON Schema describing the standard record shape.
pub fn record_schema() -> Value {
    json!({
        "title": "DataObject Schema",
        "description": "Schema for the JSON objects returned by the API",
        "type": "object",
        "properties": {
            "id": {"type": "integer", "description": "Unique identifier"},
            "uuid": {"type": "string", "format": "uuid", "description": "UUID string"},
            "name": {"type": "string", "description": "User name"},
            "email": {"type": "string", "format": "email", "description": "Email address"},
            "age": {"type": "integer", "minimum": 0, "maximum": 150, "description": "Age in years"},
            "height": {"type": "number", "description": "Height in centimeters"},
            "weight": {"type": "number", "description": "Weight in kilograms"},
            "is_active": {"type": "boolean", "description": "Active status"},
            "balance": {"type": "number", "description": "Account balance"},
            "birth_date": {"type": "string", "format": "date", "description": "Birth date in ISO format"},
            "created_at": {"type": "string", "format": "date-time", "description": "Creation timestamp"},
            "tags": {"type": "array", "items": {"type": "string"}, "description": "Array of tags"},
            "metadata": {"type": "object", "description": "Additional metadata object"},
            "score": {"type": ["number", "null"], "description": "Optional score value"},
            "description": {"type": ["string", "null"], "description": "Optional description"}
        },
        "required": ["id", "uuid", "name", "email", "age", "height", "weight", "is_active",
                     "balance", "birth_date", "created_at", "tags", "metadata"]
    })
}

/// Catalog of the public endpoints with parameter metadata and example URLs.
pub fn endpoint_catalog() -> Value {
    let pagination_params = json!([
        {"name": "page", "type": "integer", "default": DEFAULT_PAGE,
         "description": "Page number (starts from 1)"},
        {"name": "page_size", "type": "integer", "default": DEFAULT_PAGE_SIZE,
         "description": "Number of items per page (1-100)"},
        {"name": "total_records", "type": "integer", "default": DEFAULT_TOTAL_RECORDS,
         "description": "Total number of records to generate (1-10000)"}
    ]);

    json!({
        "endpoints": [
            {
                "path": "/api/data",
                "name": "Standard Data API",
                "description": "Returns JSON objects with standard date formats (ISO) and all common data types including integers, floats, booleans, strings, arrays, and objects.",
                "parameters": pagination_params.clone(),
                "example": "/api/data?page=1&page_size=10&total_records=500"
            },
            {
                "path": "/api/data-with-date-formats",
                "name": "Date Formats API",
                "description": "Returns JSON objects with multiple date format variations including ISO, US, EU, long format, timestamps, and readable formats. Perfect for testing different date parsing scenarios.",
                "parameters": pagination_params,
                "example": "/api/data-with-date-formats?page=1&page_size=10&total_records=500",
                "special_fields": [
                    "birth_date_iso (ISO format: 2023-12-25)",
                    "birth_date_us (US format: 12/25/2023)",
                    "birth_date_eu (EU format: 25/12/2023)",
                    "birth_date_long (Long format: December 25, 2023)",
                    "created_at_iso (ISO datetime: 2023-12-25T10:30:00)",
                    "created_at_timestamp (Unix timestamp: 1703505000)",
                    "created_at_readable (Readable: Mon, Dec 25 2023 10:30 AM)"
                ]
            },
            {
                "path": "/api/schema",
                "name": "Schema API",
                "description": "Returns the JSON schema for the data objects, useful for validation and understanding the data structure.",
                "parameters": [],
                "example": "/api/schema"
            }
        ]
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_every_record_field() {
        let schema = record_schema();
        let properties = schema["properties"].as_object().unwrap();

        assert_eq!(properties.len(), 15);
        // The nullable fields are typed as unions, not required
        assert_eq!(properties["score"]["type"][1], "null");
        assert_eq!(properties["description"]["type"][1], "null");
    }

    #[test]
    fn test_schema_required_list_excludes_nullables() {
        let schema = record_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required.len(), 13);
        assert!(!required.contains(&"score"));
        assert!(!required.contains(&"description"));
        assert!(required.contains(&"uuid"));
        assert!(required.contains(&"metadata"));
    }

    #[test]
    fn test_catalog_lists_three_endpoints() {
        let catalog = endpoint_catalog();
        let endpoints = catalog["endpoints"].as_array().unwrap();

        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0]["path"], "/api/data");
        assert_eq!(endpoints[1]["path"], "/api/data-with-date-formats");
        assert_eq!(endpoints[2]["path"], "/api/schema");
    }

    #[test]
    fn test_catalog_parameter_defaults_match_the_service() {
        let catalog = endpoint_catalog();
        let params = catalog["endpoints"][0]["parameters"].as_array().unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params[0]["default"], 1);
        assert_eq!(params[1]["default"], 10);
        assert_eq!(params[2]["default"], 1000);
    }

    #[test]
    fn test_date_formats_endpoint_advertises_its_special_fields() {
        let catalog = endpoint_catalog();
        let special = catalog["endpoints"][1]["special_fields"].as_array().unwrap();

        assert_eq!(special.len(), 7);
    }
}
