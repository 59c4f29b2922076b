//! Hand-built OpenAPI 3.0 description of the offer endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;

pub(super) const API_TITLE: &str = "Hyundai Offer API";
pub(super) const API_VERSION: &str = "1.0.0";
const API_DESCRIPTION: &str = "API to get Hyundai lease/finance/cash offers by ZIP";

pub(super) async fn openapi_document(State(state): State<AppState>) -> Json<Value> {
    Json(build_openapi_document(state.public_base_url.as_deref()))
}

fn zip_param() -> Value {
    json!({
        "name": "zip",
        "in": "query",
        "required": true,
        "schema": {"type": "string"},
        "description": "Postal code the offers are requested for"
    })
}

fn offer_list_response(description: &str) -> Value {
    json!({
        "200": {
            "description": description,
            "content": {"application/json": {"schema": {
                "type": "array",
                "items": {"$ref": "#/components/schemas/Offer"}
            }}}
        },
        "422": {"$ref": "#/components/responses/ValidationError"},
        "502": {"$ref": "#/components/responses/UpstreamError"}
    })
}

fn offer_schema() -> Value {
    let passthrough = json!({"nullable": true, "description": "Passed through as sent upstream"});
    json!({
        "type": "object",
        "required": [
            "model", "modelYear", "trim", "type", "monthlyPayment", "term",
            "apr", "price", "description", "disclaimer", "fuel", "groupCode"
        ],
        "properties": {
            "model": {"type": "string", "nullable": true},
            "modelYear": passthrough,
            "trim": {"type": "string", "nullable": true},
            "type": {"type": "string", "enum": ["lease1", "lease2", "lowApr", "savings"]},
            "monthlyPayment": {"type": "number", "format": "double", "nullable": true},
            "term": passthrough,
            "apr": passthrough,
            "price": passthrough,
            "description": {"type": "string", "nullable": true},
            "disclaimer": {"type": "string", "nullable": true},
            "fuel": {"type": "string", "nullable": true},
            "groupCode": {"type": "string", "nullable": true}
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}
    })
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "error": {"type": "object", "properties": {
                "code": {"type": "string"},
                "message": {"type": "string"}
            }},
            "meta": {"type": "object", "properties": {
                "request_id": {"type": "string"},
                "timestamp": {"type": "string", "format": "date-time"}
            }}
        }
    })
}

fn payment_params() -> Value {
    json!([
        zip_param(),
        {"name": "model", "in": "query", "required": false,
         "schema": {"type": "string"},
         "description": "Exact model name, case-insensitive"},
        {"name": "maxPrice", "in": "query", "required": false,
         "schema": {"type": "number"},
         "description": "Highest monthly payment to include"}
    ])
}

fn by_type_params() -> Value {
    json!([
        {"name": "offer_type", "in": "path", "required": true,
         "schema": {"type": "string"},
         "description": "Offer type: lease, finance, rebate"},
        zip_param()
    ])
}

fn models_responses() -> Value {
    json!({
        "200": {
            "description": "Sorted distinct model names",
            "content": {"application/json": {"schema": {
                "type": "array", "items": {"type": "string"}
            }}}
        },
        "422": {"$ref": "#/components/responses/ValidationError"},
        "502": {"$ref": "#/components/responses/UpstreamError"}
    })
}

fn get_operation(summary: &str, operation_id: &str, parameters: Value, responses: Value) -> Value {
    json!({"get": {
        "summary": summary,
        "operationId": operation_id,
        "parameters": parameters,
        "responses": responses
    }})
}

/// Builds the OpenAPI document; `public_base_url` becomes the only server entry.
pub(super) fn build_openapi_document(public_base_url: Option<&str>) -> Value {
    let paths = json!({
        "/offers": get_operation(
            "Get All Offers",
            "get_all_offers",
            json!([zip_param()]),
            offer_list_response("Every offer for the postal code"),
        ),
        "/offers/with-payment": get_operation(
            "Get Offers With Payment",
            "get_offers_with_payment",
            payment_params(),
            offer_list_response("Offers that carry a monthly payment"),
        ),
        "/offers/{offer_type}": get_operation(
            "Get Filtered",
            "get_filtered",
            by_type_params(),
            offer_list_response("Offers whose type matches the path segment"),
        ),
        "/models": get_operation(
            "List Models",
            "list_models",
            json!([zip_param()]),
            models_responses(),
        )
    });

    let mut document = json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Offer": offer_schema(),
                "Error": error_schema()
            },
            "responses": {
                "ValidationError": error_response("Missing or malformed query parameter"),
                "UpstreamError": error_response("Incentive service failed or sent malformed data")
            }
        }
    });

    if let Some(url) = public_base_url {
        document["servers"] = json!([{ "url": url }]);
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_offer_paths() {
        let document = build_openapi_document(None);
        let paths = document["paths"].as_object().expect("paths");
        for path in ["/offers", "/offers/with-payment", "/offers/{offer_type}", "/models"] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
        assert_eq!(document["info"]["title"], API_TITLE);
        assert_eq!(document["info"]["version"], API_VERSION);
    }

    #[test]
    fn servers_omitted_without_public_url() {
        let document = build_openapi_document(None);
        assert!(document.get("servers").is_none());
    }

    #[test]
    fn servers_lists_public_url() {
        let document = build_openapi_document(Some("https://offers.example.com"));
        assert_eq!(document["servers"][0]["url"], "https://offers.example.com");
    }

    #[test]
    fn zip_is_required_everywhere() {
        let document = build_openapi_document(None);
        for (_, item) in document["paths"].as_object().expect("paths") {
            let params = item["get"]["parameters"].as_array().expect("parameters");
            let zip = params
                .iter()
                .find(|p| p["name"] == "zip")
                .expect("zip parameter");
            assert_eq!(zip["required"], true);
        }
    }
}
