//! Tool Registry
//!
//! Names, descriptions and input schemas of the lookup tools, plus dispatch
//! of a tool call to the matching service operation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::{ToolCall, ToolDescriptor};
use crate::service::LookupService;

pub const AUTOCOMPLETE_TOOL: &str = "app_store_autocomplete";
pub const SEARCH_TOOL: &str = "app_store_search";
pub const DETAILS_TOOL: &str = "app_store_details";
pub const REVIEWS_TOOL: &str = "app_store_reviews";

/// Describes every tool the gateway exposes.
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: AUTOCOMPLETE_TOOL,
            description: "Get app name suggestions based on a search term",
            input_schema: schema("term", "Search term for autocomplete", true),
        },
        ToolDescriptor {
            name: SEARCH_TOOL,
            description: "Search for apps in the app store",
            input_schema: schema("term", "Search term", true),
        },
        ToolDescriptor {
            name: DETAILS_TOOL,
            description: "Get detailed information about a specific app",
            input_schema: schema(
                "id",
                "App ID (bundle ID for iOS, package name for Android)",
                false,
            ),
        },
        ToolDescriptor {
            name: REVIEWS_TOOL,
            description: "Get reviews for a specific app",
            input_schema: schema(
                "id",
                "App ID (bundle ID for iOS, package name for Android)",
                true,
            ),
        },
    ]
}

fn schema(subject: &str, subject_description: &str, paginated: bool) -> Value {
    let mut properties = json!({
        "store": {
            "type": "string",
            "enum": ["apple", "google"],
            "description": "App store platform",
        },
        subject: {
            "type": "string",
            "description": subject_description,
        },
        "language": {
            "type": "string",
            "description": "Language code (e.g., \"en\")",
            "default": "en",
        },
    });

    if paginated {
        properties["page"] = json!({
            "type": "number",
            "description": "Page number (1-based)",
            "default": 1,
        });
        properties["pageSize"] = json!({
            "type": "number",
            "description": "Number of results per page",
        });
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": ["store", subject],
    })
}

// == Dispatch ==
/// Runs one tool call and returns its JSON result.
pub async fn dispatch(service: &LookupService, call: ToolCall) -> Result<Value> {
    match call.name.as_str() {
        AUTOCOMPLETE_TOOL => render(service.autocomplete(&arguments(call.arguments)?).await?),
        SEARCH_TOOL => render(service.search(&arguments(call.arguments)?).await?),
        DETAILS_TOOL => render(service.details(&arguments(call.arguments)?).await?),
        REVIEWS_TOOL => render(service.reviews(&arguments(call.arguments)?).await?),
        other => Err(AppError::InvalidInput(format!("Unknown tool: {}", other))),
    }
}

fn arguments<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    Ok(serde_json::from_value(arguments)?)
}

fn render<T: Serialize>(response: T) -> Result<Value> {
    serde_json::to_value(response).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_cover_all_tools() {
        let names: Vec<&str> = tool_descriptors().iter().map(|t| t.name).collect();
        assert_eq!(names, vec![AUTOCOMPLETE_TOOL, SEARCH_TOOL, DETAILS_TOOL, REVIEWS_TOOL]);
    }

    #[test]
    fn test_details_schema_has_no_pagination() {
        let details = tool_descriptors()
            .into_iter()
            .find(|t| t.name == DETAILS_TOOL)
            .unwrap();

        let properties = &details.input_schema["properties"];
        assert!(properties.get("id").is_some());
        assert!(properties.get("page").is_none());
        assert_eq!(details.input_schema["required"], json!(["store", "id"]));
    }

    #[test]
    fn test_search_schema_has_pagination() {
        let search = tool_descriptors()
            .into_iter()
            .find(|t| t.name == SEARCH_TOOL)
            .unwrap();

        let properties = &search.input_schema["properties"];
        assert!(properties.get("term").is_some());
        assert!(properties.get("pageSize").is_some());
        assert_eq!(properties["store"]["enum"], json!(["apple", "google"]));
    }
}
