//! Declarative input schemas for the Quercle tools
//!
//! Schemas are plain static data. They can be inspected, serialized to JSON
//! Schema and handed to a model without touching the tools that execute them.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Description shown to the model for the search tool
pub const SEARCH_DESCRIPTION: &str = "Search the web and get an AI-synthesized answer with citations. \
Use this for current events, recent releases, documentation lookups and any question that needs \
up-to-date information from the internet. Results can be restricted to allowed domains or \
exclude blocked domains.";

/// Description shown to the model for the fetch tool
pub const FETCH_DESCRIPTION: &str = "Fetch a web page and analyze its content with AI. \
Provide the URL to read and, optionally, a prompt describing what to extract, summarize or \
answer from the page.";

/// Value type accepted by a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Free-form string
    String,
    /// Absolute URL string
    Url,
    /// List of strings
    StringArray,
}

/// One named input property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Argument name as it appears in tool-call JSON
    pub name: &'static str,
    /// Accepted value type
    pub kind: PropertyKind,
    /// Guidance for the model
    pub description: &'static str,
    /// Whether the argument must be present
    pub required: bool,
}

impl Property {
    fn to_json(&self) -> Value {
        match self.kind {
            PropertyKind::String => json!({
                "type": "string",
                "description": self.description,
            }),
            PropertyKind::Url => json!({
                "type": "string",
                "format": "uri",
                "description": self.description,
            }),
            PropertyKind::StringArray => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description,
            }),
        }
    }
}

/// Object schema describing a tool's accepted arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSchema {
    /// Declared properties, in display order
    pub properties: &'static [Property],
}

impl InputSchema {
    /// Look up a property by name
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of required properties
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// Render as a JSON Schema object
    #[must_use]
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();
        let required: Vec<&str> = self.required().collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Arguments accepted by the search tool
pub const SEARCH_SCHEMA: InputSchema = InputSchema {
    properties: &[
        Property {
            name: "query",
            kind: PropertyKind::String,
            description: "The search query. Phrase it as a question or topic to research.",
            required: true,
        },
        Property {
            name: "allowedDomains",
            kind: PropertyKind::StringArray,
            description: "Only include results from these domains (e.g. [\"docs.rs\", \"github.com\"]).",
            required: false,
        },
        Property {
            name: "blockedDomains",
            kind: PropertyKind::StringArray,
            description: "Exclude results from these domains.",
            required: false,
        },
    ],
};

/// Arguments accepted by the fetch tool
pub const FETCH_SCHEMA: InputSchema = InputSchema {
    properties: &[
        Property {
            name: "url",
            kind: PropertyKind::Url,
            description: "The URL of the page to fetch.",
            required: true,
        },
        Property {
            name: "prompt",
            kind: PropertyKind::String,
            description: "What to extract or summarize from the page. Defaults to a general summary.",
            required: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_not_empty() {
        assert!(!SEARCH_DESCRIPTION.trim().is_empty());
        assert!(!FETCH_DESCRIPTION.trim().is_empty());
    }

    #[test]
    fn search_schema_requires_only_query() {
        assert_eq!(SEARCH_SCHEMA.required().collect::<Vec<_>>(), ["query"]);
        assert_eq!(
            SEARCH_SCHEMA.property("allowedDomains").map(|p| p.kind),
            Some(PropertyKind::StringArray)
        );
        assert!(SEARCH_SCHEMA.property("limit").is_none());
    }

    #[test]
    fn fetch_schema_renders_as_json_schema() {
        let schema = FETCH_SCHEMA.to_json();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["url"]));
        assert_eq!(schema["properties"]["url"]["format"], "uri");
        assert_eq!(schema["properties"]["prompt"]["type"], "string");
    }

    #[test]
    fn serialize_matches_to_json() {
        let serialized = serde_json::to_value(SEARCH_SCHEMA).unwrap();
        assert_eq!(serialized, SEARCH_SCHEMA.to_json());
        assert_eq!(
            serialized["properties"]["blockedDomains"]["items"]["type"],
            "string"
        );
    }
}
