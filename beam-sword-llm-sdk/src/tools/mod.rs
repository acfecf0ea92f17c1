use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

/// A tool that can be called by an LLM
#[derive(Debug, Clone)]
pub struct Tool {
    name: String,
    description: String,
    parameters: RootSchema,
}

impl Tool {
    /// Create a tool from a type that implements JsonSchema
    pub fn from_type<T: schemars::JsonSchema>() -> ToolBuilder<T> {
        ToolBuilder {
            name: None,
            description: None,
            _phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &RootSchema {
        &self.parameters
    }
}

/// Builder for type-safe tools
pub struct ToolBuilder<T> {
    name: Option<String>,
    description: Option<String>,
    _phantom: PhantomData<T>,
}

impl<T: schemars::JsonSchema> ToolBuilder<T> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build the tool. Without an explicit name the schema title is used.
    pub fn build(self) -> Tool {
        use schemars::gen::SchemaSettings;

        let settings = SchemaSettings::draft07().with(|s| {
            s.inline_subschemas = true;
        });
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<T>();

        Tool {
            name: self.name.unwrap_or_else(T::schema_name),
            description: self.description.unwrap_or_default(),
            parameters: schema,
        }
    }
}

/// The function part of a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, exactly as the model produced them
    #[serde(default)]
    pub arguments: String,
}

/// A tool call from the LLM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default = "default_call_type")]
    call_type: String,
    function: FunctionCall,
}

fn default_call_type() -> String {
    "function".to_string()
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            call_type: default_call_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn call_type(&self) -> &str {
        &self.call_type
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Get raw JSON-encoded arguments
    pub fn raw_arguments(&self) -> &str {
        &self.function.arguments
    }

    /// Arguments as JSON. Empty or invalid text yields `Value::Null`.
    pub fn arguments(&self) -> Value {
        serde_json::from_str(&self.function.arguments).unwrap_or(Value::Null)
    }

    /// Parse arguments into a strongly-typed struct
    pub fn parse_arguments<T>(&self) -> Result<T, crate::error::LlmError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let raw = if self.function.arguments.trim().is_empty() {
            "{}"
        } else {
            self.function.arguments.as_str()
        };
        serde_json::from_str(raw).map_err(|e| crate::error::LlmError::ToolArgumentParse {
            tool_name: self.function.name.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;

    #[derive(Debug, Serialize, Deserialize, JsonSchema)]
    struct TestParams {
        query: String,
        limit: u32,
    }

    #[derive(Debug, Deserialize, JsonSchema)]
    struct NoParams {}

    #[test]
    fn test_tool_creation() {
        let tool = Tool::from_type::<TestParams>()
            .name("search")
            .description("Search database")
            .build();

        assert_eq!(tool.name(), "search");
        assert_eq!(tool.description(), "Search database");
    }

    #[test]
    fn test_tool_name_defaults_to_schema_title() {
        let tool = Tool::from_type::<NoParams>().build();
        assert_eq!(tool.name(), "NoParams");
    }

    #[test]
    fn test_tool_call_parsing() {
        let call = ToolCall::new("call_123", "search", r#"{"query": "rust", "limit": 10}"#);

        let params: TestParams = call.parse_arguments().unwrap();
        assert_eq!(params.query, "rust");
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_empty_arguments() {
        let call = ToolCall::new("", "GetCurrentDate", "");

        assert_eq!(call.arguments(), Value::Null);
        assert!(call.parse_arguments::<NoParams>().is_ok());
    }

    #[test]
    fn test_tool_call_wire_shape() {
        let raw = serde_json::json!({
            "function": {"name": "GetCurrentDate", "arguments": "{}"},
            "id": "",
            "type": "function"
        });

        let call: ToolCall = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(call.name(), "GetCurrentDate");
        assert_eq!(call.call_type(), "function");
        assert_eq!(serde_json::to_value(&call).unwrap(), raw);
    }
}
