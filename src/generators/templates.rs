use crate::generators::naming::quote_go_string;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

pub const CONSTANT_TEMPLATE: &str = "go/constant.go.tera";

/// Values rendered into a generated Go file
#[derive(Debug, Clone, Serialize)]
pub struct ConstantContext<'a> {
    pub source_file: &'a str,
    pub package: &'a str,
    pub name: &'a str,
    pub value: &'a str,
}

/// Create and configure a Tera template engine for Go sources
pub fn create_template_engine() -> Result<Tera, String> {
    let mut tera = Tera::default();

    tera.add_raw_template(CONSTANT_TEMPLATE, include_str!("templates/constant.go.tera"))
        .map_err(|e| format!("Failed to register {}: {}", CONSTANT_TEMPLATE, e))?;

    tera.register_filter("go_quote", go_quote_filter);

    Ok(tera)
}

/// Render the Go source declaring one template constant
pub fn render_constant(tera: &Tera, context: &ConstantContext<'_>) -> Result<String, String> {
    let context = Context::from_serialize(context)
        .map_err(|e| format!("Invalid template context: {}", e))?;
    tera.render(CONSTANT_TEMPLATE, &context)
        .map_err(|e| format!("Failed to render {}: {}", CONSTANT_TEMPLATE, e))
}

fn go_quote_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    if let Some(s) = value.as_str() {
        Ok(Value::String(quote_go_string(s)))
    } else {
        Err("go_quote filter expects a string".into())
    }
}
