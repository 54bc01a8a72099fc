//! Renders the value-holder struct declaration.
//!
//! Member order is part of the stable-output contract: constructor,
//! destructor, accessors, storage fields, closing comment.

use crate::model::{ConfigOption, Schema};

/// Base configuration type every generated struct derives from.
pub const BASE_CONFIG_TYPE: &str = "air::util::COMMON_CONFIG";

/// Renders the complete struct declaration for `schema`.
#[must_use]
pub fn class_decl(schema: &Schema) -> String {
    let options: Vec<&ConfigOption> = schema.all_options().collect();
    let mut lines = Vec::with_capacity(options.len() * 2 + 6);
    lines.push(opening(&schema.class_name));
    lines.push(constructor(&schema.class_name, &options));
    lines.push(destructor(&schema.class_name));
    lines.push(String::new());
    lines.extend(options.iter().map(|option| accessor(option)));
    lines.push(String::new());
    lines.extend(options.iter().map(|option| storage_field(option)));
    lines.push(closing(&schema.class_name));
    lines.join("\n")
}

/// Opening clause of the struct declaration.
#[must_use]
pub fn opening(class_name: &str) -> String {
    format!("struct {class_name} : public {BASE_CONFIG_TYPE} {{")
}

/// Constructor whose initializer list assigns every storage field its
/// default literal, in class-emission order.
#[must_use]
pub fn constructor(class_name: &str, options: &[&ConfigOption]) -> String {
    let inits = options
        .iter()
        .map(|option| format!("{}({})", option.field_name(), option.default.literal()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("  {class_name}(void) : {inits} {{}}")
}

/// Trivial destructor.
#[must_use]
pub fn destructor(class_name: &str) -> String {
    format!("  ~{class_name}(void) {{}}")
}

/// Accessor returning the stored value with the kind-appropriate type.
#[must_use]
pub fn accessor(option: &ConfigOption) -> String {
    format!(
        "  {} {}(void) {{ return {}; }}",
        option.kind.accessor_type(),
        option.accessor_name(),
        option.field_name()
    )
}

/// Storage field declaration, private by convention.
#[must_use]
pub fn storage_field(option: &ConfigOption) -> String {
    format!("  {} {};", option.kind.storage_type(), option.field_name())
}

/// Closing brace with the trailing struct-name comment.
#[must_use]
pub fn closing(class_name: &str) -> String {
    format!("}};  // struct {class_name}")
}
