//! Renders the static wiring statements that expose a generated class
//! to the option-registration runtime.

use crate::model::{ConfigOption, OptionGroup, RegistrationLayout, Schema};

/// Fixed not-changeable-at-runtime flag in every descriptor entry.
const PRAGMA_CHANGEABLE: &str = "0";

/// Derived identifier names shared across the wiring statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringNames {
    /// Static instance of the generated struct.
    pub instance: String,
    /// Top-level descriptor array.
    pub option_array: String,
    /// Top-level descriptor handle.
    pub option_handle: String,
    /// Group descriptor array.
    pub grp_option_array: String,
    /// Group descriptor handle.
    pub grp_option_handle: String,
    /// Registration function.
    pub register_fn: String,
    /// Group manager variable; present only when a group is declared.
    pub group_var: Option<String>,
}

impl WiringNames {
    /// Derives all wiring names from the class name and group name.
    #[must_use]
    pub fn new(class_name: &str, group_name: Option<&str>) -> Self {
        let instance = class_name.to_lowercase();
        let option_array = format!("{instance}_option");
        let option_handle = format!("{instance}_option_handle");
        Self {
            grp_option_array: format!("grp_{option_array}"),
            grp_option_handle: format!("grp_{option_handle}"),
            register_fn: format!("Register_options_{instance}"),
            group_var: group_name.map(|name| format!("option_grp_{}", name.to_lowercase())),
            instance,
            option_array,
            option_handle,
        }
    }

    /// Derives the wiring names for a validated schema.
    #[must_use]
    pub fn for_schema(schema: &Schema) -> Self {
        Self::new(
            &schema.class_name,
            schema
                .group
                .as_ref()
                .map(|grouped| grouped.group.name.as_str()),
        )
    }
}

/// Static instance declaration of the generated struct.
#[must_use]
pub fn static_instance(class_name: &str, names: &WiringNames) -> String {
    format!("static {class_name} {};", names.instance)
}

/// Descriptor array with one entry per option, in declaration order.
///
/// Each entry carries the quoted name, abbreviation, and description,
/// the address of the storage field on the static instance, the kind
/// tag, the fixed not-changeable flag, and the value-maker tag.
#[must_use]
pub fn descriptor_array(array_name: &str, instance: &str, options: &[ConfigOption]) -> String {
    let mut out = format!("static air::util::OPTION_DESC {array_name}[] = {{\n");
    for option in options {
        out.push_str("  { \"");
        out.push_str(&option.name);
        out.push_str("\", \"");
        out.push_str(&option.abbrev_name);
        out.push_str("\", \"");
        out.push_str(&option.description);
        out.push_str("\", &");
        out.push_str(instance);
        out.push('.');
        out.push_str(&option.field_name());
        out.push_str(", ");
        out.push_str(option.kind.tag());
        out.push_str(", ");
        out.push_str(PRAGMA_CHANGEABLE);
        out.push_str(", ");
        out.push_str(option.value_maker.tag());
        out.push_str(" },\n");
    }
    out.push_str("};");
    out
}

/// Handle pairing the array's element count with the array itself.
#[must_use]
pub fn handle_def(array_name: &str, handle_name: &str) -> String {
    format!(
        "static air::util::OPTION_DESC_HANDLE {handle_name} = {{\n    \
         sizeof({array_name}) / sizeof({array_name}[0]), {array_name}}};"
    )
}

/// Group manager combining the group metadata with its handle.
#[must_use]
pub fn group_manager(group: &OptionGroup, names: &WiringNames) -> String {
    let group_var = names.group_var.as_deref().unwrap_or_default();
    format!(
        "static air::util::OPTION_GRP {group_var} = {{\n    \
         \"{}\", \"{}\", '{}', {}, &{}}};",
        group.name,
        group.description,
        group.separator,
        group.value_maker.tag(),
        names.grp_option_handle
    )
}

/// Registration function wiring the handles into the option manager.
///
/// The generated function takes a `standalone` flag: standalone mode
/// registers the group handle as a second top-level registration,
/// library mode nests the group manager under the group's name.
#[must_use]
pub fn register_fn(names: &WiringNames, layout: RegistrationLayout) -> String {
    let mut out = format!(
        "static void {}(air::util::OPTION_MGR& option_mgr, bool standalone) {{\n",
        names.register_fn
    );
    match layout {
        RegistrationLayout::TopLevelOnly => {
            out.push_str(&register_top_level(&names.option_handle));
        }
        RegistrationLayout::GroupOnly => {
            out.push_str(&group_branch(names));
        }
        RegistrationLayout::TopLevelWithGroup => {
            out.push_str(&register_top_level(&names.option_handle));
            out.push_str(&group_branch(names));
        }
    }
    out.push('}');
    out
}

fn register_top_level(handle_name: &str) -> String {
    format!("  option_mgr.Register_top_level_option(&{handle_name});\n")
}

fn group_branch(names: &WiringNames) -> String {
    let group_var = names.group_var.as_deref().unwrap_or_default();
    format!(
        "  if (standalone)\n    \
         option_mgr.Register_top_level_option(&{});\n  \
         else\n    \
         option_mgr.Register_option_group(&{group_var});\n",
        names.grp_option_handle
    )
}

/// Update function copying the static instance's current values into a
/// caller-supplied snapshot of the same class.
#[must_use]
pub fn update_fn(class_name: &str, names: &WiringNames) -> String {
    let instance = &names.instance;
    format!(
        "static void Update_options({class_name}& {instance}_option) {{\n  \
         {instance}_option = {instance};\n}}"
    )
}
