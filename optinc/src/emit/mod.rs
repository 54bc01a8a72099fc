//! C++ artifact generation: the value-holder class plus its wiring.
//!
//! Every emitter is a pure function from a validated model slice to
//! text, so each fragment can be asserted against a literal expected
//! string without running the full pipeline.

pub mod class;
pub mod statements;

use crate::model::Schema;
use statements::WiringNames;

/// Generates the complete artifact text for a validated schema.
///
/// Sections appear in a fixed order, separated by one blank line:
/// comment block, include line (when the document names a header),
/// class declaration, static instance, top-level descriptor array and
/// handle (when top-level options exist), group descriptor array,
/// handle, and group manager (when a group with options exists),
/// registration function, update function. Output for a fixed schema
/// is byte-identical across invocations.
#[must_use]
pub fn generate_to_string(schema: &Schema) -> String {
    let names = WiringNames::for_schema(schema);
    let layout = schema.registration_layout();
    let mut sections: Vec<String> = Vec::new();

    sections.push(schema.comment.clone());
    if let Some(header_file) = &schema.header_file {
        sections.push(format!("#include \"{header_file}\""));
    }

    sections.push(class::class_decl(schema));
    sections.push(statements::static_instance(&schema.class_name, &names));

    if !schema.top_options.is_empty() {
        sections.push(statements::descriptor_array(
            &names.option_array,
            &names.instance,
            &schema.top_options,
        ));
        sections.push(statements::handle_def(
            &names.option_array,
            &names.option_handle,
        ));
    }

    if let Some(grouped) = schema
        .group
        .as_ref()
        .filter(|grouped| !grouped.options.is_empty())
    {
        sections.push(statements::descriptor_array(
            &names.grp_option_array,
            &names.instance,
            &grouped.options,
        ));
        sections.push(statements::handle_def(
            &names.grp_option_array,
            &names.grp_option_handle,
        ));
        sections.push(statements::group_manager(&grouped.group, &names));
    }

    sections.push(statements::register_fn(&names, layout));
    sections.push(statements::update_fn(&schema.class_name, &names));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
