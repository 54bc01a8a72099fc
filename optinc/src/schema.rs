//! Raw schema records and the YAML file loader.
//!
//! The loader produces an untyped record tree exactly as written in the
//! document; the [`crate::validate`] rules run over this tree before any
//! model object is built.

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::OptincError;

/// File extensions accepted for schema documents.
pub const SCHEMA_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Top-level schema record as parsed from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSchema {
    /// Name of the generated configuration struct.
    pub class_name: Option<String>,
    /// Comment block emitted at the top of the artifact.
    pub comment_info: Option<String>,
    /// Header file the artifact is generated for.
    pub header_file: Option<String>,
    /// Flat top-level option list.
    #[serde(rename = "option")]
    pub options: Option<Vec<RawOption>>,
    /// Optional option group.
    pub group: Option<RawGroup>,
}

/// One option entry as parsed from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOption {
    /// Option identifier.
    pub name: Option<String>,
    /// Optional short identifier.
    pub abbrev_name: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Value kind token (`int`, `uint`, or `str`); absent means a flag.
    pub kind: Option<String>,
    /// Default value; must be present exactly when `kind` is.
    pub value: Option<RawValue>,
    /// Value-maker token (`=`, `space`, or `non_or_space`).
    pub value_maker: Option<String>,
}

/// Option group record as parsed from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGroup {
    /// Group name.
    pub name: Option<String>,
    /// Group description.
    pub description: Option<String>,
    /// Single character joining group option tokens.
    pub separator: Option<String>,
    /// Value-maker token; only `=` is accepted for groups.
    pub value_maker: Option<String>,
    /// Options owned by the group.
    #[serde(rename = "option")]
    pub options: Option<Vec<RawOption>>,
}

/// Default value scalar as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// YAML boolean literal.
    Bool(bool),
    /// YAML integer literal.
    Int(i64),
    /// YAML string scalar; with strict booleans `off` stays a string.
    Str(String),
}

/// Loads and parses the schema document at `path`.
///
/// # Errors
///
/// Returns [`OptincError::SchemaNotFound`] when the path does not exist,
/// [`OptincError::UnsupportedExtension`] when it is not a `.yml`/`.yaml`
/// file, [`OptincError::Io`] when the read fails, and
/// [`OptincError::Parse`] when the document is not well-formed YAML.
pub fn load(path: &Utf8Path) -> Result<RawSchema, OptincError> {
    if !path.exists() {
        return Err(OptincError::SchemaNotFound(path.to_path_buf()));
    }
    if !path
        .extension()
        .is_some_and(|ext| SCHEMA_EXTENSIONS.contains(&ext))
    {
        return Err(OptincError::UnsupportedExtension(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|io_err| OptincError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })?;
    parse_str(&contents).map_err(|parse_err| OptincError::Parse {
        path: path.to_path_buf(),
        message: parse_err.to_string(),
    })
}

/// Parses schema YAML with strict boolean semantics, so the scalar
/// `off` stays a string rather than collapsing to `false`.
///
/// # Errors
///
/// Returns the parser error when the document is not well-formed.
pub fn parse_str(contents: &str) -> Result<RawSchema, serde_saphyr::Error> {
    serde_saphyr::from_str_with_options(
        contents,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_option_list() {
        let raw: RawSchema = parse_str(
            "class_name: USAGE_CONFIG\n\
             comment_info: \"// usage options\"\n\
             option:\n\
             \x20 - name: enable_foo\n\
             \x20   description: turn on foo\n",
        )
        .expect("well-formed schema");
        assert_eq!(raw.class_name.as_deref(), Some("USAGE_CONFIG"));
        let options = raw.options.expect("option list");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name.as_deref(), Some("enable_foo"));
        assert!(options[0].kind.is_none());
        assert!(options[0].value.is_none());
    }

    #[test]
    fn off_scalar_stays_a_string() {
        let raw: RawSchema = parse_str(
            "class_name: C\n\
             option:\n\
             \x20 - name: trace\n\
             \x20   kind: str\n\
             \x20   value: off\n",
        )
        .expect("well-formed schema");
        let options = raw.options.expect("option list");
        assert_eq!(options[0].value, Some(RawValue::Str("off".to_owned())));
    }

    #[test]
    fn integer_and_boolean_scalars_keep_their_types() {
        let raw: RawSchema = parse_str(
            "class_name: C\n\
             option:\n\
             \x20 - name: depth\n\
             \x20   kind: uint\n\
             \x20   value: 4\n\
             \x20 - name: strict\n\
             \x20   value: false\n",
        )
        .expect("well-formed schema");
        let options = raw.options.expect("option list");
        assert_eq!(options[0].value, Some(RawValue::Int(4)));
        assert_eq!(options[1].value, Some(RawValue::Bool(false)));
    }

    #[test]
    fn group_record_parses_with_its_own_options() {
        let raw: RawSchema = parse_str(
            "class_name: C\n\
             group:\n\
             \x20 name: Bar\n\
             \x20 description: bar options\n\
             \x20 separator: \":\"\n\
             \x20 value_maker: \"=\"\n\
             \x20 option:\n\
             \x20   - name: max_size\n\
             \x20     description: maximum size\n\
             \x20     kind: uint\n\
             \x20     value: 4\n",
        )
        .expect("well-formed schema");
        let group = raw.group.expect("group record");
        assert_eq!(group.separator.as_deref(), Some(":"));
        assert_eq!(group.options.map(|opts| opts.len()), Some(1));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(parse_str("class_name: [unterminated").is_err());
    }
}
