//! Typed option model built from a validated raw schema.
//!
//! All entities here are constructed once, immutably, after the raw
//! tree has passed every validation rule; they are read-only inputs to
//! the emitters and carry no state across generation runs.

use crate::error::ValidationError;
use crate::schema::{RawGroup, RawOption, RawSchema, RawValue};
use crate::validate;

/// How an option's value is interpreted and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean flag; the option takes no value.
    None,
    /// 64-bit signed integer value.
    Int,
    /// 64-bit unsigned integer value.
    Uint,
    /// String value.
    Str,
}

impl OptionKind {
    /// Descriptor tag constant understood by the option runtime.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "air::util::K_NONE",
            Self::Int => "air::util::K_INT64",
            Self::Uint => "air::util::K_UINT64",
            Self::Str => "air::util::K_STR",
        }
    }

    /// C++ type of the owning storage field.
    #[must_use]
    pub const fn storage_type(self) -> &'static str {
        match self {
            Self::None => "bool",
            Self::Int => "int64_t",
            Self::Uint => "uint64_t",
            Self::Str => "std::string",
        }
    }

    /// C++ return type of the read accessor.
    #[must_use]
    pub const fn accessor_type(self) -> &'static str {
        match self {
            Self::None => "bool",
            Self::Int => "int64_t",
            Self::Uint => "uint64_t",
            Self::Str => "std::string_view",
        }
    }
}

/// How a value attaches to its option on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMaker {
    /// The option takes no attached value.
    None,
    /// `option=value`.
    Equal,
    /// `option value`.
    Space,
    /// Either directly attached or space-separated, as in `-Ipath` / `-I path`.
    NoneOrSpace,
}

impl ValueMaker {
    /// Descriptor tag constant understood by the option runtime.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "air::util::V_NONE",
            Self::Equal => "air::util::V_EQUAL",
            Self::Space => "air::util::V_SPACE",
            Self::NoneOrSpace => "air::util::V_NONE_SPACE",
        }
    }
}

/// Typed default for one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Flag default; always `false` in source schemas.
    Bool(bool),
    /// Signed integer default.
    Int(i64),
    /// Unsigned integer default.
    Uint(u64),
    /// String default; preserves the case of the accepted `off`/`OFF` token.
    Str(String),
}

impl DefaultValue {
    /// Renders the C++ literal used in the constructor initializer list.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Bool(true) => "true".to_owned(),
            Self::Bool(false) => "false".to_owned(),
            Self::Int(value) => value.to_string(),
            Self::Uint(value) => value.to_string(),
            Self::Str(text) => format!("\"{text}\""),
        }
    }
}

/// One configurable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    /// Identifier; hyphens from the raw input are normalized to underscores.
    pub name: String,
    /// Short identifier; empty when the schema declares none.
    pub abbrev_name: String,
    /// Human-readable description.
    pub description: String,
    /// Value kind.
    pub kind: OptionKind,
    /// Compiled-in default.
    pub default: DefaultValue,
    /// Value attachment rule.
    pub value_maker: ValueMaker,
}

impl ConfigOption {
    /// Storage field name: the option name with a leading underscore.
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("_{}", self.name)
    }

    /// Accessor name: the option name with its first letter capitalized.
    #[must_use]
    pub fn accessor_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    fn from_raw(raw: RawOption) -> Result<Self, ValidationError> {
        let name = raw
            .name
            .ok_or(ValidationError::MissingIdentifier {
                label: "option name",
            })?
            .replace('-', "_");
        let abbrev_name = raw.abbrev_name.unwrap_or_default().replace('-', "_");
        let description = raw
            .description
            .ok_or_else(|| ValidationError::MissingDescription(name.clone()))?;

        let kind = match raw.kind.as_deref() {
            None => OptionKind::None,
            Some("int") => OptionKind::Int,
            Some("uint") => OptionKind::Uint,
            Some("str") => OptionKind::Str,
            Some(other) => {
                return Err(ValidationError::UnsupportedKind {
                    name,
                    kind: other.to_owned(),
                });
            }
        };

        let default = match (kind, raw.value) {
            (OptionKind::None, None) => DefaultValue::Bool(false),
            (OptionKind::None, Some(_)) => {
                return Err(ValidationError::ValueWithoutKind(name));
            }
            (_, None) => {
                return Err(ValidationError::KindWithoutValue {
                    name,
                    kind: raw.kind.unwrap_or_default(),
                });
            }
            (OptionKind::Str, Some(RawValue::Str(text))) if text == "off" || text == "OFF" => {
                DefaultValue::Str(text)
            }
            (OptionKind::Str, Some(_)) => {
                return Err(ValidationError::StrValueNotOff(name));
            }
            (OptionKind::Int, Some(RawValue::Int(value))) => DefaultValue::Int(value),
            (OptionKind::Int, Some(_)) => {
                return Err(ValidationError::IntValueNotInteger(name));
            }
            (OptionKind::Uint, Some(RawValue::Int(value))) => match u64::try_from(value) {
                Ok(positive) if positive > 0 => DefaultValue::Uint(positive),
                _ => return Err(ValidationError::UintValueNotPositive(name)),
            },
            (OptionKind::Uint, Some(_)) => {
                return Err(ValidationError::UintValueNotPositive(name));
            }
        };

        let value_maker = match raw.value_maker.as_deref() {
            None => ValueMaker::None,
            Some("=") => ValueMaker::Equal,
            Some("space") => ValueMaker::Space,
            Some("non_or_space") => ValueMaker::NoneOrSpace,
            Some(other) => {
                return Err(ValidationError::UnsupportedValueMaker {
                    name,
                    value_maker: other.to_owned(),
                });
            }
        };

        Ok(Self {
            name,
            abbrev_name,
            description,
            kind,
            default,
            value_maker,
        })
    }
}

/// A named bundle of options sharing one separator and value maker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    /// Group name, quoted into the group manager.
    pub name: String,
    /// Group description.
    pub description: String,
    /// Single character joining group option tokens.
    pub separator: char,
    /// Value attachment rule; always [`ValueMaker::Equal`] for groups.
    pub value_maker: ValueMaker,
}

impl OptionGroup {
    fn from_raw(raw: &RawGroup) -> Result<Self, ValidationError> {
        let (Some(name), Some(description), Some(separator), Some(value_maker)) = (
            raw.name.as_deref(),
            raw.description.as_deref(),
            raw.separator.as_deref(),
            raw.value_maker.as_deref(),
        ) else {
            return Err(ValidationError::IncompleteGroup);
        };

        let mut chars = separator.chars();
        let (Some(separator_char), None) = (chars.next(), chars.next()) else {
            return Err(ValidationError::GroupSeparator(separator.to_owned()));
        };
        if value_maker != "=" {
            return Err(ValidationError::GroupValueMaker(value_maker.to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            separator: separator_char,
            value_maker: ValueMaker::Equal,
        })
    }
}

/// A group plus the options it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedOptions {
    /// Group metadata.
    pub group: OptionGroup,
    /// Options owned by the group.
    pub options: Vec<ConfigOption>,
}

/// How the generated registration function wires options into the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationLayout {
    /// Only a top-level handle exists; it is registered unconditionally.
    TopLevelOnly,
    /// Only a group exists; the standalone flag flattens it into the top
    /// level, library mode nests it under the group's name.
    GroupOnly,
    /// Both exist; the top-level handle always registers, the group
    /// follows the standalone flag.
    TopLevelWithGroup,
}

/// Fully validated, typed schema aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Name of the generated struct.
    pub class_name: String,
    /// Comment block emitted at the top of the artifact.
    pub comment: String,
    /// Header file named by the document, when any.
    pub header_file: Option<String>,
    /// Flat top-level options, in declaration order.
    pub top_options: Vec<ConfigOption>,
    /// Option group, when declared.
    pub group: Option<GroupedOptions>,
}

impl Schema {
    /// Validates `raw` in full and only then builds the typed model.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found; nothing is constructed on
    /// failure.
    pub fn from_raw(raw: RawSchema) -> Result<Self, ValidationError> {
        validate::check(&raw)?;

        let class_name = raw.class_name.ok_or(ValidationError::MissingClassName)?;
        let comment = raw.comment_info.ok_or(ValidationError::MissingComment)?;

        let group = raw
            .group
            .map(|raw_group| -> Result<GroupedOptions, ValidationError> {
                let group = OptionGroup::from_raw(&raw_group)?;
                let options = raw_group
                    .options
                    .unwrap_or_default()
                    .into_iter()
                    .map(ConfigOption::from_raw)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(GroupedOptions { group, options })
            })
            .transpose()?;

        let top_options = raw
            .options
            .unwrap_or_default()
            .into_iter()
            .map(ConfigOption::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            class_name,
            comment,
            header_file: raw.header_file,
            top_options,
            group,
        })
    }

    /// All options in class-emission order: group options first, then
    /// top-level options, each in declaration order.
    pub fn all_options(&self) -> impl Iterator<Item = &ConfigOption> {
        self.group
            .iter()
            .flat_map(|grouped| grouped.options.iter())
            .chain(self.top_options.iter())
    }

    /// Registration layout for the wiring emitter.
    ///
    /// A group with no options of its own contributes no wiring.
    #[must_use]
    pub fn registration_layout(&self) -> RegistrationLayout {
        let has_top = !self.top_options.is_empty();
        let has_group = self
            .group
            .as_ref()
            .is_some_and(|grouped| !grouped.options.is_empty());
        match (has_top, has_group) {
            (_, false) => RegistrationLayout::TopLevelOnly,
            (false, true) => RegistrationLayout::GroupOnly,
            (true, true) => RegistrationLayout::TopLevelWithGroup,
        }
    }
}
