//! Structural and naming validation for raw schema records.
//!
//! Rules run in a fixed order over the whole raw tree: class name,
//! comment, every declared option (top-level list first, then the
//! group's), group metadata, and finally the at-least-one-option rule.
//! The first failure wins and no model object is built afterwards.

use crate::error::ValidationError;
use crate::schema::{RawGroup, RawOption, RawSchema, RawValue};

/// Kind tokens accepted by the schema format.
pub const KIND_TOKENS: [&str; 3] = ["int", "uint", "str"];

/// Value-maker tokens accepted by the schema format.
pub const VALUE_MAKER_TOKENS: [&str; 3] = ["=", "space", "non_or_space"];

/// Line-comment prefix recognized for `comment_info`.
pub const LINE_COMMENT: &str = "//";
/// Block-comment prefix recognized for `comment_info`.
pub const BLOCK_COMMENT_OPEN: &str = "/*";
/// Block-comment suffix recognized for `comment_info`.
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Checks the whole raw tree against the schema rules.
///
/// # Errors
///
/// Returns the first rule violation in rule order.
pub fn check(raw: &RawSchema) -> Result<(), ValidationError> {
    check_class_name(raw.class_name.as_deref())?;
    check_comment(raw.comment_info.as_deref())?;
    for option in raw.options.iter().flatten() {
        check_option(option)?;
    }
    for option in raw
        .group
        .iter()
        .flat_map(|group| group.options.iter().flatten())
    {
        check_option(option)?;
    }
    if let Some(group) = &raw.group {
        check_group(group)?;
    }
    check_not_empty(raw)
}

fn check_class_name(class_name: Option<&str>) -> Result<(), ValidationError> {
    let class_name = class_name.ok_or(ValidationError::MissingClassName)?;
    let charset_ok = !class_name.is_empty()
        && class_name
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_');
    if !charset_ok {
        return Err(ValidationError::ClassNameCharset(class_name.to_owned()));
    }
    if !class_name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic())
    {
        return Err(ValidationError::ClassNameLeadingLetter(
            class_name.to_owned(),
        ));
    }
    Ok(())
}

fn check_comment(comment: Option<&str>) -> Result<(), ValidationError> {
    let comment = comment.ok_or(ValidationError::MissingComment)?;
    let block = comment.starts_with(BLOCK_COMMENT_OPEN) && comment.ends_with(BLOCK_COMMENT_CLOSE);
    if !comment.starts_with(LINE_COMMENT) && !block {
        return Err(ValidationError::InvalidComment(comment.to_owned()));
    }
    Ok(())
}

fn check_option(option: &RawOption) -> Result<(), ValidationError> {
    let name = check_identifier(option.name.as_deref(), "option name")?;
    if option.abbrev_name.is_some() {
        check_identifier(option.abbrev_name.as_deref(), "option abbrev_name")?;
    }
    if option
        .description
        .as_deref()
        .is_none_or(|desc| desc.is_empty())
    {
        return Err(ValidationError::MissingDescription(name));
    }
    if let Some(kind) = option.kind.as_deref() {
        if !KIND_TOKENS.contains(&kind) {
            return Err(ValidationError::UnsupportedKind {
                name,
                kind: kind.to_owned(),
            });
        }
    }
    check_default_value(&name, option)?;
    if let Some(value_maker) = option.value_maker.as_deref() {
        if !VALUE_MAKER_TOKENS.contains(&value_maker) {
            return Err(ValidationError::UnsupportedValueMaker {
                name,
                value_maker: value_maker.to_owned(),
            });
        }
    }
    Ok(())
}

/// Checks an identifier field, returning the hyphen-normalized spelling.
fn check_identifier(value: Option<&str>, label: &'static str) -> Result<String, ValidationError> {
    let raw = value.ok_or(ValidationError::MissingIdentifier { label })?;
    let normalized = raw.replace('-', "_");
    let charset_ok = !normalized.is_empty()
        && normalized
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if !charset_ok {
        return Err(ValidationError::IdentifierCharset {
            label,
            value: raw.to_owned(),
        });
    }
    if !normalized
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic())
    {
        return Err(ValidationError::IdentifierLeadingLetter {
            label,
            value: raw.to_owned(),
        });
    }
    Ok(normalized)
}

fn check_default_value(name: &str, option: &RawOption) -> Result<(), ValidationError> {
    match (option.kind.as_deref(), option.value.as_ref()) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(ValidationError::ValueWithoutKind(name.to_owned())),
        (Some(kind), None) => Err(ValidationError::KindWithoutValue {
            name: name.to_owned(),
            kind: kind.to_owned(),
        }),
        (Some("str"), Some(RawValue::Str(text))) if text == "off" || text == "OFF" => Ok(()),
        (Some("str"), Some(_)) => Err(ValidationError::StrValueNotOff(name.to_owned())),
        (Some("int"), Some(RawValue::Int(_))) => Ok(()),
        (Some("int"), Some(_)) => Err(ValidationError::IntValueNotInteger(name.to_owned())),
        (Some("uint"), Some(RawValue::Int(value))) if *value > 0 => Ok(()),
        (Some("uint"), Some(_)) => Err(ValidationError::UintValueNotPositive(name.to_owned())),
        (Some(kind), Some(_)) => Err(ValidationError::UnsupportedKind {
            name: name.to_owned(),
            kind: kind.to_owned(),
        }),
    }
}

fn check_group(group: &RawGroup) -> Result<(), ValidationError> {
    let complete = group.name.is_some()
        && group.description.is_some()
        && group.separator.is_some()
        && group.value_maker.is_some();
    if !complete {
        return Err(ValidationError::IncompleteGroup);
    }
    if let Some(separator) = group.separator.as_deref() {
        if separator.chars().count() != 1 {
            return Err(ValidationError::GroupSeparator(separator.to_owned()));
        }
    }
    if let Some(value_maker) = group.value_maker.as_deref() {
        if value_maker != "=" {
            return Err(ValidationError::GroupValueMaker(value_maker.to_owned()));
        }
    }
    Ok(())
}

fn check_not_empty(raw: &RawSchema) -> Result<(), ValidationError> {
    let has_top = raw.options.as_ref().is_some_and(|options| !options.is_empty());
    let has_group = raw
        .group
        .as_ref()
        .and_then(|group| group.options.as_ref())
        .is_some_and(|options| !options.is_empty());
    if has_top || has_group {
        Ok(())
    } else {
        Err(ValidationError::NoOptions)
    }
}
