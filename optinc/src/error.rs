//! Error types for `optinc`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `optinc` pipeline.
#[derive(Debug, Error)]
pub enum OptincError {
    /// The input path does not exist.
    #[error("schema file '{0}' does not exist")]
    SchemaNotFound(Utf8PathBuf),

    /// The input path does not carry a recognized schema extension.
    #[error("schema file '{0}' must have a .yml or .yaml extension")]
    UnsupportedExtension(Utf8PathBuf),

    /// The schema document is not well-formed YAML.
    #[error("failed to parse schema '{path}': {message}")]
    Parse {
        /// Path of the offending document.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// The schema document violates a structural or naming rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading the schema file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the file being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the generated artifact to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Schema validation failures, one variant per rule.
///
/// Rules are applied in a fixed order and the first failure wins; each
/// message names the offending field so the diagnostic stands on its
/// own at process exit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No `class_name` field.
    #[error("class name must be provided")]
    MissingClassName,

    /// The class name uses characters outside `[A-Z0-9_]`.
    #[error("class name '{0}' may only use upper-case letters, digits, and underscores")]
    ClassNameCharset(String),

    /// The class name does not start with a letter.
    #[error("class name '{0}' must start with a letter")]
    ClassNameLeadingLetter(String),

    /// No `comment_info` field.
    #[error("comment info must be provided")]
    MissingComment,

    /// The comment is not a recognized C++ comment form.
    #[error("comment '{0}' must start with '//', or start with '/*' and end with '*/'")]
    InvalidComment(String),

    /// A required identifier field is absent.
    #[error("{label} must be provided")]
    MissingIdentifier {
        /// Which identifier field is missing.
        label: &'static str,
    },

    /// An identifier uses characters outside `[A-Za-z0-9_]`.
    #[error("{label} '{value}' may only use letters, digits, and underscores")]
    IdentifierCharset {
        /// Which identifier field is malformed.
        label: &'static str,
        /// The rejected spelling.
        value: String,
    },

    /// An identifier does not start with a letter.
    #[error("{label} '{value}' must start with a letter")]
    IdentifierLeadingLetter {
        /// Which identifier field is malformed.
        label: &'static str,
        /// The rejected spelling.
        value: String,
    },

    /// An option has no description.
    #[error("option '{0}' is missing a description")]
    MissingDescription(String),

    /// An option declares a kind outside `int`/`uint`/`str`.
    #[error("option '{name}' has unsupported kind '{kind}'")]
    UnsupportedKind {
        /// Offending option.
        name: String,
        /// The rejected kind token.
        kind: String,
    },

    /// An option declares a value without declaring a kind.
    #[error("option '{0}' declares a value but no kind")]
    ValueWithoutKind(String),

    /// An option declares a kind without declaring a value.
    #[error("option '{name}' declares kind '{kind}' but no value")]
    KindWithoutValue {
        /// Offending option.
        name: String,
        /// The kind that lacks a value.
        kind: String,
    },

    /// A `str` option's value is not the literal `off`/`OFF`.
    #[error("option '{0}' has kind 'str'; its value must be \"off\" or \"OFF\"")]
    StrValueNotOff(String),

    /// An `int` option's value is not an integer.
    #[error("option '{0}' has kind 'int'; its value must be an integer")]
    IntValueNotInteger(String),

    /// A `uint` option's value is not an integer greater than zero.
    #[error("option '{0}' has kind 'uint'; its value must be an integer greater than zero")]
    UintValueNotPositive(String),

    /// An option declares a value maker outside `=`/`space`/`non_or_space`.
    #[error("option '{name}' has unsupported value maker '{value_maker}'")]
    UnsupportedValueMaker {
        /// Offending option.
        name: String,
        /// The rejected value-maker token.
        value_maker: String,
    },

    /// A group is missing one of name, description, separator, value maker.
    #[error("group name, description, separator, and value_maker must all be provided")]
    IncompleteGroup,

    /// The group separator is not a single character.
    #[error("group separator '{0}' must be a single character")]
    GroupSeparator(String),

    /// The group value maker is not the equal-sign token.
    #[error("group value maker '{0}' is not supported; only '=' is accepted")]
    GroupValueMaker(String),

    /// Neither top-level options nor group options were declared.
    #[error("at least one top-level option or group option must be provided")]
    NoOptions,
}
