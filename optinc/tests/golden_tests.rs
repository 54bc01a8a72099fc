//! Golden tests driving the full pipeline from YAML text to artifact.
//!
//! These verify the stable-output contract: fixed section order, fixed
//! member order inside the class, and byte-identical output across
//! repeated runs.

use optinc::emit::generate_to_string;
use optinc::error::ValidationError;
use optinc::model::Schema;
use optinc::schema::parse_str;
use rstest::rstest;

fn compile(document: &str) -> String {
    let raw = parse_str(document).expect("well-formed schema");
    let validated = Schema::from_raw(raw).expect("valid schema");
    generate_to_string(&validated)
}

fn reject(document: &str) -> ValidationError {
    let raw = parse_str(document).expect("well-formed schema");
    Schema::from_raw(raw).expect_err("schema should be rejected")
}

const FLAT_FLAG_SCHEMA: &str = r#"class_name: USAGE_CONFIG
comment_info: "// turn on foo"
header_file: usage_config.h
option:
  - name: enable_foo
    description: turn on foo
"#;

const GROUP_UINT_SCHEMA: &str = r#"class_name: VECTOR_CONFIG
comment_info: "// vector options"
group:
  name: Bar
  description: bar options
  separator: ":"
  value_maker: "="
  option:
    - name: max_size
      description: maximum size
      kind: uint
      value: 4
"#;

const MIXED_SCHEMA: &str = r#"class_name: DRIVER_CONFIG
comment_info: "/* driver options */"
option:
  - name: opt-level
    abbrev_name: O
    description: optimization level
    kind: int
    value: -1
    value_maker: "="
group:
  name: Fe
  description: front end options
  separator: ":"
  value_maker: "="
  option:
    - name: trace
      description: trace output file
      kind: str
      value: off
      value_maker: non_or_space
"#;

#[test]
fn flat_flag_schema_compiles_to_the_expected_artifact() {
    let expected = r#"// turn on foo

#include "usage_config.h"

struct USAGE_CONFIG : public air::util::COMMON_CONFIG {
  USAGE_CONFIG(void) : _enable_foo(false) {}
  ~USAGE_CONFIG(void) {}

  bool Enable_foo(void) { return _enable_foo; }

  bool _enable_foo;
};  // struct USAGE_CONFIG

static USAGE_CONFIG usage_config;

static air::util::OPTION_DESC usage_config_option[] = {
  { "enable_foo", "", "turn on foo", &usage_config._enable_foo, air::util::K_NONE, 0, air::util::V_NONE },
};

static air::util::OPTION_DESC_HANDLE usage_config_option_handle = {
    sizeof(usage_config_option) / sizeof(usage_config_option[0]), usage_config_option};

static void Register_options_usage_config(air::util::OPTION_MGR& option_mgr, bool standalone) {
  option_mgr.Register_top_level_option(&usage_config_option_handle);
}

static void Update_options(USAGE_CONFIG& usage_config_option) {
  usage_config_option = usage_config;
}
"#;
    assert_eq!(compile(FLAT_FLAG_SCHEMA), expected);
}

#[test]
fn group_schema_compiles_to_the_expected_artifact() {
    let expected = r#"// vector options

struct VECTOR_CONFIG : public air::util::COMMON_CONFIG {
  VECTOR_CONFIG(void) : _max_size(4) {}
  ~VECTOR_CONFIG(void) {}

  uint64_t Max_size(void) { return _max_size; }

  uint64_t _max_size;
};  // struct VECTOR_CONFIG

static VECTOR_CONFIG vector_config;

static air::util::OPTION_DESC grp_vector_config_option[] = {
  { "max_size", "", "maximum size", &vector_config._max_size, air::util::K_UINT64, 0, air::util::V_NONE },
};

static air::util::OPTION_DESC_HANDLE grp_vector_config_option_handle = {
    sizeof(grp_vector_config_option) / sizeof(grp_vector_config_option[0]), grp_vector_config_option};

static air::util::OPTION_GRP option_grp_bar = {
    "Bar", "bar options", ':', air::util::V_EQUAL, &grp_vector_config_option_handle};

static void Register_options_vector_config(air::util::OPTION_MGR& option_mgr, bool standalone) {
  if (standalone)
    option_mgr.Register_top_level_option(&grp_vector_config_option_handle);
  else
    option_mgr.Register_option_group(&option_grp_bar);
}

static void Update_options(VECTOR_CONFIG& vector_config_option) {
  vector_config_option = vector_config;
}
"#;
    assert_eq!(compile(GROUP_UINT_SCHEMA), expected);
}

#[test]
fn mixed_schema_orders_group_options_before_flat_options() {
    let artifact = compile(MIXED_SCHEMA);

    // Constructor initializes group options first, flat options second.
    assert!(artifact.contains(
        "  DRIVER_CONFIG(void) : _trace(\"off\"), _opt_level(-1) {}"
    ));

    // Hyphenated names are normalized; accessors capitalize the first letter.
    assert!(artifact.contains("  int64_t Opt_level(void) { return _opt_level; }"));
    assert!(artifact.contains("  std::string_view Trace(void) { return _trace; }"));

    // Both descriptor arrays exist, with the declared value makers.
    assert!(artifact.contains(
        "{ \"opt_level\", \"O\", \"optimization level\", &driver_config._opt_level, \
         air::util::K_INT64, 0, air::util::V_EQUAL },"
    ));
    assert!(artifact.contains(
        "{ \"trace\", \"\", \"trace output file\", &driver_config._trace, \
         air::util::K_STR, 0, air::util::V_NONE_SPACE },"
    ));

    // Registration wires the top level unconditionally, then branches.
    let top = artifact
        .find("option_mgr.Register_top_level_option(&driver_config_option_handle);")
        .expect("top-level registration");
    let standalone = artifact
        .find("option_mgr.Register_top_level_option(&grp_driver_config_option_handle);")
        .expect("standalone branch");
    let nested = artifact
        .find("option_mgr.Register_option_group(&option_grp_fe);")
        .expect("nested branch");
    assert!(top < standalone);
    assert!(standalone < nested);
}

#[rstest]
#[case::flat_flag(FLAT_FLAG_SCHEMA)]
#[case::group_uint(GROUP_UINT_SCHEMA)]
#[case::mixed(MIXED_SCHEMA)]
fn output_is_deterministic(#[case] document: &str) {
    assert_eq!(compile(document), compile(document));
}

#[test]
fn schema_without_options_is_rejected_before_emission() {
    let document = r#"class_name: EMPTY_CONFIG
comment_info: "// nothing here"
"#;
    assert_eq!(reject(document), ValidationError::NoOptions);
}

#[test]
fn str_option_with_value_on_is_rejected() {
    let document = r#"class_name: TRACE_CONFIG
comment_info: "// trace options"
option:
  - name: trace
    description: trace output
    kind: str
    value: on
"#;
    assert_eq!(
        reject(document),
        ValidationError::StrValueNotOff("trace".to_owned())
    );
}

#[rstest]
#[case::kind_without_value(
    "class_name: C\ncomment_info: \"// c\"\noption:\n  - name: depth\n    description: d\n    kind: uint\n",
    ValidationError::KindWithoutValue { name: "depth".to_owned(), kind: "uint".to_owned() }
)]
#[case::value_without_kind(
    "class_name: C\ncomment_info: \"// c\"\noption:\n  - name: fast\n    description: d\n    value: 2\n",
    ValidationError::ValueWithoutKind("fast".to_owned())
)]
#[case::group_value_maker(
    "class_name: C\ncomment_info: \"// c\"\ngroup:\n  name: G\n  description: d\n  separator: \":\"\n  value_maker: space\n  option:\n    - name: x\n      description: d\n",
    ValidationError::GroupValueMaker("space".to_owned())
)]
fn malformed_schemas_surface_specific_diagnostics(
    #[case] document: &str,
    #[case] expected: ValidationError,
) {
    assert_eq!(reject(document), expected);
}
