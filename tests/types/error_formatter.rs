use std::borrow::Cow;
use std::fmt::Write;

use error_fanin::{
    Collector, FormatBuilder, FormatConfig, Formatter, MultiError, DEFAULT_FORMAT,
    DEFAULT_INDENT, DEFAULT_MARKER, DEFAULT_MESSAGE,
};

fn one_two_three(collector: &Collector) -> &Collector {
    for msg in ["1", "2", "3"] {
        collector.register(msg);
    }
    collector
}

fn json_like(err: &MultiError) -> String {
    let mut out = String::from(r#"{"errors":["#);
    for (i, e) in err.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{:?}", e.to_string());
    }
    out.push_str("]}");
    out
}

#[test]
fn test_default_format_layout() {
    let collector = Collector::new();
    let err = one_two_three(&collector).finalize().unwrap();

    assert_eq!(err.to_string(), "errors found:\n  ✔ 1\n  ✔ 2\n  ✔ 3");
}

#[test]
fn test_default_format_constant() {
    assert_eq!(DEFAULT_FORMAT.message, DEFAULT_MESSAGE);
    assert_eq!(DEFAULT_FORMAT.marker, "✔ ");
    assert_eq!(DEFAULT_FORMAT.indent, DEFAULT_INDENT);
}

#[test]
fn test_format_config_default_uses_dash_marker() {
    let config = FormatConfig::default();
    assert_eq!(config.message, "errors found:");
    assert_eq!(config.marker, "- ");
    assert_eq!(config.indent, "  ");

    let collector = Collector::with_fallback(config);
    collector.register("only");
    assert_eq!(collector.finalize().unwrap().to_string(), "errors found:\n  - only");
}

#[test]
fn test_custom_json_formatter() {
    let collector = Collector::new();
    one_two_three(&collector).set_formatter(json_like);

    let err = collector.finalize().unwrap();
    assert_eq!(err.to_string(), r#"{"errors":["1","2","3"]}"#);
}

#[test]
fn test_builder_configures_every_field() {
    let config = FormatBuilder::new()
        .message("failures")
        .marker("> ")
        .indent("\t")
        .build()
        .unwrap();

    let collector = Collector::new();
    collector.register("a").register("b").set_formatter(config);
    assert_eq!(collector.finalize().unwrap().to_string(), "failures\n\t> a\n\t> b");
}

#[test]
fn test_builder_resets_after_build() {
    let mut builder = FormatBuilder::new();
    let first = builder.message("custom").marker("* ").indent("").must_build();
    let second = builder.must_build();

    assert_eq!(first.message, "custom");
    assert_eq!(second, FormatConfig::default());
    assert_eq!(second.marker, DEFAULT_MARKER);
}

#[test]
fn test_builder_accepts_owned_strings() {
    let prefix = String::from("#");
    let config = FormatConfig::builder().marker(format!("{prefix} ")).must_build();

    assert!(matches!(config.marker, Cow::Owned(_)));
    assert_eq!(config.marker, "# ");
}

#[test]
fn test_empty_strings_render_bare_lines() {
    let config = FormatBuilder::new().message("").marker("").indent("").must_build();
    let collector = Collector::new();
    collector.register("x").register("y");

    let err = collector.finalize().unwrap().with_formatter(config);
    assert_eq!(err.to_string(), "\nx\ny");
}

#[test]
fn test_error_text_is_not_modified() {
    let collector = Collector::new();
    collector.register("line one\nline two").register("  padded  ");

    let err = collector.finalize().unwrap();
    assert_eq!(
        err.to_string(),
        "errors found:\n  ✔ line one\nline two\n  ✔   padded  "
    );
}

#[test]
fn test_formatter_trait_object() {
    let stock: Box<dyn Formatter> = Box::new(DEFAULT_FORMAT);
    let count: Box<dyn Formatter> = Box::new(|e: &MultiError| e.len().to_string());
    let formatters = [stock, count];

    let collector = Collector::new();
    collector.register("a");
    let err = collector.finalize().unwrap();

    let rendered: Vec<String> = formatters.iter().map(|f| f.format(&err)).collect();
    assert_eq!(rendered, ["errors found:\n  ✔ a", "1"]);
}

#[cfg(feature = "serde")]
#[test]
fn test_format_config_round_trips_through_json() {
    let json = r#"{"message":"oops:","marker":"+ ","indent":" "}"#;
    let config: FormatConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.message, "oops:");
    assert_eq!(serde_json::to_string(&config).unwrap(), json);
}
