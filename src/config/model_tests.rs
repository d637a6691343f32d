use super::*;

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap()
}

#[test]
fn parse_full_config() {
    let config = parse(
        r#"
version = "1"

[output]
only_add = true
only_total = true
format = "json"

[languages]
hpp = "c/c++"
bash = "sh"
"#,
    );

    assert!(config.validate().is_ok());
    assert!(config.output.only_add);
    assert!(config.output.only_total);
    assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));

    let custom = config.custom_extensions().unwrap();
    let entries: Vec<_> = custom.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        entries,
        vec![("hpp", LanguageTag::CFamily), ("bash", LanguageTag::Shell)]
    );
}

#[test]
fn empty_config_uses_defaults() {
    let config = parse("");
    assert_eq!(config, Config::default());
    assert_eq!(config.output_format().unwrap(), None);
}

#[test]
fn unknown_fields_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[output]\nonly_adds = true\n");
    assert!(result.is_err());
}

#[test]
fn unsupported_version_is_rejected() {
    let config = parse("version = \"2\"\n");
    let err = config.validate().unwrap_err();
    assert!(matches!(err, DiffSlocError::Config(ref msg) if msg.contains("'2'")));
}

#[test]
fn unknown_output_format_is_rejected() {
    let config = parse("[output]\nformat = \"xml\"\n");
    assert!(matches!(config.validate(), Err(DiffSlocError::Config(_))));
}

#[test]
fn unknown_language_tag_is_rejected() {
    let config = parse("[languages]\nkt = \"kotlin\"\n");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("languages.kt"));
}

#[test]
fn dotted_extension_is_rejected() {
    let config = parse("[languages]\n\".hpp\" = \"c/c++\"\n");
    assert!(matches!(config.validate(), Err(DiffSlocError::Config(_))));
}

#[test]
fn language_registry_applies_custom_extensions() {
    let config = parse("[languages]\nhpp = \"c/c++\"\ntxt = \"default\"\n");
    let registry = config.language_registry().unwrap();

    assert_eq!(registry.classify("vec.hpp"), LanguageTag::CFamily);
    assert_eq!(registry.classify("notes.txt"), LanguageTag::Default);
    assert_eq!(registry.classify("main.py"), LanguageTag::Python);
}
