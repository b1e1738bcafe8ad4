mod common;

use common::{ParentExample, Sample};
use futures::future::join_all;
use jser_codecs::{
    AnySerializer, Format, JsonSerializer, SerializerConfig, XmlSerializer, XmlSettings,
    registry_from_configs,
};
use jser_core::{Error, Result, Serializer, SerializerRegistry, TypeContract};
use std::sync::Arc;

fn registry() -> Result<SerializerRegistry<AnySerializer>> {
    let mut registry = SerializerRegistry::<AnySerializer>::new();
    registry.register(JsonSerializer::default().into())?;
    registry.register(XmlSerializer::new(Some("xml"), None).into())?;
    Ok(registry)
}

#[test]
fn select_serializer_by_name() -> Result<()> {
    let registry = registry()?;
    let ty = TypeContract::<Sample>::of();
    let item = Sample::expected();

    let json = registry.default_serializer()?;
    assert_eq!(json.format(), Format::Json);
    assert_eq!(
        json.serialize_to_string(Some(&item), Some(&ty))?,
        r#"{"PropA":5,"PropB":true,"PropC":"PropC"}"#
    );

    let xml = registry.get("xml")?;
    assert_eq!(xml.format(), Format::Xml);
    let text = xml.serialize_to_string(Some(&item), Some(&ty))?;
    let back: Sample = xml.deserialize_from_string(Some(&text), Some(&ty))?;
    assert_eq!(back, item);

    assert!(matches!(registry.get("yaml"), Err(Error::SerializerNotFound(name)) if name == "yaml"));

    Ok(())
}

#[test]
fn dispatch_keeps_argument_checks() {
    let registry = registry().unwrap();
    for name in registry.names() {
        common::assert_argument_checks(registry.get(name).unwrap());
    }
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = registry().unwrap();

    let err = registry
        .register(XmlSerializer::default().into())
        .unwrap_err();

    assert!(matches!(err, Error::SerializerRegistered(name) if name == "default"));
    assert_eq!(registry.get("default").unwrap().format(), Format::Json);
}

#[test]
fn configs_build_named_serializers() -> Result<()> {
    let configs: Vec<SerializerConfig> = serde_json::from_str(
        r#"[
            { "format": "json", "settings": { "indent": "\t" } },
            { "format": "xml", "name": "legacy", "settings": { "root_name": "Legacy", "declaration": true } }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        configs[1],
        SerializerConfig::Xml {
            name: Some("legacy".into()),
            settings: Some(XmlSettings {
                root_name: Some("Legacy".into()),
                declaration: true,
                ..Default::default()
            }),
        }
    );

    let registry = registry_from_configs(configs)?;
    assert_eq!(registry.names(), vec!["default", "legacy"]);

    let ty = TypeContract::<Sample>::of();
    let json = registry.default_serializer()?.serialize_to_string(Some(&Sample::expected()), Some(&ty))?;
    assert!(json.starts_with("{\n\t\"PropA\": 5"));

    let xml = registry.get("legacy")?.serialize_to_string(Some(&Sample::expected()), Some(&ty))?;
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?><Legacy>"#));

    Ok(())
}

#[test]
fn duplicate_config_names_fail() {
    let configs = vec![
        SerializerConfig::Json { name: None, settings: None },
        SerializerConfig::Xml { name: Some("default".into()), settings: None },
    ];

    assert!(matches!(registry_from_configs(configs), Err(Error::SerializerRegistered(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_instance_serves_concurrent_calls() {
    let registry = Arc::new(registry().unwrap());
    let item = ParentExample::expected();

    let calls = (0..16).map(|i| {
        let registry = registry.clone();
        let item = item.clone();
        tokio::task::spawn_blocking(move || -> Result<String> {
            let name = if i % 2 == 0 { "default" } else { "xml" };
            let serializer = registry.get(name)?;
            let ty = TypeContract::<ParentExample>::of();

            let text = serializer.serialize_to_string(Some(&item), Some(&ty))?;
            let back: ParentExample = serializer.deserialize_from_string(Some(&text), Some(&ty))?;
            assert_eq!(back, item);
            Ok(text)
        })
    });

    let results: Vec<String> = join_all(calls)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    for pair in results.chunks(2) {
        assert_eq!(pair[0], results[0]);
        assert_eq!(pair[1], results[1]);
    }
}
