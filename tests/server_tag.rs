use pex_context::{CalculatedSubject, Configuration, ContextDefinition, ServerTagContextDefinition};
use std::collections::HashSet;

fn tag_set(values: Vec<String>) -> HashSet<String> {
    values.into_iter().collect()
}

#[test]
fn emits_last_supplied_tags() {
    let def = ServerTagContextDefinition::new();
    let subject = CalculatedSubject::new("user", "zml");
    assert!(def.current_values(&subject).is_empty());

    def.update(&Configuration::with_server_tags(["lobby", "eu", "creative"]));
    let expected: HashSet<String> = ["lobby", "eu", "creative"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tag_set(def.current_values(&subject)), expected);
}

#[test]
fn tags_do_not_depend_on_subject() {
    let def = ServerTagContextDefinition::new();
    def.update(&Configuration::with_server_tags(["lobby"]));
    let user = CalculatedSubject::new("user", "a");
    let group = CalculatedSubject::new("group", "b");
    assert_eq!(def.current_values(&user), def.current_values(&group));
}

#[test]
fn empty_config_clears_tags() {
    let def = ServerTagContextDefinition::new();
    def.update(&Configuration::with_server_tags(["lobby"]));
    def.update(&Configuration::default());
    assert!(def.current_values(&CalculatedSubject::new("user", "a")).is_empty());
}

#[test]
fn malformed_config_means_no_tags() {
    let def = ServerTagContextDefinition::new();
    def.update(&Configuration::with_server_tags(["lobby"]));
    let cfg = Configuration::from_json_str(r#"{"server-tags": "lobby"}"#).unwrap();
    def.update(&cfg);
    assert!(def.active_tags().is_empty());
}

#[test]
fn deserialize_is_identity() {
    let def = ServerTagContextDefinition::new();
    assert_eq!(def.deserialize(" Lobby ").unwrap(), " Lobby ");
    assert_eq!(def.serialize(&"eu".to_string()), "eu");
}
