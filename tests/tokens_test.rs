use modkit::identifiers::Identifiers;
use modkit::tokens::{expand_content, expand_path, tokenize_content, tokenize_path};

fn sample_identifiers() -> Identifiers {
    Identifiers::validated(
        "com.acme.mymod".to_string(),
        "mymod".to_string(),
        "MyMod".to_string(),
        "My Mod".to_string(),
        "Does mod things".to_string(),
    )
    .unwrap()
}

#[test]
fn test_tokenize_path_replaces_package_directories() {
    assert_eq!(
        tokenize_path("src/main/java/net/example/examplemodid/Foo.java"),
        "src/main/java/!@PKG/Foo.java"
    );
}

#[test]
fn test_tokenize_path_replaces_dotted_package_form() {
    // The package marker also occurs dotted inside file names.
    assert_eq!(
        tokenize_path("src/main/resources/net.example.examplemodid.json"),
        "src/main/resources/!@PKG.json"
    );
}

#[test]
fn test_tokenize_path_replaces_remaining_markers() {
    assert_eq!(
        tokenize_path("net/example/examplemodid/ExampleModName.java"),
        "!@PKG/!@NAME.java"
    );
    assert_eq!(tokenize_path("assets/examplemodid/icon.png"), "assets/!@MODID/icon.png");
}

#[test]
fn test_tokenize_content_consumes_qualified_package_first() {
    // The qualified reference embeds the bare mod id; a wrong pass order
    // would leave "net.example.!@MODID" behind.
    let content = "package net.example.examplemodid;\nid = examplemodid\n";
    let tokenized = tokenize_content(content);
    assert_eq!(tokenized, "package !@PKG;\nid = !@MODID\n");
    assert!(!tokenized.contains("net.example"));
}

#[test]
fn test_tokenize_content_replaces_all_markers() {
    let content = "ExampleModName by examplemodid: Example Display Name / Example Description";
    assert_eq!(tokenize_content(content), "!@NAME by !@MODID: !@DISP / !@DESC");
}

#[test]
fn test_expand_path_uses_slash_form_package() {
    let ids = sample_identifiers();
    assert_eq!(expand_path("!@PKG/Foo.java", &ids), "com/acme/mymod/Foo.java");
    assert_eq!(expand_path("assets/!@MODID/icon.png", &ids), "assets/mymod/icon.png");
    assert_eq!(expand_path("!@NAME.java", &ids), "MyMod.java");
}

#[test]
fn test_expand_content_uses_dotted_form_package() {
    let ids = sample_identifiers();
    let expanded = expand_content("package !@PKG;\nid = !@MODID\n", &ids);
    assert_eq!(expanded, "package com.acme.mymod;\nid = mymod\n");
}

#[test]
fn test_expand_content_substitutes_free_form_values() {
    let ids = sample_identifiers();
    assert_eq!(
        expand_content("\"name\": \"!@DISP\", \"description\": \"!@DESC\"", &ids),
        "\"name\": \"My Mod\", \"description\": \"Does mod things\""
    );
}

#[test]
fn test_expand_allows_empty_display_and_description() {
    let ids = Identifiers::validated(
        "com.acme.mymod".to_string(),
        "mymod".to_string(),
        "MyMod".to_string(),
        String::new(),
        String::new(),
    )
    .unwrap();
    assert_eq!(expand_content("[!@DISP][!@DESC]", &ids), "[][]");
}
