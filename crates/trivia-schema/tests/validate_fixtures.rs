//! Integration test: every trivia and theme file shipped in the repository
//! validates, decodes, and survives a serialize/parse round trip. Generated
//! themes cover the optional sections the shipped files leave out.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use serde_json::{json, Value};
use trivia_schema::{
    load_theme, load_theme_file, load_trivia, load_trivia_file, SchemaKind, SchemaValidator,
};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|e| e == "json"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

#[test]
fn test_shipped_trivia_files_validate() {
    let validator = SchemaValidator::new().expect("schemas compile");
    let files = json_files(&repo_root().join("trivia_configs"));
    assert!(!files.is_empty(), "no trivia fixtures found");

    let failed: Vec<String> = files
        .iter()
        .filter_map(|p| load_trivia_file(&validator, p).err().map(|e| format!("{}: {e}", p.display())))
        .collect();
    assert!(failed.is_empty(), "trivia fixtures failed:\n{}", failed.join("\n"));
}

#[test]
fn test_shipped_theme_files_validate() {
    let validator = SchemaValidator::new().expect("schemas compile");
    let files = json_files(&repo_root().join("themes"));
    assert!(!files.is_empty(), "no theme fixtures found");

    let failed: Vec<String> = files
        .iter()
        .filter_map(|p| load_theme_file(&validator, p).err().map(|e| format!("{}: {e}", p.display())))
        .collect();
    assert!(failed.is_empty(), "theme fixtures failed:\n{}", failed.join("\n"));
}

#[test]
fn test_validation_is_idempotent_across_round_trip() {
    let validator = SchemaValidator::new().unwrap();
    for path in json_files(&repo_root().join("themes")) {
        let loaded = load_theme_file(&validator, &path).unwrap();
        let bytes = serde_json::to_vec_pretty(&loaded.raw).unwrap();
        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reparsed, loaded.raw);
        let report = validator.validate(&reparsed, SchemaKind::Theme);
        assert!(report.valid, "{} failed after round trip:\n{report}", path.display());
    }
}

#[test]
fn test_typed_theme_reserializes_to_valid_document() {
    let validator = SchemaValidator::new().unwrap();
    for path in json_files(&repo_root().join("themes")) {
        let loaded = load_theme_file(&validator, &path).unwrap();
        let typed = serde_json::to_value(&loaded.document).unwrap();
        assert!(
            validator.is_valid(&typed, SchemaKind::Theme),
            "typed view of {} no longer validates",
            path.display()
        );
    }
}

fn trivia_with(question: &str, answer: &str, subsub: &str) -> Value {
    json!({
        "questions": [{
            "id": 1,
            "question": question,
            "answer": answer,
            "category": { "main": "m", "sub": "s", "subsub": subsub }
        }]
    })
}

proptest! {
    #[test]
    fn nonempty_strings_always_accepted(
        question in ".{1,40}",
        answer in ".{1,40}",
        subsub in ".{1,20}",
    ) {
        let validator = SchemaValidator::new().unwrap();
        let doc = trivia_with(&question, &answer, &subsub);
        let bytes = serde_json::to_vec(&doc).unwrap();
        let loaded = load_trivia(&validator, &bytes).unwrap();
        prop_assert_eq!(&loaded.document.questions[0].question, &question);
    }

    #[test]
    fn empty_subsub_always_rejected(question in ".{1,40}") {
        let validator = SchemaValidator::new().unwrap();
        let doc = trivia_with(&question, "a", "");
        let report = validator.validate(&doc, SchemaKind::Trivia);
        prop_assert!(!report.valid);
        prop_assert_eq!(report.errors[0].instance_path.as_str(), "/questions/0/category/subsub");
    }
}

fn color() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-fA-F]{3}",
        "#[0-9a-fA-F]{6}",
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("rgb({r},{g},{b})")),
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=10)
            .prop_map(|(r, g, b, a)| format!("rgba({r},{g},{b},0.{a})")),
    ]
}

// Multiples of 0.05 print and parse back exactly.
fn unit_interval() -> impl Strategy<Value = f64> {
    (0u8..=20).prop_map(|n| f64::from(n) / 20.0)
}

fn background() -> impl Strategy<Value = Value> {
    prop_oneof![
        color().prop_map(|c| json!({ "type": "solid", "solid": c })),
        (color(), proptest::option::of(color()), color(), "to-(r|l|t|b|br|tr)").prop_map(
            |(from, via, to, direction)| {
                let mut gradient = json!({ "from": from, "to": to, "direction": direction });
                if let Some(via) = via {
                    gradient["via"] = json!(via);
                }
                json!({ "type": "gradient", "gradient": gradient })
            }
        ),
    ]
}

fn fill() -> impl Strategy<Value = Value> {
    prop_oneof![
        color().prop_map(Value::String),
        (color(), color()).prop_map(|(from, to)| {
            json!({ "type": "gradient", "gradient": { "from": from, "to": to } })
        }),
    ]
}

fn shape() -> impl Strategy<Value = Value> {
    (
        color(),
        unit_interval(),
        prop::sample::select(vec!["top-left", "top-right", "bottom-left", "bottom-right", "center"]),
        prop::sample::select(vec!["small", "medium", "large"]),
    )
        .prop_map(|(color, opacity, position, size)| {
            json!({ "color": color, "opacity": opacity, "position": position, "size": size })
        })
}

fn background_image() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[a-z]{1,8}/[a-z]{1,8}\\.png"),
        proptest::option::of(unit_interval()),
        proptest::option::of(prop::sample::select(vec!["cover", "contain", "auto"])),
        proptest::option::of(prop::sample::select(vec!["center", "top", "bottom left"])),
    )
        .prop_map(|(path, opacity, size, position)| {
            let mut image = json!({});
            if let Some(path) = path {
                image["path"] = json!(path);
            }
            if let Some(opacity) = opacity {
                image["opacity"] = json!(opacity);
            }
            if let Some(size) = size {
                image["size"] = json!(size);
            }
            if let Some(position) = position {
                image["position"] = json!(position);
            }
            image
        })
}

prop_compose! {
    fn theme()(
        name in "[A-Za-z][A-Za-z ]{0,49}",
        description in ".{0,80}",
        background in background(),
        answer_bg in proptest::option::of(fill()),
        progress_fill in fill(),
        shapes in proptest::option::of(prop::collection::vec(shape(), 0..5)),
        image in proptest::option::of(background_image()),
        speed in prop::sample::select(vec!["slow", "normal", "fast"]),
        animations_enabled in any::<bool>(),
        duration in 0u32..2000,
    ) -> Value {
        let badge = json!({ "bg": "#1e293b", "text": "#fff", "border": "#334155" });
        let entry = json!({ "size": "text-4xl", "weight": "font-bold" });
        let mut doc = json!({
            "name": name,
            "description": description,
            "colors": {
                "background": background,
                "text": { "primary": "#ffffff", "secondary": "#cbd5e1" },
                "categories": { "main": badge.clone(), "sub": badge.clone(), "subsub": badge },
                "answer": { "text": "#ffffff", "border": "#34d399" },
                "progressBar": { "background": "rgba(255,255,255,0.2)", "fill": progress_fill }
            },
            "typography": {
                "title": entry.clone(), "question": entry.clone(), "answer": entry.clone(),
                "category": { "main": entry.clone(), "sub": entry.clone(), "subsub": entry }
            },
            "animations": {
                "enabled": animations_enabled,
                "shapes": { "enabled": shapes.is_some(), "speed": speed },
                "transitions": { "enabled": true, "duration": duration }
            },
            "layout": {
                "spacing": { "question": "mb-16", "categories": "mb-12", "answer": "px-16 py-12" },
                "borderRadius": { "categories": "rounded-full", "answer": "rounded-3xl" }
            }
        });
        if let Some(bg) = answer_bg {
            doc["colors"]["answer"]["bg"] = bg;
        }
        if let Some(shapes) = shapes {
            doc["colors"]["shapes"] = Value::Array(shapes);
        }
        if let Some(image) = image {
            doc["backgroundImage"] = image;
        }
        doc
    }
}

proptest! {
    #[test]
    fn generated_themes_validate_idempotently(doc in theme()) {
        let validator = SchemaValidator::new().unwrap();
        let report = validator.validate(&doc, SchemaKind::Theme);
        prop_assert!(report.valid, "generated theme rejected:\n{}", report);

        let bytes = serde_json::to_vec_pretty(&doc).unwrap();
        let loaded = load_theme(&validator, &bytes).unwrap();
        prop_assert_eq!(&loaded.raw, &doc);
        let again = validator.validate(&loaded.raw, SchemaKind::Theme);
        prop_assert_eq!(&again, &report);

        let typed = serde_json::to_value(&loaded.document).unwrap();
        prop_assert!(validator.is_valid(&typed, SchemaKind::Theme));
    }
}
