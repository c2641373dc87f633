// Composition tests: the whole train -> persist -> classify -> evaluate
// chain over small datasets written to a temp directory.

use std::fs;
use std::path::Path;

use chrono::Utc;
use topicgram::error::{ConfigurationError, DocumentError};
use topicgram::model::classifier::{classify, classify_document, DocumentOutcome};
use topicgram::model::registry::TopicRegistry;
use topicgram::model::signature::{build_signature, TopicSignature};
use topicgram::pipeline::{evaluate, train};
use topicgram::text::ngrams::NGramSet;
use topicgram::text::stopwords::StopWords;

fn set(grams: &[&str]) -> NGramSet {
    grams.iter().map(|g| g.to_string()).collect()
}

fn signature(name: &str, grams: &[&str]) -> TopicSignature {
    TopicSignature {
        name: name.to_string(),
        documents: 1,
        ngrams: set(grams),
    }
}

fn write_doc(dir: &Path, name: &str, text: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

// ============================================================
// Classification against fixed signatures
// ============================================================

#[test]
fn exact_signature_match_classifies_with_full_similarity() {
    let signatures = vec![set(&["ab", "bc"]), set(&["xy", "yz"])];
    let names = vec!["A".to_string(), "B".to_string()];

    let result = classify(&set(&["ab", "bc"]), &signatures, &names).unwrap();
    assert_eq!(result.topic, "A");
    assert_eq!(result.scores, vec![1.0, 0.0]);
}

#[test]
fn registry_and_free_classify_agree() {
    let registry = TopicRegistry::new(
        vec![
            signature("sports", &["soccer ball", "ball game"]),
            signature("tech", &["soccer ball"]),
        ],
        Utc::now(),
    )
    .unwrap();
    let signatures: Vec<NGramSet> = registry.topics().iter().map(|t| t.ngrams.clone()).collect();
    let names: Vec<String> = registry.topic_names().map(String::from).collect();

    let doc = set(&["soccer ball", "ball game", "game over"]);
    let via_registry = registry.classify(&doc).unwrap();
    let via_lists = classify(&doc, &signatures, &names).unwrap();

    assert_eq!(via_registry, via_lists);
    assert_eq!(via_registry.topic, "sports");
    assert!((via_registry.similarity - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn signature_union_ignores_document_order() {
    let docs = vec![set(&["a b", "b c"]), set(&["c d"]), set(&["b c", "e f"])];
    let reordered = vec![docs[2].clone(), docs[0].clone(), docs[1].clone()];
    assert_eq!(build_signature(docs), build_signature(reordered));
}

// ============================================================
// Train -> save -> load -> classify
// ============================================================

#[test]
fn trained_model_round_trips_and_classifies() {
    let dir = tempfile::tempdir().unwrap();
    let train_dir = dir.path().join("train");
    write_doc(&train_dir.join("cooking"), "1", "Slice the onions and fry the garlic in olive oil.");
    write_doc(&train_dir.join("cooking"), "2", "Bake the bread at high heat, then fry garlic.");
    write_doc(&train_dir.join("space"), "1", "The rocket launch reached low earth orbit.");
    write_doc(&train_dir.join("space"), "2", "A crewed rocket launch to the space station.");

    let stop = StopWords::from_lines(["the", "and", "a", "in", "at", "to", "then"]);
    let (registry, summary) = train::run(&train_dir, &stop).unwrap();
    assert_eq!(summary.documents(), 4);

    let model_path = dir.path().join("results").join("model.json");
    registry.save(&model_path).unwrap();
    let loaded = TopicRegistry::load(&model_path).unwrap();
    assert_eq!(loaded.topic_names().collect::<Vec<_>>(), vec!["cooking", "space"]);

    let query = dir.path().join("query.txt");
    fs::write(&query, "Next rocket launch will reach orbit soon").unwrap();
    match classify_document(&query, &stop, &loaded).unwrap() {
        DocumentOutcome::Classified(c) => assert_eq!(c.topic, "space"),
        DocumentOutcome::Unclassifiable(e) => panic!("expected a topic, got {e}"),
    }
}

#[test]
fn unreadable_document_is_unclassifiable_not_a_topic() {
    let registry = TopicRegistry::new(vec![signature("only", &["a b"])], Utc::now()).unwrap();
    let outcome = classify_document(
        Path::new("/no/such/document"),
        &StopWords::default(),
        &registry,
    )
    .unwrap();
    assert!(matches!(
        outcome,
        DocumentOutcome::Unclassifiable(DocumentError::Read { .. })
    ));
}

#[test]
fn empty_registry_is_fatal() {
    let err = classify(&set(&["a b"]), &[], &[]).unwrap_err();
    assert_eq!(err, ConfigurationError::Empty);
}

// ============================================================
// Evaluation
// ============================================================

#[test]
fn evaluation_reports_seventy_percent_and_excludes_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let news = dir.path().join("news");
    for i in 0..7 {
        write_doc(&news, &format!("ok-{i}"), "stock market rally");
    }
    for i in 0..3 {
        write_doc(&news, &format!("miss-{i}"), "soccer ball game");
    }
    // Invalid UTF-8 cannot be read as text
    fs::write(news.join("broken"), [0xffu8, 0xfe, 0xfd]).unwrap();
    // Degenerate: a single token
    write_doc(&news, "short", "stock");

    let registry = TopicRegistry::new(
        vec![
            signature("news", &["stock market", "market rally"]),
            signature("sports", &["soccer ball", "ball game"]),
        ],
        Utc::now(),
    )
    .unwrap();

    let report = evaluate::run(dir.path(), &StopWords::default(), &registry).unwrap();

    assert_eq!(report.topics.len(), 1);
    let tally = &report.topics[0];
    assert_eq!(tally.name, "news");
    assert_eq!(tally.attempted, 10);
    assert_eq!(tally.correct, 7);
    assert_eq!(tally.skipped, 2);
    assert_eq!(tally.rate(), Some(70.0));

    assert_eq!(report.files_tested(), 10);
    assert_eq!(report.aggregate_rate(), Some(70.0));
    assert_eq!(report.chance_rate(), 50.0);
}

#[test]
fn evaluation_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(&dir.path().join("a"), "1", "alpha beta gamma");
    write_doc(&dir.path().join("b"), "1", "delta epsilon zeta");
    write_doc(&dir.path().join("b"), "2", "alpha beta delta");

    let stop = StopWords::default();
    let (registry, _) = train::run(dir.path(), &stop).unwrap();

    let first = evaluate::run(dir.path(), &stop, &registry).unwrap();
    let second = evaluate::run(dir.path(), &stop, &registry).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.topics.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}
