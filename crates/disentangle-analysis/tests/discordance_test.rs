use disentangle_analysis::{build_equivalence_map, classify, is_discordant, EquivalenceMap, MessageStatus};
use disentangle_types::{Annotation, Message};

fn message(id: &str, annotations: Vec<(&str, &str)>) -> Message {
    Message::with_annotations(
        id,
        format!("message {id}"),
        annotations
            .into_iter()
            .map(|(annotator, thread)| Annotation::new(annotator, thread))
            .collect(),
    )
}

#[test]
fn test_unannotated_message_is_never_discordant() {
    let map = EquivalenceMap::default();
    let msg = message("1", vec![]);
    assert!(!is_discordant(&msg, &map));
    assert_eq!(classify(&msg, &map), MessageStatus::Unannotated);
}

#[test]
fn test_single_annotation_is_never_discordant() {
    let map = EquivalenceMap::default();
    let msg = message("1", vec![("x@test", "T0")]);
    assert!(!is_discordant(&msg, &map));
    assert_eq!(classify(&msg, &map), MessageStatus::Single);
}

#[test]
fn test_identical_labels_are_concordant_without_any_map() {
    let map = EquivalenceMap::default();
    let msg = message("1", vec![("x@test", "T0"), ("y@test", "T0")]);
    assert!(!is_discordant(&msg, &map));
    assert_eq!(classify(&msg, &map), MessageStatus::Concordant);
}

#[test]
fn test_different_labels_without_equivalence_are_discordant() {
    let map = EquivalenceMap::default();
    let msg = message("1", vec![("x@test", "T0"), ("y@test", "A")]);
    assert!(is_discordant(&msg, &map));
    assert_eq!(classify(&msg, &map), MessageStatus::Discordant);
}

#[test]
fn test_equivalent_labels_become_concordant() {
    let messages = vec![
        message("1", vec![("x@test", "T0"), ("y@test", "A")]),
        message("2", vec![("x@test", "T0"), ("y@test", "A")]),
        message("3", vec![("x@test", "T0"), ("y@test", "A")]),
    ];
    let map = build_equivalence_map(&messages);

    for msg in &messages {
        assert!(!is_discordant(msg, &map));
        assert_eq!(classify(msg, &map), MessageStatus::Concordant);
    }
}

#[test]
fn test_any_odd_one_out_marks_the_message_discordant() {
    let map = EquivalenceMap::default();
    let msg = message(
        "1",
        vec![("x@test", "T0"), ("y@test", "T0"), ("z@test", "T9")],
    );
    assert!(is_discordant(&msg, &map));
}
