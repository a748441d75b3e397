use pretty_assertions::assert_eq;
use tagsync_engine::{
    reconcile, FieldValue, GatingConfig, MappingRule, MetadataMap, Reconciled, RuleState, Strategy,
    ValuePair,
};

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn apply(out: Reconciled) -> (Vec<String>, RuleState) {
    match out {
        Reconciled::Applied { tags, state } => (tags.unwrap_or_default(), state),
        Reconciled::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
    }
}

fn book_rules() -> Vec<MappingRule> {
    vec![
        MappingRule {
            field: "genre".into(),
            strategy: Strategy::Direct,
        },
        MappingRule {
            field: "status".into(),
            strategy: Strategy::Enumerated {
                pairs: vec![
                    ValuePair { value: "done".into(), tag: "state/complete".into() },
                    ValuePair { value: "wip".into(), tag: "state/active".into() },
                ],
            },
        },
        MappingRule {
            field: "author".into(),
            strategy: Strategy::Reference { prefix: "people/".into() },
        },
    ]
}

fn book_metadata() -> MetadataMap {
    let mut meta = MetadataMap::new();
    meta.insert("genre".into(), FieldValue::String("Sci-Fi/Space Opera!".into()));
    meta.insert("status".into(), FieldValue::String("wip".into()));
    meta.insert(
        "author".into(),
        FieldValue::String("[[Authors/Iain Banks.md|Banks]]".into()),
    );
    meta
}

#[test]
fn reconcile_is_idempotent_once_state_settles() {
    let rules = book_rules();
    let gating = GatingConfig::default();
    let meta = book_metadata();

    let (first, state) = apply(reconcile(
        &tags(&["source/book"]),
        &meta,
        &rules,
        &gating,
        &RuleState::default(),
    ));
    let (second, state2) = apply(reconcile(&first, &meta, &rules, &gating, &state));

    assert_eq!(second, first);
    assert_eq!(state2, state);

    // And a third run is a storage no-op.
    let out = reconcile(&second, &meta, &rules, &gating, &state2);
    assert!(!out.changes(&second));
}

#[test]
fn direct_state_threads_across_value_changes() {
    let rules = vec![MappingRule {
        field: "priority".into(),
        strategy: Strategy::Direct,
    }];
    let gating = GatingConfig::default();

    let mut meta = MetadataMap::new();
    meta.insert("priority".into(), FieldValue::String("urgent".into()));
    let (first, state) = apply(reconcile(&[], &meta, &rules, &gating, &RuleState::default()));
    assert_eq!(first, tags(&["urgent"]));

    meta.insert("priority".into(), FieldValue::String("low".into()));
    let (second, state) = apply(reconcile(&first, &meta, &rules, &gating, &state));
    assert_eq!(second, tags(&["low"]));

    // Removing the field retracts the last tag and clears the memory.
    meta.remove("priority");
    let out = reconcile(&second, &meta, &rules, &gating, &state);
    match out {
        Reconciled::Applied { tags, state } => {
            assert_eq!(tags, None);
            assert!(state.is_empty());
        }
        other => panic!("expected applied, got {other:?}"),
    }
}

#[test]
fn stale_state_without_matching_tag_is_harmless() {
    // State remembers a value whose tag the user already deleted by hand:
    // retraction of a missing tag is a no-op, emission still converges.
    let rules = vec![MappingRule {
        field: "genre".into(),
        strategy: Strategy::Direct,
    }];
    let mut state = RuleState::default();
    state.record("genre", Some("Horror".into()));

    let mut meta = MetadataMap::new();
    meta.insert("genre".into(), FieldValue::String("Romance".into()));

    let (out, _) = apply(reconcile(
        &tags(&["keeper"]),
        &meta,
        &rules,
        &GatingConfig::default(),
        &state,
    ));
    assert_eq!(out, tags(&["keeper", "Romance"]));
}

#[test]
fn gated_documents_keep_their_state() {
    let rules = vec![MappingRule {
        field: "genre".into(),
        strategy: Strategy::Direct,
    }];
    let gating = GatingConfig {
        require: vec![],
        block: vec!["no-sync".into()],
    };
    let mut state = RuleState::default();
    state.record("genre", Some("Horror".into()));

    let mut meta = MetadataMap::new();
    meta.insert("genre".into(), FieldValue::String("Romance".into()));

    let out = reconcile(&tags(&["no-sync", "Horror"]), &meta, &rules, &gating, &state);
    assert_eq!(
        out,
        Reconciled::Skipped(tagsync_engine::SkipReason::Blocked)
    );
}
