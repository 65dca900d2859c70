//! Tests for the node-kind catalog and its adjacency table.
use keiro::prelude::*;
use std::str::FromStr;

fn expected_targets(kind: NodeKind) -> &'static [NodeKind] {
    use NodeKind::*;
    match kind {
        Email => &[Product, Conditional, Notification],
        Product => &[Exception, Invoice, Conditional, PriceAdjustment, Notification],
        Exception => &[Invoice, Conditional, Notification],
        Invoice => &[],
        Conditional => &[Email, Product, Exception, Invoice, PriceAdjustment, Notification],
        PriceAdjustment => &[Invoice, Notification],
        Notification => &[],
        RetailerGroup => &[Conditional, PriceAdjustment, Notification, Invoice],
    }
}

#[test]
fn adjacency_table_matches_exactly() {
    for kind in NodeKind::ALL {
        assert_eq!(
            kind.allowed_targets(),
            expected_targets(kind),
            "allowed targets for {kind} diverged from the declared table"
        );
    }
}

#[test]
fn validator_agrees_with_table_on_all_64_pairs() {
    for source in NodeKind::ALL {
        for target in NodeKind::ALL {
            let expected = source.allowed_targets().contains(&target);
            let result = connection::check(source, target);
            assert_eq!(
                result.is_ok(),
                expected,
                "check({source}, {target}) disagreed with the adjacency table"
            );
            if let Err(err) = result {
                assert_eq!(err.source_kind, source);
                assert_eq!(err.target_kind, target);
                assert_eq!(err.allowed, source.allowed_targets());
            }
        }
    }
}

#[test]
fn terminal_kinds() {
    let terminals: Vec<NodeKind> = NodeKind::ALL
        .into_iter()
        .filter(|k| k.is_terminal())
        .collect();
    assert_eq!(terminals, vec![NodeKind::Invoice, NodeKind::Notification]);
}

#[test]
fn wire_form_round_trips() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_str(kind.as_str()), Ok(kind));
        // serde representation matches as_str
        let json = serde_json::to_string(&kind).expect("kind serializes");
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
    assert!(NodeKind::from_str("emial").is_err());
}

#[test]
fn labels_are_nonempty_and_distinct() {
    let mut labels: Vec<&str> = NodeKind::ALL.into_iter().map(NodeKind::label).collect();
    assert!(labels.iter().all(|l| !l.is_empty()));
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), NodeKind::ALL.len());
}
