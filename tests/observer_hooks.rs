use std::cell::RefCell;

use gin_rummy::cards::Card;
use gin_rummy::hand::Hand;
use gin_rummy::meld::Meld;
use gin_rummy::observer::{ScoringObserver, TracingObserver};
use gin_rummy::scoring::{DeadwoodReport, KnockOutcome, Scorer};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<String>>,
}

impl ScoringObserver for Recorder {
    fn on_candidates(&self, _hand: &Hand, candidates: &[Meld]) {
        self.events.borrow_mut().push(format!("candidates {}", candidates.len()));
    }

    fn on_best(&self, _hand: &Hand, report: &DeadwoodReport) {
        self.events.borrow_mut().push(format!("best {}", report.deadwood));
    }

    fn on_discard_checked(&self, discard: Card, deadwood: u32) {
        self.events.borrow_mut().push(format!("discard {discard} {deadwood}"));
    }

    fn on_knock_settled(&self, outcome: &KnockOutcome) {
        self.events.borrow_mut().push(format!("settled {:?} {}", outcome.kind, outcome.score));
    }
}

#[test]
fn observer_sees_each_stage() {
    let scorer = Scorer::new().with_observer(Recorder::default());
    let hand: Hand = "Ac Ad As 4c 5c 6c 7c Qd Th 4h".parse().unwrap();
    let report = scorer.optimal_melds(&hand);
    let events = scorer.observer().events.borrow();
    assert_eq!(*events, vec!["candidates 4".to_string(), "best 24".to_string()]);
    assert_eq!(report.deadwood, 24);
}

#[test]
fn observer_does_not_change_results() {
    let recorder = Recorder::default();
    let observed = Scorer::new().with_observer(&recorder);
    let plain = Scorer::new();
    let knocker: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c 4h".parse().unwrap();
    let opponent: Hand = "Tc Ah 2d 3d 6h 7s 8d Js Qh Kh".parse().unwrap();
    assert_eq!(
        observed.evaluate_knock(&knocker, &opponent),
        plain.evaluate_knock(&knocker, &opponent)
    );
    let events = recorder.events.borrow();
    assert!(events.last().unwrap().starts_with("settled Knock"));
}

#[test]
fn tracing_observer_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("gin_rummy=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let scorer = Scorer::new().with_observer(TracingObserver);
        let hand: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h".parse().unwrap();
        assert!(scorer.can_knock(&hand).unwrap());
        assert!(scorer.can_knock_parallel(&hand).unwrap());
    });
}
