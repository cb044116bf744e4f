//! Property tests for engine invariants over arbitrary text.

use proptest::prelude::*;

use leadership_fmea::domain::fmea::{FmeaEngine, StartBy};

const VOCABULARY: &[&str] = &[
    "acquire", "lay off", "restructure", "cloud", "regulators", "pricing", "churn",
    "supply chain", "breach", "talent", "pivot", "debt", "launch", "brand", "shut down",
];

fn text() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z ,.%']{0,300}",
        proptest::collection::vec(proptest::sample::select(VOCABULARY), 0..6),
    )
        .prop_map(|(noise, words)| format!("{} {}", noise, words.join(" ")))
}

proptest! {
    #[test]
    fn scores_and_rpn_stay_in_range(problem in text(), decision in text()) {
        let run = FmeaEngine::new().run(&problem, &decision);
        for assessment in &run.assessments {
            let (s, o, d) = assessment.score.as_tuple();
            for value in [s, o, d] {
                prop_assert!((1..=10).contains(&value));
            }
            prop_assert_eq!(assessment.rpn, u16::from(s) * u16::from(o) * u16::from(d));
            prop_assert!((1..=1000).contains(&assessment.rpn));
        }
    }

    #[test]
    fn plans_have_seven_actions_in_the_persona_bucket(problem in text(), decision in text()) {
        let run = FmeaEngine::new().run(&problem, &decision);
        for assessment in &run.assessments {
            prop_assert_eq!(assessment.mitigations.len(), 7);
            let bucket = StartBy::from_rpn(assessment.rpn);
            for action in &assessment.mitigations {
                prop_assert_eq!(action.start_by, bucket);
                prop_assert_eq!(action.rpn, assessment.rpn);
            }
        }
    }

    #[test]
    fn theme_distribution_has_positive_mass(problem in text(), decision in text()) {
        let run = FmeaEngine::new().run(&problem, &decision);
        prop_assert!(run.theme_weights.total() > 0.0);
        prop_assert!(run.theme_weights.iter().all(|(_, weight)| weight >= 0.0));
    }

    #[test]
    fn roadmap_weight_conserves_action_rpn(problem in text(), decision in text()) {
        let run = FmeaEngine::new().run(&problem, &decision);
        let actions: u32 = run.actions.iter().map(|a| u32::from(a.rpn)).sum();
        let roadmap: u32 = run.roadmap.iter().map(|e| e.weight).sum();
        prop_assert_eq!(actions, roadmap);
    }

    #[test]
    fn runs_are_deterministic(problem in text(), decision in text()) {
        let engine = FmeaEngine::new();
        let first = engine.run(&problem, &decision);
        let second = engine.run(&problem, &decision);
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
    }
}
