//! RunAnalysisHandler - Command handler for scoring a problem/decision pair.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::domain::fmea::{AnalysisRun, FmeaEngine, LeadershipStyle};
use crate::domain::foundation::require_text;
use crate::ports::RunStore;

use super::AnalysisError;

/// Command to analyze a problem and the decision taken about it.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub problem: String,
    pub decision: String,
}

/// Result of a completed analysis.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub run: AnalysisRun,
}

/// Handler for running the engine across all personas.
pub struct RunAnalysisHandler {
    engine: FmeaEngine,
    store: Arc<dyn RunStore>,
    persona_delay: Duration,
}

impl RunAnalysisHandler {
    pub fn new(engine: FmeaEngine, store: Arc<dyn RunStore>) -> Self {
        Self {
            engine,
            store,
            persona_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &AnalysisConfig, store: Arc<dyn RunStore>) -> Self {
        Self::new(FmeaEngine::new().with_eli5(config.include_eli5), store)
            .with_persona_delay(config.persona_delay())
    }

    /// Pause between persona evaluations. Never changes the results.
    pub fn with_persona_delay(mut self, delay: Duration) -> Self {
        self.persona_delay = delay;
        self
    }

    pub async fn handle(&self, cmd: RunAnalysisCommand) -> Result<RunAnalysisResult, AnalysisError> {
        // 1. Reject blank input before touching the engine or store
        if let Err(err) = require_text("problem", &cmd.problem)
            .and_then(|_| require_text("decision", &cmd.decision))
        {
            warn!(field = err.field(), "Analysis input rejected");
            return Err(err.into());
        }

        // 2. Shared scoring, then one persona at a time
        let context = self.engine.prepare(&cmd.problem, &cmd.decision);
        let mut assessments = Vec::with_capacity(LeadershipStyle::ALL.len());
        for style in LeadershipStyle::ALL {
            if !self.persona_delay.is_zero() {
                tokio::time::sleep(self.persona_delay).await;
            }
            assessments.push(self.engine.assess(&context, style));
        }

        // 3. Aggregate and replace the stored run
        let run = self.engine.complete(context, assessments);
        self.store.replace(run.clone()).await?;

        info!(
            run_id = %run.id,
            max_rpn = run.max_rpn(),
            roadmap_entries = run.roadmap.len(),
            "Analysis run completed"
        );

        Ok(RunAnalysisResult { run })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRunStore;
    use crate::domain::foundation::ValidationError;
    use crate::ports::RunStoreError;
    use async_trait::async_trait;

    const PROBLEM: &str = "Our market share is collapsing due to a competitor's cheaper cloud offering";
    const DECISION: &str = "We will acquire a smaller rival and lay off 10% of staff";

    struct FailingRunStore;

    #[async_trait]
    impl RunStore for FailingRunStore {
        async fn replace(&self, _run: AnalysisRun) -> Result<(), RunStoreError> {
            Err(RunStoreError::Unavailable("simulated failure".to_string()))
        }

        async fn latest(&self) -> Result<Option<AnalysisRun>, RunStoreError> {
            Ok(None)
        }

        async fn clear(&self) -> Result<(), RunStoreError> {
            Ok(())
        }
    }

    fn command(problem: &str, decision: &str) -> RunAnalysisCommand {
        RunAnalysisCommand {
            problem: problem.to_string(),
            decision: decision.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_completed_run() {
        let store = Arc::new(InMemoryRunStore::new());
        let handler = RunAnalysisHandler::new(FmeaEngine::new(), store.clone());

        let result = handler.handle(command(PROBLEM, DECISION)).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.id, result.run.id);
        assert_eq!(result.run.assessments.len(), 10);
        let autocratic = result.run.assessment(LeadershipStyle::Autocratic).unwrap();
        assert_eq!(autocratic.rpn, 180);
    }

    #[tokio::test]
    async fn blank_problem_is_rejected_and_store_untouched() {
        let store = Arc::new(InMemoryRunStore::new());
        let handler = RunAnalysisHandler::new(FmeaEngine::new(), store.clone());

        let result = handler.handle(command("   ", DECISION)).await;

        match result {
            Err(AnalysisError::Validation(ValidationError::EmptyField { field })) => {
                assert_eq!(field, "problem");
            }
            other => panic!("expected empty problem error, got {:?}", other),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn blank_decision_is_rejected_and_previous_run_kept() {
        let store = Arc::new(InMemoryRunStore::new());
        let handler = RunAnalysisHandler::new(FmeaEngine::new(), store.clone());
        let first = handler.handle(command(PROBLEM, DECISION)).await.unwrap();

        let result = handler.handle(command(PROBLEM, "")).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Validation(ValidationError::EmptyField { ref field })) if field == "decision"
        ));
        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.id, first.run.id);
    }

    #[tokio::test]
    async fn second_run_replaces_first() {
        let store = Arc::new(InMemoryRunStore::new());
        let handler = RunAnalysisHandler::new(FmeaEngine::new(), store.clone());

        handler.handle(command(PROBLEM, DECISION)).await.unwrap();
        let second = handler
            .handle(command("Supply chain delays at our key vendor", "Dual-source logistics"))
            .await
            .unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.id, second.run.id);
        assert_eq!(latest.problem, "Supply chain delays at our key vendor");
    }

    #[tokio::test]
    async fn persona_delay_does_not_change_results() {
        let store = Arc::new(InMemoryRunStore::new());
        let paced = RunAnalysisHandler::new(FmeaEngine::new(), store.clone())
            .with_persona_delay(Duration::from_millis(1));
        let unpaced = RunAnalysisHandler::new(FmeaEngine::new(), store);

        let slow = paced.handle(command(PROBLEM, DECISION)).await.unwrap();
        let fast = unpaced.handle(command(PROBLEM, DECISION)).await.unwrap();

        assert_eq!(slow.run.fingerprint(), fast.run.fingerprint());
    }

    #[tokio::test]
    async fn from_config_honors_eli5_flag() {
        let config = AnalysisConfig {
            include_eli5: false,
            ..Default::default()
        };
        let handler = RunAnalysisHandler::from_config(&config, Arc::new(InMemoryRunStore::new()));

        let result = handler.handle(command(PROBLEM, DECISION)).await.unwrap();

        assert!(result.run.assessments.iter().all(|a| a.eli5.is_none()));
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let handler = RunAnalysisHandler::new(FmeaEngine::new(), Arc::new(FailingRunStore));

        let result = handler.handle(command(PROBLEM, DECISION)).await;

        assert!(matches!(result, Err(AnalysisError::Store(_))));
    }
}
