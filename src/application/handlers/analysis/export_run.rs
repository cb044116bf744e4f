//! ExportRunHandler - Renders the latest run and writes the export files.

use std::sync::Arc;

use tracing::info;

use crate::domain::fmea::AnalysisRun;
use crate::domain::foundation::RunId;
use crate::ports::{ExportError, ExportFormat, ExportSink, RunExporter, RunStore};

use super::AnalysisError;

/// Command to export the latest run. An empty format list means every format.
#[derive(Debug, Clone, Default)]
pub struct ExportRunCommand {
    pub formats: Vec<ExportFormat>,
}

impl ExportRunCommand {
    pub fn all() -> Self {
        Self::default()
    }
}

/// One written export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub location: String,
    pub size_bytes: usize,
}

/// Result of a completed export.
#[derive(Debug, Clone)]
pub struct ExportRunResult {
    pub run_id: RunId,
    pub files: Vec<ExportedFile>,
}

/// Handler for exporting the stored run.
pub struct ExportRunHandler {
    store: Arc<dyn RunStore>,
    exporters: Vec<Arc<dyn RunExporter>>,
    sink: Arc<dyn ExportSink>,
}

impl ExportRunHandler {
    pub fn new(
        store: Arc<dyn RunStore>,
        exporters: Vec<Arc<dyn RunExporter>>,
        sink: Arc<dyn ExportSink>,
    ) -> Self {
        Self {
            store,
            exporters,
            sink,
        }
    }

    /// Render the latest run in `format` without writing it anywhere.
    pub async fn render(&self, format: ExportFormat) -> Result<Vec<u8>, AnalysisError> {
        let run = self.latest_run().await?;
        Ok(self.export(&run, format)?)
    }

    pub async fn handle(&self, cmd: ExportRunCommand) -> Result<ExportRunResult, AnalysisError> {
        let run = self.latest_run().await?;
        let formats = if cmd.formats.is_empty() {
            ExportFormat::ALL.to_vec()
        } else {
            cmd.formats
        };

        let mut files = Vec::with_capacity(formats.len());
        for format in formats {
            let content = self.export(&run, format)?;
            let location = self.sink.store(format.file_name(), &content).await?;
            files.push(ExportedFile {
                format,
                location,
                size_bytes: content.len(),
            });
        }

        info!(run_id = %run.id, files = files.len(), "Analysis run exported");

        Ok(ExportRunResult {
            run_id: run.id,
            files,
        })
    }

    async fn latest_run(&self) -> Result<AnalysisRun, AnalysisError> {
        self.store
            .latest()
            .await?
            .ok_or(AnalysisError::Export(ExportError::NoRun))
    }

    fn export(&self, run: &AnalysisRun, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        self.exporters
            .iter()
            .find(|exporter| exporter.supports(format))
            .ok_or(ExportError::UnsupportedFormat(format))?
            .export(run, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CsvExporter, InMemoryRunStore, JsonExporter, LocalExportWriter};
    use crate::domain::fmea::FmeaEngine;
    use tempfile::TempDir;

    async fn seeded_store() -> Arc<InMemoryRunStore> {
        let store = Arc::new(InMemoryRunStore::new());
        let run = FmeaEngine::new().run(
            "Our market share is collapsing due to a competitor's cheaper cloud offering",
            "We will acquire a smaller rival and lay off 10% of staff",
        );
        store.replace(run).await.unwrap();
        store
    }

    fn handler(store: Arc<InMemoryRunStore>, dir: &TempDir) -> ExportRunHandler {
        ExportRunHandler::new(
            store,
            vec![
                Arc::new(CsvExporter::new()) as Arc<dyn RunExporter>,
                Arc::new(JsonExporter::new()),
            ],
            Arc::new(LocalExportWriter::new(dir.path())),
        )
    }

    #[tokio::test]
    async fn exports_every_format() {
        let dir = TempDir::new().unwrap();
        let handler = handler(seeded_store().await, &dir);

        let result = handler.handle(ExportRunCommand::all()).await.unwrap();

        assert_eq!(result.files.len(), 5);
        for name in [
            "fmea_scores.csv",
            "roadmap.csv",
            "mitigations.csv",
            "mitigation_actions.csv",
            "fmea_results.json",
        ] {
            assert!(dir.path().join(name).exists(), "{} missing", name);
        }
    }

    #[tokio::test]
    async fn exports_only_requested_formats() {
        let dir = TempDir::new().unwrap();
        let handler = handler(seeded_store().await, &dir);

        let result = handler
            .handle(ExportRunCommand {
                formats: vec![ExportFormat::RoadmapCsv],
            })
            .await
            .unwrap();

        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].format, ExportFormat::RoadmapCsv);
        assert!(!dir.path().join("fmea_scores.csv").exists());
    }

    #[tokio::test]
    async fn render_returns_scores_csv() {
        let dir = TempDir::new().unwrap();
        let handler = handler(seeded_store().await, &dir);

        let bytes = handler.render(ExportFormat::ScoresCsv).await.unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Leader,Severity,Occurrence,Detection,RPN\n"));
    }

    #[tokio::test]
    async fn export_without_run_fails() {
        let dir = TempDir::new().unwrap();
        let handler = handler(Arc::new(InMemoryRunStore::new()), &dir);

        let result = handler.handle(ExportRunCommand::all()).await;

        assert!(matches!(result, Err(AnalysisError::Export(ExportError::NoRun))));
    }

    #[tokio::test]
    async fn missing_exporter_reports_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let handler = ExportRunHandler::new(
            seeded_store().await,
            vec![Arc::new(CsvExporter::new()) as Arc<dyn RunExporter>],
            Arc::new(LocalExportWriter::new(dir.path())),
        );

        let result = handler.render(ExportFormat::JsonBundle).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Export(ExportError::UnsupportedFormat(ExportFormat::JsonBundle)))
        ));
    }
}
