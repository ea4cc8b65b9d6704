use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

use crate::app::ports::{DiagnosticSink, SourceFetcher};
use crate::domain::{Group, Record};
use crate::error::Result;
use crate::pipeline::{tokenize, RowNormalizer, TabularLoader};
use crate::schema::SourceSchema;

/// Loads attendance records for one or both groups.
/// Each call is an independent snapshot; nothing is cached between loads.
pub struct AttendanceService {
    loader: TabularLoader,
    normalizer: RowNormalizer,
    group_a: SourceSchema,
    group_b: SourceSchema,
}

impl AttendanceService {
    pub fn new(fetcher: Arc<dyn SourceFetcher>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_schemas(fetcher, sink, SourceSchema::group_a(), SourceSchema::group_b())
    }

    pub fn with_schemas(
        fetcher: Arc<dyn SourceFetcher>,
        sink: Arc<dyn DiagnosticSink>,
        group_a: SourceSchema,
        group_b: SourceSchema,
    ) -> Self {
        Self {
            loader: TabularLoader::new(fetcher),
            normalizer: RowNormalizer::new(sink),
            group_a,
            group_b,
        }
    }

    pub fn schema(&self, group: Group) -> &SourceSchema {
        match group {
            Group::A => &self.group_a,
            Group::B => &self.group_b,
        }
    }

    /// Fetch, tokenize and normalize one group's source file
    pub async fn load_group(&self, group: Group) -> Result<Vec<Record>> {
        let schema = self.schema(group);
        let span = tracing::info_span!("load_group", group = %group, path = %schema.path);
        self.load_schema(schema).instrument(span).await
    }

    async fn load_schema(&self, schema: &SourceSchema) -> Result<Vec<Record>> {
        let text = self.loader.fetch_text(schema).await?;
        let rows = tokenize(&text, &schema.path).map_err(|e| {
            error!(error = %e, "Tokenization failed");
            e
        })?;

        if rows.is_empty() {
            warn!("Source parsed successfully but contained no data rows");
            return Ok(Vec::new());
        }

        let records = self.normalizer.normalize_batch(&rows, schema);
        info!(rows = rows.len(), records = records.len(), "Loaded group");
        Ok(records)
    }

    /// Load both groups concurrently. Either failing fails the whole load,
    /// so one group is never shown without the other.
    pub async fn load_all(&self) -> Result<Vec<Record>> {
        let (mut a, b) = tokio::try_join!(self.load_group(Group::A), self.load_group(Group::B))
            .map_err(|e| {
                error!(error = %e, "Failed to load attendance data");
                e
            })?;
        a.extend(b);
        Ok(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::FetchResponse;
    use crate::error::PortalError;
    use crate::infra::diagnostics::CollectingSink;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<&'static str, FetchResponse>);

    #[async_trait]
    impl SourceFetcher for MapFetcher {
        async fn fetch(&self, path: &str) -> std::result::Result<FetchResponse, String> {
            Ok(self
                .0
                .get(path)
                .cloned()
                .unwrap_or_else(|| FetchResponse::status(404)))
        }
    }

    fn service(files: &[(&'static str, &str)]) -> (AttendanceService, Arc<CollectingSink>) {
        let map = files
            .iter()
            .map(|(p, body)| (*p, FetchResponse::ok(*body)))
            .collect();
        let sink = Arc::new(CollectingSink::new());
        (AttendanceService::new(Arc::new(MapFetcher(map)), sink.clone()), sink)
    }

    const A: &str = "Roll no,Name,Percentage,profileImage\n1,Ali,90%,/p/1.jpg\n2,Omar,79.6%,\n";
    const B: &str = "Roll No,Name,Attendance,Percentage\n1,Hina,22,100%\n";

    #[tokio::test]
    async fn load_all_merges_groups_in_order() {
        let (svc, _) = service(&[("/male_attendance.csv", A), ("/ladies_attendance.csv", B)]);
        let records = svc.load_all().await.unwrap();
        let keys: Vec<(Group, i64)> = records.iter().map(|r| (r.group, r.identifier)).collect();
        assert_eq!(keys, vec![(Group::A, 1), (Group::A, 2), (Group::B, 1)]);
    }

    #[tokio::test]
    async fn missing_group_fails_combined_load() {
        let (svc, _) = service(&[("/male_attendance.csv", A)]);
        assert!(svc.load_group(Group::A).await.is_ok());
        match svc.load_all().await {
            Err(PortalError::NotFound { path }) => assert_eq!(path, "/ladies_attendance.csv"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn header_only_source_is_empty_success() {
        let (svc, _) = service(&[("/ladies_attendance.csv", "Roll No,Name,Attendance,Percentage\n")]);
        assert!(svc.load_group(Group::B).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn overridden_path_is_used() {
        let (_, sink) = service(&[]);
        let map = [("/data/a.csv", FetchResponse::ok(A))].into_iter().collect();
        let svc = AttendanceService::with_schemas(
            Arc::new(MapFetcher(map)),
            sink,
            SourceSchema::group_a().with_path("/data/a.csv"),
            SourceSchema::group_b(),
        );
        assert_eq!(svc.load_group(Group::A).await.unwrap().len(), 2);
    }
}
