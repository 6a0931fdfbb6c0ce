//! Month-over-month task analytics.
//!
//! "This period" is the current calendar month, "last period" the previous
//! one, so the two periods can have different lengths. Five task slices are
//! counted independently for both periods (ten store queries); there is no
//! cross-slice derivation and no transactional read, so the fields may be
//! mutually inconsistent if tasks change between sub-queries. Any store
//! failure aborts the whole aggregation.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{collections, TaskStatus};
use crate::store::{DocumentStore, Filter, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not compute period boundaries for {0}")]
    Period(DateTime<Utc>),
}

#[derive(Debug, Clone, Copy)]
pub enum AnalyticsScope {
    Workspace(Uuid),
    Project(Uuid),
}

impl AnalyticsScope {
    fn filter(self) -> Filter {
        match self {
            AnalyticsScope::Workspace(id) => Filter::eq("workspace_id", id.to_string()),
            AnalyticsScope::Project(id) => Filter::eq("project_id", id.to_string()),
        }
    }
}

/// Flat report under stable field names; counts pair with the
/// month-over-month difference (`this - last`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    pub task_count: u64,
    pub task_difference: i64,
    pub assigned_task_count: u64,
    pub assigned_task_difference: i64,
    pub incomplete_task_count: u64,
    pub incomplete_task_difference: i64,
    pub completed_task_count: u64,
    pub completed_task_difference: i64,
    pub overdue_task_count: u64,
    pub overdue_task_difference: i64,
}

/// Half-open calendar-month range `[start, end)`.
#[derive(Debug, Clone, Copy)]
struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// (this period, last period) around `now`, aligned to calendar months.
fn periods(now: DateTime<Utc>) -> Option<(Period, Period)> {
    let (year, month) = (now.year(), now.month());
    let (next_y, next_m) = next_month(year, month);
    let (prev_y, prev_m) = prev_month(year, month);

    let this_start = month_start(year, month)?;
    let this_end = month_start(next_y, next_m)?;
    let last_start = month_start(prev_y, prev_m)?;

    Some((
        Period { start: this_start, end: this_end },
        Period { start: last_start, end: this_start },
    ))
}

async fn count_tasks(
    store: &dyn DocumentStore,
    scope: AnalyticsScope,
    slice: &[Filter],
    period: Period,
) -> Result<u64, StoreError> {
    let mut filters = vec![
        scope.filter(),
        Filter::Gte("created_at", period.start.to_rfc3339().into()),
        Filter::Lt("created_at", period.end.to_rfc3339().into()),
    ];
    filters.extend_from_slice(slice);
    Ok(store.list(collections::TASKS, &filters).await?.total)
}

async fn slice_pair(
    store: &dyn DocumentStore,
    scope: AnalyticsScope,
    slice: &[Filter],
    this_period: Period,
    last_period: Period,
) -> Result<(u64, i64), StoreError> {
    let this_count = count_tasks(store, scope, slice, this_period).await?;
    let last_count = count_tasks(store, scope, slice, last_period).await?;
    Ok((this_count, this_count as i64 - last_count as i64))
}

/// Aggregate task analytics for a workspace or project as of `now`.
/// `assignee_member_id` is the requesting actor's member record in the
/// relevant workspace; it scopes the "assigned" slice only.
pub async fn aggregate(
    store: &dyn DocumentStore,
    scope: AnalyticsScope,
    assignee_member_id: Uuid,
    now: DateTime<Utc>,
) -> Result<AnalyticsReport, AnalyticsError> {
    let (this_period, last_period) = periods(now).ok_or(AnalyticsError::Period(now))?;

    let done = TaskStatus::Done.as_str();

    let (task_count, task_difference) =
        slice_pair(store, scope, &[], this_period, last_period).await?;

    let (assigned_task_count, assigned_task_difference) = slice_pair(
        store,
        scope,
        &[Filter::eq("assignee_id", assignee_member_id.to_string())],
        this_period,
        last_period,
    )
    .await?;

    let (incomplete_task_count, incomplete_task_difference) = slice_pair(
        store,
        scope,
        &[Filter::ne("status", done)],
        this_period,
        last_period,
    )
    .await?;

    let (completed_task_count, completed_task_difference) = slice_pair(
        store,
        scope,
        &[Filter::eq("status", done)],
        this_period,
        last_period,
    )
    .await?;

    // "now" here is the request instant, not a period boundary
    let (overdue_task_count, overdue_task_difference) = slice_pair(
        store,
        scope,
        &[
            Filter::ne("status", done),
            Filter::Lt("due_date", now.to_rfc3339().into()),
        ],
        this_period,
        last_period,
    )
    .await?;

    Ok(AnalyticsReport {
        task_count,
        task_difference,
        assigned_task_count,
        assigned_task_difference,
        incomplete_task_count,
        incomplete_task_difference,
        completed_task_count,
        completed_task_difference,
        overdue_task_count,
        overdue_task_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ListResult, MemoryStore};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    async fn seed_task(
        store: &MemoryStore,
        workspace_id: Uuid,
        assignee_id: Uuid,
        status: TaskStatus,
        created_at: &str,
        due_date: &str,
    ) {
        store
            .create(
                collections::TASKS,
                json!({
                    "name": "task",
                    "workspace_id": workspace_id.to_string(),
                    "project_id": Uuid::new_v4().to_string(),
                    "assignee_id": assignee_id.to_string(),
                    "status": status.as_str(),
                    "created_at": created_at,
                    "due_date": due_date,
                }),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn counts_match_manual_period_filtering() {
        let store = MemoryStore::new();
        let workspace_id = Uuid::new_v4();
        let me = Uuid::new_v4();
        let someone = Uuid::new_v4();
        let now = at("2026-03-15T12:00:00Z");

        // this period (March 2026)
        // period start is inclusive
        seed_task(&store, workspace_id, me, TaskStatus::Todo, "2026-03-01T00:00:00Z", "2026-04-01T00:00:00Z").await;
        seed_task(&store, workspace_id, someone, TaskStatus::Done, "2026-03-10T08:00:00Z", "2026-03-20T00:00:00Z").await;
        // overdue: not done and due before "now"
        seed_task(&store, workspace_id, someone, TaskStatus::InProgress, "2026-03-12T08:00:00Z", "2026-03-14T00:00:00Z").await;

        // last period (February 2026)
        seed_task(&store, workspace_id, me, TaskStatus::Done, "2026-02-28T23:59:59Z", "2026-03-05T00:00:00Z").await;
        seed_task(&store, workspace_id, someone, TaskStatus::Todo, "2026-02-10T08:00:00Z", "2026-03-01T00:00:00Z").await;

        // outside both periods
        seed_task(&store, workspace_id, me, TaskStatus::Todo, "2026-01-31T23:59:59Z", "2026-02-15T00:00:00Z").await;
        // other workspace, inside this period
        seed_task(&store, Uuid::new_v4(), me, TaskStatus::Todo, "2026-03-05T00:00:00Z", "2026-04-01T00:00:00Z").await;

        let report = aggregate(&store, AnalyticsScope::Workspace(workspace_id), me, now)
            .await
            .unwrap();

        assert_eq!(report.task_count, 3);
        assert_eq!(report.task_difference, 1);
        assert_eq!(report.assigned_task_count, 1);
        assert_eq!(report.assigned_task_difference, 0);
        assert_eq!(report.incomplete_task_count, 2);
        assert_eq!(report.incomplete_task_difference, 1);
        assert_eq!(report.completed_task_count, 1);
        assert_eq!(report.completed_task_difference, 0);
        assert_eq!(report.overdue_task_count, 1);
        assert_eq!(report.overdue_task_difference, 0);
    }

    #[tokio::test]
    async fn project_scope_counts_only_that_project() {
        let store = MemoryStore::new();
        let workspace_id = Uuid::new_v4();
        let project_id = Uuid::new_v4();
        let me = Uuid::new_v4();
        let now = at("2026-03-15T12:00:00Z");

        store
            .create(
                collections::TASKS,
                json!({
                    "name": "in project",
                    "workspace_id": workspace_id.to_string(),
                    "project_id": project_id.to_string(),
                    "assignee_id": me.to_string(),
                    "status": "TODO",
                    "created_at": "2026-03-02T00:00:00Z",
                    "due_date": "2026-04-01T00:00:00Z",
                }),
            )
            .await
            .unwrap();
        store
            .create(
                collections::TASKS,
                json!({
                    "name": "other project",
                    "workspace_id": workspace_id.to_string(),
                    "project_id": Uuid::new_v4().to_string(),
                    "assignee_id": me.to_string(),
                    "status": "TODO",
                    "created_at": "2026-03-02T00:00:00Z",
                    "due_date": "2026-04-01T00:00:00Z",
                }),
            )
            .await
            .unwrap();

        let report = aggregate(&store, AnalyticsScope::Project(project_id), me, now)
            .await
            .unwrap();
        assert_eq!(report.task_count, 1);
        assert_eq!(report.assigned_task_count, 1);
    }

    #[tokio::test]
    async fn periods_wrap_across_year_boundary() {
        let store = MemoryStore::new();
        let workspace_id = Uuid::new_v4();
        let me = Uuid::new_v4();
        let now = at("2026-01-15T12:00:00Z");

        seed_task(&store, workspace_id, me, TaskStatus::Todo, "2025-12-20T00:00:00Z", "2026-05-01T00:00:00Z").await;
        seed_task(&store, workspace_id, me, TaskStatus::Todo, "2026-01-05T00:00:00Z", "2026-05-01T00:00:00Z").await;

        let report = aggregate(&store, AnalyticsScope::Workspace(workspace_id), me, now)
            .await
            .unwrap();
        assert_eq!(report.task_count, 1);
        assert_eq!(report.task_difference, 0);
    }

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn get(&self, _: &str, _: Uuid) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Backend("down".into()))
        }
        async fn list(&self, _: &str, _: &[Filter]) -> Result<ListResult, StoreError> {
            Err(StoreError::Backend("down".into()))
        }
        async fn create(&self, _: &str, _: Value) -> Result<Value, StoreError> {
            Err(StoreError::Backend("down".into()))
        }
        async fn update(&self, _: &str, _: Uuid, _: Value) -> Result<Value, StoreError> {
            Err(StoreError::Backend("down".into()))
        }
        async fn delete(&self, _: &str, _: Uuid) -> Result<(), StoreError> {
            Err(StoreError::Backend("down".into()))
        }
    }

    #[tokio::test]
    async fn any_fetch_failure_aborts_the_aggregation() {
        let result = aggregate(
            &FailingStore,
            AnalyticsScope::Workspace(Uuid::new_v4()),
            Uuid::new_v4(),
            Utc::now(),
        )
        .await;
        assert!(matches!(result, Err(AnalyticsError::Store(_))));
    }
}
