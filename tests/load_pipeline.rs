use anyhow::Result;
use std::sync::Arc;
use tempfile::tempdir;

use attendance_portal::app::ports::IssueKind;
use attendance_portal::app::AttendanceService;
use attendance_portal::domain::Group;
use attendance_portal::error::PortalError;
use attendance_portal::infra::{CollectingSink, FileFetcher};
use attendance_portal::view::{filter_records, ListQuery};

const GROUP_A_CSV: &str = "\
Roll no,Name,Percentage,profileImage
1,Ali Raza,95%,/images/ali.jpg
2,Omar Farooq,79.6%,
3,  ,88%,
x4,Bilal,90%,
5,Usman,abc,
6,Hamza,,
7,Zaid,80%,
";

const GROUP_B_CSV: &str = "\
Roll No,Name,Attendance,Percentage
1,Aisha,22,100%
2,Fatima,17,77.27%
";

fn write_sources(dir: &std::path::Path, a: Option<&str>, b: Option<&str>) -> Result<()> {
    if let Some(a) = a {
        std::fs::write(dir.join("male_attendance.csv"), a)?;
    }
    if let Some(b) = b {
        std::fs::write(dir.join("ladies_attendance.csv"), b)?;
    }
    Ok(())
}

#[tokio::test]
async fn loads_both_groups_from_public_dir() -> Result<()> {
    let dir = tempdir()?;
    write_sources(dir.path(), Some(GROUP_A_CSV), Some(GROUP_B_CSV))?;

    let sink = Arc::new(CollectingSink::new());
    let service = AttendanceService::new(Arc::new(FileFetcher::new(dir.path())), sink.clone());
    let records = service.load_all().await?;

    // Rows 3 (blank name) and x4 (bad identifier) are dropped
    let a: Vec<_> = records.iter().filter(|r| r.group == Group::A).collect();
    let ids: Vec<i64> = a.iter().map(|r| r.identifier).collect();
    assert_eq!(ids, vec![1, 2, 5, 6, 7]);

    let omar = a.iter().find(|r| r.identifier == 2).unwrap();
    assert_eq!(omar.attendance_percentage, 80);
    assert!(!omar.is_eligible);

    let zaid = a.iter().find(|r| r.identifier == 7).unwrap();
    assert!(zaid.is_eligible);

    let ali = a.iter().find(|r| r.identifier == 1).unwrap();
    assert_eq!(ali.portrait_reference.as_deref(), Some("/images/ali.jpg"));

    let b: Vec<_> = records.iter().filter(|r| r.group == Group::B).collect();
    assert_eq!(b.len(), 2);
    assert_eq!(b[1].attendance_percentage, 77);
    assert!(b.iter().all(|r| r.portrait_reference.is_none()));

    // Only the blank name, bad identifier and "abc" percentage are reported
    let kinds: Vec<(u64, IssueKind)> = sink.issues().iter().map(|i| (i.row, i.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (4, IssueKind::MissingName),
            (5, IssueKind::InvalidIdentifier),
            (6, IssueKind::InvalidPercentage),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn missing_source_fails_whole_load() -> Result<()> {
    let dir = tempdir()?;
    write_sources(dir.path(), Some(GROUP_A_CSV), None)?;

    let service = AttendanceService::new(
        Arc::new(FileFetcher::new(dir.path())),
        Arc::new(CollectingSink::new()),
    );
    let err = service.load_all().await.unwrap_err();
    match err {
        PortalError::NotFound { path } => assert_eq!(path, "/ladies_attendance.csv"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn empty_file_is_empty_payload() -> Result<()> {
    let dir = tempdir()?;
    write_sources(dir.path(), Some("\n\n"), Some(GROUP_B_CSV))?;

    let service = AttendanceService::new(
        Arc::new(FileFetcher::new(dir.path())),
        Arc::new(CollectingSink::new()),
    );
    assert!(matches!(
        service.load_all().await,
        Err(PortalError::EmptyPayload { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn ragged_rows_fail_with_parse_error() -> Result<()> {
    let dir = tempdir()?;
    write_sources(
        dir.path(),
        Some(GROUP_A_CSV),
        Some("Roll No,Name,Attendance,Percentage\n1,Aisha,22\n"),
    )?;

    let service = AttendanceService::new(
        Arc::new(FileFetcher::new(dir.path())),
        Arc::new(CollectingSink::new()),
    );
    match service.load_all().await {
        Err(PortalError::Parse { row, .. }) => assert_eq!(row, 2),
        other => panic!("expected Parse, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn header_only_sources_yield_no_records() -> Result<()> {
    let dir = tempdir()?;
    write_sources(
        dir.path(),
        Some("Roll no,Name,Percentage,profileImage\n"),
        Some("Roll No,Name,Attendance,Percentage\n"),
    )?;

    let service = AttendanceService::new(
        Arc::new(FileFetcher::new(dir.path())),
        Arc::new(CollectingSink::new()),
    );
    assert!(service.load_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_counts_follow_search_not_toggle() -> Result<()> {
    let dir = tempdir()?;
    write_sources(dir.path(), Some(GROUP_A_CSV), Some(GROUP_B_CSV))?;

    let service = AttendanceService::new(
        Arc::new(FileFetcher::new(dir.path())),
        Arc::new(CollectingSink::new()),
    );
    let records = service.load_all().await?;

    let view = filter_records(
        &records,
        &ListQuery {
            group: Group::A,
            search: "a".to_string(),
            eligible_only: true,
        },
    );
    // "a" matches Ali Raza, Omar Farooq, Usman, Hamza, Zaid
    assert_eq!(view.total_count, 5);
    assert_eq!(view.eligible_count, 2);
    assert_eq!(view.records.len(), 2);
    Ok(())
}
