use agridash_core::dataset::esg::esg_hierarchy;
use agridash_core::{load_nodes, DashboardSession, IngestError, SessionError};
use std::io::Write;

fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn csv_upload_yields_normalized_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(
        &dir,
        "custom.csv",
        "labels,parents,values\nESG,,1000\nGovernance,ESG,400\nSocial,ESG,300\n",
    );

    let nodes = load_nodes(&path).unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].label, "ESG");
    assert!(nodes[0].is_root());
    assert_eq!(nodes[1].parent, "ESG");
    assert_eq!(nodes[2].value, 300.0);
}

#[test]
fn csv_upload_accepts_native_column_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(&dir, "native.csv", "label,parent,value\nESG,,200\n");

    let nodes = load_nodes(&path).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].value, 200.0);
}

#[test]
fn txt_upload_is_rejected_before_any_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(&dir, "notes.txt", "labels,parents,values\nESG,,200\n");

    let err = load_nodes(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn rejected_upload_keeps_the_default_dataset_active() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(&dir, "notes.txt", "whatever");

    let mut session = DashboardSession::new();
    let err = session.load_upload(&path).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Ingest(IngestError::UnsupportedFormat { .. })
    ));

    // The built-in fixed dataset still backs the overview render.
    assert_eq!(session.dataset(), esg_hierarchy().as_slice());
    assert_eq!(session.esg_view().segments.len(), 15);
}

#[test]
fn malformed_csv_also_falls_back_to_the_default_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(&dir, "broken.csv", "labels,parents,values\nESG,,not-a-number\n");

    let mut session = DashboardSession::new();
    let err = session.load_upload(&path).unwrap_err();
    assert!(matches!(err, SessionError::Ingest(IngestError::Csv(_))));
    assert_eq!(session.dataset(), esg_hierarchy().as_slice());
}

#[test]
fn failed_upload_after_a_successful_one_reverts_to_the_default_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_temp_file(
        &dir,
        "custom.csv",
        "labels,parents,values\nFarm,,500\nCrops,Farm,300\n",
    );
    let bad = write_temp_file(&dir, "notes.txt", "whatever");

    let mut session = DashboardSession::new();
    session.load_upload(&good).unwrap();
    assert_eq!(session.dataset().len(), 2);

    let err = session.load_upload(&bad).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Ingest(IngestError::UnsupportedFormat { .. })
    ));
    // The substitute is the built-in hierarchy, not the stale upload.
    assert_eq!(session.dataset(), esg_hierarchy().as_slice());
    assert_eq!(session.esg_view().segments.len(), 15);
}

#[test]
fn successful_upload_replaces_the_active_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(
        &dir,
        "custom.csv",
        "labels,parents,values\nFarm,,500\nCrops,Farm,300\n",
    );

    let mut session = DashboardSession::new();
    let loaded = session.load_upload(&path).unwrap();
    assert_eq!(loaded, 2);
    assert_eq!(session.dataset().len(), 2);

    session.use_default_dataset();
    assert_eq!(session.dataset(), esg_hierarchy().as_slice());
}

#[test]
fn missing_spreadsheet_surfaces_a_typed_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xlsx");

    let err = load_nodes(&path).unwrap_err();
    assert!(matches!(err, IngestError::Spreadsheet(_)));
}
