use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use estatelist::service::{PortalService, UploadEvent};
use estatelist::upload::{mime_for_path, UploadCandidate, UploadPolicy, UploadRejection};

mod common;
use common::RecordingApi;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("estatelist_upload_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; len]).unwrap();
    path
}

#[test]
fn test_mime_inference() {
    assert_eq!(mime_for_path(Path::new("photo.JPG")), "image/jpeg");
    assert_eq!(mime_for_path(Path::new("photo.png")), "image/png");
    assert_eq!(mime_for_path(Path::new("anim.gif")), "image/gif");
    assert_eq!(mime_for_path(Path::new("notes.txt")), "application/octet-stream");
    assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
}

#[test]
fn test_rejects_unsupported_type_naming_the_file() {
    let dir = temp_dir("bad_type");
    let path = write_file(&dir, "contract.pdf", 128);

    let policy = UploadPolicy::default();
    let candidate = UploadCandidate::inspect(&path).unwrap();
    let rejection = policy.validate(&candidate).unwrap_err();

    assert!(matches!(rejection, UploadRejection::UnsupportedType { .. }));
    assert_eq!(rejection.file(), "contract.pdf");
    assert_eq!(rejection.to_string(), "contract.pdf is not a supported image type");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rejects_oversize_file_naming_the_file() {
    let dir = temp_dir("oversize");
    let path = write_file(&dir, "huge.png", 2 * 1024 * 1024);

    let policy = UploadPolicy {
        max_file_size: 1024 * 1024,
        ..UploadPolicy::default()
    };
    let candidate = UploadCandidate::inspect(&path).unwrap();
    let rejection = policy.validate(&candidate).unwrap_err();

    assert_eq!(rejection.to_string(), "huge.png exceeds maximum file size of 1MB");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_partition_batch_enforces_file_limit() {
    let dir = temp_dir("limit");
    let paths: Vec<PathBuf> = (0..4).map(|i| write_file(&dir, &format!("p{}.png", i), 16)).collect();

    let policy = UploadPolicy {
        max_files: 2,
        ..UploadPolicy::default()
    };
    let (accepted, rejected) = policy.partition_batch(&paths);

    assert_eq!(accepted.len(), 2);
    assert_eq!(rejected.len(), 2);
    assert!(rejected.iter().all(|r| matches!(r, UploadRejection::TooMany { .. })));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_is_rejected() {
    let rejection = UploadCandidate::inspect(Path::new("/no/such/file.png")).unwrap_err();
    assert!(matches!(rejection, UploadRejection::Unreadable { .. }));
    assert_eq!(rejection.file(), "file.png");
}

#[tokio::test]
async fn test_rejected_files_never_reach_the_network() {
    let dir = temp_dir("no_network");
    let paths = vec![
        write_file(&dir, "notes.txt", 64),
        write_file(&dir, "huge.png", 2 * 1024 * 1024),
    ];

    let policy = UploadPolicy {
        max_file_size: 1024 * 1024,
        ..UploadPolicy::default()
    };
    let (accepted, rejected) = policy.partition_batch(&paths);
    assert!(accepted.is_empty());
    assert_eq!(rejected.len(), 2);

    // Only accepted candidates are ever handed to the service
    let api = Arc::new(RecordingApi::new());
    let service = PortalService::new(api.clone());
    let report = service.upload_batch(accepted, |_| {}).await;

    assert_eq!(report.uploaded, 0);
    assert_eq!(api.upload_calls.load(Ordering::SeqCst), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_uploads_run_strictly_sequentially_in_selection_order() {
    let dir = temp_dir("sequential");
    let paths: Vec<PathBuf> = (0..5).map(|i| write_file(&dir, &format!("img{}.png", i), 32)).collect();

    let policy = UploadPolicy::default();
    let (accepted, rejected) = policy.partition_batch(&paths);
    assert!(rejected.is_empty());

    let api = Arc::new(RecordingApi::new());
    let service = PortalService::new(api.clone());
    let report = service.upload_batch(accepted, |_| {}).await;

    assert_eq!(report.uploaded, 5);
    assert_eq!(api.max_concurrent_uploads.load(Ordering::SeqCst), 1);
    assert_eq!(
        api.upload_order(),
        vec!["img0.png", "img1.png", "img2.png", "img3.png", "img4.png"]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_per_file_failure_does_not_abort_the_batch() {
    let dir = temp_dir("isolated_failure");
    let paths: Vec<PathBuf> = (0..3).map(|i| write_file(&dir, &format!("img{}.png", i), 32)).collect();

    let policy = UploadPolicy::default();
    let (accepted, _) = policy.partition_batch(&paths);

    let api = Arc::new(RecordingApi::new());
    api.fail_upload_of("img1.png");
    let service = PortalService::new(api.clone());

    let mut events = Vec::new();
    let report = service.upload_batch(accepted, |event| events.push(event)).await;

    assert_eq!(report.uploaded, 2);
    assert_eq!(report.failed, 1);
    // The file after the failure was still attempted
    assert_eq!(api.upload_order().last().map(String::as_str), Some("img2.png"));

    // The failure event names the file
    let failed_files: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            UploadEvent::Failed { file, .. } => Some(file.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(failed_files, vec!["img1.png"]);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_successful_upload_yields_one_gallery_entry_per_file() {
    let dir = temp_dir("gallery_entry");
    let path = write_file(&dir, "front.png", 32);

    let policy = UploadPolicy::default();
    let (accepted, _) = policy.partition_batch(&[path]);

    let api = Arc::new(RecordingApi::new());
    let service = PortalService::new(api);

    let mut uploaded = Vec::new();
    service
        .upload_batch(accepted, |event| {
            if let UploadEvent::Uploaded(image) = event {
                uploaded.push(image);
            }
        })
        .await;

    assert_eq!(uploaded.len(), 1);
    assert_eq!(uploaded[0].caption, "front.png");
    assert_eq!(uploaded[0].url, "/media/front.png");

    let _ = fs::remove_dir_all(&dir);
}
