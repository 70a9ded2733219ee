use multiservices::store::backend::StorageBackend;
use multiservices::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_key_reads_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read("multiservices_providers").unwrap(), None);
}

#[test]
fn test_fs_backend_write_then_read() {
    let (_dir, backend) = setup();

    backend.write("multiservices_clients", b"[]").unwrap();
    assert_eq!(
        backend.read("multiservices_clients").unwrap(),
        Some(b"[]".to_vec())
    );

    backend.write("multiservices_clients", b"[1]").unwrap();
    assert_eq!(
        backend.read("multiservices_clients").unwrap(),
        Some(b"[1]".to_vec())
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();

    backend.write("multiservices_reviews", b"{}").unwrap();

    let expected_path = backend.root().join("multiservices_reviews.json");
    assert!(expected_path.exists());
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "{}");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_root_on_first_write() {
    let (_dir, backend) = setup();
    assert!(!backend.root().exists());
    backend.write("multiservices_providers", b"[]").unwrap();
    assert!(backend.root().is_dir());
}
