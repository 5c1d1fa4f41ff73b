use datasink::{Overwrite, WriteError, open_destination};
use std::fs;
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn deny_creates_fresh_file() -> anyhow::Result<()> {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("fresh.txt");

    let mut f = open_destination(&path, Overwrite::Deny)?;
    f.write_all(b"hello")?;
    drop(f);
    assert_eq!(fs::read_to_string(&path)?, "hello");
    Ok(())
}

#[test]
fn deny_rejects_existing_and_keeps_contents() -> anyhow::Result<()> {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("existing.txt");
    fs::write(&path, "keep me")?;

    let err = open_destination(&path, Overwrite::Deny).unwrap_err();
    assert!(matches!(err, WriteError::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(&path)?, "keep me");
    Ok(())
}

#[test]
fn deny_rejects_existing_directory() -> anyhow::Result<()> {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("sub");
    fs::create_dir(&dir)?;

    let err = open_destination(&dir, false.into()).unwrap_err();
    assert!(err.is_already_exists());
    Ok(())
}

#[test]
fn allow_replaces_existing() -> anyhow::Result<()> {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("existing.txt");
    fs::write(&path, "a much longer original payload")?;

    let mut f = open_destination(&path, Overwrite::Allow)?;
    f.write_all(b"new")?;
    drop(f);
    assert_eq!(fs::read_to_string(&path)?, "new");
    Ok(())
}
