#![cfg(feature = "io-csv")]

use datasink::*;
use serde::Serialize;
use std::fs;

#[derive(Serialize)]
struct Record {
    id: u32,
    name: String,
}

#[test]
fn header_then_rows_all_quoted() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("out.csv");

    let n = write_delimited(["a", "b"], [["1", "2"]], &path, false)?;
    assert_eq!(n, 1);

    let contents = fs::read_to_string(&path)?;
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("\"a\",\"b\""));
    assert_eq!(lines.next(), Some("\"1\",\"2\""));
    assert_eq!(lines.next(), None);
    Ok(())
}

#[test]
fn records_end_in_crlf() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("crlf.csv");

    write_delimited(["a", "b"], [["1", ""]], &path, false)?;
    assert_eq!(fs::read(&path)?, b"\"a\",\"b\"\r\n\"1\",\"\"\r\n");
    Ok(())
}

#[test]
fn lf_terminator_is_configurable() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("lf.csv");
    let config = DelimitedConfig {
        terminator: RecordTerminator::Any(b'\n'),
        ..Default::default()
    };

    write_delimited_with(["a"], [["1"]], &path, &config)?;
    assert_eq!(fs::read_to_string(&path)?, "\"a\"\n\"1\"\n");
    Ok(())
}

#[test]
fn second_write_without_overwrite_is_rejected() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("out.csv");

    write_delimited(["a", "b"], [["1", "2"]], &path, false)?;
    let before = fs::read(&path)?;

    let err = write_delimited(["x"], [["y"]], &path, false).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains(&path.display().to_string()));

    assert_eq!(fs::read(&path)?, before);
    Ok(())
}

#[test]
fn overwrite_replaces_contents() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("out.csv");
    fs::write(&path, "stale contents that are longer than the new file\n")?;

    write_delimited(["k"], [["v"]], &path, Overwrite::Allow)?;
    assert_eq!(fs::read_to_string(&path)?, "\"k\"\r\n\"v\"\r\n");
    Ok(())
}

#[test]
fn embedded_specials_round_trip() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("special.csv");
    let row = vec![
        "comma, inside".to_string(),
        "quote \" inside".to_string(),
        "line\nbreak".to_string(),
        String::new(),
    ];

    write_delimited(["c1", "c2", "c3", "c4"], vec![row.clone()], &path, false)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)?;
    let records: Vec<csv::StringRecord> = rdr.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(records.len(), 1);
    let got: Vec<&str> = records[0].iter().collect();
    assert_eq!(got, row.iter().map(String::as_str).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn rows_are_consumed_lazily_in_order() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("lazy.csv");

    let rows = (1..=3).map(|i| vec![i.to_string(), (i * 10).to_string()]);
    let n = write_delimited(["i", "ten_i"], rows, &path, false)?;
    assert_eq!(n, 3);
    assert_eq!(
        fs::read_to_string(&path)?,
        "\"i\",\"ten_i\"\r\n\"1\",\"10\"\r\n\"2\",\"20\"\r\n\"3\",\"30\"\r\n"
    );
    Ok(())
}

#[test]
fn header_only_when_no_rows() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("empty.csv");

    let n = write_delimited(["a", "b"], Vec::<Vec<String>>::new(), &path, false)?;
    assert_eq!(n, 0);
    assert_eq!(fs::read_to_string(&path)?, "\"a\",\"b\"\r\n");
    Ok(())
}

#[test]
fn missing_parent_directory_is_not_created() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("sub").join("out.csv");

    let err = write_delimited(["a"], [["1"]], &path, false).unwrap_err();
    assert!(matches!(err, WriteError::Io { .. }));
    assert!(!tmp.path().join("sub").exists());
    Ok(())
}

#[test]
fn typed_records_quote_numbers_too() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("typed.csv");
    let data = vec![
        Record {
            id: 1,
            name: "A".into(),
        },
        Record {
            id: 2,
            name: "B".into(),
        },
    ];

    let n = write_delimited_records(data, &path, false)?;
    assert_eq!(n, 2);
    assert_eq!(
        fs::read_to_string(&path)?,
        "\"id\",\"name\"\r\n\"1\",\"A\"\r\n\"2\",\"B\"\r\n"
    );

    let err = write_delimited_records(Vec::<Record>::new(), &path, false).unwrap_err();
    assert!(err.is_already_exists());
    Ok(())
}
