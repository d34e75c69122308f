use crate::slot::SessionSlot;
use crate::FileSessionSlot;

use tempfile::TempDir;

fn slot_in_temp_dir() -> (TempDir, FileSessionSlot) {
    let dir = TempDir::new().unwrap();
    let slot = FileSessionSlot::new(dir.path().join("session.json"));
    (dir, slot)
}

#[test]
fn given_empty_slot_when_read_then_none() {
    let (_dir, slot) = slot_in_temp_dir();

    assert!(slot.read().unwrap().is_none());
}

#[test]
fn given_written_record_when_read_then_same_record() {
    let (_dir, slot) = slot_in_temp_dir();

    slot.write(r#"{"hello":"world"}"#).unwrap();

    assert_eq!(slot.read().unwrap().as_deref(), Some(r#"{"hello":"world"}"#));
}

#[test]
fn given_written_record_when_cleared_then_empty() {
    let (_dir, slot) = slot_in_temp_dir();
    slot.write("record").unwrap();

    slot.clear().unwrap();

    assert!(slot.read().unwrap().is_none());
}

#[test]
fn given_empty_slot_when_cleared_twice_then_ok() {
    let (_dir, slot) = slot_in_temp_dir();

    assert!(slot.clear().is_ok());
    assert!(slot.clear().is_ok());
}

#[test]
fn given_missing_parent_directory_when_write_then_creates_it() {
    let dir = TempDir::new().unwrap();
    let slot = FileSessionSlot::new(dir.path().join("nested/session.json"));

    slot.write("record").unwrap();

    assert_eq!(slot.read().unwrap().as_deref(), Some("record"));
}
