use std::fs;

use catchball::game::score::ScoreStore;

#[test]
fn save_load_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.dat"));
    store.save(42);
    assert_eq!(store.load(), 42);
}

#[test]
fn file_format_is_four_byte_big_endian() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");
    ScoreStore::new(&path).save(0x0102_0304);
    assert_eq!(fs::read(&path).unwrap(), vec![0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("nope.dat"));
    assert_eq!(store.load(), 0);
}

#[test]
fn truncated_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");
    fs::write(&path, [0x01, 0x02]).unwrap();
    assert_eq!(ScoreStore::new(&path).load(), 0);
}

#[test]
fn negative_stored_value_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");
    fs::write(&path, (-7i32).to_be_bytes()).unwrap();
    assert_eq!(ScoreStore::new(&path).load(), 0);
}

#[test]
fn trailing_bytes_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");
    fs::write(&path, [0x00, 0x00, 0x00, 0x09, 0xAA, 0xBB]).unwrap();
    assert_eq!(ScoreStore::new(&path).load(), 9);
}

#[test]
fn save_overwrites_the_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.dat"));
    store.save(5);
    store.save(9);
    assert_eq!(store.load(), 9);
    assert_eq!(fs::read(dir.path().join("highscore.dat")).unwrap().len(), 4);
}

#[test]
fn save_to_an_unwritable_path_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    // A directory component that does not exist: the write fails, the error
    // is logged, and in-memory state is unaffected.
    let store = ScoreStore::new(dir.path().join("missing-dir").join("highscore.dat"));
    store.save(5);
    assert_eq!(store.load(), 0);
}
