//! `GomokuWeights::save` writes to the working directory. Kept in its own
//! test binary since it changes the process's current directory.

use gomoku_weights::{GomokuWeights, WEIGHTS_FILE};

#[test]
fn save_writes_fixed_file_in_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let first = GomokuWeights::new([1.0; 6], 1.0);
    let second = GomokuWeights::new([0.1, 0.2, -0.3, 0.4, -0.5, 0.6], 0.05);
    let result = first.save().and_then(|()| second.save());

    std::env::set_current_dir(previous).unwrap();
    result.unwrap();

    let path = tmp.path().join(WEIGHTS_FILE);
    assert_eq!(WEIGHTS_FILE, "gomoku_weights.json");
    assert_eq!(GomokuWeights::load_from(&path).unwrap(), second);
}
