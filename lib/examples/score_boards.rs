// Scores a few hand-made boards with the weights written by `train_weights`.
use gomoku_weights::{Feature, GomokuWeights, WEIGHTS_FILE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let weights = GomokuWeights::load_from(WEIGHTS_FILE)?;

    for feature in Feature::ALL {
        println!("{feature:>6} = {:+.4}", weights.weight(feature));
    }

    let boards = [
        ("empty", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ("two live threes", [0.0, 0.0, 0.0, 2.0, 0.0, 1.0]),
        ("open four", [0.0, 1.0, 0.0, 1.0, 1.0, 2.0]),
    ];
    for (name, counts) in &boards {
        println!("{name:>16}: {:+.4}", weights.score(counts));
    }
    Ok(())
}
