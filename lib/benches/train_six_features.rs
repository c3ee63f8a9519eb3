use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gomoku_weights::{
    backend::Tensor1D,
    dataset::SyntheticBoards,
    loss::MSELoss,
    model::{linear::LinearRegression, InferenceModel},
    optimizer::{LearningRate, SGD},
    regularizers::L2,
    trainer::Trainer,
    CpuBackend, FEATURE_COUNT,
};

fn bench_train_six_features(c: &mut Criterion) {
    let boards = SyntheticBoards::generate(2000, 0).expect("Failed to generate boards");

    for batch_size in [1, 8, 32, 128].iter() {
        c.bench_with_input(
            BenchmarkId::new("train_six_features", batch_size),
            batch_size,
            |b, &bs| {
                let optimizer = SGD::with_schedule(LearningRate::default());
                let trainer = Trainer::builder(MSELoss, optimizer, L2::<CpuBackend>::new(1e-4))
                    .batch_size(bs)
                    .max_epochs(10)
                    .build();

                b.iter(|| {
                    let fitted = trainer
                        .fit(LinearRegression::<CpuBackend>::new(FEATURE_COUNT), &boards)
                        .expect("Failed to fit model");

                    let board = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0, 0.0, 2.0, 1.0, 2.0]);
                    let _score = fitted.predict(black_box(&board));

                    fitted
                });
            },
        );
    }
}

fn bench_generate_boards(c: &mut Criterion) {
    for n in [200, 2000, 20000].iter() {
        c.bench_with_input(BenchmarkId::new("generate_boards", n), n, |b, &n| {
            b.iter(|| SyntheticBoards::generate(black_box(n), 0).expect("Failed to generate"));
        });
    }
}

criterion_group!(benches, bench_train_six_features, bench_generate_boards);
criterion_main!(benches);
