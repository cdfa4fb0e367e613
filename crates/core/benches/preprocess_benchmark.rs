use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textprep_core::{PreprocessEngine, PreprocessingOptions};

fn generate_sample_text(sentences: usize) -> String {
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(&format!(
            "The {} quick brown foxes were jumping over the lazy dogs, didn't they? ",
            i
        ));
    }
    text
}

fn bench_preprocess(c: &mut Criterion) {
    let engine = PreprocessEngine::english();
    let text = generate_sample_text(20);

    c.bench_function("normalize only", |b| {
        let options = PreprocessingOptions::new()
            .with_lowercase(true)
            .with_remove_punctuation(true)
            .with_remove_numbers(true)
            .with_remove_extra_spaces(true);
        b.iter(|| engine.execute(black_box(&text), &options))
    });

    c.bench_function("all steps", |b| {
        let options = PreprocessingOptions::all();
        b.iter(|| engine.execute(black_box(&text), &options))
    });

    // Scaling with input size
    let sentence_counts = [1, 10, 100, 500];
    let mut group = c.benchmark_group("sentence_scaling");
    for &count in &sentence_counts {
        let text = generate_sample_text(count);
        let options = PreprocessingOptions::all();
        group.bench_function(format!("{} sentences", count), |b| {
            b.iter(|| engine.execute(black_box(&text), &options))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_preprocess);
criterion_main!(benches);
