//! Demonstration of the text vectorization pipeline.
//!
//! Builds a vocabulary from two batches of sample texts, then encodes
//! them as fixed-length index sequences and bag-of-words vectors.
//!
//! Run with: `cargo run --example text_processor`

use vectorizar::prelude::*;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let texts_1: Vec<Text> = vec![
        "中国 的 首都 是 北京".into(),
        "北京 天安门".into(),
        "中国".into(),
    ];
    let texts_2: Vec<Text> = vec!["我 在 中国".into(), "北京 是 中国 的 首都".into()];

    println!("texts1: {texts_1:?}");
    println!("texts2: {texts_2:?}");

    let mut processor = TextProcessor::new();

    // Encoding before the vocabulary exists is a typed error; the
    // guidance is logged here at the boundary, not inside the library.
    if let Err(err) = processor.to_sequences(4, &[&texts_1]) {
        log::warn!("{err}");
    }

    if let Err(err) = processor.fit(&[&texts_1, &texts_2]) {
        log::error!("building the vocabulary failed: {err}");
        return;
    }

    println!("vocabulary size: {}", processor.vocabulary_size());
    if let Some(vocab) = processor.vocabulary() {
        match serde_json::to_string_pretty(vocab) {
            Ok(json) => println!("vocabulary: {json}"),
            Err(err) => log::error!("vocabulary serialization failed: {err}"),
        }
    }

    println!("index sequences (length 4):");
    match processor.to_sequences(4, &[&texts_1, &texts_2]) {
        Ok(matrices) => print_batches(&["texts1", "texts2"], &matrices),
        Err(err) => log::warn!("{err}"),
    }

    println!("bag-of-words vectors:");
    match processor.to_bag_of_words(&[&texts_1, &texts_2]) {
        Ok(matrices) => print_batches(&["texts1", "texts2"], &matrices),
        Err(err) => log::warn!("{err}"),
    }
}

fn print_batches<T: std::fmt::Display + Copy>(names: &[&str], matrices: &[Matrix<T>]) {
    for (name, matrix) in names.iter().zip(matrices) {
        println!("{name}:");
        for row in 0..matrix.n_rows() {
            let cells: Vec<String> = matrix.row(row).iter().map(ToString::to_string).collect();
            println!("  [{}]", cells.join(" "));
        }
    }
}
