//! Full-corpus scenario checks: scale substitution and pass-through
//! observed through the generated maps, not just the count formulas.

use recgraph_fixtures::{DatasetGenerator, GeneratorConfig};

#[test]
fn scale_below_range_generates_at_default() {
    let dataset = DatasetGenerator::new(false, 200).generate();
    // The requested scale is kept in the config; generation ran at the
    // substituted default.
    assert_eq!(dataset.config().scale, 200);
    assert_eq!(dataset.scale(), 500);
    assert_eq!(dataset.user_count(), 125_000);
    assert_eq!(dataset.item_count(), 50_000);
    assert_eq!(dataset.quality_count(), 1_250);
    assert_eq!(dataset.category_count(), 50);
    dataset.validate().unwrap();
}

#[test]
fn scale_above_range_generates_at_default() {
    let dataset = DatasetGenerator::new(false, 20_000).generate();
    assert_eq!(dataset.scale(), 500);
    assert_eq!(dataset.user_count(), 125_000);
    assert_eq!(dataset.item_count(), 50_000);
    assert_eq!(dataset.quality_count(), 1_250);
    assert_eq!(dataset.category_count(), 50);
}

#[test]
fn in_range_scale_passes_through() {
    let config = GeneratorConfig {
        debug: false,
        scale: 2_000,
        seed: 42,
    };
    let dataset = DatasetGenerator::with_config(config).generate();
    assert_eq!(dataset.scale(), 2_000);
    assert_eq!(dataset.user_count(), 500_000);
    assert_eq!(dataset.item_count(), 200_000);
}
