use std::time::Instant;

use crate::catalog::CatalogSnapshot;
use crate::model::{Catalog, CatalogItem};
use crate::search::search;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.total_cmp(b));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn warm_query_p95_under_budget() {
    let mut songs: Vec<CatalogItem> = (0..1_000)
        .map(|i| {
            CatalogItem::new(
                &format!("song:{i}"),
                &format!("Track Number {i:04}"),
                &format!("Artist {}", i % 120),
                &["Pop"],
            )
        })
        .collect();

    songs.push(CatalogItem::new(
        "song:eric-clapton:wonderful-tonight",
        "Wonderful Tonight",
        "Eric Clapton",
        &["Rock"],
    ));
    let snapshot = CatalogSnapshot::new(Catalog::new(songs));

    for _ in 0..5 {
        let _ = search(&snapshot, "wondrful");
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(20);
        for _ in 0..20 {
            let start = Instant::now();
            let _ = search(&snapshot, "wondrful");
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.total_cmp(b));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 250.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 250.0ms); batches={batch_p95:?}",
    );
}
