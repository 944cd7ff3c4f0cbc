use criterion::{criterion_group, criterion_main, Criterion};
use research_history_store::{Content, HistoryStore};
use std::hint::black_box;

fn seeded_store(dir: &tempfile::TempDir, entries: usize) -> (HistoryStore, String) {
    let store = HistoryStore::new(dir.path().join("history.json"));
    let mut last_id = String::new();
    for i in 0..entries {
        let mut content = Content::new();
        content.insert("report".to_string(), serde_json::json!(format!("report {}", i)));
        last_id = store
            .add(&format!("topic {}", i), "summary", Some(content))
            .unwrap();
    }
    (store, last_id)
}

fn bench_add_to_100_entries(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    let (store, _) = seeded_store(&dir, 100);
    let baseline = store.get_all().unwrap();

    c.bench_function("add_to_100_entries", |b| {
        b.iter(|| {
            store.save(&baseline).unwrap();
            store.add(black_box("benchmark topic"), "", None).unwrap();
        });
    });
}

fn bench_get_last_of_1000(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    let (store, last_id) = seeded_store(&dir, 1000);

    c.bench_function("get_last_of_1000", |b| {
        b.iter(|| store.get(black_box(&last_id)).unwrap());
    });
}

criterion_group!(benches, bench_add_to_100_entries, bench_get_last_of_1000);
criterion_main!(benches);
