use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use visitlog::{
    codec::{decode_line, encode_line},
    core::store::RecordStore,
    history::HistoryEngine,
    record::VisitDraft,
};

fn draft(n: u64) -> VisitDraft {
    VisitDraft {
        patient_name: format!("Patient {n}"),
        visit_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        visit_type: "Consultation".to_string(),
        description: "Regular checkup, follow-up in \"two\" weeks".to_string(),
        doctor_name: "Dr. Smith".to_string(),
    }
}

fn bench_adds(c: &mut Criterion) {
    c.bench_function("history_add_10k", |b| {
        b.iter(|| {
            let mut store = RecordStore::new();
            let mut history = HistoryEngine::new();
            for n in 0..10_000u64 {
                let _ = history.apply_add(&mut store, draft(n));
            }
        });
    });
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    c.bench_function("undo_redo_cycle", |b| {
        let mut store = RecordStore::new();
        let mut history = HistoryEngine::new();
        for n in 0..1_000u64 {
            let _ = history.apply_add(&mut store, draft(n));
        }
        b.iter(|| {
            for _ in 0..10 {
                history.undo(&mut store).expect("undo");
            }
            for _ in 0..10 {
                history.redo(&mut store).expect("redo");
            }
        });
    });
}

fn bench_codec(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000u64)
        .map(|n| encode_line(&draft(n).into_record(n + 1)))
        .collect();

    c.bench_function("encode_10k", |b| {
        b.iter(|| {
            for n in 0..10_000u64 {
                let _ = encode_line(&draft(n).into_record(n + 1));
            }
        });
    });

    c.bench_function("decode_10k", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = decode_line(line).expect("decode");
            }
        });
    });
}

criterion_group!(benches, bench_adds, bench_undo_redo_cycle, bench_codec);
criterion_main!(benches);
