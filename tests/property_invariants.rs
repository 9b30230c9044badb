use chrono::NaiveDate;
use proptest::prelude::*;

use visitlog::{
    codec::{decode_line, encode_line},
    core::store::RecordStore,
    history::{HistoryEngine, HistoryError},
    record::{VisitDraft, VisitRecord},
    types::{VisitId, VISIT_TYPES},
};

#[derive(Debug, Clone)]
enum Action {
    Add { name_idx: u8, day: u32 },
    Update { target: u8, name_idx: u8 },
    Delete { target: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..24, 1u32..=28).prop_map(|(name_idx, day)| Action::Add { name_idx, day }),
        (0u8..24, 0u8..24).prop_map(|(target, name_idx)| Action::Update { target, name_idx }),
        (0u8..24).prop_map(|target| Action::Delete { target }),
    ]
}

fn draft_from(name_idx: u8, day: u32) -> VisitDraft {
    VisitDraft {
        patient_name: format!("Patient {name_idx}"),
        visit_date: NaiveDate::from_ymd_opt(2026, 6, day).unwrap(),
        visit_type: VISIT_TYPES[usize::from(name_idx) % VISIT_TYPES.len()].to_string(),
        description: format!("visit {name_idx}"),
        doctor_name: String::new(),
    }
}

fn live_ids(store: &RecordStore) -> Vec<VisitId> {
    store.records().iter().map(|rec| rec.id).collect()
}

fn sorted_by_id(records: &[VisitRecord]) -> Vec<VisitRecord> {
    let mut out = records.to_vec();
    out.sort_by_key(|rec| rec.id);
    out
}

proptest! {
    #[test]
    fn encode_decode_round_trips(
        id in any::<u64>(),
        patient in any::<String>(),
        (y, m, d) in (1900i32..2100, 1u32..=12, 1u32..=28),
        visit_type in any::<String>(),
        description in any::<String>(),
        doctor in any::<String>(),
    ) {
        let rec = VisitRecord {
            id,
            patient_name: patient,
            visit_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            visit_type,
            description,
            doctor_name: doctor,
        };
        prop_assert_eq!(decode_line(&encode_line(&rec)).unwrap(), rec);
    }

    // Sequences bounded by the undo capacity must undo step-for-step back to
    // empty and redo forward to the exact final state. A delete's undo
    // re-appends, so intermediate comparisons ignore collection order.
    #[test]
    fn bounded_sequences_undo_and_redo_exactly(
        actions in prop::collection::vec(action_strategy(), 1..=10)
    ) {
        let mut store = RecordStore::new();
        let mut history = HistoryEngine::new();
        let mut snapshots = vec![store.records().to_vec()];

        for action in actions {
            match action {
                Action::Add { name_idx, day } => {
                    history.apply_add(&mut store, draft_from(name_idx, day));
                }
                Action::Update { target, name_idx } => {
                    let ids = live_ids(&store);
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    history
                        .apply_update(&mut store, id, draft_from(name_idx, 1))
                        .unwrap();
                }
                Action::Delete { target } => {
                    let ids = live_ids(&store);
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    history.apply_delete(&mut store, id).unwrap();
                }
            }
            snapshots.push(store.records().to_vec());
        }

        let final_state = store.records().to_vec();

        for expected in snapshots.iter().rev().skip(1) {
            history.undo(&mut store).unwrap();
            prop_assert_eq!(sorted_by_id(store.records()), sorted_by_id(expected));
        }
        prop_assert_eq!(history.undo(&mut store), Err(HistoryError::NothingToUndo));
        prop_assert!(store.is_empty());

        loop {
            match history.redo(&mut store) {
                Ok(()) => {}
                Err(HistoryError::NothingToRedo) => break,
                Err(other) => prop_assert!(false, "unexpected redo error: {other:?}"),
            }
        }
        prop_assert_eq!(store.records().to_vec(), final_state);
    }
}
