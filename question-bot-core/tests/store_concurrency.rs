use question_bot_core::{InMemoryStore, RecordId, RecordStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_creates_never_share_an_id() {
    let store = Arc::new(InMemoryStore::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..250)
                    .map(|i| store.create_record(&format!("q{}-{}", worker, i)).id())
                    .collect::<Vec<RecordId>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    assert_eq!(ids.len(), 2000);
    assert_eq!(store.len(), 2000);

    let snapshot: Vec<RecordId> = store.records().iter().map(|r| r.id()).collect();
    let mut sorted = snapshot.clone();
    sorted.sort();
    assert_eq!(snapshot, sorted, "snapshot must be in creation order");
}

#[test]
fn concurrent_updates_leave_consistent_records() {
    let store = Arc::new(InMemoryStore::new());
    let ids: Vec<RecordId> = (0..50)
        .map(|i| store.create_record(&format!("question {}", i)).id())
        .collect();
    let ids = Arc::new(ids);

    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            let ids = ids.clone();
            thread::spawn(move || {
                for id in ids.iter() {
                    store
                        .try_update_record(*id, &format!("answer from {}", worker))
                        .unwrap();
                }
            })
        })
        .collect();

    let reader = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                for record in store.records() {
                    assert_eq!(record.answer().is_some(), record.time_answered().is_some());
                }
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    for record in store.records() {
        assert!(record.answer().unwrap().starts_with("answer from "));
        assert!(record.time_answered().unwrap() >= record.time_asked());
    }
}
