use super::super::Balance;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_picks_keep_exact_split() {
    let balance = Arc::new(Balance::with_entries([("a", 1), ("b", 1), ("c", 1)]).unwrap());
    let a = Arc::new(AtomicUsize::new(0));
    let b = Arc::new(AtomicUsize::new(0));
    let c = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::with_capacity(999);
    for _ in 0..999 {
        let balance = Arc::clone(&balance);
        let (a, b, c) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&c));
        handles.push(tokio::spawn(async move {
            match balance.get().as_deref() {
                Some("a") => a.fetch_add(1, Ordering::SeqCst),
                Some("b") => b.fetch_add(1, Ordering::SeqCst),
                Some("c") => c.fetch_add(1, Ordering::SeqCst),
                other => panic!("Wrong item: {other:?}"),
            };
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(a.load(Ordering::SeqCst), 333);
    assert_eq!(b.load(Ordering::SeqCst), 333);
    assert_eq!(c.load(Ordering::SeqCst), 333);
    assert_eq!(balance.stats().total_picks, 999);
}

#[test]
fn test_threaded_weighted_split() {
    let balance = Balance::with_entries([("a", 5), ("b", 3), ("c", 2)]).unwrap();
    let counts: [AtomicUsize; 3] = Default::default();

    std::thread::scope(|scope| {
        for _ in 0..10 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let idx = match balance.get().as_deref() {
                        Some("a") => 0,
                        Some("b") => 1,
                        Some("c") => 2,
                        other => panic!("Wrong item: {other:?}"),
                    };
                    counts[idx].fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let observed: Vec<usize> = counts.iter().map(|c| c.load(Ordering::Relaxed)).collect();
    assert_eq!(observed, [500, 300, 200]);
}

#[test]
fn test_membership_changes_during_picks() {
    let balance = Balance::with_entries([("stable", 1)]).unwrap();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                let id = format!("churn-{}", i % 4);
                if balance.add(id.clone(), 2).is_err() {
                    let _ = balance.remove(&id);
                }
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    assert!(balance.get().is_some());
                }
            });
        }
    });

    assert!(balance.contains("stable"));
    assert_eq!(balance.stats().total_picks, 2000);
}
