use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::*;

fn fixed(workers: usize) -> Scheduler {
    Scheduler::new(&GatewayConfig {
        scheduler: SchedulerKind::Fixed,
        worker_threads: workers,
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fixed_pool_bounds_active_tasks() {
    let scheduler = fixed(2);
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let active = active.clone();
            let peak = peak.clone();
            scheduler.spawn(async move {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert!(
        peak.load(Ordering::SeqCst) <= 2,
        "fixed pool of 2 must never run more than 2 chains at once"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_elastic_admits_everything() {
    let scheduler = Scheduler::elastic();
    let done = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let done = done.clone();
            scheduler.spawn(async move {
                done.fetch_add(1, Ordering::SeqCst);
                i
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results.sort_unstable();

    assert_eq!(results, (0..16).collect::<Vec<_>>());
    assert_eq!(done.load(Ordering::SeqCst), 16);
}

#[tokio::test]
async fn test_spawn_returns_task_output() {
    let scheduler = fixed(1);
    let value = scheduler.spawn(async { 41 + 1 }).await.unwrap();
    assert_eq!(value, 42);
}

#[test]
fn test_default_kind_is_fixed() {
    assert_eq!(SchedulerKind::default(), SchedulerKind::Fixed);
}
