use cronos::core::{Phase, StopwatchEngine, StopwatchState};
use cronos::models::StopwatchRecord;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::sleep;

fn engine() -> StopwatchEngine {
    StopwatchEngine::new(Handle::current())
}

async fn wait_ms(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_new_engine_is_idle_and_empty() {
    let e = engine();
    assert_eq!(e.snapshot(), StopwatchState::default());
    assert_eq!(e.phase(), Phase::Idle);
    assert!(!e.has_active_tick());
}

#[tokio::test(start_paused = true)]
async fn test_ticks_add_one_second_each() {
    let e = engine();
    e.start();
    assert_eq!(e.phase(), Phase::Running);
    assert!(e.has_active_tick());

    wait_ms(3500).await;
    assert_eq!(e.snapshot().elapsed_millis, 3000);
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_is_a_no_op() {
    let e = engine();
    e.start();
    wait_ms(1500).await;

    // a second arm would restart the period and fire at 2500 instead of 2000
    e.start();
    e.start();
    wait_ms(1000).await;

    let s = e.snapshot();
    assert_eq!(s.elapsed_millis, 2000);
    assert!(s.running);
    assert!(e.has_active_tick());
}

#[tokio::test(start_paused = true)]
async fn test_start_pause_cycles_never_double_count() {
    let e = engine();
    for _ in 0..5 {
        e.start();
        assert!(e.has_active_tick());
        e.pause();
        assert!(!e.has_active_tick());
    }
    e.start();
    wait_ms(3500).await;
    assert_eq!(e.snapshot().elapsed_millis, 3000);
}

#[tokio::test(start_paused = true)]
async fn test_pause_keeps_time_and_marks_dirty() {
    let e = engine();
    e.start();
    wait_ms(2500).await;
    e.pause();

    let s = e.snapshot();
    assert!(!s.running);
    assert!(s.dirty);
    assert_eq!(s.elapsed_millis, 2000);
    assert_eq!(e.phase(), Phase::Paused);

    // nothing lands while paused
    wait_ms(5000).await;
    assert_eq!(e.snapshot().elapsed_millis, 2000);
}

#[tokio::test(start_paused = true)]
async fn test_pause_when_idle_does_nothing() {
    let e = engine();
    e.pause();
    let s = e.snapshot();
    assert!(!s.dirty);
    assert_eq!(e.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_resume_continues_from_paused_value() {
    let e = engine();
    e.start();
    wait_ms(3500).await;
    assert_eq!(e.snapshot().elapsed_millis, 3000);

    e.pause();
    let s = e.snapshot();
    assert!(!s.running);
    assert!(s.dirty);
    assert_eq!(s.elapsed_millis, 3000);

    e.start();
    wait_ms(2500).await;
    let s = e.snapshot();
    assert_eq!(s.elapsed_millis, 5000);
    // dirty stays set until a reset or load
    assert!(s.dirty);
}

#[tokio::test(start_paused = true)]
async fn test_stop_resets_everything_from_any_state() {
    let e = engine();

    // idle
    e.set_title("idle");
    e.stop();
    assert_eq!(e.snapshot(), StopwatchState::default());

    // running
    e.set_title("running");
    e.start();
    wait_ms(1500).await;
    e.stop();
    assert_eq!(e.snapshot(), StopwatchState::default());
    assert!(!e.has_active_tick());

    // paused
    e.set_title("paused");
    e.start();
    wait_ms(1500).await;
    e.pause();
    e.stop();
    assert_eq!(e.snapshot(), StopwatchState::default());
}

#[tokio::test(start_paused = true)]
async fn test_stop_before_first_tick_leaves_no_stray_tick() {
    let e = engine();
    e.start();
    e.stop();

    wait_ms(5000).await;
    let s = e.snapshot();
    assert_eq!(s.elapsed_millis, 0);
    assert!(!s.running);
    assert!(!e.has_active_tick());
}

#[tokio::test(start_paused = true)]
async fn test_load_populates_without_running() {
    let e = engine();
    let record = StopwatchRecord {
        id: 7,
        title: "Reading".into(),
        elapsed_millis: 42_000,
    };
    e.load(&record);

    let s = e.snapshot();
    assert_eq!(s.title, "Reading");
    assert_eq!(s.elapsed_millis, 42_000);
    assert!(!s.running);
    assert!(!s.dirty);
    assert_eq!(e.phase(), Phase::Idle);

    e.start();
    wait_ms(1500).await;
    assert_eq!(e.snapshot().elapsed_millis, 43_000);
}

#[tokio::test(start_paused = true)]
async fn test_load_while_running_cancels_the_tick() {
    let e = engine();
    e.start();
    wait_ms(1500).await;

    e.load(&StopwatchRecord {
        id: 3,
        title: "Other".into(),
        elapsed_millis: 7000,
    });
    assert!(!e.has_active_tick());

    wait_ms(3000).await;
    let s = e.snapshot();
    assert_eq!(s.elapsed_millis, 7000);
    assert!(!s.running);
}

#[tokio::test(start_paused = true)]
async fn test_set_title_has_no_side_effects() {
    let e = engine();
    e.set_title("Gym");
    let s = e.snapshot();
    assert_eq!(s.title, "Gym");
    assert!(!s.running);
    assert!(!s.dirty);
    assert_eq!(s.elapsed_millis, 0);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_every_change() {
    let e = engine();
    let mut rx = e.subscribe();

    e.set_title("Watched");
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().title, "Watched");

    e.start();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().running);

    // next change is the first tick
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().elapsed_millis, 1000);

    e.pause();
    rx.changed().await.unwrap();
    let s = rx.borrow_and_update().clone();
    assert!(!s.running);
    assert!(s.dirty);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_engine_stops_ticking() {
    let e = engine();
    let rx = e.subscribe();
    e.start();
    wait_ms(1500).await;
    drop(e);

    wait_ms(5000).await;
    assert_eq!(rx.borrow().elapsed_millis, 1000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_pause_on_multi_thread_runtime_freezes_counter() {
    let e = engine();
    e.start();
    e.pause();
    let frozen = e.snapshot().elapsed_millis;

    sleep(Duration::from_millis(1200)).await;
    assert_eq!(e.snapshot().elapsed_millis, frozen);
    assert!(!e.has_active_tick());
}
