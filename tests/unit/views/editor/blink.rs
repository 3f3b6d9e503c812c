use super::*;
use std::sync::mpsc;

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn disabled_scheduler_never_toggles() {
    let now = Instant::now();
    let mut blink = CursorBlinkScheduler::new(SECOND);
    assert!(!blink.is_visible());
    assert!(!blink.poll(now + SECOND * 3));
    assert!(!blink.toggle(now));
    assert!(!blink.is_visible());
}

#[test]
fn enable_shows_caret_and_poll_toggles_each_period() {
    let now = Instant::now();
    let mut blink = CursorBlinkScheduler::new(SECOND);
    blink.enable(now);
    assert!(blink.is_visible());

    assert!(!blink.poll(now + Duration::from_millis(999)));
    assert!(blink.poll(now + SECOND));
    assert!(!blink.is_visible());
    assert!(!blink.poll(now + Duration::from_millis(1500)));
    assert!(blink.poll(now + SECOND * 2));
    assert!(blink.is_visible());
}

#[test]
fn reset_restarts_the_period_visible() {
    let now = Instant::now();
    let mut blink = CursorBlinkScheduler::new(SECOND);
    blink.enable(now);
    blink.toggle(now + SECOND);
    assert!(!blink.is_visible());

    blink.reset(now + Duration::from_millis(1200));
    assert!(blink.is_visible());
    assert!(!blink.poll(now + SECOND * 2));
    assert!(blink.poll(now + Duration::from_millis(2200)));
}

#[test]
fn reset_does_not_enable() {
    let mut blink = CursorBlinkScheduler::new(SECOND);
    blink.reset(Instant::now());
    assert!(!blink.is_enabled());
    assert!(!blink.is_visible());
}

#[test]
fn disable_hides_caret() {
    let now = Instant::now();
    let mut blink = CursorBlinkScheduler::new(SECOND);
    blink.enable(now);
    blink.enable(now);
    assert!(blink.is_visible());
    blink.disable();
    assert!(!blink.is_enabled());
    assert!(!blink.is_visible());
}

#[test]
fn timer_sends_ticks_until_dropped() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let (tx, rx) = mpsc::channel();
    let driver = BlinkDriver::new(rt.handle().clone(), tx);

    let timer = driver.start(Duration::from_millis(5));
    assert_eq!(rx.recv_timeout(SECOND), Ok(BlinkTick));
    assert_eq!(rx.recv_timeout(SECOND), Ok(BlinkTick));

    drop(timer);
    drop(driver);
    // Ticks already queued may still arrive; after that the channel closes.
    let deadline = Instant::now() + SECOND * 2;
    loop {
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(BlinkTick) => assert!(Instant::now() < deadline),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => assert!(Instant::now() < deadline),
        }
    }
}
