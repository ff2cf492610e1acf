use super::*;

#[test]
fn test_progress_hidden_in_quiet_mode() {
    let progress = HashProgress::new(true);
    progress.inc();
    progress.inc();
    progress.finish();

    assert_eq!(progress.count(), 2);
}

#[test]
fn test_progress_clone_shares_counter() {
    let progress = HashProgress::hidden();
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.count(), 2);
    assert_eq!(cloned.count(), 2);
}

#[test]
fn test_progress_visible_spinner_path() {
    let progress = HashProgress::new_with_visibility(false, true);

    for _ in 0..5 {
        progress.inc();
    }
    progress.finish();

    assert_eq!(progress.count(), 5);
}

#[test]
fn test_progress_increment_from_threads() {
    let progress = HashProgress::hidden();

    std::thread::scope(|s| {
        for _ in 0..4 {
            let p = progress.clone();
            s.spawn(move || {
                for _ in 0..25 {
                    p.inc();
                }
            });
        }
    });

    assert_eq!(progress.count(), 100);
}
