use anyhow::Result;
use nslog::prelude::*;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

#[test]
fn test_concurrent_first_use_initializes_once() -> Result<()> {
    std::env::set_var(nslog::DEBUG_ENV, "svc:*");

    let out = Arc::new(Mutex::new(Vec::<u8>::new()));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|id| {
            let out = out.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let factory = nslog::factory() as *const LoggerFactory as usize;
                let log = create_logger_to(format!("svc:{id}"), out);
                let skipped = create_logger_to(
                    format!("other:{id}"),
                    Arc::new(Mutex::new(Vec::<u8>::new())),
                );
                log.println(&"up").map(|_| (factory, skipped.is_enabled()))
            })
        })
        .collect();

    let mut factories = Vec::new();
    for handle in handles {
        let (factory, skipped_enabled) = handle.join().unwrap()?;
        assert!(!skipped_enabled);
        factories.push(factory);
    }

    assert!(factories.windows(2).all(|pair| pair[0] == pair[1]));

    let text = String::from_utf8(out.lock().unwrap().clone())?;
    let mut lines: Vec<_> = text.lines().collect();
    lines.sort_unstable();
    let expected: Vec<_> = (0..8).map(|id| format!("svc:{id}: up")).collect();
    assert_eq!(lines, expected);
    Ok(())
}
