use parking_lot::Mutex;

// Engine setup and teardown are not assumed to be re-entrant.
static ENGINE_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn with_engine_lock<R>(f: impl FnOnce() -> R) -> R {
    let _guard = ENGINE_LOCK.lock();
    f()
}
