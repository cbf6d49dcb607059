use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

fn recover<G>(
    result: Result<G, PoisonError<G>>,
    namespace: &'static str,
    op: &'static str,
    kind: &'static str,
) -> G {
    result.unwrap_or_else(|poisoned| {
        warn!(
            namespace,
            op,
            lock_kind = kind,
            "recovered poisoned cache lock; entries may be stale"
        );
        poisoned.into_inner()
    })
}

pub(crate) fn read_guard<'a, T>(
    lock: &'a RwLock<T>,
    namespace: &'static str,
    op: &'static str,
) -> RwLockReadGuard<'a, T> {
    recover(lock.read(), namespace, op, "read")
}

pub(crate) fn write_guard<'a, T>(
    lock: &'a RwLock<T>,
    namespace: &'static str,
    op: &'static str,
) -> RwLockWriteGuard<'a, T> {
    recover(lock.write(), namespace, op, "write")
}
