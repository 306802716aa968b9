//! Bounded pool of database connections with scoped checkout.
//!
//! The pool keeps between `min_size` and `max_size` live connections. Callers obtain a
//! [`PooledConnection`] guard from [`ConnectionPool::acquire`]; the guard hands the
//! connection back when it is released or dropped, on every exit path.
//!
//! Capacity is enforced by a semaphore with `max_size` permits. Each checked-out guard
//! owns one permit, so waiting for a free slot is an async wait bounded by the acquire
//! timeout. Bookkeeping (`idle`, `total_opened`, `acquired`) sits behind a plain mutex that
//! is only held for short, non-async sections.
//!
//! Opening, validating and closing connections goes through a [`ConnectionManager`], so
//! the same pool drives real database connections in production and fakes in tests.

pub mod connection;
pub mod manager;
pub mod transaction;

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::sync::Semaphore;

use crate::server::error::pool::PoolError;

pub use connection::PooledConnection;
pub use manager::{ConnectionManager, SeaOrmConnector};

/// Pool bounds and timeouts.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Connections opened by `build` and kept warm.
    pub min_size: u32,
    /// Hard cap on connections open at once.
    pub max_size: u32,
    /// Upper bound on opening one connection.
    pub connect_timeout: Duration,
    /// Upper bound on waiting for a free slot before `PoolError::Exhausted`.
    pub acquire_timeout: Duration,
    /// Validate idle connections with the manager before handing them out.
    pub test_on_checkout: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_size: 10,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(30),
            test_on_checkout: false,
        }
    }
}

impl PoolConfig {
    fn validate(&self) -> Result<(), PoolError> {
        if self.max_size == 0 {
            return Err(PoolError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(PoolError::InvalidConfig(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

/// Point-in-time snapshot of pool occupancy.
///
/// `acquired + idle == total_opened <= max_size` holds for every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub total_opened: u32,
    pub acquired: u32,
    pub idle: u32,
    pub max_size: u32,
}

pub(crate) struct PoolState<C> {
    idle: VecDeque<C>,
    total_opened: u32,
    acquired: u32,
    closed: bool,
}

pub(crate) struct PoolInner<C> {
    manager: Box<dyn ConnectionManager<Connection = C>>,
    config: PoolConfig,
    state: Mutex<PoolState<C>>,
    permits: Arc<Semaphore>,
}

impl<C: Send + 'static> PoolInner<C> {
    /// Locks the bookkeeping. A poisoned lock still holds consistent counters because
    /// every critical section updates them before anything that can panic.
    fn state(&self) -> MutexGuard<'_, PoolState<C>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn open(&self) -> Result<C, PoolError> {
        let timeout = self.config.connect_timeout;

        match tokio::time::timeout(timeout, self.manager.connect()).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(err)) => Err(PoolError::Connect(err)),
            Err(_) => Err(PoolError::ConnectTimeout(timeout)),
        }
    }

    /// Gives up a slot whose connection is being discarded.
    fn forget_acquired(&self) {
        let mut state = self.state();
        state.acquired -= 1;
        state.total_opened -= 1;
    }
}

/// Cloneable handle to a shared connection pool.
pub struct ConnectionPool<C: Send + 'static> {
    inner: Arc<PoolInner<C>>,
}

impl<C: Send + 'static> Clone for ConnectionPool<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Send + 'static> ConnectionPool<C> {
    /// Builds the pool and opens `min_size` connections up front.
    ///
    /// # Arguments
    /// - `manager` - Opens, validates and closes connections
    /// - `config` - Pool bounds and timeouts
    ///
    /// # Returns
    /// - `Ok(ConnectionPool)` - Pool with `min_size` idle connections
    /// - `Err(PoolError::InvalidConfig)` - `max_size` is zero or below `min_size`
    /// - `Err(PoolError::Connect | ConnectTimeout)` - A warm connection could not be opened
    pub async fn build<M>(manager: M, config: PoolConfig) -> Result<Self, PoolError>
    where
        M: ConnectionManager<Connection = C> + 'static,
    {
        config.validate()?;

        let pool = Self {
            inner: Arc::new(PoolInner {
                manager: Box::new(manager),
                permits: Arc::new(Semaphore::new(config.max_size as usize)),
                state: Mutex::new(PoolState {
                    idle: VecDeque::with_capacity(config.max_size as usize),
                    total_opened: 0,
                    acquired: 0,
                    closed: false,
                }),
                config,
            }),
        };

        for _ in 0..pool.inner.config.min_size {
            let conn = pool.inner.open().await?;
            let mut state = pool.inner.state();
            state.idle.push_back(conn);
            state.total_opened += 1;
        }

        tracing::info!(
            min_size = pool.inner.config.min_size,
            max_size = pool.inner.config.max_size,
            "Connection pool ready"
        );

        Ok(pool)
    }

    /// Checks out a connection.
    ///
    /// Reuses an idle connection when one is available, otherwise opens a new one. When
    /// all `max_size` connections are checked out, waits up to the acquire timeout for one
    /// to be returned. Never retries a failed connect.
    ///
    /// # Returns
    /// - `Ok(PooledConnection)` - Guard that returns the connection when dropped
    /// - `Err(PoolError::Exhausted)` - No slot freed up within the acquire timeout
    /// - `Err(PoolError::Closed)` - The pool has been closed
    /// - `Err(PoolError::Connect | ConnectTimeout)` - Opening a new connection failed
    pub async fn acquire(&self) -> Result<PooledConnection<C>, PoolError> {
        if self.inner.state().closed {
            return Err(PoolError::Closed);
        }

        let timeout = self.inner.config.acquire_timeout;
        let permit = match tokio::time::timeout(
            timeout,
            Arc::clone(&self.inner.permits).acquire_owned(),
        )
        .await
        {
            Ok(Ok(permit)) => permit,
            // Semaphore is closed by `close()`
            Ok(Err(_)) => return Err(PoolError::Closed),
            Err(_) => return Err(PoolError::Exhausted(timeout)),
        };

        loop {
            let reused = {
                let mut state = self.inner.state();
                if state.closed {
                    return Err(PoolError::Closed);
                }
                state.acquired += 1;
                match state.idle.pop_front() {
                    Some(conn) => Some(conn),
                    None => {
                        state.total_opened += 1;
                        None
                    }
                }
            };

            let conn = match reused {
                Some(conn) => {
                    if self.inner.config.test_on_checkout && !self.inner.manager.is_valid(&conn).await
                    {
                        tracing::warn!("Discarding idle database connection that failed validation");
                        self.inner.forget_acquired();
                        self.inner.manager.close(conn).await;
                        continue;
                    }
                    conn
                }
                None => match self.inner.open().await {
                    Ok(conn) => conn,
                    Err(err) => {
                        self.inner.forget_acquired();
                        return Err(err);
                    }
                },
            };

            return Ok(PooledConnection::new(conn, permit, Arc::clone(&self.inner)));
        }
    }

    /// Returns a snapshot of the pool's occupancy.
    pub fn status(&self) -> PoolStatus {
        let state = self.inner.state();

        PoolStatus {
            total_opened: state.total_opened,
            acquired: state.acquired,
            idle: state.idle.len() as u32,
            max_size: self.inner.config.max_size,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.state().closed
    }

    /// Closes the pool.
    ///
    /// Idle connections are closed immediately, waiters are woken with `PoolError::Closed`,
    /// and connections still checked out are closed as their guards release them.
    /// Calling `close` twice is harmless.
    pub async fn close(&self) {
        let drained: Vec<C> = {
            let mut state = self.inner.state();
            if state.closed {
                return;
            }
            state.closed = true;
            let drained: Vec<C> = state.idle.drain(..).collect();
            state.total_opened -= drained.len() as u32;
            drained
        };

        self.inner.permits.close();

        let count = drained.len();
        for conn in drained {
            self.inner.manager.close(conn).await;
        }

        tracing::info!(closed = count, "Connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use async_trait::async_trait;
    use sea_orm::DbErr;

    use super::*;

    /// Connection stand-in carrying an id and a flag the test can flip to mark it broken.
    struct FakeConn {
        id: u32,
        broken: Arc<AtomicBool>,
    }

    #[derive(Clone, Default)]
    struct FakeManager {
        opened: Arc<AtomicU32>,
        closed: Arc<AtomicU32>,
        fail_connect: Arc<AtomicBool>,
        invalid: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ConnectionManager for FakeManager {
        type Connection = FakeConn;

        async fn connect(&self) -> Result<FakeConn, DbErr> {
            if self.fail_connect.load(Ordering::SeqCst) {
                return Err(DbErr::Custom("connection refused".to_string()));
            }
            let id = self.opened.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(FakeConn {
                id,
                broken: Arc::new(AtomicBool::new(false)),
            })
        }

        async fn is_valid(&self, _conn: &FakeConn) -> bool {
            !self.invalid.load(Ordering::SeqCst)
        }

        fn has_broken(&self, conn: &FakeConn) -> bool {
            conn.broken.load(Ordering::SeqCst)
        }

        async fn close(&self, _conn: FakeConn) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn config(min_size: u32, max_size: u32) -> PoolConfig {
        PoolConfig {
            min_size,
            max_size,
            connect_timeout: Duration::from_millis(200),
            acquire_timeout: Duration::from_millis(50),
            test_on_checkout: false,
        }
    }

    fn assert_invariant(status: PoolStatus) {
        assert_eq!(status.acquired + status.idle, status.total_opened);
        assert!(status.total_opened <= status.max_size);
    }

    #[tokio::test]
    async fn build_opens_min_size_connections() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let pool = ConnectionPool::build(manager.clone(), config(2, 4)).await?;

        let status = pool.status();
        assert_eq!(status.total_opened, 2);
        assert_eq!(status.idle, 2);
        assert_eq!(status.acquired, 0);
        assert_eq!(manager.opened.load(Ordering::SeqCst), 2);

        Ok(())
    }

    #[tokio::test]
    async fn build_rejects_min_above_max() {
        let result = ConnectionPool::build(FakeManager::default(), config(3, 2)).await;

        assert!(matches!(result, Err(PoolError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn reuses_released_connection() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let pool = ConnectionPool::build(manager.clone(), config(0, 2)).await?;

        let first = pool.acquire().await?;
        let first_id = first.id;
        first.release();

        let second = pool.acquire().await?;
        assert_eq!(second.id, first_id);
        assert_eq!(manager.opened.load(Ordering::SeqCst), 1);
        assert_invariant(pool.status());

        Ok(())
    }

    #[tokio::test]
    async fn exhausted_after_acquire_timeout() -> Result<(), PoolError> {
        let pool = ConnectionPool::build(FakeManager::default(), config(0, 1)).await?;

        let _held = pool.acquire().await?;
        let result = pool.acquire().await;

        assert!(matches!(result, Err(PoolError::Exhausted(_))));
        assert_invariant(pool.status());

        Ok(())
    }

    #[tokio::test]
    async fn waiter_gets_connection_released_before_timeout() -> Result<(), PoolError> {
        let mut cfg = config(0, 1);
        cfg.acquire_timeout = Duration::from_secs(2);
        let pool = ConnectionPool::build(FakeManager::default(), cfg).await?;

        let held = pool.acquire().await?;
        let waiter = {
            let pool = pool.clone();
            tokio::spawn(async move { pool.acquire().await.map(|conn| conn.id) })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        let held_id = held.id;
        drop(held);

        let got = waiter.await.unwrap()?;
        assert_eq!(got, held_id);

        Ok(())
    }

    #[tokio::test]
    async fn invariant_holds_under_concurrent_checkouts() -> Result<(), PoolError> {
        let mut cfg = config(1, 3);
        cfg.acquire_timeout = Duration::from_secs(2);
        let pool = ConnectionPool::build(FakeManager::default(), cfg).await?;

        let mut tasks = Vec::new();
        for _ in 0..12 {
            let pool = pool.clone();
            tasks.push(tokio::spawn(async move {
                let conn = pool.acquire().await?;
                assert_invariant(pool.status());
                tokio::time::sleep(Duration::from_millis(5)).await;
                drop(conn);
                assert_invariant(pool.status());
                Ok::<_, PoolError>(())
            }));
        }
        for task in tasks {
            task.await.unwrap()?;
        }

        let status = pool.status();
        assert_invariant(status);
        assert_eq!(status.acquired, 0);
        assert!(status.total_opened <= 3);

        Ok(())
    }

    #[tokio::test]
    async fn double_release_never_inflates_idle() -> Result<(), PoolError> {
        let pool = ConnectionPool::build(FakeManager::default(), config(0, 2)).await?;

        let mut conn = pool.acquire().await?;
        conn.return_to_pool();
        conn.return_to_pool();
        drop(conn);

        let status = pool.status();
        assert_eq!(status.idle, 1);
        assert_eq!(status.total_opened, 1);
        assert_invariant(status);

        Ok(())
    }

    #[tokio::test]
    async fn broken_connection_is_discarded() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let pool = ConnectionPool::build(manager.clone(), config(0, 2)).await?;

        let conn = pool.acquire().await?;
        conn.broken.store(true, Ordering::SeqCst);
        drop(conn);
        tokio::time::sleep(Duration::from_millis(10)).await;

        let status = pool.status();
        assert_eq!(status.total_opened, 0);
        assert_eq!(status.idle, 0);

        Ok(())
    }

    #[tokio::test]
    async fn failed_connect_frees_the_slot() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let pool = ConnectionPool::build(manager.clone(), config(0, 1)).await?;

        manager.fail_connect.store(true, Ordering::SeqCst);
        assert!(matches!(pool.acquire().await, Err(PoolError::Connect(_))));
        assert_eq!(pool.status().total_opened, 0);

        manager.fail_connect.store(false, Ordering::SeqCst);
        let conn = pool.acquire().await?;
        assert_eq!(conn.id, 1);

        Ok(())
    }

    #[tokio::test]
    async fn replaces_idle_connection_failing_validation() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let mut cfg = config(1, 2);
        cfg.test_on_checkout = true;
        let pool = ConnectionPool::build(manager.clone(), cfg).await?;

        manager.invalid.store(true, Ordering::SeqCst);
        let conn = pool.acquire().await?;

        // Warm connection 1 was discarded, connection 2 opened in its place
        assert_eq!(conn.id, 2);
        assert_eq!(manager.closed.load(Ordering::SeqCst), 1);
        assert_invariant(pool.status());

        Ok(())
    }

    #[tokio::test]
    async fn close_drains_idle_and_rejects_acquire() -> Result<(), PoolError> {
        let manager = FakeManager::default();
        let pool = ConnectionPool::build(manager.clone(), config(2, 3)).await?;

        let held = pool.acquire().await?;
        pool.close().await;

        assert_eq!(manager.closed.load(Ordering::SeqCst), 1);
        assert!(matches!(pool.acquire().await, Err(PoolError::Closed)));

        // Released after close: closed instead of pooled
        drop(held);
        tokio::time::sleep(Duration::from_millis(10)).await;
        let status = pool.status();
        assert_eq!(status.idle, 0);
        assert_eq!(status.total_opened, 0);
        assert_eq!(manager.closed.load(Ordering::SeqCst), 2);

        Ok(())
    }
}
