use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use tokio::sync::OwnedSemaphorePermit;

use super::PoolInner;

/// Scoped checkout of one pooled connection.
///
/// Dereferences to the underlying connection. The connection goes back to the pool when
/// the guard is released or dropped, including on early returns and panics. Broken
/// connections, and any connection released after the pool was closed, are closed
/// instead of being pooled.
pub struct PooledConnection<C: Send + 'static> {
    conn: Option<C>,
    permit: Option<OwnedSemaphorePermit>,
    pool: Arc<PoolInner<C>>,
}

impl<C: Send + 'static> PooledConnection<C> {
    pub(super) fn new(conn: C, permit: OwnedSemaphorePermit, pool: Arc<PoolInner<C>>) -> Self {
        Self {
            conn: Some(conn),
            permit: Some(permit),
            pool,
        }
    }

    /// Returns the connection to the pool now instead of at end of scope.
    pub fn release(mut self) {
        self.return_to_pool();
    }

    /// Hands the connection back exactly once; later calls do nothing.
    pub(crate) fn return_to_pool(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        let discard = {
            let mut state = self.pool.state();
            state.acquired -= 1;

            if state.closed || self.pool.manager.has_broken(&conn) {
                state.total_opened -= 1;
                Some(conn)
            } else {
                state.idle.push_back(conn);
                None
            }
        };

        if let Some(conn) = discard {
            tracing::debug!("Closing connection instead of returning it to the pool");

            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let pool = Arc::clone(&self.pool);
                    handle.spawn(async move { pool.manager.close(conn).await });
                }
                Err(_) => drop(conn),
            }
        }

        // Free the slot only after the bookkeeping above is visible to the next acquirer
        self.permit.take();
    }
}

impl<C: Send + 'static> Deref for PooledConnection<C> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.conn {
            Some(conn) => conn,
            None => unreachable!("pooled connection used after release"),
        }
    }
}

impl<C: Send + 'static> DerefMut for PooledConnection<C> {
    fn deref_mut(&mut self) -> &mut C {
        match &mut self.conn {
            Some(conn) => conn,
            None => unreachable!("pooled connection used after release"),
        }
    }
}

impl<C: Send + 'static> Drop for PooledConnection<C> {
    fn drop(&mut self) {
        self.return_to_pool();
    }
}
