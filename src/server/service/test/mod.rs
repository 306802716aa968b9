use chrono::{NaiveTime, Utc};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    model::auth::Role,
    server::{
        error::{domain::DomainError, AppError},
        model::auth::Identity,
    },
};

mod appointment;
mod pet;
mod veterinarian;

async fn clinic_db() -> TestContext {
    TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap()
}

fn caller(user_id: i32, role: Role) -> Identity {
    let now = Utc::now().timestamp();
    Identity {
        user_id,
        role,
        issued_at: now,
        expires_at: now + 900,
    }
}

fn domain_err(result: Result<impl std::fmt::Debug, AppError>) -> DomainError {
    match result {
        Err(AppError::DomainErr(err)) => err,
        other => panic!("expected a domain error, got {:?}", other),
    }
}
