//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the clinic service: HTTP endpoints,
//! business rules, data access, and the infrastructure they run on. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, validators and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token verification and role gating
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Pool** (`pool/`) - Bounded connection pool with scoped checkout
//! - **State** (`state`) - Shared application state (pool, token service)
//! - **Startup** (`startup`) - Pool construction and migrations
//! - **Router** (`router`) and **Docs** (`docs`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** verifies the token and the caller's role before the handler runs
//! 3. **Controller** checks out a pooled connection, converts DTOs to params, calls a service
//! 4. **Service** runs validators and writes inside one transaction
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the result to a DTO; the connection returns to the pool

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod pool;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
