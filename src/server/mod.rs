//! League backend: Discord command gateway, REST facade and the fantasy core.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot** (`bot/`) - Slash command definitions, admin capability check and rendering
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Roster rules, fantasy roster engine, gameweek
//!   orchestration and the identity resolver
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Rules** (`rules/`) - Static league vocabulary and fantasy constants
//! - **Error Layer** (`error/`) - Application error types, taxonomy and HTTP mapping
//! - **Middleware** (`middleware/`) - API key guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared REST state (database, identity resolver, API key)
//! - **Startup** (`startup`) - Database connection, migrations and resolver setup
//! - **Router** (`router`) - Axum routes and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. A slash command or HTTP request reaches the bot or the router
//! 2. The bot checks admin capability; the router checks the API key
//! 3. Commands and controllers parse input and call a service
//! 4. Services validate, run their transaction and return domain models
//! 5. The result is rendered as an embed, a text reply or a JSON DTO

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod rules;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
