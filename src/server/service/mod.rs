//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! gateways (Discord commands and REST controllers) and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Roster validation, squad rules and point scoring
//! - **Orchestration**: Coordinating repository calls and the identity resolver
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every multi-row mutation commits atomically

pub mod fantasy;
pub mod identity;
pub mod player;
