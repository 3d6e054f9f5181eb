//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries and convert rows into domain models at the
//! boundary. Every repository is generic over `ConnectionTrait` so services can run the
//! same queries against the pooled connection or inside an open transaction when an
//! operation touches more than one row.

pub mod fantasy;
pub mod player;

#[cfg(test)]
mod test;
