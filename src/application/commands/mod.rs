// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - One module per page: search (home), details, favorites
// - Commands are thin adapters between pages and services
// - Commands accept DTOs / raw route parameters, return DTOs
// - Errors leave as serialized ErrorResponse
// - Commands NEVER contain business logic

pub mod details_commands;
pub mod favorite_commands;
pub mod search_commands;

pub use details_commands::*;
pub use favorite_commands::*;
pub use search_commands::*;
