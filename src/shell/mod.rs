// Composition root for the books bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory bookshelf and the id and clock capabilities.
// - Wire them into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
