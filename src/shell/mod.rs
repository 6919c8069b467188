// Composition root for the inventory context.
//
// Reads config from the environment, instantiates the key-value backend
// and wires the store into the use case handlers served over HTTP and
// GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
