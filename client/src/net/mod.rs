//! Network boundary: host API, read-only RPC proxy, injected wallet.
//!
//! Client-side (hydrate) code performs real browser I/O. Server-side (SSR)
//! builds compile the same types with stubs that return errors, since these
//! calls are only meaningful in the browser.

pub mod api;
pub mod context;
pub mod rpc_reader;
pub mod timer;
pub mod wallet;
