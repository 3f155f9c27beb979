//! In-memory storage for todos.
//!
//! Nothing is written to disk. A store lives as long as the process and can
//! optionally be pre-populated from a seed file:
//!
//! ```yaml
//! - id: 1
//!   title: Buy milk
//!   completed: false
//! ```
//!
//! ## Components
//!
//! - [`TodoStore`]: the locked, ordered todo collection
//! - [`load_seed`]: read an initial list from YAML or JSON

mod seed;
mod store;

pub use seed::{SeedFormat, detect_format, load_seed, parse_seed};
pub use store::TodoStore;
