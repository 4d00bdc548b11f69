mod context;
pub mod error;
pub mod store;
pub mod todo_dao;

pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use store::TodoStore;
pub use todo_dao::{TodoDao, UpsertTodo};
