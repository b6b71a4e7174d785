//! Remote task-system clients.

pub mod asana;
pub mod trello;

pub use asana::AsanaClient;
pub use trello::TrelloClient;
