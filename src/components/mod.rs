//! UI Components
//!
//! Views receive the store as a prop and dispatch store operations.

mod error_notification;
mod todo_filter;
mod todo_footer;
mod todo_header;
mod todo_item;
mod todo_list;

pub use error_notification::ErrorNotification;
pub use todo_filter::TodoFilter;
pub use todo_footer::TodoFooter;
pub use todo_header::TodoHeader;
pub use todo_item::{PlaceholderItem, TodoItem};
pub use todo_list::TodoList;
