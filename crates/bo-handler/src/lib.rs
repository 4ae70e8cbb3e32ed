//! `bo-handler` — handlers and the ordered handler list of one owner.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`handler`]   | `Handler` — priority, enabled toggle, behavior type        |
//! | [`dispatch`]  | `Dispatcher` trait, `NoopDispatcher`                       |
//! | [`list`]      | `HandlerList<D>` — keyed, re-sortable, owns the dispatcher |
//!
//! # Detach-before-write
//!
//! A handler's priority doubles as its position in the dispatcher's
//! subscription order, and the dispatcher does not support changing it while
//! the handler is subscribed.  `HandlerList` therefore never hands out a
//! `&mut Handler` except inside [`HandlerList::with_detached`], which
//! unsubscribes the handler first and re-subscribes it afterwards if it was
//! enabled.

pub mod dispatch;
pub mod handler;
pub mod list;

#[cfg(test)]
mod tests;

pub use dispatch::{Dispatcher, NoopDispatcher};
pub use handler::Handler;
pub use list::HandlerList;
