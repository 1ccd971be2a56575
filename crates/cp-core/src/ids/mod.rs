//! ID type wrappers for type safety.

mod id_macro;
mod item_id;

pub use item_id::ItemId;
