use super::id_macro::define_id;

define_id! {
    /// Internal identity of a clipboard item.
    ///
    /// 剪贴板条目的内部标识。
    ///
    /// `createdAt` is a wall-clock value and two items built in the same
    /// millisecond would share it, so every item also carries a random id.
    pub struct ItemId;
}
