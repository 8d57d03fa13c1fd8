// Route handlers, grouped by dashboard area.

pub mod analysis;
pub mod chats;
pub mod export;
