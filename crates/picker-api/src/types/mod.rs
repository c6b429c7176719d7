mod item;
mod recent;
mod search;
mod tab;

pub use item::{ItemId, ItemKey, Model, PickerItem};
pub use recent::RecentItem;
pub use search::{SearchParams, SearchRequest};
pub use tab::{RECENTS_MODEL, Tab};
