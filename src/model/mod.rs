mod about;
mod common;
mod contact;
mod event;
mod gallery;
mod history;
mod news;
mod slider;
mod what_is;

pub use about::*;
pub use common::{decode_json_field, ItemId, OneOrMany};
pub use contact::*;
pub use event::*;
pub use gallery::*;
pub use history::*;
pub use news::*;
pub use slider::*;
pub use what_is::*;
