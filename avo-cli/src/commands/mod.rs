//! CLI command implementations.

pub mod blocks;
pub mod check;
pub mod edit;
pub mod form;
pub mod new;
pub mod normalize;
pub mod page;
pub mod preview;

pub use blocks::list_blocks;
pub use check::check_page;
pub use edit::{move_block, set_field, FieldChange};
pub use form::show_form;
pub use new::new_block;
pub use normalize::normalize_page;
pub use preview::preview_page;
