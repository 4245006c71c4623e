pub mod number;
pub mod props;
pub mod text;

pub use number::format_number;
pub use props::{is_interesting, select_indexes};
pub use text::{crop_string, escape_newlines, quote, sanitize, url_display_string, ELLIPSIS};
