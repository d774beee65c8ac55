pub mod card_cursor;
pub mod chat_viewport;
pub mod input_box;

pub use card_cursor::CardCursor;
pub use chat_viewport::ChatViewport;
pub use input_box::InputBox;
