pub mod annotation;
pub mod message;
pub mod room;

pub use annotation::Annotation;
pub use message::Message;
pub use room::RoomSnapshot;
