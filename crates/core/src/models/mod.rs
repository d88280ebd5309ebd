//! DTOs exchanged verbatim with the backend.
//!
//! The client never mutates these. Fields the backend sends but the
//! client does not name are kept in each DTO's `extra` map so a decoded
//! payload serialises back to the same JSON object.

pub mod ack;
pub mod chat;
pub mod dua;
pub mod history;
pub mod imam;
pub mod knowledge;
pub mod user;
pub mod video;

pub use ack::Ack;
pub use chat::{Conversation, Message, SenderType};
pub use dua::{CategoryList, Dua};
pub use history::HistoryEntry;
pub use imam::{AvailabilityResponse, Imam};
pub use knowledge::{Analysis, Ayah, Hadith, Language, Passage, PassageList};
pub use user::{User, UserType};
pub use video::{NewVideo, Video, VideoCreated};
