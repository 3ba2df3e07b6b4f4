//! Domain model types (pure).
//!
//! Portfolio content records, key actions and the error taxonomy.

pub mod content;
pub mod error;
pub mod key_action;

pub use content::{
    ActionLink, ContactEntry, FooterContent, HeroContent, LinkKind, LinkRef, Portfolio,
    SectionHeading, SkillGroup,
};
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
