//! ドメイン型（Resource、enum、絞り込みルール）

pub mod annotation;
pub mod approval;
pub mod command;
pub mod draft;
pub mod query;
pub mod resource;
pub mod seed;

pub use annotation::Annotation;
pub use approval::Approval;
pub use command::Command;
pub use draft::ResourceDraft;
pub use query::{filter_resources, TypeFilter};
pub use resource::{Resource, ResourceType};
