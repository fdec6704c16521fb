//! Static site content and the knowledge assembler.
//!
//! The site's structured content (about, team, services, projects,
//! careers, contact) lives here as plain in-memory collections. The
//! chat client flattens it into a single knowledge blob on every send
//! so the assistant always answers from current content.

pub mod data;
pub mod knowledge;

pub use data::{
    About, Career, ContactInfo, Project, Service, SiteData, TeamMember, site_data,
};
pub use knowledge::{assemble_knowledge, render_knowledge};
