//! 소셜 신원 find-or-create 서비스

pub mod attachment_service;
pub mod resolution_service;

pub use attachment_service::IdentityAttachmentService;
pub use resolution_service::IdentityResolutionService;
