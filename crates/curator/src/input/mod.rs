//! Image discovery, ordering and project loading.

mod image;
mod project;

pub use image::{
    ImageFile, SUPPORTED_EXTENSIONS, is_supported_extension, list_images, ordering_key,
    sort_by_ordering_key,
};
pub use project::{Project, ProjectDir, Scope, discover_projects};
