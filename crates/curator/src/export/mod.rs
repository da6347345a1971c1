//! Writing curated output.
//!
//! Each project gets its own directory under the destination root, with files
//! named `<Prefix>_<NN>_<Label>.<ext>` and a `_mapping.json` sidecar:
//!
//! ```text
//! curated_output/Woodcarvings/
//! ├── Golden_Eagle/
//! │   ├── Golden_Eagle_01_RawWood.jpg
//! │   ├── Golden_Eagle_02_RoughShape.jpg
//! │   ├── ...
//! │   └── _mapping.json
//! └── _BestOf/
//!     ├── Golden_Eagle_Best_1.jpg
//!     └── Golden_Eagle_Best_2.jpg
//! ```
//!
//! Previous output with the same prefix is removed before writing, so a run
//! always leaves exactly the current picks behind.

mod exporter;
mod mapping;
mod naming;
mod transfer;
mod writer;

pub use exporter::ProjectExporter;
pub use mapping::{MAPPING_FILE_NAME, MappingEntry, load_mapping, mapping_path, save_mapping};
pub use naming::{
    best_of_file_name, best_of_glob, curated_file_name, output_extension, project_output_glob,
    sanitize_name,
};
pub use transfer::{ExportMode, ensure_dir, remove_matching, transfer};
pub use writer::CuratedSet;
