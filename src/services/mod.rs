// Service exports
pub mod branding;
pub mod catalog;
pub mod sessions;

pub use branding::{BrandingStore, BrandingSettings, ColorPalette, BrandingError};
pub use catalog::{WineCatalog, CatalogError};
pub use sessions::{ConsultationStore, SessionError, SessionStats};
