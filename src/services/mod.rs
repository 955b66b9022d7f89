pub mod settings_applier;

pub use settings_applier::{BundledStylesheets, SettingsApplier, StylesheetResolver};
