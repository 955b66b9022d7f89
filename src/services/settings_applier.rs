use crate::{
    db::SettingsProfileStore,
    error::{AppError, Result},
    models::SettingsProfile,
    view::{EventQueue, ViewRoot},
};

/// Resolves the stylesheet for the light or dark theme.
pub trait StylesheetResolver: Send + Sync {
    fn stylesheet(&self, in_dark_mode: bool) -> String;
}

/// The stylesheets shipped with the tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStylesheets;

impl BundledStylesheets {
    pub const DARK: &'static str = "/css/darkMode.css";
    pub const LIGHT: &'static str = "/css/stylesheet.css";
}

impl StylesheetResolver for BundledStylesheets {
    fn stylesheet(&self, in_dark_mode: bool) -> String {
        if in_dark_mode {
            Self::DARK.to_string()
        } else {
            Self::LIGHT.to_string()
        }
    }
}

/// Replace whatever look the root had with the one described by `settings`.
pub fn apply_settings_to_root(settings: &SettingsProfile, stylesheet: String, root: &mut ViewRoot) {
    root.stylesheets.clear();
    root.stylesheets.push(stylesheet);

    root.style_classes.clear();
    root.style.clear();
    root.style_classes.push("root".to_string());
    root.style_classes.push(format!("root{}", settings.font_family));
    root.style = format!("font-size: {}", settings.font_size.points());
}

/// Post the look of `settings` to the UI thread.
pub fn post_settings(
    settings: SettingsProfile,
    resolver: &dyn StylesheetResolver,
    queue: &mut EventQueue,
) {
    let stylesheet = resolver.stylesheet(settings.in_dark_mode);
    queue.run_later(move |root| apply_settings_to_root(&settings, stylesheet, root));
}

/// Broadcasts the "Current" settings profile to the visible root.
pub struct SettingsApplier {
    store: SettingsProfileStore,
    resolver: Box<dyn StylesheetResolver>,
}

impl SettingsApplier {
    pub fn new(store: SettingsProfileStore) -> Self {
        Self::with_resolver(store, Box::new(BundledStylesheets))
    }

    pub fn with_resolver(
        store: SettingsProfileStore,
        resolver: Box<dyn StylesheetResolver>,
    ) -> Self {
        Self { store, resolver }
    }

    pub fn resolver(&self) -> &dyn StylesheetResolver {
        self.resolver.as_ref()
    }

    /// Reads the "Current" row and queues its application to the root.
    ///
    /// A missing "Current" row means the store is not set up for this tool
    /// and is returned as [`AppError::MissingCurrentSettings`].
    pub async fn apply_current_settings(&self, queue: &mut EventQueue) -> Result<()> {
        let current = self
            .store
            .get_current_settings()
            .await?
            .ok_or(AppError::MissingCurrentSettings)?;

        tracing::debug!(
            "Applying current settings: dark mode {}, {} {}pt",
            current.in_dark_mode,
            current.font_family,
            current.font_size.points()
        );

        post_settings(current, self.resolver(), queue);
        Ok(())
    }
}
