use std::collections::BTreeMap;

use crate::{
    db::{Editable, SettingsProfileStore},
    error::{AppError, Result},
    models::{FontFamily, FontSize, SettingsProfile},
    services::settings_applier::{SettingsApplier, post_settings},
    view::EventQueue,
};

pub const SELECTED_BUTTON_CLASS: &str = "selectedButton";

/// The indicator buttons of a profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileButton {
    SmallFontSize,
    MediumFontSize,
    BigFontSize,
    Arial,
    ComicSansMS,
    TimesNewRoman,
}

impl ProfileButton {
    pub const ALL: [ProfileButton; 6] = [
        ProfileButton::SmallFontSize,
        ProfileButton::MediumFontSize,
        ProfileButton::BigFontSize,
        ProfileButton::Arial,
        ProfileButton::ComicSansMS,
        ProfileButton::TimesNewRoman,
    ];

    fn base_class(self) -> &'static str {
        match self {
            ProfileButton::SmallFontSize => "smallFontSizeButton",
            ProfileButton::MediumFontSize => "mediumFontSizeButton",
            ProfileButton::BigFontSize => "bigFontSizeButton",
            ProfileButton::Arial => "arialButton",
            ProfileButton::ComicSansMS => "comicSansMSButton",
            ProfileButton::TimesNewRoman => "timesNewRomanButton",
        }
    }

    pub fn for_font_size(size: FontSize) -> Self {
        match size {
            FontSize::Small => ProfileButton::SmallFontSize,
            FontSize::Medium => ProfileButton::MediumFontSize,
            FontSize::Big => ProfileButton::BigFontSize,
        }
    }

    pub fn for_font_family(family: FontFamily) -> Self {
        match family {
            FontFamily::Arial => ProfileButton::Arial,
            FontFamily::ComicSansMS => ProfileButton::ComicSansMS,
            FontFamily::TimesNewRoman => ProfileButton::TimesNewRoman,
        }
    }
}

/// Edits one named settings profile.
///
/// Changes go to an unsaved working copy and are previewed on the root right
/// away; `save_current_configuration` persists them and makes them current.
pub struct ProfileController {
    store: SettingsProfileStore,
    applier: SettingsApplier,
    profile: SettingsProfile,
    new_profile_settings: SettingsProfile,
    dark_mode_box: bool,
    buttons: BTreeMap<ProfileButton, Vec<String>>,
}

impl ProfileController {
    /// Loads the profile `name`. A missing profile row is an integrity error.
    pub async fn load(
        store: SettingsProfileStore,
        applier: SettingsApplier,
        name: &str,
    ) -> Result<Self> {
        let profile = store
            .get_profile_by_name(name)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))?;

        let mut controller = Self {
            store,
            applier,
            new_profile_settings: profile.clone(),
            profile,
            dark_mode_box: false,
            buttons: BTreeMap::new(),
        };
        controller.load_current_profile_configuration();
        Ok(controller)
    }

    pub fn profile(&self) -> &SettingsProfile {
        &self.profile
    }

    pub fn new_profile_settings(&self) -> &SettingsProfile {
        &self.new_profile_settings
    }

    pub fn is_dark_mode_box_checked(&self) -> bool {
        self.dark_mode_box
    }

    pub fn button_classes(&self, button: ProfileButton) -> &[String] {
        self.buttons.get(&button).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, button: ProfileButton) -> bool {
        self.button_classes(button)
            .iter()
            .any(|class| class == SELECTED_BUTTON_CLASS)
    }

    fn load_current_profile_configuration(&mut self) {
        self.set_dark_mode_box();
        self.set_all_buttons_to_default();
        self.set_selected_buttons();
    }

    fn set_dark_mode_box(&mut self) {
        self.dark_mode_box = self.new_profile_settings.in_dark_mode;
    }

    fn set_all_buttons_to_default(&mut self) {
        for button in ProfileButton::ALL {
            self.buttons.insert(
                button,
                vec!["button".to_string(), button.base_class().to_string()],
            );
        }
    }

    fn set_selected_buttons(&mut self) {
        let size = ProfileButton::for_font_size(self.new_profile_settings.font_size);
        let family = ProfileButton::for_font_family(self.new_profile_settings.font_family);
        for button in [size, family] {
            self.buttons
                .entry(button)
                .or_default()
                .push(SELECTED_BUTTON_CLASS.to_string());
        }
    }

    /// Previews the unsaved settings on the root.
    pub fn apply_unsaved_settings(&self, queue: &mut EventQueue) {
        post_settings(
            self.new_profile_settings.clone(),
            self.applier.resolver(),
            queue,
        );
    }

    fn changed(&mut self, queue: &mut EventQueue) {
        self.apply_unsaved_settings(queue);
        self.load_current_profile_configuration();
    }

    pub fn switch_dark_mode(&mut self, queue: &mut EventQueue) {
        self.new_profile_settings.switch_dark_mode();
        self.changed(queue);
    }

    pub fn set_font_size(&mut self, size: FontSize, queue: &mut EventQueue) {
        self.new_profile_settings.font_size = size;
        self.changed(queue);
    }

    pub fn set_font_family(&mut self, family: FontFamily, queue: &mut EventQueue) {
        self.new_profile_settings.font_family = family;
        self.changed(queue);
    }

    /// Drops the unsaved changes and writes the saved profile back.
    pub async fn reset_changes(&mut self, queue: &mut EventQueue) -> Result<()> {
        self.new_profile_settings = self.profile.clone();
        self.store
            .update_property_in_db(&self.new_profile_settings)
            .await?;
        self.changed(queue);
        Ok(())
    }

    /// Replaces the unsaved settings with the "Default" profile's values.
    pub async fn reset_to_default(&mut self, queue: &mut EventQueue) -> Result<()> {
        let default = self
            .store
            .get_default_settings()
            .await?
            .ok_or(AppError::MissingDefaultSettings)?;
        self.new_profile_settings = default.renamed(self.profile.name.clone());
        self.changed(queue);
        Ok(())
    }

    /// Persists the profile, copies it into "Current" and broadcasts it.
    pub async fn save_current_configuration(&mut self, queue: &mut EventQueue) -> Result<()> {
        self.store
            .update_property_in_db(&self.new_profile_settings)
            .await?;
        self.profile = self.new_profile_settings.clone();
        self.update_current_settings_in_db().await?;

        tracing::info!("Saved settings profile {}", self.profile.name);

        self.applier.apply_current_settings(queue).await?;
        self.load_current_profile_configuration();
        Ok(())
    }

    async fn update_current_settings_in_db(&self) -> Result<()> {
        let current = self.new_profile_settings.renamed(SettingsProfile::CURRENT);
        self.store.update_property_in_db(&current).await
    }
}
