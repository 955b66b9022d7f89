use crate::{controller::profile::ProfileController, view::EventQueue};

/// The settings screen: one tab per profile.
pub struct SettingsController {
    profiles: Vec<ProfileController>,
    selected_tab: usize,
    is_first_time: bool,
}

impl SettingsController {
    pub fn new(profiles: Vec<ProfileController>) -> Self {
        Self {
            profiles,
            selected_tab: 0,
            is_first_time: true,
        }
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn profile(&self, tab: usize) -> Option<&ProfileController> {
        self.profiles.get(tab)
    }

    pub fn profile_mut(&mut self, tab: usize) -> Option<&mut ProfileController> {
        self.profiles.get_mut(tab)
    }

    pub fn tab_count(&self) -> usize {
        self.profiles.len()
    }

    /// Selects `tab` and previews its unsaved settings. The first tab is
    /// selected once on start-up; that selection previews nothing.
    pub fn switch_to_profile(&mut self, tab: usize, queue: &mut EventQueue) -> bool {
        let Some(profile) = self.profiles.get(tab) else {
            return false;
        };
        self.selected_tab = tab;

        if tab == 0 && self.is_first_time {
            self.is_first_time = false;
            return true;
        }
        profile.apply_unsaved_settings(queue);
        true
    }
}
