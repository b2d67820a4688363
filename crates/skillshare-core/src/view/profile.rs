//! Profile View Model
//!
//! Viewing/editing, the avatar dialog, the overflow menu and the active tab
//! are independent of each other; any combination is valid.

use log::{error, info};

use super::handle::StateHandle;
use super::notice::{LoadState, Notice, Notices};
use crate::api::ProfileApi;
use crate::domain::{AvatarFile, Profile, ProfileUpdate, SocialLinks};

const LOAD_FAILED: &str = "Failed to load profile. Please try again.";
const SAVE_FAILED: &str = "Failed to update profile";
const UPLOAD_FAILED: &str = "Failed to upload avatar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    About,
    Activity,
    Skills,
    Settings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::About,
        ProfileTab::Activity,
        ProfileTab::Skills,
        ProfileTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Activity => "Activity",
            ProfileTab::Skills => "Skills",
            ProfileTab::Settings => "Settings",
        }
    }
}

/// Plain-text fields of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Bio,
    Location,
    Education,
    Occupation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    LinkedIn,
    GitHub,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::GitHub,
        SocialPlatform::Twitter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Twitter => "Twitter",
        }
    }

    pub fn get<'a>(&self, links: &'a SocialLinks) -> &'a str {
        match self {
            SocialPlatform::LinkedIn => &links.linkedin,
            SocialPlatform::GitHub => &links.github,
            SocialPlatform::Twitter => &links.twitter,
        }
    }

    fn get_mut<'a>(&self, links: &'a mut SocialLinks) -> &'a mut String {
        match self {
            SocialPlatform::LinkedIn => &mut links.linkedin,
            SocialPlatform::GitHub => &mut links.github,
            SocialPlatform::Twitter => &mut links.twitter,
        }
    }
}

/// Edit buffer seeded from the displayed profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    pub education: String,
    pub occupation: String,
    pub skills: Vec<String>,
    pub social_links: SocialLinks,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            name: text(&profile.name),
            email: text(&profile.email),
            bio: text(&profile.bio),
            location: text(&profile.location),
            education: text(&profile.education),
            occupation: text(&profile.occupation),
            skills: profile.skills.clone(),
            social_links: profile.social_links.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
            ProfileField::Location => &self.location,
            ProfileField::Education => &self.education,
            ProfileField::Occupation => &self.occupation,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Location => &mut self.location,
            ProfileField::Education => &mut self.education,
            ProfileField::Occupation => &mut self.occupation,
        };
        *slot = value;
    }

    pub fn set_social_link(&mut self, platform: SocialPlatform, value: String) {
        *platform.get_mut(&mut self.social_links) = value;
    }

    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }

    /// Comma-separated input; blank entries are dropped.
    pub fn set_skills_text(&mut self, text: &str) {
        self.skills = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            education: self.education.clone(),
            occupation: self.occupation.clone(),
            skills: self.skills.clone(),
            social_links: self.social_links.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileMode {
    #[default]
    Viewing,
    Editing(ProfileForm),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub load: LoadState,
    pub mode: ProfileMode,
    pub saving: bool,
    pub avatar_dialog_open: bool,
    pub uploading: bool,
    pub menu_open: bool,
    pub active_tab: ProfileTab,
    pub notices: Notices,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ProfileMode::Editing(_))
    }

    pub fn form(&self) -> Option<&ProfileForm> {
        match &self.mode {
            ProfileMode::Editing(form) => Some(form),
            ProfileMode::Viewing => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        match &mut self.mode {
            ProfileMode::Editing(form) => Some(form),
            ProfileMode::Viewing => None,
        }
    }

    /// Enter edit mode with a buffer copied from the displayed profile.
    pub fn begin_edit(&mut self) {
        let form = self
            .profile
            .as_ref()
            .map(ProfileForm::from_profile)
            .unwrap_or_default();
        self.mode = ProfileMode::Editing(form);
    }

    pub fn cancel_edit(&mut self) {
        self.mode = ProfileMode::Viewing;
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        if let Some(form) = self.form_mut() {
            form.set_field(field, value);
        }
    }

    pub fn set_social_link(&mut self, platform: SocialPlatform, value: String) {
        if let Some(form) = self.form_mut() {
            form.set_social_link(platform, value);
        }
    }

    pub fn set_skills_text(&mut self, text: &str) {
        if let Some(form) = self.form_mut() {
            form.set_skills_text(text);
        }
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    pub fn open_avatar_dialog(&mut self) {
        self.avatar_dialog_open = true;
    }

    pub fn close_avatar_dialog(&mut self) {
        self.avatar_dialog_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// "Edit Profile" entry of the overflow menu
    pub fn menu_edit(&mut self) {
        self.close_menu();
        self.begin_edit();
    }

    /// "Change Photo" entry of the overflow menu
    pub fn menu_change_photo(&mut self) {
        self.close_menu();
        self.open_avatar_dialog();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    /// An edit buffer follows the new profile only while it is untouched.
    fn apply_profile(&mut self, profile: Profile) {
        let seeded = self.profile.as_ref().map(ProfileForm::from_profile).unwrap_or_default();
        if let ProfileMode::Editing(form) = &mut self.mode {
            if *form == seeded {
                *form = ProfileForm::from_profile(&profile);
            }
        }
        self.profile = Some(profile);
        self.load = LoadState::Ready;
    }
}

/// Runs profile actions against the backend
#[derive(Debug, Clone)]
pub struct ProfileController<A, H> {
    api: A,
    state: H,
}

impl<A, H> ProfileController<A, H>
where
    A: ProfileApi,
    H: StateHandle<ProfileState>,
{
    pub fn new(api: A, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub async fn load(&self) {
        match self.api.get_profile().await {
            Ok(profile) => {
                info!("Profile loaded: {}", profile.display_name());
                self.state.write(|s| s.apply_profile(profile));
            }
            Err(e) => {
                error!("Error loading profile: {}", e);
                self.state.write(|s| {
                    if s.profile.is_some() {
                        s.notices.raise(LOAD_FAILED);
                    } else {
                        s.load = LoadState::Failed(LOAD_FAILED.to_string());
                    }
                });
            }
        }
    }

    pub async fn retry(&self) {
        if self.state.write(|s| s.load = LoadState::Loading).is_none() {
            return;
        }
        self.load().await;
    }

    /// Send the whole edit buffer. Stays in edit mode on failure.
    pub async fn save(&self) {
        let claimed = self.state.write(|s| {
            if s.saving {
                return None;
            }
            let update = s.form().map(ProfileForm::to_update)?;
            s.saving = true;
            Some(update)
        });
        let Some(update) = claimed.flatten() else {
            return;
        };
        match self.api.update_profile(&update).await {
            Ok(profile) => {
                info!("Profile saved");
                self.state.write(|s| {
                    s.profile = Some(profile);
                    s.mode = ProfileMode::Viewing;
                    s.saving = false;
                });
            }
            Err(e) => {
                error!("Error saving profile: {}", e);
                let message = e.server_message().unwrap_or(SAVE_FAILED).to_string();
                self.state.write(|s| {
                    s.saving = false;
                    s.notices.raise(message);
                });
            }
        }
    }

    /// Upload a new avatar. Only the picture URL of the displayed profile
    /// changes; an open edit buffer is left alone.
    pub async fn upload_avatar(&self, file: AvatarFile) {
        if self.state.write(|s| s.uploading = true).is_none() {
            return;
        }
        let file_name = file.file_name.clone();
        match self.api.upload_avatar(file).await {
            Ok(uploaded) => {
                info!("Avatar uploaded: {}", file_name);
                self.state.write(|s| {
                    if let Some(profile) = s.profile.as_mut() {
                        profile.profile_picture_url = Some(uploaded.profile_picture_url);
                    }
                    s.avatar_dialog_open = false;
                    s.uploading = false;
                });
            }
            Err(e) => {
                error!("Error uploading avatar {}: {}", file_name, e);
                self.state.write(|s| {
                    s.uploading = false;
                    s.notices.raise(UPLOAD_FAILED);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::ApiError;
    use crate::testing::{Call, MemoryApi};

    fn sample_profile() -> Profile {
        Profile {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            bio: Some("Analyst".into()),
            location: Some("London".into()),
            education: None,
            occupation: Some("Engineer".into()),
            skills: vec!["Rust".into(), "Math".into()],
            social_links: Some(SocialLinks {
                github: "ada".into(),
                ..Default::default()
            }),
            profile_picture_url: Some("https://cdn.test/old.png".into()),
            courses_completed: 3,
            posts_count: 12,
            followers_count: 40,
        }
    }

    async fn loaded() -> (MemoryApi, ProfileController<MemoryApi, Rc<RefCell<ProfileState>>>) {
        let api = MemoryApi::new().with_profile(sample_profile());
        let ctl = ProfileController::new(api.clone(), Rc::new(RefCell::new(ProfileState::new())));
        ctl.load().await;
        (api, ctl)
    }

    fn snapshot(ctl: &ProfileController<MemoryApi, Rc<RefCell<ProfileState>>>) -> ProfileState {
        ctl.state().borrow().clone()
    }

    #[tokio::test]
    async fn test_load_shows_profile() {
        let (_, ctl) = loaded().await;
        let state = snapshot(&ctl);
        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.profile, Some(sample_profile()));
        assert!(!state.is_editing());
    }

    #[tokio::test]
    async fn test_initial_load_failure_is_full_page() {
        let api = MemoryApi::new().with_profile(sample_profile());
        api.fail("get_profile", ApiError::Network("offline".into()));
        let ctl = ProfileController::new(api.clone(), Rc::new(RefCell::new(ProfileState::new())));

        ctl.load().await;
        assert_eq!(snapshot(&ctl).load, LoadState::Failed(LOAD_FAILED.to_string()));

        api.recover("get_profile");
        ctl.retry().await;
        assert_eq!(snapshot(&ctl).load, LoadState::Ready);
    }

    #[tokio::test]
    async fn test_begin_edit_seeds_form_exactly() {
        let (_, ctl) = loaded().await;
        ctl.state().borrow_mut().begin_edit();

        let state = snapshot(&ctl);
        let form = state.form().unwrap();
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.education, "");
        assert_eq!(form.skills, vec!["Rust".to_string(), "Math".to_string()]);
        assert_eq!(form.social_links.github, "ada");
        assert_eq!(form.skills_text(), "Rust, Math");
    }

    #[tokio::test]
    async fn test_cancel_discards_edits() {
        let (api, ctl) = loaded().await;
        {
            let mut state = ctl.state().borrow_mut();
            state.begin_edit();
            state.set_field(ProfileField::Name, "Someone Else".into());
            state.set_skills_text("Go,  ,Zig");
            state.cancel_edit();
        }

        let state = snapshot(&ctl);
        assert!(!state.is_editing());
        assert_eq!(state.profile, Some(sample_profile()));
        assert_eq!(api.count(|c| matches!(c, Call::UpdateProfile(_))), 0);
    }

    #[tokio::test]
    async fn test_reload_keeps_edits_in_progress() {
        let (api, ctl) = loaded().await;
        {
            let mut state = ctl.state().borrow_mut();
            state.begin_edit();
            state.set_field(ProfileField::Bio, "Poet".into());
        }
        let mut changed = sample_profile();
        changed.location = Some("Paris".into());
        let _ = api.clone().with_profile(changed.clone());

        ctl.load().await;

        let state = snapshot(&ctl);
        assert_eq!(state.profile, Some(changed));
        let form = state.form().expect("still editing");
        assert_eq!(form.bio, "Poet");
        assert_eq!(form.location, "London");
    }

    #[tokio::test]
    async fn test_reload_refreshes_untouched_buffer() {
        let (api, ctl) = loaded().await;
        ctl.state().borrow_mut().begin_edit();
        let mut changed = sample_profile();
        changed.location = Some("Paris".into());
        let _ = api.clone().with_profile(changed.clone());

        ctl.load().await;

        let state = snapshot(&ctl);
        assert_eq!(state.form(), Some(&ProfileForm::from_profile(&changed)));
    }

    #[tokio::test]
    async fn test_save_sends_buffer_and_shows_response() {
        let (api, ctl) = loaded().await;
        {
            let mut state = ctl.state().borrow_mut();
            state.begin_edit();
            state.set_field(ProfileField::Bio, "Poet of science".into());
            state.set_social_link(SocialPlatform::Twitter, "@ada".into());
            state.set_skills_text("Rust, Analysis ,");
        }

        ctl.save().await;

        let sent = api.calls().into_iter().find_map(|c| match c {
            Call::UpdateProfile(update) => Some(update),
            _ => None,
        });
        let sent = sent.expect("update call");
        assert_eq!(sent.bio, "Poet of science");
        assert_eq!(sent.name, "Ada Lovelace");
        assert_eq!(sent.skills, vec!["Rust".to_string(), "Analysis".to_string()]);
        assert_eq!(sent.social_links.twitter, "@ada");

        let state = snapshot(&ctl);
        assert!(!state.is_editing());
        assert!(!state.saving);
        assert_eq!(state.profile, Some(api.profile()));
        assert_eq!(state.profile.unwrap().bio.as_deref(), Some("Poet of science"));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_editing_with_server_message() {
        let (api, ctl) = loaded().await;
        api.fail(
            "update_profile",
            ApiError::Status { status: 400, message: Some("Email already in use".into()) },
        );
        {
            let mut state = ctl.state().borrow_mut();
            state.begin_edit();
            state.set_field(ProfileField::Email, "taken@example.com".into());
        }

        ctl.save().await;

        let state = snapshot(&ctl);
        assert_eq!(state.form().map(|f| f.email.as_str()), Some("taken@example.com"));
        assert_eq!(state.notice().map(|n| n.message.as_str()), Some("Email already in use"));
        assert_eq!(state.profile, Some(sample_profile()));
    }

    #[tokio::test]
    async fn test_save_failure_without_message_uses_generic_text() {
        let (api, ctl) = loaded().await;
        api.fail("update_profile", ApiError::Network("offline".into()));
        ctl.state().borrow_mut().begin_edit();

        ctl.save().await;

        assert_eq!(snapshot(&ctl).notice().map(|n| n.message.clone()), Some(SAVE_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_save_outside_edit_mode_is_noop() {
        let (api, ctl) = loaded().await;
        ctl.save().await;
        assert_eq!(api.count(|c| matches!(c, Call::UpdateProfile(_))), 0);
    }

    #[tokio::test]
    async fn test_avatar_upload_patches_only_picture() {
        let (api, ctl) = loaded().await;
        {
            let mut state = ctl.state().borrow_mut();
            state.menu_change_photo();
            state.begin_edit();
            state.set_field(ProfileField::Name, "Draft name".into());
        }

        let file = AvatarFile {
            file_name: "me.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        };
        ctl.upload_avatar(file).await;

        assert_eq!(api.count(|c| matches!(c, Call::UploadAvatar(name) if name == "me.png")), 1);
        assert_eq!(api.calls().len(), 2);

        let state = snapshot(&ctl);
        let mut expected = sample_profile();
        expected.profile_picture_url = Some("https://cdn.test/me.png".into());
        assert_eq!(state.profile, Some(expected));
        assert!(!state.avatar_dialog_open);
        assert!(!state.uploading);
        assert_eq!(state.form().map(|f| f.name.as_str()), Some("Draft name"));
    }

    #[tokio::test]
    async fn test_avatar_upload_failure_keeps_dialog() {
        let (api, ctl) = loaded().await;
        api.fail("upload_avatar", ApiError::Status { status: 413, message: None });
        ctl.state().borrow_mut().open_avatar_dialog();

        let file = AvatarFile { file_name: "huge.png".into(), content_type: None, bytes: vec![0; 16] };
        ctl.upload_avatar(file).await;

        let state = snapshot(&ctl);
        assert!(state.avatar_dialog_open);
        assert_eq!(state.profile, Some(sample_profile()));
        assert_eq!(state.notice().map(|n| n.message.as_str()), Some(UPLOAD_FAILED));
    }

    #[test]
    fn test_tabs_menu_and_modes_are_independent() {
        let mut state = ProfileState::new();
        state.select_tab(ProfileTab::Skills);
        state.toggle_menu();
        state.menu_edit();

        assert!(state.is_editing());
        assert!(!state.menu_open);
        assert_eq!(state.active_tab, ProfileTab::Skills);
        assert!(!state.avatar_dialog_open);

        state.open_avatar_dialog();
        state.cancel_edit();
        assert!(state.avatar_dialog_open);
        assert_eq!(state.active_tab, ProfileTab::Skills);
    }
}
