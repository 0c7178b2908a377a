use serde::Deserialize;

/// Role that unlocks AP-only sections.
pub const AP_ROLE: &str = "AP";

/// The identity widget's user object, reduced to what the page needs.
///
/// Roles live at `app_metadata.roles`; a missing or null value at any level
/// means "no roles".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityUser {
    #[serde(default)]
    app_metadata: Option<AppMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct AppMetadata {
    #[serde(default)]
    roles: Option<Vec<String>>,
}

impl IdentityUser {
    #[must_use]
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            app_metadata: Some(AppMetadata {
                roles: Some(roles.into_iter().map(Into::into).collect()),
            }),
        }
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        self.app_metadata
            .as_ref()
            .and_then(|meta| meta.roles.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r == role)
    }
}

/// Visibility of the login/logout controls and AP-only elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessState {
    pub login_visible: bool,
    pub logout_visible: bool,
    pub ap_visible: bool,
}

impl Default for AccessState {
    fn default() -> Self {
        Self::for_user(None)
    }
}

impl AccessState {
    #[must_use]
    pub fn for_user(user: Option<&IdentityUser>) -> Self {
        match user {
            Some(user) => Self {
                login_visible: false,
                logout_visible: true,
                ap_visible: user.has_role(AP_ROLE),
            },
            None => Self {
                login_visible: true,
                logout_visible: false,
                ap_visible: false,
            },
        }
    }

    /// The `hidden` flag for an AP-only element.
    #[must_use]
    pub fn ap_hidden(&self) -> bool {
        !self.ap_visible
    }
}
