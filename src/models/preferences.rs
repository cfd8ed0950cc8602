//! Notification preference model.
//!
//! Preferences are a fixed schema of email/push toggles, one pair per
//! notification category. Two categories are required: a staff member must
//! keep at least one channel enabled for them so that application updates
//! and profile alerts always reach somewhere.

use serde::{Deserialize, Serialize};

/// The notification categories a staff member can tune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// Digest of newly published shifts.
    DailyShiftUpdates,
    /// Short-notice emergency cover requests.
    EmergencyShifts,
    /// Permanent job openings.
    PermanentJobs,
    /// Updates on the staff member's own shift applications.
    ShiftApplicationUpdates,
    /// Profile and compliance alerts (expiring documents and the like).
    ProfileAlerts,
    /// Platform announcements.
    ImportantNews,
}

impl NotificationCategory {
    /// All categories, in display order.
    pub const ALL: [NotificationCategory; 6] = [
        NotificationCategory::DailyShiftUpdates,
        NotificationCategory::EmergencyShifts,
        NotificationCategory::PermanentJobs,
        NotificationCategory::ShiftApplicationUpdates,
        NotificationCategory::ProfileAlerts,
        NotificationCategory::ImportantNews,
    ];

    /// Returns true if the category must keep at least one channel enabled.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            NotificationCategory::ShiftApplicationUpdates | NotificationCategory::ProfileAlerts
        )
    }
}

/// The email/push toggle pair for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelToggles {
    /// Deliver this category by email.
    pub email: bool,
    /// Deliver this category by push notification.
    pub push: bool,
}

impl ChannelToggles {
    /// Returns true if at least one channel is enabled.
    pub const fn any_enabled(self) -> bool {
        self.email || self.push
    }
}

/// A staff member's full set of notification toggles.
///
/// # Example
///
/// ```
/// use staffing_rules::models::{NotificationCategory, NotificationPreferences};
///
/// let prefs = NotificationPreferences::default();
/// assert!(prefs.channels(NotificationCategory::ProfileAlerts).any_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Toggles for the daily shift digest.
    pub daily_shift_updates: ChannelToggles,
    /// Toggles for emergency cover requests.
    pub emergency_shifts: ChannelToggles,
    /// Toggles for permanent job openings.
    pub permanent_jobs: ChannelToggles,
    /// Toggles for shift application updates (required category).
    pub shift_application_updates: ChannelToggles,
    /// Toggles for profile alerts (required category).
    pub profile_alerts: ChannelToggles,
    /// Toggles for platform announcements.
    pub important_news: ChannelToggles,
}

impl Default for NotificationPreferences {
    /// Everything on, matching the state a new account is created with.
    fn default() -> Self {
        let on = ChannelToggles {
            email: true,
            push: true,
        };
        Self {
            daily_shift_updates: on,
            emergency_shifts: on,
            permanent_jobs: on,
            shift_application_updates: on,
            profile_alerts: on,
            important_news: on,
        }
    }
}

impl NotificationPreferences {
    /// Returns the toggle pair for a category.
    pub fn channels(&self, category: NotificationCategory) -> ChannelToggles {
        match category {
            NotificationCategory::DailyShiftUpdates => self.daily_shift_updates,
            NotificationCategory::EmergencyShifts => self.emergency_shifts,
            NotificationCategory::PermanentJobs => self.permanent_jobs,
            NotificationCategory::ShiftApplicationUpdates => self.shift_application_updates,
            NotificationCategory::ProfileAlerts => self.profile_alerts,
            NotificationCategory::ImportantNews => self.important_news,
        }
    }

    /// Returns a copy of the preferences with the patch applied. Categories
    /// absent from the patch are left untouched.
    pub fn with_patch(&self, patch: &PreferencePatch) -> Self {
        Self {
            daily_shift_updates: patch.daily_shift_updates.unwrap_or(self.daily_shift_updates),
            emergency_shifts: patch.emergency_shifts.unwrap_or(self.emergency_shifts),
            permanent_jobs: patch.permanent_jobs.unwrap_or(self.permanent_jobs),
            shift_application_updates: patch
                .shift_application_updates
                .unwrap_or(self.shift_application_updates),
            profile_alerts: patch.profile_alerts.unwrap_or(self.profile_alerts),
            important_news: patch.important_news.unwrap_or(self.important_news),
        }
    }
}

/// A partial update to notification preferences, category-granular: each
/// present category replaces its toggle pair wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencePatch {
    /// Replacement toggles for the daily shift digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_shift_updates: Option<ChannelToggles>,
    /// Replacement toggles for emergency cover requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_shifts: Option<ChannelToggles>,
    /// Replacement toggles for permanent job openings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_jobs: Option<ChannelToggles>,
    /// Replacement toggles for shift application updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_application_updates: Option<ChannelToggles>,
    /// Replacement toggles for profile alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_alerts: Option<ChannelToggles>,
    /// Replacement toggles for platform announcements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important_news: Option<ChannelToggles>,
}
