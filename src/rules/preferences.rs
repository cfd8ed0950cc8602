//! Notification preference validation.
//!
//! The settings surface proposes a patch before saving; this rule makes the
//! required-category invariant executable: shift application updates and
//! profile alerts must keep at least one channel enabled.

use crate::models::{NotificationCategory, NotificationPreferences, PreferencePatch};

/// Returns true if applying `patch` to `current` leaves every required
/// category with at least one enabled channel.
///
/// # Examples
///
/// ```
/// use staffing_rules::models::{ChannelToggles, NotificationPreferences, PreferencePatch};
/// use staffing_rules::rules::is_valid_preference_update;
///
/// let current = NotificationPreferences::default();
/// let patch = PreferencePatch {
///     profile_alerts: Some(ChannelToggles { email: false, push: false }),
///     ..PreferencePatch::default()
/// };
/// assert!(!is_valid_preference_update(&current, &patch));
/// ```
pub fn is_valid_preference_update(
    current: &NotificationPreferences,
    patch: &PreferencePatch,
) -> bool {
    let updated = current.with_patch(patch);
    NotificationCategory::ALL
        .iter()
        .filter(|category| category.is_required())
        .all(|category| updated.channels(*category).any_enabled())
}
