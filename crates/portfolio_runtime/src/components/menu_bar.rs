use std::time::Duration;

use leptos::*;

use super::use_desktop_runtime;
use crate::{model::WindowKey, window_host::SetupGuard};

const NAV_LINKS: [(&str, WindowKey); 3] = [
    ("Projects", WindowKey::Finder),
    ("Contact", WindowKey::Contact),
    ("Resume", WindowKey::Resume),
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock fields shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct ClockSnapshot {
    /// 0 = Sunday.
    pub weekday: u32,
    /// 0 = January.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        let now = js_sys::Date::new_0();
        Self {
            weekday: now.get_day(),
            month: now.get_month(),
            day: now.get_date(),
            hour: now.get_hours(),
            minute: now.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        Self::default()
    }

    /// Formats as `Fri Oct 16 9:05 AM`.
    pub fn label(&self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("");
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            other => other,
        };
        format!(
            "{weekday} {month} {} {hour}:{:02} {meridiem}",
            self.day, self.minute
        )
    }
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock = create_rw_signal(ClockSnapshot::now());

    let guard = SetupGuard::new();
    if let Ok(interval) = set_interval_with_handle(
        {
            let guard = guard.clone();
            move || {
                guard.run_if_active(|| clock.set(ClockSnapshot::now()));
            }
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || {
            guard.cancel();
            interval.clear();
        });
    }

    view! {
        <nav class="menu-bar">
            <div class="menu-bar-left">
                <img src="/images/logo.svg" alt="logo" />
                <p class="menu-bar-owner">"Portfolio"</p>
                <ul>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, key)| {
                            view! {
                                <li on:click=move |_| runtime.open_window(key, None)>
                                    <p>{label}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="menu-bar-right">
                <time>{move || clock.get().label()}</time>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_label_uses_twelve_hour_time() {
        let morning = ClockSnapshot {
            weekday: 5,
            month: 9,
            day: 16,
            hour: 9,
            minute: 5,
        };
        assert_eq!(morning.label(), "Fri Oct 16 9:05 AM");

        let midnight = ClockSnapshot {
            hour: 0,
            ..morning
        };
        assert_eq!(midnight.label(), "Fri Oct 16 12:05 AM");

        let afternoon = ClockSnapshot {
            hour: 13,
            minute: 30,
            ..morning
        };
        assert_eq!(afternoon.label(), "Fri Oct 16 1:30 PM");
    }

    #[test]
    fn nav_links_only_target_invokable_windows() {
        for (_, key) in NAV_LINKS {
            let descriptor = crate::registry::window_descriptor(key).expect("registered");
            assert!(descriptor.can_open, "{key} is not invokable");
        }
    }
}
