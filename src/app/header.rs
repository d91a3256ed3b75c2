use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use crate::settings::LocalStorageStore;
use crate::{portfolio::PROFILE, settings::Settings};

use super::avatar::Avatar;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="relative z-10 max-w-6xl mx-auto px-6 py-6 flex items-center justify-between">
            <div class="flex items-center gap-3">
                <Avatar />
                <div>
                    <div class="text-lg font-semibold">{PROFILE.name}</div>
                    <div class="text-xs text-gray-500 dark:text-gray-400">{PROFILE.role}</div>
                </div>
            </div>
            <div class="flex items-center gap-4">
                <nav class="hidden md:flex items-center gap-6 text-sm text-gray-700 dark:text-gray-300">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="hover:text-indigo-500">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-3 text-lg">
                    <SocialLinks with_email=false />
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SocialLinks(with_email: bool) -> impl IntoView {
    view! {
        {with_email
            .then(|| {
                view! {
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="hover:text-indigo-500"
                        aria-label="Email"
                    >
                        "✉"
                    </a>
                }
            })}
        <a
            href=PROFILE.github
            target="_blank"
            rel="noopener noreferrer"
            class="hover:text-indigo-500"
            aria-label="GitHub Profile"
        >
            <i class="devicon-github-plain"></i>
        </a>
        <a
            href=PROFILE.linkedin
            target="_blank"
            rel="noopener noreferrer"
            class="hover:text-indigo-500"
            aria-label="LinkedIn Profile"
        >
            <i class="devicon-linkedin-plain"></i>
        </a>
    }
}

#[cfg(feature = "hydrate")]
fn apply_theme(dark: bool) {
    let root = match document().document_element() {
        Some(el) => el,
        None => return,
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("couldn't toggle dark class: {e:?}");
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let settings = RwSignal::new(Settings::default());

    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = use_preferred_dark();
        // reload whenever the system scheme flips; a saved choice still wins
        Effect::watch(
            move || prefers_dark.get(),
            move |prefers_dark, _, _| {
                settings.set(Settings::load(&LocalStorageStore::new(), *prefers_dark));
            },
            true,
        );
        Effect::new(move |_| apply_theme(settings.get().dark));
    }

    let toggle = move |_| {
        settings.update(|s| s.toggle_dark());
        #[cfg(feature = "hydrate")]
        if let Err(e) = settings.get_untracked().save(&mut LocalStorageStore::new()) {
            log::warn!("couldn't save theme: {e}");
        }
    };

    view! {
        <button
            on:click=toggle
            class="p-2 rounded-md bg-gray-200 dark:bg-gray-800"
            title="Toggle dark mode"
        >
            {move || if settings.get().dark { "☀" } else { "☾" }}
        </button>
    }
}
