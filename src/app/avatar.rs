use leptos::prelude::*;

use crate::portfolio::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="h-12 w-12 rounded-full bg-gradient-to-br from-indigo-600 to-pink-500 flex items-center justify-center text-white font-bold">
            {PROFILE.initials}
        </div>
    }
}

/// Preview artwork plus the four quick facts under it.
#[component]
pub fn InfoBlock() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow relative z-10 animate-fade-in">
            <div class="w-full h-64 rounded-lg bg-gray-100 dark:bg-gray-800 overflow-hidden flex items-center justify-center">
                <PreviewArt />
            </div>
            <div class="mt-4 grid grid-cols-2 gap-3">
                {PROFILE
                    .facts
                    .iter()
                    .map(|fact| {
                        view! {
                            <div class="p-3 bg-gray-50 dark:bg-gray-900 rounded-lg text-sm">
                                <div class="text-xs text-gray-500 dark:text-gray-400">
                                    {fact.label}
                                </div>
                                <div class="font-medium">{fact.value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PreviewArt() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 120 120" class="w-40 h-40">
            <defs>
                <linearGradient id="preview-gradient" x1="0" x2="1">
                    <stop offset="0" stop-color="#6366F1" />
                    <stop offset="1" stop-color="#EC4899" />
                </linearGradient>
            </defs>
            <rect width="120" height="120" rx="18" fill="url(#preview-gradient)" opacity="0.12" />
            <g transform="translate(20,20)" fill="none" stroke="#6B7280" stroke-width="2">
                <rect x="0" y="0" width="80" height="60" rx="6" opacity="0.14" />
                <path
                    d="M4 44 L20 28 L40 48 L60 20 L76 36"
                    stroke="#4F46E5"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    fill="none"
                />
            </g>
            <text x="60" y="105" font-size="10" text-anchor="middle" fill="#374151">
                "Preview"
            </text>
        </svg>
    }
}
