use leptos::prelude::*;

use crate::portfolio::{find_project, Project, ProjectId, PROJECTS};

#[component]
fn TechChips(tech: &'static [&'static str], chip_class: &'static str) -> impl IntoView {
    tech.iter()
        .map(|t| view! { <span class=chip_class>{*t}</span> })
        .collect_view()
}

#[component]
pub fn Projects() -> impl IntoView {
    let active = RwSignal::new(None::<ProjectId>);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && active.get_untracked().is_some() {
                active.set(None);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <section id="projects" class="py-8">
            <h2 class="text-2xl font-bold mb-4">"Selected Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        let id = p.id;
                        view! {
                            <article
                                class="bg-white dark:bg-gray-800 p-5 rounded-2xl shadow cursor-pointer transition-transform hover:-translate-y-1"
                                on:click=move |_| active.set(Some(id))
                            >
                                <h3 class="font-semibold text-lg">{p.title}</h3>
                                <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                                    {p.summary}
                                </p>
                                <div class="mt-4 flex flex-wrap gap-2 text-xs text-gray-500 dark:text-gray-400">
                                    <TechChips
                                        tech=p.tech
                                        chip_class="px-2 py-1 bg-gray-100 dark:bg-gray-700 rounded-full"
                                    />
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                active
                    .get()
                    .and_then(find_project)
                    .map(|project| view! { <ProjectModal project active /> })
            }}
        </section>
    }
}

#[component]
fn ProjectModal(project: &'static Project, active: RwSignal<Option<ProjectId>>) -> impl IntoView {
    let close = move |_| active.set(None);
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center animate-fade-in">
            <div class="absolute inset-0 modal-backdrop" on:click=close></div>
            <div
                role="dialog"
                aria-modal="true"
                class="relative bg-white dark:bg-gray-900 rounded-2xl shadow-xl max-w-3xl w-full mx-4 p-6 z-20"
            >
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h3 class="text-xl font-semibold">{project.title}</h3>
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                            {project.description}
                        </p>
                        <div class="mt-4 flex flex-wrap gap-2">
                            <TechChips
                                tech=project.tech
                                chip_class="px-2 py-1 bg-gray-100 dark:bg-gray-800 rounded-full text-xs"
                            />
                        </div>
                    </div>
                    <button
                        on:click=close
                        class="text-gray-500 hover:text-gray-800 dark:hover:text-gray-200"
                    >
                        "Close"
                    </button>
                </div>
                <div class="mt-4">
                    <a href=project.link class="text-indigo-500">
                        "Open project"
                    </a>
                </div>
            </div>
        </div>
    }
}
