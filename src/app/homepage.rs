use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{hero_typewriter, HERO_PHRASES, PROFILE, SKILLS};

use super::avatar::InfoBlock;
use super::contact::Contact;
use super::header::SocialLinks;
use super::projects::Projects;
use super::typewriter::Typewriter;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <section class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center py-12">
            <Hero />
            <InfoBlock />
        </section>
        <section id="about" class="py-8">
            <h2 class="text-2xl font-bold">"About"</h2>
            <p class="mt-3 text-gray-700 dark:text-gray-300 max-w-3xl">{PROFILE.about}</p>
        </section>
        <Projects />
        <Skills />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="space-y-6 relative z-10 animate-fade-in">
            <h1 class="text-4xl md:text-5xl font-extrabold leading-tight">
                "Hi, I'm " <span class="text-indigo-600 dark:text-indigo-400">{PROFILE.name}</span>
            </h1>
            <p class="mt-4 text-gray-700 dark:text-gray-300 max-w-xl">{PROFILE.intro}</p>
            <div class="mt-4 flex items-center">
                <span class="text-sm text-gray-600 dark:text-gray-400 mr-2">"I build"</span>
                <Typewriter phrases=HERO_PHRASES config=hero_typewriter() />
                <span class="blink ml-1">"|"</span>
            </div>
            <div class="flex flex-wrap gap-3">
                <a
                    href="#projects"
                    class="inline-flex items-center gap-2 px-4 py-2 bg-indigo-600 text-white rounded-lg shadow hover:opacity-90 transition"
                >
                    "View Projects"
                </a>
                <a
                    href=PROFILE.resume
                    download="resume.pdf"
                    class="inline-flex items-center gap-2 px-4 py-2 border border-gray-200 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition"
                >
                    "Resume"
                </a>
            </div>
            <div class="flex items-center gap-5 text-gray-600 dark:text-gray-400 mt-3 text-xl">
                <SocialLinks with_email=true />
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-8">
            <h2 class="text-2xl font-bold mb-4">"Skills"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {SKILLS
                    .iter()
                    .map(|s| {
                        view! {
                            <div>
                                <div class="flex justify-between mb-1">
                                    <div class="text-sm font-medium">{s.name}</div>
                                    <div class="text-sm text-gray-500 dark:text-gray-400">
                                        {format!("{}%", s.level())}
                                    </div>
                                </div>
                                <div class="w-full h-3 bg-gray-200 dark:bg-gray-700 rounded overflow-hidden">
                                    <div class="h-full bg-indigo-500 rounded" style=s.bar_width()></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
