mod avatar;
mod contact;
mod header;
mod homepage;
mod particles;
mod projects;
mod typewriter;

use chrono::Datelike;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use particles::ParticleBackground;

use crate::portfolio::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 antialiased relative overflow-hidden">
                <div class="absolute inset-0 pointer-events-none z-0">
                    <ParticleBackground />
                </div>
                <Header />
                <main class="relative z-10 max-w-6xl mx-auto px-6 pb-20">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer
            class="relative z-10 py-12 text-center text-sm text-gray-500 dark:text-gray-400"
            title=concat!("Built ", env!("BUILD_TIME"))
        >
            {format!("© {year} {} - Built with Rust, Leptos & Tailwind", PROFILE.name)}
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <section class="py-24 text-center">
            <h1 class="text-4xl font-extrabold">"404"</h1>
            <p class="mt-4 text-gray-600 dark:text-gray-400">"Nothing lives at this address."</p>
            <a href="/" class="inline-block mt-6 text-indigo-600 dark:text-indigo-400">
                "Back home"
            </a>
        </section>
    }
}
