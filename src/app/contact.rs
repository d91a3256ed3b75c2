use leptos::{html, prelude::*};

use crate::{contact::ContactMessage, portfolio::PROFILE};

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (name, email, message) = match (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) {
            (Some(n), Some(e), Some(m)) => (n.value(), e.value(), m.value()),
            _ => {
                log::warn!("contact form submitted before it mounted");
                return;
            }
        };
        let uri = ContactMessage::new(name, email, message).mailto(PROFILE.email);
        if let Err(e) = window().location().set_href(&uri) {
            log::error!("couldn't open mail client: {e:?}");
        }
    };

    let input_class = "w-full p-3 border rounded-lg bg-transparent border-gray-200 dark:border-gray-700";

    view! {
        <section id="contact" class="py-8">
            <h2 class="text-2xl font-bold">"Contact"</h2>
            <div class="mt-4 grid grid-cols-1 md:grid-cols-2 gap-6 items-start">
                <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow">
                    <p class="text-gray-700 dark:text-gray-300">
                        "Feel free to reach out for collaborations or opportunities."
                    </p>
                    <div class="mt-4 text-sm text-gray-600 dark:text-gray-400">
                        <div>
                            <strong>"Email: "</strong>
                            <a href=format!("mailto:{}", PROFILE.email) class="text-indigo-500">
                                {PROFILE.email}
                            </a>
                        </div>
                        {PROFILE
                            .facts
                            .iter()
                            .find(|f| f.label == "Location")
                            .map(|f| {
                                view! {
                                    <div class="mt-2">
                                        <strong>"Location: "</strong>
                                        {f.value}
                                    </div>
                                }
                            })}
                    </div>
                </div>
                <form
                    on:submit=on_submit
                    class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow space-y-3"
                >
                    <input node_ref=name_ref name="name" class=input_class placeholder="Your name" />
                    <input
                        node_ref=email_ref
                        name="email"
                        class=input_class
                        placeholder="Your email"
                    />
                    <textarea
                        node_ref=message_ref
                        name="message"
                        class=input_class
                        rows="4"
                        placeholder="How can I help?"
                    ></textarea>
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            class="flex-1 px-4 py-2 bg-indigo-600 text-white rounded-lg"
                        >
                            "Send message"
                        </button>
                        <a
                            href=PROFILE.resume
                            download="resume.pdf"
                            class="inline-flex items-center px-4 py-2 border rounded-lg"
                        >
                            "Resume"
                        </a>
                    </div>
                </form>
            </div>
        </section>
    }
}
