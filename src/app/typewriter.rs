use leptos::prelude::*;

use crate::typewriter::{TypewriterConfig, TypingSession};

#[cfg(feature = "hydrate")]
use browser::start_typewriter;

#[cfg(feature = "hydrate")]
mod browser {
    use std::{rc::Rc, time::Duration};

    use leptos::prelude::*;

    use crate::typewriter::{Timer, TimerError, Typewriter, TypingSession};

    /// `setTimeout` backed timer. Every expiry calls back into `on_fire`.
    struct TimeoutTimer {
        on_fire: Rc<dyn Fn()>,
    }

    impl Timer for TimeoutTimer {
        type Handle = TimeoutHandle;

        fn arm(&mut self, delay: Duration) -> Result<TimeoutHandle, TimerError> {
            let on_fire = Rc::clone(&self.on_fire);
            set_timeout_with_handle(move || on_fire(), delay)
                .map_err(|e| TimerError::Arm(format!("{e:?}")))
        }

        fn cancel(&mut self, handle: TimeoutHandle) {
            // clearTimeout ignores handles that already ran
            handle.clear();
        }
    }

    pub fn start_typewriter(session: TypingSession, set_text: WriteSignal<String>) {
        let engine = StoredValue::new_local(None::<Typewriter<TimeoutTimer>>);
        let on_fire = move || {
            engine.update_value(|tw| {
                if let Some(tw) = tw.as_mut() {
                    if tw.fire() {
                        set_text.set(tw.visible().to_string());
                    }
                }
            });
        };
        let mut tw = Typewriter::new(
            session,
            TimeoutTimer {
                on_fire: Rc::new(on_fire),
            },
        );
        tw.start();
        engine.set_value(Some(tw));

        on_cleanup(move || {
            engine.try_update_value(|tw| {
                if let Some(tw) = tw.as_mut() {
                    tw.teardown();
                }
            });
        });
    }
}

/// Cycles through `phrases`, typing and erasing one character at a time.
/// The caret is left to the caller.
#[component]
pub fn Typewriter(
    phrases: &'static [&'static str],
    #[prop(optional)] config: Option<TypewriterConfig>,
) -> impl IntoView {
    let session = TypingSession::new(phrases.iter().copied(), config.unwrap_or_default());
    let (text, set_text) = signal(session.visible().to_string());

    #[cfg(feature = "hydrate")]
    start_typewriter(session, set_text);
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, set_text);

    view! { <span class="typewriter inline-block">{text}</span> }
}
