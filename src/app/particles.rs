use leptos::prelude::*;

use crate::particles::{ParticleConfig, ParticleField};

// server and client must render the same first frame
const SEED: u64 = 0x5eed;
const INITIAL_WIDTH: f64 = 1280.0;
const INITIAL_HEIGHT: f64 = 800.0;

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let field = StoredValue::new(ParticleField::new(
        ParticleConfig::default(),
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
        SEED,
    ));
    let frame = RwSignal::new(0u64);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_raf_fn, use_window_size, UseWindowSizeReturn};

        let UseWindowSizeReturn { width, height } = use_window_size();
        Effect::new(move |_| {
            let (w, h) = (width.get(), height.get());
            if w.is_finite() && h.is_finite() {
                field.update_value(|f| f.resize(w, h));
                frame.update(|n| *n += 1);
            }
        });

        let _ = use_raf_fn(move |args| {
            field.update_value(|f| f.step(args.delta / 1000.0));
            frame.update(|n| *n += 1);
        });
    }

    let view_box = move || {
        frame.track();
        field.with_value(|f| {
            let (w, h) = f.size();
            format!("0 0 {w:.0} {h:.0}")
        })
    };

    let scene = move || {
        frame.track();
        field.with_value(|f| {
            let particles = f.particles();
            let link_color = f.config().link_color;
            let links = f
                .links()
                .into_iter()
                .map(|l| {
                    let (a, b) = (&particles[l.from], &particles[l.to]);
                    view! {
                        <line
                            x1=format!("{:.1}", a.x)
                            y1=format!("{:.1}", a.y)
                            x2=format!("{:.1}", b.x)
                            y2=format!("{:.1}", b.y)
                            stroke=link_color
                            stroke-opacity=format!("{:.3}", l.opacity)
                            stroke-width="1"
                        />
                    }
                })
                .collect_view();
            let dots = particles
                .iter()
                .map(|p| {
                    view! {
                        <circle
                            cx=format!("{:.1}", p.x)
                            cy=format!("{:.1}", p.y)
                            r=format!("{:.1}", p.radius)
                            fill=p.color
                            fill-opacity=format!("{:.2}", p.opacity)
                        />
                    }
                })
                .collect_view();
            view! {
                <g>{links}</g>
                <g>{dots}</g>
            }
        })
    };

    view! {
        <svg
            class="absolute inset-0 w-full h-full"
            viewBox=view_box
            preserveAspectRatio="xMidYMid slice"
            aria-hidden="true"
        >
            {scene}
        </svg>
    }
}
