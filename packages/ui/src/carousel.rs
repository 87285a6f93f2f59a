//! Testimonial carousel for the auth screens.
//!
//! Cycles through a fixed list every 5 seconds; the indicator dots jump
//! straight to a slide.

use dioxus::prelude::*;

use crate::time::sleep_ms;

const SLIDE_MS: u64 = 5000;

/// One carousel slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
    pub image: String,
}

/// Index of the slide after `current`, wrapping at the end of the list.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> Element {
    let mut current = use_signal(|| 0usize);
    let len = testimonials.len();

    use_effect(move || {
        spawn(async move {
            loop {
                sleep_ms(SLIDE_MS).await;
                current.set(next_index(current(), len));
            }
        });
    });

    let Some(active) = testimonials.get(current() % len.max(1)).cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "carousel",
            div {
                key: "{current()}",
                class: "carousel-slide",
                div {
                    class: "carousel-author",
                    img {
                        class: "carousel-avatar",
                        src: "{active.image}",
                        alt: "{active.author}",
                    }
                    div {
                        p { class: "carousel-name", "{active.author}" }
                        p { class: "carousel-role", "{active.role}" }
                    }
                }
                p { class: "carousel-content", "{active.content}" }
            }
            div {
                class: "carousel-dots",
                for i in 0..len {
                    button {
                        key: "{i}",
                        class: if i == current() { "carousel-dot active" } else { "carousel-dot" },
                        onclick: move |_| current.set(i),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_next_index_empty_list() {
        assert_eq!(next_index(0, 0), 0);
    }
}
