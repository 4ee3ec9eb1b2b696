use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Index of the slide after stepping `delta` from `current`, wrapping at both ends.
pub fn step_slide(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

/// Full-width carousel over a list of image URLs.
#[component]
pub fn ImageSlider(
    images: Vec<String>,
    #[props(default = "h-[500px]".to_string())] height_class: String,
) -> Element {
    let mut index = use_signal(|| 0usize);
    let len = images.len();

    if len == 0 {
        return rsx! {};
    }
    let current = images[index().min(len - 1)].clone();

    rsx! {
        div {
            class: "relative w-full {height_class}",
            div {
                class: "w-full h-full",
                style: "background: url({current}) center no-repeat; background-size: cover;",
            }
            if len > 1 {
                button {
                    class: "absolute left-3 top-1/2 -translate-y-1/2 bg-white/70 rounded-full p-3",
                    onclick: move |_| index.set(step_slide(index(), -1, len)),
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
                button {
                    class: "absolute right-3 top-1/2 -translate-y-1/2 bg-white/70 rounded-full p-3",
                    onclick: move |_| index.set(step_slide(index(), 1, len)),
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
                div {
                    class: "absolute bottom-3 w-full flex justify-center gap-2",
                    for i in 0..len {
                        span {
                            key: "{i}",
                            class: if i == index() { "h-2 w-2 rounded-full bg-white" } else { "h-2 w-2 rounded-full bg-white/40" },
                        }
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
    fn test_step_slide_wraps() {
        assert_eq!(step_slide(0, -1, 3), 2);
        assert_eq!(step_slide(2, 1, 3), 0);
        assert_eq!(step_slide(1, 1, 3), 2);
        assert_eq!(step_slide(5, 1, 0), 0);
    }
}
