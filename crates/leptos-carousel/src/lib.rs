//! Leptos Carousel Utilities
//!
//! Slide-per-page carousel for Leptos.
//! Prev/next controls never wrap around and are hidden when there is only one slide.

use leptos::prelude::*;

/// Navigation direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Carousel state signals
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    /// Currently visible slide
    pub index_read: ReadSignal<usize>,
    pub index_write: WriteSignal<usize>,
    /// Number of slides
    pub len_read: ReadSignal<usize>,
    pub len_write: WriteSignal<usize>,
}

pub fn create_carousel_signals() -> CarouselSignals {
    let (index_read, index_write) = signal(0usize);
    let (len_read, len_write) = signal(0usize);
    CarouselSignals {
        index_read,
        index_write,
        len_read,
        len_write,
    }
}

/// Keep `index` inside `0..len` (0 when there are no slides)
pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

/// Whether a move in `direction` from `index` stays inside `0..len`
pub fn can_go(index: usize, len: usize, direction: Direction) -> bool {
    let index = clamp_index(index, len);
    match direction {
        Direction::Prev => index > 0,
        Direction::Next => index + 1 < len,
    }
}

/// Index after one move in `direction`
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    let index = clamp_index(index, len);
    if !can_go(index, len, direction) {
        return index;
    }
    match direction {
        Direction::Prev => index - 1,
        Direction::Next => index + 1,
    }
}

/// Move one slide
pub fn go(carousel: &CarouselSignals, direction: Direction) {
    let len = carousel.len_read.get_untracked();
    let current = carousel.index_read.get_untracked();
    let next = step(current, len, direction);
    if next != current {
        carousel.index_write.set(next);
    }
}

/// Update the slide count, pulling the index back into range if it shrank
pub fn set_len(carousel: &CarouselSignals, len: usize) {
    if carousel.len_read.get_untracked() != len {
        carousel.len_write.set(len);
    }
    let current = carousel.index_read.get_untracked();
    let clamped = clamp_index(current, len);
    if clamped != current {
        carousel.index_write.set(clamped);
    }
}

/// Create click handler for a prev/next control
pub fn make_on_click(carousel: CarouselSignals, direction: Direction) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        go(&carousel, direction);
    }
}

/// Create keydown handler: ArrowLeft / ArrowRight move one slide
pub fn make_on_keydown(carousel: CarouselSignals) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        let direction = match ev.key().as_str() {
            "ArrowLeft" => Direction::Prev,
            "ArrowRight" => Direction::Next,
            _ => return,
        };
        ev.prevent_default();
        go(&carousel, direction);
    }
}

/// Horizontal carousel
///
/// Each direct child of the track is expected to be one `carousel-slide`.
///
/// # Arguments
/// * `slide_count` - Number of slides currently rendered by `children`
/// * `class` - Extra CSS class for the root element
#[component]
pub fn Carousel(
    #[prop(into)] slide_count: Signal<usize>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let carousel = create_carousel_signals();

    Effect::new(move |_| {
        set_len(&carousel, slide_count.get());
    });

    let track_style = move || {
        format!("transform: translateX(-{}%);", carousel.index_read.get() * 100)
    };
    let can_prev = move || can_go(carousel.index_read.get(), carousel.len_read.get(), Direction::Prev);
    let can_next = move || can_go(carousel.index_read.get(), carousel.len_read.get(), Direction::Next);

    view! {
        <div
            class=format!("carousel {}", class)
            role="region"
            aria-roledescription="carousel"
            tabindex="0"
            on:keydown=make_on_keydown(carousel)
        >
            <div class="carousel-viewport">
                <div class="carousel-track" style=track_style>
                    {children()}
                </div>
            </div>
            <Show when=move || { carousel.len_read.get() > 1 }>
                <button
                    class="carousel-prev"
                    aria-label="Previous slide"
                    disabled=move || !can_prev()
                    on:click=make_on_click(carousel, Direction::Prev)
                >
                    "‹"
                </button>
                <button
                    class="carousel-next"
                    aria-label="Next slide"
                    disabled=move || !can_next()
                    on:click=make_on_click(carousel, Direction::Next)
                >
                    "›"
                </button>
            </Show>
        </div>
    }
}
