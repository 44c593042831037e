//! Article Browser Component
//!
//! Fetches posts and users, then shows the searchable, paginated gallery.
//! Only a posts failure is surfaced; missing users fall back to "Unknown Author".

use leptos::prelude::*;
use leptos_carousel::Carousel;

use crate::articles::{author_name, gallery_view, summary, Article, GalleryOptions, GalleryView};
use crate::components::{ArticleCard, Card, SkeletonCard};
use crate::config::use_config;
use crate::fetch::use_fetch;
use crate::models::{Post, User};

#[component]
pub fn ArticleBrowser() -> impl IntoView {
    let config = use_config();
    let options = GalleryOptions {
        article_limit: config.article_limit,
        page_size: config.page_size,
    };
    let skeleton_count = config.skeleton_count;

    let (search_term, set_search_term) = signal(String::new());
    let posts = use_fetch::<Vec<Post>>(Signal::stored(config.posts_url.clone()));
    let users = use_fetch::<Vec<User>>(Signal::stored(config.users_url.clone()));

    // Rebuilt on every keystroke and every fetch state change
    let gallery = Memo::new(move |_| {
        let term = search_term.get();
        posts.with(|posts| users.with(|users| gallery_view(posts, users.loading, &term, options)))
    });
    let posts_error = Memo::new(move |_| {
        gallery.with(|g| match g {
            GalleryView::Failed(error) => Some(error.clone()),
            _ => None,
        })
    });
    let is_loading = Memo::new(move |_| gallery.with(|g| matches!(g, GalleryView::Loading)));
    let has_pages = Memo::new(move |_| gallery.with(|g| !g.pages().is_empty()));
    let pages = Memo::new(move |_| gallery.with(|g| g.pages().to_vec()));

    Effect::new(move |_| {
        let page_total = pages.with(Vec::len);
        log::debug!("[ARTICLES] {} matches on {} pages", gallery.with_untracked(GalleryView::matched), page_total);
    });

    let author_of = move |article: &Article| users.with(|u| author_name(u.data.as_deref(), article.author_id));

    let render_page = move |page: Vec<Article>| {
        view! {
            <div class="carousel-slide">
                <div class="article-grid">
                    {page.into_iter().map(|article| {
                        let author = author_of(&article);
                        view! { <ArticleCard article=article author=author /> }
                    }).collect_view()}
                </div>
            </div>
        }
    };

    let gallery_body = move || {
        if is_loading.get() {
            view! {
                <div class="article-grid">
                    {(0..skeleton_count).map(|_| view! { <SkeletonCard /> }).collect_view()}
                </div>
            }
            .into_any()
        } else if !has_pages.get() {
            view! {
                <div class="article-empty">"No articles found matching your search."</div>
            }
            .into_any()
        } else {
            view! {
                <Carousel slide_count=Signal::derive(move || pages.with(Vec::len)) class="article-carousel">
                    <For
                        each=move || pages.get().into_iter().enumerate()
                        key=|(index, page)| (*index, page.iter().map(|a| a.id).collect::<Vec<_>>())
                        children=move |(_, page)| render_page(page)
                    />
                </Carousel>
                <div class="article-summary">
                    {move || gallery.with(|g| summary(g.matched(), g.pages().len(), !search_term.get().is_empty()))}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section id="api-demo" class="section api-section">
            <Show
                when=move || posts_error.with(Option::is_none)
                fallback=move || view! {
                    <div class="section-inner centered">
                        <h2>"API Demo"</h2>
                        <Card class="error-card">
                            <p>"Error loading posts: " {move || posts_error.get().unwrap_or_default()}</p>
                        </Card>
                    </div>
                }
            >
                <div class="section-inner">
                    <div class="section-header">
                        <h2>"Real API Data Integration"</h2>
                        <p>"12 unique articles from JSONPlaceholder API with search functionality and sliding carousel"</p>
                        <div class="search-box">
                            <span class="search-icon">"🔍"</span>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search articles by title or content..."
                                prop:value=move || search_term.get()
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    {gallery_body}
                </div>
            </Show>
        </section>
    }
}
