//! Article Card Components
//!
//! Gallery card for one article, plus the pulsing placeholder shown while loading.

use leptos::prelude::*;

use crate::articles::Article;
use crate::components::Card;

#[component]
pub fn ArticleCard(article: Article, #[prop(into)] author: String) -> impl IntoView {
    view! {
        <Card hover=true class="article-card">
            <h3 class="article-title">{article.title}</h3>
            <p class="article-body">{article.body}</p>
            <div class="article-meta">
                <span class="article-author">"👤 " {author}</span>
                <span class="article-number">"Article #" {article.id}</span>
            </div>
        </Card>
    }
}

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <Card class="skeleton-card">
            <div class="skeleton-line"></div>
            <div class="skeleton-line w-3-4"></div>
            <div class="skeleton-block">
                <div class="skeleton-line thin"></div>
                <div class="skeleton-line thin"></div>
                <div class="skeleton-line thin w-5-6"></div>
            </div>
            <div class="skeleton-meta">
                <div class="skeleton-line thin w-20"></div>
                <div class="skeleton-line thin w-16"></div>
            </div>
        </Card>
    }
}
