//! Article Pipeline
//!
//! Raw posts → canned-content articles → search filter → fixed-size pages.
//! Also decides what the gallery shows for a given fetch state.

use crate::fetch::FetchState;
use crate::models::{Post, User};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

const TITLES: [&str; 12] = [
    "Introduction to React Development",
    "TypeScript Best Practices Guide",
    "Building Scalable Web Applications",
    "Modern CSS Layout Techniques",
    "JavaScript Performance Optimization",
    "Responsive Design Fundamentals",
    "API Integration Strategies",
    "Component Architecture Patterns",
    "State Management Solutions",
    "Testing React Applications",
    "Web Accessibility Guidelines",
    "Progressive Web App Development",
];

const BODIES: [&str; 12] = [
    "Explore the latest techniques in modern web development, focusing on component-based architecture and efficient state management patterns for building robust applications.",
    "Learn essential strategies for building responsive and accessible web applications using current industry standards and proven methodologies.",
    "Discover advanced JavaScript concepts and learn how to apply them effectively in real-world development scenarios with practical examples.",
    "Master the art of creating maintainable and scalable code through proper design patterns and architectural decisions that stand the test of time.",
    "Understand the importance of performance optimization and learn how to implement effective caching, loading strategies, and user experience improvements.",
    "Dive deep into modern CSS features and learn how to create beautiful, responsive layouts with minimal code and maximum efficiency.",
    "Explore different approaches to API design and integration, including RESTful services, GraphQL implementations, and real-time data synchronization.",
    "Learn how to structure large applications using modular components and efficient data flow patterns for optimal maintainability.",
    "Understand various state management solutions and learn when to use each approach for optimal application performance and developer experience.",
    "Discover testing strategies and tools that ensure your applications are robust, reliable, and maintainable throughout their lifecycle.",
    "Learn the fundamentals of web accessibility and how to create inclusive experiences that work for all users regardless of their abilities.",
    "Explore the world of Progressive Web Apps and learn how to create app-like experiences that work seamlessly across all devices and platforms.",
];

/// Article with its displayed text replaced by the canned tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub author_id: i64,
    pub title: &'static str,
    pub body: &'static str,
}

impl Article {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            author_id: post.user_id,
            title: canned_title(post.id),
            body: canned_body(post.id),
        }
    }

    /// Case-insensitive substring match on title or body; empty term matches everything
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.body.to_lowercase().contains(&term)
    }
}

fn table_index(id: i64) -> usize {
    // 12 entries, so the cast cannot truncate
    (id - 1).rem_euclid(TITLES.len() as i64) as usize
}

pub fn canned_title(id: i64) -> &'static str {
    TITLES[table_index(id)]
}

pub fn canned_body(id: i64) -> &'static str {
    BODIES[table_index(id)]
}

/// First `limit` posts, remapped
pub fn process_posts(posts: &[Post], limit: usize) -> Vec<Article> {
    posts.iter().take(limit).map(Article::from_post).collect()
}

pub fn filter_articles(articles: &[Article], term: &str) -> Vec<Article> {
    articles.iter().filter(|a| a.matches(term)).cloned().collect()
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Consecutive groups of at most `page_size`
pub fn paginate<T: Clone>(items: &[T], page_size: usize) -> Vec<Vec<T>> {
    if page_size == 0 {
        return Vec::new();
    }
    let mut pages = Vec::with_capacity(page_count(items.len(), page_size));
    pages.extend(items.chunks(page_size).map(<[T]>::to_vec));
    pages
}

/// Author name for `author_id`, falling back when authors are missing or unmatched
pub fn author_name(users: Option<&[User]>, author_id: i64) -> String {
    users
        .and_then(|users| users.iter().find(|u| u.id == author_id))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Gallery limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryOptions {
    pub article_limit: usize,
    pub page_size: usize,
}

/// What the gallery renders
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// Articles fetch failed
    Failed(String),
    /// Either fetch still in flight
    Loading,
    /// Search matched nothing
    Empty,
    /// One inner vec per carousel slide
    Pages {
        pages: Vec<Vec<Article>>,
        matched: usize,
    },
}

impl GalleryView {
    /// Carousel slides; empty unless articles are ready
    pub fn pages(&self) -> &[Vec<Article>] {
        match self {
            GalleryView::Pages { pages, .. } => pages,
            _ => &[],
        }
    }

    pub fn matched(&self) -> usize {
        match self {
            GalleryView::Pages { matched, .. } => *matched,
            _ => 0,
        }
    }
}

pub fn gallery_view(
    posts: &FetchState<Vec<Post>>,
    users_loading: bool,
    term: &str,
    options: GalleryOptions,
) -> GalleryView {
    if let Some(error) = &posts.error {
        return GalleryView::Failed(error.clone());
    }
    if posts.loading || users_loading {
        return GalleryView::Loading;
    }
    let articles = process_posts(posts.data.as_deref().unwrap_or_default(), options.article_limit);
    let filtered = filter_articles(&articles, term);
    if filtered.is_empty() {
        return GalleryView::Empty;
    }
    GalleryView::Pages {
        matched: filtered.len(),
        pages: paginate(&filtered, options.page_size),
    }
}

/// "Showing N articles across P pages"
pub fn summary(matched: usize, pages: usize, searching: bool) -> String {
    let mut text = format!(
        "Showing {} articles across {} page{}",
        matched,
        pages,
        if pages == 1 { "" } else { "s" }
    );
    if searching {
        text.push_str(" (filtered by search term)");
    }
    text
}
