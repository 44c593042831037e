//! UI Components
//!
//! Page sections and the reusable pieces they are built from.

mod article_browser;
mod article_card;
mod card;
mod hero;
mod layout;
mod task_filter_bar;
mod task_manager;
mod task_row;

pub use article_browser::ArticleBrowser;
pub use article_card::{ArticleCard, SkeletonCard};
pub use card::Card;
pub use hero::Hero;
pub use layout::Layout;
pub use task_filter_bar::TaskFilterBar;
pub use task_manager::TaskManager;
pub use task_row::TaskRow;
