//! UI Components
//!
//! Reusable Leptos components.

mod brand;
mod delete_confirm_button;
mod error_banner;
mod progress_bar;
mod signin_form;
mod signup_form;
mod task_empty;
mod task_form;
mod task_item;
mod task_list;

pub use brand::BrandMark;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use progress_bar::ProgressBar;
pub use signin_form::SignInForm;
pub use signup_form::SignUpForm;
pub use task_empty::TaskEmpty;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
