pub mod csrf_field;
pub mod error;
pub mod loading;
pub mod navbar;

pub use csrf_field::CsrfField;
pub use error::ErrorView;
pub use loading::LoadingView;
pub use navbar::Navbar;
