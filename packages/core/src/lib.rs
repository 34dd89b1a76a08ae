pub mod article;
pub mod error;
pub mod settings;

pub use article::Article;
pub use error::{FolioError, FolioResult};
pub use settings::{ArticleSettings, ColorOption, ContentWidth, FontFamily, FontSize};
