pub mod link;

pub use crate::domain::model::{AccessToken, ProjectRef};
pub use crate::domain::ports::{ConfigProvider, ProjectApi, Storage, TokenSource};
pub use crate::utils::error::Result;
