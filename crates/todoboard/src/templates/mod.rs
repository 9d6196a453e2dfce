//! Template source implementations and page rendering.

mod render;
mod s3;

pub use render::{render_page, PageContext};
pub use s3::S3TemplateSource;

#[cfg(test)]
pub use test_source::StaticTemplateSource;

#[cfg(test)]
mod test_source {
    use async_trait::async_trait;
    use todoboard_core::template::{Result, TemplateSource};

    /// Template source serving a fixed string. Used in tests.
    pub struct StaticTemplateSource {
        source: String,
    }

    impl StaticTemplateSource {
        pub fn new(source: impl Into<String>) -> Self {
            Self {
                source: source.into(),
            }
        }
    }

    #[async_trait]
    impl TemplateSource for StaticTemplateSource {
        async fn fetch(&self) -> Result<String> {
            Ok(self.source.clone())
        }
    }
}
