use conduit_core::application::ports::util::SlugGenerator;

/// Deterministic slugs: lowercase alphanumeric words joined by `-`, without a
/// random suffix, so "Hello" becomes `hello`.
#[derive(Clone, Debug, Default)]
pub struct TitleSlug;

impl SlugGenerator for TitleSlug {
    fn slugify(&self, input: &str) -> String {
        input
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
