use super::{Variant, camel_join};

/// Computes the order in which a variant's dependency buckets are named and merged.
///
/// Top-bottom order lists every flavor alone, last-declared first, then the combined flavor
/// (only with two or more flavors), then the build type, then the full variant name (only with
/// at least one flavor). Bottom-top order is the exact reverse.
pub struct VariantPathResolver<'a> {
    variant: &'a Variant,
}

impl<'a> VariantPathResolver<'a> {
    pub fn new(variant: &'a Variant) -> Self {
        Self { variant }
    }

    pub fn top_bottom_path(&self) -> Vec<String> {
        let flavors = self.variant.flavors();
        let mut path = Vec::with_capacity(flavors.len() + 3);

        path.extend(flavors.iter().rev().cloned());
        if flavors.len() > 1 {
            path.push(camel_join(flavors.iter().map(String::as_str)));
        }
        path.push(self.variant.build_type().to_string());
        if !flavors.is_empty() {
            path.push(self.variant.name().to_string());
        }

        path
    }

    pub fn bottom_top_path(&self) -> Vec<String> {
        let mut path = self.top_bottom_path();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_bottom(name: &str, build_type: &str, flavors: &[&str]) -> Vec<String> {
        let variant = Variant::new(
            name,
            build_type,
            flavors.iter().map(|f| f.to_string()).collect(),
        )
        .unwrap();
        VariantPathResolver::new(&variant).top_bottom_path()
    }

    #[test]
    fn test_not_flavored_variant() {
        assert_eq!(top_bottom("debug", "debug", &[]), vec!["debug"]);
    }

    #[test]
    fn test_single_flavored_variant() {
        assert_eq!(
            top_bottom("demoRelease", "release", &["demo"]),
            vec!["demo", "release", "demoRelease"]
        );
    }

    #[test]
    fn test_two_flavored_variant() {
        assert_eq!(
            top_bottom("demoStableDebug", "debug", &["demo", "stable"]),
            vec!["stable", "demo", "demoStable", "debug", "demoStableDebug"]
        );
    }

    #[test]
    fn test_three_flavored_variant() {
        assert_eq!(
            top_bottom("fullStableAnimeRelease", "release", &["full", "stable", "anime"]),
            vec![
                "anime",
                "stable",
                "full",
                "fullStableAnime",
                "release",
                "fullStableAnimeRelease"
            ]
        );
    }

    #[test]
    fn test_bottom_top_is_reverse() {
        let variant =
            Variant::from_dimensions("debug", vec!["demo".into(), "stable".into()]).unwrap();
        let resolver = VariantPathResolver::new(&variant);

        let mut expected = resolver.top_bottom_path();
        expected.reverse();
        assert_eq!(resolver.bottom_top_path(), expected);
        assert_eq!(resolver.bottom_top_path().first().map(String::as_str), Some("demoStableDebug"));
    }
}
