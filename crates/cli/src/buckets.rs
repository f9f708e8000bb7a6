use weaver_core::variant::{BucketNames, ConfigurationGroup, Variant};

fn bucket_names(
    build_type: String,
    flavors: Vec<String>,
) -> weaver_core::Result<(Variant, Vec<BucketNames>)> {
    let variant = Variant::from_dimensions(build_type, flavors)?;
    let names = BucketNames::for_variant(&variant, &ConfigurationGroup::default());
    Ok((variant, names))
}

pub fn run(
    build_type: String,
    flavors: Vec<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (variant, names) = bucket_names(build_type, flavors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("Variant: {}", variant.name());
    for names in &names {
        println!(
            "{:<16} {} / {} / {}",
            names.path_element, names.bucket, names.consumable, names.resolvable
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_names_for_flavored_variant() {
        let (variant, names) = bucket_names("release".into(), vec!["paid".into()]).unwrap();

        assert_eq!(variant.name(), "paidRelease");
        let buckets: Vec<_> = names.iter().map(|n| n.bucket.as_str()).collect();
        assert_eq!(
            buckets,
            vec!["weaverPaidBucket", "weaverReleaseBucket", "weaverPaidReleaseBucket"]
        );
    }

    #[test]
    fn test_empty_build_type_is_rejected() {
        assert!(bucket_names(String::new(), vec![]).is_err());
    }
}
