//! One-shot classification command

use std::path::PathBuf;

use anyhow::Result;

use tally_core::{CategoryResolver, ModelClassifier};

use super::resolve_model_dir;

pub fn cmd_classify(description: &str, model_dir: Option<PathBuf>, explain: bool) -> Result<()> {
    let dir = resolve_model_dir(model_dir);
    let resolver = CategoryResolver::new(ModelClassifier::from_dir(&dir));

    let resolution = resolver.resolve_detailed(description);
    if explain {
        println!("{} ({})", resolution.category, resolution.source);
    } else {
        println!("{}", resolution.category);
    }
    Ok(())
}
