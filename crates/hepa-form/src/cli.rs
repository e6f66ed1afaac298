use std::path::PathBuf;

use clap::Parser;

use hepa_features::derive::LogPolicy;
use hepa_scorer::loader::DEFAULT_MODEL_DIR;

#[derive(Debug, Parser)]
#[command(name = "hepa-form")]
#[command(about = "Liver disease outcome prediction form")]
#[command(version)]
pub struct Cli {
    /// Directory searched for model.json, then final_model.json
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,

    /// How log features treat non-positive inputs
    #[arg(long, default_value_t = LogPolicy::Strict)]
    pub log_policy: LogPolicy,

    /// Print the assembled feature vector before each prediction
    #[arg(long)]
    pub show_features: bool,
}
