use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct DataConfig {
    /// Root folder holding one CSV folder per IDE
    #[arg(long, default_value = "shortcut_csvs")]
    pub data_dir: PathBuf,

    /// Seed for topic and question picks (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("shortcut_csvs"),
            seed: None,
        }
    }
}

impl DataConfig {
    pub fn rng(&self) -> fastrand::Rng {
        if let Some(s) = self.seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        }
    }
}
