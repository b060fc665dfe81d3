//! Environment source: CLUSTERCONF__STORE__PATH=... maps to `store.path`

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix("CLUSTERCONF").separator("__"))
}
