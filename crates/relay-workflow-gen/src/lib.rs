mod cli;
mod config;
mod discovery;
mod run;

pub use cli::Cli;
pub use config::{
    load_generator_config, validate_generator_config, ConfigError, GeneratorConfig,
    ParameterConfig, ScheduleConfig,
};
pub use discovery::{DiscoveryError, Module, ModuleListFile, ModuleSource, StaticModules};
pub use run::{execute_generate, generate_workflow, GeneratorError};
