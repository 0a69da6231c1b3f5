//! Format handlers

mod json;
mod json5;
mod toml;
mod yaml;

pub use self::json::JsonHandler;
pub use self::json5::Json5Handler;
pub use self::toml::TomlHandler;
pub use self::yaml::YamlHandler;

use crate::format::{Format, FormatHandler};

/// The handler responsible for `format`
pub fn handler_for(format: Format) -> Box<dyn FormatHandler> {
    match format {
        Format::Json => Box::new(JsonHandler::new()),
        Format::Json5 => Box::new(Json5Handler::new()),
        Format::Toml => Box::new(TomlHandler::new()),
        Format::Yaml => Box::new(YamlHandler::new()),
    }
}
