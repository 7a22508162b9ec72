use crate::render::style::Theme;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    paths: Paths,
    output: Output,
    #[serde(default)]
    map: MapView,
    #[serde(default)]
    render: Render,
    #[serde(default)]
    theme: Theme,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn render(&self) -> &Render {
        &self.render
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[derive(Debug, Deserialize)]
pub struct Paths {
    directory: String,
}

impl Paths {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    directory: String,
}

impl Output {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MapView {
    style_url: String,
    access_token: String,
    fit_padding: u32,
}

impl MapView {
    pub fn style_url(&self) -> &str {
        &self.style_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn fit_padding(&self) -> u32 {
        self.fit_padding
    }
}

impl Default for MapView {
    fn default() -> Self {
        MapView {
            style_url: "mapbox://styles/petermain/cjyzlw0av4grj1ck97d8r0yrk".to_string(),
            access_token: String::new(),
            fit_padding: 100,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Render {
    show_witnesses: bool,
}

impl Render {
    pub fn show_witnesses(&self) -> bool {
        self.show_witnesses
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                paths: Paths { directory: "paths".to_string() },
                output: Output { directory: "plans".to_string() },
                map: MapView::default(),
                render: Render::default(),
                theme: Theme::default(),
            },
        }
    }

    pub fn fit_padding(mut self, padding: u32) -> Self {
        self.config.map.fit_padding = padding;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
